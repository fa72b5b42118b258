use crate::cli::utils::{format_link, format_tags};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use netfabric::{
    Account, CloudRegion, CloudService, Connection, Inventory, Location, Network, Result,
};

/*-------------------------------------------------------------------------------------------------
  Tabular Records
-------------------------------------------------------------------------------------------------*/

/// Display surface for a record collection: table headers and rows plus the identifier
/// and display name used by the plain listing formats.
pub trait Tabular {
    fn label() -> &'static str;
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
}

impl Tabular for Account {
    fn label() -> &'static str {
        "Accounts"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Description", "Tags"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            format_tags(&self.tags),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Tabular for Network {
    fn label() -> &'static str {
        "Networks"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Account", "State", "Tags"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_link(&self.account),
            self.state.to_string(),
            format_tags(&self.tags),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Tabular for Connection {
    fn label() -> &'static str {
        "Connections"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Type", "Speed", "State", "Location", "HA", "Tags"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.connection_type.to_string(),
            self.speed.to_string(),
            self.state.to_string(),
            format_link(&self.location),
            self.high_availability.to_string(),
            format_tags(&self.tags),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Tabular for Location {
    fn label() -> &'static str {
        "Locations"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "State/Province", "Country"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.state_province.clone(),
            self.country.clone(),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Tabular for CloudRegion {
    fn label() -> &'static str {
        "Cloud Regions"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Provider", "Display Name", "Geographical Region"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.provider.to_string(),
            self.display_name.clone(),
            self.geographical_region.clone(),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for CloudService {
    fn label() -> &'static str {
        "Cloud Services"
    }

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Provider", "Service", "IPv4 Prefixes", "IPv6 Prefixes"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.provider.to_string(),
            self.service.clone(),
            self.ipv4_prefix_count.to_string(),
            self.ipv6_prefix_count.to_string(),
        ]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Resource Table
--------------------------------------------------------------------------------------*/

pub fn resource_table<T: Tabular>(records: &[T], summary: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        T::headers()
            .into_iter()
            .map(|header| {
                Cell::new(header)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Green)
            })
            .collect::<Vec<Cell>>(),
    );

    for record in records {
        table.add_row(record.row());
    }

    println!("{table}");

    if summary {
        count_summary(records.len(), T::label());
    }
}

fn count_summary(count: usize, label: &str) {
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(count), Cell::new(label)]);

    let summary_numbers_column = summary_table.column_mut(0).expect("The first column exists");
    summary_numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Inventory Summary
--------------------------------------------------------------------------------------*/

pub fn inventory_summary(inventory: &Inventory) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Collection")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Records")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    table.add_row(vec![
        Cell::new("Accounts"),
        Cell::new(inventory.accounts().len()),
    ]);
    table.add_row(vec![
        Cell::new("Networks"),
        Cell::new(inventory.networks().len()),
    ]);
    table.add_row(vec![
        Cell::new("Connections"),
        Cell::new(inventory.connections().len()),
    ]);
    table.add_row(vec![
        Cell::new("Locations"),
        Cell::new(inventory.locations().len()),
    ]);
    table.add_row(vec![
        Cell::new("Cloud Regions"),
        Cell::new(inventory.cloud_regions().len()),
    ]);
    table.add_row(vec![
        Cell::new("Cloud Services"),
        Cell::new(inventory.cloud_services().len()),
    ]);

    let records_column = table.column_mut(1).expect("The records column exists");
    records_column.set_cell_alignment(CellAlignment::Right);

    println!("{table}");

    let mut details_table = Table::new();
    details_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    details_table.add_row(vec![Cell::new("Sync Token"), Cell::new(inventory.sync_token())]);
    details_table.add_row(vec![
        Cell::new("Generated At"),
        Cell::new(inventory.generated_at()),
    ]);
    details_table.add_row(vec![
        Cell::new("Fingerprint"),
        Cell::new(inventory.fingerprint()),
    ]);

    println!("{details_table}");
}

/*--------------------------------------------------------------------------------------
  JSON Output
--------------------------------------------------------------------------------------*/

pub fn json<T: serde::Serialize>(records: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Identifier and Name Listings
--------------------------------------------------------------------------------------*/

pub fn ids<T: Tabular>(records: &[T]) {
    for record in records {
        println!("{}", record.id());
    }
}

pub fn names<T: Tabular>(records: &[T]) {
    for record in records {
        println!("{}", record.display_name());
    }
}
