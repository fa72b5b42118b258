use crate::core::account::Account;
use crate::core::cloud_region::CloudRegion;
use crate::core::cloud_service::CloudService;
use crate::core::connection::{Connection, CustomerNetwork};
use crate::core::errors::Result;
use crate::core::filter::{self, FilterCriterion};
use crate::core::json;
use crate::core::link::Link;
use crate::core::location::{GeoCoordinates, Location};
use crate::core::network::Network;
use crate::core::utils;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Inventory
-------------------------------------------------------------------------------------------------*/

/// A point-in-time snapshot of the fabric inventory: every record collection published by
/// the fabric API, plus the interned sets of providers and provisioning states represented
/// in the snapshot. Per-collection `filter_*` methods apply [FilterCriterion] sets and
/// return the matching records in display order.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub(crate) sync_token: String,
    pub(crate) generated_at: DateTime<Utc>,

    pub(crate) accounts: Vec<Account>,
    pub(crate) networks: Vec<Network>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) locations: Vec<Location>,
    pub(crate) cloud_regions: Vec<CloudRegion>,
    pub(crate) cloud_services: Vec<CloudService>,

    pub(crate) providers: BTreeSet<Rc<str>>,
    pub(crate) states: BTreeSet<Rc<str>>,
}

/*--------------------------------------------------------------------------------------
  Inventory Implementation
--------------------------------------------------------------------------------------*/

impl Inventory {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Opaque publication token of the current inventory snapshot.
    pub fn sync_token(&self) -> &str {
        &self.sync_token
    }

    /// Publication time of the current inventory snapshot in UTC `DateTime` format.
    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    /// Accounts in the inventory snapshot.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Networks in the inventory snapshot.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// Connections in the inventory snapshot.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Fabric locations in the inventory snapshot.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Cloud regions in the inventory snapshot.
    pub fn cloud_regions(&self) -> &[CloudRegion] {
        &self.cloud_regions
    }

    /// Cloud services in the inventory snapshot.
    pub fn cloud_services(&self) -> &[CloudService] {
        &self.cloud_services
    }

    /// Cloud providers represented in the inventory snapshot.
    pub fn providers(&self) -> &BTreeSet<Rc<str>> {
        &self.providers
    }

    /// Provisioning states represented in the inventory snapshot.
    pub fn states(&self) -> &BTreeSet<Rc<str>> {
        &self.states
    }

    /*-------------------------------------------------------------------------
      Get Reference Counted Strings
    -------------------------------------------------------------------------*/

    /// Get a reference-counted string (`Rc<str>`) provider for the provided provider name.
    pub fn get_provider(&self, value: &str) -> Option<Rc<str>> {
        utils::get_rc_str_from_set(value, &self.providers)
    }

    /// Get a reference-counted string (`Rc<str>`) state for the provided state name.
    pub fn get_state(&self, value: &str) -> Option<Rc<str>> {
        utils::get_rc_str_from_set(value, &self.states)
    }

    /*-------------------------------------------------------------------------
      Filter
    -------------------------------------------------------------------------*/

    /// Filter the accounts, sorted by name.
    pub fn filter_accounts(&self, criteria: &[FilterCriterion]) -> Result<Vec<Account>> {
        let mut accounts = filter::apply_criteria(&self.accounts, criteria)?;
        accounts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(accounts)
    }

    /// Filter the networks, sorted by name.
    pub fn filter_networks(&self, criteria: &[FilterCriterion]) -> Result<Vec<Network>> {
        let mut networks = filter::apply_criteria(&self.networks, criteria)?;
        networks.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(networks)
    }

    /// Filter the connections, sorted by name.
    pub fn filter_connections(&self, criteria: &[FilterCriterion]) -> Result<Vec<Connection>> {
        let mut connections = filter::apply_criteria(&self.connections, criteria)?;
        connections.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(connections)
    }

    /// Filter the fabric locations, sorted by title.
    pub fn filter_locations(&self, criteria: &[FilterCriterion]) -> Result<Vec<Location>> {
        let mut locations = filter::apply_criteria(&self.locations, criteria)?;
        locations.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        Ok(locations)
    }

    /// Filter the cloud regions, sorted by display name.
    pub fn filter_cloud_regions(&self, criteria: &[FilterCriterion]) -> Result<Vec<CloudRegion>> {
        let mut cloud_regions = filter::apply_criteria(&self.cloud_regions, criteria)?;
        cloud_regions.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(cloud_regions)
    }

    /// Filter the cloud services, sorted by name.
    pub fn filter_cloud_services(&self, criteria: &[FilterCriterion]) -> Result<Vec<CloudService>> {
        let mut cloud_services = filter::apply_criteria(&self.cloud_services, criteria)?;
        cloud_services.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(cloud_services)
    }

    /*-------------------------------------------------------------------------
      Fingerprint
    -------------------------------------------------------------------------*/

    /// Deterministic identifier of the unfiltered inventory snapshot, computed over the
    /// sync token and every record identifier. Two snapshots with the same content produce
    /// the same fingerprint, so callers can detect an unchanged refresh.
    pub fn fingerprint(&self) -> String {
        let mut hasher = DefaultHasher::new();

        self.sync_token.hash(&mut hasher);
        self.accounts.iter().for_each(|record| record.id.hash(&mut hasher));
        self.networks.iter().for_each(|record| record.id.hash(&mut hasher));
        self.connections.iter().for_each(|record| record.id.hash(&mut hasher));
        self.locations.iter().for_each(|record| record.id.hash(&mut hasher));
        self.cloud_regions.iter().for_each(|record| record.id.hash(&mut hasher));
        self.cloud_services.iter().for_each(|record| record.id.hash(&mut hasher));

        format!("{:016x}", hasher.finish())
    }

    /*-------------------------------------------------------------------------
      (Internal) Inventory from JSON
    -------------------------------------------------------------------------*/

    pub(crate) fn from_json(json: &str) -> Result<Box<Inventory>> {
        let json_inventory = json::parse(json)?;

        let mut inventory = Box::new(Inventory::default());

        inventory.sync_token = json_inventory.sync_token.to_string();
        inventory.generated_at = json_inventory.generated_at;

        // Intern the open-set strings first so every record shares one allocation per
        // provider and state value.
        inventory.providers = json_inventory
            .cloud_regions
            .iter()
            .map(|cloud_region| cloud_region.provider)
            .chain(
                json_inventory
                    .cloud_services
                    .iter()
                    .map(|cloud_service| cloud_service.provider),
            )
            .map(Rc::from)
            .collect();

        inventory.states = json_inventory
            .networks
            .iter()
            .map(|network| network.state)
            .chain(
                json_inventory
                    .connections
                    .iter()
                    .map(|connection| connection.state),
            )
            .map(Rc::from)
            .collect();

        inventory.accounts = json_inventory
            .accounts
            .iter()
            .map(|json_account| Account {
                id: json_account.id.to_string(),
                href: json_account.href.to_string(),
                name: json_account.name.to_string(),
                description: json_account.description.to_string(),
                tags: json_account.tags.clone(),
            })
            .collect();

        inventory.networks = json_inventory
            .networks
            .iter()
            .map(|json_network| Network {
                id: json_network.id.to_string(),
                href: json_network.href.to_string(),
                name: json_network.name.to_string(),
                description: json_network.description.to_string(),
                account: json_network.account.as_ref().map(link_from_json),
                state: utils::get_rc_str_from_set(json_network.state, &inventory.states).unwrap(),
                tags: json_network.tags.clone(),
            })
            .collect();

        inventory.connections = json_inventory
            .connections
            .iter()
            .map(|json_connection| {
                Ok(Connection {
                    id: json_connection.id.to_string(),
                    href: json_connection.href.to_string(),
                    name: json_connection.name.to_string(),
                    description: json_connection.description.to_string(),
                    connection_type: json_connection.connection_type.parse()?,
                    speed: json_connection.speed,
                    state: utils::get_rc_str_from_set(json_connection.state, &inventory.states)
                        .unwrap(),
                    location: json_connection.location.as_ref().map(link_from_json),
                    network: json_connection.network.as_ref().map(link_from_json),
                    high_availability: json_connection.high_availability,
                    customer_networks: json_connection
                        .customer_networks
                        .iter()
                        .map(|json_customer_network| CustomerNetwork {
                            name: json_customer_network.name.to_string(),
                            address: json_customer_network.address,
                        })
                        .collect(),
                    tags: json_connection.tags.clone(),
                })
            })
            .collect::<Result<_>>()?;

        inventory.locations = json_inventory
            .locations
            .iter()
            .map(|json_location| Location {
                id: json_location.id.to_string(),
                href: json_location.href.to_string(),
                title: json_location.title.to_string(),
                state_province: json_location.state_province.to_string(),
                country: json_location.country.to_string(),
                geo_coordinates: json_location.geo_coordinates.as_ref().map(
                    |json_geo_coordinates| GeoCoordinates {
                        latitude: json_geo_coordinates.latitude,
                        longitude: json_geo_coordinates.longitude,
                    },
                ),
            })
            .collect();

        inventory.cloud_regions = json_inventory
            .cloud_regions
            .iter()
            .map(|json_cloud_region| CloudRegion {
                id: json_cloud_region.id.to_string(),
                provider: utils::get_rc_str_from_set(
                    json_cloud_region.provider,
                    &inventory.providers,
                )
                .unwrap(),
                display_name: json_cloud_region.display_name.to_string(),
                geographical_region: json_cloud_region.geographical_region.to_string(),
            })
            .collect();

        inventory.cloud_services = json_inventory
            .cloud_services
            .iter()
            .map(|json_cloud_service| CloudService {
                id: json_cloud_service.id.to_string(),
                name: json_cloud_service.name.to_string(),
                provider: utils::get_rc_str_from_set(
                    json_cloud_service.provider,
                    &inventory.providers,
                )
                .unwrap(),
                service: json_cloud_service.service.to_string(),
                ipv4_prefix_count: json_cloud_service.ipv4_prefix_count,
                ipv6_prefix_count: json_cloud_service.ipv6_prefix_count,
            })
            .collect();

        Ok(inventory)
    }
}

/*--------------------------------------------------------------------------------------
  Helper Functions
--------------------------------------------------------------------------------------*/

fn link_from_json(json_link: &json::JsonLink) -> Link {
    Link {
        id: json_link.id.to_string(),
        href: json_link.href.to_string(),
        title: json_link.title.to_string(),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
