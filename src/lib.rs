//! # netfabric
//!
//! Quickly retrieve, query, and filter the resource inventory published by a cloud
//! network-interconnection ("fabric") API: accounts, networks, connections of several
//! cloud-provider flavors, fabric locations, cloud regions, and cloud services.
//!
//! The library retrieves the inventory snapshot JSON from the fabric URL, caching the
//! data locally to speed up requests and reduce load on the API. The parsed [Inventory]
//! exposes each record collection along with per-collection filter methods built on a
//! generic field-path filter engine: named, possibly nested, regex-based criteria applied
//! uniformly across the heterogeneous record types.
//!
//! ## Getting the inventory
//!
//! Use the [get_inventory] simple interface to retrieve the inventory with the default
//! client configuration, or build a [Client] for custom configuration:
//!
//! ```no_run
//! # fn main() -> netfabric::Result<()> {
//! let inventory = netfabric::get_inventory()?;
//!
//! let client = netfabric::ClientBuilder::new()
//!     .cache_time(60 * 60) // 1 hour
//!     .build();
//! let inventory = client.get_inventory()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Filtering records
//!
//! A [FilterCriterion] names a dotted field path and a list of regular-expression
//! patterns. A record is retained when it satisfies **every** criterion; a criterion is
//! satisfied when the resolved field value matches **any** of its patterns (unanchored
//! regex search). Field paths resolve through nested records (`Location.Title`) and one
//! level of string-keyed tag maps (`Tags.environment`):
//!
//! ```no_run
//! # fn main() -> netfabric::Result<()> {
//! let inventory = netfabric::get_inventory()?;
//!
//! let criteria = vec![
//!     netfabric::FilterCriterion::new("Location.Title", ["Raleigh", "Seattle"]),
//!     netfabric::FilterCriterion::new("State", ["ACTIVE"]),
//! ];
//! let connections = inventory.filter_connections(&criteria)?;
//! # Ok(())
//! # }
//! ```
//!
//! Unknown field paths and unset fields are not errors: they resolve to an absent value,
//! the owning criterion never matches, and the affected records are simply excluded. A
//! malformed regular expression, by contrast, fails the filtering pass immediately.
//!
//! The filter engine is exposed directly as [apply_criteria] for use with your own
//! [Filterable] record types.

/*-------------------------------------------------------------------------------------------------
  Library Modules and Interface
-------------------------------------------------------------------------------------------------*/

mod core;

pub use crate::core::account::Account;
pub use crate::core::client::{get_inventory, Client, ClientBuilder};
pub use crate::core::cloud_region::CloudRegion;
pub use crate::core::cloud_service::CloudService;
pub use crate::core::connection::{Connection, CustomerNetwork};
pub use crate::core::connection_type::ConnectionType;
pub use crate::core::errors::{Error, Result};
pub use crate::core::filter::{apply_criteria, FilterCriterion, Filterable, RecordValue};
pub use crate::core::inventory::Inventory;
pub use crate::core::link::Link;
pub use crate::core::location::{GeoCoordinates, Location};
pub use crate::core::network::Network;
