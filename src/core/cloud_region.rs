use crate::core::filter::{Filterable, RecordValue};
use serde::Serialize;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Cloud Region
-------------------------------------------------------------------------------------------------*/

/// Cloud-provider region reachable over the fabric.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudRegion {
    /// Region identifier.
    pub id: String,

    /// Cloud provider publishing the region.
    pub provider: Rc<str>,

    /// Region display name.
    pub display_name: String,

    /// Geographical region grouping.
    pub geographical_region: String,
}

impl Filterable for CloudRegion {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Provider", RecordValue::from(self.provider.as_ref())),
            ("DisplayName", RecordValue::from(self.display_name.as_str())),
            (
                "GeographicalRegion",
                RecordValue::from(self.geographical_region.as_str()),
            ),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
