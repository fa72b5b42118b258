use crate::core::filter::{Filterable, RecordValue};
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Link
-------------------------------------------------------------------------------------------------*/

/// Reference to a related fabric resource: its identifier, API location, and display
/// title. Nested filter paths (for example `Location.Title`) resolve through links.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Identifier of the referenced resource.
    pub id: String,

    /// API location of the referenced resource.
    pub href: String,

    /// Display title of the referenced resource.
    pub title: String,
}

impl Filterable for Link {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Href", RecordValue::from(self.href.as_str())),
            ("Title", RecordValue::from(self.title.as_str())),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
