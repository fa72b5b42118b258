use crate::core::filter::{Filterable, RecordValue};
use crate::core::link::Link;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Network
-------------------------------------------------------------------------------------------------*/

/// Fabric network record. A network groups connections under an owning account.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network identifier.
    pub id: String,

    /// API location of the network.
    pub href: String,

    /// Network display name.
    pub name: String,

    /// Network description.
    pub description: String,

    /// Link to the owning account.
    pub account: Option<Link>,

    /// Provisioning state of the network.
    pub state: Rc<str>,

    /// User-assigned tags.
    pub tags: BTreeMap<String, String>,
}

impl Filterable for Network {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Href", RecordValue::from(self.href.as_str())),
            ("Name", RecordValue::from(self.name.as_str())),
            ("Description", RecordValue::from(self.description.as_str())),
            (
                "Account",
                self.account
                    .as_ref()
                    .map_or(RecordValue::Absent, Link::document),
            ),
            ("State", RecordValue::from(self.state.as_ref())),
            ("Tags", RecordValue::from(&self.tags)),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::link::tests::test_link;

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    pub(crate) fn test_network() -> Network {
        Network {
            id: "network-1".to_string(),
            href: "/networks/network-1".to_string(),
            name: "Production".to_string(),
            description: "Production network".to_string(),
            account: Some(test_link("account-1", "Testing 1")),
            state: Rc::from("ACTIVE"),
            tags: [("environment".to_string(), "production".to_string())]
                .into_iter()
                .collect(),
        }
    }

    /*----------------------------------------------------------------------------------
      Network
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_network_document() {
        let network = test_network();
        let document = network.document();

        assert_eq!(
            document.resolve("Account.Title"),
            &RecordValue::from("Testing 1")
        );
        assert_eq!(document.resolve("State"), &RecordValue::from("ACTIVE"));
        assert_eq!(
            document.resolve("Tags.environment"),
            &RecordValue::from("production")
        );
    }

    #[test]
    fn test_network_document_without_account() {
        let network = Network {
            account: None,
            ..test_network()
        };
        let document = network.document();

        assert_eq!(document.resolve("Account.Title"), &RecordValue::Absent);
    }
}
