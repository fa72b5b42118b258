use crate::core::filter::{Filterable, RecordValue};
use serde::Serialize;
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Account
-------------------------------------------------------------------------------------------------*/

/// Fabric account record.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: String,

    /// API location of the account.
    pub href: String,

    /// Account display name.
    pub name: String,

    /// Account description.
    pub description: String,

    /// User-assigned tags.
    pub tags: BTreeMap<String, String>,
}

impl Filterable for Account {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Href", RecordValue::from(self.href.as_str())),
            ("Name", RecordValue::from(self.name.as_str())),
            ("Description", RecordValue::from(self.description.as_str())),
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

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    pub(crate) fn test_accounts() -> Vec<Account> {
        let ordinals = ["First", "Second", "Third"];

        (1..=3)
            .map(|index| Account {
                id: format!("account-{index}"),
                href: format!("/accounts/account-{index}"),
                name: format!("Testing {index}"),
                description: format!("{} Test Account", ordinals[index - 1]),
                tags: [("some_name".to_string(), format!("value{index}"))]
                    .into_iter()
                    .collect(),
            })
            .collect()
    }

    /*----------------------------------------------------------------------------------
      Account
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_account_document() {
        let account = &test_accounts()[0];
        let document = account.document();

        assert_eq!(document.resolve("Name"), &RecordValue::from("Testing 1"));
        assert_eq!(
            document.resolve("Description"),
            &RecordValue::from("First Test Account")
        );
        assert_eq!(
            document.resolve("Tags.some_name"),
            &RecordValue::from("value1")
        );
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = &test_accounts()[0];
        let json = serde_json::to_string(account).unwrap();

        assert!(json.contains(r#""id":"account-1""#));
        assert!(json.contains(r#""name":"Testing 1""#));
        assert!(json.contains(r#""tags":{"some_name":"value1"}"#));
    }
}
