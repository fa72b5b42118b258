use crate::core::connection_type::ConnectionType;
use crate::core::filter::{Filterable, RecordValue};
use crate::core::link::Link;
use ipnetwork::IpNetwork;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Connection
-------------------------------------------------------------------------------------------------*/

/// Fabric connection record: a provisioned interconnect of one of the supported
/// cloud-provider flavors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Connection identifier.
    pub id: String,

    /// API location of the connection.
    pub href: String,

    /// Connection display name.
    pub name: String,

    /// Connection description.
    pub description: String,

    /// Cloud-provider flavor of the connection.
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,

    /// Provisioned speed in Mbps.
    pub speed: i64,

    /// Provisioning state of the connection.
    pub state: Rc<str>,

    /// Link to the fabric location hosting the connection.
    pub location: Option<Link>,

    /// Link to the owning network.
    pub network: Option<Link>,

    /// Whether the connection is provisioned as a redundant pair.
    pub high_availability: bool,

    /// Customer-side networks advertised over the connection.
    pub customer_networks: Vec<CustomerNetwork>,

    /// User-assigned tags.
    pub tags: BTreeMap<String, String>,
}

impl Filterable for Connection {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Href", RecordValue::from(self.href.as_str())),
            ("Name", RecordValue::from(self.name.as_str())),
            ("Description", RecordValue::from(self.description.as_str())),
            ("Type", RecordValue::from(self.connection_type.as_str())),
            ("Speed", RecordValue::from(self.speed)),
            ("State", RecordValue::from(self.state.as_ref())),
            (
                "Location",
                self.location
                    .as_ref()
                    .map_or(RecordValue::Absent, Link::document),
            ),
            (
                "Network",
                self.network
                    .as_ref()
                    .map_or(RecordValue::Absent, Link::document),
            ),
            ("HighAvailability", RecordValue::from(self.high_availability)),
            (
                "CustomerNetworks",
                RecordValue::List(
                    self.customer_networks
                        .iter()
                        .map(CustomerNetwork::document)
                        .collect(),
                ),
            ),
            ("Tags", RecordValue::from(&self.tags)),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Customer Network
-------------------------------------------------------------------------------------------------*/

/// A customer-side network advertised over a connection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNetwork {
    /// Display name of the customer network.
    pub name: String,

    /// CIDR address of the customer network.
    pub address: IpNetwork,
}

impl Filterable for CustomerNetwork {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Name", RecordValue::from(self.name.as_str())),
            ("Address", RecordValue::from(self.address.to_string())),
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

    pub(crate) fn test_connection() -> Connection {
        Connection {
            id: "conn-1".to_string(),
            href: "/connections/conn-1".to_string(),
            name: "Raleigh AWS".to_string(),
            description: "Primary AWS interconnect".to_string(),
            connection_type: ConnectionType::Aws,
            speed: 50,
            state: Rc::from("ACTIVE"),
            location: Some(test_link("loc-ral", "Raleigh")),
            network: Some(test_link("network-1", "Production")),
            high_availability: true,
            customer_networks: vec![CustomerNetwork {
                name: "datacenter".to_string(),
                address: "10.10.0.0/16".parse().unwrap(),
            }],
            tags: [("environment".to_string(), "production".to_string())]
                .into_iter()
                .collect(),
        }
    }

    pub(crate) fn test_connections() -> Vec<Connection> {
        vec![
            test_connection(),
            Connection {
                id: "conn-2".to_string(),
                name: "San Jose Azure".to_string(),
                description: "Secondary Azure interconnect".to_string(),
                connection_type: ConnectionType::Azure,
                speed: 100,
                location: Some(test_link("loc-sjc", "San Jose")),
                high_availability: false,
                ..test_connection()
            },
            Connection {
                id: "conn-3".to_string(),
                name: "Seattle Google".to_string(),
                description: "Tertiary Google Cloud interconnect".to_string(),
                connection_type: ConnectionType::GoogleCloud,
                speed: 50,
                state: Rc::from("PROVISIONING"),
                location: Some(test_link("loc-sea", "Seattle")),
                ..test_connection()
            },
            Connection {
                id: "conn-4".to_string(),
                name: "Branch VPN".to_string(),
                description: "Site-to-site VPN".to_string(),
                connection_type: ConnectionType::SiteIpsecVpn,
                speed: 10,
                location: None,
                network: None,
                high_availability: false,
                customer_networks: Vec::new(),
                ..test_connection()
            },
        ]
    }

    /*----------------------------------------------------------------------------------
      Connection
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_connection_document() {
        let connection = test_connection();
        let document = connection.document();

        assert_eq!(document.resolve("Type"), &RecordValue::from("AWS"));
        assert_eq!(document.resolve("Speed"), &RecordValue::from(50i64));
        assert_eq!(
            document.resolve("Location.Title"),
            &RecordValue::from("Raleigh")
        );
        assert_eq!(
            document.resolve("HighAvailability"),
            &RecordValue::from(true)
        );
    }

    #[test]
    fn test_connection_serializes_wire_type_field() {
        let connection = test_connection();
        let json = serde_json::to_string(&connection).unwrap();

        assert!(json.contains(r#""type":"AWS""#));
        assert!(json.contains(r#""highAvailability":true"#));
        assert!(json.contains(r#""customerNetworks""#));
    }
}
