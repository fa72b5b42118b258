use crate::core::errors::Result;
use chrono::{DateTime, Utc};
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonInventory<'_>> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON Inventory
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct JsonInventory<'j> {
    #[serde(rename = "syncToken")]
    pub sync_token: &'j str,

    #[serde(rename = "generatedAt", with = "crate::core::datetime")]
    pub generated_at: DateTime<Utc>,

    pub accounts: Vec<JsonAccount<'j>>,

    pub networks: Vec<JsonNetwork<'j>>,

    pub connections: Vec<JsonConnection<'j>>,

    pub locations: Vec<JsonLocation<'j>>,

    #[serde(rename = "cloudRegions")]
    pub cloud_regions: Vec<JsonCloudRegion<'j>>,

    #[serde(rename = "cloudServices")]
    pub cloud_services: Vec<JsonCloudService<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON Link
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonLink<'j> {
    pub id: &'j str,
    pub href: &'j str,
    pub title: &'j str,
}

/*--------------------------------------------------------------------------------------
  JSON Account
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonAccount<'j> {
    pub id: &'j str,
    pub href: &'j str,
    pub name: &'j str,
    pub description: &'j str,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/*--------------------------------------------------------------------------------------
  JSON Network
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonNetwork<'j> {
    pub id: &'j str,
    pub href: &'j str,
    pub name: &'j str,
    pub description: &'j str,

    #[serde(borrow)]
    pub account: Option<JsonLink<'j>>,

    pub state: &'j str,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/*--------------------------------------------------------------------------------------
  JSON Connection
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonConnection<'j> {
    pub id: &'j str,
    pub href: &'j str,
    pub name: &'j str,
    pub description: &'j str,

    #[serde(rename = "type")]
    pub connection_type: &'j str,

    pub speed: i64,
    pub state: &'j str,

    #[serde(borrow)]
    pub location: Option<JsonLink<'j>>,

    #[serde(borrow)]
    pub network: Option<JsonLink<'j>>,

    #[serde(rename = "highAvailability", default)]
    pub high_availability: bool,

    #[serde(rename = "customerNetworks", default)]
    pub customer_networks: Vec<JsonCustomerNetwork<'j>>,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/*--------------------------------------------------------------------------------------
  JSON Customer Network
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonCustomerNetwork<'j> {
    pub name: &'j str,
    pub address: IpNetwork,
}

/*--------------------------------------------------------------------------------------
  JSON Location
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct JsonLocation<'j> {
    pub id: &'j str,
    pub href: &'j str,
    pub title: &'j str,

    #[serde(rename = "stateProvince")]
    pub state_province: &'j str,

    pub country: &'j str,

    #[serde(rename = "geoCoordinates")]
    pub geo_coordinates: Option<JsonGeoCoordinates>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct JsonGeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/*--------------------------------------------------------------------------------------
  JSON Cloud Region
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonCloudRegion<'j> {
    pub id: &'j str,
    pub provider: &'j str,

    #[serde(rename = "displayName")]
    pub display_name: &'j str,

    #[serde(rename = "geographicalRegion")]
    pub geographical_region: &'j str,
}

/*--------------------------------------------------------------------------------------
  JSON Cloud Service
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonCloudService<'j> {
    pub id: &'j str,
    pub name: &'j str,
    pub provider: &'j str,
    pub service: &'j str,

    #[serde(rename = "ipv4PrefixCount")]
    pub ipv4_prefix_count: i64,

    #[serde(rename = "ipv6PrefixCount")]
    pub ipv6_prefix_count: i64,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /*----------------------------------------------------------------------------------
      Test Inventory JSON
    ----------------------------------------------------------------------------------*/

    pub(crate) const INVENTORY_JSON: &str = r#"{
      "syncToken": "1754868000",
      "generatedAt": "2025-08-11 00:00:00",
      "accounts": [
        {
          "id": "account-1",
          "href": "/accounts/account-1",
          "name": "Testing 1",
          "description": "First Test Account",
          "tags": {"some_name": "value1"}
        },
        {
          "id": "account-2",
          "href": "/accounts/account-2",
          "name": "Testing 2",
          "description": "Second Test Account",
          "tags": {"some_name": "value2"}
        },
        {
          "id": "account-3",
          "href": "/accounts/account-3",
          "name": "Testing 3",
          "description": "Third Test Account",
          "tags": {"some_name": "value3"}
        }
      ],
      "networks": [
        {
          "id": "network-1",
          "href": "/networks/network-1",
          "name": "Production",
          "description": "Production network",
          "account": {"id": "account-1", "href": "/accounts/account-1", "title": "Testing 1"},
          "state": "ACTIVE",
          "tags": {"environment": "production"}
        }
      ],
      "connections": [
        {
          "id": "conn-1",
          "href": "/connections/conn-1",
          "name": "Raleigh AWS",
          "description": "Primary AWS interconnect",
          "type": "AWS",
          "speed": 50,
          "state": "ACTIVE",
          "location": {"id": "loc-ral", "href": "/locations/loc-ral", "title": "Raleigh"},
          "network": {"id": "network-1", "href": "/networks/network-1", "title": "Production"},
          "highAvailability": true,
          "customerNetworks": [{"name": "datacenter", "address": "10.10.0.0/16"}],
          "tags": {"environment": "production"}
        },
        {
          "id": "conn-2",
          "href": "/connections/conn-2",
          "name": "San Jose Azure",
          "description": "Secondary Azure interconnect",
          "type": "AZURE",
          "speed": 100,
          "state": "PROVISIONING",
          "location": {"id": "loc-sjc", "href": "/locations/loc-sjc", "title": "San Jose"},
          "network": null,
          "highAvailability": false,
          "customerNetworks": [],
          "tags": {}
        }
      ],
      "locations": [
        {
          "id": "loc-ral",
          "href": "/locations/loc-ral",
          "title": "Raleigh",
          "stateProvince": "NC",
          "country": "US",
          "geoCoordinates": {"latitude": 35.7796, "longitude": -78.6382}
        },
        {
          "id": "loc-sjc",
          "href": "/locations/loc-sjc",
          "title": "San Jose",
          "stateProvince": "CA",
          "country": "US",
          "geoCoordinates": null
        }
      ],
      "cloudRegions": [
        {
          "id": "aws-us-east-1",
          "provider": "AWS",
          "displayName": "US East (N. Virginia)",
          "geographicalRegion": "North America"
        },
        {
          "id": "azure-eastus",
          "provider": "AZURE",
          "displayName": "East US",
          "geographicalRegion": "North America"
        }
      ],
      "cloudServices": [
        {
          "id": "aws-s3-us-east-1",
          "name": "AWS S3 us-east-1",
          "provider": "AWS",
          "service": "S3",
          "ipv4PrefixCount": 12,
          "ipv6PrefixCount": 4
        }
      ]
    }"#;

    /*----------------------------------------------------------------------------------
      JSON Parsing
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_parse_inventory_json() {
        let json_inventory = parse(INVENTORY_JSON).unwrap();

        assert_eq!(json_inventory.sync_token, "1754868000");
        assert_eq!(
            json_inventory.generated_at,
            Utc.with_ymd_and_hms(2025, 8, 11, 0, 0, 0).unwrap()
        );
        assert_eq!(json_inventory.accounts.len(), 3);
        assert_eq!(json_inventory.networks.len(), 1);
        assert_eq!(json_inventory.connections.len(), 2);
        assert_eq!(json_inventory.locations.len(), 2);
        assert_eq!(json_inventory.cloud_regions.len(), 2);
        assert_eq!(json_inventory.cloud_services.len(), 1);
    }

    #[test]
    fn test_parse_connection_fields() {
        let json_inventory = parse(INVENTORY_JSON).unwrap();
        let connection = &json_inventory.connections[0];

        assert_eq!(connection.connection_type, "AWS");
        assert_eq!(connection.speed, 50);
        assert!(connection.high_availability);
        assert_eq!(connection.location.as_ref().unwrap().title, "Raleigh");
        assert_eq!(connection.customer_networks.len(), 1);
        assert_eq!(
            connection.customer_networks[0].address,
            "10.10.0.0/16".parse::<IpNetwork>().unwrap()
        );
    }

    #[test]
    fn test_parse_optional_fields_default() {
        let json = r#"{
          "id": "conn-x",
          "href": "/connections/conn-x",
          "name": "Minimal",
          "description": "",
          "type": "AWS",
          "speed": 50,
          "state": "ACTIVE",
          "location": null,
          "network": null
        }"#;

        let connection: JsonConnection = serde_json::from_str(json).unwrap();

        assert!(!connection.high_availability);
        assert!(connection.customer_networks.is_empty());
        assert!(connection.tags.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let json_inventory = parse(INVENTORY_JSON).unwrap();
        let serialized = serde_json::to_string(&json_inventory).unwrap();
        let deserialized: JsonInventory = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, json_inventory);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse("{not json").is_err());
    }
}
