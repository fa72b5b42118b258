use crate::core::filter::{Filterable, RecordValue};
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Location
-------------------------------------------------------------------------------------------------*/

/// Fabric location record: a point of presence where connections terminate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location identifier.
    pub id: String,

    /// API location of the record.
    pub href: String,

    /// Location display title.
    pub title: String,

    /// State or province of the location.
    pub state_province: String,

    /// Country of the location.
    pub country: String,

    /// Geographic coordinates of the location, when published.
    pub geo_coordinates: Option<GeoCoordinates>,
}

impl Filterable for Location {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Href", RecordValue::from(self.href.as_str())),
            ("Title", RecordValue::from(self.title.as_str())),
            (
                "StateProvince",
                RecordValue::from(self.state_province.as_str()),
            ),
            ("Country", RecordValue::from(self.country.as_str())),
            (
                "GeoCoordinates",
                self.geo_coordinates
                    .as_ref()
                    .map_or(RecordValue::Absent, GeoCoordinates::document),
            ),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Geo Coordinates
-------------------------------------------------------------------------------------------------*/

/// Geographic coordinates of a fabric location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Filterable for GeoCoordinates {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Latitude", RecordValue::from(self.latitude)),
            ("Longitude", RecordValue::from(self.longitude)),
        ])
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
