use crate::core::errors::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Connection Type
-------------------------------------------------------------------------------------------------*/

/// Cloud-provider flavor of a fabric connection.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionType {
    Aws,
    Azure,
    GoogleCloud,
    SiteIpsecVpn,
}

impl ConnectionType {
    /// The wire-format string for this connection type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Aws => "AWS",
            ConnectionType::Azure => "AZURE",
            ConnectionType::GoogleCloud => "GOOGLE_CLOUD",
            ConnectionType::SiteIpsecVpn => "SITE_IPSEC_VPN",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AWS" => Ok(ConnectionType::Aws),
            "AZURE" => Ok(ConnectionType::Azure),
            "GOOGLE_CLOUD" => Ok(ConnectionType::GoogleCloud),
            "SITE_IPSEC_VPN" => Ok(ConnectionType::SiteIpsecVpn),
            _ => Err(format!("Unknown connection type: {value}").into()),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
