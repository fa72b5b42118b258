use crate::core::filter::{Filterable, RecordValue};
use serde::Serialize;
use std::rc::Rc;

/*-------------------------------------------------------------------------------------------------
  Cloud Service
-------------------------------------------------------------------------------------------------*/

/// Cloud-provider service reachable over the fabric.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudService {
    /// Service identifier.
    pub id: String,

    /// Service display name.
    pub name: String,

    /// Cloud provider publishing the service.
    pub provider: Rc<str>,

    /// Provider-side service designation.
    pub service: String,

    /// Number of IPv4 prefixes published for the service.
    pub ipv4_prefix_count: i64,

    /// Number of IPv6 prefixes published for the service.
    pub ipv6_prefix_count: i64,
}

impl Filterable for CloudService {
    fn document(&self) -> RecordValue {
        RecordValue::record([
            ("Id", RecordValue::from(self.id.as_str())),
            ("Name", RecordValue::from(self.name.as_str())),
            ("Provider", RecordValue::from(self.provider.as_ref())),
            ("Service", RecordValue::from(self.service.as_str())),
            ("Ipv4PrefixCount", RecordValue::from(self.ipv4_prefix_count)),
            ("Ipv6PrefixCount", RecordValue::from(self.ipv6_prefix_count)),
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

    pub(crate) fn test_cloud_service() -> CloudService {
        CloudService {
            id: "aws-s3-us-east-1".to_string(),
            name: "AWS S3 us-east-1".to_string(),
            provider: Rc::from("AWS"),
            service: "S3".to_string(),
            ipv4_prefix_count: 12,
            ipv6_prefix_count: 4,
        }
    }

    /*----------------------------------------------------------------------------------
      CloudService
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_cloud_service_document() {
        let cloud_service = test_cloud_service();
        let document = cloud_service.document();

        assert_eq!(document.resolve("Service"), &RecordValue::from("S3"));
        assert_eq!(
            document.resolve("Ipv4PrefixCount"),
            &RecordValue::from(12i64)
        );
    }
}
