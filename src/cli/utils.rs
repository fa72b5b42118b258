use netfabric::Link;
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Utility Functions
-------------------------------------------------------------------------------------------------*/

pub fn format_tags(tags: &BTreeMap<String, String>) -> String {
    tags.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn format_link(link: &Option<Link>) -> String {
    link.as_ref()
        .map(|link| link.title.clone())
        .unwrap_or_default()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        let tags: BTreeMap<String, String> = [
            ("environment".to_string(), "production".to_string()),
            ("team".to_string(), "netops".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(format_tags(&tags), "environment=production, team=netops");
        assert_eq!(format_tags(&BTreeMap::new()), "");
    }

    #[test]
    fn test_format_link() {
        let link = Some(Link {
            id: "loc-ral".to_string(),
            href: "/locations/loc-ral".to_string(),
            title: "Raleigh".to_string(),
        });

        assert_eq!(format_link(&link), "Raleigh");
        assert_eq!(format_link(&None), "");
    }
}
