use crate::core::errors::Result;
use log::trace;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Filter Criterion
-------------------------------------------------------------------------------------------------*/

/// A single named filter: a dotted field path (for example `Name`, `Location.Title`, or
/// `Tags.environment`) and a list of regular-expression patterns. A record satisfies the
/// criterion when the value resolved at the field path matches **any** of the patterns
/// (unanchored regex search).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterCriterion {
    name: String,
    values: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  Filter Criterion Implementation
--------------------------------------------------------------------------------------*/

impl FilterCriterion {
    /// Create a new [FilterCriterion] from a field path and a list of patterns. The field
    /// path and patterns are copied verbatim; field-path names are not validated here - an
    /// unknown field path resolves to an absent value and the criterion simply never
    /// matches.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(|value| value.into()).collect(),
        }
    }

    /// The dotted field path this criterion applies to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The regular-expression patterns; the criterion is satisfied when any pattern
    /// matches the resolved field value.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/*-------------------------------------------------------------------------------------------------
  Record Value
-------------------------------------------------------------------------------------------------*/

/// Dynamic view of a record's fields used for filter evaluation. [Filterable] record types
/// build a [RecordValue] tree describing their fields; the filter engine resolves dotted
/// field paths against the tree without compile-time knowledge of the record's shape.
///
/// `Record` and `Map` are kept distinct: a `Record` is a named-field carrier traversed one
/// path segment at a time, while a `Map` is a string-keyed mapping where the current path
/// segment is always treated as the final segment (one level of map indirection only).
#[derive(Clone, Debug, PartialEq)]
pub enum RecordValue {
    Absent,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<RecordValue>),
    Record(BTreeMap<String, RecordValue>),
    Map(BTreeMap<String, RecordValue>),
}

/*--------------------------------------------------------------------------------------
  Record Value Implementation
--------------------------------------------------------------------------------------*/

impl RecordValue {
    /// Build a [RecordValue::Record] from field-name/value pairs.
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, RecordValue)>,
        K: Into<String>,
    {
        RecordValue::Record(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build a [RecordValue::Map] from key/value pairs.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, RecordValue)>,
        K: Into<String>,
    {
        RecordValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /*-------------------------------------------------------------------------
      Resolve Field Path
    -------------------------------------------------------------------------*/

    /// Resolve a dotted field path against this value, walking path segments left to
    /// right. Resolution is fail-soft: a missing field, an absent optional, a missing map
    /// key, or a path that tries to traverse through a scalar resolves to
    /// [RecordValue::Absent] rather than an error. Field-name matching is exact and
    /// case-sensitive.
    ///
    /// When traversal reaches a [RecordValue::Map], the current path segment is treated as
    /// the final segment: the segment is looked up as a map key and any remaining path
    /// segments are ignored.
    pub fn resolve(&self, path: &str) -> &RecordValue {
        let mut current = self;

        for segment in path.split('.') {
            match current {
                RecordValue::Map(entries) => {
                    return entries.get(segment).unwrap_or(&RecordValue::Absent);
                }
                RecordValue::Record(fields) => match fields.get(segment) {
                    Some(value) => current = value,
                    None => return &RecordValue::Absent,
                },
                _ => return &RecordValue::Absent,
            }
        }

        current
    }

    /*-------------------------------------------------------------------------
      Zero Value Check
    -------------------------------------------------------------------------*/

    /// Check whether this value is the zero value for its type. A record whose resolved
    /// field value is zero fails the owning criterion: an unset field cannot match any
    /// pattern.
    pub fn is_zero(&self) -> bool {
        match self {
            RecordValue::Absent => true,
            RecordValue::String(value) => value.is_empty(),
            RecordValue::Integer(value) => *value == 0,
            RecordValue::Float(value) => *value == 0.0,
            RecordValue::Boolean(value) => !value,
            RecordValue::List(items) => items.is_empty(),
            RecordValue::Record(fields) => fields.is_empty(),
            RecordValue::Map(entries) => entries.is_empty(),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Record Value Conversions
--------------------------------------------------------------------------------------*/

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::String(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::String(value)
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Integer(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        RecordValue::Boolean(value)
    }
}

impl From<&BTreeMap<String, String>> for RecordValue {
    fn from(value: &BTreeMap<String, String>) -> Self {
        RecordValue::Map(
            value
                .iter()
                .map(|(key, value)| (key.clone(), RecordValue::from(value.as_str())))
                .collect(),
        )
    }
}

/*--------------------------------------------------------------------------------------
  Record Value Display
--------------------------------------------------------------------------------------*/

/// The rendered string form used for pattern matching. Scalars render naturally (`50`
/// renders as `"50"`; booleans as `true`/`false`); lists render as `[a, b]` and
/// records/maps as `{key: value, ...}` in sorted key order.
impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Absent => Ok(()),
            RecordValue::String(value) => write!(f, "{value}"),
            RecordValue::Integer(value) => write!(f, "{value}"),
            RecordValue::Float(value) => write!(f, "{value}"),
            RecordValue::Boolean(value) => write!(f, "{value}"),
            RecordValue::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            RecordValue::Record(fields) | RecordValue::Map(fields) => {
                write!(f, "{{")?;
                for (index, (key, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Filterable
-------------------------------------------------------------------------------------------------*/

/// Capability interface implemented by record types that support field-path filtering.
/// The filter engine only depends on the [RecordValue] document a record builds for
/// itself, so heterogeneous record types share one evaluation path.
pub trait Filterable {
    /// Build the dynamic field document for this record. Optional nested records map to
    /// either a nested [RecordValue::Record] or [RecordValue::Absent].
    fn document(&self) -> RecordValue;
}

/*-------------------------------------------------------------------------------------------------
  Apply Criteria
-------------------------------------------------------------------------------------------------*/

/// Apply a set of [FilterCriterion] to a list of records, returning the subset of records
/// that satisfy **every** criterion (logical AND across criteria; logical OR across the
/// patterns within one criterion).
///
/// All patterns are compiled up front; a malformed pattern fails the whole pass rather
/// than silently never matching. An empty criteria list returns every record. A criterion
/// with an empty pattern list can never be satisfied and empties the result.
pub fn apply_criteria<T>(records: &[T], criteria: &[FilterCriterion]) -> Result<Vec<T>>
where
    T: Filterable + Clone,
{
    let compiled: Vec<CompiledCriterion> = criteria
        .iter()
        .map(CompiledCriterion::compile)
        .collect::<Result<_>>()?;

    Ok(records
        .iter()
        .filter(|record| {
            let document = record.document();
            compiled.iter().all(|criterion| criterion.matches(&document))
        })
        .cloned()
        .collect())
}

/*--------------------------------------------------------------------------------------
  Compiled Criterion
--------------------------------------------------------------------------------------*/

/// A [FilterCriterion] with its patterns compiled for one filtering pass.
struct CompiledCriterion<'c> {
    name: &'c str,
    patterns: Vec<Regex>,
}

impl<'c> CompiledCriterion<'c> {
    fn compile(criterion: &'c FilterCriterion) -> Result<Self> {
        let patterns: Vec<Regex> = criterion
            .values()
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map_err(|error| format!("Invalid filter pattern `{pattern}`: {error}").into())
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            name: criterion.name(),
            patterns,
        })
    }

    fn matches(&self, document: &RecordValue) -> bool {
        let value = document.resolve(self.name);
        if value.is_zero() {
            trace!("Field `{}` is absent or zero; no match", self.name);
            return false;
        }

        let rendered = value.to_string();
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(&rendered))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::tests::test_accounts;
    use crate::core::cloud_region::tests::test_cloud_regions;
    use crate::core::connection::tests::test_connections;

    /*----------------------------------------------------------------------------------
      Field Path Resolution
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_resolve_scalar_field() {
        let document = test_accounts()[0].document();
        assert_eq!(
            document.resolve("Name"),
            &RecordValue::from("Testing 1")
        );
    }

    #[test]
    fn test_resolve_missing_field() {
        let document = test_accounts()[0].document();
        assert_eq!(document.resolve("NoSuchField"), &RecordValue::Absent);
    }

    #[test]
    fn test_resolve_nested_field() {
        let document = test_connections()[0].document();
        assert_eq!(
            document.resolve("Location.Title"),
            &RecordValue::from("Raleigh")
        );
    }

    #[test]
    fn test_resolve_through_absent_optional() {
        // The last test connection has no location; the nested path degrades to absent
        // instead of failing the pass.
        let document = test_connections().last().unwrap().document();
        assert_eq!(document.resolve("Location.Title"), &RecordValue::Absent);
    }

    #[test]
    fn test_resolve_map_key() {
        let document = test_accounts()[1].document();
        assert_eq!(
            document.resolve("Tags.some_name"),
            &RecordValue::from("value2")
        );
    }

    #[test]
    fn test_resolve_map_key_is_terminal_segment() {
        // Remaining path segments after a map key are ignored; nested paths through maps
        // are not supported beyond one level.
        let document = test_accounts()[1].document();
        assert_eq!(
            document.resolve("Tags.some_name.deeper"),
            &RecordValue::from("value2")
        );
    }

    #[test]
    fn test_resolve_absent_map_key() {
        let document = test_accounts()[0].document();
        assert_eq!(document.resolve("Tags.no_such_key"), &RecordValue::Absent);
    }

    #[test]
    fn test_resolve_through_scalar() {
        let document = test_accounts()[0].document();
        assert_eq!(document.resolve("Name.Nested"), &RecordValue::Absent);
    }

    /*----------------------------------------------------------------------------------
      Zero Values and Rendering
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_is_zero() {
        assert!(RecordValue::Absent.is_zero());
        assert!(RecordValue::from("").is_zero());
        assert!(RecordValue::from(0i64).is_zero());
        assert!(RecordValue::from(0.0f64).is_zero());
        assert!(RecordValue::from(false).is_zero());
        assert!(RecordValue::List(Vec::new()).is_zero());

        assert!(!RecordValue::from("value").is_zero());
        assert!(!RecordValue::from(50i64).is_zero());
        assert!(!RecordValue::from(true).is_zero());
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(RecordValue::from(50i64).to_string(), "50");
        assert_eq!(RecordValue::from(true).to_string(), "true");
        assert_eq!(
            RecordValue::List(vec![RecordValue::from("a"), RecordValue::from("b")]).to_string(),
            "[a, b]"
        );
        assert_eq!(
            RecordValue::map([("key", RecordValue::from("value"))]).to_string(),
            "{key: value}"
        );
    }

    /*----------------------------------------------------------------------------------
      Criteria Evaluation
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_empty_criteria_is_identity() {
        let accounts = test_accounts();
        let matched = apply_criteria(&accounts, &[]).unwrap();
        assert_eq!(matched, accounts);
    }

    #[test]
    fn test_or_across_values() {
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("Description", ["First", "Second"])];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert_eq!(matched.len(), 2);
        assert!(matched.iter().any(|account| account.name == "Testing 1"));
        assert!(matched.iter().any(|account| account.name == "Testing 2"));
    }

    #[test]
    fn test_and_across_criteria() {
        let accounts = test_accounts();
        let criteria = [
            FilterCriterion::new("Description", ["First", "Second"]),
            FilterCriterion::new("Name", ["Testing 2"]),
        ];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Testing 2");
    }

    #[test]
    fn test_substring_match() {
        // Patterns use regex search semantics, not full-match anchoring.
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("Name", ["ting 1"])];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Testing 1");
    }

    #[test]
    fn test_unresolvable_path_empties_result() {
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("NoSuchField", ["value"])];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_values_never_match() {
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("Name", Vec::<String>::new())];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert!(matched.is_empty());
    }

    #[test]
    fn test_malformed_pattern_is_an_error() {
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("Name", ["[unclosed"])];

        assert!(apply_criteria(&accounts, &criteria).is_err());
    }

    #[test]
    fn test_nested_path_criterion() {
        // Connections carry location links titled Raleigh, San Jose, and Seattle.
        let connections = test_connections();
        let criteria = [FilterCriterion::new("Location.Title", ["Raleigh"])];

        let matched = apply_criteria(&connections, &criteria).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location.as_ref().unwrap().title, "Raleigh");
    }

    #[test]
    fn test_map_path_criterion() {
        let accounts = test_accounts();
        let criteria = [FilterCriterion::new("Tags.some_name", ["value2", "value3"])];

        let matched = apply_criteria(&accounts, &criteria).unwrap();

        assert_eq!(matched.len(), 2);
        assert!(matched.iter().any(|account| account.name == "Testing 2"));
        assert!(matched.iter().any(|account| account.name == "Testing 3"));
    }

    #[test]
    fn test_map_path_on_records_without_map_field() {
        // Cloud regions carry no tag map; the criterion excludes every record without
        // raising an error.
        let cloud_regions = test_cloud_regions();
        let criteria = [FilterCriterion::new("Tags.some_name", ["value"])];

        let matched = apply_criteria(&cloud_regions, &criteria).unwrap();

        assert!(matched.is_empty());
    }

    #[test]
    fn test_numeric_field_matches_rendered_form() {
        let connections = test_connections();
        let criteria = [FilterCriterion::new("Speed", ["^50$"])];

        let matched = apply_criteria(&connections, &criteria).unwrap();

        assert!(!matched.is_empty());
        assert!(matched.iter().all(|connection| connection.speed == 50));
    }

    #[test]
    fn test_boolean_field_matches_rendered_form() {
        let connections = test_connections();
        let criteria = [FilterCriterion::new("HighAvailability", ["true"])];

        let matched = apply_criteria(&connections, &criteria).unwrap();

        assert!(!matched.is_empty());
        assert!(matched.iter().all(|connection| connection.high_availability));
    }

    #[test]
    fn test_criterion_getters() {
        let criterion = FilterCriterion::new("Name", ["value1", "value2"]);
        assert_eq!(criterion.name(), "Name");
        assert_eq!(criterion.values(), &["value1", "value2"]);
    }
}
