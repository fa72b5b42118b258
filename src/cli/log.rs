use log::{info, warn};
use netfabric::FilterCriterion;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Filter Results
--------------------------------------------------------------------------------------*/

pub fn filter_results(criteria: &[FilterCriterion], matched: usize, total: usize) {
    if criteria.is_empty() {
        return;
    }

    let count_criteria = criteria.len();
    info!("Applied {count_criteria} filter criteria");

    if matched > 0 {
        info!("Matched {matched} of {total} record(s)");
    } else {
        warn!("No records matched the filter criteria");
    };
}
