use crate::cli;
use lazy_static::lazy_static;
use netfabric::{Error, FilterCriterion, Result};
use regex::Regex;

/*-------------------------------------------------------------------------------------------------
  Core Functions
-------------------------------------------------------------------------------------------------*/

lazy_static! {
    // NAME=PATTERN[,PATTERN...]: field path before the first `=`, patterns after it.
    static ref FILTER_ARG: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9_.-]*)=(.*)$").unwrap();
}

/*--------------------------------------------------------------------------------------
  Parse Filter Arguments
--------------------------------------------------------------------------------------*/

pub fn parse_filter_arg(arg: &str) -> Result<FilterCriterion> {
    let captures = FILTER_ARG.captures(arg).ok_or_else(|| {
        Error::from(format!(
            "Invalid filter argument (expected NAME=PATTERN[,PATTERN...]): {arg}"
        ))
    })?;

    let values: Vec<String> = captures[2].split(',').map(str::to_string).collect();
    Ok(FilterCriterion::new(&captures[1], values))
}

/*--------------------------------------------------------------------------------------
  Build Filter Criteria from CLI Arguments
--------------------------------------------------------------------------------------*/

pub fn build_criteria(args: &cli::Args) -> Result<Vec<FilterCriterion>> {
    let mut criteria: Vec<FilterCriterion> = args
        .filters
        .iter()
        .map(|arg| parse_filter_arg(arg))
        .collect::<Result<_>>()?;

    if let Some(locations) = &args.locations {
        criteria.push(FilterCriterion::new("Location.Title", locations.clone()));
    }

    if let Some(states) = &args.states {
        criteria.push(FilterCriterion::new("State", states.clone()));
    }

    if let Some(connection_types) = &args.connection_types {
        criteria.push(FilterCriterion::new("Type", connection_types.clone()));
    }

    if let Some(providers) = &args.providers {
        criteria.push(FilterCriterion::new("Provider", providers.clone()));
    }

    Ok(criteria)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
