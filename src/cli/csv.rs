use crate::cli::output::Tabular;
use netfabric::Result;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Save Records to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save<T: Tabular>(records: &[T], path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.write_record(T::headers())?;

    // Write records
    for record in records {
        writer.write_record(record.row())?;
    }

    writer.flush()?;

    Ok(())
}
