//! CSV export for list endpoints

use anyhow::Context;
use serde::Serialize;

use crate::error::AppResult;

/// Serialize rows into a CSV document with a header line
pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in data {
        wtr.serialize(record).context("CSV serialization error")?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context("CSV writer error")?;
    let csv_data = String::from_utf8(bytes).context("UTF-8 conversion error")?;
    Ok(csv_data)
}
