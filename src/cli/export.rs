//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SpendlogError, SpendlogResult};
use crate::export::export_expenses_csv;
use crate::models::Dataset;

/// Handle `export`
pub fn handle_export(dataset: &Dataset, output: &Path) {
    match write_csv(dataset, output) {
        Ok(count) => println!("Exported {} expenses to {}", count, output.display()),
        Err(e) => eprintln!("Error exporting expenses: {}", e),
    }
}

fn write_csv(dataset: &Dataset, output: &Path) -> SpendlogResult<usize> {
    let file = File::create(output).map_err(|e| {
        SpendlogError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let count = export_expenses_csv(dataset, &mut writer)?;
    writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(count)
}
