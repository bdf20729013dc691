//! CSV export of annotation records
//!
//! Writes one row per annotated variant with the header
//! `chr,pos,ref,alt,gene,clinical_significance,condition,link,source`.
//! Column names come from the serde renames on
//! [`AnnotationRecord`](crate::AnnotationRecord); quoting of fields
//! containing commas is handled by the `csv` writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::annotate::AnnotationRecord;
use crate::error::VannoError;

/// Write annotation records as CSV to any writer.
pub fn write_csv<W: Write>(records: &[AnnotationRecord], writer: W) -> Result<(), VannoError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record).map_err(|e| VannoError::Export {
            msg: e.to_string(),
        })?;
    }
    wtr.flush().map_err(|e| VannoError::Io {
        msg: format!("failed to flush CSV output: {}", e),
    })?;
    Ok(())
}

/// Write annotation records as a CSV file.
pub fn write_csv_file<P: AsRef<Path>>(
    records: &[AnnotationRecord],
    path: P,
) -> Result<(), VannoError> {
    let file = File::create(path.as_ref()).map_err(|e| VannoError::Io {
        msg: format!("failed to create {}: {}", path.as_ref().display(), e),
    })?;
    write_csv(records, file)
}
