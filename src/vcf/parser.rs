//! Variant record extraction from variant-call text
//!
//! Parsing is a single pass over the input. Metadata lines (`#`) and
//! blank lines are skipped; malformed data lines (fewer than five
//! fields, or a non-numeric position) are skipped with a warning and do
//! not abort extraction of the remaining lines.

use std::fs;
use std::path::Path;

use crate::error::VannoError;
use crate::vcf::record::VariantRecord;

/// Parse a single variant-call data line into a [`VariantRecord`].
///
/// The line must have at least 5 tab-separated fields; fields past ALT
/// (QUAL, FILTER, INFO, ...) are ignored. `line_number` is 1-based and
/// only used for error reporting.
///
/// # Examples
///
/// ```
/// use vanno::parse_variant_line;
///
/// let v = parse_variant_line("chr1\t12345\trs123\tA\tG", 1).unwrap();
/// assert_eq!(v.chrom, "chr1");
/// assert_eq!(v.pos, 12345);
/// ```
pub fn parse_variant_line(line: &str, line_number: usize) -> Result<VariantRecord, VannoError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 5 {
        return Err(VannoError::Parse {
            line: line_number,
            msg: format!("expected at least 5 tab-separated fields, got {}", fields.len()),
        });
    }

    let pos: u64 = fields[1].parse().map_err(|_| VannoError::Parse {
        line: line_number,
        msg: format!("invalid position '{}': not a valid integer", fields[1]),
    })?;
    if pos == 0 {
        return Err(VannoError::Parse {
            line: line_number,
            msg: "position must be >= 1".to_string(),
        });
    }

    Ok(VariantRecord {
        chrom: fields[0].to_string(),
        pos,
        id: fields[2].to_string(),
        reference: fields[3].to_string(),
        alternate: fields[4].to_string(),
    })
}

/// Extract all variant records from variant-call text, in file order.
///
/// Lines starting with `#` are metadata and skipped. Malformed data
/// lines are skipped with a `tracing` warning rather than aborting the
/// run; callers that need strict behavior can parse line by line with
/// [`parse_variant_line`].
pub fn extract_variants(text: &str) -> Vec<VariantRecord> {
    let mut variants = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_variant_line(line, idx + 1) {
            Ok(record) => variants.push(record),
            Err(e) => {
                tracing::warn!("skipping malformed variant line: {}", e);
            }
        }
    }

    variants
}

/// Extract all variant records from a variant-call file on disk.
pub fn extract_variants_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VariantRecord>, VannoError> {
    let text = fs::read_to_string(path.as_ref()).map_err(|e| VannoError::Io {
        msg: format!("failed to read {}: {}", path.as_ref().display(), e),
    })?;
    Ok(extract_variants(&text))
}
