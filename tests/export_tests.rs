//! CSV export contract tests: exact header, column order, quoting,
//! and round-tripping through a file on disk.

use vanno::{write_csv, write_csv_file, AnnotationRecord, AnnotationSource, VariantRecord};

fn record(source: AnnotationSource, gene: &str, condition: &str) -> AnnotationRecord {
    let v = VariantRecord::new("chr1", 12345, "rs123", "A", "G");
    let mut record = AnnotationRecord::from_variant(&v, source);
    record.gene = gene.to_string();
    record.clinical_significance = "Pathogenic".to_string();
    record.condition = condition.to_string();
    record.link = "https://example.org".to_string();
    record
}

#[test]
fn test_exact_header() {
    let mut buf = Vec::new();
    write_csv(&[record(AnnotationSource::Ncbi, "G", "From NCBI")], &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out.lines().next().unwrap(),
        "chr,pos,ref,alt,gene,clinical_significance,condition,link,source"
    );
}

#[test]
fn test_source_column_uses_service_names() {
    for (source, expected) in [
        (AnnotationSource::Ncbi, "NCBI"),
        (AnnotationSource::MyVariant, "MyVariant.info"),
        (AnnotationSource::Ensembl, "Ensembl"),
        (AnnotationSource::Ucsc, "UCSC"),
    ] {
        let mut buf = Vec::new();
        write_csv(&[record(source, "X", "c")], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(
            out.lines().nth(1).unwrap().ends_with(expected),
            "source {:?} should serialize as {}",
            source,
            expected
        );
    }
}

#[test]
fn test_commas_are_quoted() {
    let mut buf = Vec::new();
    write_csv(
        &[record(
            AnnotationSource::MyVariant,
            "BRCA1",
            "Breast cancer, familial 1",
        )],
        &mut buf,
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\"Breast cancer, familial 1\""));
}

#[test]
fn test_write_csv_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotated.csv");

    let records = vec![
        record(AnnotationSource::Ncbi, "G", "From NCBI"),
        record(AnnotationSource::Ucsc, "Unknown", "No data"),
    ];
    write_csv_file(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3); // header + 2 rows
    assert!(content.lines().nth(2).unwrap().contains("Unknown"));
}
