use pretty_assertions::assert_eq;
use rxtrace::aggregator::{EntitySeries, Sample, SeriesMap};
use rxtrace::output::{
    read_summary_json, summary_path, to_report, validate_path, write_per_entity_csv,
    write_summary, write_summary_json,
};
use std::path::Path;

fn series(values: &[(i64, f64)]) -> EntitySeries {
    values
        .iter()
        .enumerate()
        .map(|(i, &(mcs, sinr))| Sample {
            time: 0.1 + i as f64 * 0.005,
            mcs,
            sinr,
        })
        .collect()
}

fn create_test_series() -> SeriesMap {
    let mut map = SeriesMap::new();
    map.insert(12, series(&[(10, 3.5)]));
    map.insert(3, series(&[(4, 1.0), (6, 2.0), (8, 3.0)]));
    map
}

#[test]
fn test_csv_files_per_rnti() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output_logs");

    let written = write_per_entity_csv(&create_test_series(), &out).unwrap();

    assert_eq!(written.len(), 4);
    assert_eq!(
        std::fs::read_to_string(out.join("mcs3.csv")).unwrap(),
        "MCS\n4\n6\n8\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("sinr3.csv")).unwrap(),
        "SINR\n1.0\n2.0\n3.0\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("mcs12.csv")).unwrap(),
        "MCS\n10\n"
    );
}

#[test]
fn test_csv_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mcs3.csv"), "stale\nstale\nstale\nstale\nstale\n").unwrap();

    write_per_entity_csv(&create_test_series(), dir.path()).unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("mcs3.csv")).unwrap(),
        "MCS\n4\n6\n8\n"
    );
}

#[test]
fn test_csv_readable_by_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    write_per_entity_csv(&create_test_series(), dir.path()).unwrap();

    let mut reader = csv::Reader::from_path(dir.path().join("sinr3.csv")).unwrap();
    assert_eq!(&reader.headers().unwrap()[0], "SINR");
    let values: Vec<f64> = reader
        .records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_summary_ascending_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut status = Vec::new();

    let summaries = write_summary(&create_test_series(), dir.path(), &mut status).unwrap();

    assert_eq!(summaries[0].rnti, 3);
    assert_eq!(summaries[1].rnti, 12);

    let text = std::fs::read_to_string(summary_path(dir.path())).unwrap();
    let rnti_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("RNTI")).collect();
    assert_eq!(rnti_lines, vec!["RNTI 3:", "RNTI 12:"]);
    assert!(text.contains("  MCS - Length: 3, Avg: 6.00, Std: 1.63\n"));
    assert!(text.contains("  SINR - Avg: 2.00, Std: 0.82\n"));
}

#[test]
fn test_summary_status_mirrors_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut status = Vec::new();

    write_summary(&create_test_series(), dir.path(), &mut status).unwrap();

    let status = String::from_utf8(status).unwrap();
    assert_eq!(
        status,
        "RNTI 3 Length: 3, MCS Avg: 6.00, MCS Std: 1.63, SINR Avg: 2.00, SINR Std: 0.82\n\
         RNTI 12 Length: 1, MCS Avg: 10.00, MCS Std: 0.00, SINR Avg: 3.50, SINR Std: 0.00\n"
    );
}

#[test]
fn test_json_summary_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = Vec::new();
    let summaries = write_summary(&create_test_series(), dir.path(), &mut sink).unwrap();

    let report = to_report("RxPacketTrace.txt", 100, summaries);
    let path = dir.path().join("nested/summary.json");
    write_summary_json(&report, &path).unwrap();

    let loaded = read_summary_json(&path).unwrap();
    assert_eq!(loaded.retained_samples, 4);
    let rntis: Vec<i64> = loaded.entities.iter().map(|e| e.rnti).collect();
    assert_eq!(rntis, vec![3, 12]);
    assert_eq!(loaded.entities[0].length, 3);
    assert!((loaded.entities[0].mcs_std - report.entities[0].mcs_std).abs() < 1e-9);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_output_dir_is_a_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(write_per_entity_csv(&create_test_series(), file.path()).is_err());
}
