// ═══════════════════════════════════════════════════════════════════
// Storage Tests: CSV format, DatasetLoader
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use bank_dashboard_core::errors::CoreError;
use bank_dashboard_core::models::record::TransactionRecord;
use bank_dashboard_core::models::settings::DashboardSettings;
use bank_dashboard_core::storage::csv_format::{self, REQUIRED_COLUMNS};
use bank_dashboard_core::storage::loader::DatasetLoader;

const HEADER: &str = "ide,bank_name,customer_id,customer_name,transaction_value,deposited_value,to_be_paid,approval_date,sector_name4,rate_JUCAS,rate_bank,time_amortization";

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn csv_with(rows: &[&str]) -> Vec<u8> {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text.into_bytes()
}

fn sample_csv() -> Vec<u8> {
    csv_with(&[
        "1,Bank A,77,Alice Corp,1000.5,500,100,15/03/2020,Retail,7,8,12",
        "2,Bank B,12,Bob Ltd,700,300,80,10/02/2019,Energy,4,4,10",
        "3,Bank A,77,Alice Corp,2000,800,300,01/06/2021,Energy,6.5,7,24",
    ])
}

fn sample_record() -> TransactionRecord {
    TransactionRecord {
        id: 1,
        customer_id: "77".into(),
        customer_name: "Alice Corp".into(),
        bank_name: "Bank A".into(),
        sector_name: "Retail".into(),
        approval_date: d(2020, 3, 15),
        transaction_value: 1000.5,
        deposited_value: 500.0,
        to_be_paid: 100.0,
        rate_agency: 7.0,
        rate_bank: 8.0,
        time_amortization: 12.0,
    }
}

// ═══════════════════════════════════════════════════════════════════
// CSV reading
// ═══════════════════════════════════════════════════════════════════

mod read {
    use super::*;

    #[test]
    fn required_columns() {
        assert_eq!(REQUIRED_COLUMNS.len(), 12);
        assert_eq!(REQUIRED_COLUMNS.join(","), HEADER);
    }

    #[test]
    fn reads_rows_in_file_order() {
        let records = csv_format::read_records(&sample_csv(), "%d/%m/%Y").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], sample_record());
        assert_eq!(records[1].customer_id, "12");
        assert_eq!(records[2].approval_date, d(2021, 6, 1));
        assert!((records[2].rate_agency - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn column_order_does_not_matter_and_extras_are_ignored() {
        let data = "customer_id,ide,extra,bank_name,customer_name,transaction_value,deposited_value,to_be_paid,approval_date,sector_name4,rate_JUCAS,rate_bank,time_amortization\n\
                    77,1,ignored,Bank A,Alice Corp,1000.5,500,100,15/03/2020,Retail,7,8,12\n";
        let records = csv_format::read_records(data.as_bytes(), "%d/%m/%Y").unwrap();
        assert_eq!(records, vec![sample_record()]);
    }

    #[test]
    fn numeric_customer_id_stays_text() {
        let data = csv_with(&["1,Bank A,00077,Alice,1,1,1,01/01/2020,Retail,1,1,1"]);
        let records = csv_format::read_records(&data, "%d/%m/%Y").unwrap();
        assert_eq!(records[0].customer_id, "00077");
    }

    #[test]
    fn fields_are_trimmed() {
        let data = csv_with(&["1, Bank A ,77, Alice Corp ,1000.5,500,100, 15/03/2020 ,Retail,7,8,12"]);
        let records = csv_format::read_records(&data, "%d/%m/%Y").unwrap();
        assert_eq!(records[0], sample_record());
    }

    #[test]
    fn alternative_date_format() {
        let data = csv_with(&["1,Bank A,77,Alice Corp,1000.5,500,100,2020-03-15,Retail,7,8,12"]);
        let records = csv_format::read_records(&data, "%Y-%m-%d").unwrap();
        assert_eq!(records[0].approval_date, d(2020, 3, 15));
    }

    #[test]
    fn header_only_is_empty() {
        let records = csv_format::read_records(&csv_with(&[]), "%d/%m/%Y").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_columns_are_listed() {
        let data = "ide,bank_name,customer_id\n1,A,77\n";
        match csv_format::read_records(data.as_bytes(), "%d/%m/%Y") {
            Err(CoreError::InvalidFileFormat(msg)) => {
                assert!(msg.contains("Missing required columns"));
                assert!(msg.contains("approval_date"));
                assert!(msg.contains("rate_JUCAS"));
                assert!(!msg.contains("bank_name"));
            }
            other => panic!("expected InvalidFileFormat, got {other:?}"),
        }
    }

    #[test]
    fn bad_date_reports_row() {
        let data = csv_with(&[
            "1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,1",
            "2,Bank A,77,Alice,1,1,1,45/13/2020,Retail,1,1,1",
        ]);
        match csv_format::read_records(&data, "%d/%m/%Y") {
            Err(CoreError::InvalidRecord { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("45/13/2020"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_reports_row() {
        let data = csv_with(&["1,Bank A,77,Alice,lots,1,1,01/01/2020,Retail,1,1,1"]);
        assert!(matches!(
            csv_format::read_records(&data, "%d/%m/%Y"),
            Err(CoreError::InvalidRecord { row: 1, .. })
        ));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        for (row, column) in [
            ("1,Bank A,77,Alice,NaN,1,1,01/01/2020,Retail,1,1,1", "transaction_value"),
            ("1,Bank A,77,Alice,1,inf,1,01/01/2020,Retail,1,1,1", "deposited_value"),
            ("1,Bank A,77,Alice,1,1,-inf,01/01/2020,Retail,1,1,1", "to_be_paid"),
            ("1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,NaN,1,1", "rate_JUCAS"),
            ("1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,inf,1", "rate_bank"),
            ("1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,NaN", "time_amortization"),
        ] {
            let data = csv_with(&["2,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,1", row]);
            match csv_format::read_records(&data, "%d/%m/%Y") {
                Err(CoreError::InvalidRecord { row, message }) => {
                    assert_eq!(row, 2);
                    assert!(message.contains(column), "{message}");
                }
                other => panic!("expected InvalidRecord for {column}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_finite_row_never_reaches_the_dataset() {
        let data = csv_with(&["1,A,77,Alice,NaN,500,inf,15/03/2020,X,NaN,8,12"]);
        assert!(matches!(
            DatasetLoader::load_from_bytes(&data, &DashboardSettings::default()),
            Err(CoreError::InvalidRecord { row: 1, .. })
        ));
    }

    #[test]
    fn negative_id_is_rejected() {
        let data = csv_with(&["-1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,1"]);
        assert!(matches!(
            csv_format::read_records(&data, "%d/%m/%Y"),
            Err(CoreError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn short_row_is_rejected() {
        let data = csv_with(&["1,Bank A,77"]);
        assert!(csv_format::read_records(&data, "%d/%m/%Y").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// CSV writing
// ═══════════════════════════════════════════════════════════════════

mod write {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let bytes = csv_format::write_records(&[sample_record()], "%d/%m/%Y").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,Bank A,77,Alice Corp,1000.5,"));
        assert!(row.contains("15/03/2020"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_input_writes_header_only() {
        let bytes = csv_format::write_records(&[], "%d/%m/%Y").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), HEADER);
        assert!(csv_format::read_records(text.as_bytes(), "%d/%m/%Y")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn quotes_fields_with_commas() {
        let mut record = sample_record();
        record.customer_name = "Alice, Corp".into();
        let bytes = csv_format::write_records(&[record.clone()], "%d/%m/%Y").unwrap();
        let back = csv_format::read_records(&bytes, "%d/%m/%Y").unwrap();
        assert_eq!(back, vec![record]);
    }

    #[test]
    fn read_back_is_identical() {
        let original = csv_format::read_records(&sample_csv(), "%d/%m/%Y").unwrap();
        let bytes = csv_format::write_records(&original, "%d/%m/%Y").unwrap();
        let back = csv_format::read_records(&bytes, "%d/%m/%Y").unwrap();
        assert_eq!(back, original);
    }
}

// ═══════════════════════════════════════════════════════════════════
// DatasetLoader
// ═══════════════════════════════════════════════════════════════════

mod loader {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_bytes() {
        let ds = DatasetLoader::load_from_bytes(&sample_csv(), &DashboardSettings::default()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.customer_ids(), vec!["77".to_string(), "12".to_string()]);
        assert_eq!(ds.customer_name("12").unwrap(), "Bob Ltd");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let data = csv_with(&[
            "1,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,1",
            "2,Bank A,77,Alice,1,1,1,01/01/2020,Retail,1,1,1",
            "1,Bank B,12,Bob,1,1,1,01/01/2020,Retail,1,1,1",
        ]);
        match DatasetLoader::load_from_bytes(&data, &DashboardSettings::default()) {
            Err(CoreError::InvalidRecord { row, message }) => {
                assert_eq!(row, 3);
                assert!(message.contains("duplicate ide 1"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn uses_settings_date_format() {
        let data = csv_with(&["1,Bank A,77,Alice,1,1,1,2020-03-15,Retail,1,1,1"]);
        let settings = DashboardSettings {
            date_format: "%Y-%m-%d".into(),
            ..DashboardSettings::default()
        };
        assert!(DatasetLoader::load_from_bytes(&data, &DashboardSettings::default()).is_err());
        let ds = DatasetLoader::load_from_bytes(&data, &settings).unwrap();
        assert_eq!(ds.records()[0].approval_date, d(2020, 3, 15));
    }

    #[test]
    fn empty_input_has_no_columns() {
        // No header at all: every required column is missing.
        assert!(matches!(
            DatasetLoader::load_from_bytes(b"", &DashboardSettings::default()),
            Err(CoreError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&sample_csv()).unwrap();
        let path = file.path().to_str().unwrap();

        let ds = DatasetLoader::load_from_file(path, &DashboardSettings::default()).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let result = DatasetLoader::load_from_file(path.to_str().unwrap(), &DashboardSettings::default());
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }
}
