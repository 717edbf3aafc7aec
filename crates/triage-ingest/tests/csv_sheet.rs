//! File-based tests for the CSV export adapter.

use std::io::Write;

use triage_ingest::read_worksheet_csv;
use triage_model::SheetCell;

#[test]
fn reads_a_csv_export_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "Patient ID,Patient Name,Age,Condition,Glucose").unwrap();
    writeln!(file, "P001,Jane Doe (03/15/1950),74,Diabetes,320").unwrap();
    writeln!(file, "P002,John Smith,61,,95").unwrap();
    file.flush().unwrap();

    let sheet = read_worksheet_csv(file.path()).expect("read worksheet");
    assert_eq!(sheet.data_rows().len(), 2);
    assert_eq!(sheet.data_rows()[0][4], SheetCell::Number(320.0));
    assert_eq!(sheet.data_rows()[1][3], SheetCell::Empty);
}
