//! Test utilities for timecard loader testing
//!
//! This module provides sample CSV content and helpers shared by the loader
//! test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod field_parser_tests;

/// Export with every column populated
pub fn create_test_timecard_csv() -> String {
    r#"Employee Name,Time,Time Out,Timecard Hours
Alice Jones,01/02/2023 9:00 AM,01/02/2023 5:00 PM,8:00
Bob Smith,01/02/2023 10:00 AM,01/02/2023 12:30 PM,2.5
Carol White,01/03/2023 6:00 AM,01/03/2023 9:00 PM,15:00"#
        .to_string()
}

/// Export with blanks in the optional columns
pub fn create_sparse_timecard_csv() -> String {
    r#"Employee Name,Time,Time Out,Timecard Hours
Alice Jones,01/02/2023 9:00 AM,,
Bob Smith,,,
,01/02/2023 9:00 AM,01/02/2023 5:00 PM,8"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
