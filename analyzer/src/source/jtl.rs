use super::RecordSource;
use crate::analytics::record::RequestRecord;
use crate::error::LoadError;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const TIMESTAMP_COLUMN: &str = "timeStamp";
const ELAPSED_COLUMN: &str = "elapsed";
const LABEL_COLUMN: &str = "label";
const SUCCESS_COLUMN: &str = "success";

/// Reads JMeter results saved in CSV format (`.jtl` / `.csv`).
///
/// Only the `timeStamp` (epoch ms), `elapsed` (ms), `label` and `success`
/// columns are used. A missing column or an uninterpretable cell leaves the
/// matching record field empty.
#[derive(Debug, Clone)]
pub struct JtlCsvSource {
    delimiter: u8,
}

impl Default for JtlCsvSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl JtlCsvSource {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read<R: Read>(&self, input: R, path: &Path) -> Result<Vec<RequestRecord>, LoadError> {
        let malformed = |source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(input);

        let headers = reader.headers().map_err(malformed)?.clone();
        if headers.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let columns = Columns::locate(&headers);
        columns.log_missing(path);

        let mut records = Vec::new();
        let mut invalid_values = 0usize;
        for row in reader.records() {
            let row = row.map_err(malformed)?;
            let (record, invalid) = columns.record(&row);
            invalid_values += invalid;
            records.push(record);
        }

        if invalid_values > 0 {
            warn!(
                "{} value(s) in {} could not be interpreted and were left empty",
                invalid_values,
                path.display()
            );
        }
        if records.is_empty() {
            warn!("Result log {} has a header but no rows", path.display());
        }
        debug!("Loaded {} record(s) from {}", records.len(), path.display());

        Ok(records)
    }
}

impl RecordSource for JtlCsvSource {
    fn load(&self, path: &Path) -> Result<Vec<RequestRecord>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        self.read(file, path)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Columns {
    timestamp: Option<usize>,
    elapsed: Option<usize>,
    label: Option<usize>,
    success: Option<usize>,
}

/// Outcome of interpreting one cell.
enum Cell<T> {
    Value(T),
    Blank,
    Invalid,
}

impl<T> Cell<T> {
    fn into_parts(self) -> (Option<T>, usize) {
        match self {
            Cell::Value(value) => (Some(value), 0),
            Cell::Blank => (None, 0),
            Cell::Invalid => (None, 1),
        }
    }
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().trim_start_matches('\u{feff}') == name)
        };

        Self {
            timestamp: position(TIMESTAMP_COLUMN),
            elapsed: position(ELAPSED_COLUMN),
            label: position(LABEL_COLUMN),
            success: position(SUCCESS_COLUMN),
        }
    }

    fn log_missing(&self, path: &Path) {
        for (name, index) in [
            (TIMESTAMP_COLUMN, self.timestamp),
            (ELAPSED_COLUMN, self.elapsed),
            (LABEL_COLUMN, self.label),
            (SUCCESS_COLUMN, self.success),
        ] {
            if index.is_none() {
                warn!("Column '{}' not found in {}", name, path.display());
            }
        }
    }

    /// Builds a record from a row, returning it with the number of invalid cells.
    fn record(&self, row: &StringRecord) -> (RequestRecord, usize) {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let (timestamp, invalid_timestamp) = parse(cell(self.timestamp), |value| {
            value
                .parse::<i64>()
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
        })
        .into_parts();
        let (response_time, invalid_elapsed) = parse(cell(self.elapsed), |value| {
            value.parse::<f64>().ok().filter(|ms| ms.is_finite())
        })
        .into_parts();
        let (success, invalid_success) = parse(cell(self.success), |value| {
            match value.to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            }
        })
        .into_parts();
        let endpoint = cell(self.label).map(str::to_owned);

        let record = RequestRecord {
            timestamp,
            response_time,
            endpoint,
            success,
        };
        (record, invalid_timestamp + invalid_elapsed + invalid_success)
    }
}

fn parse<T, F>(value: Option<&str>, parser: F) -> Cell<T>
where
    F: FnOnce(&str) -> Option<T>,
{
    match value {
        None => Cell::Blank,
        Some(value) => parser(value).map_or(Cell::Invalid, Cell::Value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::{Cursor, Write};

    const JTL_HEADER: &str = "timeStamp,elapsed,label,responseCode,responseMessage,threadName,dataType,success,failureMessage,bytes,sentBytes,grpThreads,allThreads,URL,Latency,IdleTime,Connect";

    fn read(content: &str) -> Result<Vec<RequestRecord>, LoadError> {
        JtlCsvSource::default().read(Cursor::new(content.to_owned()), Path::new("test.jtl"))
    }

    #[test]
    fn should_map_jmeter_columns() {
        let content = format!(
            "{JTL_HEADER}\n\
             1715349600000,120,GET /api/books,200,OK,Thread Group 1-1,text,true,,512,128,1,1,http://localhost:3000/api/books,118,0,3\n\
             1715349601500,980,POST /api/books,500,Internal Server Error,Thread Group 1-2,text,false,Boom,64,256,2,2,http://localhost:3000/api/books,970,0,2\n"
        );

        let records = read(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RequestRecord {
                timestamp: Some(Utc.timestamp_millis_opt(1715349600000).unwrap()),
                response_time: Some(120.0),
                endpoint: Some("GET /api/books".to_owned()),
                success: Some(true),
            }
        );
        assert_eq!(records[1].success, Some(false));
        assert_eq!(records[1].response_time, Some(980.0));
    }

    #[test]
    fn missing_columns_should_leave_fields_empty() {
        let records = read("label,elapsed\nGET /,15\nGET /,25\n").unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.timestamp.is_none() && r.success.is_none()));
        assert_eq!(records[1].response_time, Some(25.0));
        assert_eq!(records[1].endpoint.as_deref(), Some("GET /"));
    }

    #[test]
    fn invalid_and_blank_cells_should_leave_fields_empty() {
        let records = read(
            "timeStamp,elapsed,label,success\n\
             not-a-time,fast,,maybe\n\
             ,,,\n\
             1715349600000,NaN,GET /,TRUE\n",
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], RequestRecord::default());
        assert_eq!(records[1], RequestRecord::default());
        assert!(records[2].timestamp.is_some());
        assert_eq!(records[2].response_time, None);
        assert_eq!(records[2].success, Some(true));
    }

    #[test]
    fn short_rows_should_be_accepted() {
        let records = read("timeStamp,elapsed,label,success\n1715349600000,10\n").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].response_time, Some(10.0));
        assert_eq!(records[0].endpoint, None);
    }

    #[test]
    fn header_only_log_should_yield_no_records() {
        assert!(read("timeStamp,elapsed,label,success\n").unwrap().is_empty());
    }

    #[test]
    fn empty_log_should_fail() {
        assert!(matches!(read(""), Err(LoadError::Empty { .. })));
    }

    #[test]
    fn non_utf8_log_should_fail() {
        let bytes: Vec<u8> = b"timeStamp,elapsed\n1,\xff\xfe\n".to_vec();
        let result = JtlCsvSource::default().read(Cursor::new(bytes), Path::new("bin.jtl"));

        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn missing_file_should_fail() {
        let result = JtlCsvSource::default().load(Path::new("/definitely/not/here.jtl"));

        assert!(matches!(result, Err(LoadError::Unreadable { .. })));
    }

    #[test]
    fn should_load_from_file_with_custom_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeStamp;elapsed;label;success").unwrap();
        writeln!(file, "1715349600000;42;GET /health;true").unwrap();

        let records = JtlCsvSource::with_delimiter(b';').load(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].response_time, Some(42.0));
        assert_eq!(records[0].endpoint.as_deref(), Some("GET /health"));
    }
}
