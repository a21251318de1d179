mod jtl;

use crate::analytics::record::RequestRecord;
use crate::error::LoadError;
use std::path::Path;

pub use jtl::JtlCsvSource;

/// Supplies the records of one run from a result log.
pub trait RecordSource {
    fn load(&self, path: &Path) -> Result<Vec<RequestRecord>, LoadError>;
}
