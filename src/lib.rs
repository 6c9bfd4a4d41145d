pub mod args;
pub mod counter;
pub mod domain;
pub mod error;
pub mod importer;
pub mod report;
pub mod source;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use counter::count_domains;
pub use error::{Error, Result};
pub use importer::run;
pub use report::{is_supported_format, OutputFormat};
pub use source::{CsvEmailSource, EmailSource, MemoryEmailSource};
pub use stats::{DomainRecord, DomainReport, DomainTally};
