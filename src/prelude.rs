pub use crate::core::config::Config;
pub use crate::core::convert::{convert, convert_files, ConvertSummary, MapFiles};
pub use crate::core::error::{Error, FdResult};
pub use crate::core::map::{fields::extract_fields, section::SectionState, MapScanner};
pub use crate::core::symbols::SymbolRecord;
