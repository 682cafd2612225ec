//! Data model for log records.

mod level;
mod record;

pub use level::Level;
pub use record::Record;
