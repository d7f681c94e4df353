#![warn(clippy::uninlined_format_args)]

pub mod clock;
pub mod parser;
pub mod record_store;

pub use clock::SystemClock;
pub use parser::EvensplitSheetParser;
pub use record_store::{InMemoryRecordStore, JsonFileRecordStore};
