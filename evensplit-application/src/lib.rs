#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod history;
pub mod model;
pub mod ports;
pub mod session;

pub use error::{
    HistoryError, MemberInputError, MergeError, RecordStoreError, SessionError, SheetParseError,
};
pub use history::{HistoryService, MergeOutcome};
pub use model::{MemberEntry, MemberSheet, Record, RecordId, RecordKind};
pub use ports::{Clock, MemberSheetParser, RecordStore};
pub use session::{Session, max_member_amount, parse_member};
