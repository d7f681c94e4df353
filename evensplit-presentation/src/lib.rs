#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod settlement_presenter;

pub use error_presenter::{
    format_history_error, format_member_input_error, format_session_error,
    format_sheet_parse_error,
};
pub use settlement_presenter::{SettlementTextPresenter, display_activity_name};
