#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{MONEY_SCALE, Member, Money, Settlement, SettlementDetail, TransferDetail};
pub use services::{SettlementCalculator, SettlementMerger, TransferPlanner};
