pub mod rounding;
pub mod settlement_calculator;
pub mod settlement_merger;
pub mod transfer_planner;

pub use rounding::{accumulate, is_settled, settled_tolerance};
pub use settlement_calculator::SettlementCalculator;
pub use settlement_merger::SettlementMerger;
pub use transfer_planner::TransferPlanner;
