use crate::model::RecordId;
use evensplit_domain::Money;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberInputError {
    #[error("name and amount are both required")]
    Incomplete,
    #[error("amount `{0}` is not a valid number")]
    InvalidAmount(String),
    #[error("amount {0} is negative")]
    NegativeAmount(Money),
    #[error("amount {amount} exceeds the limit of {max}")]
    AmountTooLarge { amount: Money, max: Money },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("an activity name is required before adding members")]
    MissingActivityName,
    #[error(transparent)]
    InvalidMember(#[from] MemberInputError),
    #[error("line {line}: {source}")]
    InvalidEntry {
        line: usize,
        source: MemberInputError,
    },
    #[error("no member at index {0}")]
    MemberNotFound(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetParseError {
    #[error("syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("failed to access record store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode or decode records: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("at least two records must be selected (selected {selected})")]
    NotEnoughRecords { selected: usize },
    #[error("record {0} is already a merge and cannot be merged again")]
    AlreadyMerged(RecordId),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error("record {0} not found")]
    RecordNotFound(RecordId),
}
