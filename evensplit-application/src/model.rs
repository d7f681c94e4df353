use chrono::{DateTime, Utc};
use evensplit_domain::{Member, Money, SettlementDetail, TransferDetail, TransferPlanner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-ordered record identifier (milliseconds since epoch, bumped on collision).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Single,
    Merged,
}

/// Snapshot of one generated (or merged) settlement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub activity_name: String,
    pub kind: RecordKind,
    pub total_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_amount: Option<Money>,
    pub settlement_details: Vec<SettlementDetail>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub selected: bool,
}

impl Record {
    pub fn is_merged(&self) -> bool {
        self.kind == RecordKind::Merged
    }

    /// Re-plans transfers from the stored deviations.
    pub fn transfers(&self) -> Vec<TransferDetail> {
        TransferPlanner.plan(&self.settlement_details)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry<'a> {
    pub line: usize,
    pub name: &'a str,
    pub amount: &'a str,
}

/// Unvalidated member list read from text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberSheet<'a> {
    pub activity_name: Option<&'a str>,
    pub entries: Vec<MemberEntry<'a>>,
}
