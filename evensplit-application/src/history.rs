use crate::{
    error::{HistoryError, MergeError},
    model::{Record, RecordId, RecordKind},
    ports::{Clock, RecordStore},
    session::Session,
};
use chrono::{DateTime, Utc};
use evensplit_domain::{
    Member, SettlementMerger, TransferDetail,
    services::accumulate,
};
use indexmap::IndexSet;

pub const MERGED_NAME_SEPARATOR: &str = "+";

/// A freshly merged record and the records it was built from.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub record: Record,
    pub sources: Vec<Record>,
}

/// Settlement history backed by a [`RecordStore`].
#[derive(Clone, Copy)]
pub struct HistoryService<'a> {
    store: &'a dyn RecordStore,
    clock: &'a dyn Clock,
}

impl<'a> HistoryService<'a> {
    pub fn new(store: &'a dyn RecordStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn records(&self) -> Result<Vec<Record>, HistoryError> {
        Ok(self.store.load()?)
    }

    pub fn record(&self, id: RecordId) -> Result<Record, HistoryError> {
        self.store
            .load()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(HistoryError::RecordNotFound(id))
    }

    /// Settles the session and stores the result as the newest record.
    pub fn generate(&self, session: &Session) -> Result<Record, HistoryError> {
        let settlement = session.settlement();
        let mut records = self.store.load()?;
        let now = self.clock.now();

        let record = Record {
            id: next_record_id(&records, now),
            created_at: now,
            activity_name: session.activity_name().to_string(),
            kind: RecordKind::Single,
            total_amount: settlement.total_amount,
            average_amount: Some(settlement.average_amount),
            settlement_details: settlement.settlement_details,
            members: session.members().to_vec(),
            selected: false,
        };

        records.insert(0, record.clone());
        self.store.save(&records)?;

        tracing::info!(
            record_id = %record.id,
            member_count = record.members.len(),
            total = %record.total_amount,
            "Saved settlement record"
        );

        Ok(record)
    }

    /// Plans transfers again from a stored record's deviations.
    pub fn replay_transfers(&self, id: RecordId) -> Result<Vec<TransferDetail>, HistoryError> {
        Ok(self.record(id)?.transfers())
    }

    pub fn set_selected(&self, id: RecordId, selected: bool) -> Result<(), HistoryError> {
        let mut records = self.store.load()?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(HistoryError::RecordNotFound(id))?;
        record.selected = selected;
        self.store.save(&records)?;
        Ok(())
    }

    pub fn delete(&self, id: RecordId) -> Result<Record, HistoryError> {
        let mut records = self.store.load()?;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(HistoryError::RecordNotFound(id))?;
        let removed = records.remove(position);
        self.store.save(&records)?;

        tracing::info!(record_id = %id, "Deleted settlement record");
        Ok(removed)
    }

    /// Removes every record, returning how many were dropped.
    pub fn clear(&self) -> Result<usize, HistoryError> {
        let count = self.store.load()?.len();
        self.store.save(&[])?;

        tracing::info!(record_count = count, "Cleared settlement records");
        Ok(count)
    }

    /// Merges all selected records into a new record.
    ///
    /// Deviations are summed per member name and members are de-duplicated by
    /// name and amount. Merged records cannot take part in another merge.
    pub fn merge_selected(&self) -> Result<MergeOutcome, HistoryError> {
        let mut records = self.store.load()?;
        let sources: Vec<Record> = records
            .iter()
            .filter(|record| record.selected)
            .cloned()
            .collect();

        if let Some(merged) = sources.iter().find(|record| record.is_merged()) {
            tracing::warn!(record_id = %merged.id, "Rejected merge of an already merged record");
            return Err(MergeError::AlreadyMerged(merged.id).into());
        }
        if sources.len() < 2 {
            tracing::warn!(selected = sources.len(), "Rejected merge with too few records");
            return Err(MergeError::NotEnoughRecords {
                selected: sources.len(),
            }
            .into());
        }

        let settlement_details = SettlementMerger.merge(
            sources
                .iter()
                .map(|record| record.settlement_details.as_slice()),
        );
        let members: IndexSet<&Member> = sources
            .iter()
            .flat_map(|record| record.members.iter())
            .collect();
        let now = self.clock.now();

        let record = Record {
            id: next_record_id(&records, now),
            created_at: now,
            activity_name: sources
                .iter()
                .map(|record| record.activity_name.as_str())
                .collect::<Vec<_>>()
                .join(MERGED_NAME_SEPARATOR),
            kind: RecordKind::Merged,
            total_amount: accumulate(sources.iter().map(|record| record.total_amount)),
            average_amount: None,
            settlement_details,
            members: members.into_iter().cloned().collect(),
            selected: false,
        };

        records.insert(0, record.clone());
        self.store.save(&records)?;

        tracing::info!(
            record_id = %record.id,
            source_count = sources.len(),
            "Saved merged settlement record"
        );

        Ok(MergeOutcome { record, sources })
    }
}

/// Millisecond timestamp, bumped past the newest existing id when needed.
fn next_record_id(records: &[Record], now: DateTime<Utc>) -> RecordId {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    match records.iter().map(|record| record.id.0).max() {
        Some(last) if last >= millis => RecordId(last + 1),
        _ => RecordId(millis),
    }
}
