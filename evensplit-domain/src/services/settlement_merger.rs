use crate::{
    model::{Money, SettlementDetail},
    services::rounding::accumulate,
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Combines deviations from several settlements into one per-name list.
pub struct SettlementMerger;

impl SettlementMerger {
    /// Sums deviations per exact name, in first-seen order.
    ///
    /// Unlike the settlement engine, names here are keys: two entries labelled
    /// the same are treated as the same person across settlements.
    pub fn merge<'a, I>(&self, settlements: I) -> Vec<SettlementDetail>
    where
        I: IntoIterator<Item = &'a [SettlementDetail]>,
    {
        let mut merged: IndexMap<&'a str, Vec<Money>, FxBuildHasher> = IndexMap::default();

        for details in settlements {
            for detail in details {
                merged.entry(detail.name.as_str()).or_default().push(detail.diff);
            }
        }

        merged
            .into_iter()
            .map(|(name, diffs)| SettlementDetail::new(name, accumulate(diffs)))
            .collect()
    }
}
