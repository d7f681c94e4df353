use crate::{
    model::{Member, Money, Settlement, SettlementDetail},
    services::TransferPlanner,
};

/// Equal-split settlement service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Computes total, per-head share and every member's deviation from it,
    /// then plans the transfers that even those deviations out.
    ///
    /// Details keep the input order. An empty member list yields an empty
    /// settlement with a zero average.
    pub fn calculate(&self, members: &[Member]) -> Settlement {
        if members.is_empty() {
            return Settlement::empty();
        }

        let raw_total: Money = members.iter().map(|member| member.amount).sum();
        let average_amount = (raw_total / members.len()).round2();

        let settlement_details: Vec<SettlementDetail> = members
            .iter()
            .map(|member| {
                SettlementDetail::new(
                    member.name.clone(),
                    (member.amount - average_amount).round2(),
                )
            })
            .collect();

        tracing::debug!(
            member_count = members.len(),
            total = %raw_total,
            average = %average_amount,
            "Computed equal-split settlement"
        );

        let transfer_details = TransferPlanner.plan(&settlement_details);

        Settlement {
            total_amount: raw_total.round2(),
            average_amount,
            settlement_details,
            transfer_details,
        }
    }
}
