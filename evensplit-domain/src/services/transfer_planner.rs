use crate::{
    model::{Money, SettlementDetail, TransferDetail},
    services::rounding::{is_settled, settled_tolerance},
};

/// Plans peer-to-peer transfers that bring every deviation back to zero.
pub struct TransferPlanner;

struct OpenBalance<'a> {
    name: &'a str,
    diff: Money,
}

impl TransferPlanner {
    /// Greedy two-queue matching.
    ///
    /// Debtors are served largest debt first, creditors largest credit first. Each
    /// step moves `min(|debt|, credit)` and advances whichever side dropped below
    /// one cent (possibly both). Stops as soon as either queue runs out.
    ///
    /// Input that does not sum to zero is not rejected: whatever cannot be matched
    /// stays unsettled and is reported by [`TransferPlanner::residual`].
    pub fn plan(&self, details: &[SettlementDetail]) -> Vec<TransferDetail> {
        let mut debtors: Vec<OpenBalance<'_>> = details
            .iter()
            .filter(|detail| detail.diff.is_sign_negative())
            .map(|detail| OpenBalance {
                name: &detail.name,
                diff: detail.diff,
            })
            .collect();
        let mut creditors: Vec<OpenBalance<'_>> = details
            .iter()
            .filter(|detail| detail.diff.is_sign_positive())
            .map(|detail| OpenBalance {
                name: &detail.name,
                diff: detail.diff,
            })
            .collect();

        // Stable sorts: equal amounts keep their input order.
        debtors.sort_by(|a, b| a.diff.cmp(&b.diff));
        creditors.sort_by(|a, b| b.diff.cmp(&a.diff));

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while let (Some(debtor), Some(creditor)) =
            (debtors.get_mut(debtor_idx), creditors.get_mut(creditor_idx))
        {
            let amount = debtor.diff.abs().min(creditor.diff);

            let rounded = amount.round2();
            if rounded.is_sign_positive() {
                transfers.push(TransferDetail {
                    from: debtor.name.to_string(),
                    to: creditor.name.to_string(),
                    amount: rounded,
                });
            }

            debtor.diff = (debtor.diff + amount).round2();
            creditor.diff = (creditor.diff - amount).round2();

            if is_settled(debtor.diff) {
                debtor_idx += 1;
            }
            if is_settled(creditor.diff) {
                creditor_idx += 1;
            }
        }

        let unsettled: Money = debtors[debtor_idx..]
            .iter()
            .chain(&creditors[creditor_idx..])
            .map(|balance| balance.diff)
            .sum();
        if !is_settled(unsettled) {
            tracing::warn!(
                residual = %unsettled,
                tolerance = %settled_tolerance(),
                open_debtors = debtors.len() - debtor_idx,
                open_creditors = creditors.len() - creditor_idx,
                "Transfer plan leaves an unsettled residual; input deviations do not sum to zero"
            );
        }

        tracing::debug!(
            detail_count = details.len(),
            transfer_count = transfers.len(),
            "Planned settlement transfers"
        );

        transfers
    }

    /// Net amount no transfer plan can settle: the rounded sum of all deviations.
    pub fn residual(details: &[SettlementDetail]) -> Money {
        details
            .iter()
            .map(|detail| detail.diff)
            .sum::<Money>()
            .round2()
    }
}
