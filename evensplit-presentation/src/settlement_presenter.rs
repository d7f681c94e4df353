use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use evensplit_application::{MergeOutcome, Record};
use evensplit_domain::{Member, Money, Settlement, SettlementDetail, TransferDetail};
use evensplit_i18n as i18n;
use std::borrow::Cow;

/// Activity name as shown to users: empty names get the untitled label and
/// merged records carry the merged prefix.
pub fn display_activity_name(name: &str, merged: bool) -> Cow<'_, str> {
    let name = if name.is_empty() {
        i18n::UNNAMED_ACTIVITY
    } else {
        name
    };
    if merged {
        Cow::Owned(format!("{} {name}", i18n::MERGED_PREFIX))
    } else {
        Cow::Borrowed(name)
    }
}

/// Plain-text settlement reports, ready to paste into a chat.
pub struct SettlementTextPresenter;

impl SettlementTextPresenter {
    /// Summary followed by the transfer plan for a live session.
    pub fn render_settlement(activity_name: &str, settlement: &Settlement) -> String {
        let mut lines = summary_lines(
            &display_activity_name(activity_name, false),
            settlement.total_amount,
            Some(settlement.average_amount),
            &settlement.settlement_details,
        );
        lines.push(String::new());
        lines.extend(transfer_lines(
            i18n::TRANSFER_PLAN,
            &settlement.transfer_details,
        ));
        lines.join("\n")
    }

    /// Full report for a stored record, with transfers re-planned from its deviations.
    pub fn render_record(record: &Record) -> String {
        let mut lines = summary_lines(
            &display_activity_name(&record.activity_name, record.is_merged()),
            record.total_amount,
            record.average_amount,
            &record.settlement_details,
        );
        lines.push(String::new());
        lines.extend(transfer_lines(i18n::TRANSFER_PLAN, &record.transfers()));

        if !record.members.is_empty() {
            lines.push(String::new());
            lines.extend(member_lines(&record.members));
        }

        lines.push(String::new());
        lines.push(i18n::generated_at(format_record_time(record.created_at)));
        lines.join("\n")
    }

    /// Every source summary, then the merged deviations and their transfer plan.
    pub fn render_merge(outcome: &MergeOutcome) -> String {
        let mut blocks: Vec<String> = outcome
            .sources
            .iter()
            .map(|source| {
                summary_lines(
                    &display_activity_name(&source.activity_name, source.is_merged()),
                    source.total_amount,
                    source.average_amount,
                    &source.settlement_details,
                )
                .join("\n")
            })
            .collect();

        let merged = &outcome.record;
        let mut tail = vec![i18n::section_heading(i18n::MERGED_SETTLEMENT_DETAILS)];
        tail.extend(merged.settlement_details.iter().map(detail_line));
        tail.push(String::new());
        tail.extend(transfer_lines(
            i18n::MERGED_TRANSFER_PLAN,
            &merged.transfers(),
        ));
        blocks.push(tail.join("\n"));

        blocks.join("\n\n")
    }

    /// One line of the history listing; selected records are starred.
    pub fn render_history_line(record: &Record) -> String {
        let marker = if record.selected { '*' } else { ' ' };
        format!(
            "{marker} {}  {}  {}  {}",
            record.id,
            format_record_time(record.created_at),
            display_activity_name(&record.activity_name, record.is_merged()),
            i18n::amount(record.total_amount),
        )
    }
}

fn summary_lines(
    name: &str,
    total: Money,
    average: Option<Money>,
    details: &[SettlementDetail],
) -> Vec<String> {
    let mut lines = vec![
        i18n::activity_heading(name),
        i18n::total_amount_line(total),
    ];
    if let Some(average) = average {
        lines.push(i18n::per_person_line(average));
    }
    lines.push(i18n::section_heading(i18n::SETTLEMENT_DETAILS));
    lines.extend(details.iter().map(detail_line));
    lines
}

fn detail_line(detail: &SettlementDetail) -> String {
    let diff = detail.diff.round2();
    if diff.is_sign_positive() {
        i18n::detail_line(&detail.name, i18n::OVERPAID, diff)
    } else if diff.is_sign_negative() {
        i18n::detail_line(&detail.name, i18n::UNDERPAID, diff.abs())
    } else {
        i18n::settled_line(&detail.name)
    }
}

fn transfer_lines(title: &str, transfers: &[TransferDetail]) -> Vec<String> {
    let mut lines = vec![i18n::section_heading(title)];
    lines.extend(
        transfers
            .iter()
            .map(|transfer| i18n::transfer_line(&transfer.from, &transfer.to, transfer.amount)),
    );
    lines
}

fn member_lines(members: &[Member]) -> Vec<String> {
    let mut lines = vec![i18n::section_heading(i18n::MEMBERS)];
    lines.extend(
        members
            .iter()
            .map(|member| i18n::detail_line(&member.name, i18n::PAID, member.amount)),
    );
    lines
}

fn format_record_time(time: DateTime<Utc>) -> String {
    let local = time.with_timezone(&Local);
    i18n::record_time(local.month(), local.day(), local.hour(), local.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use evensplit_application::{RecordId, RecordKind};
    use evensplit_domain::SettlementCalculator;
    use rstest::rstest;

    fn members(entries: &[(&str, i64)]) -> Vec<Member> {
        entries
            .iter()
            .map(|&(name, amount)| Member::new(name, Money::from_i64(amount)))
            .collect()
    }

    fn record(name: &str, kind: RecordKind, entries: &[(&str, i64)]) -> Record {
        let members = members(entries);
        let settlement = SettlementCalculator.calculate(&members);
        Record {
            id: RecordId(1_700_000_000_000),
            created_at: Utc
                .timestamp_millis_opt(1_700_000_000_000)
                .single()
                .expect("valid timestamp"),
            activity_name: name.to_string(),
            kind,
            total_amount: settlement.total_amount,
            average_amount: match kind {
                RecordKind::Single => Some(settlement.average_amount),
                RecordKind::Merged => None,
            },
            settlement_details: settlement.settlement_details,
            members,
            selected: false,
        }
    }

    #[rstest]
    #[case::plain("Dinner", false, "Dinner".to_string())]
    #[case::unnamed("", false, i18n::UNNAMED_ACTIVITY.to_string())]
    #[case::merged("A+B", true, format!("{} A+B", i18n::MERGED_PREFIX))]
    #[case::merged_unnamed("", true, format!("{} {}", i18n::MERGED_PREFIX, i18n::UNNAMED_ACTIVITY))]
    fn activity_names(#[case] name: &str, #[case] merged: bool, #[case] expected: String) {
        assert_eq!(display_activity_name(name, merged), expected);
    }

    #[test]
    fn settlement_text_lists_details_then_transfers() {
        let members = members(&[("A", 100), ("B", 0), ("C", 50)]);
        let settlement = SettlementCalculator.calculate(&members);

        let text = SettlementTextPresenter::render_settlement("Lunch", &settlement);

        let expected = [
            i18n::activity_heading("Lunch"),
            i18n::total_amount_line(150),
            i18n::per_person_line(50),
            i18n::section_heading(i18n::SETTLEMENT_DETAILS),
            i18n::detail_line("A", i18n::OVERPAID, 50),
            i18n::detail_line("B", i18n::UNDERPAID, 50),
            i18n::settled_line("C"),
            String::new(),
            i18n::section_heading(i18n::TRANSFER_PLAN),
            i18n::transfer_line("B", "A", 50),
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn fractional_amounts_keep_cents() {
        let members = vec![
            Member::new("A", Money::new(1002, 2)),
            Member::new("B", Money::ZERO),
        ];
        let settlement = SettlementCalculator.calculate(&members);

        let text = SettlementTextPresenter::render_settlement("Tea", &settlement);

        assert!(text.contains(&i18n::transfer_line("B", "A", "5.01")));
        assert!(text.contains(&i18n::per_person_line("5.01")));
    }

    #[test]
    fn record_text_includes_members_and_time() {
        let record = record("Trip", RecordKind::Single, &[("A", 90), ("B", 30), ("C", 0)]);

        let text = SettlementTextPresenter::render_record(&record);

        assert!(text.starts_with(&i18n::activity_heading("Trip")));
        assert!(text.contains(&i18n::transfer_line("C", "A", 40)));
        assert!(text.contains(&i18n::transfer_line("B", "A", 10)));
        assert!(text.contains(&i18n::detail_line("B", i18n::PAID, 30)));
        assert!(text.ends_with(&i18n::generated_at(format_record_time(record.created_at))));
    }

    #[test]
    fn merged_record_has_no_per_person_line() {
        let record = record("X+Y", RecordKind::Merged, &[("A", 10), ("B", 0)]);

        let text = SettlementTextPresenter::render_record(&record);

        assert!(text.starts_with(&i18n::activity_heading(format!(
            "{} X+Y",
            i18n::MERGED_PREFIX
        ))));
        assert!(!text.contains(&i18n::per_person_line(5)));
    }

    #[test]
    fn merge_text_joins_sources_then_merged_sections() {
        let first = record("Dinner", RecordKind::Single, &[("X", 20), ("Y", 0)]);
        let second = record("Movie", RecordKind::Single, &[("X", 0), ("Y", 10)]);
        let mut merged = record("Dinner+Movie", RecordKind::Merged, &[]);
        merged.settlement_details = vec![
            SettlementDetail::new("X", Money::from_i64(5)),
            SettlementDetail::new("Y", Money::from_i64(-5)),
        ];
        let outcome = MergeOutcome {
            record: merged,
            sources: vec![first, second],
        };

        let text = SettlementTextPresenter::render_merge(&outcome);
        let blocks: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].starts_with(&i18n::activity_heading("Dinner")));
        assert!(blocks[1].starts_with(&i18n::activity_heading("Movie")));
        assert_eq!(
            blocks[2],
            [
                i18n::section_heading(i18n::MERGED_SETTLEMENT_DETAILS),
                i18n::detail_line("X", i18n::OVERPAID, 5),
                i18n::detail_line("Y", i18n::UNDERPAID, 5),
            ]
            .join("\n")
        );
        assert_eq!(
            blocks[3],
            [
                i18n::section_heading(i18n::MERGED_TRANSFER_PLAN),
                i18n::transfer_line("Y", "X", 5),
            ]
            .join("\n")
        );
    }

    #[rstest]
    #[case::unselected(false, ' ')]
    #[case::selected(true, '*')]
    fn history_line_marks_selection(#[case] selected: bool, #[case] marker: char) {
        let mut record = record("", RecordKind::Single, &[("A", 12)]);
        record.selected = selected;

        let line = SettlementTextPresenter::render_history_line(&record);

        assert_eq!(
            line,
            format!(
                "{marker} {}  {}  {}  {}",
                record.id,
                format_record_time(record.created_at),
                i18n::UNNAMED_ACTIVITY,
                i18n::amount(12),
            )
        );
    }
}
