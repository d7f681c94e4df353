use crate::{
    error::{MemberInputError, SessionError},
    model::MemberSheet,
};
use evensplit_domain::{Member, Money, Settlement, SettlementCalculator};
use rust_decimal::Decimal;

/// Largest amount a single member may have paid.
pub fn max_member_amount() -> Money {
    Money::from_i64(1_000_000_000_000)
}

/// Validates raw name/amount input into a member.
///
/// Both fields are trimmed and required. The amount is rounded to two decimals,
/// must not be negative and must not exceed [`max_member_amount`].
pub fn parse_member(name: &str, amount: &str) -> Result<Member, MemberInputError> {
    let name = name.trim();
    let amount = amount.trim();
    if name.is_empty() || amount.is_empty() {
        return Err(MemberInputError::Incomplete);
    }

    let value: Decimal = amount
        .parse()
        .map_err(|_| MemberInputError::InvalidAmount(amount.to_string()))?;
    let value = Money::from_decimal(value).round2();
    if value.is_sign_negative() {
        return Err(MemberInputError::NegativeAmount(value));
    }
    let max = max_member_amount();
    if value > max {
        return Err(MemberInputError::AmountTooLarge { amount: value, max });
    }

    Ok(Member::new(name, value))
}

/// The member list being edited, together with its activity name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    activity_name: String,
    members: Vec<Member>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity(name: &str) -> Self {
        Self {
            activity_name: name.trim().to_string(),
            members: Vec::new(),
        }
    }

    /// Builds a session from a parsed sheet, validating every entry.
    pub fn from_sheet(sheet: &MemberSheet<'_>) -> Result<Self, SessionError> {
        let mut session = Self::with_activity(sheet.activity_name.unwrap_or_default());
        if !sheet.entries.is_empty() && session.activity_name.is_empty() {
            return Err(SessionError::MissingActivityName);
        }

        for entry in &sheet.entries {
            let member = parse_member(entry.name, entry.amount).map_err(|source| {
                SessionError::InvalidEntry {
                    line: entry.line,
                    source,
                }
            })?;
            session.members.push(member);
        }

        Ok(session)
    }

    pub fn activity_name(&self) -> &str {
        &self.activity_name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn add_member(&mut self, name: &str, amount: &str) -> Result<&Member, SessionError> {
        if self.activity_name.is_empty() {
            return Err(SessionError::MissingActivityName);
        }
        let member = parse_member(name, amount)?;
        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    pub fn update_member(
        &mut self,
        index: usize,
        name: &str,
        amount: &str,
    ) -> Result<&Member, SessionError> {
        if index >= self.members.len() {
            return Err(SessionError::MemberNotFound(index));
        }
        let member = parse_member(name, amount)?;
        self.members[index] = member;
        Ok(&self.members[index])
    }

    pub fn remove_member(&mut self, index: usize) -> Result<Member, SessionError> {
        if index >= self.members.len() {
            return Err(SessionError::MemberNotFound(index));
        }
        Ok(self.members.remove(index))
    }

    pub fn settlement(&self) -> Settlement {
        SettlementCalculator.calculate(&self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberEntry;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        Session::with_activity("Dinner")
    }

    #[rstest]
    #[case::plain("Alice", "12", Member::new("Alice", Money::new(1200, 2)))]
    #[case::trimmed("  Bob ", " 7.5 ", Member::new("Bob", Money::new(750, 2)))]
    #[case::rounded("Carol", "1.005", Member::new("Carol", Money::new(101, 2)))]
    #[case::zero("Dave", "0", Member::new("Dave", Money::ZERO))]
    #[case::at_limit("Erin", "1000000000000", Member::new("Erin", max_member_amount()))]
    fn parse_member_accepts(#[case] name: &str, #[case] amount: &str, #[case] expected: Member) {
        assert_eq!(parse_member(name, amount), Ok(expected));
    }

    #[rstest]
    #[case::empty_name("  ", "10", MemberInputError::Incomplete)]
    #[case::empty_amount("Alice", " ", MemberInputError::Incomplete)]
    #[case::not_a_number("Alice", "ten", MemberInputError::InvalidAmount("ten".to_string()))]
    #[case::negative(
        "Alice",
        "-3",
        MemberInputError::NegativeAmount(Money::new(-300, 2))
    )]
    #[case::above_limit(
        "Alice",
        "1000000000000.01",
        MemberInputError::AmountTooLarge {
            amount: Money::new(100_000_000_000_001, 2),
            max: max_member_amount(),
        }
    )]
    #[case::decimal_max(
        "Alice",
        "79228162514264337593543950335",
        MemberInputError::AmountTooLarge {
            amount: Money::from_decimal(Decimal::MAX),
            max: max_member_amount(),
        }
    )]
    fn parse_member_rejects(
        #[case] name: &str,
        #[case] amount: &str,
        #[case] expected: MemberInputError,
    ) {
        assert_eq!(parse_member(name, amount), Err(expected));
    }

    #[test]
    fn sub_cent_negative_rounds_to_zero() {
        let member = parse_member("Alice", "-0.001").expect("rounds to zero");
        assert!(member.amount.is_zero());
    }

    #[rstest]
    fn oversized_members_never_reach_the_settlement(mut session: Session) {
        let huge = "79228162514264337593543950335";

        assert!(session.add_member("A", huge).is_err());
        assert!(session.add_member("B", huge).is_err());
        session.add_member("C", "1000000000000").expect("at limit");
        session.add_member("D", "1000000000000").expect("at limit");

        let settlement = session.settlement();
        assert_eq!(settlement.total_amount, Money::from_i64(2_000_000_000_000));
        assert!(settlement.transfer_details.is_empty());
    }

    #[test]
    fn adding_requires_activity_name() {
        let mut session = Session::new();
        assert_eq!(
            session.add_member("Alice", "10"),
            Err(SessionError::MissingActivityName)
        );
        assert!(session.members().is_empty());
    }

    #[rstest]
    fn add_update_remove(mut session: Session) {
        session.add_member("A", "90").expect("add A");
        session.add_member("B", "30").expect("add B");
        session.add_member("C", "0").expect("add C");

        let settlement = session.settlement();
        assert_eq!(settlement.average_amount, Money::from_i64(40));
        assert_eq!(settlement.transfer_details.len(), 2);

        session.update_member(1, "B", "90").expect("update B");
        let removed = session.remove_member(2).expect("remove C");
        assert_eq!(removed.name, "C");

        let settlement = session.settlement();
        assert_eq!(settlement.average_amount, Money::from_i64(90));
        assert!(settlement.transfer_details.is_empty());
    }

    #[rstest]
    fn out_of_range_index(mut session: Session) {
        assert_eq!(
            session.update_member(0, "A", "1"),
            Err(SessionError::MemberNotFound(0))
        );
        assert_eq!(session.remove_member(3), Err(SessionError::MemberNotFound(3)));
    }

    #[rstest]
    fn invalid_update_keeps_previous_member(mut session: Session) {
        session.add_member("A", "10").expect("add A");

        let result = session.update_member(0, "A", "oops");

        assert!(matches!(
            result,
            Err(SessionError::InvalidMember(MemberInputError::InvalidAmount(_)))
        ));
        assert_eq!(session.members()[0].amount, Money::from_i64(10));
    }

    #[test]
    fn from_sheet_reports_entry_line() {
        let sheet = MemberSheet {
            activity_name: Some("Trip"),
            entries: vec![
                MemberEntry {
                    line: 2,
                    name: "A",
                    amount: "10",
                },
                MemberEntry {
                    line: 3,
                    name: "B",
                    amount: "-1",
                },
            ],
        };

        assert_eq!(
            Session::from_sheet(&sheet),
            Err(SessionError::InvalidEntry {
                line: 3,
                source: MemberInputError::NegativeAmount(Money::from_i64(-1)),
            })
        );
    }

    #[test]
    fn from_sheet_requires_activity_for_members() {
        let sheet = MemberSheet {
            activity_name: None,
            entries: vec![MemberEntry {
                line: 1,
                name: "A",
                amount: "10",
            }],
        };

        assert_eq!(
            Session::from_sheet(&sheet),
            Err(SessionError::MissingActivityName)
        );
    }
}
