use evensplit_application::{MemberEntry, MemberSheet, MemberSheetParser, SheetParseError};
use evensplit_parser::{ParseError, Sheet, SheetEntryWithLine, parse_sheet};

#[derive(Default)]
pub struct EvensplitSheetParser;

impl MemberSheetParser for EvensplitSheetParser {
    fn parse<'a>(&self, content: &'a str) -> Result<MemberSheet<'a>, SheetParseError> {
        match parse_sheet(content) {
            Ok(Sheet {
                activity_name,
                entries,
            }) => Ok(MemberSheet {
                activity_name,
                entries: entries
                    .into_iter()
                    .map(|SheetEntryWithLine { line, entry }| MemberEntry {
                        line,
                        name: entry.name,
                        amount: entry.amount,
                    })
                    .collect(),
            }),
            Err(ParseError::SyntaxError { line, detail }) => {
                Err(SheetParseError::SyntaxError { line, detail })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn maps_entries_with_lines() {
        let sheet = EvensplitSheetParser
            .parse("# Dinner\nAlice: 120\n\nBob 30.5\n")
            .expect("valid sheet");

        assert_eq!(sheet.activity_name, Some("Dinner"));
        assert_eq!(
            sheet.entries,
            vec![
                MemberEntry {
                    line: 2,
                    name: "Alice",
                    amount: "120",
                },
                MemberEntry {
                    line: 4,
                    name: "Bob",
                    amount: "30.5",
                },
            ]
        );
    }

    #[rstest]
    #[case::missing_amount("# Trip\nAlice\n", 2)]
    #[case::second_activity("# Trip\n# Again\n", 2)]
    fn maps_syntax_errors(#[case] input: &str, #[case] expected_line: usize) {
        let result = EvensplitSheetParser.parse(input);

        assert!(matches!(
            result,
            Err(SheetParseError::SyntaxError { line, .. }) if line == expected_line
        ));
    }
}
