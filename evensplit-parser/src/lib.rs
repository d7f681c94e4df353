#![warn(clippy::uninlined_format_args)]

//! Parser for plain-text member sheets.
//!
//! ```text
//! # Weekend dinner
//! Alice 120.50
//! Bob: 30      // trailing comments are allowed
//! 张三：¥0元
//! ```
//!
//! A `#` line names the activity; every other non-blank line is `name amount`.
//! Amounts are returned as written; checking them is left to the caller.

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till1, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize, rest},
    sequence::preceded,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry<'a> {
    pub name: &'a str,
    pub amount: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntryWithLine<'a> {
    pub line: usize,
    pub entry: SheetEntry<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sheet<'a> {
    pub activity_name: Option<&'a str>,
    pub entries: Vec<SheetEntryWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

enum Line<'a> {
    Activity(&'a str),
    Entry(SheetEntry<'a>),
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{3000}'
}

fn blank0(input: &str) -> IResult<&str, &str> {
    take_while(is_blank).parse(input)
}

fn blank1(input: &str) -> IResult<&str, &str> {
    take_while1(is_blank).parse(input)
}

fn is_name_terminator(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == '：'
}

fn name(input: &str) -> IResult<&str, &str> {
    take_till1(is_name_terminator).parse(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        (blank0, alt((char(':'), char('：'))), blank0).map(|_| ()),
        blank1.map(|_| ()),
    ))
    .parse(input)
}

fn currency_prefix(input: &str) -> IResult<&str, &str> {
    alt((tag("¥"), tag("￥"), tag("$"))).parse(input)
}

fn currency_suffix(input: &str) -> IResult<&str, &str> {
    alt((tag("元"), tag_no_case("yuan"))).parse(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize((opt(char('-')), digit1, opt((char('.'), digit1)))).parse(input)
}

// amount with optional currency markers, e.g. `¥12.50` or `12.5元`
fn amount(input: &str) -> IResult<&str, &str> {
    (opt(currency_prefix), blank0, number, blank0, opt(currency_suffix))
        .map(|(_, _, value, _, _)| value)
        .parse(input)
}

// name amount | name: amount
fn entry(input: &str) -> IResult<&str, SheetEntry<'_>> {
    (name, separator, amount)
        .map(|(name, _, amount)| SheetEntry { name, amount })
        .parse(input)
}

// # activity name
fn activity(input: &str) -> IResult<&str, &str> {
    preceded((char('#'), blank0), rest)
        .map(str::trim)
        .parse(input)
}

fn line(input: &str) -> IResult<&str, Line<'_>> {
    alt((activity.map(Line::Activity), entry.map(Line::Entry))).parse(input)
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

pub fn parse_sheet(input: &str) -> Result<Sheet<'_>, ParseError> {
    let mut sheet = Sheet::default();
    let mut activity_line = None;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }

        let (rest, parsed) = line(content).map_err(|_| ParseError::SyntaxError {
            line: line_no,
            detail: i18n::expected_member_entry(content),
        })?;
        if !rest.trim().is_empty() {
            return Err(ParseError::SyntaxError {
                line: line_no,
                detail: i18n::unparsed_input(rest.trim()),
            });
        }

        match parsed {
            Line::Activity(name) => {
                if let Some(first_line) = activity_line {
                    return Err(ParseError::SyntaxError {
                        line: line_no,
                        detail: i18n::duplicate_activity_name(first_line),
                    });
                }
                activity_line = Some(line_no);
                sheet.activity_name = Some(name);
            }
            Line::Entry(entry) => sheet.entries.push(SheetEntryWithLine {
                line: line_no,
                entry,
            }),
        }
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::space("Alice 120.50", "Alice", "120.50")]
    #[case::colon("Bob: 30", "Bob", "30")]
    #[case::colon_no_space("Bob:30", "Bob", "30")]
    #[case::fullwidth_colon("张三：0", "张三", "0")]
    #[case::yen_prefix("Carol ¥12.5", "Carol", "12.5")]
    #[case::yuan_suffix("李四 88元", "李四", "88")]
    #[case::negative("Dave -5", "Dave", "-5")]
    #[case::tab("Eve\t7", "Eve", "7")]
    fn test_entry(#[case] input: &str, #[case] name: &str, #[case] amount: &str) {
        let (rest, parsed) = entry(input).unwrap();
        assert!(rest.is_empty(), "unexpected rest: {rest}");
        assert_eq!(parsed, SheetEntry { name, amount });
    }

    #[rstest]
    #[case::plain("# Weekend dinner", "Weekend dinner")]
    #[case::no_space("#周末聚餐", "周末聚餐")]
    #[case::padded("#   Trip  ", "Trip")]
    fn test_activity(#[case] input: &str, #[case] expected: &str) {
        let (_, name) = activity(input).unwrap();
        assert_eq!(name, expected);
    }

    #[test]
    fn test_parse_sheet() {
        let input = "# Dinner\n\nAlice 100 // host\n// nobody\nBob: 0\n";
        let sheet = parse_sheet(input).unwrap();

        assert_eq!(sheet.activity_name, Some("Dinner"));
        assert_eq!(
            sheet.entries,
            vec![
                SheetEntryWithLine {
                    line: 3,
                    entry: SheetEntry {
                        name: "Alice",
                        amount: "100",
                    },
                },
                SheetEntryWithLine {
                    line: 5,
                    entry: SheetEntry {
                        name: "Bob",
                        amount: "0",
                    },
                },
            ]
        );
    }

    #[test]
    fn test_activity_is_optional() {
        let sheet = parse_sheet("A 1\nB 2").unwrap();
        assert_eq!(sheet.activity_name, None);
        assert_eq!(sheet.entries.len(), 2);
    }

    #[test]
    fn test_empty_sheet() {
        assert_eq!(parse_sheet("").unwrap(), Sheet::default());
    }

    #[rstest]
    #[case::missing_amount("Alice", 1)]
    #[case::word_amount("A 1\nBob lots", 2)]
    #[case::trailing_garbage("Alice 10 20", 1)]
    #[case::exponent("Alice 1e5", 1)]
    #[case::second_activity("# One\nA 1\n# Two", 3)]
    fn test_syntax_errors(#[case] input: &str, #[case] expected_line: usize) {
        match parse_sheet(input) {
            Err(ParseError::SyntaxError { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
