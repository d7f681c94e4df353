use evensplit_application::RecordId;
use std::{borrow::Cow, path::PathBuf};

pub const USAGE: &str = "\
Usage: evensplit <command>

Commands:
  settle <sheet> [--dry-run]  Settle a member sheet (`-` reads stdin) and save it
  history                     List saved records, newest first (* = selected)
  show <id>                   Print a saved record with its transfer plan
  select <id>                 Mark a record for merging
  unselect <id>               Unmark a record
  merge                       Merge all selected records into a new record
  delete <id>                 Delete a record
  clear --yes                 Delete every record";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settle { source: SheetSource, dry_run: bool },
    History,
    Show(RecordId),
    Select(RecordId),
    Unselect(RecordId),
    Merge,
    Delete(RecordId),
    Clear { confirmed: bool },
}

pub fn parse_args<I, S>(args: I) -> Result<Command, Cow<'static, str>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();

    match args.as_slice() {
        ["settle", rest @ ..] => parse_settle(rest),
        ["history"] => Ok(Command::History),
        ["show", id] => parse_id(id).map(Command::Show),
        ["select", id] => parse_id(id).map(Command::Select),
        ["unselect", id] => parse_id(id).map(Command::Unselect),
        ["merge"] => Ok(Command::Merge),
        ["delete", id] => parse_id(id).map(Command::Delete),
        ["clear"] => Ok(Command::Clear { confirmed: false }),
        ["clear", "--yes" | "-y"] => Ok(Command::Clear { confirmed: true }),
        _ => Err(USAGE.into()),
    }
}

fn parse_settle(args: &[&str]) -> Result<Command, Cow<'static, str>> {
    let mut dry_run = false;
    let mut sheet = None;

    for arg in args {
        match *arg {
            "--dry-run" | "-n" => dry_run = true,
            value if sheet.is_none() => sheet = Some(value),
            _ => return Err(USAGE.into()),
        }
    }

    let source = match sheet {
        Some("-") => SheetSource::Stdin,
        Some(path) => SheetSource::File(PathBuf::from(path)),
        None => return Err(USAGE.into()),
    };

    Ok(Command::Settle { source, dry_run })
}

fn parse_id(value: &str) -> Result<RecordId, Cow<'static, str>> {
    value
        .parse()
        .map(RecordId)
        .map_err(|_| format!("Invalid record id '{value}'").into())
}
