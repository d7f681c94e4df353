#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;

use bootstrap::{AppConfig, init_logging};
use cli::{Command, SheetSource};
use evensplit_application::{
    HistoryService, MemberSheetParser, Record, RecordId, RecordStore, Session,
};
use evensplit_i18n as i18n;
use evensplit_infrastructure::{
    EvensplitSheetParser, InMemoryRecordStore, JsonFileRecordStore, SystemClock,
};
use evensplit_presentation::{
    SettlementTextPresenter, format_history_error, format_session_error,
    format_sheet_parse_error,
};
use std::{
    borrow::Cow,
    env, fs,
    io::{self, Read},
    process,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let command = cli::parse_args(env::args().skip(1))?;
    let config = AppConfig::from_env();
    init_logging();

    tracing::debug!(records_path = %config.records_path.display(), ?command, "Starting");

    let store = JsonFileRecordStore::new(&config.records_path);
    let history = HistoryService::new(&store, &SystemClock);

    match command {
        Command::Settle { source, dry_run } => settle(&history, &source, dry_run),
        Command::History => {
            let records = history
                .records()
                .map_err(|err| format_history_error(&err))?;
            if records.is_empty() {
                println!("{}", i18n::NO_RECORDS);
            }
            for record in &records {
                println!("{}", SettlementTextPresenter::render_history_line(record));
            }
            Ok(())
        }
        Command::Show(id) => {
            let record = history
                .record(id)
                .map_err(|err| format_history_error(&err))?;
            println!("{}", SettlementTextPresenter::render_record(&record));
            Ok(())
        }
        Command::Select(id) => toggle_selection(&history, id, true),
        Command::Unselect(id) => toggle_selection(&history, id, false),
        Command::Merge => {
            let outcome = history
                .merge_selected()
                .map_err(|err| format_history_error(&err))?;
            println!("{}", SettlementTextPresenter::render_merge(&outcome));
            Ok(())
        }
        Command::Delete(id) => {
            let removed = history
                .delete(id)
                .map_err(|err| format_history_error(&err))?;
            println!("{}", SettlementTextPresenter::render_history_line(&removed));
            Ok(())
        }
        Command::Clear { confirmed: false } => Err(i18n::CLEAR_NEEDS_CONFIRMATION.into()),
        Command::Clear { confirmed: true } => {
            let count = history.clear().map_err(|err| format_history_error(&err))?;
            tracing::debug!(record_count = count, "Cleared history");
            println!("{}", i18n::RECORDS_CLEARED);
            Ok(())
        }
    }
}

fn settle(history: &HistoryService<'_>, source: &SheetSource, dry_run: bool) -> CliResult<()> {
    let content = read_sheet(source)?;
    let sheet = EvensplitSheetParser
        .parse(&content)
        .map_err(|err| format_sheet_parse_error(&err))?;
    let session = Session::from_sheet(&sheet).map_err(|err| format_session_error(&err))?;

    let record = if dry_run {
        let scratch = InMemoryRecordStore::new();
        generate_with(&scratch, &session)?
    } else {
        history
            .generate(&session)
            .map_err(|err| format_history_error(&err))?
    };

    println!("{}", SettlementTextPresenter::render_record(&record));
    Ok(())
}

fn generate_with(
    store: &dyn RecordStore,
    session: &Session,
) -> CliResult<Record> {
    HistoryService::new(store, &SystemClock)
        .generate(session)
        .map_err(|err| format_history_error(&err).into())
}

fn toggle_selection(
    history: &HistoryService<'_>,
    id: RecordId,
    selected: bool,
) -> CliResult<()> {
    history
        .set_selected(id, selected)
        .map_err(|err| format_history_error(&err))?;
    let record = history
        .record(id)
        .map_err(|err| format_history_error(&err))?;
    println!("{}", SettlementTextPresenter::render_history_line(&record));
    Ok(())
}

fn read_sheet(source: &SheetSource) -> CliResult<String> {
    match source {
        SheetSource::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            Ok(content)
        }
        SheetSource::File(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()).into()),
    }
}
