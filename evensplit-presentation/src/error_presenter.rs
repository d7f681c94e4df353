use evensplit_application::{
    HistoryError, MemberInputError, MergeError, RecordStoreError, SessionError, SheetParseError,
};
use evensplit_i18n as i18n;

pub fn format_member_input_error(error: &MemberInputError) -> String {
    match error {
        MemberInputError::Incomplete => i18n::INCOMPLETE_MEMBER.to_string(),
        MemberInputError::InvalidAmount(_) | MemberInputError::NegativeAmount(_) => {
            i18n::INVALID_AMOUNT.to_string()
        }
        MemberInputError::AmountTooLarge { max, .. } => i18n::amount_too_large(max),
    }
}

pub fn format_session_error(error: &SessionError) -> String {
    match error {
        SessionError::MissingActivityName => i18n::MISSING_ACTIVITY_NAME.to_string(),
        SessionError::InvalidMember(source) => format_member_input_error(source),
        SessionError::InvalidEntry { line, source } => {
            i18n::invalid_member_line(*line, format_member_input_error(source))
        }
        SessionError::MemberNotFound(index) => i18n::member_not_found(*index),
    }
}

pub fn format_sheet_parse_error(error: &SheetParseError) -> String {
    match error {
        SheetParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
    }
}

pub fn format_history_error(error: &HistoryError) -> String {
    match error {
        HistoryError::Store(source) => format_store_error(source),
        HistoryError::Merge(MergeError::NotEnoughRecords { .. }) => {
            i18n::NOT_ENOUGH_RECORDS.to_string()
        }
        HistoryError::Merge(MergeError::AlreadyMerged(_)) => i18n::ALREADY_MERGED.to_string(),
        HistoryError::RecordNotFound(id) => i18n::record_not_found(id.0),
    }
}

fn format_store_error(error: &RecordStoreError) -> String {
    format!("{} ({error})", i18n::RECORD_STORE_FAILED)
}
