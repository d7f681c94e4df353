use crate::{
    error::{RecordStoreError, SheetParseError},
    model::{MemberSheet, Record},
};
use chrono::{DateTime, Utc};

/// Ordered history storage, newest record first.
pub trait RecordStore: Send + Sync {
    fn load(&self) -> Result<Vec<Record>, RecordStoreError>;

    fn save(&self, records: &[Record]) -> Result<(), RecordStoreError>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait MemberSheetParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<MemberSheet<'a>, SheetParseError>;
}
