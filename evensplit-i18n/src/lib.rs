#[cfg(all(feature = "zh", feature = "en"))]
compile_error!("Cannot enable both 'zh' and 'en' features at the same time");

use std::fmt::Display;

#[cfg(feature = "zh")]
pub mod strings {
    pub const SETTLEMENT_DETAILS: &str = "结算明细";
    pub const TRANSFER_PLAN: &str = "转账方案";
    pub const MERGED_SETTLEMENT_DETAILS: &str = "合并结算明细";
    pub const MERGED_TRANSFER_PLAN: &str = "合并转账方案";
    pub const MEMBERS: &str = "成员";
    pub const MERGED_PREFIX: &str = "[合并]";
    pub const UNNAMED_ACTIVITY: &str = "未命名";
    pub const OVERPAID: &str = "多付";
    pub const UNDERPAID: &str = "少付";
    pub const SETTLED: &str = "已结清";
    pub const PAID: &str = "已付";
    pub const NO_RECORDS: &str = "暂无记录";
    pub const RECORDS_CLEARED: &str = "已清空记录";
    pub const MISSING_ACTIVITY_NAME: &str = "请先填写活动名称";
    pub const INCOMPLETE_MEMBER: &str = "请填写完整信息";
    pub const INVALID_AMOUNT: &str = "请输入有效金额";
    pub const NOT_ENOUGH_RECORDS: &str = "请选择至少两条记录进行合并";
    pub const ALREADY_MERGED: &str = "已经合并过的记录无法再次合并";
    pub const CLEAR_NEEDS_CONFIRMATION: &str = "是否清空所有记录？请追加 --yes 确认";
    pub const RECORD_STORE_FAILED: &str = "读取或保存记录失败";
}

#[cfg(not(feature = "zh"))]
pub mod strings {
    pub const SETTLEMENT_DETAILS: &str = "Settlement details";
    pub const TRANSFER_PLAN: &str = "Transfer plan";
    pub const MERGED_SETTLEMENT_DETAILS: &str = "Merged settlement details";
    pub const MERGED_TRANSFER_PLAN: &str = "Merged transfer plan";
    pub const MEMBERS: &str = "Members";
    pub const MERGED_PREFIX: &str = "[Merged]";
    pub const UNNAMED_ACTIVITY: &str = "Untitled";
    pub const OVERPAID: &str = "overpaid";
    pub const UNDERPAID: &str = "underpaid";
    pub const SETTLED: &str = "settled";
    pub const PAID: &str = "paid";
    pub const NO_RECORDS: &str = "No records yet";
    pub const RECORDS_CLEARED: &str = "All records cleared";
    pub const MISSING_ACTIVITY_NAME: &str = "Please enter an activity name first";
    pub const INCOMPLETE_MEMBER: &str = "Please fill in both name and amount";
    pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
    pub const NOT_ENOUGH_RECORDS: &str = "Select at least two records to merge";
    pub const ALREADY_MERGED: &str = "Merged records cannot be merged again";
    pub const CLEAR_NEEDS_CONFIRMATION: &str = "Clear all records? Re-run with --yes to confirm";
    pub const RECORD_STORE_FAILED: &str = "Failed to read or save records";
}

pub use strings::*;

#[cfg(feature = "zh")]
pub fn amount(value: impl Display) -> String {
    format!("{value}元")
}

#[cfg(not(feature = "zh"))]
pub fn amount(value: impl Display) -> String {
    format!("{value}")
}

#[cfg(feature = "zh")]
pub fn activity_heading(name: impl Display) -> String {
    format!("【{name}】")
}

#[cfg(not(feature = "zh"))]
pub fn activity_heading(name: impl Display) -> String {
    format!("[{name}]")
}

pub fn section_heading(title: impl Display) -> String {
    activity_heading(title)
}

#[cfg(feature = "zh")]
pub fn total_amount_line(total: impl Display) -> String {
    format!("总金额：{}", amount(total))
}

#[cfg(not(feature = "zh"))]
pub fn total_amount_line(total: impl Display) -> String {
    format!("Total: {}", amount(total))
}

#[cfg(feature = "zh")]
pub fn per_person_line(average: impl Display) -> String {
    format!("每人应付：{}", amount(average))
}

#[cfg(not(feature = "zh"))]
pub fn per_person_line(average: impl Display) -> String {
    format!("Per person: {}", amount(average))
}

#[cfg(feature = "zh")]
pub fn detail_line(name: impl Display, label: impl Display, value: impl Display) -> String {
    format!("{name}：{label} {}", amount(value))
}

#[cfg(not(feature = "zh"))]
pub fn detail_line(name: impl Display, label: impl Display, value: impl Display) -> String {
    format!("{name}: {label} {}", amount(value))
}

#[cfg(feature = "zh")]
pub fn settled_line(name: impl Display) -> String {
    format!("{name}：{SETTLED}")
}

#[cfg(not(feature = "zh"))]
pub fn settled_line(name: impl Display) -> String {
    format!("{name}: {SETTLED}")
}

#[cfg(feature = "zh")]
pub fn transfer_line(from: impl Display, to: impl Display, value: impl Display) -> String {
    format!("{from} 转 {to}：{}", amount(value))
}

#[cfg(not(feature = "zh"))]
pub fn transfer_line(from: impl Display, to: impl Display, value: impl Display) -> String {
    format!("{from} -> {to}: {}", amount(value))
}

#[cfg(feature = "zh")]
pub fn record_time(month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{month}月{day}日 {hour}:{minute:02}")
}

#[cfg(not(feature = "zh"))]
pub fn record_time(month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{month:02}/{day:02} {hour}:{minute:02}")
}

#[cfg(feature = "zh")]
pub fn generated_at(time: impl Display) -> String {
    format!("生成时间: {time}")
}

#[cfg(not(feature = "zh"))]
pub fn generated_at(time: impl Display) -> String {
    format!("Generated at: {time}")
}

#[cfg(feature = "zh")]
pub fn amount_too_large(max: impl Display) -> String {
    format!("金额不能超过 {}", amount(max))
}

#[cfg(not(feature = "zh"))]
pub fn amount_too_large(max: impl Display) -> String {
    format!("Amount cannot exceed {}", amount(max))
}

#[cfg(feature = "zh")]
pub fn record_not_found(id: u64) -> String {
    format!("找不到记录 {id}")
}

#[cfg(not(feature = "zh"))]
pub fn record_not_found(id: u64) -> String {
    format!("Record {id} not found")
}

#[cfg(feature = "zh")]
pub fn member_not_found(index: usize) -> String {
    format!("找不到第 {index} 位成员")
}

#[cfg(not(feature = "zh"))]
pub fn member_not_found(index: usize) -> String {
    format!("No member at position {index}")
}

#[cfg(feature = "zh")]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("第 {line} 行：语法错误 - {detail}")
}

#[cfg(not(feature = "zh"))]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("Line {line}: Syntax error - {detail}")
}

#[cfg(feature = "zh")]
pub fn invalid_member_line(line: usize, detail: impl Display) -> String {
    format!("第 {line} 行：{detail}")
}

#[cfg(not(feature = "zh"))]
pub fn invalid_member_line(line: usize, detail: impl Display) -> String {
    format!("Line {line}: {detail}")
}
