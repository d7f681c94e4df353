#[cfg(all(feature = "zh", feature = "en"))]
compile_error!("Cannot enable both 'zh' and 'en' features at the same time");

#[cfg(feature = "zh")]
pub fn expected_member_entry(input: impl std::fmt::Display) -> String {
    format!("应为 `姓名 金额`，实际为: {input}")
}

#[cfg(feature = "zh")]
pub fn unparsed_input(input: impl std::fmt::Display) -> String {
    format!("无法解析的内容: {input}")
}

#[cfg(feature = "zh")]
pub fn duplicate_activity_name(first_line: usize) -> String {
    format!("活动名称已在第 {first_line} 行声明")
}

#[cfg(not(feature = "zh"))]
pub fn expected_member_entry(input: impl std::fmt::Display) -> String {
    format!("Expected `name amount`, found: {input}")
}

#[cfg(not(feature = "zh"))]
pub fn unparsed_input(input: impl std::fmt::Display) -> String {
    format!("Unparsed input: {input}")
}

#[cfg(not(feature = "zh"))]
pub fn duplicate_activity_name(first_line: usize) -> String {
    format!("Activity name already declared at line {first_line}")
}
