//! Command-line input errors.
//!
//! These are fatal for an invocation: the query is never sent. Messages are
//! shown to the user as-is, so they are in Chinese.

/// Invalid user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Station name has no directory entry
    #[error("请输入有效的车站名称: {0}")]
    StationNotFound(String),

    /// Date is malformed or in the past
    #[error("请输入有效日期: {0}")]
    InvalidDate(String),
}
