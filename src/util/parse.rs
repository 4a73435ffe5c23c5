//! Parsing helpers for Discord ids.
//!
//! Ids are stored as strings in the database and typed by users as either raw
//! snowflakes or mention syntax (`<#123>`).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{internal::InternalError, AppError};

/// Matches a channel mention: `<#123>`.
pub static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<#(\d+)>").expect("valid channel mention regex"));

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Resolves a Discord id from a command argument.
///
/// If `arg` starts with a mention matching `pattern`, the id inside the mention is
/// used; otherwise the whole argument is expected to be a bare snowflake.
///
/// # Arguments
/// - `arg` - Raw argument text as typed by the user
/// - `pattern` - Mention pattern capturing the id, e.g. [`CHANNEL_MENTION`]
///
/// # Returns
/// - `Some(u64)` - The resolved id
/// - `None` - The argument is neither a matching mention nor a number
pub fn resolve_id_from_arg(arg: &str, pattern: &Regex) -> Option<u64> {
    let id = match pattern.captures(arg) {
        Some(captures) => captures.get(1).map_or(arg, |m| m.as_str()),
        None => arg,
    };

    id.parse::<u64>().ok()
}
