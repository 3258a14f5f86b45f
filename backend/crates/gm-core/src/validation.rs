//! Identifier validation shared by the handlers and the ingestion procedure.

use crate::{CoreError, CoreResult};

/// True when `token` is not a base-10 integer that fits in an `i64`.
///
/// Empty strings, stray characters and overflow all count as "not a number".
pub fn is_not_a_number(token: &str) -> bool {
    token.parse::<i64>().is_err()
}

/// Parse a path identifier, failing with `InvalidIdentifier`.
#[track_caller]
pub fn parse_user_id(token: &str) -> CoreResult<i64> {
    match token.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(_) => Err(CoreError::invalid_identifier(format!(
            "{} is not a valid ID",
            token
        ))),
    }
}
