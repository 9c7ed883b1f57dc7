//! Integer status codes for callers that want the C-style contract:
//! zero on success, negative on failure.

use super::InitError;

pub const OK: i32 = 0;
pub const LOAD_FAILED: i32 = -1;

pub fn of<T>(result: &Result<T, InitError>) -> i32 {
    match result {
        Ok(_) => OK,
        Err(err) => err.status(),
    }
}
