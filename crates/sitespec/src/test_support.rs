//! Test helpers for asserting parse outcomes.

use std::fmt::Display;

pub(crate) fn expect_ok<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{context}: {err}"),
    }
}

pub(crate) fn expect_err<T, E: Display>(result: Result<T, E>, context: &str) -> E {
    match result {
        Ok(_) => panic!("{context}: expected error"),
        Err(err) => err,
    }
}
