//! Command line inspection of site spec files.
//!
//! The `sitespec` binary opens spec files, hands them to the [`sitespec`]
//! parser and prints the parsed rules or test cases as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
