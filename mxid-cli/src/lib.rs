//! Command-line front end for the `mxid` crate.
//!
//! Commands return serializable responses from `run` functions so they can
//! be tested without capturing stdout; `handle` functions print them.

pub mod commands;
pub mod error;
pub mod output;
