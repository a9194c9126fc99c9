//! Expose stanza's internal API for use in integration tests. It is not
//! intended for use as a library in production code.
pub mod assets;
pub mod cli;
pub mod config;
pub mod pages;
pub mod template;
