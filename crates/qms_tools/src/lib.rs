#![forbid(unsafe_code)]

pub mod governance_cli;
