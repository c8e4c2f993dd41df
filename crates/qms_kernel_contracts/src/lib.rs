#![forbid(unsafe_code)]

pub mod access;
pub mod common;
pub mod kpi;
pub mod record;
pub mod sla;

pub use common::{ContractViolation, Validate};
