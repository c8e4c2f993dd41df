#![forbid(unsafe_code)]

pub mod config;
pub mod duration;
pub mod error;
pub mod kpi;
pub mod permission;
pub mod sla_table;
pub mod status;

pub use config::GovernanceConfig;
pub use error::GovernanceError;
