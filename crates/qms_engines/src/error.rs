#![forbid(unsafe_code)]

use qms_kernel_contracts::ContractViolation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GovernanceError {
    /// SLA lookup against a category the table does not carry. This is a
    /// deployment defect and is surfaced to the caller.
    #[error("unknown SLA category: {0}")]
    UnknownCategory(String),

    /// A stored metric could not be read as a number.
    #[error("invalid metric value for {field}: {raw:?}")]
    InvalidMetricValue { field: &'static str, raw: String },

    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
}
