use crate::support::precision::Precision;

/// Configuration for the two-product model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoProductConfig {
    /// Reporting precision for flows, grades and recovery.
    pub precision: Precision,
}
