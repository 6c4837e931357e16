use crate::support::precision::Precision;

/// Configuration for the water balance model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterBalanceConfig {
    /// Reporting precision for solids and water flows.
    pub precision: Precision,
}
