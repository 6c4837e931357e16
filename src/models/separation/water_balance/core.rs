//! Water balance core.
//!
//! Solves the cyclone solids split through the [`WaterBalanceCase`] table,
//! then derives the water flows when the feed moisture is known.

mod balance;
mod case;
mod config;
mod error;
mod input;
mod results;
mod water;

pub use balance::Balance;
pub use case::WaterBalanceCase;
pub use config::WaterBalanceConfig;
pub use error::WaterBalanceError;
pub use input::{Field, WaterBalanceInput};
pub use results::WaterBalanceResults;
pub use water::WaterFlows;

use log::debug;

use crate::support::unknowns::UnknownPair;

/// Solves the water balance for the two unknown fields in `input`.
///
/// Moisture never counts toward the two unknowns. When it is missing the
/// water flows are skipped and the solids split is still returned.
///
/// # Errors
///
/// Returns a [`WaterBalanceError`] when the unknown count is not two, the
/// pair is not in the case table, a required field is missing, or a formula
/// divides by zero.
pub(super) fn solve(
    input: &WaterBalanceInput,
    config: &WaterBalanceConfig,
) -> Result<WaterBalanceResults, WaterBalanceError> {
    let pair = UnknownPair::find(input.balance_entries())?;

    let case = WaterBalanceCase::from_pair(pair)
        .ok_or(WaterBalanceError::UnsupportedCombination { pair })?;
    debug!("water balance: unknowns {pair} dispatched to {case:?}");

    let balance = case.apply(input)?;

    let water = match input.known(Field::Moisture)? {
        Some(moisture) => Some(WaterFlows::compute(&balance, moisture, &config.precision)?),
        None => {
            debug!("water balance: moisture unknown, skipping water flows");
            None
        }
    };

    Ok(WaterBalanceResults {
        case,
        balance,
        water,
        precision: config.precision,
    })
}
