//! Results of a water balance solve.

use std::fmt;

use crate::support::{
    precision::{Precision, Reported},
    record::Record,
    variable::Variable,
};

use super::{Balance, Field, WaterBalanceCase, WaterFlows};

/// Closed solids split, optional water flows and the case that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterBalanceResults {
    /// The case-table row that was solved.
    pub case: WaterBalanceCase,

    /// Every balanced field at full precision.
    pub balance: Balance,

    /// Water flows, or `None` if moisture was not given.
    pub water: Option<WaterFlows>,

    /// Precision applied to reported values.
    pub precision: Precision,
}

impl WaterBalanceResults {
    /// Note attached when the water flows are skipped.
    pub const WATER_SKIPPED: &'static str = "Water calculation skipped due to missing values.";

    /// Returns the two solved solids rates with their reported (rounded) values.
    #[must_use]
    pub fn solved(&self) -> [(Field, f64); 2] {
        self.case.unknowns().map(|field| {
            let value = self.balance.get(field).unwrap_or_default();
            (field, self.precision.flow(value))
        })
    }

    /// Returns the solved rates and, when available, the water flows as a
    /// name-keyed record.
    ///
    /// Without moisture the water entries are omitted and
    /// [`WATER_SKIPPED`](Self::WATER_SKIPPED) is noted.
    #[must_use]
    pub fn record(&self) -> Record {
        let mut record = Record::new();
        for (field, value) in self.solved() {
            record.insert(field.symbol(), Some(value));
        }
        match &self.water {
            Some(water) => {
                for (key, value) in water.entries() {
                    record.insert(key, Some(value));
                }
            }
            None => record.note(Self::WATER_SKIPPED),
        }
        record
    }
}

/// Renders the solved rates and water flows, one per line.
///
/// ```text
/// U = 40.0
/// V = 60.0
/// Water in Ball Mill Feed = 2415.0 m3/h
/// Water in Cyclone Feed = 3000.0 m3/h
/// Water Requirement at Cyclone Feed = 585.0 m3/h
/// ```
impl fmt::Display for WaterBalanceResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.solved() {
            writeln!(f, "{field} = {}", Reported(value))?;
        }
        match &self.water {
            Some(water) => {
                writeln!(
                    f,
                    "Water in Ball Mill Feed = {} m3/h",
                    Reported(water.ball_mill_feed)
                )?;
                writeln!(
                    f,
                    "Water in Cyclone Feed = {} m3/h",
                    Reported(water.cyclone_feed)
                )?;
                write!(
                    f,
                    "Water Requirement at Cyclone Feed = {} m3/h",
                    Reported(water.requirement)
                )
            }
            None => f.write_str(Self::WATER_SKIPPED),
        }
    }
}
