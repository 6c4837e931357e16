//! Results of a two-product solve.

use std::fmt;

use crate::support::{
    precision::{Precision, Reported},
    record::Record,
    variable::Variable,
};

use super::{Balance, Field, Recovery, TwoProductCase};

/// Closed balance, recovery and the case that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoProductResults {
    /// The case-table row that was solved.
    pub case: TwoProductCase,

    /// Every field of the balance at full precision.
    pub balance: Balance,

    /// Recovery, or `None` if the feed carries no metal.
    pub recovery: Option<Recovery>,

    /// Precision applied to reported values.
    pub precision: Precision,
}

impl TwoProductResults {
    /// Record key for recovery.
    pub const RECOVERY: &'static str = "Recovery";

    /// Note attached when recovery cannot be computed.
    pub const RECOVERY_SKIPPED: &'static str =
        "Recovery cannot be calculated due to insufficient data.";

    /// Returns the two solved fields with their reported (rounded) values.
    #[must_use]
    pub fn solved(&self) -> [(Field, f64); 2] {
        self.case
            .unknowns()
            .map(|field| (field, self.reported(field)))
    }

    /// Returns the reported (rounded) value of any field.
    #[must_use]
    pub fn reported(&self, field: Field) -> f64 {
        let value = self.balance.get(field);
        if field.is_grade() {
            self.precision.grade(value)
        } else {
            self.precision.flow(value)
        }
    }

    /// Returns the reported (rounded) recovery percentage.
    #[must_use]
    pub fn recovery_percent(&self) -> Option<f64> {
        self.recovery
            .map(|recovery| self.precision.recovery(recovery.percent()))
    }

    /// Returns the solved fields and recovery as a name-keyed record.
    ///
    /// Recovery is always present as an entry; when it cannot be computed its
    /// value is `None` and [`RECOVERY_SKIPPED`](Self::RECOVERY_SKIPPED) is noted.
    #[must_use]
    pub fn record(&self) -> Record {
        let mut record = Record::new();
        for (field, value) in self.solved() {
            record.insert(field.symbol(), Some(value));
        }
        record.insert(Self::RECOVERY, self.recovery_percent());
        if self.recovery.is_none() {
            record.note(Self::RECOVERY_SKIPPED);
        }
        record
    }
}

/// Renders the solved fields and recovery, one per line.
///
/// ```text
/// C = 20.0
/// T = 80.0
/// Recovery = 80.0%
/// ```
impl fmt::Display for TwoProductResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.solved() {
            writeln!(f, "{field} = {}", Reported(value))?;
        }
        match self.recovery_percent() {
            Some(recovery) => write!(f, "{} = {}%", Self::RECOVERY, Reported(recovery)),
            None => f.write_str(Self::RECOVERY_SKIPPED),
        }
    }
}
