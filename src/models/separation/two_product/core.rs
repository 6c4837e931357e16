//! Two-product balance core.
//!
//! Finds the unknown pair, dispatches it through the [`TwoProductCase`] table
//! and derives recovery from the completed balance.

mod balance;
mod case;
mod config;
mod error;
mod input;
mod recovery;
mod results;

pub use balance::Balance;
pub use case::TwoProductCase;
pub use config::TwoProductConfig;
pub use error::TwoProductError;
pub use input::{Field, TwoProductInput};
pub use recovery::Recovery;
pub use results::TwoProductResults;

use log::debug;

use crate::support::unknowns::UnknownPair;

/// Solves the two-product balance for the two unknown fields in `input`.
///
/// # Errors
///
/// Returns a [`TwoProductError`] when the unknown count is not two, the pair
/// is not in the case table or is underdetermined, a required field is
/// missing, or a formula divides by zero.
pub(super) fn solve(
    input: &TwoProductInput,
    config: &TwoProductConfig,
) -> Result<TwoProductResults, TwoProductError> {
    let pair = UnknownPair::find(input.entries())?;

    let case = TwoProductCase::from_pair(pair)
        .ok_or(TwoProductError::UnsupportedCombination { pair })?;
    debug!("two-product: unknowns {pair} dispatched to {case:?}");

    let balance = case.apply(input)?;

    let recovery = Recovery::from_balance(&balance);
    if recovery.is_none() {
        debug!("two-product: recovery not computable for {balance:?}");
    }

    Ok(TwoProductResults {
        case,
        balance,
        recovery,
        precision: config.precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn input(values: [Option<f64>; 6]) -> TwoProductInput {
        let [feed, concentrate, tailings, feed_grade, concentrate_grade, tailings_grade] = values;
        TwoProductInput {
            feed,
            concentrate,
            tailings,
            feed_grade,
            concentrate_grade,
            tailings_grade,
        }
    }

    fn solve_default(values: [Option<f64>; 6]) -> Result<TwoProductResults, TwoProductError> {
        solve(&input(values), &TwoProductConfig::default())
    }

    #[test]
    fn concentrate_and_tailings_with_recovery() {
        let results =
            solve_default([Some(100.0), None, None, Some(20.0), Some(80.0), Some(5.0)]).unwrap();

        assert_eq!(results.case, TwoProductCase::ConcentrateAndTailings);
        assert_relative_eq!(results.balance.concentrate, 20.0);
        assert_relative_eq!(results.balance.tailings, 80.0);
        assert_relative_eq!(results.recovery.unwrap().percent(), 80.0, epsilon = 1e-9);

        let record = results.record();
        assert_eq!(record.value("C"), Some(20.0));
        assert_eq!(record.value("T"), Some(80.0));
        assert_eq!(record.value("Recovery"), Some(80.0));
    }

    #[test]
    fn every_supported_case_closes_the_balance() {
        let cases = [
            [Some(100.0), None, None, Some(2.4), Some(28.0), Some(0.35)],
            [None, None, Some(91.2), Some(2.4), Some(28.0), Some(0.35)],
            [None, Some(7.4), None, Some(2.4), Some(28.0), Some(0.35)],
            [Some(100.0), None, Some(91.2), None, Some(28.0), Some(0.35)],
            [None, Some(8.8), Some(91.2), None, Some(28.0), Some(0.35)],
        ];

        for values in cases {
            let results = solve_default(values).unwrap();
            let balance = results.balance;
            assert_relative_eq!(
                balance.concentrate + balance.tailings,
                balance.feed,
                epsilon = 1e-9
            );

            let record = results.record();
            let reported = |symbol: &str| {
                record
                    .value(symbol)
                    .or_else(|| input(values).get(symbol.parse().ok()?))
                    .unwrap()
            };
            assert_relative_eq!(
                reported("C") + reported("T"),
                reported("F"),
                epsilon = 1e-2
            );
        }
    }

    #[test]
    fn feed_and_feed_grade() {
        let results =
            solve_default([None, Some(20.0), Some(80.0), None, Some(80.0), Some(5.0)]).unwrap();

        assert_eq!(results.case, TwoProductCase::FeedAndFeedGrade);
        let record = results.record();
        assert_eq!(record.value("F"), Some(100.0));
        assert_eq!(record.value("f"), Some(20.0));
        assert_eq!(record.value("Recovery"), Some(80.0));
    }

    #[test]
    fn solved_grade_uses_grade_precision() {
        let results =
            solve_default([Some(3.0), None, Some(2.0), None, Some(1.0), Some(0.0)]).unwrap();

        assert_eq!(results.case, TwoProductCase::ConcentrateAndFeedGrade);
        let record = results.record();
        assert_eq!(record.value("C"), Some(1.0));
        assert_eq!(record.value("f"), Some(0.3333));
    }

    #[test]
    fn feed_grade_and_tailings_grade_is_underdetermined() {
        let full = solve_default([Some(100.0), Some(20.0), Some(80.0), None, Some(80.0), None]);
        assert_eq!(full.unwrap_err(), TwoProductError::Underdetermined);

        let inconsistent = solve_default([Some(1.0), Some(5.0), Some(0.0), None, Some(0.0), None]);
        assert_eq!(inconsistent.unwrap_err(), TwoProductError::Underdetermined);
    }

    #[test]
    fn unsupported_pairs() {
        let err = solve_default([Some(100.0), Some(20.0), None, Some(20.0), None, Some(5.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            TwoProductError::UnsupportedCombination { pair }
                if pair.fields() == [Field::Tailings, Field::ConcentrateGrade]
        ));

        let err = solve_default([Some(100.0), Some(20.0), Some(80.0), Some(20.0), None, None])
            .unwrap_err();
        assert!(matches!(err, TwoProductError::UnsupportedCombination { .. }));
    }

    #[test]
    fn wrong_unknown_counts() {
        let one = solve_default([Some(100.0), None, Some(80.0), Some(20.0), Some(80.0), Some(5.0)]);
        assert_eq!(one.unwrap_err(), TwoProductError::InvalidUnknownCount { found: 1 });

        let three = solve_default([Some(100.0), None, None, None, Some(80.0), Some(5.0)]);
        assert_eq!(three.unwrap_err(), TwoProductError::InvalidUnknownCount { found: 3 });

        let all = solve_default([None; 6]);
        assert_eq!(all.unwrap_err(), TwoProductError::InvalidUnknownCount { found: 6 });
    }

    #[test]
    fn equal_grades_are_undefined() {
        let err = solve_default([Some(100.0), None, None, Some(20.0), Some(5.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "C" });

        let err = solve_default([None, None, Some(80.0), Some(20.0), Some(20.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "F" });

        let err = solve_default([None, Some(20.0), None, Some(5.0), Some(80.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "F" });
    }

    #[test]
    fn zero_feed_leaves_feed_grade_undefined() {
        let err = solve_default([Some(0.0), None, Some(0.0), None, Some(80.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "f" });

        let err = solve_default([None, Some(10.0), Some(-10.0), None, Some(80.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "f" });
    }

    #[test]
    fn zero_feed_grade_skips_recovery() {
        let results =
            solve_default([Some(100.0), None, None, Some(0.0), Some(80.0), Some(-5.0)]).unwrap();

        assert!(results.recovery.is_none());
        let record = results.record();
        assert_eq!(record.get("Recovery"), Some(None));
        assert!(record.has_note(TwoProductResults::RECOVERY_SKIPPED));
    }

    #[test]
    fn results_are_always_finite() {
        let err = solve_default([Some(1e300), None, None, Some(20.0), Some(5.0 + 1e-10), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::DivisionUndefined { quantity: "C" });

        let err = solve_default([Some(f64::NAN), None, None, Some(20.0), Some(80.0), Some(5.0)])
            .unwrap_err();
        assert_eq!(err, TwoProductError::NotFinite { quantity: "F" });
        assert_eq!(err.to_string(), "F is not a finite number");
    }

    #[test]
    fn overflowing_recovery_is_skipped() {
        // C·c and F·f both overflow to inf.
        let results =
            solve_default([Some(1e200), None, None, Some(1e150), Some(1e200), Some(0.0)]).unwrap();

        assert!(results.recovery.is_none());
        assert!(results.record().has_note(TwoProductResults::RECOVERY_SKIPPED));
    }
}
