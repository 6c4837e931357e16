//! Case table for the two-product formula.

use log::trace;

use crate::support::{
    constraint::{Constrained, Finite, divide},
    unknowns::UnknownPair,
    variable::Variable,
};

use super::{Balance, Field, TwoProductError, TwoProductInput};

/// One row of the two-product case table, named by its unknown pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoProductCase {
    /// Unknown `{C, T}`: `C = F(f−t)/(c−t)`, `T = F − C`.
    ConcentrateAndTailings,

    /// Unknown `{F, C}`: `F = T(t−c)/(f−c)`, `C = F − T`.
    FeedAndConcentrate,

    /// Unknown `{F, T}`: `F = C(c−t)/(f−t)`, `T = F − C`.
    FeedAndTailings,

    /// Unknown `{C, f}`: `C = F − T`, `f = (Cc + Tt)/F`.
    ConcentrateAndFeedGrade,

    /// Unknown `{F, f}`: `F = C + T`, `f = (Cc + Tt)/F`.
    FeedAndFeedGrade,

    /// Unknown `{f, t}`: always rejected.
    ///
    /// Both grades appear only in the metal balance, so one equation would
    /// have to determine two unknowns.
    FeedGradeAndTailingsGrade,
}

impl TwoProductCase {
    /// Every case, in table order.
    pub const ALL: [Self; 6] = [
        Self::ConcentrateAndTailings,
        Self::FeedAndConcentrate,
        Self::FeedAndTailings,
        Self::ConcentrateAndFeedGrade,
        Self::FeedAndFeedGrade,
        Self::FeedGradeAndTailingsGrade,
    ];

    /// Looks up the case for an unknown pair.
    ///
    /// Returns `None` for pairs outside the table.
    #[must_use]
    pub fn from_pair(pair: UnknownPair<Field>) -> Option<Self> {
        use Field::{Concentrate, Feed, FeedGrade, Tailings, TailingsGrade};

        match (pair.first(), pair.second()) {
            (Concentrate, Tailings) => Some(Self::ConcentrateAndTailings),
            (Feed, Concentrate) => Some(Self::FeedAndConcentrate),
            (Feed, Tailings) => Some(Self::FeedAndTailings),
            (Concentrate, FeedGrade) => Some(Self::ConcentrateAndFeedGrade),
            (Feed, FeedGrade) => Some(Self::FeedAndFeedGrade),
            (FeedGrade, TailingsGrade) => Some(Self::FeedGradeAndTailingsGrade),
            _ => None,
        }
    }

    /// The two fields this case solves for, in canonical order.
    #[must_use]
    pub fn unknowns(self) -> [Field; 2] {
        match self {
            Self::ConcentrateAndTailings => [Field::Concentrate, Field::Tailings],
            Self::FeedAndConcentrate => [Field::Feed, Field::Concentrate],
            Self::FeedAndTailings => [Field::Feed, Field::Tailings],
            Self::ConcentrateAndFeedGrade => [Field::Concentrate, Field::FeedGrade],
            Self::FeedAndFeedGrade => [Field::Feed, Field::FeedGrade],
            Self::FeedGradeAndTailingsGrade => [Field::FeedGrade, Field::TailingsGrade],
        }
    }

    /// The known fields this case's formula reads.
    #[must_use]
    pub fn required(self) -> [Field; 4] {
        let unknowns = self.unknowns();
        let mut required = [Field::Feed; 4];
        for (slot, field) in required.iter_mut().zip(
            Field::ALL
                .iter()
                .copied()
                .filter(|field| !unknowns.contains(field)),
        ) {
            *slot = field;
        }
        required
    }

    /// Solves this case and returns the closed balance.
    ///
    /// # Errors
    ///
    /// Returns [`TwoProductError::Underdetermined`] for
    /// [`FeedGradeAndTailingsGrade`](Self::FeedGradeAndTailingsGrade) whatever
    /// the inputs, [`TwoProductError::InsufficientData`] or
    /// [`TwoProductError::NotFinite`] if a required field is unknown or not
    /// finite, [`TwoProductError::DivisionUndefined`] if a denominator is zero
    /// or the quotient overflows, and [`TwoProductError::NotFinite`] if a
    /// solved flow overflows.
    pub fn apply(self, input: &TwoProductInput) -> Result<Balance, TwoProductError> {
        let balance = match self {
            Self::ConcentrateAndTailings => {
                let [feed, f, c, t] = self.known(input)?;
                let (concentrate, tailings) = concentrate_and_tailings(feed, f, c, t)?;
                Balance {
                    feed,
                    concentrate,
                    tailings,
                    feed_grade: f,
                    concentrate_grade: c,
                    tailings_grade: t,
                }
            }
            Self::FeedAndConcentrate => {
                let [tailings, f, c, t] = self.known(input)?;
                let (feed, concentrate) = feed_and_concentrate(tailings, f, c, t)?;
                Balance {
                    feed,
                    concentrate,
                    tailings,
                    feed_grade: f,
                    concentrate_grade: c,
                    tailings_grade: t,
                }
            }
            Self::FeedAndTailings => {
                let [concentrate, f, c, t] = self.known(input)?;
                let (feed, tailings) = feed_and_tailings(concentrate, f, c, t)?;
                Balance {
                    feed,
                    concentrate,
                    tailings,
                    feed_grade: f,
                    concentrate_grade: c,
                    tailings_grade: t,
                }
            }
            Self::ConcentrateAndFeedGrade => {
                let [feed, tailings, c, t] = self.known(input)?;
                let (concentrate, f) = concentrate_and_feed_grade(feed, tailings, c, t)?;
                Balance {
                    feed,
                    concentrate,
                    tailings,
                    feed_grade: f,
                    concentrate_grade: c,
                    tailings_grade: t,
                }
            }
            Self::FeedAndFeedGrade => {
                let [concentrate, tailings, c, t] = self.known(input)?;
                let (feed, f) = feed_and_feed_grade(concentrate, tailings, c, t)?;
                Balance {
                    feed,
                    concentrate,
                    tailings,
                    feed_grade: f,
                    concentrate_grade: c,
                    tailings_grade: t,
                }
            }
            Self::FeedGradeAndTailingsGrade => return Err(TwoProductError::Underdetermined),
        };

        trace!("two-product: {self:?} closed as {balance:?}");
        Ok(balance)
    }

    /// Reads the required fields, in [`required`](Self::required) order.
    fn known(self, input: &TwoProductInput) -> Result<[f64; 4], TwoProductError> {
        let [w, x, y, z] = self.required().map(|field| input.require(field));
        Ok([w?, x?, y?, z?])
    }
}

/// Divides, reporting a zero denominator or an overflowing quotient against
/// the quantity being solved.
fn quotient(numerator: f64, denominator: f64, solving: Field) -> Result<f64, TwoProductError> {
    divide(numerator, denominator).map_err(|_| TwoProductError::DivisionUndefined {
        quantity: solving.symbol(),
    })
}

fn finite(value: f64, solving: Field) -> Result<f64, TwoProductError> {
    Finite::new(value)
        .map(Constrained::into_inner)
        .map_err(|_| TwoProductError::NotFinite {
            quantity: solving.symbol(),
        })
}

fn concentrate_and_tailings(
    feed: f64,
    f: f64,
    c: f64,
    t: f64,
) -> Result<(f64, f64), TwoProductError> {
    let concentrate = quotient(feed * (f - t), c - t, Field::Concentrate)?;
    Ok((concentrate, finite(feed - concentrate, Field::Tailings)?))
}

fn feed_and_concentrate(
    tailings: f64,
    f: f64,
    c: f64,
    t: f64,
) -> Result<(f64, f64), TwoProductError> {
    let feed = quotient(tailings * (t - c), f - c, Field::Feed)?;
    Ok((feed, finite(feed - tailings, Field::Concentrate)?))
}

fn feed_and_tailings(
    concentrate: f64,
    f: f64,
    c: f64,
    t: f64,
) -> Result<(f64, f64), TwoProductError> {
    let feed = quotient(concentrate * (c - t), f - t, Field::Feed)?;
    Ok((feed, finite(feed - concentrate, Field::Tailings)?))
}

fn concentrate_and_feed_grade(
    feed: f64,
    tailings: f64,
    c: f64,
    t: f64,
) -> Result<(f64, f64), TwoProductError> {
    let concentrate = finite(feed - tailings, Field::Concentrate)?;
    let f = quotient(concentrate * c + tailings * t, feed, Field::FeedGrade)?;
    Ok((concentrate, f))
}

fn feed_and_feed_grade(
    concentrate: f64,
    tailings: f64,
    c: f64,
    t: f64,
) -> Result<(f64, f64), TwoProductError> {
    let feed = finite(concentrate + tailings, Field::Feed)?;
    let f = quotient(concentrate * c + tailings * t, feed, Field::FeedGrade)?;
    Ok((feed, f))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn lookup_is_order_independent() {
        for case in TwoProductCase::ALL {
            let [a, b] = case.unknowns();
            let forward = UnknownPair::new(a, b).unwrap();
            let backward = UnknownPair::new(b, a).unwrap();
            assert_eq!(TwoProductCase::from_pair(forward), Some(case));
            assert_eq!(TwoProductCase::from_pair(backward), Some(case));
        }
    }

    #[test]
    fn pairs_outside_the_table() {
        let outside = [
            (Field::Concentrate, Field::ConcentrateGrade),
            (Field::Feed, Field::TailingsGrade),
            (Field::Tailings, Field::FeedGrade),
            (Field::ConcentrateGrade, Field::TailingsGrade),
        ];
        for (a, b) in outside {
            let pair = UnknownPair::new(a, b).unwrap();
            assert_eq!(TwoProductCase::from_pair(pair), None, "{pair}");
        }
    }

    #[test]
    fn required_is_the_complement_of_unknowns() {
        assert_eq!(
            TwoProductCase::ConcentrateAndTailings.required(),
            [
                Field::Feed,
                Field::FeedGrade,
                Field::ConcentrateGrade,
                Field::TailingsGrade
            ]
        );
        assert_eq!(
            TwoProductCase::FeedAndFeedGrade.required(),
            [
                Field::Concentrate,
                Field::Tailings,
                Field::ConcentrateGrade,
                Field::TailingsGrade
            ]
        );
    }

    #[test]
    fn apply_reports_missing_required_field() {
        let input = TwoProductInput::new()
            .with(Field::FeedGrade, 20.0)
            .with(Field::ConcentrateGrade, 80.0)
            .with(Field::TailingsGrade, 5.0);

        let err = TwoProductCase::ConcentrateAndTailings
            .apply(&input)
            .unwrap_err();
        assert_eq!(
            err,
            TwoProductError::InsufficientData {
                missing: Field::Feed
            }
        );
    }

    #[test]
    fn apply_closes_solids_and_metal() {
        let input = TwoProductInput::new()
            .with(Field::Concentrate, 7.4)
            .with(Field::FeedGrade, 2.4)
            .with(Field::ConcentrateGrade, 28.0)
            .with(Field::TailingsGrade, 0.35);

        let balance = TwoProductCase::FeedAndTailings.apply(&input).unwrap();
        assert_relative_eq!(
            balance.concentrate + balance.tailings,
            balance.feed,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            balance.concentrate_metal() + balance.tailings_metal(),
            balance.feed_metal(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn underdetermined_ignores_inputs() {
        assert_eq!(
            TwoProductCase::FeedGradeAndTailingsGrade.apply(&TwoProductInput::new()),
            Err(TwoProductError::Underdetermined)
        );
    }

    #[test]
    fn underdetermined_wins_over_bad_inputs() {
        let input = TwoProductInput::new()
            .with(Field::Feed, f64::NAN)
            .with(Field::ConcentrateGrade, 5.0);

        assert_eq!(
            TwoProductCase::FeedGradeAndTailingsGrade.apply(&input),
            Err(TwoProductError::Underdetermined)
        );
    }

    #[test]
    fn near_equal_grades_overflow_to_an_error() {
        let input = TwoProductInput::new()
            .with(Field::Feed, 1e300)
            .with(Field::FeedGrade, 20.0)
            .with(Field::ConcentrateGrade, 5.0 + 1e-10)
            .with(Field::TailingsGrade, 5.0);

        assert_eq!(
            TwoProductCase::ConcentrateAndTailings.apply(&input),
            Err(TwoProductError::DivisionUndefined { quantity: "C" })
        );
    }

    #[test]
    fn overflowing_flow_sum_is_not_finite() {
        assert_eq!(
            feed_and_feed_grade(f64::MAX, f64::MAX, 80.0, 5.0),
            Err(TwoProductError::NotFinite { quantity: "F" })
        );
        assert_eq!(
            concentrate_and_feed_grade(f64::MAX, -f64::MAX, 80.0, 5.0),
            Err(TwoProductError::NotFinite { quantity: "C" })
        );
    }

    #[test]
    fn formulas() {
        let (c, t) = concentrate_and_tailings(100.0, 20.0, 80.0, 5.0).unwrap();
        assert_relative_eq!(c, 20.0);
        assert_relative_eq!(t, 80.0);

        let (feed, c) = feed_and_concentrate(80.0, 20.0, 80.0, 5.0).unwrap();
        assert_relative_eq!(feed, 100.0);
        assert_relative_eq!(c, 20.0);

        let (feed, t) = feed_and_tailings(20.0, 20.0, 80.0, 5.0).unwrap();
        assert_relative_eq!(feed, 100.0);
        assert_relative_eq!(t, 80.0);

        let (c, f) = concentrate_and_feed_grade(100.0, 80.0, 80.0, 5.0).unwrap();
        assert_relative_eq!(c, 20.0);
        assert_relative_eq!(f, 20.0);

        let (feed, f) = feed_and_feed_grade(20.0, 80.0, 80.0, 5.0).unwrap();
        assert_relative_eq!(feed, 100.0);
        assert_relative_eq!(f, 20.0);
    }
}
