//! # Mineral Balance
//!
//! Closed-form mass and water balance models for mineral processing, built
//! as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: The balance models and their [`twine_core::Model`] adapters.
//! - [`support`]: Utilities shared by the models.
//!
//! ## Solving a balance
//!
//! Every model takes a variable set in which exactly two fields are unknown
//! (`None`), picks the matching formula from a fixed case table, and returns
//! either the closed balance or an error describing why it cannot be solved.
//! Secondary metrics (recovery, water flows) that lack inputs are reported as
//! absent with a note rather than failing the solve.
//!
//! ```
//! use mineral_balance::models::separation::two_product;
//!
//! let results = two_product::solve_entries([
//!     ("F", Some(100.0)),
//!     ("f", Some(20.0)),
//!     ("c", Some(80.0)),
//!     ("t", Some(5.0)),
//! ])
//! .unwrap();
//!
//! assert_eq!(results.to_string(), "C = 20.0\nT = 80.0\nRecovery = 80.0%");
//! ```
//!
//! Only closed-form rearrangements are used; nothing is solved iteratively.

pub mod models;
pub mod support;
