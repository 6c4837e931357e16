//! Supporting utilities shared by the balance models.
//!
//! - [`constraint`]: Type-level numeric constraints, used to reject zero denominators.
//! - [`precision`]: The rounding convention applied to reported values.
//! - [`record`]: Name-keyed result records consumed by form-based clients.
//! - [`unknowns`]: Detection of the two unknown fields in a variable set.
//! - [`variable`]: Named fields of a balance variable set.

pub mod constraint;
pub mod precision;
pub mod record;
pub mod unknowns;
pub mod variable;
