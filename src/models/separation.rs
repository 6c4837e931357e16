//! Solid/liquid and mineral separation models.
//!
//! - [`two_product`]: Feed split into concentrate and tailings by assay grade.
//! - [`water_balance`]: Cyclone feed split into underflow and overflow by dilution ratio.
//!
//! Both models solve a closed-form balance with exactly two unknowns and never
//! iterate.

pub mod two_product;
pub mod water_balance;
