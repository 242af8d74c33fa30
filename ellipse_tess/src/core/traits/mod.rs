//! Core/common numeric traits for use in ellipse_tess.
mod fuzzy;
mod real;

pub use fuzzy::{FuzzyEq, FuzzyOrd};
pub use real::Real;
