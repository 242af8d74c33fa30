//! Core module has the shared numeric traits and math used by the ellipse tessellator.
pub mod math;
pub mod traits;
