//! Adaptive tessellation of axis aligned ellipses into polygons.
//!
//! Given an ellipse (by bounding rectangle, or by width, height, and center) and a max angle error
//! in radians, [ellipse::ellipse_points_in_rect] and [ellipse::ellipse_points] produce an ordered
//! sequence of boundary points. The polygon through those points has every chord within the max
//! angle error of the true ellipse tangent at both chord ends.
//!
//! ```
//! use ellipse_tess::{AABB, ellipse::ellipse_points_in_rect};
//!
//! let rect = AABB::new(-50.0f64, -25.0, 50.0, 25.0);
//! let coarse = ellipse_points_in_rect(&rect, 0.1).unwrap();
//! let fine = ellipse_points_in_rect(&rect, 0.01).unwrap();
//! assert!(fine.len() > coarse.len());
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod ellipse;

pub use static_aabb2d_index;
pub use static_aabb2d_index::AABB;
