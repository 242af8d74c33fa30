mod polygon;

pub use polygon::*;

use ellipse_tess::{AABB, core::math::Vector2};
use egui::epaint;
use egui_plot::PlotTransform;
use lyon::tessellation::{FillVertexConstructor, StrokeVertexConstructor};

/// Plot vertex radius (in pixels) for drawing vertices.
pub const PLOT_VERTEX_RADIUS: f32 = 4.0;

/// Convert Vector2 to lyon Point adjusted for plot using plot transform.
fn lyon_point(v: Vector2, transform: &PlotTransform) -> lyon::math::Point {
    lyon::math::point(
        transform.position_from_point_x(v.x),
        transform.position_from_point_y(v.y),
    )
}

pub fn aabb_to_plotbounds(aabb: &AABB) -> egui_plot::PlotBounds {
    egui_plot::PlotBounds::from_min_max([aabb.min_x, aabb.min_y], [aabb.max_x, aabb.max_y])
}

fn plotbounds_to_aabb(bounds: &egui_plot::PlotBounds) -> AABB {
    let [min_x, min_y] = bounds.min();
    let [max_x, max_y] = bounds.max();
    AABB::new(min_x, min_y, max_x, max_y)
}

/// Plot bounds can be degenerate (e.g. zero sized or NaN) before the first auto bounds pass.
fn plot_bounds_valid(bounds: &egui_plot::PlotBounds) -> bool {
    bounds.is_valid()
}

/// Bounding box of `points`, `None` if empty.
pub fn points_bounds(points: &[Vector2]) -> Option<AABB> {
    let first = points.first()?;
    let init = AABB::new(first.x, first.y, first.x, first.y);
    Some(points.iter().fold(init, |acc, p| {
        AABB::new(
            acc.min_x.min(p.x),
            acc.min_y.min(p.y),
            acc.max_x.max(p.x),
            acc.max_y.max(p.y),
        )
    }))
}

struct VertexConstructor {
    color: epaint::Color32,
}

impl FillVertexConstructor<epaint::Vertex> for VertexConstructor {
    fn new_vertex(&mut self, vertex: lyon::tessellation::FillVertex<'_>) -> epaint::Vertex {
        let p = vertex.position();
        epaint::Vertex {
            pos: epaint::Pos2::new(p.x, p.y),
            uv: epaint::WHITE_UV,
            color: self.color,
        }
    }
}

impl StrokeVertexConstructor<epaint::Vertex> for VertexConstructor {
    fn new_vertex(&mut self, vertex: lyon::tessellation::StrokeVertex<'_, '_>) -> epaint::Vertex {
        let p = vertex.position();
        epaint::Vertex {
            pos: epaint::Pos2::new(p.x, p.y),
            uv: epaint::WHITE_UV,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ellipse_tess::core::math::vec2;

    #[test]
    fn points_bounds_covers_all_points() {
        assert!(points_bounds(&[]).is_none());

        let bounds = points_bounds(&[vec2(1.0, -2.0), vec2(-3.0, 4.0), vec2(0.5, 0.5)]).unwrap();
        assert_eq!(
            (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
            (-3.0, -2.0, 1.0, 4.0)
        );
    }

    #[test]
    fn plot_bounds_conversion() {
        let aabb = AABB::new(-1.0, -2.0, 3.0, 4.0);
        let back = plotbounds_to_aabb(&aabb_to_plotbounds(&aabb));
        assert_eq!(
            (back.min_x, back.min_y, back.max_x, back.max_y),
            (-1.0, -2.0, 3.0, 4.0)
        );
    }
}
