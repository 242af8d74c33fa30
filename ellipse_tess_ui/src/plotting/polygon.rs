use std::sync::Arc;

use ellipse_tess::{AABB, core::math::Vector2};
use egui::epaint;
use egui_plot::{PlotItem, PlotPoint, PlotTransform};
use lyon::{
    path::Path,
    tessellation::{
        BuffersBuilder, FillOptions, FillTessellator, StrokeOptions, StrokeTessellator,
        VertexBuffers,
    },
};

use super::{
    PLOT_VERTEX_RADIUS, VertexConstructor, aabb_to_plotbounds, lyon_point, plot_bounds_valid,
    plotbounds_to_aabb, points_bounds,
};

/// Plot item for a polygon given by its vertexes, closed implicitly (last vertex connects back to
/// the first).
pub struct PolygonPlotItem<'a> {
    points: &'a [Vector2],
    bounds: Option<AABB>,
    vertex_color: epaint::Color32,
    stroke_color: epaint::Color32,
    fill_color: epaint::Color32,
    stroke_width: f32,
    name: String,
}

impl<'a> PolygonPlotItem<'a> {
    pub fn new(points: &'a [Vector2]) -> Self {
        Self {
            points,
            bounds: points_bounds(points),
            vertex_color: epaint::Color32::TRANSPARENT,
            stroke_color: epaint::Color32::TRANSPARENT,
            fill_color: epaint::Color32::TRANSPARENT,
            stroke_width: 1.0,
            name: "Polygon".to_string(),
        }
    }

    pub fn vertex_color(mut self, color: epaint::Color32) -> Self {
        self.vertex_color = color;
        self
    }

    pub fn stroke_color(mut self, color: epaint::Color32) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn fill_color(mut self, color: epaint::Color32) -> Self {
        self.fill_color = color;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Closing segment included.
    fn segments(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let count = self.points.len();
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % count]))
    }

    fn fill_shape(&self, transform: &PlotTransform) -> Option<egui::Shape> {
        let mut builder = Path::builder();
        let mut iter = self.points.iter();
        builder.begin(lyon_point(*iter.next()?, transform));
        for p in iter {
            builder.line_to(lyon_point(*p, transform));
        }
        builder.end(true);
        let path = builder.build();

        let mut lyon_mesh: VertexBuffers<_, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            path.as_slice(),
            &FillOptions::DEFAULT,
            &mut BuffersBuilder::new(
                &mut lyon_mesh,
                VertexConstructor {
                    color: self.fill_color,
                },
            ),
        );

        if let Err(e) = result {
            log::debug!("failed to fill polygon: {e:?}");
            return None;
        }

        Some(egui::Shape::mesh(Arc::new(epaint::Mesh {
            vertices: lyon_mesh.vertices,
            indices: lyon_mesh.indices,
            texture_id: Default::default(),
        })))
    }

    fn stroke_shape(&self, transform: &PlotTransform) -> Option<egui::Shape> {
        // only segments within the plot frame are stroked, when zoomed in most of a large polygon
        // is off screen and tessellating it would produce a lot of unused triangles
        let frame = *transform.frame();
        let mut builder = Path::builder();
        let mut in_sub_path = false;
        for (v1, v2) in self.segments() {
            let p1 = lyon_point(v1, transform);
            let p2 = lyon_point(v2, transform);
            let seg_bounds =
                egui::Rect::from_two_pos(egui::pos2(p1.x, p1.y), egui::pos2(p2.x, p2.y));
            if frame.intersects(seg_bounds) {
                if !in_sub_path {
                    builder.begin(p1);
                    in_sub_path = true;
                }
                builder.line_to(p2);
            } else if in_sub_path {
                builder.end(false);
                in_sub_path = false;
            }
        }

        if in_sub_path {
            builder.end(false);
        }

        let path = builder.build();
        let mut lyon_mesh: VertexBuffers<_, u32> = VertexBuffers::new();
        let result = StrokeTessellator::new().tessellate_path(
            &path,
            &StrokeOptions::DEFAULT.with_line_width(self.stroke_width),
            &mut BuffersBuilder::new(
                &mut lyon_mesh,
                VertexConstructor {
                    color: self.stroke_color,
                },
            ),
        );

        if let Err(e) = result {
            log::debug!("failed to stroke polygon: {e:?}");
            return None;
        }

        Some(egui::Shape::mesh(Arc::new(epaint::Mesh {
            vertices: lyon_mesh.vertices,
            indices: lyon_mesh.indices,
            texture_id: Default::default(),
        })))
    }
}

impl PlotItem for PolygonPlotItem<'_> {
    fn shapes(&self, _ui: &egui::Ui, transform: &PlotTransform, shapes: &mut Vec<egui::Shape>) {
        if !plot_bounds_valid(transform.bounds()) {
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        let plot_bounds = plotbounds_to_aabb(transform.bounds());
        if !plot_bounds.overlaps_aabb(&bounds) {
            return;
        }

        if self.fill_color != epaint::Color32::TRANSPARENT && self.points.len() > 2 {
            shapes.extend(self.fill_shape(transform));
        }

        if self.stroke_color != epaint::Color32::TRANSPARENT && self.points.len() > 1 {
            shapes.extend(self.stroke_shape(transform));
        }

        if self.vertex_color != epaint::Color32::TRANSPARENT {
            for v in self.points {
                if v.x < plot_bounds.min_x
                    || v.x > plot_bounds.max_x
                    || v.y < plot_bounds.min_y
                    || v.y > plot_bounds.max_y
                {
                    continue;
                }
                shapes.push(egui::Shape::circle_filled(
                    transform.position_from_point(&PlotPoint::new(v.x, v.y)),
                    PLOT_VERTEX_RADIUS,
                    self.vertex_color,
                ));
            }
        }
    }

    fn initialize(&mut self, _x_range: std::ops::RangeInclusive<f64>) {}

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> egui::Color32 {
        if self.stroke_color != epaint::Color32::TRANSPARENT {
            self.stroke_color
        } else {
            self.fill_color
        }
    }

    fn highlight(&mut self) {}

    fn highlighted(&self) -> bool {
        false
    }

    fn allow_hover(&self) -> bool {
        false
    }

    fn geometry(&self) -> egui_plot::PlotGeometry<'_> {
        egui_plot::PlotGeometry::None
    }

    fn bounds(&self) -> egui_plot::PlotBounds {
        match &self.bounds {
            Some(b) => aabb_to_plotbounds(b),
            None => egui_plot::PlotBounds::NOTHING,
        }
    }

    fn id(&self) -> Option<egui::Id> {
        None
    }
}
