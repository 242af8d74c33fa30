mod demo_scenes_pane;
mod ellipse_scene;
mod scene_settings;
mod tolerance_sweep_scene;

pub use demo_scenes_pane::{DemoScenes, DemoScenesState};
pub use scene_settings::SceneSettings;

use ellipse_tess::{
    core::math::Vector2,
    ellipse::{Ellipse, EllipseError, EllipsePoints, EllipseTessOptions, ellipse_points_opt},
};
use serde::{Deserialize, Serialize};

pub trait Scene {
    fn name(&self) -> &'static str;

    fn ui(&mut self, ui: &mut egui::Ui, settings: &SceneSettings, init: bool);

    /// Scene parameters to persist between app runs.
    fn state(&self) -> serde_json::Value;

    /// Restore parameters previously returned by [Scene::state].
    fn restore(&mut self, state: serde_json::Value);
}

/// Right side panel holding scene controls.
fn controls_side_panel(id: &'static str) -> egui::SidePanel {
    egui::SidePanel::right(id)
        .min_width(220.0)
        .default_width(240.0)
}

/// Ellipse inputs shared by the scenes, the rectangle the ellipse is inscribed in given by its
/// center and full width and height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct EllipseInput {
    center: Vector2,
    width: f64,
    height: f64,
}

impl Default for EllipseInput {
    fn default() -> Self {
        Self {
            center: Vector2::zero(),
            width: 100.0,
            height: 50.0,
        }
    }
}

impl EllipseInput {
    fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.width, self.height)
    }

    fn tessellate(&self, options: &EllipseTessOptions<f64>) -> Result<Tessellation, EllipseError> {
        let points = ellipse_points_opt(self.width, self.height, self.center, options)?;
        Ok(Tessellation::new(points))
    }

    /// Densely sampled outline of the exact ellipse, empty if the ellipse is invalid.
    fn exact_outline(&self) -> Vec<Vector2> {
        let ellipse = self.ellipse();
        if ellipse.validate().is_err() {
            return Vec::new();
        }

        let step = std::f64::consts::TAU / EXACT_OUTLINE_SAMPLES as f64;
        (0..EXACT_OUTLINE_SAMPLES)
            .map(|i| ellipse.point_at(i as f64 * step))
            .collect()
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("ellipse_input_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Center x");
                ui.add(egui::DragValue::new(&mut self.center.x).speed(0.5));
                ui.end_row();
                ui.label("Center y");
                ui.add(egui::DragValue::new(&mut self.center.y).speed(0.5));
                ui.end_row();
                ui.label("Width");
                ui.add(egui::DragValue::new(&mut self.width).speed(0.5))
                    .on_hover_text("Full width of the bounding rectangle");
                ui.end_row();
                ui.label("Height");
                ui.add(egui::DragValue::new(&mut self.height).speed(0.5))
                    .on_hover_text("Full height of the bounding rectangle");
                ui.end_row();
            });
    }
}

const EXACT_OUTLINE_SAMPLES: usize = 720;

/// Collected tessellation output for plotting and listing.
struct Tessellation {
    points: Vec<Vector2>,
    thetas: Vec<f64>,
    depth_limited: bool,
}

impl Tessellation {
    fn new(points: EllipsePoints) -> Self {
        let thetas = (0..points.total_count())
            .map(|i| points.theta_at(i))
            .collect();
        let depth_limited = points.depth_limited();
        Self {
            points: points.collect(),
            thetas,
            depth_limited,
        }
    }
}

/// Restore a scene parameters struct from persisted state, keeping the current value if the state
/// does not deserialize (e.g. persisted by an older version).
fn restore_or_keep<T>(scene_name: &str, current: &mut T, state: serde_json::Value)
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_value(state) {
        Ok(restored) => *current = restored,
        Err(e) => log::warn!("failed to restore '{scene_name}' scene state: {e}"),
    }
}

fn scene_state<T>(scene_name: &str, value: &T) -> serde_json::Value
where
    T: Serialize,
{
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::warn!("failed to serialize '{scene_name}' scene state: {e}");
        serde_json::Value::Null
    })
}
