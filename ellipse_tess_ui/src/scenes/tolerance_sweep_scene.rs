use eframe::egui::{CentralPanel, Grid, ScrollArea, Slider, TopBottomPanel, Ui};
use egui_plot::{Legend, Plot};
use ellipse_tess::{
    AABB,
    core::math::Vector2,
    ellipse::{EllipseError, ellipse_points_in_rect},
};
use serde::{Deserialize, Serialize};

use crate::plotting::PolygonPlotItem;

use super::{
    EllipseInput, Scene, controls_side_panel, restore_or_keep, scene_settings::SceneSettings,
    scene_state,
};

const MAX_STEPS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct ToleranceSweepParams {
    input: EllipseInput,
    coarsest: f64,
    factor: f64,
    steps: usize,
}

impl Default for ToleranceSweepParams {
    fn default() -> Self {
        Self {
            input: EllipseInput::default(),
            coarsest: 0.8,
            factor: 2.0,
            steps: 4,
        }
    }
}

impl ToleranceSweepParams {
    /// Max angle errors from coarsest to finest.
    fn max_angle_errors(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(|i| self.coarsest / self.factor.powi(i as i32))
    }

    fn rect(&self) -> AABB {
        let c = self.input.center;
        let half_w = self.input.width / 2.0;
        let half_h = self.input.height / 2.0;
        AABB::new(c.x - half_w, c.y - half_h, c.x + half_w, c.y + half_h)
    }
}

struct SweepEntry {
    max_angle_error: f64,
    result: Result<Vec<Vector2>, EllipseError>,
}

/// Scene overlaying the tessellations of one ellipse at a sequence of decreasing max angle errors.
#[derive(Default)]
pub struct ToleranceSweepScene {
    params: ToleranceSweepParams,
    cached: Option<(ToleranceSweepParams, Vec<SweepEntry>)>,
    zoom_to_fit: bool,
}

impl ToleranceSweepScene {
    /// Entries for `params`, recomputed only when they differ from the cached params.
    fn entries_for<'a>(
        cached: &'a mut Option<(ToleranceSweepParams, Vec<SweepEntry>)>,
        params: &ToleranceSweepParams,
    ) -> &'a [SweepEntry] {
        if !cached.as_ref().is_some_and(|(p, _)| p == params) {
            *cached = Some((*params, Self::compute(params)));
        }
        match cached.as_ref() {
            Some((_, entries)) => entries.as_slice(),
            None => &[],
        }
    }

    fn compute(params: &ToleranceSweepParams) -> Vec<SweepEntry> {
        let rect = params.rect();
        log::debug!("tolerance sweep of {rect:?} with {params:?}");
        params
            .max_angle_errors()
            .map(|max_angle_error| {
                let result = ellipse_points_in_rect(&rect, max_angle_error).map(|p| p.collect());
                if let Err(e) = &result {
                    log::warn!("tessellation with max angle error {max_angle_error} failed: {e}");
                }
                SweepEntry {
                    max_angle_error,
                    result,
                }
            })
            .collect()
    }
}

impl Scene for ToleranceSweepScene {
    fn name(&self) -> &'static str {
        "Tolerance Sweep"
    }

    fn ui(&mut self, ui: &mut Ui, settings: &SceneSettings, init: bool) {
        let colors = settings.colors(ui.ctx());

        let ToleranceSweepScene {
            params,
            cached,
            zoom_to_fit,
        } = self;

        controls_side_panel("tolerance_sweep_controls").show_inside(ui, |ui| {
            ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.add_space(ui.spacing().item_spacing.y);

                ui.label("Bounding Rectangle");
                params.input.ui(ui);
                ui.separator();

                ui.label("Coarsest Max Angle Error");
                ui.add(Slider::new(&mut params.coarsest, 1e-3..=1.5).logarithmic(true));
                ui.label("Reduction Factor");
                ui.add(Slider::new(&mut params.factor, 1.1..=10.0))
                    .on_hover_text("Each step divides the max angle error by this factor");
                ui.label("Steps");
                ui.add(Slider::new(&mut params.steps, 1..=MAX_STEPS));
                ui.separator();

                *zoom_to_fit = ui
                    .button("Zoom to Fit")
                    .on_hover_text("Zoom to fit contents")
                    .clicked();
            });
        });

        let entries = Self::entries_for(cached, params);

        TopBottomPanel::bottom("tolerance_sweep_counts_panel")
            .resizable(true)
            .show_inside(ui, |ui| {
                ui.add_space(ui.spacing().item_spacing.y);
                Grid::new("tolerance_sweep_counts")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Max Angle Error");
                        ui.strong("Points");
                        ui.end_row();
                        for (i, entry) in entries.iter().enumerate() {
                            ui.colored_label(
                                colors.get_multi_color(i),
                                format!("{:.5}", entry.max_angle_error),
                            );
                            match &entry.result {
                                Ok(points) => ui.label(points.len().to_string()),
                                Err(e) => ui.colored_label(colors.error_color, e.to_string()),
                            };
                            ui.end_row();
                        }
                    });
            });

        *zoom_to_fit |= init;

        CentralPanel::default().show_inside(ui, |ui| {
            let plot = settings
                .apply_to_plot(Plot::new("tolerance_sweep_scene"))
                .data_aspect(1.0)
                .legend(Legend::default());

            plot.show(ui, |plot_ui| {
                plot_ui.set_auto_bounds([false, false]);

                for (i, entry) in entries.iter().enumerate() {
                    if let Ok(points) = &entry.result {
                        plot_ui.add(
                            PolygonPlotItem::new(points)
                                .name(format!("{:.5}", entry.max_angle_error))
                                .stroke_color(colors.get_multi_color(i)),
                        );
                    }
                }

                if *zoom_to_fit {
                    plot_ui.set_auto_bounds([true, true]);
                }
            });
        });
    }

    fn state(&self) -> serde_json::Value {
        scene_state(self.name(), &self.params)
    }

    fn restore(&mut self, state: serde_json::Value) {
        let name = self.name();
        restore_or_keep(name, &mut self.params, state);
        self.params.steps = self.params.steps.clamp(1, MAX_STEPS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_angle_errors_decrease_by_factor() {
        let params = ToleranceSweepParams {
            coarsest: 0.8,
            factor: 2.0,
            steps: 3,
            ..Default::default()
        };
        let errors: Vec<_> = params.max_angle_errors().collect();
        assert_eq!(errors, vec![0.8, 0.4, 0.2]);
    }

    #[test]
    fn entries_follow_changed_params() {
        let mut cached = None;
        let mut params = ToleranceSweepParams::default();
        let counts = |entries: &[SweepEntry]| -> Vec<usize> {
            entries
                .iter()
                .map(|e| e.result.as_ref().map_or(0, |p| p.len()))
                .collect()
        };

        let first = counts(ToleranceSweepScene::entries_for(&mut cached, &params));
        assert_eq!(first.len(), params.steps);

        // entries reflect an edit made before they are requested
        params.steps = 2;
        params.coarsest = 0.1;
        let entries = ToleranceSweepScene::entries_for(&mut cached, &params);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].max_angle_error, 0.1);
        assert_eq!(entries[1].max_angle_error, 0.05);
        let second = counts(entries);
        assert!(second[0] > first[0]);

        params.input.height = 0.0;
        let entries = ToleranceSweepScene::entries_for(&mut cached, &params);
        assert!(
            entries
                .iter()
                .all(|e| matches!(e.result, Err(EllipseError::InvalidDimensions { .. })))
        );
    }
}
