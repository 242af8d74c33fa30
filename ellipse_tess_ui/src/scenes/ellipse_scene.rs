use eframe::egui::{CentralPanel, CollapsingHeader, ScrollArea, Slider, TopBottomPanel, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::Plot;
use ellipse_tess::{
    core::math::Vector2,
    ellipse::{EllipseError, EllipseTessOptions, MAX_DEPTH_LIMIT},
};
use serde::{Deserialize, Serialize};

use crate::plotting::PolygonPlotItem;

use super::{
    EllipseInput, Scene, Tessellation, controls_side_panel, restore_or_keep,
    scene_settings::SceneSettings, scene_state,
};

/// Smallest max angle error selectable from the slider.
const MIN_MAX_ANGLE_ERROR: f64 = 1e-4;
/// Largest max angle error selectable from the slider.
const MAX_MAX_ANGLE_ERROR: f64 = 1.5;
/// Tessellation edges are drawn wider than the exact outline so both stay visible when overlaid.
const TESSELLATION_STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct EllipseSceneParams {
    input: EllipseInput,
    options: EllipseTessOptions<f64>,
    fill: bool,
    stroke: bool,
    show_vertexes: bool,
    show_exact: bool,
}

impl Default for EllipseSceneParams {
    fn default() -> Self {
        Self {
            input: EllipseInput::default(),
            options: EllipseTessOptions::default(),
            fill: true,
            stroke: true,
            show_vertexes: true,
            show_exact: false,
        }
    }
}

/// Cached tessellation with the inputs used to create it.
struct Cached {
    input: EllipseInput,
    options: EllipseTessOptions<f64>,
    result: Result<Tessellation, EllipseError>,
    exact: Vec<Vector2>,
}

impl Cached {
    fn new(input: EllipseInput, options: EllipseTessOptions<f64>) -> Self {
        log::debug!("tessellating {input:?} with {options:?}");
        Self {
            input,
            options,
            result: input.tessellate(&options),
            exact: input.exact_outline(),
        }
    }

    fn is_for(&self, input: &EllipseInput, options: &EllipseTessOptions<f64>) -> bool {
        self.input == *input && self.options == *options
    }
}

/// Scene showing a single ellipse tessellation with its vertexes and the exact ellipse.
#[derive(Default)]
pub struct EllipseScene {
    params: EllipseSceneParams,
    cached: Option<Cached>,
    last_error: Option<EllipseError>,
    zoom_to_fit: bool,
}

impl Scene for EllipseScene {
    fn name(&self) -> &'static str {
        "Ellipse Tessellation"
    }

    fn ui(&mut self, ui: &mut Ui, settings: &SceneSettings, init: bool) {
        let colors = settings.colors(ui.ctx());

        let EllipseScene {
            params,
            cached,
            last_error,
            zoom_to_fit,
        } = self;

        controls_panel(ui, params, zoom_to_fit);

        // only recompute when the inputs change
        if !cached
            .as_ref()
            .is_some_and(|c| c.is_for(&params.input, &params.options))
        {
            let new_cache = Cached::new(params.input, params.options);
            let new_error = new_cache.result.as_ref().err().copied();
            if new_error != *last_error {
                if let Some(e) = &new_error {
                    log::warn!("ellipse tessellation failed: {e}");
                }
                *last_error = new_error;
            }
            *cached = Some(new_cache);
        }

        let Some(cached) = cached.as_ref() else {
            return;
        };

        TopBottomPanel::bottom("ellipse_scene_status")
            .resizable(true)
            .show_inside(ui, |ui| {
                ui.add_space(ui.spacing().item_spacing.y);
                match &cached.result {
                    Ok(t) => {
                        ui.horizontal(|ui| {
                            let count = format!("{} points", t.points.len());
                            if t.depth_limited {
                                ui.label(count);
                                ui.colored_label(
                                    colors.warning_color,
                                    "(subdivision budget used up, max angle error not met)",
                                );
                            } else {
                                ui.colored_label(colors.success_color, count);
                            }
                        });
                        CollapsingHeader::new("Points")
                            .id_salt("ellipse_points_table")
                            .default_open(false)
                            .show(ui, |ui| points_table(ui, t));
                    }
                    Err(e) => {
                        ui.colored_label(colors.error_color, e.to_string());
                    }
                }
            });

        *zoom_to_fit |= init;

        CentralPanel::default().show_inside(ui, |ui| {
            let plot = settings
                .apply_to_plot(Plot::new("ellipse_scene"))
                .data_aspect(1.0);

            plot.show(ui, |plot_ui| {
                plot_ui.set_auto_bounds([false, false]);

                if let Ok(t) = &cached.result {
                    let mut item = PolygonPlotItem::new(&t.points).name("Tessellation");
                    if params.fill {
                        item = item.fill_color(colors.polygon_fill);
                    }
                    if params.stroke {
                        item = item
                            .stroke_color(colors.polygon_stroke)
                            .stroke_width(TESSELLATION_STROKE_WIDTH);
                    }
                    if params.show_vertexes {
                        item = item.vertex_color(colors.vertex_color);
                    }
                    plot_ui.add(item);
                }

                if params.show_exact {
                    plot_ui.add(
                        PolygonPlotItem::new(&cached.exact)
                            .name("Exact ellipse")
                            .stroke_color(colors.exact_outline),
                    );
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
    }
}

fn controls_panel(ui: &mut Ui, params: &mut EllipseSceneParams, zoom_to_fit: &mut bool) {
    controls_side_panel("ellipse_scene_controls").show_inside(ui, |ui| {
        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            ui.add_space(ui.spacing().item_spacing.y);

            ui.label("Bounding Rectangle");
            params.input.ui(ui);
            ui.separator();

            ui.label("Max Angle Error (radians)");
            ui.add(
                Slider::new(
                    &mut params.options.max_angle_error,
                    MIN_MAX_ANGLE_ERROR..=MAX_MAX_ANGLE_ERROR,
                )
                .logarithmic(true),
            )
            .on_hover_text("Max angle between a polygon edge and the ellipse tangent at its ends");
            ui.label("Max Subdivision Depth");
            ui.add(Slider::new(&mut params.options.max_depth, 0..=MAX_DEPTH_LIMIT))
                .on_hover_text("Each quarter is split into at most 2^depth intervals");
            ui.separator();

            ui.checkbox(&mut params.fill, "Fill");
            ui.checkbox(&mut params.stroke, "Stroke");
            ui.checkbox(&mut params.show_vertexes, "Show Vertexes");
            ui.checkbox(&mut params.show_exact, "Show Exact Ellipse")
                .on_hover_text("Overlay a densely sampled outline of the exact ellipse");
            ui.separator();

            *zoom_to_fit = ui
                .button("Zoom to Fit")
                .on_hover_text("Zoom to fit contents")
                .clicked();
        });
    });
}

fn points_table(ui: &mut Ui, t: &Tessellation) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body);
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(240.0)
        .column(Column::auto())
        .columns(Column::auto().at_least(100.0), 2)
        .column(Column::remainder())
        .header(row_height, |mut header| {
            for title in ["#", "Theta", "X", "Y"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, t.points.len(), |mut row| {
                let i = row.index();
                let p = t.points[i];
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.6}", t.thetas[i]));
                });
                row.col(|ui| {
                    ui.label(format!("{:.6}", p.x));
                });
                row.col(|ui| {
                    ui.label(format!("{:.6}", p.y));
                });
            });
        });
}
