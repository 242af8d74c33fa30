use std::collections::BTreeMap;

use eframe::egui::{self, Context};
use serde::{Deserialize, Serialize};

use super::{Scene, SceneSettings};

pub struct DemoScenes {
    scenes: Vec<Box<dyn Scene>>,
    selected: usize,
    // scene shown last frame, used to signal scene (re)initialization
    last_shown: Option<usize>,
}

/// Persisted state of all the scenes keyed by scene name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoScenesState {
    pub selected: usize,
    pub scenes: BTreeMap<String, serde_json::Value>,
}

impl Default for DemoScenes {
    fn default() -> Self {
        Self::from_scenes(vec![
            Box::new(super::ellipse_scene::EllipseScene::default()),
            Box::new(super::tolerance_sweep_scene::ToleranceSweepScene::default()),
        ])
    }
}

impl DemoScenes {
    pub fn from_scenes(scenes: Vec<Box<dyn Scene>>) -> Self {
        Self {
            scenes,
            selected: 0,
            last_shown: None,
        }
    }

    pub fn state(&self) -> DemoScenesState {
        DemoScenesState {
            selected: self.selected,
            scenes: self
                .scenes
                .iter()
                .map(|s| (s.name().to_string(), s.state()))
                .collect(),
        }
    }

    pub fn restore(&mut self, mut state: DemoScenesState) {
        if state.selected < self.scenes.len() {
            self.selected = state.selected;
        }

        for scene in self.scenes.iter_mut() {
            if let Some(scene_state) = state.scenes.remove(scene.name()) {
                scene.restore(scene_state);
            }
        }
    }

    /// Scene selector shown in the top menu bar.
    pub fn selector_ui(&mut self, ui: &mut egui::Ui) {
        for (i, scene) in self.scenes.iter().enumerate() {
            ui.selectable_value(&mut self.selected, i, scene.name());
        }
    }

    pub fn ui(&mut self, ctx: &Context, settings: &SceneSettings) {
        let Self {
            scenes,
            selected,
            last_shown,
        } = self;

        let init = *last_shown != Some(*selected);
        *last_shown = Some(*selected);

        let fill = ctx.style().visuals.extreme_bg_color;
        let frame = egui::Frame::NONE.fill(fill);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            scenes[*selected].ui(ui, settings, init);
        });
    }
}
