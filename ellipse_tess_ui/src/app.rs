use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::{
    scenes::{DemoScenes, DemoScenesState, SceneSettings},
    theme::Theme,
};

/// App state persisted between runs.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
struct PersistedState {
    settings: SceneSettings,
    scenes: DemoScenesState,
}

pub struct EllipseTessApp {
    settings: SceneSettings,
    scenes: DemoScenes,
    show_settings: bool,
}

impl EllipseTessApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::debug!("restored app state: {state:?}");

        let mut scenes = DemoScenes::default();
        scenes.restore(state.scenes);

        Self {
            settings: state.settings,
            scenes,
            show_settings: false,
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.scenes.selector_ui(ui);

                ui.separator();

                egui::ComboBox::from_id_salt("theme_combo")
                    .selected_text(self.settings.theme.label())
                    .show_ui(ui, |ui| {
                        for theme in Theme::ALL {
                            ui.selectable_value(&mut self.settings.theme, theme, theme.label());
                        }
                    });

                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
            });
        });
    }
}

impl eframe::App for EllipseTessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.settings.theme.to_egui_visuals(ctx));

        self.menu_bar(ctx);
        self.settings.show(ctx, &mut self.show_settings);
        self.scenes.ui(ctx, &self.settings);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            settings: self.settings,
            scenes: self.scenes.state(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }
}
