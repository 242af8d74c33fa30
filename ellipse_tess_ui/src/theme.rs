use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀ Light",
            Theme::Dark => "🌙 Dark",
            Theme::System => "🖥 System",
        }
    }

    /// Defaults to dark when the system theme can't be detected.
    fn system_is_dark(ctx: &egui::Context) -> bool {
        match ctx.system_theme() {
            Some(egui::Theme::Light) => false,
            Some(egui::Theme::Dark) | None => true,
        }
    }

    fn is_dark(&self, ctx: &egui::Context) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => Self::system_is_dark(ctx),
        }
    }

    pub fn to_egui_visuals(&self, ctx: &egui::Context) -> egui::Visuals {
        if self.is_dark(ctx) {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    pub fn colors(&self, ctx: &egui::Context) -> ThemeColors {
        if self.is_dark(ctx) {
            ThemeColors::dark()
        } else {
            ThemeColors::light()
        }
    }
}

/// Semantic colors used by the scenes, one palette per light/dark visuals.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Stroke of the tessellated polygon
    pub polygon_stroke: Color32,
    /// Fill of the tessellated polygon
    pub polygon_fill: Color32,
    /// Polygon vertex markers
    pub vertex_color: Color32,
    /// Reference outline of the exact ellipse
    pub exact_outline: Color32,

    /// Palette for overlaying multiple tessellations
    pub multi_colors: [Color32; 6],

    pub error_color: Color32,
    pub warning_color: Color32,
    pub success_color: Color32,
}

impl ThemeColors {
    fn light() -> Self {
        Self {
            polygon_stroke: Color32::from_rgb(0, 100, 200), // Deep blue
            polygon_fill: Color32::from_rgba_unmultiplied(200, 200, 255, 60),
            vertex_color: Color32::from_rgb(0, 150, 0), // Dark green
            exact_outline: Color32::from_rgb(200, 140, 0), // Dark gold

            multi_colors: [
                Color32::from_rgb(0, 100, 200),  // Deep blue
                Color32::from_rgb(200, 50, 50),  // Deep red
                Color32::from_rgb(0, 150, 0),    // Dark green
                Color32::from_rgb(150, 0, 150),  // Purple
                Color32::from_rgb(200, 100, 0),  // Orange
                Color32::from_rgb(100, 50, 150), // Violet
            ],

            error_color: Color32::from_rgb(180, 0, 0),
            warning_color: Color32::from_rgb(180, 120, 0),
            success_color: Color32::from_rgb(0, 120, 0),
        }
    }

    fn dark() -> Self {
        Self {
            polygon_stroke: Color32::from_rgb(100, 180, 255), // Bright blue
            polygon_fill: Color32::from_rgba_unmultiplied(100, 150, 255, 60),
            vertex_color: Color32::from_rgb(120, 255, 120), // Bright green
            exact_outline: Color32::from_rgb(255, 200, 80), // Bright gold

            multi_colors: [
                Color32::from_rgb(100, 180, 255), // Bright blue
                Color32::from_rgb(255, 120, 120), // Bright red
                Color32::from_rgb(120, 255, 120), // Bright green
                Color32::from_rgb(255, 120, 255), // Bright magenta
                Color32::from_rgb(255, 180, 80),  // Bright orange
                Color32::from_rgb(180, 120, 255), // Bright violet
            ],

            error_color: Color32::from_rgb(255, 100, 100),
            warning_color: Color32::from_rgb(255, 200, 80),
            success_color: Color32::from_rgb(120, 255, 120),
        }
    }

    pub fn get_multi_color(&self, index: usize) -> Color32 {
        self.multi_colors[index % self.multi_colors.len()]
    }
}
