//! Theme System
//!
//! Dark, light and high-contrast visuals for the side panel, plus the
//! shared color constants the palette widgets draw with.

use egui::{Color32, Stroke, Style, Visuals};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark side panel (default for map work)
    #[default]
    Dark,
    /// Light theme
    Light,
    /// High contrast for accessibility
    HighContrast,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::HighContrast]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "Dark"),
            Self::Light => write!(f, "Light"),
            Self::HighContrast => write!(f, "High Contrast"),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub font_size: f32,
    pub spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 12.0,
            spacing: 4.0,
        }
    }
}

/// Side panel colors
pub mod colors {
    use egui::Color32;

    pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0x29, 0x32, 0x3C);
    pub const PANEL_BACKGROUND_HOVER: Color32 = Color32::from_rgb(0x3A, 0x45, 0x52);
    pub const TEXT_COLOR: Color32 = Color32::from_rgb(0xA0, 0xA7, 0xB4);
    pub const TEXT_COLOR_HL: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);
    pub const SUBTEXT_COLOR_ACTIVE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const LABEL_COLOR: Color32 = Color32::from_rgb(0x6A, 0x74, 0x85);
    pub const ACTIVE_COLOR: Color32 = Color32::from_rgb(0x1F, 0xBA, 0xD6);
    pub const ERROR_COLOR: Color32 = Color32::from_rgb(0xF9, 0x04, 0x2C);
    pub const CHECKER_LIGHT: Color32 = Color32::from_gray(200);
    pub const CHECKER_DARK: Color32 = Color32::from_gray(120);
}

impl ThemeConfig {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style {
            visuals: match self.theme {
                Theme::Dark => Self::dark_visuals(),
                Theme::Light => Self::light_visuals(),
                Theme::HighContrast => Self::high_contrast_visuals(),
            },
            ..Style::default()
        };

        style.spacing.item_spacing = egui::vec2(self.spacing * 2.0, self.spacing);
        style.spacing.button_padding = egui::vec2(self.spacing * 2.0, self.spacing);
        for font in style.text_styles.values_mut() {
            font.size = font.size.max(self.font_size);
        }

        ctx.set_style(style);
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(colors::TEXT_COLOR);
        visuals.panel_fill = colors::PANEL_BACKGROUND;
        visuals.window_fill = colors::PANEL_BACKGROUND;
        visuals.extreme_bg_color = Color32::from_rgb(0x24, 0x27, 0x30);

        visuals.widgets.hovered.bg_fill = colors::PANEL_BACKGROUND_HOVER;
        visuals.widgets.hovered.weak_bg_fill = colors::PANEL_BACKGROUND_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_COLOR_HL);
        visuals.widgets.active.bg_fill = colors::ACTIVE_COLOR;

        visuals.selection.bg_fill = colors::ACTIVE_COLOR.linear_multiply(0.5);
        visuals.selection.stroke = Stroke::new(1.0, colors::ACTIVE_COLOR);
        visuals.hyperlink_color = colors::ACTIVE_COLOR;
        visuals.window_stroke = Stroke::new(1.0, colors::LABEL_COLOR);

        visuals
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.override_text_color = Some(Color32::from_rgb(30, 30, 30));
        visuals.panel_fill = Color32::from_rgb(0xF7, 0xF7, 0xF7);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(0xE6, 0xE6, 0xE6);
        visuals.hyperlink_color = Color32::from_rgb(0x0F, 0x7A, 0x8C);
        visuals
    }

    /// High contrast visuals for accessibility
    fn high_contrast_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(Color32::WHITE);
        visuals.panel_fill = Color32::BLACK;
        visuals.window_fill = Color32::BLACK;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(2.0, Color32::WHITE);
        visuals.widgets.inactive.bg_stroke = Stroke::new(2.0, Color32::from_gray(200));
        visuals.widgets.hovered.bg_stroke = Stroke::new(3.0, Color32::YELLOW);
        visuals.widgets.hovered.expansion = 2.0;
        visuals.widgets.active.bg_fill = Color32::from_rgb(0, 200, 255);
        visuals.selection.stroke = Stroke::new(2.0, Color32::YELLOW);
        visuals
    }
}

/// Theme picker widget
pub fn theme_picker(ui: &mut egui::Ui, theme: &mut Theme) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for option in Theme::all() {
            changed |= ui
                .selectable_value(theme, *option, option.to_string())
                .clicked();
        }
    });
    changed
}
