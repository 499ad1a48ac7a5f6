//! Color picker modal for a single palette step

use crate::i18n::LocaleManager;
use crate::widgets::{from_color32, parse_color32, swatch};
use egui::color_picker::{color_picker_color32, Alpha};
use egui::{Color32, Key, Pos2, Rect, Vec2};
use hueflow_core::HexColor;

/// What the user did in the picker this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A new color was chosen
    Changed(HexColor),
    /// The picker asked to be closed
    Close,
}

/// Floating picker window, anchored beside the side panel
#[derive(Debug, Default)]
pub struct ColorPickerModal {
    /// Offer an alpha slider
    pub allow_alpha: bool,
    hex_input: String,
    synced_from: String,
}

impl ColorPickerModal {
    /// Distance of the picker from the left edge of the window
    pub const LEFT: f32 = 340.0;
    /// Vertical position as a fraction of the window height
    pub const TOP_FRACTION: f32 = 0.3;

    pub fn new(allow_alpha: bool) -> Self {
        Self {
            allow_alpha,
            ..Self::default()
        }
    }

    /// Top-left corner of the picker inside `screen`
    pub fn anchor(screen: Rect) -> Pos2 {
        Pos2::new(
            screen.min.x + Self::LEFT,
            screen.min.y + screen.height() * Self::TOP_FRACTION,
        )
    }

    /// Render the picker for step `index` whose stored text is `current`.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        index: usize,
        current: &str,
        palette_colors: &[String],
        locale: &LocaleManager,
    ) -> Option<PickerEvent> {
        if self.synced_from != current {
            self.hex_input = current.to_uppercase();
            self.synced_from = current.to_string();
        }

        let mut event = None;
        let mut color = parse_color32(current).unwrap_or(Color32::WHITE);
        let alpha = if self.allow_alpha {
            Alpha::OnlyBlend
        } else {
            Alpha::Opaque
        };

        egui::Window::new("custom_palette_picker")
            .id(egui::Id::new("custom_palette_picker"))
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .order(egui::Order::Foreground)
            .fixed_pos(Self::anchor(ctx.content_rect()))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(format!("#{}", index + 1));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new("✖").frame(false))
                            .on_hover_text(locale.t("picker-close"))
                            .clicked()
                        {
                            event = Some(PickerEvent::Close);
                        }
                    });
                });

                if color_picker_color32(ui, &mut color, alpha) {
                    event = Some(PickerEvent::Changed(from_color32(color)));
                }

                ui.horizontal(|ui| {
                    ui.label(locale.t("picker-hex"));
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.hex_input)
                            .desired_width(80.0)
                            .font(egui::TextStyle::Monospace),
                    );
                    if response.changed() {
                        if let Ok(parsed) = HexColor::parse(&self.hex_input) {
                            event = Some(PickerEvent::Changed(parsed));
                        }
                    }
                });

                if palette_colors.len() > 1 {
                    ui.label(locale.t("picker-palette"));
                    ui.horizontal_wrapped(|ui| {
                        for (i, text) in palette_colors.iter().enumerate() {
                            let response = ui
                                .push_id(("picker_preset", i), |ui| {
                                    swatch(ui, text, Vec2::splat(16.0))
                                })
                                .inner;
                            if response.clicked() {
                                if let Ok(parsed) = HexColor::parse(text) {
                                    event = Some(PickerEvent::Changed(parsed));
                                }
                            }
                        }
                    });
                }
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            event = Some(PickerEvent::Close);
        }
        event
    }
}
