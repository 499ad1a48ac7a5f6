//! Layer color range selector
//!
//! Owns the layer's applied color range, the palette being edited in the
//! custom palette editor, and the picker flag the editor toggles.

use crate::i18n::LocaleManager;
use crate::panels::custom_palette_panel::{CustomPaletteAction, CustomPalettePanel};
use crate::widgets::{color_strip, link_button, render_header};
use egui::Ui;
use hueflow_core::{presets, ColorRange, History};

#[derive(Debug)]
pub struct ColorRangeSelector {
    applied: ColorRange,
    custom_palette: ColorRange,
    show_sketcher: bool,
    editing_custom: bool,
    type_filter: Option<&'static str>,
    steps_filter: Option<usize>,
    history: History<ColorRange>,
    /// Step touched by the last recorded edit; further edits to it share one undo entry
    merging_step: Option<usize>,
    panel: CustomPalettePanel,
}

impl Default for ColorRangeSelector {
    fn default() -> Self {
        Self::new(presets::default_range())
    }
}

impl ColorRangeSelector {
    pub fn new(applied: ColorRange) -> Self {
        Self {
            custom_palette: ColorRange::custom(applied.colors.clone()),
            applied,
            show_sketcher: false,
            editing_custom: false,
            type_filter: None,
            steps_filter: None,
            history: History::default(),
            merging_step: None,
            panel: CustomPalettePanel::new(),
        }
    }

    pub fn applied(&self) -> &ColorRange {
        &self.applied
    }

    pub fn custom_palette(&self) -> &ColorRange {
        &self.custom_palette
    }

    pub fn show_sketcher(&self) -> bool {
        self.show_sketcher
    }

    pub fn is_editing_custom(&self) -> bool {
        self.editing_custom
    }

    pub fn set_default_step_color(&mut self, color: &str) {
        self.panel.default_step_color = color.to_string();
    }

    pub fn set_picker_alpha(&mut self, allow_alpha: bool) {
        self.panel.set_picker_alpha(allow_alpha);
    }

    /// Open the editor on a copy of the applied range
    pub fn begin_custom_edit(&mut self) {
        self.custom_palette = ColorRange::custom(self.applied.colors.clone());
        self.editing_custom = true;
        self.show_sketcher = false;
        self.history.clear();
        self.merging_step = None;
        tracing::debug!("Editing custom palette from '{}'", self.applied.name);
    }

    /// Apply a ready-made range
    pub fn select_range(&mut self, range: &ColorRange) {
        tracing::info!("Color range '{}' selected", range.name);
        self.applied = range.clone();
    }

    /// Handle a request from the editor. Returns the range when one was applied.
    pub fn handle_action(&mut self, action: CustomPaletteAction) -> Option<ColorRange> {
        match action {
            CustomPaletteAction::SetCustomPalette(palette) => {
                if palette != self.custom_palette {
                    let step = single_changed_step(&self.custom_palette, &palette);
                    let previous = std::mem::replace(&mut self.custom_palette, palette);
                    if step.is_none() || step != self.merging_step {
                        self.history.push(previous);
                    }
                    self.merging_step = step;
                }
                None
            }
            CustomPaletteAction::ToggleSketcher => {
                self.show_sketcher = !self.show_sketcher;
                self.merging_step = None;
                None
            }
            CustomPaletteAction::Apply(palette) => {
                self.applied = palette.clone();
                Some(palette)
            }
            CustomPaletteAction::Cancel => {
                self.editing_custom = false;
                self.show_sketcher = false;
                self.history.clear();
                self.merging_step = None;
                None
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.editing_custom && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editing_custom && self.history.can_redo()
    }

    /// Step the edited palette back
    pub fn undo(&mut self) -> bool {
        if !self.editing_custom {
            return false;
        }
        self.merging_step = None;
        match self.history.undo(self.custom_palette.clone()) {
            Some(previous) => {
                self.custom_palette = previous;
                true
            }
            None => false,
        }
    }

    /// Step the edited palette forward
    pub fn redo(&mut self) -> bool {
        if !self.editing_custom {
            return false;
        }
        self.merging_step = None;
        match self.history.redo(self.custom_palette.clone()) {
            Some(next) => {
                self.custom_palette = next;
                true
            }
            None => false,
        }
    }

    /// Render the selector. Returns the custom palette confirmed this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        locale: &LocaleManager,
        recent: &[ColorRange],
    ) -> Option<ColorRange> {
        render_header(ui, &locale.t("panel-color-range"));
        ui.add_space(4.0);
        ui.label(locale.t("label-applied"));
        color_strip(ui, &self.applied.colors, 14.0).on_hover_text(&self.applied.name);
        ui.add_space(8.0);

        if self.editing_custom {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.can_undo(), egui::Button::new("↺"))
                    .on_hover_text(locale.t("btn-undo"))
                    .clicked()
                {
                    self.undo();
                }
                if ui
                    .add_enabled(self.can_redo(), egui::Button::new("↻"))
                    .on_hover_text(locale.t("btn-redo"))
                    .clicked()
                {
                    self.redo();
                }
            });

            let actions = self
                .panel
                .show(ui, &self.custom_palette, self.show_sketcher, locale);
            let mut confirmed = None;
            for action in actions {
                if let Some(range) = self.handle_action(action) {
                    confirmed = Some(range);
                }
            }
            return confirmed;
        }

        self.render_filters(ui, locale);
        ui.separator();

        ui.label(locale.t("label-presets"));
        for range in presets::filtered(self.type_filter, self.steps_filter) {
            if Self::range_row(ui, range, range == &self.applied).clicked() {
                self.select_range(range);
            }
        }

        if !recent.is_empty() {
            ui.separator();
            ui.label(locale.t("label-recent-palettes"));
            for (i, range) in recent.iter().enumerate() {
                let clicked = ui
                    .push_id(("recent_palette", i), |ui| {
                        Self::range_row(ui, range, range == &self.applied).clicked()
                    })
                    .inner;
                if clicked {
                    self.select_range(range);
                }
            }
        }

        ui.separator();
        if link_button(ui, &locale.t("btn-custom-palette")).clicked() {
            self.begin_custom_edit();
        }

        None
    }

    fn range_row(ui: &mut Ui, range: &ColorRange, selected: bool) -> egui::Response {
        let frame = if selected {
            egui::Frame::NONE.stroke(ui.visuals().selection.stroke)
        } else {
            egui::Frame::NONE
        };
        frame
            .inner_margin(2.0)
            .show(ui, |ui| color_strip(ui, &range.colors, 12.0))
            .inner
            .on_hover_text(&range.name)
    }

    fn render_filters(&mut self, ui: &mut Ui, locale: &LocaleManager) {
        let type_label = |t: Option<&str>| match t {
            Some(presets::SEQUENTIAL) => locale.t("type-sequential"),
            Some(presets::DIVERGING) => locale.t("type-diverging"),
            Some(presets::QUALITATIVE) => locale.t("type-qualitative"),
            _ => locale.t("label-any"),
        };

        ui.horizontal(|ui| {
            ui.label(locale.t("label-type"));
            egui::ComboBox::from_id_salt("color_range_type")
                .selected_text(type_label(self.type_filter))
                .show_ui(ui, |ui| {
                    for option in [
                        None,
                        Some(presets::SEQUENTIAL),
                        Some(presets::DIVERGING),
                        Some(presets::QUALITATIVE),
                    ] {
                        ui.selectable_value(&mut self.type_filter, option, type_label(option));
                    }
                });

            let steps_label = |n: Option<usize>| match n {
                Some(n) => locale.t_args("label-steps", &[("count", &n.to_string())]),
                None => locale.t("label-any"),
            };
            egui::ComboBox::from_id_salt("color_range_steps")
                .selected_text(steps_label(self.steps_filter))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.steps_filter, None, steps_label(None));
                    for n in presets::step_counts() {
                        ui.selectable_value(&mut self.steps_filter, Some(n), steps_label(Some(n)));
                    }
                });
        });
    }
}

/// The only step that differs between two palettes of equal length
fn single_changed_step(before: &ColorRange, after: &ColorRange) -> Option<usize> {
    if before.len() != after.len() {
        return None;
    }
    let mut changed = before
        .colors
        .iter()
        .zip(&after.colors)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);
    match (changed.next(), changed.next()) {
        (Some(i), None) => Some(i),
        _ => None,
    }
}
