//! Custom Palette Editor Panel
//!
//! Edits a color ramp owned by the caller. The panel never stores the palette:
//! every edit is reported as a complete replacement palette in a
//! [`CustomPaletteAction`], and the caller decides when to store it.

use crate::i18n::LocaleManager;
use crate::panels::color_picker::{ColorPickerModal, PickerEvent};
use crate::widgets::{
    color_strip, divider_line, link_button, sortable_list, swatch, trash_button, SortEnd,
    SortableState, SWATCH_SIZE,
};
use egui::{RichText, Ui};
use hueflow_core::{ColorRange, HexColor, DEFAULT_STEP_COLOR};

/// Requests the panel sends to the palette owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomPaletteAction {
    /// Replace the edited palette
    SetCustomPalette(ColorRange),
    /// Open or close the color picker
    ToggleSketcher,
    /// Use this palette for the layer
    Apply(ColorRange),
    /// Leave the editor without applying
    Cancel,
}

/// Events from one swatch row, handled after the list is drawn
enum RowEvent {
    SwatchClick(usize),
    HexInput(usize, String),
    Delete(usize),
    Picker(PickerEvent),
}

/// Custom palette editor
#[derive(Debug)]
pub struct CustomPalettePanel {
    /// Step being edited in the picker
    current_swatch_index: Option<usize>,
    /// Color used by "Add Step" when there is nothing to duplicate
    pub default_step_color: String,
    sortable: SortableState,
    picker: ColorPickerModal,
}

impl Default for CustomPalettePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomPalettePanel {
    pub fn new() -> Self {
        Self {
            current_swatch_index: None,
            default_step_color: DEFAULT_STEP_COLOR.to_string(),
            sortable: SortableState::default(),
            picker: ColorPickerModal::new(false),
        }
    }

    /// Let the picker edit alpha
    pub fn set_picker_alpha(&mut self, allow_alpha: bool) {
        self.picker.allow_alpha = allow_alpha;
    }

    /// Step currently targeted by the picker
    pub fn current_swatch_index(&self) -> Option<usize> {
        self.current_swatch_index
    }

    fn set_custom_palette(&self, colors: Vec<String>) -> CustomPaletteAction {
        CustomPaletteAction::SetCustomPalette(ColorRange::custom(colors))
    }

    /// Picker chose `color` for the selected step
    pub fn on_color_update(
        &self,
        palette: &ColorRange,
        color: HexColor,
    ) -> Option<CustomPaletteAction> {
        let index = self.current_swatch_index?;
        tracing::debug!("Picker set step {} to {}", index, color);
        Some(self.set_custom_palette(
            palette.with_color_updated(index, &color.to_hex()),
        ))
    }

    /// Remove step `index`; the last remaining step is kept
    pub fn on_color_delete(&self, palette: &ColorRange, index: usize) -> CustomPaletteAction {
        tracing::debug!("Delete step {} of {}", index, palette.len());
        self.set_custom_palette(palette.with_color_deleted(index))
    }

    /// Append a copy of the last step
    pub fn on_color_add(&self, palette: &ColorRange) -> CustomPaletteAction {
        tracing::debug!("Add step {}", palette.len() + 1);
        self.set_custom_palette(palette.with_color_added(&self.default_step_color))
    }

    /// Open the picker for step `index`
    pub fn on_swatch_click(&mut self, index: usize) -> CustomPaletteAction {
        self.current_swatch_index = Some(index);
        CustomPaletteAction::ToggleSketcher
    }

    /// Close the picker
    pub fn on_swatch_close(&mut self) -> CustomPaletteAction {
        self.current_swatch_index = None;
        CustomPaletteAction::ToggleSketcher
    }

    /// Confirm: apply a copy of the palette, then leave the editor
    pub fn on_apply(&self, palette: &ColorRange) -> Vec<CustomPaletteAction> {
        let finalized = palette.finalized();
        tracing::info!("Applying custom palette with {} steps", finalized.len());
        vec![
            CustomPaletteAction::Apply(finalized),
            CustomPaletteAction::Cancel,
        ]
    }

    /// Drag and drop finished
    pub fn on_sort_end(&self, palette: &ColorRange, sort: SortEnd) -> CustomPaletteAction {
        tracing::debug!("Move step {} to {}", sort.old_index, sort.new_index);
        self.set_custom_palette(palette.with_color_moved(sort.old_index, sort.new_index))
    }

    /// Text typed into the hex field of step `index`
    pub fn input_color_hex(
        &self,
        palette: &ColorRange,
        index: usize,
        value: &str,
    ) -> CustomPaletteAction {
        self.set_custom_palette(palette.with_color_updated(index, value))
    }

    /// Render the editor. `show_sketcher` is the owner's picker flag.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        palette: &ColorRange,
        show_sketcher: bool,
        locale: &LocaleManager,
    ) -> Vec<CustomPaletteAction> {
        let mut actions = Vec::new();
        let mut row_events = Vec::new();

        // Ramp preview
        egui::Frame::NONE
            .inner_margin(egui::Margin::symmetric(8, 0))
            .show(ui, |ui| {
                color_strip(ui, &palette.colors, 10.0);
            });

        let current = self.current_swatch_index;
        let picker = &mut self.picker;
        let ctx = ui.ctx().clone();
        let drag_tooltip = locale.t("tooltip-drag-handle");
        let swatch_tooltip = locale.t("tooltip-edit-swatch");
        let invalid_tooltip = locale.t("tooltip-invalid-color");
        let delete_tooltip = locale.t("tooltip-delete-step");

        let sort = sortable_list(
            ui,
            &mut self.sortable,
            palette.len(),
            &drag_tooltip,
            |ui, index| {
                let color = &palette.colors[index];

                let response = swatch(ui, color, SWATCH_SIZE);
                let tooltip = if HexColor::parse(color).is_ok() {
                    &swatch_tooltip
                } else {
                    &invalid_tooltip
                };
                if response.on_hover_text(tooltip.as_str()).clicked() {
                    row_events.push(RowEvent::SwatchClick(index));
                }

                if show_sketcher && current == Some(index) {
                    if let Some(event) =
                        picker.show(&ctx, index, color, &palette.colors, locale)
                    {
                        row_events.push(RowEvent::Picker(event));
                    }
                }

                ui.add_space(12.0);
                let mut text = color.to_uppercase();
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .id_salt(("step_hex", index))
                        .desired_width(72.0)
                        .frame(false)
                        .font(egui::TextStyle::Small)
                        .text_color(ui.visuals().strong_text_color()),
                );
                if edit.changed() {
                    row_events.push(RowEvent::HexInput(index, text));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(12.0);
                    if trash_button(ui, &delete_tooltip).clicked() {
                        row_events.push(RowEvent::Delete(index));
                    }
                });
            },
        );

        if let Some(sort) = sort {
            actions.push(self.on_sort_end(palette, sort));
        }

        for event in row_events {
            match event {
                RowEvent::SwatchClick(index) => actions.push(self.on_swatch_click(index)),
                RowEvent::HexInput(index, value) => {
                    actions.push(self.input_color_hex(palette, index, &value))
                }
                RowEvent::Delete(index) => actions.push(self.on_color_delete(palette, index)),
                RowEvent::Picker(PickerEvent::Changed(color)) => {
                    actions.extend(self.on_color_update(palette, color))
                }
                RowEvent::Picker(PickerEvent::Close) => actions.push(self.on_swatch_close()),
            }
        }

        // Add Step Button
        if link_button(ui, &locale.t("btn-add-step")).clicked() {
            actions.push(self.on_color_add(palette));
        }
        divider_line(ui);

        // Cancel or Confirm Buttons
        ui.add_space(4.0);
        let button_row = egui::vec2(ui.available_width(), 20.0);
        let layout = egui::Layout::right_to_left(egui::Align::Center);
        ui.allocate_ui_with_layout(button_row, layout, |ui| {
            if link_button(ui, &locale.t("btn-confirm")).clicked() {
                actions.extend(self.on_apply(palette));
            }
            if ui
                .add(egui::Button::new(RichText::new(locale.t("btn-cancel"))).frame(false))
                .clicked()
            {
                actions.push(CustomPaletteAction::Cancel);
            }
        });

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueflow_core::{CUSTOM_CATEGORY, CUSTOM_PALETTE_NAME, EDIT_CATEGORY};

    fn palette(colors: &[&str]) -> ColorRange {
        ColorRange::custom(colors.iter().map(|c| c.to_string()).collect())
    }

    fn published(action: CustomPaletteAction) -> ColorRange {
        match action {
            CustomPaletteAction::SetCustomPalette(p) => p,
            other => panic!("expected SetCustomPalette, got {other:?}"),
        }
    }

    #[test]
    fn test_add_duplicates_last() {
        let panel = CustomPalettePanel::new();
        let p = published(panel.on_color_add(&palette(&["#000000", "#123456"])));
        assert_eq!(p.colors, vec!["#000000", "#123456", "#123456"]);
        assert_eq!(p.name, CUSTOM_PALETTE_NAME);
        assert_eq!(p.category, EDIT_CATEGORY);
    }

    #[test]
    fn test_delete_keeps_single_color() {
        let panel = CustomPalettePanel::new();
        let p = published(panel.on_color_delete(&palette(&["#ABCDEF"]), 0));
        assert_eq!(p.colors, vec!["#ABCDEF"]);

        let p = published(panel.on_color_delete(&palette(&["#000000", "#FFFFFF"]), 1));
        assert_eq!(p.colors, vec!["#000000"]);
    }

    #[test]
    fn test_swatch_click_and_picker_update() {
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#000000", "#FFFFFF"]);

        // No swatch selected yet
        assert_eq!(panel.on_color_update(&source, HexColor::rgb(1, 2, 3)), None);

        assert_eq!(panel.on_swatch_click(1), CustomPaletteAction::ToggleSketcher);
        assert_eq!(panel.current_swatch_index(), Some(1));

        let p = published(
            panel
                .on_color_update(&source, HexColor::rgb(0xaa, 0xbb, 0xcc))
                .unwrap(),
        );
        assert_eq!(p.colors, vec!["#000000", "#AABBCC"]);

        assert_eq!(panel.on_swatch_close(), CustomPaletteAction::ToggleSketcher);
        assert_eq!(panel.current_swatch_index(), None);
    }

    #[test]
    fn test_hex_input_uppercases_without_validation() {
        let panel = CustomPalettePanel::new();
        let source = palette(&["#000000"]);
        let p = published(panel.input_color_hex(&source, 0, "#ff00"));
        assert_eq!(p.colors, vec!["#FF00"]);
    }

    #[test]
    fn test_sort_end_moves_color() {
        let panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222", "#333333"]);
        let p = published(panel.on_sort_end(
            &source,
            SortEnd {
                old_index: 0,
                new_index: 2,
            },
        ));
        assert_eq!(p.colors, vec!["#222222", "#333333", "#111111"]);
    }

    #[test]
    fn test_apply_emits_finalized_then_cancel() {
        let panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222"]);
        let actions = panel.on_apply(&source);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            CustomPaletteAction::Apply(p) => {
                assert_eq!(p.category, CUSTOM_CATEGORY);
                assert_eq!(p.colors, source.colors);
                assert!(p.palette_type.is_none());
            }
            other => panic!("expected Apply, got {other:?}"),
        }
        assert_eq!(actions[1], CustomPaletteAction::Cancel);
    }

    #[test]
    fn test_headless_show_without_input_emits_nothing() {
        let ctx = egui::Context::default();
        let locale = LocaleManager::new("en");
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "not-a-color", "#333333"]);

        let mut actions = vec![CustomPaletteAction::Cancel];
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    actions = panel.show(ui, &source, false, &locale);
                });
            });
        }
        assert!(actions.is_empty());
    }

    #[test]
    fn test_headless_show_with_picker_open() {
        let ctx = egui::Context::default();
        let locale = LocaleManager::new("en");
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222"]);
        panel.on_swatch_click(0);

        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = panel.show(ui, &source, true, &locale);
            });
        });
        assert!(actions.is_empty());
        assert_eq!(panel.current_swatch_index(), Some(0));
    }

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    /// Run one frame with `events` and return what the panel emitted
    fn step(
        ctx: &egui::Context,
        panel: &mut CustomPalettePanel,
        source: &ColorRange,
        events: Vec<egui::Event>,
    ) -> Vec<CustomPaletteAction> {
        let locale = LocaleManager::new("en");
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let mut actions = Vec::new();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = panel.show(ui, source, false, &locale);
            });
        });
        actions
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Click at `pos`, returning the actions of the release frame
    fn click(
        ctx: &egui::Context,
        panel: &mut CustomPalettePanel,
        source: &ColorRange,
        pos: egui::Pos2,
    ) -> Vec<CustomPaletteAction> {
        step(ctx, panel, source, Vec::new());
        step(ctx, panel, source, vec![egui::Event::PointerMoved(pos)]);
        step(ctx, panel, source, vec![button(pos, true)]);
        step(ctx, panel, source, vec![button(pos, false)])
    }

    // Row 0 spans y 21..53 under a 10px ramp preview; its widgets are centered near y 37.
    const FIRST_ROW_Y: f32 = 37.0;

    #[test]
    fn test_clicking_swatch_opens_picker() {
        let ctx = egui::Context::default();
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222"]);

        let actions = click(&ctx, &mut panel, &source, egui::pos2(40.0, FIRST_ROW_Y));
        assert_eq!(actions, vec![CustomPaletteAction::ToggleSketcher]);
        assert_eq!(panel.current_swatch_index(), Some(0));
    }

    #[test]
    fn test_trash_removes_row() {
        let ctx = egui::Context::default();
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222"]);

        let actions = click(&ctx, &mut panel, &source, egui::pos2(770.0, FIRST_ROW_Y));
        assert_eq!(actions.len(), 1);
        assert_eq!(published(actions[0].clone()).colors, vec!["#222222"]);
    }

    #[test]
    fn test_typing_hex_publishes_uppercase() {
        let ctx = egui::Context::default();
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222"]);

        click(&ctx, &mut panel, &source, egui::pos2(110.0, FIRST_ROW_Y));
        let actions = step(
            &ctx,
            &mut panel,
            &source,
            vec![
                egui::Event::Key {
                    key: egui::Key::A,
                    physical_key: None,
                    pressed: true,
                    repeat: false,
                    modifiers: egui::Modifiers::COMMAND,
                },
                egui::Event::Text("#abcdef".to_string()),
            ],
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(
            published(actions[0].clone()).colors,
            vec!["#ABCDEF", "#222222"]
        );
    }

    #[test]
    fn test_add_step_and_confirm_buttons() {
        let ctx = egui::Context::default();
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#123456"]);

        // One row, then "+ Add Step" at y 56..74
        let actions = click(&ctx, &mut panel, &source, egui::pos2(30.0, 65.0));
        assert_eq!(actions.len(), 1);
        assert_eq!(
            published(actions[0].clone()).colors,
            vec!["#123456", "#123456"]
        );

        // Divider, then the Confirm/Cancel row at y 93..113 with Confirm rightmost
        let actions = click(&ctx, &mut panel, &source, egui::pos2(775.0, 103.0));
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[0],
            CustomPaletteAction::Apply(p) if p.category == CUSTOM_CATEGORY
        ));
        assert_eq!(actions[1], CustomPaletteAction::Cancel);
    }

    #[test]
    fn test_dragging_handle_reorders() {
        let ctx = egui::Context::default();
        let mut panel = CustomPalettePanel::new();
        let source = palette(&["#111111", "#222222", "#333333"]);
        let handle = egui::pos2(15.0, FIRST_ROW_Y);
        let below = egui::pos2(15.0, 400.0);

        step(&ctx, &mut panel, &source, Vec::new());
        step(&ctx, &mut panel, &source, vec![egui::Event::PointerMoved(handle)]);
        step(&ctx, &mut panel, &source, vec![button(handle, true)]);
        step(
            &ctx,
            &mut panel,
            &source,
            vec![egui::Event::PointerMoved(egui::pos2(15.0, 70.0))],
        );
        let moved = step(&ctx, &mut panel, &source, vec![egui::Event::PointerMoved(below)]);
        assert!(moved.is_empty());

        let actions = step(&ctx, &mut panel, &source, vec![button(below, false)]);
        assert_eq!(actions.len(), 1);
        assert_eq!(
            published(actions[0].clone()).colors,
            vec!["#222222", "#333333", "#111111"]
        );
    }
}
