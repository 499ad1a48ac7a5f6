//! Main application window: layer side panel plus a shaded preview map

use egui::{Color32, CornerRadius, Key, Modifiers, Pos2, Rect, Vec2};
use hueflow_core::ColorRange;
use hueflow_ui::{
    parse_color32, theme_picker, ColorRangeSelector, LocaleManager, UIAction, UserConfig,
};

const PREVIEW_CELLS: (usize, usize) = (48, 28);

pub struct HueFlowApp {
    config: UserConfig,
    locale: LocaleManager,
    selector: ColorRangeSelector,
}

impl HueFlowApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: UserConfig) -> Self {
        config.theme.apply(&cc.egui_ctx);

        let mut selector = match config.recent_palettes.first() {
            Some(last) => ColorRangeSelector::new(last.clone()),
            None => ColorRangeSelector::default(),
        };
        selector.set_default_step_color(&config.default_step_color);
        selector.set_picker_alpha(config.picker_alpha);

        Self {
            locale: LocaleManager::new(&config.language),
            config,
            selector,
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: UIAction) {
        match action {
            UIAction::Undo => {
                self.selector.undo();
            }
            UIAction::Redo => {
                self.selector.redo();
            }
            UIAction::EditCustomPalette => self.selector.begin_custom_edit(),
            UIAction::SetLanguage(lang) => {
                self.locale.set_language(&lang);
                self.config.set_language(self.locale.current_language());
            }
            UIAction::SetTheme(theme) => {
                let mut theme_config = self.config.theme.clone();
                theme_config.theme = theme;
                theme_config.apply(ctx);
                self.config.set_theme(theme_config);
            }
        }
    }

    fn shortcuts(&self, ctx: &egui::Context, actions: &mut Vec<UIAction>) {
        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z) {
                actions.push(UIAction::Redo);
            } else if i.consume_key(Modifiers::COMMAND, Key::Z) {
                actions.push(UIAction::Undo);
            }
        });
    }

    fn menu_bar(&self, ctx: &egui::Context, actions: &mut Vec<UIAction>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button(self.locale.t("menu-edit"), |ui| {
                    let undo = egui::Button::new(self.locale.t("btn-undo"));
                    if ui.add_enabled(self.selector.can_undo(), undo).clicked() {
                        actions.push(UIAction::Undo);
                        ui.close();
                    }
                    let redo = egui::Button::new(self.locale.t("btn-redo"));
                    if ui.add_enabled(self.selector.can_redo(), redo).clicked() {
                        actions.push(UIAction::Redo);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(self.locale.t("btn-custom-palette")).clicked() {
                        actions.push(UIAction::EditCustomPalette);
                        ui.close();
                    }
                });

                ui.menu_button(self.locale.t("menu-view"), |ui| {
                    ui.label(self.locale.t("menu-theme"));
                    let mut theme = self.config.theme.theme;
                    if theme_picker(ui, &mut theme) {
                        actions.push(UIAction::SetTheme(theme));
                    }
                    ui.separator();
                    ui.label(self.locale.t("menu-language"));
                    for lang in LocaleManager::available_languages() {
                        let selected = lang == self.locale.current_language();
                        if ui.selectable_label(selected, lang.to_uppercase()).clicked() {
                            actions.push(UIAction::SetLanguage(lang));
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    fn preview(ui: &mut egui::Ui, range: &ColorRange) {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);
        let colors: Vec<Color32> = range
            .colors
            .iter()
            .map(|c| parse_color32(c).unwrap_or(Color32::TRANSPARENT))
            .collect();
        if colors.is_empty() {
            return;
        }

        let (cols, rows) = PREVIEW_CELLS;
        let cell = Vec2::new(rect.width() / cols as f32, rect.height() / rows as f32);
        for row in 0..rows {
            for col in 0..cols {
                let value = preview_value(col, row);
                let bin = ((value * colors.len() as f32) as usize).min(colors.len() - 1);
                let min = Pos2::new(
                    rect.min.x + col as f32 * cell.x,
                    rect.min.y + row as f32 * cell.y,
                );
                painter.rect_filled(
                    Rect::from_min_size(min, cell).shrink(0.5),
                    CornerRadius::ZERO,
                    colors[bin],
                );
            }
        }
    }
}

/// Smooth pseudo data in 0.0..1.0 so every bin of the ramp shows up
fn preview_value(col: usize, row: usize) -> f32 {
    let x = col as f32 * 0.21;
    let y = row as f32 * 0.33;
    let v = (x.sin() * y.cos() + (x * 0.5 + y * 0.7).sin()) * 0.25 + 0.5;
    v.clamp(0.0, 0.999)
}

impl eframe::App for HueFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        self.shortcuts(ctx, &mut actions);
        self.menu_bar(ctx, &mut actions);

        egui::SidePanel::left("layer_panel")
            .exact_width(320.0)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let recent = self.config.recent_palettes.clone();
                    if let Some(confirmed) = self.selector.show(ui, &self.locale, &recent) {
                        self.config.add_recent_palette(&confirmed);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::preview(ui, self.selector.applied());
        });

        for action in actions {
            self.handle_action(ctx, action);
        }
    }
}
