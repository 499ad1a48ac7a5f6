use crate::theme::colors;
use egui::{
    Color32, CornerRadius, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, WidgetInfo, WidgetType,
};

pub fn render_header(ui: &mut Ui, title: &str) {
    let desired_size = Vec2::new(ui.available_width(), 24.0);
    let (rect, _response) = ui.allocate_at_least(desired_size, Sense::hover());

    let painter = ui.painter();
    let stripe_rect = Rect::from_min_size(rect.min, Vec2::new(2.0, rect.height()));
    painter.rect_filled(stripe_rect, CornerRadius::ZERO, colors::ACTIVE_COLOR);

    let text_pos = Pos2::new(rect.min.x + 8.0, rect.center().y);
    painter.text(
        text_pos,
        egui::Align2::LEFT_CENTER,
        title.to_uppercase(),
        egui::FontId::proportional(12.0),
        ui.visuals().strong_text_color(),
    );
}

/// Two columns of three dots, the usual "grab here" glyph
pub fn paint_vert_dots(ui: &Ui, rect: Rect, color: Color32) {
    let painter = ui.painter();
    let radius = 1.5;
    let dx = 3.0;
    let dy = 5.0;
    let center = rect.center();
    for col in [-1.0, 1.0] {
        for row in [-1.0, 0.0, 1.0] {
            painter.circle_filled(
                Pos2::new(center.x + col * dx, center.y + row * dy),
                radius,
                color,
            );
        }
    }
}

/// Drag handle for a sortable row. The glyph is only drawn while `visible`.
pub fn drag_handle(ui: &mut Ui, visible: bool, tooltip: &str) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::new(14.0, 20.0), Sense::drag());

    response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, ui.is_enabled(), tooltip));

    if visible || response.hovered() || response.dragged() {
        let color = if response.hovered() || response.dragged() {
            colors::TEXT_COLOR_HL
        } else {
            colors::SUBTEXT_COLOR_ACTIVE.linear_multiply(0.6)
        };
        paint_vert_dots(ui, rect, color);
    }

    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
    response.on_hover_text(tooltip)
}

/// Trash-can button, right side of a row
pub fn trash_button(ui: &mut Ui, tooltip: &str) -> Response {
    let response = ui.add(egui::Button::new("🗑").frame(false).small());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.on_hover_text(tooltip)
}

/// Frameless text button in the accent color
pub fn link_button(ui: &mut Ui, text: &str) -> Response {
    let text = egui::RichText::new(text).color(colors::ACTIVE_COLOR);
    ui.add(egui::Button::new(text).frame(false))
}

/// Thin full-width rule in the label color
pub fn divider_line(ui: &mut Ui) {
    let width = ui.available_width() - 16.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 9.0), Sense::hover());
    let y = rect.max.y - 0.5;
    ui.painter().line_segment(
        [
            Pos2::new(rect.min.x + 8.0, y),
            Pos2::new(rect.min.x + 8.0 + width.max(0.0), y),
        ],
        Stroke::new(1.0, colors::LABEL_COLOR),
    );
}
