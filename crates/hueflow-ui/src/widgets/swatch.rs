//! Color swatches and ramp previews

use crate::theme::colors;
use egui::{Color32, CornerRadius, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use hueflow_core::HexColor;

/// Swatch size used by the palette rows
pub const SWATCH_SIZE: Vec2 = Vec2::new(32.0, 18.0);

pub fn to_color32(color: HexColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> HexColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    HexColor::rgba(r, g, b, a)
}

/// Parse stored swatch text for drawing
pub fn parse_color32(text: &str) -> Option<Color32> {
    HexColor::parse(text).ok().map(to_color32)
}

fn paint_checkerboard(ui: &Ui, rect: Rect) {
    let cell = rect.height() / 2.0;
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::ZERO, colors::CHECKER_LIGHT);
    let cols = (rect.width() / cell).ceil() as usize;
    for col in 0..cols {
        for row in 0..2 {
            if (col + row) % 2 == 0 {
                continue;
            }
            let min = Pos2::new(rect.min.x + col as f32 * cell, rect.min.y + row as f32 * cell);
            let cell_rect = Rect::from_min_size(min, Vec2::splat(cell)).intersect(rect);
            painter.rect_filled(cell_rect, CornerRadius::ZERO, colors::CHECKER_DARK);
        }
    }
}

/// Fill `rect` with the color in `text`; unparsable text gets a crossed-out cell
pub fn paint_color_cell(ui: &Ui, rect: Rect, text: &str) {
    match parse_color32(text) {
        Some(color) => {
            if !color.is_opaque() {
                paint_checkerboard(ui, rect);
            }
            ui.painter().rect_filled(rect, CornerRadius::ZERO, color);
        }
        None => {
            let painter = ui.painter();
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, colors::ERROR_COLOR),
                egui::StrokeKind::Inside,
            );
            painter.line_segment(
                [rect.left_bottom(), rect.right_top()],
                Stroke::new(1.0, colors::ERROR_COLOR),
            );
        }
    }
}

/// A clickable swatch for one palette step
pub fn swatch(ui: &mut Ui, text: &str, size: Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        paint_color_cell(ui, rect, text);
        if response.hovered() || response.has_focus() {
            ui.painter().rect_stroke(
                rect.expand(1.0),
                CornerRadius::ZERO,
                Stroke::new(1.0, colors::TEXT_COLOR_HL),
                egui::StrokeKind::Outside,
            );
        }
    }

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::ColorButton, ui.is_enabled(), text)
    });

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// The whole ramp as adjacent equal-width blocks
pub fn color_strip(ui: &mut Ui, palette_colors: &[String], height: f32) -> Response {
    let desired_size = Vec2::new(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) && !palette_colors.is_empty() {
        let step = rect.width() / palette_colors.len() as f32;
        for (i, text) in palette_colors.iter().enumerate() {
            let cell = Rect::from_min_size(
                Pos2::new(rect.min.x + i as f32 * step, rect.min.y),
                Vec2::new(step, rect.height()),
            );
            paint_color_cell(ui, cell, text);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_conversion() {
        let color = HexColor::rgb(0x12, 0x34, 0x56);
        assert_eq!(to_color32(color), Color32::from_rgb(0x12, 0x34, 0x56));
        assert_eq!(from_color32(to_color32(color)), color);
        assert_eq!(parse_color32("#nope"), None);
    }
}
