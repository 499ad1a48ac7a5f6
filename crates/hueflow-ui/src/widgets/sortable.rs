//! Drag-handle reordering for vertical lists
//!
//! Rows are dragged by their handle only. Dropping moves the dragged row to
//! the row under the pointer (remove-then-insert), reported as a [`SortEnd`].

use crate::widgets::custom::drag_handle;
use egui::{CornerRadius, Pos2, Rangef, Rect, Shape, Stroke, Ui};

/// Tracks the row being dragged across frames
#[derive(Debug, Default, Clone)]
pub struct SortableState {
    dragging: Option<usize>,
    drop_target: Option<usize>,
    hovered: Option<usize>,
}

impl SortableState {
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging == Some(index)
    }

    pub fn start_drag(&mut self, index: usize) {
        self.dragging = Some(index);
        self.drop_target = Some(index);
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
        self.drop_target = None;
    }

    /// Finish the drag, returning the move if the row changed position
    pub fn end_drag(&mut self) -> Option<SortEnd> {
        let old_index = self.dragging.take()?;
        let new_index = self.drop_target.take()?;
        (old_index != new_index).then_some(SortEnd {
            old_index,
            new_index,
        })
    }
}

/// A completed reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEnd {
    pub old_index: usize,
    pub new_index: usize,
}

/// Index of the row a drop at height `y` lands on.
///
/// Above the first row is 0, below the last row is the last index.
pub fn drop_index(rows: &[Rangef], y: f32) -> usize {
    rows.iter()
        .position(|span| y < span.max)
        .unwrap_or_else(|| rows.len().saturating_sub(1))
}

/// Draw `count` sortable rows. `add_row` fills everything right of the handle.
pub fn sortable_list(
    ui: &mut Ui,
    state: &mut SortableState,
    count: usize,
    handle_tooltip: &str,
    mut add_row: impl FnMut(&mut Ui, usize),
) -> Option<SortEnd> {
    if count == 0 {
        state.cancel_drag();
        return None;
    }
    if state.dragging.is_some_and(|i| i >= count) {
        state.cancel_drag();
    }

    let hover_fill = ui.visuals().widgets.hovered.weak_bg_fill;
    let mut rows: Vec<Rect> = Vec::with_capacity(count);

    for index in 0..count {
        let background = ui.painter().add(Shape::Noop);
        let handle_visible = state.hovered == Some(index) || state.is_dragging(index);

        let row = ui.push_id(("sortable_row", index), |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(0, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let handle = drag_handle(ui, handle_visible, handle_tooltip);
                        if handle.drag_started() {
                            tracing::debug!("Start dragging row {}", index);
                            state.start_drag(index);
                        }
                        add_row(ui, index);
                    });
                })
                .response
                .rect
        });

        let rect = Rect::from_x_y_ranges(ui.max_rect().x_range(), row.inner.y_range());
        if ui.rect_contains_pointer(rect) || state.is_dragging(index) {
            ui.painter().set(
                background,
                Shape::rect_filled(rect, CornerRadius::ZERO, hover_fill),
            );
        }
        rows.push(rect);
    }

    let pointer = ui.ctx().pointer_hover_pos();
    state.hovered = pointer.and_then(|p| rows.iter().position(|r| r.contains(p)));

    let from = state.dragging?;
    if let Some(pointer) = ui.ctx().pointer_interact_pos() {
        let spans: Vec<Rangef> = rows.iter().map(|r| r.y_range()).collect();
        let target = drop_index(&spans, pointer.y);
        state.drop_target = Some(target);

        let target_rect = rows[target];
        let y = if target > from {
            target_rect.bottom()
        } else {
            target_rect.top()
        };
        ui.painter().line_segment(
            [
                Pos2::new(target_rect.left() + 4.0, y),
                Pos2::new(target_rect.right() - 4.0, y),
            ],
            Stroke::new(2.0, ui.visuals().selection.stroke.color),
        );
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    let released = ui.input(|i| i.pointer.any_released() || !i.pointer.any_down());
    if released {
        let sort_end = state.end_drag();
        if let Some(sort) = sort_end {
            tracing::debug!("Row {} dropped at {}", sort.old_index, sort.new_index);
        }
        return sort_end;
    }

    ui.ctx().request_repaint();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Rangef> {
        vec![
            Rangef::new(0.0, 30.0),
            Rangef::new(30.0, 60.0),
            Rangef::new(60.0, 90.0),
        ]
    }

    #[test]
    fn test_drop_index() {
        assert_eq!(drop_index(&rows(), -10.0), 0);
        assert_eq!(drop_index(&rows(), 15.0), 0);
        assert_eq!(drop_index(&rows(), 45.0), 1);
        assert_eq!(drop_index(&rows(), 89.0), 2);
        assert_eq!(drop_index(&rows(), 500.0), 2);
        assert_eq!(drop_index(&[], 5.0), 0);
    }

    #[test]
    fn test_end_drag_reports_moves_only() {
        let mut state = SortableState::default();
        state.start_drag(1);
        assert_eq!(state.end_drag(), None);
        assert!(!state.is_dragging(1));

        state.start_drag(0);
        state.drop_target = Some(2);
        assert_eq!(
            state.end_drag(),
            Some(SortEnd {
                old_index: 0,
                new_index: 2
            })
        );
        assert!(!state.is_dragging(0));
    }

    fn press(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Three 20px rows in a bare central panel; row `i` spans y 8 + 35 * i .. 40 + 35 * i
    fn frame(
        ctx: &egui::Context,
        state: &mut SortableState,
        events: Vec<egui::Event>,
    ) -> Option<SortEnd> {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 400.0))),
            events,
            ..Default::default()
        };
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = sortable_list(ui, state, 3, "drag", |ui, _| {
                    ui.allocate_exact_size(egui::vec2(200.0, 20.0), egui::Sense::hover());
                });
            });
        });
        result
    }

    fn drag(from: Pos2, to: Pos2) -> Option<SortEnd> {
        let ctx = egui::Context::default();
        let mut state = SortableState::default();
        frame(&ctx, &mut state, Vec::new());
        frame(&ctx, &mut state, vec![egui::Event::PointerMoved(from)]);
        frame(&ctx, &mut state, vec![press(from, true)]);
        let nudge = from + egui::vec2(0.0, 10.0);
        frame(&ctx, &mut state, vec![egui::Event::PointerMoved(nudge)]);
        assert!(state.is_dragging(0));
        assert_eq!(frame(&ctx, &mut state, vec![egui::Event::PointerMoved(to)]), None);
        let sort = frame(&ctx, &mut state, vec![press(to, false)]);
        assert!(!state.is_dragging(0));
        sort
    }

    #[test]
    fn test_drag_handle_to_last_row() {
        let handle = Pos2::new(15.0, 24.0);
        assert_eq!(
            drag(handle, Pos2::new(15.0, 95.0)),
            Some(SortEnd {
                old_index: 0,
                new_index: 2
            })
        );
    }

    #[test]
    fn test_drag_below_list_lands_on_last_row() {
        let handle = Pos2::new(15.0, 24.0);
        let sort = drag(handle, Pos2::new(15.0, 300.0));
        assert_eq!(sort.map(|s| s.new_index), Some(2));
    }

    #[test]
    fn test_drop_on_own_row_is_not_a_move() {
        let handle = Pos2::new(15.0, 24.0);
        assert_eq!(drag(handle, Pos2::new(15.0, 30.0)), None);
    }
}
