use common::games::tictactoe::{BOARD_SIZE, Mark, Position, TicTacToeGameState, WinningLine};
use egui::{Color32, Stroke};

use crate::config::{MAX_CELL_SIZE, MIN_CELL_SIZE};

#[derive(Default)]
pub struct BoardUi {
    last_hover: Option<Position>,
}

impl BoardUi {
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 4.0;
    const WIN_LINE_WIDTH: f32 = 6.0;

    /// Draws the board and returns the cell the human clicked, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        game: &TicTacToeGameState,
        cell_size: f32,
        highlight_hover: bool,
    ) -> Option<Position> {
        let cell_size = cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Color32::from_rgb(240, 240, 240));

        let grid_stroke = Stroke::new(Self::LINE_WIDTH, Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                grid_stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                grid_stroke,
            );
        }

        let board = game.board();
        for (row, cells) in board.rows().iter().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                let cell_rect = Self::cell_rect(rect, Position::new(row, col), cell_size);
                match mark {
                    Mark::X => Self::draw_x(painter, cell_rect),
                    Mark::O => Self::draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        if let Some(winning) = game.winning_line() {
            Self::draw_winning_line(painter, rect, cell_size, winning);
        }

        if !game.is_human_turn() {
            self.last_hover = None;
            return None;
        }

        self.last_hover = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, pos, cell_size))
            .filter(|&pos| board.is_empty(pos));

        if highlight_hover {
            if let Some(pos) = self.last_hover {
                painter.rect_filled(
                    Self::cell_rect(rect, pos, cell_size),
                    0.0,
                    Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(rect, pos, cell_size));
        }

        None
    }

    fn cell_at(rect: egui::Rect, pos: egui::Pos2, cell_size: f32) -> Option<Position> {
        Position::from_point(pos.x - rect.left(), pos.y - rect.top(), cell_size)
    }

    fn cell_rect(rect: egui::Rect, pos: Position, cell_size: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + pos.col as f32 * cell_size,
                rect.top() + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = Stroke::new(Self::MARK_WIDTH, Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() / 2.0 - rect.width() * 0.2;
        let stroke = Stroke::new(Self::MARK_WIDTH, Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn draw_winning_line(
        painter: &egui::Painter,
        rect: egui::Rect,
        cell_size: f32,
        winning: WinningLine,
    ) {
        let start = Self::cell_rect(rect, winning.line.start(), cell_size).center();
        let end = Self::cell_rect(rect, winning.line.end(), cell_size).center();

        painter.line_segment(
            [start, end],
            Stroke::new(Self::WIN_LINE_WIDTH, Color32::from_rgb(40, 160, 40)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_hover() {
        let board_ui = BoardUi::default();
        assert_eq!(board_ui.last_hover, None);
    }

    #[test]
    fn test_cell_at_is_relative_to_board_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(40.0, 20.0), egui::vec2(300.0, 300.0));
        assert_eq!(
            BoardUi::cell_at(rect, egui::pos2(45.0, 25.0), 100.0),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            BoardUi::cell_at(rect, egui::pos2(339.0, 219.0), 100.0),
            Some(Position::new(1, 2))
        );
        assert_eq!(BoardUi::cell_at(rect, egui::pos2(10.0, 25.0), 100.0), None);
    }
}
