//! GameView: maps the game state into a frame.
//!
//! Pure, no I/O. The well is drawn centered in the viewport with a box
//! border; locked cells and the active piece are colored blocks in their
//! kind's color, matching the fixed color table.

use blockfall_core::GameState;
use blockfall_types::{Rgb, BOARD_COLUMNS, BOARD_ROWS};

use crate::frame::{Frame, Glyph};

/// Terminal dimensions available to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(25, 25, 35);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const GRID_DOT_FG: Rgb = Rgb::new(85, 85, 95);

pub struct GameView {
    /// Terminal columns per board cell. Two columns per cell roughly squares
    /// up the typical glyph aspect ratio.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current state into a fresh frame.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let well_w = (BOARD_COLUMNS as u16) * self.cell_w;
        let well_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut frame, origin_x, origin_y, frame_w, frame_h);

        // Locked cells, with a faint dot grid for the empty ones.
        for y in 0..BOARD_ROWS as i8 {
            for x in 0..BOARD_COLUMNS as i8 {
                match state.board().get(x, y).flatten() {
                    Some(kind) => self.draw_cell(
                        &mut frame,
                        origin_x,
                        origin_y,
                        x as u16,
                        y as u16,
                        '█',
                        kind.color(),
                    ),
                    None => self.draw_cell(
                        &mut frame,
                        origin_x,
                        origin_y,
                        x as u16,
                        y as u16,
                        '·',
                        GRID_DOT_FG,
                    ),
                }
            }
        }

        // Active piece on top of the stack.
        if let Some(piece) = state.active() {
            let color = piece.kind.color();
            for (x, y) in piece.cells() {
                if x >= 0 && x < BOARD_COLUMNS as i8 && y >= 0 && y < BOARD_ROWS as i8 {
                    self.draw_cell(
                        &mut frame,
                        origin_x,
                        origin_y,
                        x as u16,
                        y as u16,
                        '█',
                        color,
                    );
                }
            }
        }

        if !state.is_running() {
            self.draw_overlay(&mut frame, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let line = |ch| Glyph {
            ch,
            fg: BORDER_FG,
            bg: Rgb::new(0, 0, 0),
        };

        frame.put(x, y, line('┌'));
        frame.put(x + w - 1, y, line('┐'));
        frame.put(x, y + h - 1, line('└'));
        frame.put(x + w - 1, y + h - 1, line('┘'));
        for dx in 1..w - 1 {
            frame.put(x + dx, y, line('─'));
            frame.put(x + dx, y + h - 1, line('─'));
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, line('│'));
            frame.put(x + w - 1, y + dy, line('│'));
        }
    }

    fn draw_cell(
        &self,
        frame: &mut Frame,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        fg: Rgb,
    ) {
        let px = origin_x + 1 + cell_x * self.cell_w;
        let py = origin_y + 1 + cell_y * self.cell_h;
        frame.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            Glyph {
                ch,
                fg,
                bg: WELL_BG,
            },
        );
    }

    fn draw_overlay(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        let ty = y.saturating_add(h / 2);
        frame.put_str(tx, ty, text, Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    fn viewport() -> Viewport {
        // Comfortably larger than the 34x23 framed well at 2x1 cells.
        Viewport::new(60, 30)
    }

    fn glyph_at_cell(frame: &Frame, view: &GameView, x: u16, y: u16) -> Glyph {
        // Well origin for a 60x30 viewport: centered 34x23 frame.
        let origin_x = (60 - (BOARD_COLUMNS as u16 * view.cell_w + 2)) / 2;
        let origin_y = (30 - (BOARD_ROWS as u16 * view.cell_h + 2)) / 2;
        frame
            .get(origin_x + 1 + x * view.cell_w, origin_y + 1 + y * view.cell_h)
            .unwrap()
    }

    #[test]
    fn locked_cells_render_in_their_kind_color() {
        let mut state = GameState::new(1);
        state.board_mut().set(0, 20, Some(PieceKind::Z));

        let view = GameView::default();
        let frame = view.render(&state, viewport());

        let glyph = glyph_at_cell(&frame, &view, 0, 20);
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.fg, PieceKind::Z.color());
    }

    #[test]
    fn active_piece_renders_at_its_position() {
        let mut state = GameState::new(1);
        assert!(state.spawn_kind(PieceKind::O));
        let (x, y) = state.active().unwrap().cells()[0];

        let view = GameView::default();
        let frame = view.render(&state, viewport());

        let glyph = glyph_at_cell(&frame, &view, x as u16, y as u16);
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.fg, PieceKind::O.color());
    }

    #[test]
    fn game_over_overlay_appears_when_not_running() {
        let mut state = GameState::new(1);
        for x in 0..BOARD_COLUMNS as i8 {
            state.board_mut().set(x, 0, Some(PieceKind::I));
        }
        assert!(!state.spawn());

        let frame = GameView::default().render(&state, viewport());
        let found = (0..frame.height()).any(|y| {
            let row: String = (0..frame.width())
                .filter_map(|x| frame.get(x, y).map(|g| g.ch))
                .collect();
            row.contains("GAME OVER")
        });
        assert!(found, "overlay text missing from every row");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::new(1);
        let frame = GameView::default().render(&state, Viewport::new(5, 3));
        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 3);
    }
}
