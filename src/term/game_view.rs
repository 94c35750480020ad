//! GameView: maps the session onto a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It reads the session
//! through its snapshot plus a few menu-cursor accessors; it never mutates
//! game state.

use crate::core::snapshot::GameSnapshot;
use crate::session::{Session, GAME_OVER_ITEMS, MAIN_MENU_ITEMS, SETTINGS_ITEMS};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, SessionStatus, SPEED_NAMES};

/// Terminal viewport dimensions.
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

const TITLE: &str = "S N E K B Y T E";

fn title_style() -> CellStyle {
    CellStyle::fg(Rgb::new(100, 240, 100)).bold()
}

fn item_style(selected: bool) -> CellStyle {
    if selected {
        CellStyle::fg(Rgb::new(100, 240, 100)).bold()
    } else {
        CellStyle::fg(Rgb::new(200, 200, 200))
    }
}

fn hint_style() -> CellStyle {
    CellStyle::fg(Rgb::new(120, 120, 130))
}

/// Renders the session into a framebuffer, one call per frame.
pub struct GameView {
    /// Board cell width in terminal columns (2x1 compensates for the
    /// typical terminal glyph aspect ratio).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    /// Reused snapshot buffer.
    snapshot: GameSnapshot,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            snapshot: GameSnapshot::default(),
        }
    }
}

impl GameView {
    /// Render the current session state into a framebuffer.
    pub fn render(&mut self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        session.snapshot_into(&mut self.snapshot);

        match self.snapshot.status {
            SessionStatus::MainMenu => self.draw_main_menu(&mut fb, session, viewport),
            SessionStatus::Settings => self.draw_settings(&mut fb, session, viewport),
            SessionStatus::Playing => self.draw_playfield(&mut fb, session, viewport, false),
            SessionStatus::GameOver => self.draw_playfield(&mut fb, session, viewport, true),
            SessionStatus::Quitting => {}
        }

        fb
    }

    fn draw_main_menu(&self, fb: &mut FrameBuffer, session: &Session, viewport: Viewport) {
        let w = viewport.width;
        let top = viewport.height / 4;

        fb.put_str_centered(0, w, top, TITLE, title_style());
        fb.put_str_centered(0, w, top + 1, "a terminal snake", hint_style());

        for (i, item) in MAIN_MENU_ITEMS.iter().enumerate() {
            let selected = i == session.main_cursor();
            let label = if selected {
                format!("> {item} <")
            } else {
                item.to_string()
            };
            fb.put_str_centered(0, w, top + 4 + 2 * i as u16, &label, item_style(selected));
        }

        fb.put_str_centered(
            0,
            w,
            viewport.height.saturating_sub(2),
            "arrows move - enter selects - q quits",
            hint_style(),
        );
    }

    fn draw_settings(&self, fb: &mut FrameBuffer, session: &Session, viewport: Viewport) {
        let w = viewport.width;
        let top = viewport.height / 4;
        let settings = session.settings();

        fb.put_str_centered(0, w, top, "SETTINGS", title_style());

        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let selected = i == session.settings_cursor();
            let label = match i {
                0 => format!(
                    "Speed: < {} >",
                    speed_label(settings.speed_index, session.config().speed_levels_ms.len())
                ),
                1 => format!(
                    "WonQ Mode: < {} >",
                    if settings.wonq_mode { "ON" } else { "OFF" }
                ),
                _ => item.to_string(),
            };
            let label = if selected { format!("> {label}") } else { label };
            fb.put_str_centered(0, w, top + 3 + 2 * i as u16, &label, item_style(selected));
        }

        fb.put_str_centered(
            0,
            w,
            viewport.height.saturating_sub(2),
            "left/right change speed - w toggles WonQ - esc goes back",
            hint_style(),
        );
    }

    fn draw_playfield(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        game_over: bool,
    ) {
        let snap = &self.snapshot;
        let config = session.config();

        let board_px_w = (config.width as u16) * self.cell_w;
        let board_px_h = (config.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::fg(Rgb::new(180, 180, 180));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let obstacle = CellStyle::fg(Rgb::new(150, 100, 40));
        for &cell in &snap.obstacles {
            self.draw_cell(fb, config.width, config.height, start_x, start_y, cell, '█', obstacle);
        }

        if let Some(food) = snap.food {
            let style = CellStyle::fg(Rgb::new(230, 80, 80)).bold();
            self.draw_cell(fb, config.width, config.height, start_x, start_y, food, '●', style);
        }

        let body = CellStyle::fg(Rgb::new(70, 190, 70));
        let head = CellStyle::fg(Rgb::new(140, 255, 140)).bold();
        for (i, &cell) in snap.snake.iter().enumerate() {
            let style = if i == 0 { head } else { body };
            self.draw_cell(fb, config.width, config.height, start_x, start_y, cell, '█', style);
        }

        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);

        if game_over {
            self.draw_game_over_overlay(fb, session, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let snap = &self.snapshot;
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            speed_label(snap.speed_index, session.config().speed_levels_ms.len()),
            value,
        );
        y = y.saturating_add(2);

        if snap.wonq_mode {
            fb.put_str(panel_x, y, "POOP-O-METER", label);
            y = y.saturating_add(1);
            fb.put_str(
                panel_x,
                y,
                &format!(
                    "{}/{}",
                    session.accretion_counter(),
                    session.config().wonq_threshold
                ),
                value,
            );
        }
    }

    fn draw_game_over_overlay(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(3);

        fb.put_str_centered(start_x, frame_w, mid_y, " GAME OVER ", title_style());
        fb.put_str_centered(
            start_x,
            frame_w,
            mid_y + 1,
            &format!(" Final Score: {} ", self.snapshot.score),
            CellStyle::default(),
        );

        for (i, item) in GAME_OVER_ITEMS.iter().enumerate() {
            let selected = i == session.game_over_cursor();
            let label = if selected {
                format!("> {item} <")
            } else {
                format!("  {item}  ")
            };
            fb.put_str_centered(
                start_x,
                frame_w,
                mid_y + 3 + i as u16,
                &label,
                item_style(selected),
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        grid_w: i16,
        grid_h: i16,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        // A head that just crossed the boundary is off-grid: skip it.
        if cell.x < 0 || cell.x >= grid_w || cell.y < 0 || cell.y >= grid_h {
            return;
        }
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = start_y + 1 + (cell.y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn speed_label(index: usize, levels: usize) -> &'static str {
    if levels == SPEED_NAMES.len() && index < SPEED_NAMES.len() {
        SPEED_NAMES[index]
    } else {
        "Custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::types::InputIntent;

    fn fb_contains(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap_or_default().ch)
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_main_menu_shows_items_and_cursor() {
        let session = Session::new(GameConfig::default(), 1);
        let mut view = GameView::default();
        let fb = view.render(&session, Viewport::new(80, 30));

        assert!(fb_contains(&fb, "> Play <"));
        assert!(fb_contains(&fb, "Settings"));
        assert!(fb_contains(&fb, "Quit"));
    }

    #[test]
    fn test_settings_shows_speed_and_wonq() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.handle_intent(InputIntent::MenuDown);
        session.handle_intent(InputIntent::MenuConfirm);

        let mut view = GameView::default();
        let fb = view.render(&session, Viewport::new(80, 30));
        assert!(fb_contains(&fb, "SETTINGS"));
        assert!(fb_contains(&fb, "Speed: < Normal >"));
        assert!(fb_contains(&fb, "WonQ Mode: < OFF >"));
    }

    #[test]
    fn test_playfield_draws_snake_head_at_center() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.handle_intent(InputIntent::MenuConfirm); // Play

        let mut view = GameView::default();
        let fb = view.render(&session, Viewport::new(80, 30));

        // Default grid is 32x22 with 2x1 cells: frame is 66x24, so the
        // field starts at (7, 3) and the head cell (16, 11) lands at (40, 15).
        assert_eq!(fb.get(40, 15).unwrap().ch, '█');
        assert!(fb_contains(&fb, "SCORE"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.handle_intent(InputIntent::MenuConfirm); // Play
        for _ in 0..session.config().width {
            session.tick();
        }
        assert_eq!(session.status(), SessionStatus::GameOver);

        let mut view = GameView::default();
        let fb = view.render(&session, Viewport::new(80, 30));
        assert!(fb_contains(&fb, "GAME OVER"));
        assert!(fb_contains(&fb, "> Retry <"));
    }
}
