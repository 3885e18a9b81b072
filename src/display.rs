//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable `Snapshot` of
//! the simulation.  No game logic is performed; this module only maps world
//! rectangles onto terminal cells and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::entities::{GameStatus, Rect, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_BUTTON: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world coordinates onto the terminal cells inside the border.
///
/// Layout: row 0 HUD, row 1 top border, rows 2..rows-2 play area, row
/// rows-2 bottom border, last row controls hint.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_w: u32,
    world_h: u32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, screen: Rect) -> Self {
        Self {
            cols,
            rows,
            world_w: screen.w.max(1),
            world_h: screen.h.max(1),
        }
    }

    pub fn current(screen: Rect) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::new(cols, rows, screen))
    }

    fn play_cols(&self) -> u32 {
        self.cols.saturating_sub(2).max(1) as u32
    }

    fn play_rows(&self) -> u32 {
        self.rows.saturating_sub(4).max(1) as u32
    }

    fn col_of(&self, x: i32) -> i64 {
        1 + x as i64 * self.play_cols() as i64 / self.world_w as i64
    }

    fn row_of(&self, y: i32) -> i64 {
        2 + y as i64 * self.play_rows() as i64 / self.world_h as i64
    }

    /// Cell span covered by a world rectangle, clipped to the play area.
    /// Always at least one cell wide and tall; `None` when fully off-screen.
    fn cells(&self, r: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col_of(r.left());
        let c1 = self.col_of(r.right()).max(c0 + 1);
        let r0 = self.row_of(r.top());
        let r1 = self.row_of(r.bottom()).max(r0 + 1);

        let min_c = 1;
        let max_c = 1 + self.play_cols() as i64;
        let min_r = 2;
        let max_r = 2 + self.play_rows() as i64;

        let (c0, c1) = (c0.max(min_c), c1.min(max_c));
        let (r0, r1) = (r0.max(min_r), r1.min(max_r));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, c1 as u16, r0 as u16, r1 as u16))
    }

    /// World point at the centre of a terminal cell, for mouse clicks.
    pub fn to_world(&self, col: u16, row: u16) -> (i32, i32) {
        let cx = (col as i64 - 1) * 2 + 1;
        let cy = (row as i64 - 2) * 2 + 1;
        let x = cx * self.world_w as i64 / (2 * self.play_cols() as i64);
        let y = cy * self.world_h as i64 / (2 * self.play_rows() as i64);
        (x as i32, y as i32)
    }

    /// Cells covered by the drawn Play frame.  The frame is at least eight
    /// columns wide and three rows tall, so it can spill past the button's
    /// own cell span.
    fn button_frame(&self, button: &Rect) -> Option<ButtonFrame> {
        let (c0, c1, r0, _) = self.cells(button)?;
        Some(ButtonFrame {
            c0,
            width: (c1 - c0).max(8),
            top: r0.saturating_sub(1),
            label: r0,
            bottom: r0 + 1,
        })
    }

    /// World point for a mouse click.  A click anywhere on the drawn Play
    /// frame lands on the button's centre.
    pub fn click_to_world(&self, button: &Rect, col: u16, row: u16) -> (i32, i32) {
        match self.button_frame(button) {
            Some(frame) if frame.covers(col, row) => {
                (button.center_x(), button.top() + button.h as i32 / 2)
            }
            _ => self.to_world(col, row),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ButtonFrame {
    c0: u16,
    width: u16,
    top: u16,
    label: u16,
    bottom: u16,
}

impl ButtonFrame {
    fn covers(&self, col: u16, row: u16) -> bool {
        (self.c0..self.c0 + self.width).contains(&col) && (self.top..=self.bottom).contains(&row)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, snap, view)?;

    for enemy in &snap.enemies {
        draw_enemy(out, enemy, view)?;
    }
    for projectile in &snap.projectiles {
        draw_projectile(out, projectile, view)?;
    }

    if !snap.respawning {
        draw_player(out, &snap.ship, view)?;
    }
    draw_controls_hint(out, view)?;

    match snap.status {
        GameStatus::Idle => draw_title(out, snap, view)?,
        GameStatus::GameOver => draw_game_over(out, snap, view)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    // Score and high score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Hi:{:>7}",
        snap.score, snap.high_score
    )))?;

    // Level — centre
    let level_str = format!("[ LEVEL {} ]", snap.level);
    let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Lives — right
    let hearts: String = "♥".repeat(snap.ships_left as usize);
    let lives_str = format!("Ships:{}", hearts);
    let rx = view
        .cols
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, ship: &Rect, view: &Viewport) -> std::io::Result<()> {
    // Sprite, stretched to the ship's cell span:
    //   ▲       ← top row    (tip)
    //  /█\      ← bottom row (fuselage + wings)
    let Some((c0, c1, r0, r1)) = view.cells(ship) else {
        return Ok(());
    };
    let width = (c1 - c0) as usize;
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(c0 + (c1 - c0) / 2, r0))?;
    out.queue(Print("▲"))?;

    if r1 - r0 >= 2 || width >= 3 {
        let body = if width >= 3 {
            format!("/{}\\", "█".repeat(width - 2))
        } else {
            "█".repeat(width)
        };
        out.queue(cursor::MoveTo(c0, r1 - 1))?;
        out.queue(Print(body))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Rect, view: &Viewport) -> std::io::Result<()> {
    // Sprite, stretched to the enemy's cell span:
    //   «▼▼»    ← swept-back wings
    //   ╚══╝    ← engine block
    let Some((c0, c1, r0, r1)) = view.cells(enemy) else {
        return Ok(());
    };
    let width = (c1 - c0) as usize;
    out.queue(style::SetForegroundColor(C_ENEMY))?;

    let (wings, engine) = if width >= 3 {
        (
            format!("«{}»", "▼".repeat(width - 2)),
            format!("╚{}╝", "═".repeat(width - 2)),
        )
    } else {
        ("▼".repeat(width), "═".repeat(width))
    };
    out.queue(cursor::MoveTo(c0, r0))?;
    out.queue(Print(wings))?;
    if r1 - r0 >= 2 {
        out.queue(cursor::MoveTo(c0, r0 + 1))?;
        out.queue(Print(engine))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &Rect,
    view: &Viewport,
) -> std::io::Result<()> {
    let Some((c0, _, r0, _)) = view.cells(projectile) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(c0, r0))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Play   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_play_button<W: Write>(out: &mut W, button: &Rect, view: &Viewport) -> std::io::Result<()> {
    let Some(frame) = view.button_frame(button) else {
        return Ok(());
    };
    let inner = frame.width as usize - 2;
    let label = format!("{:^inner$}", "PLAY");

    out.queue(style::SetForegroundColor(C_BUTTON))?;
    out.queue(cursor::MoveTo(frame.c0, frame.top))?;
    out.queue(Print(format!("╔{}╗", "═".repeat(inner))))?;
    out.queue(cursor::MoveTo(frame.c0, frame.label))?;
    out.queue(Print(format!("║{}║", label)))?;
    out.queue(cursor::MoveTo(frame.c0, frame.bottom))?;
    out.queue(Print(format!("╚{}╝", "═".repeat(inner))))?;
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let top = (view.rows / 2).saturating_sub(6);
    draw_centered(out, view, top, "★  ALIEN  INVASION  ★", Color::Cyan)?;
    if snap.high_score > 0 {
        let hs = format!("Best Score: {}", snap.high_score);
        draw_centered(out, view, top + 1, &hs, Color::Yellow)?;
    }
    draw_play_button(out, &snap.play_button, view)?;
    draw_centered(
        out,
        view,
        top + 10,
        "Click PLAY or press P to start",
        Color::White,
    )?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let new_best = snap.score >= snap.high_score && snap.score > 0;
    let score_line = format!("Final Score: {:>7}", snap.score);
    let best_line = if new_best {
        format!("★ NEW BEST: {:>7} ★", snap.high_score)
    } else {
        format!("Best Score:  {:>7}", snap.high_score)
    };
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let start_row = (view.rows / 2).saturating_sub(7);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, msg, *color)?;
    }

    let score_row = start_row + lines.len() as u16;
    draw_centered(out, view, score_row, &score_line, Color::Yellow)?;
    draw_centered(out, view, score_row + 1, &best_line, best_color)?;

    draw_play_button(out, &snap.play_button, view)?;
    draw_centered(
        out,
        view,
        (view.rows / 2) + 4,
        "P / PLAY - Play Again  Q - Quit",
        Color::White,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_drawn_play_cell_hits_the_button() {
        let button = Rect::new(300, 275, 200, 50);
        let view = Viewport::new(80, 24, Rect::new(0, 0, 800, 600));
        let frame = view.button_frame(&button).unwrap();
        // 50 px tall is a single cell here, so the borders sit outside it.
        assert_eq!(frame.bottom - frame.top, 2);

        for row in frame.top..=frame.bottom {
            for col in frame.c0..frame.c0 + frame.width {
                let (x, y) = view.click_to_world(&button, col, row);
                assert!(button.contains(x, y), "cell ({col}, {row}) missed");
            }
        }
    }

    #[test]
    fn clicks_beside_the_frame_miss() {
        let button = Rect::new(300, 275, 200, 50);
        let view = Viewport::new(80, 24, Rect::new(0, 0, 800, 600));
        let frame = view.button_frame(&button).unwrap();

        let (x, y) = view.click_to_world(&button, frame.c0 - 1, frame.label);
        assert!(!button.contains(x, y));
        let (x, y) = view.click_to_world(&button, frame.c0, frame.bottom + 1);
        assert!(!button.contains(x, y));
    }
}
