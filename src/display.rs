//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.  The simulation runs in logical 800×600
//! units, so every position is scaled onto the terminal grid first.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use starfall::compute::{wave_offset, GAME_HEIGHT, GAME_WIDTH};
use starfall::entities::{GameState, GameStatus, Laser};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_LASER_PLAYER: Color = Color::Cyan;
const C_LASER_ENEMY: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Logical → terminal mapping ────────────────────────────────────────────────

// Screen layout: row 0 HUD, row 1 top border, rows 2..height-3 playfield,
// row height-2 bottom border, row height-1 controls hint.

fn to_col(x: f32, width: u16) -> u16 {
    let right = width.saturating_sub(2).max(1);
    let span = right.saturating_sub(1) as f32;
    let col = 1.0 + (x / GAME_WIDTH).clamp(0.0, 1.0) * span;
    (col.round() as u16).clamp(1, right)
}

fn to_row(y: f32, height: u16) -> u16 {
    let bottom = height.saturating_sub(3).max(2);
    let span = bottom.saturating_sub(2) as f32;
    let row = 2.0 + (y / GAME_HEIGHT).clamp(0.0, 1.0) * span;
    (row.round() as u16).clamp(2, bottom)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `width`×`height` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    let (dx, dy) = wave_offset(state.elapsed);
    for enemy in &state.enemies {
        draw_enemy(out, enemy.x + dx, enemy.y + dy, width, height)?;
    }
    for laser in &state.lasers {
        draw_laser(out, laser, "║", C_LASER_PLAYER, width, height)?;
    }
    for laser in &state.enemy_lasers {
        draw_laser(out, laser, "↓", C_LASER_ENEMY, width, height)?;
    }

    draw_player(out, state, width, height)?;
    draw_controls_hint(out, height)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row height-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", state.score)))?;

    // Enemy count — right
    let enemies_text = format!("Enemies: {}", state.enemies.len());
    let rx = width.saturating_sub(enemies_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(Print(&enemies_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← tip
    //  /|\      ← wings + fuselage
    let col = to_col(state.player.x, width);
    let row = to_row(state.player.y, height);
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    let wing_row = row + 1;
    if wing_row < height.saturating_sub(2) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), wing_row))?;
        out.queue(Print("/|\\"))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    // Row 0:  <▼>
    // Row 1:  [_]
    let col = to_col(x, width).saturating_sub(1).max(1);
    let row = to_row(y, height);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("<▼>"))?;
    if row + 1 < height.saturating_sub(2) {
        out.queue(cursor::MoveTo(col, row + 1))?;
        out.queue(Print("[_]"))?;
    }
    Ok(())
}

fn draw_laser<W: Write>(
    out: &mut W,
    laser: &Laser,
    glyph: &str,
    color: Color,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(to_col(laser.x, width), to_row(laser.y, height)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
