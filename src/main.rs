mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use starfall::compute::{init_state, set_input, tick};
use starfall::entities::{Cue, GameState, GameStatus, Input};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Audio cues ────────────────────────────────────────────────────────────────

/// Fire-and-forget cue playback over the only sound channel a terminal has.
/// Shoot cues fire several times a second and would turn the bell into
/// noise, so only the destructive cues ring it.
fn play_cue<W: Write>(out: &mut W, cue: Cue) -> std::io::Result<()> {
    match cue {
        Cue::Shoot => Ok(()),
        Cue::Explosion | Cue::EndTheme => out.write_all(b"\x07"),
    }
}

// ── Ready gate ────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

/// One-time confirmation gate before the loop starts.
fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  S T A R F A L L  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(4),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let lines: &[(&str, Color)] = &[
        ("Clear the wave — every 18 kills another one drops in.", Color::DarkGrey),
        ("One hit and the session is over.", Color::DarkGrey),
        ("", Color::Reset),
        ("ENTER : Start    Q : Quit", Color::White),
        ("← → / A D : Move   SPACE : Shoot", Color::DarkGrey),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(msg.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and feed the combined held state into the
/// simulation as `Input` flags.  This allows Space + A/D to be held at the
/// same time with no interference.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence, which is shorter than the OS repeat interval, so the key stays
///   live while it is actively generating repeats.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();
    let mut theme_played = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f32();
        last_tick = now;

        if state.status == GameStatus::Playing {
            // ── Held-key flags → simulation input ─────────────────────────────
            let input = Input {
                left: is_held(&key_frame, &KeyCode::Left, frame)
                    || is_held(&key_frame, &KeyCode::Char('a'), frame)
                    || is_held(&key_frame, &KeyCode::Char('A'), frame),
                right: is_held(&key_frame, &KeyCode::Right, frame)
                    || is_held(&key_frame, &KeyCode::Char('d'), frame)
                    || is_held(&key_frame, &KeyCode::Char('D'), frame),
                fire: is_held(&key_frame, &KeyCode::Char(' '), frame),
            };
            if input != state.input {
                *state = set_input(state, input);
            }

            let (next, cues) = tick(state, dt, &mut rng);
            *state = next;
            for cue in cues {
                play_cue(out, cue)?;
            }
        } else if !theme_played {
            // First frame after the fatal hit: end-of-game cue, then no
            // further simulation — only the overlay keeps being drawn.
            play_cue(out, Cue::EndTheme)?;
            theme_played = true;
        }

        let (width, height) = terminal::size()?;
        display::render(out, state, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut state = init_state(&mut thread_rng());
                let quit = game_loop(out, &mut state, rx)?;
                if quit {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
