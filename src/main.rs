mod cli;
mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::game::Game;
use alien_invasion::input::{Command, Flow};

use crate::cli::Cli;
use crate::display::Viewport;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so at 60 FPS a window of 8 frames
/// (≈133 ms) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Turns raw key events into press/release commands for the two directions.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence.
#[derive(Default)]
struct HeldKeys {
    key_frame: HashMap<KeyCode, u64>,
    left: bool,
    right: bool,
}

impl HeldKeys {
    fn press(&mut self, code: KeyCode, frame: u64) {
        self.key_frame.insert(code, frame);
    }

    fn release(&mut self, code: &KeyCode) {
        self.key_frame.remove(code);
    }

    /// Commands for every direction whose held state changed this frame.
    fn poll(&mut self, frame: u64) -> Vec<Command> {
        let held = |keys: &[KeyCode]| keys.iter().any(|k| is_held(&self.key_frame, k, frame));
        let left = held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]);
        let right = held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]);

        let mut commands = Vec::new();
        if left != self.left {
            self.left = left;
            commands.push(Command::MoveLeft(left));
        }
        if right != self.right {
            self.right = right;
            commands.push(Command::MoveRight(right));
        }
        commands
    }
}

/// One-shot command for a key press, if the key has one.
fn key_command(code: &KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Command::Start),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit command arrives.
///
/// Each frame drains all pending input events (non-blocking), advances the
/// simulation by one tick and redraws from the resulting snapshot.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_len = Duration::from_secs_f64(1.0 / game.config().base().tick_rate as f64);
    let screen = game.config().screen();

    let mut keys = HeldKeys::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let view = Viewport::current(screen)?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut commands = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    // Press: record key + handle one-shot actions
                    KeyEventKind::Press => {
                        commands.extend(key_command(&code, modifiers));
                        keys.press(code, frame);
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => keys.press(code, frame),
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => keys.release(&code),
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let (x, y) = view.click_to_world(&game.play_button(), column, row);
                    commands.push(Command::ActivateAt { x, y });
                }
                _ => {}
            }
        }
        commands.extend(keys.poll(frame));

        for command in commands {
            if game.handle(command) == Flow::Quit {
                return Ok(());
            }
        }

        game.tick();
        display::render(out, &game.snapshot(), &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // Reject bad settings before the terminal is taken over.
    let config = match cli.settings().and_then(|s| s.build()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("alien_invasion: {err}");
            std::process::exit(2);
        }
    };
    let mut game = Game::new(config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    log::debug!("keyboard enhancement: {keyboard_enhanced}");

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

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal error: {err}");
    }
    result
}
