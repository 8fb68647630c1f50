//! Terminal input: a reader thread plus per-frame translation into
//! `InputFrame`s.
//!
//! Held movement works on two kinds of terminal. Terminals with keyboard
//! enhancement report `Release` events and keys drop out immediately.
//! Classic terminals only repeat `Press`, so a key counts as held while its
//! last press is younger than `HOLD_WINDOW`, which is shorter than the OS
//! repeat interval.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use chamber_core::commands::{InputEvent, InputFrame, Key, Movement};

use crate::render::cell_to_screen;

pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Forward every terminal event over a channel so the frame loop never
/// blocks on I/O. The thread exits when the receiver is dropped.
pub fn spawn_event_reader() -> std::io::Result<mpsc::Receiver<Event>> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::Builder::new()
        .name("chamber-input".into())
        .spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event read failed");
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Logical key for a terminal key code.
pub fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(c) => Some(Key::Char(*c)),
        _ => None,
    }
}

fn movement_of(code: &KeyCode) -> Option<fn(&mut Movement)> {
    let set: fn(&mut Movement) = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => |m| m.up = true,
        KeyCode::Down | KeyCode::Char('s' | 'S') => |m| m.down = true,
        KeyCode::Left | KeyCode::Char('a' | 'A') => |m| m.left = true,
        KeyCode::Right | KeyCode::Char('d' | 'D') => |m| m.right = true,
        _ => return None,
    };
    Some(set)
}

/// Turns raw terminal events into one `InputFrame` per frame.
#[derive(Debug)]
pub struct InputCollector {
    last_seen: HashMap<KeyCode, Instant>,
    viewport: (f64, f64),
}

impl InputCollector {
    pub fn new(viewport: (f64, f64)) -> Self {
        Self {
            last_seen: HashMap::new(),
            viewport,
        }
    }

    /// Drain pending events. A closed channel reads as a quit request.
    pub fn collect(&mut self, rx: &mpsc::Receiver<Event>, term: (u16, u16)) -> InputFrame {
        let now = Instant::now();
        let mut frame = InputFrame::default();
        loop {
            match rx.try_recv() {
                Ok(ev) => {
                    if let Some(input) = self.translate(ev, term, now) {
                        frame.events.push(input);
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    frame.events.push(InputEvent::Quit);
                    break;
                }
            }
        }
        frame.held = self.held(now);
        frame
    }

    /// Record the event for hold tracking and return its discrete meaning.
    pub fn translate(&mut self, ev: Event, term: (u16, u16), now: Instant) -> Option<InputEvent> {
        match ev {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => match kind {
                KeyEventKind::Press => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        return Some(InputEvent::Quit);
                    }
                    let key = map_key(&code);
                    self.last_seen.insert(code, now);
                    key.map(InputEvent::KeyDown)
                }
                KeyEventKind::Repeat => {
                    self.last_seen.insert(code, now);
                    None
                }
                KeyEventKind::Release => {
                    self.last_seen.remove(&code);
                    None
                }
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => cell_to_screen(column, row, self.viewport, term)
                .map(|(x, y)| InputEvent::PointerDown { x, y }),
            _ => None,
        }
    }

    /// Directions whose keys were seen within the hold window.
    pub fn held(&self, now: Instant) -> Movement {
        let mut movement = Movement::default();
        for (code, seen) in &self.last_seen {
            if now.saturating_duration_since(*seen) > HOLD_WINDOW {
                continue;
            }
            if let Some(set) = movement_of(code) {
                set(&mut movement);
            }
        }
        movement
    }
}
