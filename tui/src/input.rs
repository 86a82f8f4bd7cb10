//! Input handling for the Darb TUI.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use darb_engine::{App, Focus};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and feeds them to the
/// frame loop over a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // backpressured on a send (e.g. during a large paste).
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events, so pasted digit runs arrive intact.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain the input queue into state transitions. Returns `true` when the
/// loop should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event as at most one state transition.
fn apply_event(app: &mut App, event: &Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            // Ctrl+C always quits, whatever has focus.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }

            handle_key(app, *key);
        }
        Event::Paste(text) => {
            tracing::debug!(len = text.len(), "paste received");
            if let Some(mut entry) = app.answer_entry() {
                entry.insert_str(text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') if app.focus() != Focus::Answer => {
            app.select_highlighted();
        }
        KeyCode::Enter => submit_answer(app),
        KeyCode::Backspace => {
            if let Some(mut entry) = app.answer_entry() {
                entry.delete_char();
            }
        }
        KeyCode::Left => handle_left(app),
        KeyCode::Right => handle_right(app),
        KeyCode::Up => app.highlight_up(),
        KeyCode::Down => app.highlight_down(),
        KeyCode::Char(c) => handle_char(app, c),
        _ => {}
    }
}

fn handle_left(app: &mut App) {
    if app.focus() == Focus::Answer {
        if let Some(mut entry) = app.answer_entry() {
            entry.move_cursor_left();
        }
    } else {
        app.highlight_left();
    }
}

fn handle_right(app: &mut App) {
    if app.focus() == Focus::Answer {
        if let Some(mut entry) = app.answer_entry() {
            entry.move_cursor_right();
        }
    } else {
        app.highlight_right();
    }
}

fn handle_char(app: &mut App, c: char) {
    // Digits edit the answer from any pane, like the form's autofocused
    // input; everything else is navigation.
    if c.is_ascii_digit() || darb_types::EASTERN_ARABIC.value_of(c).is_some() {
        if let Some(mut entry) = app.answer_entry() {
            entry.insert_char(c);
        }
        return;
    }

    match c {
        'q' if app.focus() != Focus::Answer => app.request_quit(),
        'h' if app.focus() != Focus::Answer => app.highlight_left(),
        'l' if app.focus() != Focus::Answer => app.highlight_right(),
        'j' if app.focus() != Focus::Answer => app.highlight_down(),
        'k' if app.focus() != Focus::Answer => app.highlight_up(),
        _ => {}
    }
}

/// Submission guard: an empty draft never reaches `submit`.
fn submit_answer(app: &mut App) {
    if app.answer_text().is_empty() {
        return;
    }
    if let Some(entry) = app.answer_entry() {
        let _ = entry.submit();
    }
}
