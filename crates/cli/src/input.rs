//! Keyboard input translation.
//!
//! Pending key events are drained once per tick, concatenated into a single
//! key string, and looked up as a whole against the command vocabulary.
//! Anything unrecognized translates to no command at all.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commands the controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Pause,
    Step,
    Reset,
}

/// Translates a drained key burst into at most one command.
///
/// The whole concatenation is matched case-insensitively; `q` aliases the
/// escape key. Unmatched input is silently ignored.
pub fn translate(keys: &str) -> Option<Command> {
    match keys.to_lowercase().as_str() {
        "\x1b" | "q" => Some(Command::Exit),
        " " => Some(Command::Pause),
        "s" => Some(Command::Step),
        "r" => Some(Command::Reset),
        _ => None,
    }
}

/// Non-blocking poll used every running tick.
///
/// Drains all pending events without waiting, so the loop never stalls on
/// the keyboard while the simulation is playing.
pub fn poll_command() -> Result<Option<Command>> {
    let mut keys = String::new();
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(&key) {
                    return Ok(Some(Command::Exit));
                }
                push_key(&mut keys, &key);
            }
            _ => {}
        }
    }
    Ok(translate(&keys))
}

/// Blocking read used while paused.
///
/// Waits for one key press, then drains anything else already pending before
/// translating, so multi-byte sequences stay intact.
pub fn wait_command() -> Result<Option<Command>> {
    let mut keys = String::new();
    loop {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(&key) {
                    return Ok(Some(Command::Exit));
                }
                push_key(&mut keys, &key);
                break;
            }
            _ => {}
        }
    }
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(&key) {
                    return Ok(Some(Command::Exit));
                }
                push_key(&mut keys, &key);
            }
            _ => {}
        }
    }
    Ok(translate(&keys))
}

/// Ctrl-C arrives as a key event in raw mode; treat it as the interrupt path.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

fn push_key(keys: &mut String, key: &KeyEvent) {
    match key.code {
        KeyCode::Char(c) => keys.push(c),
        KeyCode::Esc => keys.push('\x1b'),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_vocabulary() {
        assert_eq!(translate("\x1b"), Some(Command::Exit));
        assert_eq!(translate("q"), Some(Command::Exit));
        assert_eq!(translate(" "), Some(Command::Pause));
        assert_eq!(translate("s"), Some(Command::Step));
        assert_eq!(translate("r"), Some(Command::Reset));
    }

    #[test]
    fn test_translate_is_case_insensitive() {
        assert_eq!(translate("Q"), Some(Command::Exit));
        assert_eq!(translate("R"), Some(Command::Reset));
        assert_eq!(translate("S"), Some(Command::Step));
    }

    #[test]
    fn test_translate_ignores_unrecognized_input() {
        assert_eq!(translate(""), None);
        assert_eq!(translate("x"), None);
        // A burst of several keys is matched as a whole, not key by key.
        assert_eq!(translate("sr"), None);
        assert_eq!(translate("  "), None);
    }

    #[test]
    fn test_interrupt_detection() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&plain_c));
    }

    #[test]
    fn test_push_key_maps_escape() {
        let mut keys = String::new();
        push_key(&mut keys, &KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        push_key(&mut keys, &KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        // Non-character specials contribute nothing.
        push_key(&mut keys, &KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(keys, "\x1br");
    }
}
