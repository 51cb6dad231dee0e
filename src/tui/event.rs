use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global commands (mapped to core actions)
    Quit,       // Ctrl+C
    AddRow,     // Ctrl+A
    RemoveRow,  // Ctrl+X
    Compute,    // Ctrl+G
    Export,     // Ctrl+E

    // Focus-local events (routed to the focused widget)
    InputChar(char),
    Backspace,
    Submit,
    Escape,
    NextFocus,
    PrevFocus,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Resize,
}

/// Poll for an event with timeout. Returns `Ok(None)` if nothing arrived.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Release/repeat events are reported on some platforms
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::AddRow),
                (KeyModifiers::CONTROL, KeyCode::Char('x')) => Some(TuiEvent::RemoveRow),
                (KeyModifiers::CONTROL, KeyCode::Char('g')) => Some(TuiEvent::Compute),
                (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::Export),
                (KeyModifiers::CONTROL, _) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::NextFocus),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevFocus),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('g'))),
            Some(TuiEvent::Compute)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('e'))),
            Some(TuiEvent::Export)
        );
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Char('4'))),
            Some(TuiEvent::InputChar('4'))
        );
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::BackTab)),
            Some(TuiEvent::PrevFocus)
        );
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
