//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm, and
//! emits the periodic tick that drives the countdown. Ticks are measured
//! against wall time so a burst of key events cannot starve the cadence
//! by more than one poll interval.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::{POLL_TIMEOUT, TICK_INTERVAL};

/// Represents the different actions a user can take in the application,
/// plus the periodic countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Move to the top of the list
    Top,
    /// Move to the bottom of the list
    Bottom,
    /// Select the current item / open the lightbox
    Enter,
    /// Go back / close the current overlay
    Back,
    /// Switch to the next wedding function tab (menu view)
    NextFunction,
    /// Switch to the previous wedding function tab (menu view)
    PrevFunction,
    /// Cycle the menu course filter (all -> cuisine -> fastfood -> dessert)
    CycleCourse,
    /// Copy the directions link to the clipboard
    Copy,
    /// Show help
    Help,
    /// Open the navigation drawer
    OpenDrawer,
    /// Jump straight to the home view
    GoHome,
    /// Jump straight to the gallery view
    GoGallery,
    /// Jump straight to the menu view
    GoMenu,
    /// Jump straight to the itinerary view
    GoItinerary,
    /// Jump straight to the directions view
    GoDirections,
    /// One second of wall time has passed
    Tick,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
    /// Interval between emitted ticks
    tick_interval: Duration,
    /// When the last tick was emitted
    last_tick: Instant,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
            tick_interval: TICK_INTERVAL,
            last_tick: Instant::now(),
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(Some(action)) for a recognized key press, or
    /// Ok(Some(Action::Tick)) once per tick interval when no key arrived.
    /// Returns Ok(None) when neither is due.
    pub fn next(&mut self) -> io::Result<Option<Action>> {
        // Check if a key event is available
        if event::poll(self.poll_timeout)? {
            // Read the event
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }

        // No key event - emit a tick if one is due
        if self.last_tick.elapsed() >= self.tick_interval {
            self.last_tick = Instant::now();
            return Ok(Some(Action::Tick));
        }

        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),

            // Menu tabs and filter
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextFunction),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevFunction),
            KeyCode::Char('f') => Some(Action::CycleCourse),

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('m') => Some(Action::OpenDrawer),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // Direct view routing
            KeyCode::Char('1') => Some(Action::GoHome),
            KeyCode::Char('2') => Some(Action::GoGallery),
            KeyCode::Char('3') => Some(Action::GoMenu),
            KeyCode::Char('4') => Some(Action::GoItinerary),
            KeyCode::Char('5') => Some(Action::GoDirections),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_arrow_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Up)),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Down)),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Home)),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::End)),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_tab_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Tab)),
            Some(Action::NextFunction)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::BackTab)),
            Some(Action::PrevFunction)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::NextFunction)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('h'))),
            Some(Action::PrevFunction)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('f'))),
            Some(Action::CycleCourse)
        );
    }

    #[test]
    fn test_action_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('m'))),
            Some(Action::OpenDrawer)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_digit_routing_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('1'))),
            Some(Action::GoHome)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('2'))),
            Some(Action::GoGallery)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('3'))),
            Some(Action::GoMenu)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('4'))),
            Some(Action::GoItinerary)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            Some(Action::GoDirections)
        );
    }

    #[test]
    fn test_back_keys() {
        let handler = EventHandler::new();

        // All three keys should map to Back action
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('b'))),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }
}
