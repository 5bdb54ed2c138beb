//! Application state and logic.
//!
//! This module contains the core application state, view routing,
//! and event handling logic. The app owns the one countdown engine;
//! every view that shows remaining time reads it from here.

use anyhow::Result;
use ratatui::widgets::ListState;

use crate::content::{self, Course, Function, MenuItem, Photo};
use crate::countdown::{CountdownEngine, CountdownState};
use crate::event::Action;

/// The different views/screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing view with the countdown hero
    Home,
    /// Photo gallery
    Gallery,
    /// Per-function menu browser
    Menu,
    /// Two-day event timeline
    Itinerary,
    /// Venue address and maps link
    Directions,
    /// Navigation drawer (overlay over the previous view)
    Drawer,
    /// Full-screen photo overlay
    Lightbox,
}

/// The routes offered by the navigation drawer, in display order.
pub const DRAWER_ROUTES: [(View, &str); 5] = [
    (View::Home, "Home"),
    (View::Gallery, "Gallery"),
    (View::Menu, "Menu"),
    (View::Itinerary, "Itinerary"),
    (View::Directions, "Directions"),
];

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The single countdown engine driving every remaining-time display
    pub countdown: CountdownEngine,
    /// Current view/screen
    pub current_view: View,
    /// Previous view (for going back / drawing under overlays)
    pub previous_view: Option<View>,
    /// Status message to display
    pub status: Option<StatusMessage>,

    // --- Gallery state ---
    /// Selection state for the photo list (also the lightbox photo)
    pub gallery_state: ListState,

    // --- Menu state ---
    /// Index into [`Function::ALL`] for the active function tab
    pub menu_function: usize,
    /// Active course filter; `None` shows every course
    pub menu_course: Option<Course>,
    /// Selection state for the filtered menu list
    pub menu_state: ListState,

    // --- Itinerary state ---
    /// Selection state for the timeline
    pub itinerary_state: ListState,

    // --- Drawer state ---
    /// Selection state for the navigation drawer
    pub drawer_state: ListState,

    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates the application, parsing the countdown target up front.
    ///
    /// `target_override` replaces the compiled-in wedding instant (it
    /// must still carry an explicit UTC offset). Parsing happens here,
    /// before the terminal is initialized, so a bad target fails fast
    /// with a readable error.
    pub fn new(target_override: Option<String>) -> Result<Self> {
        let target = target_override.as_deref().unwrap_or(content::WEDDING_TARGET);
        let countdown = CountdownEngine::new(target)?;

        let mut gallery_state = ListState::default();
        gallery_state.select(Some(0));
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        let mut itinerary_state = ListState::default();
        itinerary_state.select(Some(0));
        let mut drawer_state = ListState::default();
        drawer_state.select(Some(0));

        Ok(Self {
            countdown,
            current_view: View::Home,
            previous_view: None,
            status: None,
            gallery_state,
            menu_function: 0,
            menu_course: None,
            menu_state,
            itinerary_state,
            drawer_state,
            show_help: false,
        })
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> Result<bool> {
        // The tick drives the countdown regardless of what is on screen,
        // and must not count as "any key" for the help overlay.
        if action == Action::Tick {
            self.handle_tick();
            return Ok(false);
        }

        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        // Overlays capture input until dismissed
        match self.current_view {
            View::Drawer => return self.handle_drawer_action(action),
            View::Lightbox => return self.handle_lightbox_action(action),
            _ => {}
        }

        // Keys valid in every routed view
        match action {
            Action::Quit => return Ok(true),
            Action::OpenDrawer => {
                self.open_drawer();
                return Ok(false);
            }
            Action::GoHome => {
                self.route_to(View::Home);
                return Ok(false);
            }
            Action::GoGallery => {
                self.route_to(View::Gallery);
                return Ok(false);
            }
            Action::GoMenu => {
                self.route_to(View::Menu);
                return Ok(false);
            }
            Action::GoItinerary => {
                self.route_to(View::Itinerary);
                return Ok(false);
            }
            Action::GoDirections => {
                self.route_to(View::Directions);
                return Ok(false);
            }
            _ => {}
        }

        // Handle based on current view
        match self.current_view {
            View::Home => self.handle_home_action(action),
            View::Gallery => self.handle_gallery_action(action),
            View::Menu => self.handle_menu_action(action),
            View::Itinerary => self.handle_itinerary_action(action),
            View::Directions => self.handle_directions_action(action),
            View::Drawer | View::Lightbox => Ok(false),
        }
    }

    /// Advances the countdown by one tick of fresh wall-clock time.
    fn handle_tick(&mut self) {
        let was_elapsed = self.countdown.state() == CountdownState::Elapsed;
        self.countdown.tick();
        if !was_elapsed && self.countdown.state() == CountdownState::Elapsed {
            self.set_status("The celebrations have begun!", false);
        }
    }

    /// Handles actions on the home view.
    fn handle_home_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Enter => self.route_to(View::Gallery),
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions in the gallery view.
    fn handle_gallery_action(&mut self, action: Action) -> Result<bool> {
        let len = content::PHOTOS.len();
        match action {
            Action::Back => self.go_back(),
            Action::Up => select_previous(&mut self.gallery_state, len),
            Action::Down => select_next(&mut self.gallery_state, len),
            Action::Top => select_first(&mut self.gallery_state, len),
            Action::Bottom => select_last(&mut self.gallery_state, len),
            Action::Enter => self.open_lightbox(),
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions in the menu view.
    fn handle_menu_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Back => self.go_back(),
            Action::NextFunction => {
                self.menu_function = (self.menu_function + 1) % Function::ALL.len();
                self.reset_menu_selection();
            }
            Action::PrevFunction => {
                self.menu_function =
                    (self.menu_function + Function::ALL.len() - 1) % Function::ALL.len();
                self.reset_menu_selection();
            }
            Action::CycleCourse => {
                self.menu_course = next_course_filter(self.menu_course);
                self.reset_menu_selection();
            }
            Action::Up => {
                let len = self.visible_menu_items().len();
                select_previous(&mut self.menu_state, len);
            }
            Action::Down => {
                let len = self.visible_menu_items().len();
                select_next(&mut self.menu_state, len);
            }
            Action::Top => {
                let len = self.visible_menu_items().len();
                select_first(&mut self.menu_state, len);
            }
            Action::Bottom => {
                let len = self.visible_menu_items().len();
                select_last(&mut self.menu_state, len);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions in the itinerary view.
    fn handle_itinerary_action(&mut self, action: Action) -> Result<bool> {
        let len = content::ITINERARY.len();
        match action {
            Action::Back => self.go_back(),
            Action::Up => select_previous(&mut self.itinerary_state, len),
            Action::Down => select_next(&mut self.itinerary_state, len),
            Action::Top => select_first(&mut self.itinerary_state, len),
            Action::Bottom => select_last(&mut self.itinerary_state, len),
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions in the directions view.
    fn handle_directions_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Back => self.go_back(),
            Action::Copy => self.copy_maps_link(),
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions while the navigation drawer is open.
    fn handle_drawer_action(&mut self, action: Action) -> Result<bool> {
        let len = DRAWER_ROUTES.len();
        match action {
            Action::Quit => return Ok(true),
            Action::Back | Action::OpenDrawer => self.close_overlay(),
            Action::Up => select_previous(&mut self.drawer_state, len),
            Action::Down => select_next(&mut self.drawer_state, len),
            Action::Enter => {
                if let Some(idx) = self.drawer_state.selected() {
                    let (view, _) = DRAWER_ROUTES[idx % len];
                    self.current_view = view;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions while the lightbox is open.
    fn handle_lightbox_action(&mut self, action: Action) -> Result<bool> {
        let len = content::PHOTOS.len();
        match action {
            Action::Quit => return Ok(true),
            Action::Back | Action::Enter => self.close_overlay(),
            Action::Up => select_previous(&mut self.gallery_state, len),
            Action::Down => select_next(&mut self.gallery_state, len),
            _ => {}
        }
        Ok(false)
    }

    // --- Navigation helpers ---

    /// Routes to a view, remembering where we came from.
    fn route_to(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Goes back to the previous view.
    fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else {
            self.current_view = View::Home;
        }
    }

    fn open_drawer(&mut self) {
        self.previous_view = Some(self.current_view);
        self.current_view = View::Drawer;
    }

    fn open_lightbox(&mut self) {
        if self.gallery_state.selected().is_some() {
            self.previous_view = Some(self.current_view);
            self.current_view = View::Lightbox;
        }
    }

    /// Closes the drawer or lightbox, restoring the underlying view.
    fn close_overlay(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else {
            self.current_view = View::Home;
        }
    }

    // --- Menu helpers ---

    /// The active wedding function tab.
    pub fn function(&self) -> Function {
        Function::ALL[self.menu_function % Function::ALL.len()]
    }

    /// The menu items visible under the active tab and course filter.
    pub fn visible_menu_items(&self) -> Vec<&'static MenuItem> {
        content::MENU
            .iter()
            .filter(|item| item.function == self.function())
            .filter(|item| self.menu_course.is_none_or(|course| item.course == course))
            .collect()
    }

    fn reset_menu_selection(&mut self) {
        if self.visible_menu_items().is_empty() {
            self.menu_state.select(None);
        } else {
            self.menu_state.select(Some(0));
        }
    }

    // --- Clipboard ---

    fn copy_maps_link(&mut self) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(content::MAPS_LINK).is_ok() {
                    self.set_status("Directions link copied to clipboard!", false);
                } else {
                    self.set_status("Failed to copy to clipboard", true);
                }
            }
            Err(_) => {
                self.set_status("Clipboard not available", true);
            }
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    /// Returns the currently selected photo (if any).
    pub fn selected_photo(&self) -> Option<&'static Photo> {
        self.gallery_state
            .selected()
            .and_then(|idx| content::PHOTOS.get(idx))
    }
}

// ============================================================================
// List Selection Helpers
// ============================================================================

/// Moves the selection up one item, wrapping at the top.
fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let new = if current == 0 { len - 1 } else { current - 1 };
    state.select(Some(new));
}

/// Moves the selection down one item, wrapping at the bottom.
fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let new = if current >= len - 1 { 0 } else { current + 1 };
    state.select(Some(new));
}

fn select_first(state: &mut ListState, len: usize) {
    if len > 0 {
        state.select(Some(0));
    }
}

fn select_last(state: &mut ListState, len: usize) {
    if len > 0 {
        state.select(Some(len - 1));
    }
}

/// Advances the course filter: all -> cuisine -> fastfood -> dessert -> all.
fn next_course_filter(current: Option<Course>) -> Option<Course> {
    match current {
        None => Some(Course::Cuisine),
        Some(Course::Cuisine) => Some(Course::FastFood),
        Some(Course::FastFood) => Some(Course::Dessert),
        Some(Course::Dessert) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::RemainingTime;
    use chrono::Utc;

    fn app() -> App {
        App::new(None).unwrap()
    }

    #[test]
    fn starts_on_home_with_pending_countdown() {
        let app = app();
        assert_eq!(app.current_view, View::Home);
        assert_eq!(app.countdown.state(), CountdownState::Pending);
    }

    #[test]
    fn invalid_target_override_fails_construction() {
        assert!(App::new(Some("2026-02-10T23:00:00".to_string())).is_err());
        assert!(App::new(Some("not a date".to_string())).is_err());
    }

    #[test]
    fn digit_routing_switches_views() {
        let mut app = app();
        app.handle_event(Action::GoMenu).unwrap();
        assert_eq!(app.current_view, View::Menu);
        app.handle_event(Action::GoGallery).unwrap();
        assert_eq!(app.current_view, View::Gallery);
        app.handle_event(Action::Back).unwrap();
        assert_eq!(app.current_view, View::Menu);
    }

    #[test]
    fn drawer_opens_navigates_and_routes() {
        let mut app = app();
        app.handle_event(Action::OpenDrawer).unwrap();
        assert_eq!(app.current_view, View::Drawer);

        // Home -> Gallery in the route list
        app.handle_event(Action::Down).unwrap();
        app.handle_event(Action::Enter).unwrap();
        assert_eq!(app.current_view, View::Gallery);
    }

    #[test]
    fn drawer_escape_restores_underlying_view() {
        let mut app = app();
        app.handle_event(Action::GoItinerary).unwrap();
        app.handle_event(Action::OpenDrawer).unwrap();
        app.handle_event(Action::Back).unwrap();
        assert_eq!(app.current_view, View::Itinerary);
    }

    #[test]
    fn gallery_selection_wraps_both_ways() {
        let mut app = app();
        app.handle_event(Action::GoGallery).unwrap();

        app.handle_event(Action::Up).unwrap();
        assert_eq!(
            app.gallery_state.selected(),
            Some(content::PHOTOS.len() - 1)
        );
        app.handle_event(Action::Down).unwrap();
        assert_eq!(app.gallery_state.selected(), Some(0));
    }

    #[test]
    fn lightbox_opens_and_closes_over_gallery() {
        let mut app = app();
        app.handle_event(Action::GoGallery).unwrap();
        app.handle_event(Action::Enter).unwrap();
        assert_eq!(app.current_view, View::Lightbox);

        // j/k page through photos without leaving the lightbox
        app.handle_event(Action::Down).unwrap();
        assert_eq!(app.current_view, View::Lightbox);
        assert_eq!(app.gallery_state.selected(), Some(1));

        app.handle_event(Action::Back).unwrap();
        assert_eq!(app.current_view, View::Gallery);
    }

    #[test]
    fn menu_tabs_cycle_and_reset_selection() {
        let mut app = app();
        app.handle_event(Action::GoMenu).unwrap();
        assert_eq!(app.function(), Function::Carnival);

        app.handle_event(Action::NextFunction).unwrap();
        assert_eq!(app.function(), Function::Sangeet);
        assert_eq!(app.menu_state.selected(), Some(0));

        app.handle_event(Action::PrevFunction).unwrap();
        app.handle_event(Action::PrevFunction).unwrap();
        assert_eq!(app.function(), Function::Reception);
    }

    #[test]
    fn course_filter_narrows_menu() {
        let mut app = app();
        app.handle_event(Action::GoMenu).unwrap();
        let all = app.visible_menu_items().len();
        assert_eq!(all, 4); // Carnival has four items

        app.handle_event(Action::CycleCourse).unwrap();
        assert!(app
            .visible_menu_items()
            .iter()
            .all(|item| item.course == Course::Cuisine));
        assert!(app.visible_menu_items().len() < all);

        // Full cycle returns to the unfiltered list
        app.handle_event(Action::CycleCourse).unwrap();
        app.handle_event(Action::CycleCourse).unwrap();
        app.handle_event(Action::CycleCourse).unwrap();
        assert_eq!(app.visible_menu_items().len(), all);
    }

    #[test]
    fn quit_action_quits() {
        let mut app = app();
        assert!(app.handle_event(Action::Quit).unwrap());
    }

    #[test]
    fn help_toggles_and_swallows_next_key() {
        let mut app = app();
        app.handle_event(Action::Help).unwrap();
        assert!(app.show_help);

        // Any key closes help without acting on the view
        app.handle_event(Action::GoGallery).unwrap();
        assert!(!app.show_help);
        assert_eq!(app.current_view, View::Home);
    }

    #[test]
    fn tick_does_not_close_help() {
        let mut app = App::new(Some("2999-01-01T00:00:00Z".to_string())).unwrap();
        app.handle_event(Action::Help).unwrap();
        app.handle_event(Action::Tick).unwrap();
        assert!(app.show_help);
    }

    #[test]
    fn tick_moves_future_target_to_counting() {
        let mut app = App::new(Some("2999-01-01T00:00:00Z".to_string())).unwrap();
        app.handle_event(Action::Tick).unwrap();
        match app.countdown.state() {
            CountdownState::Counting(RemainingTime { days, .. }) => assert!(days > 0),
            other => panic!("expected Counting, got {other:?}"),
        }
    }

    #[test]
    fn tick_past_target_elapses_and_announces() {
        let mut app = App::new(Some("2000-01-01T00:00:00Z".to_string())).unwrap();
        app.handle_event(Action::Tick).unwrap();
        assert_eq!(app.countdown.state(), CountdownState::Elapsed);
        let status = app.status.expect("expected a status message");
        assert!(!status.is_error);

        // A later tick stays elapsed and does not re-announce
        app.status = None;
        app.handle_event(Action::Tick).unwrap();
        assert_eq!(app.countdown.state(), CountdownState::Elapsed);
        assert!(app.status.is_none());
    }

    #[test]
    fn elapsed_tick_at_is_pure_of_wall_clock() {
        let mut app = app();
        app.countdown.tick_at(Utc::now() + chrono::Duration::days(365 * 100));
        assert_eq!(app.countdown.state(), CountdownState::Elapsed);
    }
}
