//! Scene state machine for the menu overlay
//!
//! The overlay has one active [`Scene`] plus three flags. Every input
//! eventually maps onto one of the [`Action`]s below, so the state can only
//! change through [`SceneState::apply`] and [`SceneState::toggle_pause`].

/// Top-level screen the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Title screen shown at startup
    Home,
    /// Main menu reached from the game
    Menu,
    /// Game running, HUD visible
    Playing,
}

/// Discrete actions bound to buttons and hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Resume,
    GoToMenu,
    ToggleOptions,
    OpenPause,
    Quit,
}

impl Action {
    /// All actions, in declaration order
    pub const ALL: [Action; 6] = [
        Action::Start,
        Action::Resume,
        Action::GoToMenu,
        Action::ToggleOptions,
        Action::OpenPause,
        Action::Quit,
    ];
}

/// Which group of controls is navigable in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusLayer {
    /// Start / Options / Quit on the home and menu screens
    MainButtons,
    /// Options sliders
    Options,
    /// Resume / Options / Main Menu / Quit on the pause panel
    PauseButtons,
    /// Small Pause / Main Menu boxes in the playing HUD
    Hud,
}

/// Complete overlay state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneState {
    pub scene: Scene,
    pub paused: bool,
    pub pause_menu_open: bool,
    pub show_options: bool,
    quit_requested: bool,
}

impl SceneState {
    /// Initial state: home screen, nothing open
    pub fn new() -> Self {
        Self {
            scene: Scene::Home,
            paused: false,
            pause_menu_open: false,
            show_options: false,
            quit_requested: false,
        }
    }

    /// Applies an action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Start => {
                self.scene = Scene::Playing;
                self.paused = false;
                self.pause_menu_open = false;
            }
            Action::Resume => {
                self.paused = false;
                self.pause_menu_open = false;
            }
            Action::GoToMenu => {
                self.scene = Scene::Menu;
                self.show_options = false;
                self.paused = false;
                self.pause_menu_open = false;
            }
            Action::ToggleOptions => {
                self.show_options = !self.show_options;
            }
            Action::OpenPause => {
                // Only the playing HUD can open the pause panel
                if self.scene == Scene::Playing {
                    self.paused = true;
                    self.pause_menu_open = true;
                }
            }
            Action::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Escape / P while playing: flips pause and keeps the panel in sync
    ///
    /// Returns false outside the playing scene, where the key has no
    /// pause meaning.
    pub fn toggle_pause(&mut self) -> bool {
        if self.scene != Scene::Playing {
            return false;
        }
        self.paused = !self.paused;
        self.pause_menu_open = self.paused;
        true
    }

    /// Controls the player can currently navigate
    pub fn focus_layer(&self) -> FocusLayer {
        match self.scene {
            Scene::Home | Scene::Menu => {
                if self.show_options {
                    FocusLayer::Options
                } else {
                    FocusLayer::MainButtons
                }
            }
            Scene::Playing => {
                if !self.pause_menu_open {
                    FocusLayer::Hud
                } else if self.show_options {
                    FocusLayer::Options
                } else {
                    FocusLayer::PauseButtons
                }
            }
        }
    }

    /// Returns true once a quit action has been applied
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Returns true while the game clock should stand still
    pub fn is_frozen(&self) -> bool {
        self.scene == Scene::Playing && self.paused
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    #[derive(Clone, Copy)]
    enum Event {
        Act(Action),
        TogglePause,
    }

    fn all_events() -> Vec<Event> {
        let mut events: Vec<Event> = Action::ALL.iter().copied().map(Event::Act).collect();
        events.push(Event::TogglePause);
        events
    }

    fn step(mut state: SceneState, event: Event) -> SceneState {
        match event {
            Event::Act(action) => state.apply(action),
            Event::TogglePause => {
                state.toggle_pause();
            }
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = SceneState::new();
        assert_eq!(state.scene, Scene::Home);
        assert!(!state.paused);
        assert!(!state.pause_menu_open);
        assert!(!state.show_options);
        assert!(!state.quit_requested());
        assert_eq!(state.focus_layer(), FocusLayer::MainButtons);
    }

    #[test]
    fn test_start_then_pause_then_resume() {
        let mut state = SceneState::new();
        state.apply(Action::Start);
        assert_eq!(state.scene, Scene::Playing);
        assert_eq!(state.focus_layer(), FocusLayer::Hud);

        assert!(state.toggle_pause());
        assert!(state.paused && state.pause_menu_open);
        assert_eq!(state.focus_layer(), FocusLayer::PauseButtons);

        state.apply(Action::Resume);
        assert!(!state.paused && !state.pause_menu_open);
    }

    #[test]
    fn test_go_to_menu_clears_flags() {
        let mut state = SceneState::new();
        state.apply(Action::Start);
        state.apply(Action::OpenPause);
        state.apply(Action::ToggleOptions);
        assert_eq!(state.focus_layer(), FocusLayer::Options);

        state.apply(Action::GoToMenu);
        assert_eq!(state.scene, Scene::Menu);
        assert!(!state.paused && !state.pause_menu_open && !state.show_options);
    }

    #[test]
    fn test_toggle_pause_outside_playing_is_rejected() {
        let mut state = SceneState::new();
        assert!(!state.toggle_pause());
        assert_eq!(state, SceneState::new());
    }

    #[test]
    fn test_open_pause_requires_playing() {
        let mut state = SceneState::new();
        state.apply(Action::OpenPause);
        assert!(!state.paused);
    }

    #[test]
    fn test_transitions_are_total_and_consistent() {
        // Breadth-first walk over every reachable state
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([SceneState::new()]);
        while let Some(state) = queue.pop_front() {
            if !seen.insert(state) {
                continue;
            }

            // Every state resolves to a focus layer
            let _ = state.focus_layer();
            // The pause panel mirrors the paused flag and only exists in-game
            assert_eq!(state.paused, state.pause_menu_open);
            if state.paused {
                assert_eq!(state.scene, Scene::Playing);
            }

            for event in all_events() {
                queue.push_back(step(state, event));
            }
        }

        // home/menu/playing x pause x options x quit are all reachable
        assert!(seen.iter().any(|s| s.scene == Scene::Menu));
        assert!(seen.iter().any(|s| s.pause_menu_open && s.show_options));
    }
}
