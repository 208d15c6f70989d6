//! Menu overlay: owns the controls and routes keyboard, pointer and gamepad
//! input into scene actions

use tracing::debug;

use super::controls::{Button, NdcRect, Slider};
use super::draw::UiDrawList;
use super::focus::{ButtonGroup, ControlCounts, FocusNavigator, FocusTarget, build_focus_list};
use super::scene::{Action, FocusLayer, Scene, SceneState};
use super::transition::{TransitionRates, Transitions, is_visible};
use crate::app::config::UiConfig;

/// Index of the "Triangle scale" slider
pub const SCALE_SLIDER: usize = 0;
/// Index of the "Triangle speed" slider
pub const SPEED_SLIDER: usize = 1;

/// Vertical offset of the options sliders inside the pause panel
const PAUSE_OPTIONS_OFFSET: f32 = -0.48;

const START_GREEN: [f32; 3] = [0.12, 0.6, 0.2];
const OPTIONS_BLUE: [f32; 3] = [0.12, 0.4, 0.8];
const QUIT_RED: [f32; 3] = [0.8, 0.15, 0.2];

/// Keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Escape,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    ToggleOptions,
    TogglePause,
    Quit,
}

/// Gamepad sample for one frame
///
/// `stick[1]` grows downward, so pushing up gives a negative value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub stick: [f32; 2],
    pub south: bool,
}

/// Root of the menu UI
pub struct MenuOverlay {
    state: SceneState,
    main_buttons: Vec<Button>,
    pause_buttons: Vec<Button>,
    hud_buttons: Vec<Button>,
    sliders: Vec<Slider>,
    focus: FocusNavigator,
    focus_list: Vec<FocusTarget>,
    transitions: Transitions,
    settings: UiConfig,
    pointer: Option<[f32; 2]>,
    pointer_held: bool,
    gamepad_last_nav: Option<f64>,
    gamepad_south_prev: bool,
}

impl MenuOverlay {
    /// Creates the overlay on the home screen
    pub fn new(settings: UiConfig) -> Self {
        let main_buttons = vec![
            Button::new(NdcRect::new(0.0, 0.28, 1.0, 0.24), "Start", Action::Start, START_GREEN),
            Button::new(
                NdcRect::new(0.0, -0.02, 1.0, 0.24),
                "Options",
                Action::ToggleOptions,
                OPTIONS_BLUE,
            ),
            Button::new(NdcRect::new(0.0, -0.36, 1.0, 0.24), "Quit", Action::Quit, QUIT_RED),
        ];
        let pause_buttons = vec![
            Button::new(
                NdcRect::new(0.0, 0.18, 0.6, 0.18),
                "Resume",
                Action::Resume,
                [0.15, 0.7, 0.2],
            ),
            Button::new(
                NdcRect::new(0.0, -0.02, 0.6, 0.18),
                "Options",
                Action::ToggleOptions,
                [0.12, 0.45, 0.85],
            ),
            Button::new(
                NdcRect::new(0.0, -0.22, 0.6, 0.18),
                "Main Menu",
                Action::GoToMenu,
                [0.8, 0.4, 0.15],
            ),
            Button::new(
                NdcRect::new(0.0, -0.42, 0.6, 0.18),
                "Quit",
                Action::Quit,
                [0.9, 0.1, 0.2],
            ),
        ];
        let hud_buttons = vec![
            Button::new(
                NdcRect::new(-0.9, 0.85, 0.12, 0.08),
                "Pause",
                Action::OpenPause,
                [0.2, 0.9, 0.2],
            ),
            Button::new(
                NdcRect::new(-0.74, 0.85, 0.22, 0.08),
                "Main Menu",
                Action::GoToMenu,
                [0.2, 0.6, 0.9],
            ),
        ];
        let sliders = vec![
            Slider::new(NdcRect::new(0.0, 0.10, 0.7, 0.10), "Triangle scale", 0.2, 3.0, 1.0),
            Slider::new(NdcRect::new(0.0, -0.10, 0.7, 0.10), "Triangle speed", 0.1, 3.0, 1.0),
        ];

        let rates = TransitionRates {
            fade: settings.fade_rate,
            overlay: settings.overlay_rate,
        };

        let mut overlay = Self {
            state: SceneState::new(),
            main_buttons,
            pause_buttons,
            hud_buttons,
            sliders,
            focus: FocusNavigator::new(settings.nav_repeat_delay),
            focus_list: Vec::new(),
            transitions: Transitions::new(rates),
            settings,
            pointer: None,
            pointer_held: false,
            gamepad_last_nav: None,
            gamepad_south_prev: false,
        };
        overlay.rebuild_focus();
        overlay
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn focus_list(&self) -> &[FocusTarget] {
        &self.focus_list
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus.index()
    }

    /// Currently focused control
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.index().and_then(|i| self.focus_list.get(i).copied())
    }

    pub fn quit_requested(&self) -> bool {
        self.state.quit_requested()
    }

    /// Value of the "Triangle scale" slider
    pub fn triangle_scale(&self) -> f32 {
        self.sliders[SCALE_SLIDER].value()
    }

    /// Value of the "Triangle speed" slider
    pub fn triangle_speed(&self) -> f32 {
        self.sliders[SPEED_SLIDER].value()
    }

    fn buttons(&self, group: ButtonGroup) -> &[Button] {
        match group {
            ButtonGroup::Main => &self.main_buttons,
            ButtonGroup::Pause => &self.pause_buttons,
            ButtonGroup::Hud => &self.hud_buttons,
        }
    }

    /// Rebuilds the focus list for the current state and clamps the focus
    pub fn rebuild_focus(&mut self) {
        let counts = ControlCounts {
            main: self.main_buttons.len(),
            pause: self.pause_buttons.len(),
            hud: self.hud_buttons.len(),
            sliders: self.sliders.len(),
        };
        self.focus_list = build_focus_list(self.state.focus_layer(), counts);
        self.focus.sync(self.focus_list.len());
    }

    fn apply(&mut self, action: Action) {
        debug!(?action, scene = ?self.state.scene, "Overlay action");
        self.state.apply(action);
        self.rebuild_focus();
    }

    /// Moves focus by `delta` entries (debounced)
    pub fn move_focus(&mut self, delta: isize, now: f64) -> bool {
        self.rebuild_focus();
        self.focus.step(delta, self.focus_list.len(), now)
    }

    /// Runs the focused button's action or toggles dragging on a slider
    pub fn activate_focused(&mut self) {
        self.rebuild_focus();
        match self.focused() {
            Some(FocusTarget::Button { group, index }) => {
                let action = self.buttons(group)[index].action;
                self.apply(action);
            }
            Some(FocusTarget::Slider(index)) => {
                let slider = &mut self.sliders[index];
                slider.dragging = !slider.dragging;
            }
            None => {}
        }
    }

    /// Nudges the focused slider by a normalized delta
    pub fn adjust_slider(&mut self, delta_norm: f32) {
        self.rebuild_focus();
        if let Some(FocusTarget::Slider(index)) = self.focused() {
            self.sliders[index].nudge(delta_norm);
        }
    }

    /// Handles a key press
    pub fn handle_key(&mut self, key: NavKey, now: f64) {
        let step = self.settings.slider_step;
        match key {
            NavKey::Escape => {
                if !self.state.toggle_pause() {
                    self.apply(Action::Quit);
                }
                self.rebuild_focus();
            }
            NavKey::Enter => self.activate_focused(),
            NavKey::Tab | NavKey::Down => {
                self.move_focus(1, now);
            }
            NavKey::Up => {
                self.move_focus(-1, now);
            }
            NavKey::Left => self.adjust_slider(-step),
            NavKey::Right => self.adjust_slider(step),
            NavKey::ToggleOptions => self.apply(Action::ToggleOptions),
            NavKey::TogglePause => {
                self.state.toggle_pause();
                self.rebuild_focus();
            }
            NavKey::Quit => self.apply(Action::Quit),
        }
    }

    /// Track of slider `index` as currently drawn, `None` while hidden
    pub fn slider_track(&self, index: usize) -> Option<NdcRect> {
        let slider = self.sliders.get(index)?;
        if !self.state.show_options {
            return None;
        }
        match self.state.scene {
            Scene::Home | Scene::Menu => {
                let panel_y = self.transitions.options_panel_y();
                Some(slider.rect.offset_y(panel_y - 0.04))
            }
            Scene::Playing if self.state.pause_menu_open => {
                Some(slider.rect.offset_y(PAUSE_OPTIONS_OFFSET))
            }
            Scene::Playing => None,
        }
    }

    /// Starts dragging the slider under `pos`, if any
    fn press_slider(&mut self, pos: [f32; 2]) -> bool {
        let hit = (0..self.sliders.len())
            .find(|&i| self.slider_track(i).is_some_and(|track| track.contains(pos)));
        let Some(index) = hit else {
            return false;
        };
        self.sliders[index].dragging = true;
        self.rebuild_focus();
        if let Some(pos) = self
            .focus_list
            .iter()
            .position(|t| *t == FocusTarget::Slider(index))
        {
            self.focus.focus(pos, self.focus_list.len());
        }
        true
    }

    fn press_button(&mut self, group: ButtonGroup, pos: [f32; 2]) -> bool {
        let action = self
            .buttons(group)
            .iter()
            .find(|b| b.contains(pos))
            .map(|b| b.action);
        match action {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Handles a left-button press at an NDC position
    pub fn handle_press(&mut self, pos: [f32; 2]) {
        self.pointer = Some(pos);
        match self.state.scene {
            Scene::Home | Scene::Menu => {
                if self.state.show_options {
                    self.press_slider(pos);
                } else {
                    self.press_button(ButtonGroup::Main, pos);
                }
            }
            Scene::Playing => {
                if self.state.pause_menu_open {
                    if self.state.show_options && self.press_slider(pos) {
                        return;
                    }
                    self.press_button(ButtonGroup::Pause, pos);
                } else {
                    self.press_button(ButtonGroup::Hud, pos);
                }
            }
        }
    }

    /// Updates pointer position and held state; drives slider dragging
    pub fn update_pointer(&mut self, pos: Option<[f32; 2]>, held: bool) {
        self.pointer = pos;
        if held {
            if let Some(pos) = pos {
                for index in 0..self.sliders.len() {
                    if !self.sliders[index].dragging {
                        continue;
                    }
                    if let Some(track) = self.slider_track(index) {
                        self.sliders[index].drag_to(pos[0], &track);
                    }
                }
            }
        } else if self.pointer_held {
            self.release_pointer();
        }
        self.pointer_held = held;
    }

    /// Ends any slider drag; used when a press and its release share a frame
    pub fn release_pointer(&mut self) {
        for slider in &mut self.sliders {
            slider.dragging = false;
        }
        self.pointer_held = false;
    }

    /// Applies one frame of gamepad input
    pub fn handle_gamepad(&mut self, pad: GamepadSnapshot, now: f64) {
        let dz = self.settings.gamepad_deadzone;
        let [ax, ay] = pad.stick;
        if ax.abs() > dz || ay.abs() > dz {
            let ready = self
                .gamepad_last_nav
                .is_none_or(|last| now - last > self.settings.gamepad_repeat);
            if ready {
                let step = self.settings.slider_step;
                if ay < -dz {
                    self.move_focus(-1, now);
                } else if ay > dz {
                    self.move_focus(1, now);
                } else if ax < -dz {
                    self.adjust_slider(-step);
                } else if ax > dz {
                    self.adjust_slider(step);
                }
                self.gamepad_last_nav = Some(now);
            }
        }

        let pressed = pad.south && !self.gamepad_south_prev;
        self.gamepad_south_prev = pad.south;
        if pressed {
            let ready = self
                .focus
                .since_last_nav(now)
                .is_none_or(|since| since > self.settings.activate_debounce);
            if ready {
                self.activate_focused();
                self.focus.mark_nav(now);
            }
        }
    }

    /// Per-frame update: rebuilds focus and advances transitions
    pub fn update(&mut self, dt: f32) {
        self.rebuild_focus();
        self.transitions.update(&self.state, dt);
    }

    fn is_hovered(&self, rect: &NdcRect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    fn is_focused(&self, target: FocusTarget) -> bool {
        self.focused() == Some(target)
    }

    fn draw_button_group(&self, list: &mut UiDrawList, group: ButtonGroup, alpha: f32) {
        for (index, button) in self.buttons(group).iter().enumerate() {
            let [r, g, b] = button.color;
            let a = if self.is_hovered(&button.rect) { 0.95 } else { 0.75 };
            list.rect(button.rect, [r, g, b, a], alpha);
            if self.is_focused(FocusTarget::Button { group, index }) {
                list.rect(button.rect.grow(0.04), [1.0, 1.0, 1.0, 0.12], alpha);
            }
            list.text(
                button.label.clone(),
                button.rect.left() + 0.02,
                button.rect.top() - 0.02,
                alpha,
            );
        }
    }

    fn draw_sliders(&self, list: &mut UiDrawList, alpha: f32) {
        for (index, slider) in self.sliders.iter().enumerate() {
            let Some(track) = self.slider_track(index) else {
                continue;
            };
            list.rect(track, [0.2, 0.2, 0.2, 0.95], alpha);
            if self.is_focused(FocusTarget::Slider(index)) {
                list.rect(track.grow(0.03), [1.0, 1.0, 1.0, 0.12], alpha);
            }
            let knob = NdcRect::new(slider.knob_x(&track), track.cy, 0.06, track.h + 0.02);
            let knob_color = if slider.dragging {
                [1.0, 1.0, 0.6, 1.0]
            } else {
                [0.9, 0.9, 0.2, 1.0]
            };
            list.rect(knob, knob_color, alpha);
            list.text(slider.label.clone(), track.left() + 0.02, track.top() - 0.02, alpha);
            list.text(
                format!("{:.2}", slider.value()),
                track.cx + 0.34,
                track.top() - 0.02,
                alpha,
            );
        }
    }

    /// Records this frame's overlay into `list`
    pub fn draw(&self, list: &mut UiDrawList, fps_label: &str) {
        let tr = &self.transitions;
        let state = &self.state;

        if is_visible(tr.home_alpha) {
            let alpha = tr.home_alpha;
            let title_y = tr.title_y();
            list.rect(NdcRect::new(0.0, title_y, 1.6, 0.34), [0.02, 0.02, 0.04, 0.7], alpha);
            list.text("MY AWESOME GAME", -0.6, title_y + 0.16, alpha);
            self.draw_button_group(list, ButtonGroup::Main, alpha);
            list.text(fps_label, -0.98, -0.95, alpha);
        }

        if is_visible(tr.menu_alpha) {
            let alpha = tr.menu_alpha;
            list.rect(NdcRect::new(0.0, 0.0, 2.0, 2.0), [0.0, 0.0, 0.0, 0.45], alpha);
            self.draw_button_group(list, ButtonGroup::Main, alpha);
            list.text(fps_label, -0.98, -0.95, alpha);
        }

        if state.show_options && matches!(state.scene, Scene::Home | Scene::Menu) {
            let alpha = tr.home_alpha.max(tr.menu_alpha);
            let panel_y = tr.options_panel_y();
            list.rect(NdcRect::new(0.0, panel_y, 0.8, 0.46), [0.08, 0.08, 0.08, 0.95], alpha);
            self.draw_sliders(list, alpha);
        }

        if state.scene == Scene::Playing {
            list.rect(NdcRect::new(-0.82, 0.88, 0.48, 0.12), [0.05, 0.05, 0.05, 0.8], 1.0);
            for (index, button) in self.hud_buttons.iter().enumerate() {
                let color = if index == 0 && state.paused {
                    [0.9, 0.5, 0.0, 1.0]
                } else {
                    let [r, g, b] = button.color;
                    [r, g, b, 1.0]
                };
                list.rect(button.rect, color, 1.0);
                if self.is_focused(FocusTarget::Button {
                    group: ButtonGroup::Hud,
                    index,
                }) {
                    list.rect(button.rect.grow(0.03), [1.0, 1.0, 1.0, 0.2], 1.0);
                }
            }
            list.text(if state.paused { "Paused" } else { "Playing" }, -0.78, 0.95, 1.0);
            list.text("Main Menu", -0.78, 0.87, 1.0);
            list.text(fps_label, 0.8, 0.95, 1.0);

            if is_visible(tr.pause_alpha) {
                let alpha = tr.pause_alpha;
                list.rect(NdcRect::new(0.0, 0.0, 1.2, 1.2), [0.02, 0.02, 0.02, 0.6], alpha);
                list.rect(NdcRect::new(0.0, 0.18, 0.64, 0.86), [0.08, 0.08, 0.08, 0.98], alpha);
                self.draw_button_group(list, ButtonGroup::Pause, alpha);
                if state.show_options {
                    list.rect(
                        NdcRect::new(0.0, PAUSE_OPTIONS_OFFSET, 0.8, 0.36),
                        [0.08, 0.08, 0.08, 0.95],
                        alpha,
                    );
                    self.draw_sliders(list, alpha);
                }
            }
        }
    }

    /// Window title used as a label when no font is available
    pub fn fallback_title(&self) -> String {
        let state = &self.state;
        let screen = match (state.scene, state.focus_layer()) {
            (_, FocusLayer::Options) => "Options - Up/Down select, Left/Right adjust",
            (Scene::Home, _) => "Home - MY AWESOME GAME",
            (Scene::Menu, _) => "Menu - Start / Options / Quit",
            (Scene::Playing, FocusLayer::PauseButtons) => {
                "Paused - Resume / Options / Main Menu / Quit"
            }
            (Scene::Playing, _) => "Playing - P to pause",
        };
        match self.focused_label() {
            Some(label) => format!("{screen} [{label}]"),
            None => screen.to_string(),
        }
    }

    /// Label of the focused control
    pub fn focused_label(&self) -> Option<&str> {
        match self.focused()? {
            FocusTarget::Button { group, index } => Some(self.buttons(group)[index].label.as_str()),
            FocusTarget::Slider(index) => Some(self.sliders[index].label.as_str()),
        }
    }
}

impl Default for MenuOverlay {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> MenuOverlay {
        MenuOverlay::default()
    }

    /// Runs enough frames for every transition to settle
    fn settle(ui: &mut MenuOverlay) {
        for _ in 0..120 {
            ui.update(1.0 / 30.0);
        }
    }

    #[test]
    fn test_starts_on_home_with_first_button_focused() {
        let ui = overlay();
        assert_eq!(ui.state().scene, Scene::Home);
        assert_eq!(ui.focused_label(), Some("Start"));
    }

    #[test]
    fn test_enter_on_start_begins_game() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        assert_eq!(ui.state().scene, Scene::Playing);
        assert_eq!(ui.focus_list().len(), 2);
    }

    #[test]
    fn test_down_then_enter_opens_options() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Down, 0.0);
        assert_eq!(ui.focused_label(), Some("Options"));
        ui.handle_key(NavKey::Enter, 0.1);
        assert!(ui.state().show_options);
        assert_eq!(ui.focused(), Some(FocusTarget::Slider(1)));
    }

    #[test]
    fn test_escape_quits_outside_game_and_pauses_inside() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Escape, 0.0);
        assert!(ui.quit_requested());

        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        ui.handle_key(NavKey::Escape, 0.1);
        assert!(ui.state().paused && ui.state().pause_menu_open);
        assert!(!ui.quit_requested());
        assert_eq!(ui.focused_label(), Some("Resume"));
        ui.handle_key(NavKey::Escape, 0.2);
        assert!(!ui.state().paused);
    }

    #[test]
    fn test_left_right_adjust_focused_slider() {
        let mut ui = overlay();
        ui.handle_key(NavKey::ToggleOptions, 0.0);
        assert_eq!(ui.focused(), Some(FocusTarget::Slider(0)));
        let before = ui.triangle_scale();
        ui.handle_key(NavKey::Right, 0.0);
        let expected = before + 0.02 * (3.0 - 0.2);
        assert!((ui.triangle_scale() - expected).abs() < 1e-5);
        ui.handle_key(NavKey::Left, 0.0);
        assert!((ui.triangle_scale() - before).abs() < 1e-5);
    }

    #[test]
    fn test_click_button_runs_action() {
        let mut ui = overlay();
        ui.handle_press([0.0, -0.36]);
        assert!(ui.quit_requested());

        let mut ui = overlay();
        ui.handle_press([0.4, 0.3]);
        assert_eq!(ui.state().scene, Scene::Playing);
    }

    #[test]
    fn test_click_outside_controls_does_nothing() {
        let mut ui = overlay();
        ui.handle_press([0.9, 0.9]);
        assert_eq!(*ui.state(), SceneState::new());
    }

    #[test]
    fn test_hud_clicks() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        ui.handle_press([-0.9, 0.85]);
        assert!(ui.state().pause_menu_open);

        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        ui.handle_press([-0.74, 0.85]);
        assert_eq!(ui.state().scene, Scene::Menu);
    }

    #[test]
    fn test_slider_drag_follows_pointer_and_releases() {
        let mut ui = overlay();
        ui.handle_key(NavKey::ToggleOptions, 0.0);
        settle(&mut ui);

        let track = ui.slider_track(SPEED_SLIDER).expect("options are open");
        ui.handle_press([track.cx, track.cy]);
        assert!(ui.sliders()[SPEED_SLIDER].dragging);
        assert_eq!(ui.focused(), Some(FocusTarget::Slider(SPEED_SLIDER)));

        ui.update_pointer(Some([track.right() + 0.5, track.cy]), true);
        assert!((ui.triangle_speed() - 3.0).abs() < 1e-6);
        ui.update_pointer(Some([track.left(), track.cy]), true);
        assert!((ui.triangle_speed() - 0.1).abs() < 1e-6);

        ui.update_pointer(Some([track.cx, track.cy]), false);
        assert!(!ui.sliders()[SPEED_SLIDER].dragging);
    }

    #[test]
    fn test_pause_options_sliders_are_clickable() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        ui.handle_key(NavKey::TogglePause, 0.0);
        ui.handle_key(NavKey::ToggleOptions, 0.0);
        let track = ui.slider_track(SCALE_SLIDER).expect("pause options open");
        assert!((track.cy - (0.10 - 0.48)).abs() < 1e-6);
        ui.handle_press([track.cx, track.cy]);
        assert!(ui.sliders()[SCALE_SLIDER].dragging);
        assert!(!ui.quit_requested());
    }

    #[test]
    fn test_gamepad_navigation_and_activation() {
        let mut ui = overlay();
        let down = GamepadSnapshot {
            stick: [0.0, 0.9],
            south: false,
        };
        ui.handle_gamepad(down, 0.0);
        assert_eq!(ui.focused_label(), Some("Options"));
        // Held stick repeats only after the repeat interval
        ui.handle_gamepad(down, 0.1);
        assert_eq!(ui.focused_label(), Some("Options"));
        ui.handle_gamepad(down, 0.4);
        assert_eq!(ui.focused_label(), Some("Quit"));

        let press = GamepadSnapshot {
            stick: [0.0, 0.0],
            south: true,
        };
        // Too soon after the last navigation
        ui.handle_gamepad(press, 0.45);
        assert!(!ui.quit_requested());
        ui.handle_gamepad(GamepadSnapshot::default(), 0.5);
        ui.handle_gamepad(press, 0.9);
        assert!(ui.quit_requested());
    }

    #[test]
    fn test_gamepad_deadzone_ignores_small_motion() {
        let mut ui = overlay();
        ui.handle_gamepad(
            GamepadSnapshot {
                stick: [0.3, -0.4],
                south: false,
            },
            0.0,
        );
        assert_eq!(ui.focused_label(), Some("Start"));
    }

    #[test]
    fn test_draw_home_contains_labels() {
        let mut ui = overlay();
        settle(&mut ui);
        let mut list = UiDrawList::new();
        ui.draw(&mut list, "FPS: 60.0");
        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"MY AWESOME GAME"));
        assert!(texts.contains(&"Start"));
        assert!(texts.contains(&"FPS: 60.0"));
        assert!(!texts.contains(&"Resume"));
    }

    #[test]
    fn test_draw_pause_panel() {
        let mut ui = overlay();
        ui.handle_key(NavKey::Enter, 0.0);
        ui.handle_key(NavKey::TogglePause, 0.0);
        settle(&mut ui);
        let mut list = UiDrawList::new();
        ui.draw(&mut list, "FPS: 0.0");
        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"Resume"));
        assert!(texts.contains(&"Paused"));
        assert!(!texts.contains(&"MY AWESOME GAME"));
    }

    #[test]
    fn test_fallback_title_names_focus() {
        let ui = overlay();
        assert_eq!(ui.fallback_title(), "Home - MY AWESOME GAME [Start]");
    }
}
