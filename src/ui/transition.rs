//! Fade and slide values for the overlay layers

use super::easing::{approach, ease_out_cubic, lerp, smoothstep};
use super::scene::{Scene, SceneState};

/// Slide offset of the options panel while hidden
pub const OPTIONS_HIDDEN_SLIDE: f32 = -0.6;

/// Layers with an alpha at or below this are skipped
pub const VISIBLE_EPSILON: f32 = 0.001;

/// Interpolation rates in 1/s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRates {
    pub fade: f32,
    pub overlay: f32,
}

impl Default for TransitionRates {
    fn default() -> Self {
        Self {
            fade: 6.0,
            overlay: 8.0,
        }
    }
}

/// Current transition values, advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transitions {
    pub home_alpha: f32,
    pub menu_alpha: f32,
    pub pause_alpha: f32,
    pub options_slide: f32,
    rates: TransitionRates,
}

impl Transitions {
    /// Everything starts hidden and fades in on the first frames
    pub fn new(rates: TransitionRates) -> Self {
        Self {
            home_alpha: 0.0,
            menu_alpha: 0.0,
            pause_alpha: 0.0,
            options_slide: OPTIONS_HIDDEN_SLIDE,
            rates,
        }
    }

    /// Target values for a given state: (home, menu, pause, slide)
    pub fn targets(state: &SceneState) -> (f32, f32, f32, f32) {
        let on = |b: bool| if b { 1.0 } else { 0.0 };
        (
            on(state.scene == Scene::Home),
            on(state.scene == Scene::Menu),
            on(state.pause_menu_open),
            if state.show_options {
                0.0
            } else {
                OPTIONS_HIDDEN_SLIDE
            },
        )
    }

    /// Advances all values toward the targets of `state`
    pub fn update(&mut self, state: &SceneState, dt: f32) {
        let (home, menu, pause, slide) = Self::targets(state);
        self.home_alpha = approach(self.home_alpha, home, dt, self.rates.fade);
        self.menu_alpha = approach(self.menu_alpha, menu, dt, self.rates.fade);
        self.pause_alpha = approach(self.pause_alpha, pause, dt, self.rates.overlay);
        self.options_slide = approach(self.options_slide, slide, dt, self.rates.overlay);
    }

    /// Vertical center of the home title panel
    pub fn title_y(&self) -> f32 {
        lerp(0.82, 0.62, smoothstep(self.home_alpha.clamp(0.0, 1.0)))
    }

    /// Vertical center of the options panel on the home/menu screens
    pub fn options_panel_y(&self) -> f32 {
        let t = ((self.options_slide - OPTIONS_HIDDEN_SLIDE) / -OPTIONS_HIDDEN_SLIDE).clamp(0.0, 1.0);
        lerp(-0.48, 0.04, ease_out_cubic(t))
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new(TransitionRates::default())
    }
}

/// Returns true if a layer with this alpha should be drawn
pub fn is_visible(alpha: f32) -> bool {
    alpha > VISIBLE_EPSILON
}
