//! Focus list and debounced focus navigation

use super::scene::FocusLayer;

/// Button collections owned by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonGroup {
    /// Home and menu screens share one set of buttons
    Main,
    Pause,
    Hud,
}

/// One entry of the focus list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Button { group: ButtonGroup, index: usize },
    Slider(usize),
}

/// Control counts used to expand a [`FocusLayer`] into a focus list
#[derive(Debug, Clone, Copy)]
pub struct ControlCounts {
    pub main: usize,
    pub pause: usize,
    pub hud: usize,
    pub sliders: usize,
}

/// Builds the ordered focus list for a layer, in draw order
pub fn build_focus_list(layer: FocusLayer, counts: ControlCounts) -> Vec<FocusTarget> {
    let buttons = |group, n| (0..n).map(move |index| FocusTarget::Button { group, index });
    match layer {
        FocusLayer::MainButtons => buttons(ButtonGroup::Main, counts.main).collect(),
        FocusLayer::PauseButtons => buttons(ButtonGroup::Pause, counts.pause).collect(),
        FocusLayer::Hud => buttons(ButtonGroup::Hud, counts.hud).collect(),
        FocusLayer::Options => (0..counts.sliders).map(FocusTarget::Slider).collect(),
    }
}

/// Tracks the focused index and rate-limits navigation
#[derive(Debug, Clone)]
pub struct FocusNavigator {
    index: Option<usize>,
    repeat_delay: f64,
    last_nav: Option<f64>,
}

impl FocusNavigator {
    /// Creates a navigator with focus on the first entry
    pub fn new(repeat_delay: f64) -> Self {
        Self {
            index: Some(0),
            repeat_delay,
            last_nav: None,
        }
    }

    /// Focused index, `None` when the list is empty
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Re-clamps the focus after the list was rebuilt with `len` entries
    pub fn sync(&mut self, len: usize) {
        self.index = if len == 0 {
            None
        } else {
            Some(self.index.unwrap_or(0).min(len - 1))
        };
    }

    /// Moves focus by `delta`, wrapping around the list
    ///
    /// Returns false when the list is empty or the repeat delay since the
    /// last accepted move has not elapsed.
    pub fn step(&mut self, delta: isize, len: usize, now: f64) -> bool {
        self.sync(len);
        let Some(current) = self.index else {
            return false;
        };
        if let Some(last) = self.last_nav
            && now - last < self.repeat_delay
        {
            return false;
        }
        self.last_nav = Some(now);
        let next = (current as isize + delta).rem_euclid(len as isize);
        self.index = Some(next as usize);
        true
    }

    /// Focuses a specific entry directly (pointer interaction)
    pub fn focus(&mut self, index: usize, len: usize) {
        self.index = Some(index);
        self.sync(len);
    }

    /// Seconds since the last accepted navigation, `None` if there was none
    pub fn since_last_nav(&self, now: f64) -> Option<f64> {
        self.last_nav.map(|last| now - last)
    }

    /// Records `now` as the latest navigation time
    pub fn mark_nav(&mut self, now: f64) {
        self.last_nav = Some(now);
    }
}
