//! Bounded duration selector rendered as a horizontal bar.
//!
//! This is the screen's duration control: an integer value between 0 and
//! [`countdown::MAX_DURATION_SECS`](crate::countdown::MAX_DURATION_SECS)
//! seconds, adjusted with the arrow keys and drawn as a filled bar in the
//! style of a progress indicator. The application disables the control while
//! a countdown runs and re-enables it when the run ends.
//!
//! # Basic Usage
//!
//! ```rust
//! use eggtimer::slider;
//!
//! let mut control = slider::new(60);
//! control.set_value(300);
//! assert_eq!(control.value(), 300);
//!
//! // Values clamp at the bounds.
//! control.set_value(10_000);
//! assert_eq!(control.value(), slider::MAX_VALUE);
//! ```

use crate::countdown::MAX_DURATION_SECS;
use crate::key;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Lower bound of the control; zero is a selectable value.
pub const MIN_VALUE: u32 = 0;

/// Upper bound of the control, matching the countdown's maximum duration.
pub const MAX_VALUE: u32 = MAX_DURATION_SECS;

const DEFAULT_WIDTH: i32 = 40;
const STEP_SMALL: u32 = 5;
const STEP_LARGE: u32 = 60;

/// Key bindings for adjusting the slider.
#[derive(Debug, Clone)]
pub struct SliderKeyMap {
    /// Step down by 5 seconds.
    pub decrease: key::Binding,
    /// Step up by 5 seconds.
    pub increase: key::Binding,
    /// Step down by a minute.
    pub decrease_big: key::Binding,
    /// Step up by a minute.
    pub increase_big: key::Binding,
}

impl Default for SliderKeyMap {
    fn default() -> Self {
        Self {
            decrease: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/→", "adjust"),
            increase: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("", ""),
            decrease_big: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↑/↓", "± a minute"),
            increase_big: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("", ""),
        }
    }
}

/// Slider model: current value, bounds, rendering configuration.
#[derive(Debug, Clone)]
pub struct Model {
    value: u32,
    enabled: bool,

    /// Total width of the bar in characters, excluding the value label.
    pub width: i32,
    /// Character used for the filled portion of the bar.
    pub full: char,
    /// Color of the filled portion.
    pub full_color: String,
    /// Character used for the empty portion of the bar.
    pub empty: char,
    /// Color of the empty portion.
    pub empty_color: String,

    /// Key bindings consulted by `update()`.
    pub keymap: SliderKeyMap,
}

/// Creates a slider preset to the given value, clamped to the bounds.
pub fn new(value: u32) -> Model {
    Model {
        value: value.min(MAX_VALUE),
        enabled: true,
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: "#7571F9".to_string(),
        empty: '░',
        empty_color: "#606060".to_string(),
        keymap: SliderKeyMap::default(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new(crate::countdown::DEFAULT_DURATION_SECS)
    }
}

impl Model {
    /// Returns the current value in seconds.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Sets the value directly, clamped to the bounds.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(MAX_VALUE);
    }

    /// Returns whether the control accepts input.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the control. A disabled slider ignores key events,
    /// renders dimmed, and its bindings drop out of help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.keymap.decrease.set_enabled(enabled);
        self.keymap.increase.set_enabled(enabled);
        self.keymap.decrease_big.set_enabled(enabled);
        self.keymap.increase_big.set_enabled(enabled);
    }

    /// Handles adjustment keys while the control is enabled.
    ///
    /// The small step moves by 5 seconds, the large step by a minute, both
    /// clamped at the bounds. Returns no command; callers read the new value
    /// with [`value`](Self::value).
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.enabled {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.decrease.matches(key_msg) {
                self.value = self.value.saturating_sub(STEP_SMALL);
            } else if self.keymap.increase.matches(key_msg) {
                self.value = (self.value + STEP_SMALL).min(MAX_VALUE);
            } else if self.keymap.decrease_big.matches(key_msg) {
                self.value = self.value.saturating_sub(STEP_LARGE);
            } else if self.keymap.increase_big.matches(key_msg) {
                self.value = (self.value + STEP_LARGE).min(MAX_VALUE);
            }
        }
        None
    }

    /// Renders the bar: filled up to the current value's share of the range.
    pub fn view(&self) -> String {
        let tw = std::cmp::max(0, self.width);
        let ratio = self.value as f64 / MAX_VALUE as f64;
        let fw = std::cmp::max(0, std::cmp::min(tw, ((tw as f64) * ratio).round() as i32));

        let full_style = if self.enabled {
            Style::new().foreground(lipgloss::Color::from(self.full_color.as_str()))
        } else {
            Style::new()
                .foreground(lipgloss::Color::from(self.full_color.as_str()))
                .faint(true)
        };
        let empty_style = Style::new().foreground(lipgloss::Color::from(self.empty_color.as_str()));

        let mut bar = String::new();
        bar.push_str(&full_style.render(&self.full.to_string()).repeat(fw as usize));
        bar.push_str(
            &empty_style
                .render(&self.empty.to_string())
                .repeat((tw - fw) as usize),
        );
        bar
    }
}
