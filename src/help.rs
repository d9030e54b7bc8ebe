//! Single-line help footer generated from key bindings.
//!
//! The screen only ever needs the compact form: a horizontal
//! `key desc • key desc` line built from the application's key map, with
//! adaptive colors for light and dark terminals.

use crate::key;
use lipgloss_extras::prelude::*;

/// Key bindings a model exposes to the help view.
pub trait KeyMap {
    /// The bindings shown in the footer, in display order.
    fn short_help(&self) -> Vec<&key::Binding>;
}

/// Styles for the pieces of the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for key labels.
    pub key: Style,
    /// Style for descriptions.
    pub desc: Style,
    /// Style for the separator between entries.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss_extras::lipgloss::AdaptiveColor;

        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// The help model: separator text plus styling.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text rendered between entries.
    pub separator: String,
    /// Styling for the line's pieces.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            separator: " • ".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with the default separator and styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the footer for the given key map.
    ///
    /// Disabled bindings and bindings without help text are skipped, so a
    /// key map can hold context-dependent entries without the caller
    /// filtering them.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        self.short_help_view(keymap.short_help())
    }

    fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.separator);

        let mut builder = String::new();
        for kb in bindings {
            if !kb.enabled() || kb.help().key.is_empty() {
                continue;
            }
            if !builder.is_empty() {
                builder.push_str(&separator);
            }
            let help = kb.help();
            let key_part = self.styles.key.clone().inline(true).render(&help.key);
            let desc_part = self.styles.desc.clone().inline(true).render(&help.desc);
            builder.push_str(&format!("{} {}", key_part, desc_part));
        }
        builder
    }
}
