//! The egg timer screen: wires the countdown, the duration slider and the
//! notification sink into one bubbletea-rs model.
//!
//! All state transitions happen inside [`App::update`] on the program's
//! single task; the runtime serializes key events and scheduled ticks, so no
//! locking is involved anywhere in this crate.

use crate::countdown::{self, CompletedMsg, StartError};
use crate::help;
use crate::key;
use crate::notify::{DesktopNotifier, Notifier};
use crate::slider;
use bubbletea_rs::{quit, tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::time::Duration;

const APP_NAME: &str = "eggtimer";
const NOTIFICATION_TITLE: &str = "Egg Timer";
const NOTIFICATION_BODY: &str = "Your egg is ready! 🥚";
const READY_STATUS: &str = "Egg is ready! 🥚";

/// How long a transient status line stays on screen.
const STATUS_VISIBLE_SECS: u64 = 4;

/// Message that clears the transient status line.
///
/// Carries the sequence number of the status it was scheduled for; a newer
/// status keeps the line alive past an older expiry.
#[derive(Debug, Clone)]
pub struct StatusExpiredMsg {
    seq: u64,
}

/// Application-level key bindings. Duration adjustment lives in the slider's
/// own key map.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    /// The alternating Start/Cancel trigger.
    pub toggle: key::Binding,
    /// Leave the application.
    pub quit: key::Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            toggle: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char('s')])
                .with_help("enter/s", "start/cancel"),
            quit: key::Binding::new(vec![
                key::KeyPress::from(KeyCode::Char('q')),
                key::KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q", "quit"),
        }
    }
}

/// Styles for the screen's fixed elements.
#[derive(Debug, Clone)]
pub struct AppStyles {
    /// The screen title.
    pub title: Style,
    /// The large `MM:SS` readout.
    pub clock: Style,
    /// The Start/Cancel trigger label.
    pub button: Style,
    /// The transient status line.
    pub status: Style,
}

impl Default for AppStyles {
    fn default() -> Self {
        use lipgloss_extras::lipgloss::AdaptiveColor;

        Self {
            title: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#874BFD",
                Dark: "#7D56F4",
            }),
            clock: Style::new().bold(true),
            button: Style::new().bold(true).foreground(lipgloss::Color::from("#7571F9")),
            status: Style::new().italic(true).foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }
}

/// The top-level model for the egg timer screen.
pub struct App {
    countdown: countdown::Model,
    slider: slider::Model,
    notifier: Box<dyn Notifier + Send>,
    keymap: AppKeyMap,
    help: help::Model,
    styles: AppStyles,
    status: String,
    status_seq: u64,
}

impl App {
    /// Builds the screen around the given notification sink.
    pub fn new(notifier: Box<dyn Notifier + Send>) -> Self {
        let countdown = countdown::Model::default();
        let slider = slider::new(countdown.configured_secs());
        Self {
            countdown,
            slider,
            notifier,
            keymap: AppKeyMap::default(),
            help: help::Model::new(),
            styles: AppStyles::default(),
            status: String::new(),
            status_seq: 0,
        }
    }

    /// The trigger button's current label, alternating with the phase.
    pub fn button_label(&self) -> &'static str {
        if self.countdown.running() {
            "Cancel"
        } else {
            "Start"
        }
    }

    /// The transient status line; empty when nothing is showing.
    pub fn status(&self) -> &str {
        &self.status
    }

    // Replaces the status line and schedules its expiry.
    fn set_status(&mut self, status: String) -> Cmd {
        self.status = status;
        self.status_seq += 1;
        let seq = self.status_seq;
        bubbletea_tick(Duration::from_secs(STATUS_VISIBLE_SECS), move |_| {
            Box::new(StatusExpiredMsg { seq }) as Msg
        })
    }

    // Start or cancel, depending on the phase.
    fn toggle(&mut self) -> Option<Cmd> {
        if self.countdown.running() {
            self.countdown.cancel();
            self.slider.set_enabled(true);
            self.status.clear();
            return None;
        }
        match self.countdown.start() {
            Ok(cmd) => {
                self.slider.set_enabled(false);
                self.status.clear();
                Some(cmd)
            }
            Err(err @ StartError::InvalidDuration) => Some(self.set_status(err.to_string())),
        }
    }

    // Countdown reached zero: re-enable the control, post the alert, show
    // the transient completion message.
    fn on_complete(&mut self) -> Option<Cmd> {
        self.slider.set_enabled(true);
        let status = match self.notifier.notify(NOTIFICATION_TITLE, NOTIFICATION_BODY) {
            Ok(()) => READY_STATUS.to_string(),
            Err(err) => err.to_string(),
        };
        Some(self.set_status(status))
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = App::new(Box::new(DesktopNotifier::new(APP_NAME)));
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.quit.matches(key_msg) {
                return Some(quit());
            }
            if self.keymap.toggle.matches(key_msg) {
                return self.toggle();
            }

            // Everything else is a potential duration adjustment; the slider
            // ignores it while disabled.
            let forwarded = Box::new(KeyMsg {
                key: key_msg.key,
                modifiers: key_msg.modifiers,
            }) as Msg;
            self.slider.update(forwarded);
            self.countdown.set_duration(self.slider.value());
            return None;
        }

        if msg.downcast_ref::<countdown::TickMsg>().is_some() {
            return self.countdown.update(msg);
        }

        if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
            if done.id == self.countdown.id() {
                return self.on_complete();
            }
            return None;
        }

        if let Some(expired) = msg.downcast_ref::<StatusExpiredMsg>() {
            if expired.seq == self.status_seq {
                self.status.clear();
            }
            return None;
        }

        None
    }

    fn view(&self) -> String {
        let title = self.styles.title.render("Egg Timer");
        let clock = self.styles.clock.render(&self.countdown.view());
        let button = self.styles.button.render(&format!("[ {} ]", self.button_label()));
        let status = if self.status.is_empty() {
            String::new()
        } else {
            self.styles.status.render(&self.status)
        };

        format!(
            "\n  {}\n\n  {}\n\n  {}\n\n  {}\n\n  {}\n  {}\n",
            title,
            clock,
            self.slider.view(),
            button,
            status,
            self.help.view(self),
        )
    }
}

impl help::KeyMap for App {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.slider.keymap.decrease,
            &self.slider.keymap.decrease_big,
            &self.keymap.toggle,
            &self.keymap.quit,
        ]
    }
}
