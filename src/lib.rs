#![warn(missing_docs)]

//! # eggtimer
//!
//! A single-screen terminal egg timer built on [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs):
//! pick a duration with a slider, start the countdown, and get a desktop
//! notification when it finishes.
//!
//! Every piece follows the Elm Architecture: models own their state,
//! `update()` consumes messages and returns commands, `view()` renders a
//! string. The pieces compose into [`app::App`], the model the binary runs.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | `countdown` | The timer state machine: duration, once-per-second ticks, Idle/Running phase |
//! | `slider` | Bounded duration control (0–15 minutes) rendered as a bar |
//! | `notify` | Notification sink trait and the desktop implementation |
//! | `key` | Type-safe key bindings with help text |
//! | `help` | Single-line help footer generated from bindings |
//! | `app` | The screen itself, wiring the above together |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use eggtimer::app::App;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<App>::builder().alt_screen(true).build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod countdown;
pub mod help;
pub mod key;
pub mod notify;
pub mod slider;

pub use app::App;
pub use countdown::{
    format_clock, new as countdown_new, CompletedMsg as CountdownCompletedMsg,
    Model as Countdown, Phase, StartError, TickMsg as CountdownTickMsg,
};
pub use help::Model as HelpModel;
pub use key::{Binding, Help as KeyHelp, KeyPress};
pub use notify::{DesktopNotifier, Notifier, NotifyError, COMPLETION_NOTIFICATION_ID};
pub use slider::{new as slider_new, Model as Slider};
