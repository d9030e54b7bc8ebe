//! Notification sink: posts the completion alert outside the terminal.
//!
//! The [`Notifier`] trait is the seam between the screen and the host
//! platform. The real implementation, [`DesktopNotifier`], goes through the
//! desktop notification service via `notify-rust`; tests substitute a
//! recording implementation.

use thiserror::Error;

/// Fixed identifier for the completion alert. Reusing the same id makes
/// repeated completions replace the previous notification instead of
/// stacking.
pub const COMPLETION_NOTIFICATION_ID: u32 = 1;

/// Error posting a notification. Surfaced in the status line; never fatal.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification service rejected or never received the request.
    #[error("could not post notification: {0}")]
    Post(#[from] notify_rust::error::Error),
}

/// The host platform's mechanism for posting a user-visible alert.
pub trait Notifier {
    /// Posts a one-shot alert with the given title and body.
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Posts desktop notifications with a fixed id and the default alert sound.
///
/// The application name is set at construction; it is the registration-time
/// concern (the notification channel analogue) and plays no part in the
/// per-completion call.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    appname: String,
}

impl DesktopNotifier {
    /// Creates a sink registered under the given application name.
    pub fn new(appname: impl Into<String>) -> Self {
        Self {
            appname: appname.into(),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let mut notification = notify_rust::Notification::new();
        notification.summary(title).body(body).appname(&self.appname);

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            notification.id(COMPLETION_NOTIFICATION_ID);
            notification.sound_name("alarm-clock-elapsed");
        }

        #[cfg(target_os = "macos")]
        notification.sound_name("Glass");

        notification.show()?;
        Ok(())
    }
}
