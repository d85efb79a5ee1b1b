//! Outbound notification port.
//!
//! Pages report outcomes (a login succeeded, a table was booked, a booked
//! table was inspected) as fire-and-forget notifications. How they are shown
//! is up to the adapter: the terminal front end prints them, and
//! [`TracingNotifier`] only records them as structured events.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{info, warn};

/// How long a successful login or booking notice stays visible.
pub const SUCCESS_DURATION: Duration = Duration::from_secs(2);

/// How long the details of an inspected reservation stay visible.
pub const INFO_DURATION: Duration = Duration::from_secs(3);

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An action completed.
    Success,
    /// Read-only details about existing state.
    Info,
}

impl NotificationKind {
    /// Icon shown beside the title.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Info => "🍽️",
        }
    }
}

/// A transient message for the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Visual category.
    pub kind: NotificationKind,
    /// Headline text.
    pub title: String,
    /// Optional second line.
    pub description: Option<String>,
    /// How long the notification stays on screen.
    pub duration: Duration,
}

impl Notification {
    /// Builds a success notification shown for [`SUCCESS_DURATION`].
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: None,
            duration: SUCCESS_DURATION,
        }
    }

    /// Builds an info notification shown for [`INFO_DURATION`].
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: None,
            duration: INFO_DURATION,
        }
    }

    /// Attaches a description line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Port for presenting notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Presents a notification. Delivery failures are the adapter's concern.
    fn notify(&self, notification: Notification);
}

/// Adapter that records notifications as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            kind = ?notification.kind,
            title = %notification.title,
            description = notification.description.as_deref().unwrap_or_default(),
            duration_ms = u64::try_from(notification.duration.as_millis()).unwrap_or(u64::MAX),
            "notification"
        );
    }
}

/// Adapter that prints notifications to standard output.
///
/// Each notification is also forwarded to [`TracingNotifier`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = render_line(&notification);
        TracingNotifier.notify(notification);
        if let Err(error) = writeln!(io::stdout().lock(), "{line}") {
            warn!(%error, "failed to print notification");
        }
    }
}

fn render_line(notification: &Notification) -> String {
    let icon = notification.kind.icon();
    match &notification.description {
        Some(description) => format!("{icon} {}: {description}", notification.title),
        None => format!("{icon} {}", notification.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn success_notifications_last_two_seconds() {
        let notification = Notification::success("Login successful!");
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.duration, Duration::from_secs(2));
        assert!(notification.description.is_none());
    }

    #[rstest]
    fn info_notifications_last_three_seconds() {
        let notification = Notification::info("Table 4 Reservation")
            .with_description("Owen Grady - 2 dinos at 19:30");
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(notification.duration, Duration::from_secs(3));
        assert_eq!(
            notification.description.as_deref(),
            Some("Owen Grady - 2 dinos at 19:30")
        );
    }

    #[rstest]
    #[case(Notification::success("Login successful!"), "✅ Login successful!")]
    #[case(
        Notification::info("Table 4 Reservation").with_description("Owen Grady - 1 dino at 18:00"),
        "🍽️ Table 4 Reservation: Owen Grady - 1 dino at 18:00"
    )]
    fn console_lines_show_icon_title_and_description(
        #[case] notification: Notification,
        #[case] expected: &str,
    ) {
        assert_eq!(render_line(&notification), expected);
    }

    #[rstest]
    fn tracing_notifier_accepts_any_notification() {
        TracingNotifier.notify(Notification::success("Account created successfully!"));
    }
}
