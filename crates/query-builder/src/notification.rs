//! User-facing notifications. Delivering them is up to the collaborator.

/// How prominently a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            level: Level::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            level: Level::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            level: Level::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Shows notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Used when nobody is watching, e.g. from the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            level,
            title,
            message,
        } = notification;
        match level {
            Level::Info => tracing::info!(%title, "{message}"),
            Level::Warning => tracing::warn!(%title, "{message}"),
            Level::Error => tracing::error!(
                meta.signal_type = "log",
                event.domain = "query_builder",
                event.name = %title,
                name = %title,
                body = %message,
                error = true,
            ),
        }
    }
}
