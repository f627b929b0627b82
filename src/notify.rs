//! Best-effort completion notifications.

use tracing::{debug, info};

pub const NOTIFICATION_TITLE: &str = "Internship Daily Tracker";
pub const NOTIFICATION_BODY: &str = "🔥 All platforms checked! Great job!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not yet asked.
    Default,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Granted => "granted",
            Permission::Denied => "denied",
            Permission::Default => "default",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

pub trait Notifier: Send + Sync {
    /// `None` when the environment has no notification capability.
    fn permission(&self) -> Option<Permission>;

    fn request_permission(&self) -> Permission;

    fn show(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Shows the completion notification if the environment allows it. Never fails.
pub fn notify_completion(notifier: &dyn Notifier, just_completed: bool) {
    if !just_completed {
        return;
    }
    let permission = match notifier.permission() {
        None | Some(Permission::Denied) => return,
        Some(Permission::Granted) => Permission::Granted,
        Some(Permission::Default) => notifier.request_permission(),
    };
    if permission != Permission::Granted {
        return;
    }
    if let Err(err) = notifier.show(NOTIFICATION_TITLE, NOTIFICATION_BODY) {
        debug!("{err}");
    }
}

/// Asks once for permission; a no-op when already decided or unsupported.
pub fn request_permission(notifier: &dyn Notifier) -> Option<Permission> {
    match notifier.permission()? {
        Permission::Default => Some(notifier.request_permission()),
        decided => Some(decided),
    }
}

/// Server-side notifier that reports completions through the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn permission(&self) -> Option<Permission> {
        Some(Permission::Granted)
    }

    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn show(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        info!(%title, "{body}");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DisabledNotifier;

impl Notifier for DisabledNotifier {
    fn permission(&self) -> Option<Permission> {
        None
    }

    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn show(&self, _title: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError("notifications are disabled".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeNotifier {
        permission: Mutex<Option<Permission>>,
        answer: Permission,
        fail: bool,
        shown: Mutex<Vec<String>>,
        requests: Mutex<u32>,
    }

    impl FakeNotifier {
        fn new(permission: Option<Permission>, answer: Permission) -> Self {
            Self {
                permission: Mutex::new(permission),
                answer,
                fail: false,
                shown: Mutex::new(Vec::new()),
                requests: Mutex::new(0),
            }
        }

        fn shown(&self) -> usize {
            self.shown.lock().unwrap().len()
        }
    }

    impl Notifier for FakeNotifier {
        fn permission(&self) -> Option<Permission> {
            *self.permission.lock().unwrap()
        }

        fn request_permission(&self) -> Permission {
            *self.requests.lock().unwrap() += 1;
            *self.permission.lock().unwrap() = Some(self.answer);
            self.answer
        }

        fn show(&self, title: &str, _body: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError("boom".into()));
            }
            self.shown.lock().unwrap().push(title.to_string());
            Ok(())
        }
    }

    #[test]
    fn granted_shows_once_per_signal() {
        let notifier = FakeNotifier::new(Some(Permission::Granted), Permission::Granted);
        notify_completion(&notifier, false);
        assert_eq!(notifier.shown(), 0);
        notify_completion(&notifier, true);
        assert_eq!(notifier.shown(), 1);
        assert_eq!(notifier.shown.lock().unwrap()[0], NOTIFICATION_TITLE);
    }

    #[test]
    fn undecided_permission_is_requested_first() {
        let notifier = FakeNotifier::new(Some(Permission::Default), Permission::Granted);
        notify_completion(&notifier, true);
        assert_eq!(*notifier.requests.lock().unwrap(), 1);
        assert_eq!(notifier.shown(), 1);

        let refused = FakeNotifier::new(Some(Permission::Default), Permission::Denied);
        notify_completion(&refused, true);
        assert_eq!(refused.shown(), 0);
    }

    #[test]
    fn denied_or_unsupported_is_silent() {
        let denied = FakeNotifier::new(Some(Permission::Denied), Permission::Granted);
        notify_completion(&denied, true);
        assert_eq!(denied.shown(), 0);
        assert_eq!(*denied.requests.lock().unwrap(), 0);

        notify_completion(&DisabledNotifier, true);
    }

    #[test]
    fn show_failure_is_swallowed() {
        let mut notifier = FakeNotifier::new(Some(Permission::Granted), Permission::Granted);
        notifier.fail = true;
        notify_completion(&notifier, true);
        assert_eq!(notifier.shown(), 0);
    }

    #[test]
    fn permission_request_only_asks_when_undecided() {
        let notifier = FakeNotifier::new(Some(Permission::Default), Permission::Granted);
        assert_eq!(request_permission(&notifier), Some(Permission::Granted));
        assert_eq!(request_permission(&notifier), Some(Permission::Granted));
        assert_eq!(*notifier.requests.lock().unwrap(), 1);
        assert_eq!(request_permission(&DisabledNotifier), None);
    }
}
