// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing notifications.
//!
//! Every permission denial, validation rejection, and success report goes
//! through the notifier; the rendering layer decides how to present it
//! (alert, toast, banner).

/// The severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational, no action succeeded or failed.
    Info,
    /// A mutation completed successfully.
    Success,
    /// A denial, rejection, or failure.
    Error,
}

/// One user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity.
    pub kind: NoticeKind,
    /// The human-readable message.
    pub message: String,
}

impl Notification {
    /// Creates an informational notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// The user-facing alert collaborator.
pub trait Notifier {
    /// Presents one notification to the user.
    fn notify(&mut self, notification: Notification);
}
