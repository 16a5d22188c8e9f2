//! Notice registration collaborator
//!
//! The gate never renders anything. When it is time to ask for a review it
//! hands a [`Notice`] to whatever [`NoticeRegistrar`] the host provided; that
//! side owns display timing, dismissal and redisplay suppression.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::{
    config::Scope,
    errors::{ReviewError, Result},
};

/// Visual style of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStyle {
    /// Success style, used for the review prompt
    Updated,
}

/// Who may see a notice and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeOptions {
    pub scope: Scope,
    pub cap:   String,
}

/// One registered notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub key:     String,
    pub style:   NoticeStyle,
    /// Already sanitized markup
    pub message: String,
    pub options: NoticeOptions,
}

/// External notice system
#[cfg_attr(test, mockall::automock)]
pub trait NoticeRegistrar: Send + Sync {
    fn register_notice(&self, key: &str, style: NoticeStyle, message: &str, options: &NoticeOptions);
}

/// In-process registrar that keeps notices until drained
///
/// Registering a key twice replaces the earlier notice.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the pending notices
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all pending notices
    pub fn drain(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }

    /// Serialize pending notices for a renderer
    pub fn to_json(&self) -> Result<String> {
        let notices = self
            .notices
            .lock()
            .map_err(|_| ReviewError::Other("notice queue lock poisoned".into()))?;
        Ok(serde_json::to_string(&*notices)?)
    }
}

impl NoticeRegistrar for NoticeQueue {
    fn register_notice(&self, key: &str, style: NoticeStyle, message: &str, options: &NoticeOptions) {
        let notice = Notice {
            key: key.to_string(),
            style,
            message: message.to_string(),
            options: options.clone(),
        };

        if let Ok(mut notices) = self.notices.lock() {
            match notices.iter_mut().find(|n| n.key == notice.key) {
                Some(existing) => *existing = notice,
                None => notices.push(notice),
            }
        }
    }
}
