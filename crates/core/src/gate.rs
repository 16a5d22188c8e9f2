//! Review prompt gate
//!
//! A gate is built once per integration and per request. Building it runs
//! the compatibility checks (host version, runtime version, notice system)
//! in that order; the first failure is rendered inline and nothing else
//! happens. A compatible gate then decides whether enough time has passed
//! since the integration was first seen and, if so, registers the review
//! notice.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::ReviewConfig,
    errors::{ReviewError, Result},
    host::HostServices,
    key::IdentifierKey,
    link,
    notice::{NoticeOptions, NoticeStyle},
    sanitize::sanitize,
    version,
};

pub const DAY_IN_SECONDS: i64 = 86_400;

const ERROR_LABEL: &str = "Review Me Error:";

/// Outcome of building a gate
#[derive(Debug)]
pub enum GateStatus {
    /// A compatibility check failed; the error was rendered inline
    Failed(ReviewError),
    /// Compatible, but not yet time to ask
    Waiting,
    /// The review notice was registered
    Prompted,
}

pub struct ReviewGate {
    config:   ReviewConfig,
    key:      IdentifierKey,
    services: HostServices,
    status:   GateStatus,
}

impl ReviewGate {
    /// Build the gate for the integration at `integration_path` and run it
    pub fn new(config: ReviewConfig, integration_path: impl AsRef<Path>, services: HostServices) -> Self {
        let key = IdentifierKey::from_path(integration_path.as_ref(), services.root.as_deref());
        debug!(key = %key, "derived review gate key");

        let mut gate = Self {
            config,
            key,
            services,
            status: GateStatus::Waiting,
        };
        gate.status = gate.init();
        gate
    }

    /// Like [`ReviewGate::new`], merging a configuration map over the defaults
    pub fn from_value(args: Value, integration_path: impl AsRef<Path>, services: HostServices) -> Result<Self> {
        let config = ReviewConfig::from_value(args)?;
        Ok(Self::new(config, integration_path, services))
    }

    fn init(&self) -> GateStatus {
        if let Err(err) = self.check_compatibility() {
            warn!(
                key = %self.key,
                category = err.category(),
                "review gate disabled: {}",
                err
            );
            self.spit_error(&err);
            return GateStatus::Failed(err);
        }

        if self.maybe_prompt() {
            GateStatus::Prompted
        } else {
            GateStatus::Waiting
        }
    }

    fn check_compatibility(&self) -> Result<()> {
        let required = &self.services.requirements;

        let host = self.services.platform.host_version();
        if !version::satisfies(&host, &required.host) {
            return Err(ReviewError::HostVersionTooOld {
                required: required.host.clone(),
                found:    host,
            });
        }

        let runtime = self.services.platform.runtime_version();
        if !version::satisfies(&runtime, &required.runtime) {
            return Err(ReviewError::RuntimeVersionTooOld {
                required: required.runtime.clone(),
                found:    runtime,
            });
        }

        if self.services.notices.is_none() {
            return Err(ReviewError::DependencyMissing);
        }

        Ok(())
    }

    /// Render `err` at the top of the current page
    fn spit_error(&self, err: &ReviewError) {
        let html = format!(
            "<div style=\"margin: 20px; text-align: center;\"><strong>{}</strong> {}</div>",
            ERROR_LABEL,
            sanitize(&err.user_message())
        );
        self.services.errors.emit_inline(&html);
    }

    /// Seconds that must pass after first sight before the prompt shows
    ///
    /// One day on top of `days_after`.
    pub fn delay_seconds(&self) -> i64 {
        i64::from(self.config.days_after) * DAY_IN_SECONDS + DAY_IN_SECONDS
    }

    /// First-seen timestamp, if one has been recorded
    pub fn installed_at(&self) -> Result<Option<i64>> {
        self.services.store.get_timestamp(self.key.as_str())
    }

    /// Whether it is time to ask for a review
    ///
    /// The first call for a key records "now" as the install time. A gate
    /// that failed its compatibility checks never touches the store.
    pub fn is_time(&self) -> bool {
        if matches!(self.status, GateStatus::Failed(_)) {
            return false;
        }

        let now = self.services.clock.now();

        let installed = match self.installed_at() {
            Ok(Some(installed)) => installed,
            Ok(None) => {
                self.setup_date(now);
                now
            },
            Err(err) => {
                warn!(key = %self.key, "could not read install date: {}", err);
                return false;
            },
        };

        // Stored values are not trusted; overflow means "far future"
        installed
            .checked_add(self.delay_seconds())
            .is_some_and(|due| due <= now)
    }

    fn setup_date(&self, now: i64) {
        debug!(key = %self.key, installed = now, "recording install date");
        if let Err(err) = self.services.store.set_timestamp(self.key.as_str(), now) {
            warn!(key = %self.key, "could not record install date: {}", err);
        }
    }

    pub fn review_link(&self) -> Result<String> {
        link::review_link(&self.config)
    }

    /// Prompt text followed by the review link, sanitized
    pub fn message(&self) -> Result<String> {
        let link = self.review_link()?;
        let message = format!(
            "{} <a href=\"{}\" target=\"_blank\">{}</a>",
            self.config.message, link, self.config.link_label
        );
        Ok(sanitize(&message))
    }

    /// Register the review notice if it is time
    ///
    /// Returns true when a notice was handed to the notice system.
    pub fn maybe_prompt(&self) -> bool {
        if matches!(self.status, GateStatus::Failed(_)) {
            return false;
        }

        let Some(notices) = self.services.notices.as_ref() else {
            return false;
        };

        if !self.is_time() {
            return false;
        }

        let message = match self.message() {
            Ok(message) => message,
            Err(err) => {
                warn!(key = %self.key, "could not build review message: {}", err);
                return false;
            },
        };

        let options = NoticeOptions {
            scope: self.config.scope,
            cap:   self.config.cap.clone(),
        };
        notices.register_notice(self.key.as_str(), NoticeStyle::Updated, &message, &options);
        info!(key = %self.key, scope = options.scope.as_str(), cap = %options.cap, "registered review notice");

        true
    }

    pub fn key(&self) -> &IdentifierKey {
        &self.key
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    pub fn status(&self) -> &GateStatus {
        &self.status
    }
}
