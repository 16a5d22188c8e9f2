//! Capabilities the host hands to a review gate

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use crate::{
    clock::{Clock, SystemClock},
    config::Requirements,
    notice::NoticeRegistrar,
    store::OptionStore,
};

/// Host platform and runtime versions
pub trait Platform: Send + Sync {
    fn host_version(&self) -> String;

    fn runtime_version(&self) -> String;
}

/// Platform with fixed version strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    pub host:    String,
    pub runtime: String,
}

impl StaticPlatform {
    pub fn new(host: impl Into<String>, runtime: impl Into<String>) -> Self {
        Self {
            host:    host.into(),
            runtime: runtime.into(),
        }
    }
}

impl Platform for StaticPlatform {
    fn host_version(&self) -> String {
        self.host.clone()
    }

    fn runtime_version(&self) -> String {
        self.runtime.clone()
    }
}

/// Point where inline markup is written into the page being rendered
pub trait ErrorSink: Send + Sync {
    fn emit_inline(&self, html: &str);
}

/// Sink that keeps everything emitted to it
#[derive(Debug, Default)]
pub struct ErrorBuffer {
    emitted: Mutex<Vec<String>>,
}

impl ErrorBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ErrorSink for ErrorBuffer {
    fn emit_inline(&self, html: &str) {
        if let Ok(mut emitted) = self.emitted.lock() {
            emitted.push(html.to_string());
        }
    }
}

/// Everything a gate needs from its host
#[derive(Clone)]
pub struct HostServices {
    pub platform:     Arc<dyn Platform>,
    pub store:        Arc<dyn OptionStore>,
    pub clock:        Arc<dyn Clock>,
    pub errors:       Arc<dyn ErrorSink>,
    /// `None` means the notice system is not available
    pub notices:      Option<Arc<dyn NoticeRegistrar>>,
    pub requirements: Requirements,
    /// Directory integration paths are made relative to for key derivation
    pub root:         Option<PathBuf>,
}

impl HostServices {
    /// Services with the system clock, default requirements and no notice system
    pub fn new(
        platform: Arc<dyn Platform>,
        store: Arc<dyn OptionStore>,
        errors: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            platform,
            store,
            clock: Arc::new(SystemClock),
            errors,
            notices: None,
            requirements: Requirements::default(),
            root: None,
        }
    }

    pub fn with_notices(mut self, notices: Arc<dyn NoticeRegistrar>) -> Self {
        self.notices = Some(notices);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}
