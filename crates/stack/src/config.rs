//! Stack configuration

/// Configuration for a bounded stack
///
/// Capacity is not part of the configuration: it is fixed per instance and
/// passed to [`BoundedStack::with_config`](crate::BoundedStack::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// Label attached to log events
    pub name: String,

    /// Enable statistics tracking
    pub track_stats: bool,

    /// Emit trace events for `Full` / `Empty` rejections
    pub log_rejections: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            name: "stack".to_string(),
            track_stats: cfg!(debug_assertions),
            log_rejections: true,
        }
    }
}

impl StackConfig {
    /// Production configuration - no per-operation overhead
    pub fn production() -> Self {
        Self {
            track_stats: false,
            log_rejections: false,
            ..Self::default()
        }
    }

    /// Debug configuration - everything observable
    pub fn debug() -> Self {
        Self {
            track_stats: true,
            log_rejections: true,
            ..Self::default()
        }
    }

    /// Set the label used in log events
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable statistics tracking
    pub fn with_stats(mut self, track_stats: bool) -> Self {
        self.track_stats = track_stats;
        self
    }

    /// Enable or disable rejection logging
    pub fn with_rejection_logging(mut self, log_rejections: bool) -> Self {
        self.log_rejections = log_rejections;
        self
    }
}
