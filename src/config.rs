//! Configuration for the IR dispatch engine.
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::config::IrConfig;
//! use ir_dispatch::RemoteType;
//!
//! // Use defaults (IR disabled)
//! let config = IrConfig::default();
//! assert!(!config.is_enabled());
//!
//! // Or customize
//! let config = IrConfig::default()
//!     .with_remote(RemoteType::Ir44)
//!     .with_debounce_ms(300);
//! assert_eq!(config.remote_type(), Some(RemoteType::Ir44));
//! ```

use crate::actions::PRESET_PAGE_GUARD_MS;
use crate::receiver::DEFAULT_POLL_INTERVAL_MS;
use crate::remotes::RemoteType;
use crate::repeat::DEFAULT_DEBOUNCE_MS;

/// Default window for paging through presets with a second press.
pub const DEFAULT_PRESET_CYCLE_WINDOW_MS: u64 = 20_000;

// ============================================================================
// IR Config
// ============================================================================

/// IR receiver configuration
///
/// # JSON Example
///
/// ```json
/// {"remote": 4, "poll_interval_ms": 120}
/// ```
///
/// Missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IrConfig {
    /// Remote selector (see [`RemoteType`]); 0 disables IR
    pub remote: u8,
    /// Minimum time between decode attempts
    pub poll_interval_ms: u64,
    /// Window within which a non-repeatable action fires only once
    pub debounce_ms: u64,
    /// Window within which a second preset press pages ahead
    pub preset_cycle_window_ms: u64,
}

impl Default for IrConfig {
    fn default() -> Self {
        Self {
            remote: RemoteType::Disabled.selector(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            preset_cycle_window_ms: DEFAULT_PRESET_CYCLE_WINDOW_MS,
        }
    }
}

impl IrConfig {
    /// Select the remote
    pub fn with_remote(mut self, remote: RemoteType) -> Self {
        self.remote = remote.selector();
        self
    }

    /// Set the raw remote selector (out of range values disable IR)
    pub fn with_selector(mut self, selector: u8) -> Self {
        self.remote = selector;
        self
    }

    /// Set the minimum time between decode attempts
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Set the debounce window for non-repeatable actions
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the preset paging window (never shorter than the paging guard)
    pub fn with_preset_cycle_window_ms(mut self, ms: u64) -> Self {
        self.preset_cycle_window_ms = ms.max(PRESET_PAGE_GUARD_MS);
        self
    }

    /// The selected remote, `None` if the selector is out of range
    pub fn remote_type(&self) -> Option<RemoteType> {
        RemoteType::from_selector(self.remote)
    }

    /// Check if a valid remote is selected
    pub fn is_enabled(&self) -> bool {
        self.remote_type().is_some_and(RemoteType::is_enabled)
    }
}

/// Parse an IR configuration from JSON bytes.
///
/// # Example
///
/// ```
/// use ir_dispatch::config::parse_ir_config;
///
/// let json = br#"{"remote": 4, "debounce_ms": 250}"#;
/// let config = parse_ir_config(json).unwrap();
/// assert_eq!(config.remote, 4);
/// assert_eq!(config.debounce_ms, 250);
/// assert_eq!(config.poll_interval_ms, 120);
/// ```
#[cfg(feature = "serde-json-core")]
pub fn parse_ir_config(json: &[u8]) -> Option<IrConfig> {
    serde_json_core::from_slice(json).ok().map(|(config, _)| config)
}

// ============================================================================
// Tests
// ============================================================================
