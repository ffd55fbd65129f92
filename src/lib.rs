//! # ir-dispatch
//!
//! Infra-red remote control dispatch for LED light controllers: raw codes
//! from an IR receiver in, device actions (power, brightness, colors,
//! presets, effect speed and intensity) out.
//!
//! ## Features
//!
//! - **Action registry**: every action has a name and a repeatable flag, and
//!   can be listed for a settings page
//! - **Remote profiles**: static key maps for common 6 to 44 key remotes,
//!   plus a runtime custom map
//! - **Repeat handling**: held buttons auto-repeat where it makes sense,
//!   re-sent frames never toggle twice
//! - **Non-blocking receiver**: decoder lifecycle and poll cadence handled
//!   in one call per tick
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Decoder, clock and light device abstractions
//! - `actions` - Action types, the registry and what each action does
//! - `remotes` - Per-remote key maps and the code resolver
//! - `repeat` - Repeat/debounce coordination
//! - `receiver` - Decoder lifecycle and poll cadence
//! - `remote` - [`IrRemote`], which ties everything together
//! - `hal` - Mock implementations for testing
//!
//! ## Example
//!
//! ```rust
//! use ir_dispatch::{IrRemote, RemoteType, PollOutcome};
//! use ir_dispatch::config::IrConfig;
//! use ir_dispatch::hal::{MockClock, MockDecoder, MockLight};
//! use ir_dispatch::remotes::{codes, REPEAT_CODE};
//!
//! let mut remote = IrRemote::new(MockDecoder::new(), MockLight::new(), MockClock::new())
//!     .with_config(IrConfig::default().with_remote(RemoteType::Ir24));
//!
//! // Main loop: call poll() every tick
//! remote.poll();
//!
//! // A user holds "brighter"
//! remote.decoder_mut().queue_codes(&[codes::IR24_BRIGHTER, REPEAT_CODE]);
//! for _ in 0..2 {
//!     remote.clock_mut().advance(120);
//!     assert!(matches!(remote.poll(), PollOutcome::Dispatched { .. }));
//! }
//!
//! assert_eq!(remote.light().brightness, 198);
//! assert_eq!(remote.repeat_state().repeat_count(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Action types, the action registry and action behaviour.
pub mod actions;
/// Packed color constants.
pub mod colors;
/// Configuration for the receiver and repeat timing.
pub mod config;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Receiver poller: decoder lifecycle and poll cadence.
pub mod receiver;
/// The dispatch engine that ties receiver, resolver and actions together.
pub mod remote;
/// Remote profiles and the code resolver.
pub mod remotes;
/// Repeat and debounce coordination.
pub mod repeat;
/// Core traits for hardware and device abstraction.
pub mod traits;

/// Action and remote catalog for configuration UIs (serde-based).
#[cfg(feature = "serde")]
pub mod catalog;

// Re-exports for convenience
pub use actions::{actions, Action, ActionState, ActionType};
pub use receiver::{Receiver, ReceiverPoll, ReceiverState};
pub use remote::{DispatchOutcome, IrRemote, PollOutcome};
pub use remotes::{KeyMapEntry, ProfileError, RemoteProfile, RemoteType, REPEAT_CODE};
pub use repeat::{Invocation, RepeatState};
pub use traits::{Clock, IrDecoder, LightDevice, TriggerSource};

#[cfg(feature = "std")]
pub use traits::StdClock;

// Config re-exports
pub use config::IrConfig;

// Catalog re-exports
#[cfg(feature = "serde")]
pub use catalog::{catalog, remote_catalog, Catalog, RemoteInfo};

#[cfg(feature = "serde-json-core")]
pub use catalog::{write_actions_json, write_catalog_json};

#[cfg(feature = "serde-json-core")]
pub use config::parse_ir_config;
