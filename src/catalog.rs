//! Action and remote catalog for configuration UIs.
//!
//! A settings page needs to list every action a button can be bound to and
//! every remote that can be selected. Both come straight from the static
//! tables, so the catalog never goes out of sync with what the dispatcher
//! actually does.
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::catalog::remote_catalog;
//!
//! let remotes = remote_catalog();
//! assert_eq!(remotes.len(), 11);
//! assert_eq!(remotes[3].name, "44-key");
//! assert_eq!(remotes[3].buttons, 44);
//! ```
//!
//! With `serde-json-core` the catalog renders to JSON into a caller buffer:
//!
//! ```rust,ignore
//! let mut buf = [0u8; 8192];
//! let len = ir_dispatch::catalog::write_catalog_json(&mut buf).unwrap();
//! http_response.send(&buf[..len]);
//! ```

use heapless::Vec as HVec;
use serde::Serialize;

use crate::actions::{actions, Action};
use crate::remotes::RemoteType;

/// Number of selectable remotes (every [`RemoteType`] except `Disabled`).
pub const REMOTE_COUNT: usize = RemoteType::COUNT - 1;

/// One selectable remote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RemoteInfo {
    /// Value to store in the remote selector.
    pub selector: u8,
    /// Human readable name.
    pub name: &'static str,
    /// Number of mapped buttons.
    pub buttons: usize,
}

/// Everything a settings page needs.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    /// Every action, in registry order.
    pub actions: &'static [Action],
    /// Every selectable remote.
    pub remotes: HVec<RemoteInfo, REMOTE_COUNT>,
}

/// List every selectable remote, in selector order.
pub fn remote_catalog() -> HVec<RemoteInfo, REMOTE_COUNT> {
    RemoteType::ALL
        .iter()
        .filter_map(|remote| {
            remote.profile().map(|profile| RemoteInfo {
                selector: remote.selector(),
                name: remote.name(),
                buttons: profile.len(),
            })
        })
        .collect()
}

/// Build the full catalog.
pub fn catalog() -> Catalog {
    Catalog {
        actions: actions(),
        remotes: remote_catalog(),
    }
}

/// Render the full catalog as JSON into `buf`, returning the bytes written.
#[cfg(feature = "serde-json-core")]
pub fn write_catalog_json(buf: &mut [u8]) -> serde_json_core::ser::Result<usize> {
    serde_json_core::to_slice(&catalog(), buf)
}

/// Render only the action list as JSON into `buf`.
#[cfg(feature = "serde-json-core")]
pub fn write_actions_json(buf: &mut [u8]) -> serde_json_core::ser::Result<usize> {
    serde_json_core::to_slice(&actions(), buf)
}
