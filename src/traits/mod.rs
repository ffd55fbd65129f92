//! Trait definitions for the hardware and device collaborators.
//!
//! This module defines the abstractions that allow ir-dispatch to:
//! - Run against any IR receiver driver
//! - Drive any lighting engine
//! - Be tested on desktop with mocks
//!
//! # Submodules
//!
//! - `hardware`: IR decoder and clock
//! - `device`: Light device (effects, colors, presets)
//!
//! # Key Traits
//!
//! - [`IrDecoder`]: Non-blocking source of raw IR codes
//! - [`Clock`]: Time source for `no_std` environments
//! - [`LightDevice`]: Everything an action is allowed to change

pub mod device;
pub mod hardware;

pub use device::*;
pub use hardware::*;
