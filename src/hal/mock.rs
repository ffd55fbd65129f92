//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the decoder, clock and light
//! device traits, enabling development and testing on desktop without an
//! IR receiver or LED strip.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockDecoder`] | [`IrDecoder`] | Queued codes, counts lifecycle calls |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//! | [`MockLight`] | [`LightDevice`] | Plain light state plus call records |
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::{IrRemote, RemoteType};
//! use ir_dispatch::hal::{MockClock, MockDecoder, MockLight};
//! use ir_dispatch::remotes::codes;
//!
//! let mut remote = IrRemote::new(MockDecoder::new(), MockLight::new(), MockClock::new());
//! remote.set_remote(RemoteType::Ir24.selector());
//!
//! remote.poll(); // acquires the decoder
//! remote.decoder_mut().queue_code(codes::IR24_ON);
//! remote.poll();
//!
//! assert!(remote.light().on);
//! assert_eq!(remote.light().notifications, 1);
//! ```
//!
//! [`IrDecoder`]: crate::traits::IrDecoder
//! [`Clock`]: crate::traits::Clock
//! [`LightDevice`]: crate::traits::LightDevice

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::traits::{Clock, IrDecoder, LightDevice, TriggerSource};

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock IR decoder for testing.
///
/// Queue codes to simulate button presses. Codes are only handed out while
/// the decoder is enabled, oldest first, one per
/// [`try_decode`](IrDecoder::try_decode).
///
/// # Example
///
/// ```rust
/// use ir_dispatch::hal::MockDecoder;
/// use ir_dispatch::traits::IrDecoder;
///
/// let mut decoder = MockDecoder::new();
/// decoder.queue_codes(&[0x10, 0x20]);
///
/// // Nothing comes out until enabled
/// assert_eq!(decoder.try_decode(), None);
///
/// decoder.enable().unwrap();
/// assert_eq!(decoder.try_decode(), Some(0x10));
/// assert_eq!(decoder.try_decode(), Some(0x20));
/// assert_eq!(decoder.decode_attempts, 3);
/// ```
#[derive(Debug, Default)]
pub struct MockDecoder {
    /// Whether the receiver is currently held.
    pub enabled: bool,
    /// Number of times `enable` was called.
    pub enable_calls: usize,
    /// Number of times `disable` was called.
    pub disable_calls: usize,
    /// Number of times `try_decode` was called.
    pub decode_attempts: usize,
    /// Number of times `resume` was called.
    pub resume_calls: usize,
    /// Make `enable` fail.
    pub fail_enable: bool,
    /// Make `disable` fail; the decoder stays held.
    pub fail_disable: bool,
    queue: VecDeque<u32>,
}

impl MockDecoder {
    /// Creates a new mock decoder with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock decoder whose `enable` fails until `fail_enable` is
    /// cleared.
    pub fn with_failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Creates a mock decoder whose `disable` fails until `fail_disable` is
    /// cleared.
    pub fn with_failing_disable(mut self) -> Self {
        self.fail_disable = true;
        self
    }

    /// Queue up a code to be decoded
    pub fn queue_code(&mut self, code: u32) {
        self.queue.push_back(code);
    }

    /// Queue up multiple codes
    pub fn queue_codes(&mut self, codes: &[u32]) {
        self.queue.extend(codes.iter().copied());
    }

    /// Number of codes not yet decoded.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl IrDecoder for MockDecoder {
    type Error = ();

    fn enable(&mut self) -> Result<(), ()> {
        self.enable_calls += 1;
        if self.fail_enable {
            return Err(());
        }
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<(), ()> {
        self.disable_calls += 1;
        if self.fail_disable {
            return Err(());
        }
        self.enabled = false;
        Ok(())
    }

    fn try_decode(&mut self) -> Option<u32> {
        self.decode_attempts += 1;
        if !self.enabled {
            return None;
        }
        self.queue.pop_front()
    }

    fn resume(&mut self) {
        self.resume_calls += 1;
    }
}

/// Mock clock for testing.
///
/// Allows precise control over time for testing cadence and debounce.
///
/// # Example
///
/// ```rust
/// use ir_dispatch::hal::MockClock;
/// use ir_dispatch::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

// ============================================================================
// Device Mocks
// ============================================================================

/// Mock light device for testing.
///
/// Holds the light state in public fields so tests can set up a scenario
/// and inspect the result. Presets only "exist" if added with
/// [`with_presets`](Self::with_presets); every request is recorded either
/// way.
///
/// # Example
///
/// ```rust
/// use ir_dispatch::hal::MockLight;
/// use ir_dispatch::traits::LightDevice;
///
/// let mut light = MockLight::new().with_presets(&[1, 2]);
///
/// assert!(light.apply_preset(2));
/// assert!(!light.apply_preset(5));
/// assert_eq!(light.preset, 2);
/// assert_eq!(light.preset_requests, vec![2, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct MockLight {
    /// Main output on.
    pub on: bool,
    /// White channel on.
    pub white_on: bool,
    /// Master brightness.
    pub brightness: u8,
    /// White level of the primary color.
    pub white_level: u8,
    /// Strip has a white channel.
    pub rgbw: bool,
    /// Last color set, packed as given.
    pub color: u32,
    /// Running effect.
    pub effect: u16,
    /// Number of effects available.
    pub effect_count: u16,
    /// Selected palette.
    pub palette: u8,
    /// Number of palettes available.
    pub palette_count: u8,
    /// Effect speed.
    pub speed: u8,
    /// Effect intensity.
    pub intensity: u8,
    /// Sum of all hue changes.
    pub hue_shift: i32,
    /// Sum of all saturation changes.
    pub saturation_shift: i32,
    /// Last successfully applied preset.
    pub preset: u8,
    /// Preset slots that exist.
    pub presets: Vec<u8>,
    /// Every preset index requested, in order.
    pub preset_requests: Vec<u8>,
    /// Number of state-changed notifications.
    pub notifications: usize,
    /// Source of the last notification.
    pub last_trigger: Option<TriggerSource>,
}

impl Default for MockLight {
    fn default() -> Self {
        Self {
            on: false,
            white_on: false,
            brightness: 128,
            white_level: 0,
            rgbw: false,
            color: 0,
            effect: 0,
            effect_count: 100,
            palette: 0,
            palette_count: 50,
            speed: 128,
            intensity: 128,
            hue_shift: 0,
            saturation_shift: 0,
            preset: 0,
            presets: Vec::new(),
            preset_requests: Vec::new(),
            notifications: 0,
            last_trigger: None,
        }
    }
}

impl MockLight {
    /// Creates a new mock light: off, mid brightness, static effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the strip has a white channel.
    pub fn with_rgbw(mut self, rgbw: bool) -> Self {
        self.rgbw = rgbw;
        self
    }

    /// Adds stored presets.
    pub fn with_presets(mut self, presets: &[u8]) -> Self {
        self.presets.extend_from_slice(presets);
        self
    }

    /// Sets the master brightness.
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}

impl LightDevice for MockLight {
    fn power_on(&mut self) {
        self.on = true;
    }

    fn power_off(&mut self) {
        self.on = false;
    }

    fn toggle_power(&mut self) {
        self.on = !self.on;
    }

    fn white_power_on(&mut self) {
        self.white_on = true;
    }

    fn white_power_off(&mut self) {
        self.white_on = false;
    }

    fn toggle_white_power(&mut self) {
        self.white_on = !self.white_on;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn white_level(&self) -> u8 {
        self.white_level
    }

    fn set_white_level(&mut self, value: u8) {
        self.white_level = value;
    }

    fn is_rgbw(&self) -> bool {
        self.rgbw
    }

    fn set_color_rgb(&mut self, rgb: u32) {
        self.color = rgb & 0x00FF_FFFF;
    }

    fn set_color_wrgb(&mut self, wrgb: u32) {
        self.color = wrgb;
    }

    fn effect(&self) -> u16 {
        self.effect
    }

    fn set_effect(&mut self, effect: u16) {
        self.effect = effect;
    }

    fn effect_count(&self) -> u16 {
        self.effect_count
    }

    fn palette(&self) -> u8 {
        self.palette
    }

    fn set_palette(&mut self, palette: u8) {
        self.palette = palette;
    }

    fn palette_count(&self) -> u8 {
        self.palette_count
    }

    fn effect_speed(&self) -> u8 {
        self.speed
    }

    fn set_effect_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    fn effect_intensity(&self) -> u8 {
        self.intensity
    }

    fn set_effect_intensity(&mut self, intensity: u8) {
        self.intensity = intensity;
    }

    fn change_hue(&mut self, amount: i8) {
        self.hue_shift += i32::from(amount);
    }

    fn change_saturation(&mut self, amount: i8) {
        self.saturation_shift += i32::from(amount);
    }

    fn apply_preset(&mut self, index: u8) -> bool {
        self.preset_requests.push(index);
        if self.presets.contains(&index) {
            self.preset = index;
            true
        } else {
            false
        }
    }

    fn current_preset(&self) -> u8 {
        self.preset
    }

    fn notify_state_changed(&mut self, source: TriggerSource) {
        self.notifications += 1;
        self.last_trigger = Some(source);
    }
}
