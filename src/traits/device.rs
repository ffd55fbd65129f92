//! Light device trait - the effect engine and preset store seen from the
//! remote's point of view.
//!
//! The dispatch engine never renders anything itself. Every action ends in a
//! handful of calls on a [`LightDevice`], followed by a single
//! [`notify_state_changed`](LightDevice::notify_state_changed).

/// What caused a state change.
///
/// Passed to [`LightDevice::notify_state_changed`] so the host can decide
/// how to propagate the change (sync packets, UI refresh, persistence).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum TriggerSource {
    /// A physical button press, including IR remote buttons.
    Button,
}

/// Light device trait - abstracts the lighting state the remote can change.
///
/// Implement this for your effect engine. Getters are used by relative
/// actions (brightness steps, speed changes, preset cycling); setters are
/// expected to only update state, with the actual output refresh triggered by
/// [`notify_state_changed`](Self::notify_state_changed).
///
/// # Value Ranges
///
/// - Brightness, white level, speed and intensity are full `u8` ranges
/// - Colors are packed `0xRRGGBB` (24-bit) or `0xWWRRGGBB` (32-bit)
/// - Effect and palette ids are in `0..effect_count()` / `0..palette_count()`
pub trait LightDevice {
    /// Turn the main output on.
    fn power_on(&mut self);

    /// Turn the main output off.
    fn power_off(&mut self);

    /// Toggle the main output.
    fn toggle_power(&mut self);

    /// Turn the white channel on (RGBW strips).
    fn white_power_on(&mut self);

    /// Turn the white channel off (RGBW strips).
    fn white_power_off(&mut self);

    /// Toggle the white channel (RGBW strips).
    fn toggle_white_power(&mut self);

    /// Current master brightness.
    fn brightness(&self) -> u8;

    /// Set master brightness.
    fn set_brightness(&mut self, value: u8);

    /// Current white channel level of the primary color.
    fn white_level(&self) -> u8;

    /// Set white channel level of the primary color.
    fn set_white_level(&mut self, value: u8);

    /// Returns true if the strip has a dedicated white channel.
    fn is_rgbw(&self) -> bool;

    /// Set the primary color from a packed `0xRRGGBB` value.
    fn set_color_rgb(&mut self, rgb: u32);

    /// Set the primary color from a packed `0xWWRRGGBB` value.
    fn set_color_wrgb(&mut self, wrgb: u32);

    /// Currently running effect id. `0` is the static (solid color) effect.
    fn effect(&self) -> u16;

    /// Switch to the given effect id.
    fn set_effect(&mut self, effect: u16);

    /// Number of available effects.
    fn effect_count(&self) -> u16;

    /// Currently selected palette id.
    fn palette(&self) -> u8;

    /// Switch to the given palette id.
    fn set_palette(&mut self, palette: u8);

    /// Number of available palettes.
    fn palette_count(&self) -> u8;

    /// Current effect speed.
    fn effect_speed(&self) -> u8;

    /// Set effect speed.
    fn set_effect_speed(&mut self, speed: u8);

    /// Current effect intensity.
    fn effect_intensity(&self) -> u8;

    /// Set effect intensity.
    fn set_effect_intensity(&mut self, intensity: u8);

    /// Shift the hue of the primary color by `amount`.
    fn change_hue(&mut self, amount: i8);

    /// Shift the saturation of the primary color by `amount`.
    fn change_saturation(&mut self, amount: i8);

    /// Load a stored preset. Returns false if no such preset exists.
    fn apply_preset(&mut self, index: u8) -> bool;

    /// Index of the most recently applied preset (`0` if none).
    fn current_preset(&self) -> u8;

    /// Tell the host that the light state changed and should be pushed out.
    fn notify_state_changed(&mut self, source: TriggerSource);
}
