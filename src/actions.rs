//! Action types and the action registry.
//!
//! This module separates *which button was pressed* from *what code runs*.
//! A remote profile maps raw IR codes to an [`ActionType`]; the registry maps
//! every `ActionType` to exactly one [`Action`], which carries a display name
//! and whether holding the button may auto-repeat it.
//!
//! # Enumerating Actions
//!
//! The registry is a plain static table, so a settings page can list every
//! action without knowing anything about remotes:
//!
//! ```rust
//! use ir_dispatch::actions::{actions, ActionType};
//!
//! assert_eq!(actions().len(), ActionType::COUNT);
//! assert_eq!(ActionType::PowerToggle.action().name, "Power Toggle");
//! assert!(ActionType::BrightUp.action().repeatable);
//! assert!(!ActionType::PowerToggle.action().repeatable);
//! ```
//!
//! # Adding an Action
//!
//! 1. Add a variant to [`ActionType`] and to [`ActionType::ALL`]
//! 2. Add the matching [`Action`] at the *same position* in the registry
//! 3. Handle it in [`ActionState::perform`]
//! 4. Map an IR code to it in one or more remote profiles

use crate::colors;
use crate::traits::LightDevice;

// ============================================================================
// Action Types
// ============================================================================

/// Identifier of every action a remote button can trigger.
///
/// The discriminant doubles as the index into the registry, so the order of
/// variants here must match [`ActionType::ALL`] and the registry table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ActionType {
    PowerOff,
    PowerOn,
    PowerToggle,

    PowerOffWhite,
    PowerOnWhite,
    PowerToggleWhite,

    BrightUp,
    BrightDown,
    Bright25,
    Bright50,
    Bright75,
    Bright100,
    WhiteBrightUp,
    WhiteBrightDown,

    SpeedUp,
    SpeedDown,
    IntensityUp,
    IntensityDown,

    Preset1,
    Preset2,
    Preset3,
    Preset4,
    Preset5,
    Preset6,
    Preset7,
    Preset8,
    Preset9,
    Preset10,
    PresetNext,
    PresetPrev,
    PaletteNext,
    PalettePrev,

    ColorAqua,
    ColorBlue,
    ColorColdWhite,
    ColorColdWhite2,
    ColorCyan,
    ColorDeepblue,
    ColorGreen,
    ColorGreenish,
    ColorMagenta,
    ColorNeutralWhite,
    ColorOrange,
    ColorPink,
    ColorPurple,
    ColorRed,
    ColorReddish,
    ColorTurquoise,
    ColorWarmWhite,
    ColorWarmWhite2,
    ColorWhite,
    ColorYellow,
    ColorYellowish,
    ColorRotate,
}

impl ActionType {
    /// Number of action types.
    pub const COUNT: usize = 54;

    /// Every action type, in registry order.
    pub const ALL: [ActionType; Self::COUNT] = [
        ActionType::PowerOff,
        ActionType::PowerOn,
        ActionType::PowerToggle,
        ActionType::PowerOffWhite,
        ActionType::PowerOnWhite,
        ActionType::PowerToggleWhite,
        ActionType::BrightUp,
        ActionType::BrightDown,
        ActionType::Bright25,
        ActionType::Bright50,
        ActionType::Bright75,
        ActionType::Bright100,
        ActionType::WhiteBrightUp,
        ActionType::WhiteBrightDown,
        ActionType::SpeedUp,
        ActionType::SpeedDown,
        ActionType::IntensityUp,
        ActionType::IntensityDown,
        ActionType::Preset1,
        ActionType::Preset2,
        ActionType::Preset3,
        ActionType::Preset4,
        ActionType::Preset5,
        ActionType::Preset6,
        ActionType::Preset7,
        ActionType::Preset8,
        ActionType::Preset9,
        ActionType::Preset10,
        ActionType::PresetNext,
        ActionType::PresetPrev,
        ActionType::PaletteNext,
        ActionType::PalettePrev,
        ActionType::ColorAqua,
        ActionType::ColorBlue,
        ActionType::ColorColdWhite,
        ActionType::ColorColdWhite2,
        ActionType::ColorCyan,
        ActionType::ColorDeepblue,
        ActionType::ColorGreen,
        ActionType::ColorGreenish,
        ActionType::ColorMagenta,
        ActionType::ColorNeutralWhite,
        ActionType::ColorOrange,
        ActionType::ColorPink,
        ActionType::ColorPurple,
        ActionType::ColorRed,
        ActionType::ColorReddish,
        ActionType::ColorTurquoise,
        ActionType::ColorWarmWhite,
        ActionType::ColorWarmWhite2,
        ActionType::ColorWhite,
        ActionType::ColorYellow,
        ActionType::ColorYellowish,
        ActionType::ColorRotate,
    ];

    /// Registry index of this action type.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an action type by its registry index.
    ///
    /// Used for selectors stored as plain integers (settings, custom
    /// remotes). Returns `None` past the end of the registry.
    ///
    /// ```rust
    /// use ir_dispatch::actions::ActionType;
    ///
    /// assert_eq!(ActionType::from_index(2), Some(ActionType::PowerToggle));
    /// assert_eq!(ActionType::from_index(200), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The registry entry for this action type.
    #[inline]
    pub fn action(self) -> &'static Action {
        &REGISTRY[self.index()]
    }

    /// Preset number (1-10) for the preset buttons.
    pub const fn preset_number(self) -> Option<u8> {
        match self {
            ActionType::Preset1 => Some(1),
            ActionType::Preset2 => Some(2),
            ActionType::Preset3 => Some(3),
            ActionType::Preset4 => Some(4),
            ActionType::Preset5 => Some(5),
            ActionType::Preset6 => Some(6),
            ActionType::Preset7 => Some(7),
            ActionType::Preset8 => Some(8),
            ActionType::Preset9 => Some(9),
            ActionType::Preset10 => Some(10),
            _ => None,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// A named, invocable device action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Action {
    /// The action type this entry belongs to.
    pub action_type: ActionType,
    /// Human readable name, shown in settings pages and diagnostics.
    pub name: &'static str,
    /// Whether a held button may re-fire this action without debounce.
    pub repeatable: bool,
}

impl Action {
    const fn new(action_type: ActionType, name: &'static str) -> Self {
        Self {
            action_type,
            name,
            repeatable: false,
        }
    }

    const fn repeating(action_type: ActionType, name: &'static str) -> Self {
        Self {
            action_type,
            name,
            repeatable: true,
        }
    }
}

use ActionType as A;

static REGISTRY: [Action; ActionType::COUNT] = [
    Action::new(A::PowerOff, "Power Off"),
    Action::new(A::PowerOn, "Power On"),
    Action::new(A::PowerToggle, "Power Toggle"),
    Action::new(A::PowerOffWhite, "Power Off White (for RGBW)"),
    Action::new(A::PowerOnWhite, "Power On White (for RGBW)"),
    Action::new(A::PowerToggleWhite, "Power Toggle White (for RGBW)"),
    Action::repeating(A::BrightUp, "Brightness Up"),
    Action::repeating(A::BrightDown, "Brightness Down"),
    Action::new(A::Bright25, "Brightness 25%"),
    Action::new(A::Bright50, "Brightness 50%"),
    Action::new(A::Bright75, "Brightness 75%"),
    Action::new(A::Bright100, "Brightness 100%"),
    Action::repeating(A::WhiteBrightUp, "White Brightness Up (for RGBW)"),
    Action::repeating(A::WhiteBrightDown, "White Brightness Down (for RGBW)"),
    Action::repeating(A::SpeedUp, "Speed Up"),
    Action::repeating(A::SpeedDown, "Speed Down"),
    Action::repeating(A::IntensityUp, "Intensity Up"),
    Action::repeating(A::IntensityDown, "Intensity Down"),
    Action::new(A::Preset1, "Preset 1"),
    Action::new(A::Preset2, "Preset 2"),
    Action::new(A::Preset3, "Preset 3"),
    Action::new(A::Preset4, "Preset 4"),
    Action::new(A::Preset5, "Preset 5"),
    Action::new(A::Preset6, "Preset 6"),
    Action::new(A::Preset7, "Preset 7"),
    Action::new(A::Preset8, "Preset 8"),
    Action::new(A::Preset9, "Preset 9"),
    Action::new(A::Preset10, "Preset 10"),
    Action::new(A::PresetNext, "Next Preset"),
    Action::new(A::PresetPrev, "Prev Preset"),
    Action::new(A::PaletteNext, "Next Palette"),
    Action::new(A::PalettePrev, "Prev Palette"),
    Action::new(A::ColorAqua, "Aqua"),
    Action::new(A::ColorBlue, "Blue"),
    Action::new(A::ColorColdWhite, "ColdWhite"),
    Action::new(A::ColorColdWhite2, "ColdWhite2"),
    Action::new(A::ColorCyan, "Cyan"),
    Action::new(A::ColorDeepblue, "Deepblue"),
    Action::new(A::ColorGreen, "Green"),
    Action::new(A::ColorGreenish, "Greenish"),
    Action::new(A::ColorMagenta, "Magenta"),
    Action::new(A::ColorNeutralWhite, "NeutralWhite"),
    Action::new(A::ColorOrange, "Orange"),
    Action::new(A::ColorPink, "Pink"),
    Action::new(A::ColorPurple, "Purple"),
    Action::new(A::ColorRed, "Red"),
    Action::new(A::ColorReddish, "Reddish"),
    Action::new(A::ColorTurquoise, "Turquoise"),
    Action::new(A::ColorWarmWhite, "WarmWhite"),
    Action::new(A::ColorWarmWhite2, "WarmWhite2"),
    Action::new(A::ColorWhite, "White"),
    Action::new(A::ColorYellow, "Yellow"),
    Action::new(A::ColorYellowish, "Yellowish"),
    Action::new(A::ColorRotate, "Rotate Colors"),
];

/// The full action registry, indexed by [`ActionType::index`].
pub fn actions() -> &'static [Action] {
    &REGISTRY
}

// ============================================================================
// Action Behaviour
// ============================================================================

/// Brightness levels visited by the brightness up/down buttons.
///
/// A geometric progression, so each press feels like the same step.
pub const BRIGHTNESS_STEPS: [u8; 16] = [
    5, 7, 9, 12, 16, 20, 26, 34, 43, 56, 72, 93, 119, 154, 198, 255,
];

/// Step applied by the speed and intensity buttons.
pub const EFFECT_STEP: i8 = 10;

/// Minimum gap before a second press of the same preset button pages ahead.
pub const PRESET_PAGE_GUARD_MS: u64 = 500;

/// Effects used by preset buttons when the preset slot is empty.
pub const FALLBACK_EFFECTS: [u16; 10] = [
    0,  // static
    17, // twinkle
    2,  // breath
    74, // color twinkle
    9,  // rainbow cycle
    8,  // rainbow
    77, // meteor smooth
    45, // fire flicker
    65, // palette
    80, // twinklefox
];

/// Change `value` by `amount`, clamped to `lower..=upper`.
pub fn relative_change(value: u8, amount: i8, lower: u8, upper: u8) -> u8 {
    let changed = i16::from(value) + i16::from(amount);
    changed.clamp(i16::from(lower), i16::from(upper)) as u8
}

/// Next brightness step above `value`, or `value` if already at the top.
pub fn step_up(value: u8) -> u8 {
    BRIGHTNESS_STEPS
        .iter()
        .copied()
        .find(|&step| step > value)
        .unwrap_or(value)
}

/// Next brightness step below `value`, or `value` if already at the bottom.
pub fn step_down(value: u8) -> u8 {
    BRIGHTNESS_STEPS
        .iter()
        .rev()
        .copied()
        .find(|&step| step < value)
        .unwrap_or(value)
}

/// Inputs an action needs besides the device itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionContext {
    /// Current time in milliseconds.
    pub now_ms: u64,
    /// Number of preset buttons on the active remote, used to page presets.
    pub preset_buttons: u8,
    /// Window within which re-pressing a preset button pages ahead.
    pub preset_page_window_ms: u64,
}

/// State some actions keep between presses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionState {
    rotate_index: u8,
    preset_selected_ms: Option<u64>,
}

impl ActionState {
    /// Creates empty action state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the operation bound to `action_type` against `light`.
    ///
    /// This is only the effect of the action; repeat handling and the
    /// state-changed notification are done by the caller.
    pub fn perform<L: LightDevice>(
        &mut self,
        action_type: ActionType,
        light: &mut L,
        ctx: ActionContext,
    ) {
        match action_type {
            A::PowerOff => light.power_off(),
            A::PowerOn => light.power_on(),
            A::PowerToggle => light.toggle_power(),

            A::PowerOffWhite => light.white_power_off(),
            A::PowerOnWhite => light.white_power_on(),
            A::PowerToggleWhite => light.toggle_white_power(),

            A::BrightUp => light.set_brightness(step_up(light.brightness())),
            A::BrightDown => light.set_brightness(step_down(light.brightness())),
            A::Bright25 => light.set_brightness(63),
            A::Bright50 => light.set_brightness(127),
            A::Bright75 => light.set_brightness(191),
            A::Bright100 => light.set_brightness(255),
            A::WhiteBrightUp => light.set_white_level(step_up(light.white_level())),
            A::WhiteBrightDown => light.set_white_level(step_down(light.white_level())),

            A::SpeedUp => change_effect_speed(light, EFFECT_STEP),
            A::SpeedDown => change_effect_speed(light, -EFFECT_STEP),
            A::IntensityUp => change_effect_intensity(light, EFFECT_STEP),
            A::IntensityDown => change_effect_intensity(light, -EFFECT_STEP),

            A::Preset1
            | A::Preset2
            | A::Preset3
            | A::Preset4
            | A::Preset5
            | A::Preset6
            | A::Preset7
            | A::Preset8
            | A::Preset9
            | A::Preset10 => {
                if let Some(number) = action_type.preset_number() {
                    self.apply_preset(light, number, ctx);
                }
            }
            A::PresetNext => step_effect(light, true),
            A::PresetPrev => step_effect(light, false),
            A::PaletteNext => step_palette(light, true),
            A::PalettePrev => step_palette(light, false),

            A::ColorAqua => light.set_color_rgb(colors::AQUA),
            A::ColorBlue => light.set_color_rgb(colors::BLUE),
            A::ColorCyan => light.set_color_rgb(colors::CYAN),
            A::ColorDeepblue => light.set_color_rgb(colors::DEEPBLUE),
            A::ColorGreen => light.set_color_rgb(colors::GREEN),
            A::ColorGreenish => light.set_color_rgb(colors::GREENISH),
            A::ColorMagenta => light.set_color_rgb(colors::MAGENTA),
            A::ColorOrange => light.set_color_rgb(colors::ORANGE),
            A::ColorPink => light.set_color_rgb(colors::PINK),
            A::ColorPurple => light.set_color_rgb(colors::PURPLE),
            A::ColorRed => light.set_color_rgb(colors::RED),
            A::ColorReddish => light.set_color_rgb(colors::REDDISH),
            A::ColorTurquoise => light.set_color_rgb(colors::TURQUOISE),
            A::ColorWhite => light.set_color_rgb(colors::WHITE),
            A::ColorYellow => light.set_color_rgb(colors::YELLOW),
            A::ColorYellowish => light.set_color_rgb(colors::YELLOWISH),

            A::ColorColdWhite => set_white(light, colors::COLDWHITE, colors::COLDWHITE_RGBW),
            A::ColorColdWhite2 => set_white(light, colors::COLDWHITE2, colors::COLDWHITE2_RGBW),
            A::ColorNeutralWhite => {
                set_white(light, colors::NEUTRALWHITE, colors::NEUTRALWHITE_RGBW)
            }
            A::ColorWarmWhite => set_white(light, colors::WARMWHITE, colors::WARMWHITE_RGBW),
            A::ColorWarmWhite2 => set_white(light, colors::WARMWHITE2, colors::WARMWHITE2_RGBW),

            A::ColorRotate => {
                let index = usize::from(self.rotate_index) % colors::ROTATION.len();
                light.set_color_wrgb(colors::ROTATION[index]);
                self.rotate_index = ((index + 1) % colors::ROTATION.len()) as u8;
            }
        }
    }

    /// Apply preset `number`, paging ahead on a quick second press.
    ///
    /// Pressing the button of the preset that is already active again, more
    /// than [`PRESET_PAGE_GUARD_MS`] but less than the page window after the
    /// previous selection, selects `number + preset_buttons` instead. Empty
    /// preset slots fall back to a built-in effect on the default palette.
    fn apply_preset<L: LightDevice>(&mut self, light: &mut L, number: u8, ctx: ActionContext) {
        let mut number = number;
        if let Some(selected_ms) = self.preset_selected_ms {
            let since = ctx.now_ms.saturating_sub(selected_ms);
            if number == light.current_preset()
                && since > PRESET_PAGE_GUARD_MS
                && since < ctx.preset_page_window_ms
            {
                number = number.saturating_add(ctx.preset_buttons);
            }
        }

        if !light.apply_preset(number) {
            light.set_palette(0);
            let slot = usize::from(number.saturating_sub(1)) % FALLBACK_EFFECTS.len();
            light.set_effect(FALLBACK_EFFECTS[slot]);
        }
        self.preset_selected_ms = Some(ctx.now_ms);
    }

    /// Position in the color rotation that the next press will use.
    pub fn rotate_index(&self) -> u8 {
        self.rotate_index
    }
}

fn change_effect_speed<L: LightDevice>(light: &mut L, amount: i8) {
    if light.effect() != 0 {
        let speed = relative_change(light.effect_speed(), amount, 0, 255);
        light.set_effect_speed(speed);
    } else {
        light.change_hue(amount);
    }
}

fn change_effect_intensity<L: LightDevice>(light: &mut L, amount: i8) {
    if light.effect() != 0 {
        let intensity = relative_change(light.effect_intensity(), amount, 0, 255);
        light.set_effect_intensity(intensity);
    } else {
        light.change_saturation(amount);
    }
}

fn set_white<L: LightDevice>(light: &mut L, rgb: u32, wrgb: u32) {
    if light.is_rgbw() {
        light.set_color_wrgb(wrgb);
        light.set_effect(0);
    } else {
        light.set_color_rgb(rgb);
    }
}

fn step_effect<L: LightDevice>(light: &mut L, forward: bool) {
    let count = u32::from(light.effect_count());
    if count == 0 {
        return;
    }
    let current = u32::from(light.effect()) % count;
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    light.set_effect(next as u16);
}

fn step_palette<L: LightDevice>(light: &mut L, forward: bool) {
    let count = u16::from(light.palette_count());
    if count == 0 {
        return;
    }
    let current = u16::from(light.palette()) % count;
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    light.set_palette(next as u8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockLight;

    fn ctx(now_ms: u64) -> ActionContext {
        ActionContext {
            now_ms,
            preset_buttons: 0,
            preset_page_window_ms: 20_000,
        }
    }

    // =========================================================================
    // Registry Tests
    // =========================================================================

    #[test]
    fn registry_is_indexed_by_action_type() {
        for (index, action) in actions().iter().enumerate() {
            assert_eq!(action.action_type.index(), index);
            assert_eq!(ActionType::ALL[index], action.action_type);
        }
    }

    #[test]
    fn registry_is_total() {
        for action_type in ActionType::ALL {
            assert_eq!(action_type.action().action_type, action_type);
            assert!(!action_type.action().name.is_empty());
        }
    }

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in actions().iter().enumerate() {
            for b in &actions()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn last_variant_fills_registry() {
        assert_eq!(ActionType::ColorRotate.index(), ActionType::COUNT - 1);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(ActionType::from_index(0), Some(ActionType::PowerOff));
        assert_eq!(
            ActionType::from_index((ActionType::COUNT - 1) as u8),
            Some(ActionType::ColorRotate)
        );
        assert_eq!(ActionType::from_index(ActionType::COUNT as u8), None);
    }

    #[test]
    fn only_stepping_actions_repeat() {
        let repeating: Vec<ActionType> = actions()
            .iter()
            .filter(|a| a.repeatable)
            .map(|a| a.action_type)
            .collect();
        assert_eq!(
            repeating,
            vec![
                ActionType::BrightUp,
                ActionType::BrightDown,
                ActionType::WhiteBrightUp,
                ActionType::WhiteBrightDown,
                ActionType::SpeedUp,
                ActionType::SpeedDown,
                ActionType::IntensityUp,
                ActionType::IntensityDown,
            ]
        );
    }

    #[test]
    fn preset_numbers() {
        assert_eq!(ActionType::Preset1.preset_number(), Some(1));
        assert_eq!(ActionType::Preset10.preset_number(), Some(10));
        assert_eq!(ActionType::PresetNext.preset_number(), None);
    }

    // =========================================================================
    // Helper Tests
    // =========================================================================

    #[test]
    fn relative_change_clamps() {
        assert_eq!(relative_change(250, 10, 0, 255), 255);
        assert_eq!(relative_change(5, -10, 0, 255), 0);
        assert_eq!(relative_change(100, 10, 0, 255), 110);
        assert_eq!(relative_change(100, 10, 0, 105), 105);
        assert_eq!(relative_change(20, -10, 15, 255), 15);
    }

    #[test]
    fn brightness_steps_up() {
        assert_eq!(step_up(0), 5);
        assert_eq!(step_up(5), 7);
        assert_eq!(step_up(100), 119);
        assert_eq!(step_up(255), 255);
    }

    #[test]
    fn brightness_steps_down() {
        assert_eq!(step_down(255), 198);
        assert_eq!(step_down(100), 93);
        assert_eq!(step_down(5), 5);
        assert_eq!(step_down(0), 0);
    }

    // =========================================================================
    // Behaviour Tests
    // =========================================================================

    #[test]
    fn absolute_brightness() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        state.perform(ActionType::Bright25, &mut light, ctx(0));
        assert_eq!(light.brightness, 63);
        state.perform(ActionType::Bright100, &mut light, ctx(0));
        assert_eq!(light.brightness, 255);
    }

    #[test]
    fn power_actions() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        state.perform(ActionType::PowerOn, &mut light, ctx(0));
        assert!(light.on);
        state.perform(ActionType::PowerToggle, &mut light, ctx(0));
        assert!(!light.on);
        state.perform(ActionType::PowerOnWhite, &mut light, ctx(0));
        assert!(light.white_on);
    }

    #[test]
    fn speed_changes_hue_on_static_effect() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        light.effect = 0;
        state.perform(ActionType::SpeedUp, &mut light, ctx(0));
        assert_eq!(light.hue_shift, 10);
        assert_eq!(light.speed, 128);
    }

    #[test]
    fn speed_changes_speed_on_running_effect() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        light.effect = 9;
        state.perform(ActionType::SpeedDown, &mut light, ctx(0));
        assert_eq!(light.speed, 118);
        state.perform(ActionType::IntensityUp, &mut light, ctx(0));
        assert_eq!(light.intensity, 138);
    }

    #[test]
    fn intensity_changes_saturation_on_static_effect() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        state.perform(ActionType::IntensityDown, &mut light, ctx(0));
        assert_eq!(light.saturation_shift, -10);
    }

    #[test]
    fn white_tone_on_rgb_strip() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        light.effect = 5;
        state.perform(ActionType::ColorWarmWhite, &mut light, ctx(0));
        assert_eq!(light.color, colors::WARMWHITE);
        assert_eq!(light.effect, 5);
    }

    #[test]
    fn white_tone_on_rgbw_strip() {
        let mut light = MockLight::new().with_rgbw(true);
        let mut state = ActionState::new();
        light.effect = 5;
        state.perform(ActionType::ColorNeutralWhite, &mut light, ctx(0));
        assert_eq!(light.color, colors::NEUTRALWHITE_RGBW);
        assert_eq!(light.effect, 0);
    }

    #[test]
    fn color_rotate_cycles() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        for expected in colors::ROTATION {
            state.perform(ActionType::ColorRotate, &mut light, ctx(0));
            assert_eq!(light.color, expected);
        }
        assert_eq!(state.rotate_index(), 0);
        state.perform(ActionType::ColorRotate, &mut light, ctx(0));
        assert_eq!(light.color, colors::RED);
    }

    #[test]
    fn effect_and_palette_wrap() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        light.effect = 0;
        state.perform(ActionType::PresetPrev, &mut light, ctx(0));
        assert_eq!(light.effect, light.effect_count - 1);
        state.perform(ActionType::PresetNext, &mut light, ctx(0));
        assert_eq!(light.effect, 0);

        light.palette = light.palette_count - 1;
        state.perform(ActionType::PaletteNext, &mut light, ctx(0));
        assert_eq!(light.palette, 0);
        state.perform(ActionType::PalettePrev, &mut light, ctx(0));
        assert_eq!(light.palette, light.palette_count - 1);
    }

    #[test]
    fn missing_preset_falls_back_to_effect() {
        let mut light = MockLight::new();
        let mut state = ActionState::new();
        light.palette = 7;
        state.perform(ActionType::Preset3, &mut light, ctx(0));
        assert_eq!(light.preset_requests, vec![3]);
        assert_eq!(light.effect, FALLBACK_EFFECTS[2]);
        assert_eq!(light.palette, 0);
    }

    #[test]
    fn stored_preset_is_applied() {
        let mut light = MockLight::new().with_presets(&[2]);
        let mut state = ActionState::new();
        state.perform(ActionType::Preset2, &mut light, ctx(0));
        assert_eq!(light.preset, 2);
    }

    #[test]
    fn second_press_pages_presets() {
        let mut light = MockLight::new().with_presets(&[1, 4]);
        let mut state = ActionState::new();
        let page = ActionContext {
            now_ms: 0,
            preset_buttons: 3,
            preset_page_window_ms: 20_000,
        };

        state.perform(ActionType::Preset1, &mut light, page);
        assert_eq!(light.preset, 1);

        // Too soon: same preset again
        state.perform(ActionType::Preset1, &mut light, ActionContext { now_ms: 400, ..page });
        assert_eq!(light.preset_requests.last(), Some(&1));

        state.perform(ActionType::Preset1, &mut light, ActionContext { now_ms: 1_000, ..page });
        assert_eq!(light.preset_requests.last(), Some(&4));
        assert_eq!(light.preset, 4);
    }

    #[test]
    fn press_after_window_does_not_page() {
        let mut light = MockLight::new().with_presets(&[1]);
        let mut state = ActionState::new();
        let page = ActionContext {
            now_ms: 0,
            preset_buttons: 3,
            preset_page_window_ms: 20_000,
        };

        state.perform(ActionType::Preset1, &mut light, page);
        state.perform(ActionType::Preset1, &mut light, ActionContext { now_ms: 25_000, ..page });
        assert_eq!(light.preset_requests, vec![1, 1]);
    }
}
