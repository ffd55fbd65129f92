//! Remote profiles: which raw IR code triggers which action.
//!
//! Each supported remote model is a static, ordered table of
//! [`KeyMapEntry`]s. One remote is active at a time, selected by the
//! integer stored in configuration ([`RemoteType::from_selector`]).
//!
//! # Lookup
//!
//! [`RemoteProfile::resolve`] scans the table in declaration order and the
//! first matching entry wins. Tables hold at most a few dozen entries and
//! are looked up at most once per poll interval.
//!
//! ```rust
//! use ir_dispatch::remotes::{codes, RemoteType};
//! use ir_dispatch::ActionType;
//!
//! let profile = RemoteType::Ir24.profile().unwrap();
//! assert_eq!(profile.resolve(codes::IR24_ON), Some(ActionType::PowerOn));
//! assert_eq!(profile.resolve(0x1234_5678), None);
//! ```
//!
//! # Adding a Remote
//!
//! 1. Define the raw codes in [`codes`]
//! 2. Add a `static` table of [`KeyMapEntry`] below
//! 3. Add a [`RemoteType`] variant and return the table from
//!    [`RemoteType::profile`]
//!
//! Neither the resolver nor the repeat handling needs to change.

pub mod codes;

use core::fmt;
use core::ops::RangeInclusive;

use crate::actions::ActionType;
use codes::*;

/// Reserved raw code meaning "repeat the last dispatched action".
///
/// Sent by NEC remotes while a button is held. Never resolved through a
/// profile.
pub const REPEAT_CODE: u32 = 0xFFFF_FFFF;

// ============================================================================
// Key Map
// ============================================================================

/// One button of a remote: raw code to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMapEntry {
    /// Raw code reported by the decoder. Never `0`.
    pub code: u32,
    /// Action performed when the code is received.
    pub action: ActionType,
}

impl KeyMapEntry {
    /// Creates a new entry.
    pub const fn new(code: u32, action: ActionType) -> Self {
        Self { code, action }
    }
}

const fn key(code: u32, action: ActionType) -> KeyMapEntry {
    KeyMapEntry::new(code, action)
}

/// Ordered code-to-action table for one remote model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteProfile {
    /// Human readable remote name.
    pub name: &'static str,
    entries: &'static [KeyMapEntry],
}

impl RemoteProfile {
    /// Creates a profile over a static table.
    pub const fn new(name: &'static str, entries: &'static [KeyMapEntry]) -> Self {
        Self { name, entries }
    }

    /// The entries of this profile, in lookup order.
    pub fn entries(&self) -> &'static [KeyMapEntry] {
        self.entries
    }

    /// Number of buttons mapped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no buttons are mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the action for `code`.
    ///
    /// Linear scan in declaration order; the first entry with a matching
    /// code wins. `0` is never a valid code and never matches.
    pub fn resolve(&self, code: u32) -> Option<ActionType> {
        if code == 0 {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.action)
    }

    /// Count entries whose action falls within `range` (inclusive).
    pub fn count_actions(&self, range: RangeInclusive<ActionType>) -> u8 {
        let count = self
            .entries
            .iter()
            .filter(|entry| range.contains(&entry.action))
            .count();
        count.min(u8::MAX as usize) as u8
    }

    /// Check the table for authoring mistakes.
    ///
    /// A zero code can never be received, and a duplicated code makes every
    /// entry after the first unreachable.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.code == 0 {
                return Err(ProfileError::ZeroCode { index });
            }
            if let Some(first) = self.entries[..index]
                .iter()
                .position(|earlier| earlier.code == entry.code)
            {
                return Err(ProfileError::DuplicateCode {
                    code: entry.code,
                    first,
                    duplicate: index,
                });
            }
        }
        Ok(())
    }
}

/// Problems found by [`RemoteProfile::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// An entry uses the reserved code `0`.
    ZeroCode {
        /// Position of the offending entry.
        index: usize,
    },
    /// The same code appears twice; the later entry is unreachable.
    DuplicateCode {
        /// The duplicated raw code.
        code: u32,
        /// Position of the entry that wins lookups.
        first: usize,
        /// Position of the shadowed entry.
        duplicate: usize,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::ZeroCode { index } => {
                write!(f, "entry {} uses reserved code 0", index)
            }
            ProfileError::DuplicateCode {
                code,
                first,
                duplicate,
            } => write!(
                f,
                "code 0x{:08X} at entry {} is shadowed by entry {}",
                code, duplicate, first
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProfileError {}

// ============================================================================
// Remote Selection
// ============================================================================

/// Supported remote models, numbered as stored in configuration.
///
/// `0` disables IR reception entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RemoteType {
    /// IR reception off.
    #[default]
    Disabled = 0,
    /// 24-key remote, old revision.
    Ir24Old = 1,
    /// 24-key remote with color temperature buttons.
    Ir24Ct = 2,
    /// 40-key remote.
    Ir40 = 3,
    /// 44-key remote.
    Ir44 = 4,
    /// 21-key remote.
    Ir21 = 5,
    /// 6-key remote.
    Ir6 = 6,
    /// 9-key remote.
    Ir9 = 7,
    /// 24-key remote, current revision.
    Ir24 = 8,
    /// User-defined remote.
    Custom = 9,
    /// Logitech Squeezebox remote.
    Squeezebox = 10,
    /// Roku Express remote.
    RokuExpress = 11,
}

impl RemoteType {
    /// Number of selector values, including [`Disabled`](Self::Disabled).
    pub const COUNT: usize = 12;

    /// Every remote type, indexed by selector value.
    pub const ALL: [RemoteType; Self::COUNT] = [
        RemoteType::Disabled,
        RemoteType::Ir24Old,
        RemoteType::Ir24Ct,
        RemoteType::Ir40,
        RemoteType::Ir44,
        RemoteType::Ir21,
        RemoteType::Ir6,
        RemoteType::Ir9,
        RemoteType::Ir24,
        RemoteType::Custom,
        RemoteType::Squeezebox,
        RemoteType::RokuExpress,
    ];

    /// Map a configuration selector to a remote type.
    ///
    /// Returns `None` for values past the last known remote; callers treat
    /// that the same as [`Disabled`](Self::Disabled).
    ///
    /// ```rust
    /// use ir_dispatch::RemoteType;
    ///
    /// assert_eq!(RemoteType::from_selector(0), Some(RemoteType::Disabled));
    /// assert_eq!(RemoteType::from_selector(4), Some(RemoteType::Ir44));
    /// assert_eq!(RemoteType::from_selector(99), None);
    /// ```
    pub fn from_selector(selector: u8) -> Option<Self> {
        Self::ALL.get(selector as usize).copied()
    }

    /// Selector value stored in configuration.
    #[inline]
    pub const fn selector(self) -> u8 {
        self as u8
    }

    /// Returns true unless this is [`Disabled`](Self::Disabled).
    #[inline]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, RemoteType::Disabled)
    }

    /// Human readable remote name.
    pub const fn name(self) -> &'static str {
        match self {
            RemoteType::Disabled => "Disabled",
            RemoteType::Ir24Old => "24-key (old)",
            RemoteType::Ir24Ct => "24-key with CT",
            RemoteType::Ir40 => "40-key",
            RemoteType::Ir44 => "44-key",
            RemoteType::Ir21 => "21-key",
            RemoteType::Ir6 => "6-key",
            RemoteType::Ir9 => "9-key",
            RemoteType::Ir24 => "24-key",
            RemoteType::Custom => "Custom",
            RemoteType::Squeezebox => "Squeezebox",
            RemoteType::RokuExpress => "Roku Express",
        }
    }

    /// The built-in key map for this remote, or `None` when disabled.
    pub fn profile(self) -> Option<RemoteProfile> {
        let entries: &'static [KeyMapEntry] = match self {
            RemoteType::Disabled => return None,
            RemoteType::Ir24Old => &IR24_OLD_KEYS,
            RemoteType::Ir24Ct => &IR24_CT_KEYS,
            RemoteType::Ir40 => &IR40_KEYS,
            RemoteType::Ir44 => &IR44_KEYS,
            RemoteType::Ir21 => &IR21_KEYS,
            RemoteType::Ir6 => &IR6_KEYS,
            RemoteType::Ir9 => &IR9_KEYS,
            RemoteType::Ir24 => &IR24_KEYS,
            RemoteType::Custom => &CUSTOM_KEYS,
            RemoteType::Squeezebox => &SQUEEZEBOX_KEYS,
            RemoteType::RokuExpress => &ROKU_EXPRESS_KEYS,
        };
        Some(RemoteProfile::new(self.name(), entries))
    }
}

/// Count the preset buttons of a profile that page through presets.
///
/// Only entries mapped to the tenth preset slot are counted
/// (`Preset10..=Preset10`). That is zero for every built-in remote except
/// Squeezebox.
pub fn preset_buttons(profile: &RemoteProfile) -> u8 {
    profile.count_actions(ActionType::Preset10..=ActionType::Preset10)
}

// ============================================================================
// Built-in Key Maps
// ============================================================================

use ActionType as A;

static IR24_KEYS: [KeyMapEntry; 24] = [
    key(IR24_BRIGHTER, A::BrightUp),
    key(IR24_DARKER, A::BrightDown),
    key(IR24_OFF, A::PowerOff),
    key(IR24_ON, A::PowerOn),
    key(IR24_RED, A::ColorRed),
    key(IR24_REDDISH, A::ColorReddish),
    key(IR24_ORANGE, A::ColorOrange),
    key(IR24_YELLOWISH, A::ColorYellowish),
    key(IR24_YELLOW, A::ColorYellow),
    key(IR24_GREEN, A::ColorGreen),
    key(IR24_GREENISH, A::ColorGreenish),
    key(IR24_TURQUOISE, A::ColorTurquoise),
    key(IR24_CYAN, A::ColorCyan),
    key(IR24_AQUA, A::ColorAqua),
    key(IR24_BLUE, A::ColorBlue),
    key(IR24_DEEPBLUE, A::ColorDeepblue),
    key(IR24_PURPLE, A::ColorPurple),
    key(IR24_MAGENTA, A::ColorMagenta),
    key(IR24_PINK, A::ColorPink),
    key(IR24_WHITE, A::ColorWhite),
    key(IR24_FLASH, A::Preset1),
    key(IR24_STROBE, A::Preset2),
    key(IR24_FADE, A::Preset3),
    key(IR24_SMOOTH, A::Preset4),
];

static IR24_OLD_KEYS: [KeyMapEntry; 24] = [
    key(IR24_OLD_BRIGHTER, A::BrightUp),
    key(IR24_OLD_DARKER, A::BrightDown),
    key(IR24_OLD_OFF, A::PowerOff),
    key(IR24_OLD_ON, A::PowerOn),
    key(IR24_OLD_RED, A::ColorRed),
    key(IR24_OLD_REDDISH, A::ColorReddish),
    key(IR24_OLD_ORANGE, A::ColorOrange),
    key(IR24_OLD_YELLOWISH, A::ColorYellowish),
    key(IR24_OLD_YELLOW, A::ColorYellow),
    key(IR24_OLD_GREEN, A::ColorGreen),
    key(IR24_OLD_GREENISH, A::ColorGreenish),
    key(IR24_OLD_TURQUOISE, A::ColorTurquoise),
    key(IR24_OLD_CYAN, A::ColorCyan),
    key(IR24_OLD_AQUA, A::ColorAqua),
    key(IR24_OLD_BLUE, A::ColorBlue),
    key(IR24_OLD_DEEPBLUE, A::ColorDeepblue),
    key(IR24_OLD_PURPLE, A::ColorPurple),
    key(IR24_OLD_MAGENTA, A::ColorMagenta),
    key(IR24_OLD_PINK, A::ColorPink),
    key(IR24_OLD_WHITE, A::ColorWhite),
    key(IR24_OLD_FLASH, A::Preset1),
    key(IR24_OLD_STROBE, A::Preset2),
    key(IR24_OLD_FADE, A::Preset3),
    key(IR24_OLD_SMOOTH, A::Preset4),
];

static IR24_CT_KEYS: [KeyMapEntry; 24] = [
    key(IR24_CT_BRIGHTER, A::BrightUp),
    key(IR24_CT_DARKER, A::BrightDown),
    key(IR24_CT_OFF, A::PowerOff),
    key(IR24_CT_ON, A::PowerOn),
    key(IR24_CT_RED, A::ColorRed),
    key(IR24_CT_REDDISH, A::ColorReddish),
    key(IR24_CT_ORANGE, A::ColorOrange),
    key(IR24_CT_YELLOWISH, A::ColorYellowish),
    key(IR24_CT_YELLOW, A::ColorYellow),
    key(IR24_CT_GREEN, A::ColorGreen),
    key(IR24_CT_GREENISH, A::ColorGreenish),
    key(IR24_CT_TURQUOISE, A::ColorTurquoise),
    key(IR24_CT_CYAN, A::ColorCyan),
    key(IR24_CT_AQUA, A::ColorAqua),
    key(IR24_CT_BLUE, A::ColorBlue),
    key(IR24_CT_DEEPBLUE, A::ColorDeepblue),
    key(IR24_CT_PURPLE, A::ColorPurple),
    key(IR24_CT_MAGENTA, A::ColorMagenta),
    key(IR24_CT_PINK, A::ColorPink),
    key(IR24_CT_COLDWHITE, A::ColorColdWhite),
    key(IR24_CT_WARMWHITE, A::ColorWarmWhite),
    key(IR24_CT_CTPLUS, A::ColorColdWhite2),
    key(IR24_CT_CTMINUS, A::ColorWarmWhite2),
    key(IR24_CT_MEMORY, A::ColorNeutralWhite),
];

static IR40_KEYS: [KeyMapEntry; 40] = [
    key(IR40_BPLUS, A::BrightUp),
    key(IR40_BMINUS, A::BrightDown),
    key(IR40_OFF, A::PowerOff),
    key(IR40_ON, A::PowerOn),
    key(IR40_RED, A::ColorRed),
    key(IR40_REDDISH, A::ColorReddish),
    key(IR40_ORANGE, A::ColorOrange),
    key(IR40_YELLOWISH, A::ColorYellowish),
    key(IR40_YELLOW, A::ColorYellow),
    key(IR40_GREEN, A::ColorGreen),
    key(IR40_GREENISH, A::ColorGreenish),
    key(IR40_TURQUOISE, A::ColorTurquoise),
    key(IR40_CYAN, A::ColorCyan),
    key(IR40_AQUA, A::ColorAqua),
    key(IR40_BLUE, A::ColorBlue),
    key(IR40_DEEPBLUE, A::ColorDeepblue),
    key(IR40_PURPLE, A::ColorPurple),
    key(IR40_MAGENTA, A::ColorMagenta),
    key(IR40_PINK, A::ColorPink),
    key(IR40_WARMWHITE2, A::ColorWarmWhite2),
    key(IR40_WARMWHITE, A::ColorWarmWhite),
    key(IR40_WHITE, A::ColorWhite),
    key(IR40_COLDWHITE, A::ColorColdWhite),
    key(IR40_COLDWHITE2, A::ColorColdWhite2),
    key(IR40_WOFF, A::PowerOffWhite),
    key(IR40_WON, A::PowerOnWhite),
    key(IR40_WPLUS, A::WhiteBrightUp),
    key(IR40_WMINUS, A::WhiteBrightDown),
    key(IR40_W25, A::Bright25),
    key(IR40_W50, A::Bright50),
    key(IR40_W75, A::Bright75),
    key(IR40_W100, A::Bright100),
    key(IR40_QUICK, A::SpeedUp),
    key(IR40_SLOW, A::SpeedDown),
    key(IR40_JUMP7, A::IntensityUp),
    key(IR40_AUTO, A::IntensityDown),
    key(IR40_JUMP3, A::Preset1),
    key(IR40_FADE3, A::Preset2),
    key(IR40_FADE7, A::Preset3),
    key(IR40_FLASH, A::Preset4),
];

// The 44-key remote labels its power buttons the other way round.
static IR44_KEYS: [KeyMapEntry; 44] = [
    key(IR44_BPLUS, A::BrightUp),
    key(IR44_BMINUS, A::BrightDown),
    key(IR44_OFF, A::PowerOn),
    key(IR44_ON, A::PowerOff),
    key(IR44_RED, A::ColorRed),
    key(IR44_REDDISH, A::ColorReddish),
    key(IR44_ORANGE, A::ColorOrange),
    key(IR44_YELLOWISH, A::ColorYellowish),
    key(IR44_YELLOW, A::ColorYellow),
    key(IR44_GREEN, A::ColorGreen),
    key(IR44_GREENISH, A::ColorGreenish),
    key(IR44_TURQUOISE, A::ColorTurquoise),
    key(IR44_CYAN, A::ColorCyan),
    key(IR44_AQUA, A::ColorAqua),
    key(IR44_BLUE, A::ColorBlue),
    key(IR44_DEEPBLUE, A::ColorDeepblue),
    key(IR44_PURPLE, A::ColorPurple),
    key(IR44_MAGENTA, A::ColorMagenta),
    key(IR44_PINK, A::ColorPink),
    key(IR44_WHITE, A::ColorWhite),
    key(IR44_WARMWHITE2, A::ColorWarmWhite2),
    key(IR44_WARMWHITE, A::ColorWarmWhite),
    key(IR44_COLDWHITE, A::ColorColdWhite),
    key(IR44_COLDWHITE2, A::ColorColdWhite2),
    key(IR44_REDPLUS, A::PresetNext),
    key(IR44_REDMINUS, A::PresetPrev),
    key(IR44_GREENPLUS, A::PaletteNext),
    key(IR44_GREENMINUS, A::PalettePrev),
    key(IR44_BLUEPLUS, A::IntensityUp),
    key(IR44_BLUEMINUS, A::IntensityDown),
    key(IR44_QUICK, A::SpeedUp),
    key(IR44_SLOW, A::SpeedDown),
    key(IR44_DIY1, A::Preset1),
    key(IR44_DIY2, A::Preset2),
    key(IR44_DIY3, A::Preset3),
    key(IR44_DIY4, A::Preset4),
    key(IR44_DIY5, A::Preset5),
    key(IR44_DIY6, A::Preset6),
    key(IR44_AUTO, A::Preset7),
    key(IR44_FLASH, A::Preset8),
    key(IR44_JUMP3, A::Bright25),
    key(IR44_JUMP7, A::Bright50),
    key(IR44_FADE3, A::Bright75),
    key(IR44_FADE7, A::Bright100),
];

static IR21_KEYS: [KeyMapEntry; 21] = [
    key(IR21_BRIGHTER, A::BrightUp),
    key(IR21_DARKER, A::BrightDown),
    key(IR21_OFF, A::PowerOff),
    key(IR21_ON, A::PowerOn),
    key(IR21_RED, A::ColorRed),
    key(IR21_REDDISH, A::ColorReddish),
    key(IR21_ORANGE, A::ColorOrange),
    key(IR21_YELLOWISH, A::ColorYellowish),
    key(IR21_GREEN, A::ColorGreen),
    key(IR21_GREENISH, A::ColorGreenish),
    key(IR21_TURQUOISE, A::ColorTurquoise),
    key(IR21_CYAN, A::ColorCyan),
    key(IR21_BLUE, A::ColorBlue),
    key(IR21_DEEPBLUE, A::ColorDeepblue),
    key(IR21_PURPLE, A::ColorPurple),
    key(IR21_PINK, A::ColorPink),
    key(IR21_WHITE, A::ColorWhite),
    key(IR21_FLASH, A::Preset1),
    key(IR21_STROBE, A::Preset2),
    key(IR21_FADE, A::Preset3),
    key(IR21_SMOOTH, A::Preset4),
];

static IR6_KEYS: [KeyMapEntry; 6] = [
    key(IR6_POWER, A::PowerToggle),
    key(IR6_CHANNEL_UP, A::BrightUp),
    key(IR6_CHANNEL_DOWN, A::BrightDown),
    key(IR6_VOLUME_UP, A::PresetNext),
    key(IR6_VOLUME_DOWN, A::ColorRotate),
    key(IR6_MUTE, A::ColorWhite),
];

static IR9_KEYS: [KeyMapEntry; 9] = [
    key(IR9_POWER, A::PowerToggle),
    key(IR9_A, A::Preset1),
    key(IR9_B, A::Preset2),
    key(IR9_C, A::Preset3),
    key(IR9_UP, A::PresetNext),
    key(IR9_DOWN, A::BrightDown),
    key(IR9_LEFT, A::SpeedUp),
    key(IR9_RIGHT, A::SpeedDown),
    key(IR9_SELECT, A::PresetNext),
];

// Filled in at runtime through `IrRemote::set_custom_profile`.
static CUSTOM_KEYS: [KeyMapEntry; 0] = [];

static SQUEEZEBOX_KEYS: [KeyMapEntry; 20] = [
    key(IR_SQUEEZEBOX_NOW_PLAYING, A::BrightDown),
    key(IR_SQUEEZEBOX_SIZE, A::PowerToggle),
    key(IR_SQUEEZEBOX_BRIGHTNESS, A::BrightUp),
    key(IR_SQUEEZEBOX_1, A::Preset1),
    key(IR_SQUEEZEBOX_2, A::Preset2),
    key(IR_SQUEEZEBOX_3, A::Preset3),
    key(IR_SQUEEZEBOX_4, A::Preset4),
    key(IR_SQUEEZEBOX_5, A::Preset5),
    key(IR_SQUEEZEBOX_6, A::Preset6),
    key(IR_SQUEEZEBOX_7, A::Preset7),
    key(IR_SQUEEZEBOX_8, A::Preset8),
    key(IR_SQUEEZEBOX_9, A::Preset9),
    key(IR_SQUEEZEBOX_0, A::Preset10),
    key(IR_SQUEEZEBOX_ARROW_DOWN, A::SpeedDown),
    key(IR_SQUEEZEBOX_ARROW_UP, A::SpeedUp),
    key(IR_SQUEEZEBOX_ARROW_LEFT, A::IntensityDown),
    key(IR_SQUEEZEBOX_ARROW_RIGHT, A::IntensityUp),
    key(IR_SQUEEZEBOX_BROWSE, A::Bright25),
    key(IR_SQUEEZEBOX_SHUFFLE, A::Bright50),
    key(IR_SQUEEZEBOX_REPEAT, A::Bright75),
];

static ROKU_EXPRESS_KEYS: [KeyMapEntry; 15] = [
    key(IR_ROKU_BACK, A::PowerOff),
    key(IR_ROKU_HOME, A::PowerOn),
    key(IR_ROKU_UP, A::BrightUp),
    key(IR_ROKU_DOWN, A::BrightDown),
    key(IR_ROKU_RIGHT, A::SpeedUp),
    key(IR_ROKU_LEFT, A::SpeedDown),
    key(IR_ROKU_REDO, A::IntensityDown),
    key(IR_ROKU_STAR, A::IntensityUp),
    key(IR_ROKU_REWIND, A::Preset1),
    key(IR_ROKU_PLAY, A::Preset2),
    key(IR_ROKU_FFD, A::Preset3),
    key(IR_ROKU_NETFLIX, A::Preset4),
    key(IR_ROKU_ESPN, A::Preset5),
    key(IR_ROKU_HULU, A::Preset6),
    key(IR_ROKU_SLING, A::Preset7),
];
