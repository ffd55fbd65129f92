//! Raw IR codes for the supported remotes.
//!
//! Values are the 32-bit NEC frames as reported by the decoder: address,
//! inverted address (or 16-bit extended address), command, inverted command.

#![allow(missing_docs)]

// ============================================================================
// 24-key remote (current revision)
// ============================================================================

pub const IR24_BRIGHTER: u32 = 0x00F7_00FF;
pub const IR24_DARKER: u32 = 0x00F7_807F;
pub const IR24_OFF: u32 = 0x00F7_40BF;
pub const IR24_ON: u32 = 0x00F7_C03F;
pub const IR24_RED: u32 = 0x00F7_20DF;
pub const IR24_REDDISH: u32 = 0x00F7_10EF;
pub const IR24_ORANGE: u32 = 0x00F7_30CF;
pub const IR24_YELLOWISH: u32 = 0x00F7_08F7;
pub const IR24_YELLOW: u32 = 0x00F7_28D7;
pub const IR24_GREEN: u32 = 0x00F7_A05F;
pub const IR24_GREENISH: u32 = 0x00F7_906F;
pub const IR24_TURQUOISE: u32 = 0x00F7_B04F;
pub const IR24_CYAN: u32 = 0x00F7_8877;
pub const IR24_AQUA: u32 = 0x00F7_A857;
pub const IR24_BLUE: u32 = 0x00F7_609F;
pub const IR24_DEEPBLUE: u32 = 0x00F7_50AF;
pub const IR24_PURPLE: u32 = 0x00F7_708F;
pub const IR24_MAGENTA: u32 = 0x00F7_48B7;
pub const IR24_PINK: u32 = 0x00F7_6897;
pub const IR24_WHITE: u32 = 0x00F7_E01F;
pub const IR24_FLASH: u32 = 0x00F7_D02F;
pub const IR24_STROBE: u32 = 0x00F7_F00F;
pub const IR24_FADE: u32 = 0x00F7_C837;
pub const IR24_SMOOTH: u32 = 0x00F7_E817;

// ============================================================================
// 24-key remote (old revision)
// ============================================================================

pub const IR24_OLD_BRIGHTER: u32 = 0x00FF_906F;
pub const IR24_OLD_DARKER: u32 = 0x00FF_B847;
pub const IR24_OLD_OFF: u32 = 0x00FF_F807;
pub const IR24_OLD_ON: u32 = 0x00FF_B04F;
pub const IR24_OLD_RED: u32 = 0x00FF_9867;
pub const IR24_OLD_REDDISH: u32 = 0x00FF_E817;
pub const IR24_OLD_ORANGE: u32 = 0x00FF_02FD;
pub const IR24_OLD_YELLOWISH: u32 = 0x00FF_50AF;
pub const IR24_OLD_YELLOW: u32 = 0x00FF_38C7;
pub const IR24_OLD_GREEN: u32 = 0x00FF_D827;
pub const IR24_OLD_GREENISH: u32 = 0x00FF_48B7;
pub const IR24_OLD_TURQUOISE: u32 = 0x00FF_32CD;
pub const IR24_OLD_CYAN: u32 = 0x00FF_7887;
pub const IR24_OLD_AQUA: u32 = 0x00FF_28D7;
pub const IR24_OLD_BLUE: u32 = 0x00FF_8877;
pub const IR24_OLD_DEEPBLUE: u32 = 0x00FF_6897;
pub const IR24_OLD_PURPLE: u32 = 0x00FF_20DF;
pub const IR24_OLD_MAGENTA: u32 = 0x00FF_708F;
pub const IR24_OLD_PINK: u32 = 0x00FF_F00F;
pub const IR24_OLD_WHITE: u32 = 0x00FF_A857;
pub const IR24_OLD_FLASH: u32 = 0x00FF_B24D;
pub const IR24_OLD_STROBE: u32 = 0x00FF_00FF;
pub const IR24_OLD_FADE: u32 = 0x00FF_58A7;
pub const IR24_OLD_SMOOTH: u32 = 0x00FF_30CF;

// ============================================================================
// 24-key remote with color temperature buttons
// ============================================================================

pub const IR24_CT_BRIGHTER: u32 = 0x00F7_00FF;
pub const IR24_CT_DARKER: u32 = 0x00F7_807F;
pub const IR24_CT_OFF: u32 = 0x00F7_40BF;
pub const IR24_CT_ON: u32 = 0x00F7_C03F;
pub const IR24_CT_RED: u32 = 0x00F7_20DF;
pub const IR24_CT_REDDISH: u32 = 0x00F7_10EF;
pub const IR24_CT_ORANGE: u32 = 0x00F7_30CF;
pub const IR24_CT_YELLOWISH: u32 = 0x00F7_08F7;
pub const IR24_CT_YELLOW: u32 = 0x00F7_28D7;
pub const IR24_CT_GREEN: u32 = 0x00F7_A05F;
pub const IR24_CT_GREENISH: u32 = 0x00F7_906F;
pub const IR24_CT_TURQUOISE: u32 = 0x00F7_B04F;
pub const IR24_CT_CYAN: u32 = 0x00F7_8877;
pub const IR24_CT_AQUA: u32 = 0x00F7_A857;
pub const IR24_CT_BLUE: u32 = 0x00F7_609F;
pub const IR24_CT_DEEPBLUE: u32 = 0x00F7_50AF;
pub const IR24_CT_PURPLE: u32 = 0x00F7_708F;
pub const IR24_CT_MAGENTA: u32 = 0x00F7_48B7;
pub const IR24_CT_PINK: u32 = 0x00F7_6897;
pub const IR24_CT_COLDWHITE: u32 = 0x00F7_E01F;
pub const IR24_CT_WARMWHITE: u32 = 0x00F7_D02F;
pub const IR24_CT_CTPLUS: u32 = 0x00F7_F00F;
pub const IR24_CT_CTMINUS: u32 = 0x00F7_C837;
pub const IR24_CT_MEMORY: u32 = 0x00F7_E817;

// ============================================================================
// 40-key remote
// ============================================================================

pub const IR40_BPLUS: u32 = 0x00FF_3AC5;
pub const IR40_BMINUS: u32 = 0x00FF_BA45;
pub const IR40_OFF: u32 = 0x00FF_827D;
pub const IR40_ON: u32 = 0x00FF_02FD;
pub const IR40_RED: u32 = 0x00FF_1AE5;
pub const IR40_REDDISH: u32 = 0x00FF_2AD5;
pub const IR40_ORANGE: u32 = 0x00FF_0AF5;
pub const IR40_YELLOWISH: u32 = 0x00FF_38C7;
pub const IR40_YELLOW: u32 = 0x00FF_18E7;
pub const IR40_GREEN: u32 = 0x00FF_9A65;
pub const IR40_GREENISH: u32 = 0x00FF_AA55;
pub const IR40_TURQUOISE: u32 = 0x00FF_8A75;
pub const IR40_CYAN: u32 = 0x00FF_B847;
pub const IR40_AQUA: u32 = 0x00FF_9867;
pub const IR40_BLUE: u32 = 0x00FF_A25D;
pub const IR40_DEEPBLUE: u32 = 0x00FF_926D;
pub const IR40_PURPLE: u32 = 0x00FF_B24D;
pub const IR40_MAGENTA: u32 = 0x00FF_7887;
pub const IR40_PINK: u32 = 0x00FF_58A7;
pub const IR40_WARMWHITE2: u32 = 0x00FF_22DD;
pub const IR40_WARMWHITE: u32 = 0x00FF_12ED;
pub const IR40_WHITE: u32 = 0x00FF_32CD;
pub const IR40_COLDWHITE: u32 = 0x00FF_F807;
pub const IR40_COLDWHITE2: u32 = 0x00FF_D827;
pub const IR40_WOFF: u32 = 0x00FF_6897;
pub const IR40_WON: u32 = 0x00FF_E817;
pub const IR40_WPLUS: u32 = 0x00FF_28D7;
pub const IR40_WMINUS: u32 = 0x00FF_A857;
pub const IR40_W25: u32 = 0x00FF_08F7;
pub const IR40_W50: u32 = 0x00FF_8877;
pub const IR40_W75: u32 = 0x00FF_48B7;
pub const IR40_W100: u32 = 0x00FF_C837;
pub const IR40_QUICK: u32 = 0x00FF_30CF;
pub const IR40_SLOW: u32 = 0x00FF_B04F;
pub const IR40_JUMP7: u32 = 0x00FF_708F;
pub const IR40_AUTO: u32 = 0x00FF_F00F;
pub const IR40_JUMP3: u32 = 0x00FF_10EF;
pub const IR40_FADE3: u32 = 0x00FF_906F;
pub const IR40_FADE7: u32 = 0x00FF_50AF;
pub const IR40_FLASH: u32 = 0x00FF_D02F;

// ============================================================================
// 44-key remote
// ============================================================================

pub const IR44_BPLUS: u32 = 0x00FF_3AC5;
pub const IR44_BMINUS: u32 = 0x00FF_BA45;
pub const IR44_OFF: u32 = 0x00FF_827D;
pub const IR44_ON: u32 = 0x00FF_02FD;
pub const IR44_RED: u32 = 0x00FF_1AE5;
pub const IR44_GREEN: u32 = 0x00FF_9A65;
pub const IR44_BLUE: u32 = 0x00FF_A25D;
pub const IR44_WHITE: u32 = 0x00FF_22DD;
pub const IR44_REDDISH: u32 = 0x00FF_2AD5;
pub const IR44_GREENISH: u32 = 0x00FF_AA55;
pub const IR44_DEEPBLUE: u32 = 0x00FF_926D;
pub const IR44_WARMWHITE2: u32 = 0x00FF_12ED;
pub const IR44_ORANGE: u32 = 0x00FF_0AF5;
pub const IR44_TURQUOISE: u32 = 0x00FF_8A75;
pub const IR44_PURPLE: u32 = 0x00FF_B24D;
pub const IR44_WARMWHITE: u32 = 0x00FF_32CD;
pub const IR44_YELLOWISH: u32 = 0x00FF_38C7;
pub const IR44_CYAN: u32 = 0x00FF_B847;
pub const IR44_MAGENTA: u32 = 0x00FF_7887;
pub const IR44_COLDWHITE: u32 = 0x00FF_F807;
pub const IR44_YELLOW: u32 = 0x00FF_18E7;
pub const IR44_AQUA: u32 = 0x00FF_9867;
pub const IR44_PINK: u32 = 0x00FF_58A7;
pub const IR44_COLDWHITE2: u32 = 0x00FF_D827;
pub const IR44_REDPLUS: u32 = 0x00FF_28D7;
pub const IR44_GREENPLUS: u32 = 0x00FF_A857;
pub const IR44_BLUEPLUS: u32 = 0x00FF_6897;
pub const IR44_QUICK: u32 = 0x00FF_E817;
pub const IR44_REDMINUS: u32 = 0x00FF_08F7;
pub const IR44_GREENMINUS: u32 = 0x00FF_8877;
pub const IR44_BLUEMINUS: u32 = 0x00FF_48B7;
pub const IR44_SLOW: u32 = 0x00FF_C837;
pub const IR44_DIY1: u32 = 0x00FF_30CF;
pub const IR44_DIY2: u32 = 0x00FF_B04F;
pub const IR44_DIY3: u32 = 0x00FF_708F;
pub const IR44_AUTO: u32 = 0x00FF_F00F;
pub const IR44_DIY4: u32 = 0x00FF_10EF;
pub const IR44_DIY5: u32 = 0x00FF_906F;
pub const IR44_DIY6: u32 = 0x00FF_50AF;
pub const IR44_FLASH: u32 = 0x00FF_D02F;
pub const IR44_JUMP3: u32 = 0x00FF_20DF;
pub const IR44_JUMP7: u32 = 0x00FF_A05F;
pub const IR44_FADE3: u32 = 0x00FF_609F;
pub const IR44_FADE7: u32 = 0x00FF_E01F;

// ============================================================================
// 21-key remote
// ============================================================================

pub const IR21_BRIGHTER: u32 = 0x00FF_E01F;
pub const IR21_DARKER: u32 = 0x00FF_A857;
pub const IR21_OFF: u32 = 0x00FF_629D;
pub const IR21_ON: u32 = 0x00FF_A25D;
pub const IR21_RED: u32 = 0x00FF_6897;
pub const IR21_REDDISH: u32 = 0x00FF_30CF;
pub const IR21_ORANGE: u32 = 0x00FF_10EF;
pub const IR21_YELLOWISH: u32 = 0x00FF_42BD;
pub const IR21_GREEN: u32 = 0x00FF_9867;
pub const IR21_GREENISH: u32 = 0x00FF_18E7;
pub const IR21_TURQUOISE: u32 = 0x00FF_38C7;
pub const IR21_CYAN: u32 = 0x00FF_4AB5;
pub const IR21_BLUE: u32 = 0x00FF_B04F;
pub const IR21_DEEPBLUE: u32 = 0x00FF_7A85;
pub const IR21_PURPLE: u32 = 0x00FF_5AA5;
pub const IR21_PINK: u32 = 0x00FF_52AD;
pub const IR21_WHITE: u32 = 0x00FF_906F;
pub const IR21_FLASH: u32 = 0x00FF_E21D;
pub const IR21_STROBE: u32 = 0x00FF_22DD;
pub const IR21_FADE: u32 = 0x00FF_02FD;
pub const IR21_SMOOTH: u32 = 0x00FF_C23D;

// ============================================================================
// 6-key remote
// ============================================================================

pub const IR6_POWER: u32 = 0x00FF_0FF0;
pub const IR6_CHANNEL_UP: u32 = 0x00FF_8F70;
pub const IR6_CHANNEL_DOWN: u32 = 0x00FF_4FB0;
pub const IR6_VOLUME_UP: u32 = 0x00FF_CF30;
pub const IR6_VOLUME_DOWN: u32 = 0x00FF_2FD0;
pub const IR6_MUTE: u32 = 0x00FF_AF50;

// ============================================================================
// 9-key remote
// ============================================================================

pub const IR9_POWER: u32 = 0x00FF_629D;
pub const IR9_A: u32 = 0x00FF_22DD;
pub const IR9_B: u32 = 0x00FF_02FD;
pub const IR9_C: u32 = 0x00FF_C23D;
pub const IR9_LEFT: u32 = 0x00FF_30CF;
pub const IR9_RIGHT: u32 = 0x00FF_7A85;
pub const IR9_UP: u32 = 0x00FF_9867;
pub const IR9_DOWN: u32 = 0x00FF_38C7;
pub const IR9_SELECT: u32 = 0x00FF_18E7;

// ============================================================================
// Logitech Squeezebox remote
// ============================================================================

pub const IR_SQUEEZEBOX_POWER: u32 = 0x7689_40BF;
pub const IR_SQUEEZEBOX_NOW_PLAYING: u32 = 0x7689_02FD;
pub const IR_SQUEEZEBOX_SIZE: u32 = 0x7689_52AD;
pub const IR_SQUEEZEBOX_BRIGHTNESS: u32 = 0x7689_926D;
pub const IR_SQUEEZEBOX_ARROW_UP: u32 = 0x7689_E01F;
pub const IR_SQUEEZEBOX_ARROW_DOWN: u32 = 0x7689_B04F;
pub const IR_SQUEEZEBOX_ARROW_LEFT: u32 = 0x7689_906F;
pub const IR_SQUEEZEBOX_ARROW_RIGHT: u32 = 0x7689_D02F;
pub const IR_SQUEEZEBOX_BROWSE: u32 = 0x7689_C837;
pub const IR_SQUEEZEBOX_SHUFFLE: u32 = 0x7689_D827;
pub const IR_SQUEEZEBOX_REPEAT: u32 = 0x7689_38C7;
pub const IR_SQUEEZEBOX_1: u32 = 0x7689_F00F;
pub const IR_SQUEEZEBOX_2: u32 = 0x7689_08F7;
pub const IR_SQUEEZEBOX_3: u32 = 0x7689_8877;
pub const IR_SQUEEZEBOX_4: u32 = 0x7689_48B7;
pub const IR_SQUEEZEBOX_5: u32 = 0x7689_C936;
pub const IR_SQUEEZEBOX_6: u32 = 0x7689_28D7;
pub const IR_SQUEEZEBOX_7: u32 = 0x7689_A857;
pub const IR_SQUEEZEBOX_8: u32 = 0x7689_6897;
pub const IR_SQUEEZEBOX_9: u32 = 0x7689_E817;
pub const IR_SQUEEZEBOX_0: u32 = 0x7689_18E7;

// ============================================================================
// Roku Express remote
// ============================================================================

pub const IR_ROKU_BACK: u32 = 0x57E3_6699;
pub const IR_ROKU_HOME: u32 = 0x57E3_C03F;
pub const IR_ROKU_UP: u32 = 0x57E3_9867;
pub const IR_ROKU_DOWN: u32 = 0x57E3_CC33;
pub const IR_ROKU_LEFT: u32 = 0x57E3_7887;
pub const IR_ROKU_RIGHT: u32 = 0x57E3_B44B;
pub const IR_ROKU_SELECT: u32 = 0x57E3_54AB;
pub const IR_ROKU_REDO: u32 = 0x57E3_1EE1;
pub const IR_ROKU_STAR: u32 = 0x57E3_8679;
pub const IR_ROKU_REWIND: u32 = 0x57E3_2CD3;
pub const IR_ROKU_PLAY: u32 = 0x57E3_32CD;
pub const IR_ROKU_FFD: u32 = 0x57E3_AA55;
pub const IR_ROKU_NETFLIX: u32 = 0x57E3_4AB5;
pub const IR_ROKU_ESPN: u32 = 0x57E3_5AA5;
pub const IR_ROKU_HULU: u32 = 0x57E3_6A95;
pub const IR_ROKU_SLING: u32 = 0x57E3_7A85;
