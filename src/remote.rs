//! The IR remote context: receiver, resolver, repeat handling and actions
//! wired together.
//!
//! [`IrRemote`] owns everything the dispatch path needs between ticks: the
//! decoder (through the [`Receiver`]), the light device, the clock, the
//! repeat record and the cached preset counts. Nothing lives in globals, so
//! several instances can be tested side by side.
//!
//! # Main Loop
//!
//! Call [`IrRemote::poll`] once per scheduler tick. It never blocks and
//! never fails; the returned [`PollOutcome`] describes what happened and is
//! only meant for diagnostics.
//!
//! ```rust
//! use ir_dispatch::{IrRemote, PollOutcome, DispatchOutcome, ActionType, RemoteType};
//! use ir_dispatch::config::IrConfig;
//! use ir_dispatch::hal::{MockClock, MockDecoder, MockLight};
//! use ir_dispatch::remotes::codes;
//!
//! let config = IrConfig::default().with_remote(RemoteType::Ir44);
//! let mut remote = IrRemote::new(MockDecoder::new(), MockLight::new(), MockClock::new())
//!     .with_config(config);
//!
//! assert_eq!(remote.poll(), PollOutcome::Enabled);
//!
//! remote.decoder_mut().queue_code(codes::IR44_BPLUS);
//! remote.clock_mut().advance(120);
//! assert_eq!(
//!     remote.poll(),
//!     PollOutcome::Dispatched {
//!         code: codes::IR44_BPLUS,
//!         outcome: DispatchOutcome::Executed { action: ActionType::BrightUp, count: 1 },
//!     }
//! );
//! assert_eq!(remote.light().brightness, 154);
//! ```
//!
//! # Direct Dispatch
//!
//! Codes that arrive through other channels (a UDP bridge, a test harness)
//! can skip the receiver with [`IrRemote::handle_code`], and settings pages
//! can trigger an action by type with [`IrRemote::invoke`]. Both go through
//! the same repeat handling.

use crate::actions::{ActionContext, ActionState, ActionType};
use crate::config::IrConfig;
use crate::receiver::{Receiver, ReceiverPoll, ReceiverState};
use crate::remotes::{self, ProfileError, RemoteProfile, RemoteType, REPEAT_CODE};
use crate::repeat::RepeatState;
use crate::traits::{Clock, IrDecoder, LightDevice, TriggerSource};

// ============================================================================
// Outcomes
// ============================================================================

/// Result of dispatching one raw code or action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchOutcome {
    /// The action ran and a state-changed notification was sent.
    Executed {
        /// The action that ran.
        action: ActionType,
        /// Consecutive runs of this action, including this one.
        count: u32,
    },
    /// Same non-repeatable action again within the debounce window.
    Suppressed {
        /// The action that was swallowed.
        action: ActionType,
    },
    /// The code is not mapped on the active remote; the repeat record was
    /// cleared.
    Unmapped {
        /// The raw code received.
        code: u32,
    },
    /// A repeat frame arrived with no previous action recorded.
    NothingToRepeat,
    /// No remote is selected.
    NoRemote,
}

impl DispatchOutcome {
    /// The action that ran, if any.
    pub fn executed(&self) -> Option<ActionType> {
        match self {
            DispatchOutcome::Executed { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// What one call to [`IrRemote::poll`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// IR is off; nothing was touched.
    Disabled,
    /// IR was just turned off; decoder released and repeat record cleared.
    Released,
    /// IR was just turned on; decoder acquired, no decode this tick.
    Enabled,
    /// Too soon since the previous decode attempt.
    RateLimited,
    /// Nothing received.
    NoSignal,
    /// A frame without a valid code was received and discarded.
    ZeroCode,
    /// A code was received and dispatched.
    Dispatched {
        /// The raw code received.
        code: u32,
        /// What dispatching it did.
        outcome: DispatchOutcome,
    },
    /// The decoder could not be acquired or released; retried next tick.
    DecoderFault,
}

// ============================================================================
// IrRemote
// ============================================================================

/// IR remote dispatch engine.
///
/// # Type Parameters
///
/// - `D`: The IR decoder ([`IrDecoder`] trait)
/// - `L`: The light device actions operate on ([`LightDevice`] trait)
/// - `C`: The time source ([`Clock`] trait)
///
/// # Thread Safety
///
/// Not thread-safe and not meant to be. The whole dispatch path runs to
/// completion inside [`poll`](Self::poll) on the main loop; wrap the remote
/// in a mutex if another task needs access to it.
pub struct IrRemote<D: IrDecoder, L: LightDevice, C: Clock> {
    receiver: Receiver<D>,
    light: L,
    clock: C,
    config: IrConfig,
    repeat: RepeatState,
    actions: ActionState,
    preset_buttons: [Option<u8>; RemoteType::COUNT],
    custom_profile: Option<RemoteProfile>,
}

impl<D: IrDecoder, L: LightDevice, C: Clock> IrRemote<D, L, C> {
    /// Creates a remote with IR disabled and default timing.
    pub fn new(decoder: D, light: L, clock: C) -> Self {
        Self {
            receiver: Receiver::new(decoder),
            light,
            clock,
            config: IrConfig::default(),
            repeat: RepeatState::new(),
            actions: ActionState::new(),
            preset_buttons: [None; RemoteType::COUNT],
            custom_profile: None,
        }
    }

    /// Applies a configuration.
    pub fn with_config(mut self, config: IrConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Replaces the configuration.
    ///
    /// A changed remote selector takes effect on the next
    /// [`poll`](Self::poll).
    pub fn set_config(&mut self, config: IrConfig) {
        self.receiver.set_poll_interval(config.poll_interval_ms);
        self.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> &IrConfig {
        &self.config
    }

    /// Select a remote by its configuration value.
    ///
    /// `0` or an unknown value turns IR off on the next poll.
    pub fn set_remote(&mut self, selector: u8) {
        self.config.remote = selector;
    }

    /// The selected remote, `None` if IR is off.
    pub fn remote_type(&self) -> Option<RemoteType> {
        self.config.remote_type().filter(|remote| remote.is_enabled())
    }

    /// Key map of the selected remote.
    pub fn active_profile(&self) -> Option<RemoteProfile> {
        match self.remote_type()? {
            RemoteType::Custom => self.custom_profile.or_else(|| RemoteType::Custom.profile()),
            remote => remote.profile(),
        }
    }

    /// Install the key map used when [`RemoteType::Custom`] is selected.
    ///
    /// The table is checked first; a table with a zero or duplicated code is
    /// rejected and the previous one kept.
    pub fn set_custom_profile(&mut self, profile: RemoteProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.custom_profile = Some(profile);
        self.preset_buttons[RemoteType::Custom.selector() as usize] = None;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Run one receiver step. Call once per scheduler tick.
    pub fn poll(&mut self) -> PollOutcome {
        let now_ms = self.clock.now_ms();
        let step = match self.receiver.poll(self.config.remote, now_ms) {
            Ok(step) => step,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("IR decoder fault");
                if self.remote_type().is_none() {
                    self.repeat.clear();
                }
                return PollOutcome::DecoderFault;
            }
        };

        match step {
            ReceiverPoll::Disabled => PollOutcome::Disabled,
            ReceiverPoll::Released => {
                #[cfg(feature = "defmt")]
                defmt::info!("IR disabled");
                self.repeat.clear();
                PollOutcome::Released
            }
            ReceiverPoll::Enabled => {
                #[cfg(feature = "defmt")]
                defmt::info!("IR enabled, remote {=u8}", self.config.remote);
                PollOutcome::Enabled
            }
            ReceiverPoll::RateLimited => PollOutcome::RateLimited,
            ReceiverPoll::NoSignal => PollOutcome::NoSignal,
            ReceiverPoll::ZeroCode => PollOutcome::ZeroCode,
            ReceiverPoll::Code(code) => {
                #[cfg(feature = "defmt")]
                defmt::info!("IR recv: {=u32:#x}", code);
                PollOutcome::Dispatched {
                    code,
                    outcome: self.handle_code(code),
                }
            }
        }
    }

    /// Dispatch a raw code as if it had just been received.
    ///
    /// [`REPEAT_CODE`] re-runs the last action without a lookup. Any other
    /// code is resolved on the active remote; a miss clears the repeat
    /// record so a following repeat frame does nothing.
    pub fn handle_code(&mut self, code: u32) -> DispatchOutcome {
        if code == REPEAT_CODE {
            return match self.repeat.last() {
                Some(action) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("IR repeat");
                    self.invoke(action)
                }
                None => DispatchOutcome::NothingToRepeat,
            };
        }

        let Some(profile) = self.active_profile() else {
            self.repeat.clear();
            return DispatchOutcome::NoRemote;
        };

        match profile.resolve(code) {
            Some(action) => self.invoke(action),
            None => {
                self.repeat.clear();
                DispatchOutcome::Unmapped { code }
            }
        }
    }

    /// Run an action through repeat handling, then notify the device.
    pub fn invoke(&mut self, action: ActionType) -> DispatchOutcome {
        let now_ms = self.clock.now_ms();
        let invocation = self.repeat.register(action, now_ms, self.config.debounce_ms);
        if !invocation.should_run() {
            #[cfg(feature = "defmt")]
            defmt::debug!("IR suppressed {=str}", action.action().name);
            return DispatchOutcome::Suppressed { action };
        }

        let preset_buttons = if action.preset_number().is_some() {
            self.preset_buttons_configured()
        } else {
            0
        };
        let ctx = ActionContext {
            now_ms,
            preset_buttons,
            preset_page_window_ms: self.config.preset_cycle_window_ms,
        };

        self.actions.perform(action, &mut self.light, ctx);
        self.light.notify_state_changed(TriggerSource::Button);

        #[cfg(feature = "defmt")]
        defmt::info!("IR action: {=str}", action.action().name);

        DispatchOutcome::Executed {
            action,
            count: self.repeat.repeat_count(),
        }
    }

    /// Preset buttons on the selected remote used to page presets.
    ///
    /// Counted once per remote and cached. `0` when IR is off.
    pub fn preset_buttons_configured(&mut self) -> u8 {
        let Some(remote) = self.remote_type() else {
            return 0;
        };
        let slot = remote.selector() as usize;
        if let Some(count) = self.preset_buttons[slot] {
            return count;
        }
        let count = self
            .active_profile()
            .map(|profile| remotes::preset_buttons(&profile))
            .unwrap_or(0);
        self.preset_buttons[slot] = Some(count);
        count
    }

    /// Cached preset button count for `remote`, if already computed.
    pub fn cached_preset_buttons(&self, remote: RemoteType) -> Option<u8> {
        self.preset_buttons[remote.selector() as usize]
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Repeat record.
    pub fn repeat_state(&self) -> &RepeatState {
        &self.repeat
    }

    /// Per-action state (color rotation, preset paging).
    pub fn action_state(&self) -> &ActionState {
        &self.actions
    }

    /// Receiver state.
    pub fn receiver_state(&self) -> ReceiverState {
        self.receiver.state()
    }

    /// Borrow the light device.
    pub fn light(&self) -> &L {
        &self.light
    }

    /// Mutably borrow the light device.
    pub fn light_mut(&mut self) -> &mut L {
        &mut self.light
    }

    /// Borrow the decoder.
    pub fn decoder(&self) -> &D {
        self.receiver.decoder()
    }

    /// Mutably borrow the decoder.
    pub fn decoder_mut(&mut self) -> &mut D {
        self.receiver.decoder_mut()
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutably borrow the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Take the parts back out.
    pub fn into_parts(self) -> (D, L, C) {
        (self.receiver.into_decoder(), self.light, self.clock)
    }
}
