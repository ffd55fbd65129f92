//! Receiver poller - owns the IR decoder and its polling cadence.
//!
//! The poller is stepped once per scheduler tick with the configured remote
//! selector. It never blocks: each step does at most one decode attempt and
//! then returns.
//!
//! # States
//!
//! ```text
//!             selector valid               cadence elapsed
//!  Disabled ─────────────────▶ Armed ─────────────────────▶ decode attempt
//!     ▲       (enable, no decode)  ▲                              │
//!     │                            └──────────────────────────────┘
//!     └──────── selector 0 or out of range (disable) ──── any state
//! ```
//!
//! The tick right after enabling only acquires the decoder. Decode attempts
//! are spaced at least `poll_interval_ms` apart.
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::receiver::{Receiver, ReceiverPoll};
//! use ir_dispatch::hal::MockDecoder;
//!
//! let mut receiver = Receiver::new(MockDecoder::new());
//!
//! // First tick with a remote selected: warm-up only
//! assert_eq!(receiver.poll(8, 0), Ok(ReceiverPoll::Enabled));
//!
//! receiver.decoder_mut().queue_code(0x00F7_C03F);
//! assert_eq!(receiver.poll(8, 50), Ok(ReceiverPoll::Code(0x00F7_C03F)));
//!
//! // Selecting "no remote" releases the decoder
//! assert_eq!(receiver.poll(0, 60), Ok(ReceiverPoll::Released));
//! assert!(!receiver.decoder().enabled);
//! ```

use crate::remotes::RemoteType;
use crate::traits::IrDecoder;

/// Minimum time between two decode attempts.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 120;

/// Whether the decoder resource is currently held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverState {
    /// No decoder resource held.
    #[default]
    Disabled,
    /// Decoder held and capturing.
    Armed,
}

/// What one poller step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverPoll {
    /// IR is off; nothing was touched.
    Disabled,
    /// IR was just turned off and the decoder released.
    Released,
    /// IR was just turned on; no decode attempt this tick.
    Enabled,
    /// Too soon since the previous decode attempt.
    RateLimited,
    /// Decode attempted, nothing captured.
    NoSignal,
    /// A frame was captured but carried no valid code.
    ZeroCode,
    /// A non-zero code was captured.
    Code(u32),
}

/// Poller state machine around an [`IrDecoder`].
#[derive(Debug)]
pub struct Receiver<D: IrDecoder> {
    decoder: D,
    state: ReceiverState,
    last_poll_ms: Option<u64>,
    poll_interval_ms: u64,
}

impl<D: IrDecoder> Receiver<D> {
    /// Creates a disabled receiver with the default poll interval.
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            state: ReceiverState::Disabled,
            last_poll_ms: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Sets the minimum time between decode attempts.
    pub fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Run one poller step.
    ///
    /// `selector` is the configured remote type; `0` or any value past the
    /// last known remote means IR is off. Errors only come from acquiring or
    /// releasing the decoder. A failed acquire leaves the receiver disabled
    /// and a failed release leaves it armed, so the next step tries again.
    pub fn poll(&mut self, selector: u8, now_ms: u64) -> Result<ReceiverPoll, D::Error> {
        let enabled = RemoteType::from_selector(selector).is_some_and(RemoteType::is_enabled);

        if !enabled {
            return self.release();
        }

        if self.state == ReceiverState::Disabled {
            self.decoder.enable()?;
            self.state = ReceiverState::Armed;
            return Ok(ReceiverPoll::Enabled);
        }

        if let Some(last) = self.last_poll_ms {
            if now_ms.saturating_sub(last) < self.poll_interval_ms {
                return Ok(ReceiverPoll::RateLimited);
            }
        }
        self.last_poll_ms = Some(now_ms);

        let Some(code) = self.decoder.try_decode() else {
            return Ok(ReceiverPoll::NoSignal);
        };
        self.decoder.resume();

        if code == 0 {
            Ok(ReceiverPoll::ZeroCode)
        } else {
            Ok(ReceiverPoll::Code(code))
        }
    }

    /// Release the decoder if held. Idempotent.
    ///
    /// A failed release keeps the receiver armed, so the next call tries
    /// again.
    pub fn release(&mut self) -> Result<ReceiverPoll, D::Error> {
        if self.state == ReceiverState::Disabled {
            return Ok(ReceiverPoll::Disabled);
        }
        self.decoder.disable()?;
        self.state = ReceiverState::Disabled;
        Ok(ReceiverPoll::Released)
    }

    /// Current state.
    pub fn state(&self) -> ReceiverState {
        self.state
    }

    /// Returns true while the decoder resource is held.
    pub fn is_armed(&self) -> bool {
        self.state == ReceiverState::Armed
    }

    /// Time of the last decode attempt.
    pub fn last_poll_ms(&self) -> Option<u64> {
        self.last_poll_ms
    }

    /// Minimum time between decode attempts.
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }

    /// Sets the minimum time between decode attempts.
    pub fn set_poll_interval(&mut self, poll_interval_ms: u64) {
        self.poll_interval_ms = poll_interval_ms;
    }

    /// Borrow the decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Mutably borrow the decoder.
    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    /// Give the decoder back, whatever state it is in.
    pub fn into_decoder(self) -> D {
        self.decoder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockDecoder;

    const IR24: u8 = 8;

    fn armed() -> Receiver<MockDecoder> {
        let mut receiver = Receiver::new(MockDecoder::new());
        assert_eq!(receiver.poll(IR24, 0), Ok(ReceiverPoll::Enabled));
        receiver
    }

    // =========================================================================
    // Lifecycle Tests
    // =========================================================================

    #[test]
    fn starts_disabled() {
        let mut receiver = Receiver::new(MockDecoder::new());
        assert_eq!(receiver.state(), ReceiverState::Disabled);
        assert_eq!(receiver.poll(0, 0), Ok(ReceiverPoll::Disabled));
        assert_eq!(receiver.decoder().enable_calls, 0);
    }

    #[test]
    fn enable_tick_does_not_decode() {
        let mut receiver = Receiver::new(MockDecoder::new());
        receiver.decoder_mut().queue_code(0x1234);
        assert_eq!(receiver.poll(IR24, 0), Ok(ReceiverPoll::Enabled));
        assert!(receiver.is_armed());
        assert!(receiver.decoder().enabled);
        assert_eq!(receiver.decoder().decode_attempts, 0);
    }

    #[test]
    fn out_of_range_selector_is_disabled() {
        let mut receiver = armed();
        assert_eq!(receiver.poll(12, 500), Ok(ReceiverPoll::Released));
        assert_eq!(receiver.poll(200, 1_000), Ok(ReceiverPoll::Disabled));
        assert_eq!(receiver.decoder().disable_calls, 1);
    }

    #[test]
    fn release_is_idempotent() {
        let mut receiver = armed();
        assert_eq!(receiver.release(), Ok(ReceiverPoll::Released));
        assert_eq!(receiver.release(), Ok(ReceiverPoll::Disabled));
        assert_eq!(receiver.decoder().disable_calls, 1);
    }

    #[test]
    fn failed_enable_retries_next_tick() {
        let mut receiver = Receiver::new(MockDecoder::new().with_failing_enable());
        assert_eq!(receiver.poll(IR24, 0), Err(()));
        assert_eq!(receiver.state(), ReceiverState::Disabled);

        receiver.decoder_mut().fail_enable = false;
        assert_eq!(receiver.poll(IR24, 10), Ok(ReceiverPoll::Enabled));
        assert_eq!(receiver.decoder().enable_calls, 2);
    }

    #[test]
    fn failed_release_stays_armed_and_retries() {
        let mut receiver = armed();
        receiver.decoder_mut().fail_disable = true;
        assert_eq!(receiver.poll(0, 10), Err(()));
        assert!(receiver.is_armed());
        assert!(receiver.decoder().enabled);

        receiver.decoder_mut().fail_disable = false;
        assert_eq!(receiver.poll(0, 20), Ok(ReceiverPoll::Released));
        assert!(!receiver.decoder().enabled);
        assert_eq!(receiver.decoder().disable_calls, 2);
        assert_eq!(receiver.poll(0, 30), Ok(ReceiverPoll::Disabled));
    }

    #[test]
    fn switching_remotes_keeps_decoder() {
        let mut receiver = armed();
        assert_eq!(receiver.poll(4, 200), Ok(ReceiverPoll::NoSignal));
        assert_eq!(receiver.decoder().enable_calls, 1);
    }

    // =========================================================================
    // Cadence Tests
    // =========================================================================

    #[test]
    fn decode_attempts_are_rate_limited() {
        let mut receiver = armed();
        assert_eq!(receiver.poll(IR24, 1_000), Ok(ReceiverPoll::NoSignal));
        assert_eq!(receiver.poll(IR24, 1_119), Ok(ReceiverPoll::RateLimited));
        assert_eq!(receiver.decoder().decode_attempts, 1);
        assert_eq!(receiver.poll(IR24, 1_120), Ok(ReceiverPoll::NoSignal));
        assert_eq!(receiver.decoder().decode_attempts, 2);
        assert_eq!(receiver.last_poll_ms(), Some(1_120));
    }

    #[test]
    fn custom_interval() {
        let mut receiver = Receiver::new(MockDecoder::new()).with_poll_interval(50);
        receiver.poll(IR24, 0).unwrap();
        receiver.poll(IR24, 0).unwrap();
        assert_eq!(receiver.poll(IR24, 49), Ok(ReceiverPoll::RateLimited));
        assert_eq!(receiver.poll(IR24, 50), Ok(ReceiverPoll::NoSignal));
    }

    // =========================================================================
    // Decode Tests
    // =========================================================================

    #[test]
    fn code_is_returned_and_decoder_resumed() {
        let mut receiver = armed();
        receiver.decoder_mut().queue_code(0x00F7_00FF);
        assert_eq!(receiver.poll(IR24, 200), Ok(ReceiverPoll::Code(0x00F7_00FF)));
        assert_eq!(receiver.decoder().resume_calls, 1);
    }

    #[test]
    fn zero_code_is_discarded_but_resumed() {
        let mut receiver = armed();
        receiver.decoder_mut().queue_code(0);
        assert_eq!(receiver.poll(IR24, 200), Ok(ReceiverPoll::ZeroCode));
        assert_eq!(receiver.decoder().resume_calls, 1);
    }

    #[test]
    fn no_signal_does_not_resume() {
        let mut receiver = armed();
        assert_eq!(receiver.poll(IR24, 200), Ok(ReceiverPoll::NoSignal));
        assert_eq!(receiver.decoder().resume_calls, 0);
    }
}
