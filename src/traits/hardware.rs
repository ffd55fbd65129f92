//! Hardware abstraction traits for the IR receiver and the time source.
//!
//! These are the only two pieces of hardware the dispatch engine touches
//! directly. Everything visible to the user (LEDs, presets) goes through
//! [`LightDevice`](crate::traits::LightDevice) instead.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`IrDecoder`] | Non-blocking source of decoded IR codes |
//! | [`Clock`] | Monotonic millisecond time source |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`].
//!
//! # Example
//!
//! ```rust
//! use ir_dispatch::traits::IrDecoder;
//! use ir_dispatch::hal::MockDecoder;
//!
//! let mut decoder = MockDecoder::new();
//! decoder.enable().unwrap();
//! decoder.queue_code(0x00F7_00FF);
//!
//! assert_eq!(decoder.try_decode(), Some(0x00F7_00FF));
//! decoder.resume();
//! assert_eq!(decoder.try_decode(), None);
//! ```

/// Infra-red decoder trait - abstracts the receiver peripheral and the
/// protocol decoder sitting behind it.
///
/// The decoder owns a hardware resource (timer, RMT channel, interrupt) that
/// is only held while IR reception is enabled. The receiver poller calls
/// [`enable`](Self::enable) when a remote is selected and
/// [`disable`](Self::disable) as soon as it is deselected.
///
/// # Implementation Notes
///
/// - [`try_decode`](Self::try_decode) must never block; return `None` when
///   no complete frame has been captured yet
/// - A value of `0` means "captured something, but it is not a valid code"
/// - Protocol repeat frames should be reported as `0xFFFF_FFFF`
/// - After a result has been consumed, [`resume`](Self::resume) re-arms
///   capture for the next frame
///
/// # Example Implementation
///
/// ```rust,ignore
/// use ir_dispatch::traits::IrDecoder;
///
/// struct RmtDecoder { /* peripheral handles */ }
///
/// impl IrDecoder for RmtDecoder {
///     type Error = ();
///
///     fn enable(&mut self) -> Result<(), ()> {
///         // Start the RMT receiver...
///         Ok(())
///     }
///
///     fn disable(&mut self) -> Result<(), ()> {
///         // Stop the RMT receiver, release the channel...
///         Ok(())
///     }
///
///     fn try_decode(&mut self) -> Option<u32> {
///         // Check the ring buffer for a complete NEC frame...
///         None
///     }
///
///     fn resume(&mut self) {
///         // Clear the capture buffer...
///     }
/// }
/// ```
pub trait IrDecoder {
    /// Error type for acquiring or releasing the receiver.
    type Error;

    /// Acquire the receiver hardware and start capturing.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Stop capturing and release the receiver hardware.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Returns the next decoded code, if a complete frame is available.
    ///
    /// Must not block.
    fn try_decode(&mut self) -> Option<u32>;

    /// Re-arm capture after a result has been consumed.
    fn resume(&mut self);
}

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds for poll cadence and debounce
/// timing. On desktop, this can wrap `std::time::Instant`. On embedded,
/// use a hardware timer.
///
/// # Example
///
/// ```rust
/// use ir_dispatch::traits::Clock;
/// use ir_dispatch::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(120);
/// assert_eq!(clock.now_ms(), 120);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(feature = "std")]
/// Wall-clock backed [`Clock`] for desktop builds.
///
/// Measures milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose epoch is "now".
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
