//! Frame observer trait for display and progress reporting.

use crate::Frame;

/// Callbacks invoked by [`Ticker::run`][crate::Ticker::run] once per tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — line printer
///
/// ```rust,ignore
/// struct LinePrinter;
///
/// impl FrameObserver for LinePrinter {
///     fn on_frame(&mut self, _index: u64, frame: &Frame) {
///         println!("{}  {}", frame.stopwatch_text, frame.readouts[0]);
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called with each freshly evaluated frame.  `index` counts from 0.
    fn on_frame(&mut self, _index: u64, _frame: &Frame) {}

    /// Called once after the last frame.
    fn on_stop(&mut self, _frames: u64) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
