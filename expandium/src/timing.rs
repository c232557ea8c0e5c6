use std::sync::OnceLock;
use std::time::Instant;

/// Raw monotonic tick count, in platform clock units
pub type Ticks = u64;

/// Conversion ratio from raw ticks to nanoseconds, plus the tick origin
#[derive(Debug)]
struct Timebase {
    /// Instant the tick counter is measured from
    anchor: Instant,
    /// Nanoseconds-per-tick numerator
    numer: u64,
    /// Nanoseconds-per-tick denominator
    denom: u64,
}

impl Timebase {
    /// Query the platform timebase. The std monotonic clock counts in
    /// nanoseconds on every supported platform, so the ratio is 1/1.
    fn query() -> Self {
        Timebase {
            anchor: Instant::now(),
            numer: 1,
            denom: 1,
        }
    }
}

/// Process-wide timebase, initialized on first use
static TIMEBASE: OnceLock<Timebase> = OnceLock::new();

fn timebase() -> &'static Timebase {
    TIMEBASE.get_or_init(Timebase::query)
}

/// Read the monotonic clock as a raw tick count.
pub fn now_ticks() -> Ticks {
    timebase().anchor.elapsed().as_nanos() as Ticks
}

/// Convert a tick interval to seconds using the process-wide timebase.
///
/// An end tick earlier than the start tick saturates to zero, so the
/// result is never negative.
pub fn elapsed_seconds(start: Ticks, end: Ticks) -> f64 {
    let timebase = timebase();
    let nanos = end.saturating_sub(start) * timebase.numer / timebase.denom;
    nanos as f64 / 1_000_000_000.0
}
