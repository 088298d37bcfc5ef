use crate::adapters::native::Clock;
use crate::ports::clock::ClockPort;

static CLOCK: Clock = Clock;

/// Returns a reference to the global clock instance
pub fn clock() -> &'static dyn ClockPort {
    &CLOCK
}
