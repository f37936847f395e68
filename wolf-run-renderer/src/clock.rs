use std::fmt;

pub trait Clock {
    type Instant: fmt::Debug + Copy;

    fn now(&self) -> Self::Instant;
    fn seconds_elapsed(&self, start: Self::Instant, end: Self::Instant) -> f32;
}

// After a long stall, drop the backlog instead of fast-forwarding through it.
const MAX_FRAMES_PER_TICK: u32 = 5;

/// Turns wall-clock time into a whole number of fixed-length frames.
pub struct FrameTimer<C: Clock> {
    clock: C,
    last_tick: C::Instant,
    accumulator: f32,
    frame_seconds: f32,
}

impl<C: Clock> FrameTimer<C> {
    pub fn new(clock: C, frames_per_second: u32) -> Self {
        Self {
            last_tick: clock.now(),
            clock,
            accumulator: 0.0,
            frame_seconds: 1.0 / frames_per_second as f32,
        }
    }

    /// Frames that became due since the previous tick.
    pub fn tick(&mut self) -> u32 {
        let now = self.clock.now();
        self.accumulator += self.clock.seconds_elapsed(self.last_tick, now);
        self.last_tick = now;

        let frames = (self.accumulator / self.frame_seconds).floor() as u32;
        if frames > MAX_FRAMES_PER_TICK {
            self.accumulator = 0.0;
            return MAX_FRAMES_PER_TICK;
        }

        self.accumulator -= frames as f32 * self.frame_seconds;
        frames
    }

    pub fn seconds_until_next_frame(&self) -> f32 {
        let pending =
            self.accumulator + self.clock.seconds_elapsed(self.last_tick, self.clock.now());
        (self.frame_seconds - pending).max(0.0)
    }
}
