use crate::constants::{SWING_MAX_DEG, SWING_MIN_DEG, SWING_STEP_DEG, TICKS_PER_SWEEP};

/// The swinging needle: a bounded angle that reflects at the swing extremes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oscillator {
    angle: i32,
    direction: i32, // -1 or +1
    running: bool,
}

impl Oscillator {
    /// A freshly started swing: parked at the lower bound, moving upward.
    pub fn start() -> Self {
        Self {
            angle: SWING_MIN_DEG,
            direction: 1,
            running: true,
        }
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Advance one tick. The angle never leaves
    /// [SWING_MIN_DEG, SWING_MAX_DEG]; the direction flips on the tick that
    /// reaches a bound. No-op while halted.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.angle += self.direction * SWING_STEP_DEG;
        if self.angle >= SWING_MAX_DEG {
            self.angle = SWING_MAX_DEG;
            self.direction = -1;
        } else if self.angle <= SWING_MIN_DEG {
            self.angle = SWING_MIN_DEG;
            self.direction = 1;
        }
    }
}

/// Closed-form needle angle after `ticks` ticks from a fresh start.
///
/// Triangle wave over the swing bounds: reflection via modulo on the doubled
/// sweep, O(1) in the tick count. Agrees with the stepwise [`Oscillator`] at
/// every tick.
pub fn angle_after(ticks: u32) -> i32 {
    let period = TICKS_PER_SWEEP * 2;
    let pos = ticks % period;
    if pos <= TICKS_PER_SWEEP {
        SWING_MIN_DEG + (pos as i32) * SWING_STEP_DEG
    } else {
        SWING_MAX_DEG - ((pos - TICKS_PER_SWEEP) as i32) * SWING_STEP_DEG
    }
}
