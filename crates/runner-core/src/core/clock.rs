/// Fixed-step driver for the host's frame loop.
///
/// The simulation wants equal-sized steps; real frames are not. The clock
/// accumulates frame time and tells the host how many whole steps to run
/// now, capping the backlog after a stall so one oversized delta cannot
/// tunnel actors through tiles.
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    step_dt: f32,
    carry: f32,
}

impl StepClock {
    /// Longest backlog honored in one frame, in steps. Time beyond it is
    /// discarded as a stall, not gameplay.
    pub const MAX_STEPS_PER_FRAME: u32 = 4;

    /// A clock yielding steps of `step_dt` seconds.
    pub fn new(step_dt: f32) -> Self {
        Self {
            step_dt,
            carry: 0.0,
        }
    }

    /// Feed one real frame's elapsed seconds. Returns how many fixed steps
    /// the host should run before rendering.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.carry += frame_dt.max(0.0);
        let cap = self.step_dt * Self::MAX_STEPS_PER_FRAME as f32;
        if self.carry > cap {
            self.carry = cap;
        }
        let steps = (self.carry / self.step_dt) as u32;
        self.carry -= steps as f32 * self.step_dt;
        steps
    }

    /// Fraction of a step accumulated but not yet run, for render
    /// interpolation.
    pub fn pending_fraction(&self) -> f32 {
        self.carry / self.step_dt
    }

    /// The fixed step size in seconds.
    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }
}

impl Default for StepClock {
    /// 60 steps per second.
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_full_frame_yields_one_step() {
        let mut clock = StepClock::new(1.0 / 60.0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_carry_over() {
        let mut clock = StepClock::new(1.0 / 60.0);
        assert_eq!(clock.advance(0.008), 0);
        assert_eq!(clock.advance(0.010), 1);
    }

    #[test]
    fn a_stall_is_capped() {
        let mut clock = StepClock::new(1.0 / 60.0);
        let steps = clock.advance(2.5);
        assert_eq!(steps, StepClock::MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut clock = StepClock::new(1.0 / 60.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.pending_fraction(), 0.0);
    }

    #[test]
    fn pending_fraction_stays_below_one() {
        let mut clock = StepClock::new(1.0 / 60.0);
        clock.advance(0.02);
        let alpha = clock.pending_fraction();
        assert!((0.0..1.0).contains(&alpha), "alpha was {alpha}");
    }
}
