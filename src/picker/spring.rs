//! Damped spring used for settle animations.

use std::time::Duration;

/// Largest integration step; longer frames are split so the spring stays stable
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target below which the spring may come to rest
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.05,
            rest_speed: 0.5,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(300.0, 30.0)
    }
}

/// Advance a damped harmonic oscillator by `dt` seconds.
///
/// Returns the new `(position, velocity)`. Semi-implicit Euler, sub-stepped.
pub fn spring_step(
    config: &SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    dt: f64,
) -> (f64, f64) {
    let mut x = position;
    let mut v = velocity;
    let mut remaining = dt.max(0.0);
    while remaining > 0.0 {
        let h = remaining.min(MAX_STEP_SECS);
        let force = -config.stiffness * (x - target) - config.damping * v;
        v += force / config.mass * h;
        x += v * h;
        remaining -= h;
    }
    (x, v)
}

/// A settle toward a target that can be retargeted mid-flight
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    config: SpringConfig,
    target: f64,
    velocity: f64,
    active: bool,
}

impl Settle {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            target: 0.0,
            velocity: 0.0,
            active: false,
        }
    }

    /// Start (or redirect) the settle; the current velocity carries over
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        self.active = true;
    }

    /// Stop animating, e.g. when the user grabs the strip
    pub fn cancel(&mut self) {
        self.active = false;
        self.velocity = 0.0;
    }

    /// Advance `position` by one frame. Snaps exactly onto the target at rest.
    pub fn update(&mut self, position: f64, dt: Duration) -> f64 {
        if !self.active {
            return position;
        }
        let (x, v) = spring_step(&self.config, position, self.velocity, self.target, dt.as_secs_f64());
        if (x - self.target).abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.active = false;
            self.velocity = 0.0;
            return self.target;
        }
        self.velocity = v;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(settle: &mut Settle, mut position: f64, frames: usize) -> f64 {
        for _ in 0..frames {
            position = settle.update(position, FRAME);
        }
        position
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut settle = Settle::new(SpringConfig::default());
        settle.retarget(-96.0);
        let position = run(&mut settle, 0.0, 120);
        assert_eq!(position, -96.0);
        // at rest the position no longer changes
        assert_eq!(settle.update(position, FRAME), -96.0);
    }

    #[test]
    fn motion_is_not_an_instant_jump() {
        let mut settle = Settle::new(SpringConfig::default());
        settle.retarget(-480.0);
        let first = settle.update(0.0, FRAME);
        assert!(first < 0.0 && first > -480.0);
    }

    #[test]
    fn retarget_replaces_previous_target() {
        let mut settle = Settle::new(SpringConfig::default());
        settle.retarget(-480.0);
        let midway = run(&mut settle, 0.0, 5);
        settle.retarget(-48.0);
        let position = run(&mut settle, midway, 200);
        assert_eq!(position, -48.0);
    }

    #[test]
    fn cancelled_settle_leaves_position_alone() {
        let mut settle = Settle::new(SpringConfig::default());
        settle.retarget(100.0);
        settle.cancel();
        assert_eq!(settle.update(3.0, FRAME), 3.0);
    }

    #[test]
    fn long_frames_stay_stable() {
        let config = SpringConfig::default();
        let (x, _) = spring_step(&config, 0.0, 0.0, -48.0, 1.0);
        assert!((x + 48.0).abs() < 1.0);
    }
}
