//! Counter with a spring-animated background intensity.

use std::time::Duration;

pub const INTENSITY_STEP: f32 = 0.1;
pub const MAX_INTENSITY: f32 = 0.9;

const SPRING_TENSION: f32 = 120.0;
const SPRING_FRICTION: f32 = 14.0;
const SETTLE_EPSILON: f32 = 0.001;
/// Integration step; long frames are split into these.
const STEP: Duration = Duration::from_millis(1);
/// Upper bound on simulated time per tick so a stalled loop doesn't spin.
const MAX_FRAME: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    pub fn at_rest(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Advances the simulation; returns whether the position moved.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            let moved = self.position != self.target;
            self.position = self.target;
            self.velocity = 0.0;
            return moved;
        }

        let before = self.position;
        let mut remaining = elapsed.min(MAX_FRAME);
        let dt = STEP.as_secs_f32();
        while remaining >= STEP {
            let force = -SPRING_TENSION * (self.position - self.target);
            let damping = -SPRING_FRICTION * self.velocity;
            self.velocity += (force + damping) * dt;
            self.position += self.velocity * dt;
            remaining -= STEP;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position != before
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterState {
    count: u32,
    background: Spring,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self {
            count: 0,
            background: Spring::at_rest(0.0),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn can_decrement(&self) -> bool {
        self.count > 0
    }

    pub fn increment(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        self.retarget();
        true
    }

    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.count -= 1;
        self.retarget();
        true
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.count != 0;
        self.count = 0;
        self.retarget();
        changed
    }

    pub fn target_intensity(&self) -> f32 {
        (self.count as f32 * INTENSITY_STEP).min(MAX_INTENSITY)
    }

    /// Current animated background alpha in `0.0..=MAX_INTENSITY` (may overshoot briefly).
    pub fn intensity(&self) -> f32 {
        self.background.position
    }

    pub fn is_animating(&self) -> bool {
        !self.background.is_settled()
    }

    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.background.advance(elapsed)
    }

    fn retarget(&mut self) {
        self.background.target = self.target_intensity();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/counter.rs"]
mod tests;
