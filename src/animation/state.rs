use crate::animation::scale::{SLABS, update_value};

/// Outcome of advancing an [`AnimationState`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepUpdate {
    /// The step is still running; carries the current scale.
    InProgress(f64),
    /// The step completed and the scale locked to this value.
    Settled(f64),
}

impl StepUpdate {
    /// Return `true` for [`StepUpdate::Settled`].
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Settled(_))
    }
}

/// Scale, direction and previous-scale triple owned by one node.
///
/// `direction` is `0.0` exactly when no step is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    scale: f64,
    direction: f64,
    previous_scale: f64,
}

impl AnimationState {
    /// Idle state at scale 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current direction: `-1.0`, `0.0` or `1.0`.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Scale at the last settlement.
    pub fn previous_scale(&self) -> f64 {
        self.previous_scale
    }

    /// Return `true` while a step is in flight.
    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }

    /// Advance the scale by one tick.
    ///
    /// Once the scale has moved more than one full unit away from `previous_scale`, it snaps to
    /// `previous_scale + direction` and the state goes idle.
    pub fn update(&mut self) -> StepUpdate {
        self.scale += update_value(self.scale, self.direction, SLABS as f64, 1.0);
        if (self.scale - self.previous_scale).abs() > 1.0 {
            self.scale = self.previous_scale + self.direction;
            self.direction = 0.0;
            self.previous_scale = self.scale;
            return StepUpdate::Settled(self.previous_scale);
        }
        StepUpdate::InProgress(self.scale)
    }

    /// Begin a step away from the last settled value.
    ///
    /// Returns `false` and leaves the state untouched if a step is already running.
    pub fn start_updating(&mut self) -> bool {
        if self.direction != 0.0 {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.previous_scale;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
