use crate::math::Vec2;

/// Interaction state fed into every simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Particle currently held by the cursor
    pub grabbed: Option<usize>,
    /// Offset from the grabbed particle to the cursor, captured at grab time
    pub pull: Vec2,
    /// Active thruster control bits (THRUSTER_BACK, ...)
    pub controls: u8,
    /// Amplifies BACK thrusters
    pub turbo: bool,
}

impl InputState {
    pub fn set_control(&mut self, bit: u8, pressed: bool) {
        if pressed {
            self.controls |= bit;
        } else {
            self.controls &= !bit;
        }
    }

    pub fn set_turbo(&mut self, on: bool) {
        self.turbo = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{THRUSTER_BACK, THRUSTER_LEFT};

    #[test]
    fn test_set_control() {
        let mut input = InputState::default();
        input.set_control(THRUSTER_BACK, true);
        input.set_control(THRUSTER_LEFT, true);
        assert_eq!(input.controls, THRUSTER_BACK | THRUSTER_LEFT);
        input.set_control(THRUSTER_BACK, false);
        assert_eq!(input.controls, THRUSTER_LEFT);
    }
}
