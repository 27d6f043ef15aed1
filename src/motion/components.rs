use bevy::prelude::*;

use crate::services::MotionService;

/// Displacements requested this frame, applied in order by the motion step.
///
/// The movement and gravity steps each push their own entry, and the entries
/// are swept one after the other.
#[derive(Component, Debug, Clone, Default)]
pub struct MotionRequests(pub Vec<Vec3>);

impl MotionRequests {
    pub fn drain(&mut self) -> std::vec::Drain<'_, Vec3> {
        self.0.drain(..)
    }
}

impl MotionService for MotionRequests {
    fn move_by(&mut self, displacement: Vec3) {
        self.0.push(displacement);
    }
}
