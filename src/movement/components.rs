use bevy::prelude::*;

/// Hidden velocity of the heading smoother, in degrees per second.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct TurnSmoothing {
    pub velocity: f32,
}

/// Where the character is currently looking, read from the camera each frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            forward: *transform.forward(),
            right: *transform.right(),
        }
    }

    /// Forward and right flattened onto the ground plane.
    pub fn horizontal(&self) -> (Vec3, Vec3) {
        let flatten = |v: Vec3| Vec3::new(v.x, 0.0, v.z).normalize_or_zero();
        (flatten(self.forward), flatten(self.right))
    }
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::Z,
            right: Vec3::NEG_X,
        }
    }
}

/// Yaw in degrees of a rotation about +Y, with 0° facing +Z.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

pub fn rotation_from_yaw(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}
