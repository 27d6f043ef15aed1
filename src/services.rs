//! Capability interfaces the controller steps are written against.
//!
//! The Bevy systems hand engine-backed implementations to the pure step
//! functions; tests hand in fakes.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::LocomotionClip;

/// Applies a displacement, respecting whatever collision rules the host has.
pub trait MotionService {
    fn move_by(&mut self, displacement: Vec3);
}

/// Answers whether a ray hits anything on the given layers.
pub trait RaycastService {
    fn raycast(&self, origin: Vec3, direction: Dir3, max_distance: f32, mask: LayerMask) -> bool;
}

/// Minimal view of an animation player.
pub trait AnimationService {
    fn is_playing(&self, clip: LocomotionClip) -> bool;
    fn play(&mut self, clip: LocomotionClip);
}

impl RaycastService for SpatialQuery<'_, '_> {
    fn raycast(&self, origin: Vec3, direction: Dir3, max_distance: f32, mask: LayerMask) -> bool {
        self.cast_ray(
            origin,
            direction,
            max_distance,
            true,
            &SpatialQueryFilter::from_mask(mask),
        )
        .is_some()
    }
}
