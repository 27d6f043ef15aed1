use avian3d::prelude::*;
use bevy::prelude::*;

use crate::character::ThirdPersonController;

use super::components::MotionRequests;
use super::{MAX_SLIDES, SKIN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub distance: f32,
    /// Surface normal of whatever was hit, pointing back at the mover.
    pub normal: Vec3,
}

/// Collide-and-slide: moves from `position` by `displacement`, stopping
/// `SKIN_WIDTH` short of each hit and sliding the remainder along the
/// surface. `sweep` casts the mover's shape from a position along a
/// direction for a distance.
pub fn slide(
    position: Vec3,
    displacement: Vec3,
    mut sweep: impl FnMut(Vec3, Dir3, f32) -> Option<SweepHit>,
) -> Vec3 {
    let mut position = position;
    let mut remaining = displacement;

    for _ in 0..MAX_SLIDES {
        let Ok((direction, length)) = Dir3::new_and_length(remaining) else {
            break;
        };

        let Some(hit) = sweep(position, direction, length + SKIN_WIDTH) else {
            position += remaining;
            break;
        };

        let travel = (hit.distance - SKIN_WIDTH).clamp(0.0, length);
        position += direction * travel;

        let leftover = direction * (length - travel);
        remaining = leftover - hit.normal * leftover.dot(hit.normal).min(0.0);
    }

    position
}

pub fn clear_motion_requests(mut requests: Query<&mut MotionRequests>) {
    for mut requests in &mut requests {
        requests.0.clear();
    }
}

#[allow(clippy::type_complexity)]
pub fn apply_motion_requests(
    spatial_query: SpatialQuery,
    mut characters: Query<
        (
            Entity,
            &mut Transform,
            &mut MotionRequests,
            Option<&Collider>,
            Option<&CollisionLayers>,
        ),
        With<ThirdPersonController>,
    >,
) {
    for (entity, mut transform, mut requests, collider, layers) in &mut characters {
        let rotation = transform.rotation;
        let mut position = transform.translation;

        let filter = layers
            .map(|layers| SpatialQueryFilter::from_mask(layers.filters))
            .unwrap_or_default()
            .with_excluded_entities([entity]);

        for displacement in requests.drain() {
            position = match collider {
                Some(collider) => slide(position, displacement, |origin, direction, distance| {
                    spatial_query
                        .cast_shape(
                            collider,
                            origin,
                            rotation,
                            direction,
                            &ShapeCastConfig::from_max_distance(distance),
                            &filter,
                        )
                        .map(|hit| SweepHit {
                            distance: hit.distance,
                            normal: hit.normal1,
                        })
                }),
                // Reported at setup; move without collision.
                None => position + displacement,
            };
        }

        if position != transform.translation {
            trace!("Moved {:?} to {}", entity, position);
            transform.translation = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A wall at `x = wall_x` facing -X.
    fn wall(wall_x: f32) -> impl FnMut(Vec3, Dir3, f32) -> Option<SweepHit> {
        move |origin, direction, distance| {
            if direction.x <= 0.0 {
                return None;
            }
            let to_wall = (wall_x - origin.x) / direction.x;
            (to_wall >= 0.0 && to_wall <= distance).then_some(SweepHit {
                distance: to_wall,
                normal: Vec3::NEG_X,
            })
        }
    }

    #[test]
    fn unobstructed_moves_full_distance() {
        let end = slide(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), |_, _, _| None);
        assert_eq!(end, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn stops_short_of_a_wall() {
        let end = slide(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), wall(1.0));
        assert!((end.x - (1.0 - SKIN_WIDTH)).abs() < 1e-5);
    }

    #[test]
    fn slides_along_a_wall() {
        let end = slide(Vec3::ZERO, Vec3::new(2.0, 0.0, 2.0), wall(1.0));
        assert!(end.x < 1.0);
        // the blocked x component is removed, z keeps going
        assert!((end.z - 2.0).abs() < 1e-4, "{end}");
    }

    #[test]
    fn zero_displacement_never_sweeps() {
        let mut sweeps = 0;
        let end = slide(Vec3::ONE, Vec3::ZERO, |_, _, _| {
            sweeps += 1;
            None
        });
        assert_eq!(end, Vec3::ONE);
        assert_eq!(sweeps, 0);
    }
}
