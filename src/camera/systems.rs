use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use crate::character::{CameraRig, ThirdPersonController};

/// Rigid follow: the camera takes the head's world position and rotation
/// as-is and keeps only its own scale.
pub fn sync_camera(head: &GlobalTransform, camera: &Transform) -> Transform {
    Transform {
        translation: head.translation(),
        rotation: head.rotation(),
        scale: camera.scale,
    }
}

pub fn follow_head(
    rigs: Query<&CameraRig, With<ThirdPersonController>>,
    mut transforms: ParamSet<(TransformHelper, Query<&mut Transform, Without<ChildOf>>)>,
) {
    // Motion already ran this frame, so resolve the head through the
    // hierarchy rather than trusting last frame's GlobalTransform.
    let heads: Vec<(Entity, GlobalTransform)> = rigs
        .iter()
        .filter_map(|rig| {
            let head = transforms.p0().compute_global_transform(rig.head).ok()?;
            Some((rig.camera, head))
        })
        .collect();

    let mut cameras = transforms.p1();
    for (camera, head) in heads {
        let Ok(mut transform) = cameras.get_mut(camera) else {
            continue;
        };
        *transform = sync_camera(&head, &transform);
    }
}
