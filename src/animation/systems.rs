use bevy::prelude::*;

use crate::character::{AnimatorLink, ThirdPersonController};
use crate::services::AnimationService;

use super::components::{ClipAnimator, LocomotionClip, LocomotionClips, LocomotionState};

/// Asks `service` to play `clip` unless it already is.
///
/// Returns whether a play command was issued. Without a service this does
/// nothing; the missing animator is reported once at setup instead.
pub fn play_clip<S: AnimationService>(service: Option<&mut S>, clip: LocomotionClip) -> bool {
    let Some(service) = service else {
        return false;
    };

    if service.is_playing(clip) {
        return false;
    }

    service.play(clip);
    true
}

pub fn play_locomotion_clips(
    characters: Query<(&LocomotionState, Option<&AnimatorLink>), With<ThirdPersonController>>,
    mut animators: Query<(&mut AnimationPlayer, &LocomotionClips)>,
) {
    for (LocomotionState(clip), link) in &characters {
        let animator =
            link.and_then(|AnimatorLink(entity)| animators.get_mut(*entity).ok());
        let mut service = animator.map(|(player, clips)| ClipAnimator {
            player: player.into_inner(),
            clips,
        });

        if play_clip(service.as_mut(), *clip) {
            debug!("Playing locomotion clip {}", clip);
        }
    }
}
