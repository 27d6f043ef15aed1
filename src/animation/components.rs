use std::collections::HashMap;
use std::fmt;

use bevy::animation::graph::AnimationNodeIndex;
use bevy::prelude::*;

use crate::services::AnimationService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum LocomotionClip {
    #[default]
    Idle,
    Walk,
    Run,
    Backwards,
}

impl LocomotionClip {
    pub const ALL: [LocomotionClip; 4] = [
        LocomotionClip::Idle,
        LocomotionClip::Walk,
        LocomotionClip::Run,
        LocomotionClip::Backwards,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LocomotionClip::Idle => "Idle",
            LocomotionClip::Walk => "Walk",
            LocomotionClip::Run => "Run",
            LocomotionClip::Backwards => "Backwards",
        }
    }
}

impl fmt::Display for LocomotionClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The clip the movement step picked this frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct LocomotionState(pub LocomotionClip);

/// Maps each clip to its node in the animator's `AnimationGraph`.
///
/// Lives next to the `AnimationPlayer` it drives.
#[derive(Component, Debug, Clone, Default)]
pub struct LocomotionClips {
    nodes: HashMap<LocomotionClip, AnimationNodeIndex>,
}

impl LocomotionClips {
    pub fn new(nodes: impl IntoIterator<Item = (LocomotionClip, AnimationNodeIndex)>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn node(&self, clip: LocomotionClip) -> Option<AnimationNodeIndex> {
        self.nodes.get(&clip).copied()
    }
}

/// [`AnimationService`] backed by a Bevy `AnimationPlayer`.
pub struct ClipAnimator<'a> {
    pub player: &'a mut AnimationPlayer,
    pub clips: &'a LocomotionClips,
}

impl AnimationService for ClipAnimator<'_> {
    fn is_playing(&self, clip: LocomotionClip) -> bool {
        self.clips
            .node(clip)
            .is_some_and(|node| self.player.is_playing_animation(node))
    }

    fn play(&mut self, clip: LocomotionClip) {
        let Some(node) = self.clips.node(clip) else {
            warn!("No animation node registered for clip {}", clip);
            return;
        };
        self.player.stop_all();
        self.player.play(node).repeat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_names_match_animator_states() {
        let names: Vec<_> = LocomotionClip::ALL.iter().map(LocomotionClip::name).collect();
        assert_eq!(names, ["Idle", "Walk", "Run", "Backwards"]);
    }

    #[test]
    fn animator_plays_and_reports_registered_clip() {
        let walk = AnimationNodeIndex::new(1);
        let clips = LocomotionClips::new([(LocomotionClip::Walk, walk)]);
        let mut player = AnimationPlayer::default();

        let mut animator = ClipAnimator {
            player: &mut player,
            clips: &clips,
        };
        assert!(!animator.is_playing(LocomotionClip::Walk));
        animator.play(LocomotionClip::Walk);
        assert!(animator.is_playing(LocomotionClip::Walk));

        // unregistered clips are never playing and play is ignored
        animator.play(LocomotionClip::Run);
        assert!(!animator.is_playing(LocomotionClip::Run));
        assert!(animator.is_playing(LocomotionClip::Walk));
    }
}
