// Read-only per-frame view handed to the presentation layer
//
// Everything a renderer needs is here; it never touches simulation
// internals.

use super::actor::ActorPose;
use super::platform::Platform;
use super::session::SessionState;

/// Draw-ready state of one frame
#[derive(Debug)]
pub struct FrameSnapshot<'a> {
    pub state: SessionState,
    /// Overlay opacity of the active transition, 0 when none
    pub transition_alpha: u8,
    pub hero: ActorPose,
    pub hero_health: i32,
    pub hero_max_health: i32,
    /// Poses of every enemy still on the roster, including ones playing
    /// their death animation
    pub enemies: Vec<ActorPose>,
    pub platforms: &'a [Platform],
}
