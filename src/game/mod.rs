// Simulation core
//
// This module contains the deterministic per-tick game simulation:
// - Animated actor base (animation sequencing, bounds, poses)
// - Hero and enemy state machines
// - Combat hit-testing shared by both
// - Static platform geometry
// - Session controller (menu/playing/paused/game-over + transitions)

pub mod actor;
pub mod combat;
pub mod enemy;
pub mod hero;
pub mod platform;
pub mod session;
pub mod snapshot;
pub mod stats;

// Re-export commonly used types
pub use actor::{ActorBody, ActorPose, AnimatedActor, Facing, SpriteAnimator};
pub use enemy::{Enemy, EnemyKind};
pub use hero::{Hero, HeroState};
pub use platform::Platform;
pub use session::{GameSession, SessionState, TransitionPhase};
pub use snapshot::FrameSnapshot;
