// Animated actor base: sprite sequencing, facing, and collision bounds

use std::collections::HashMap;

use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::na::Point2;

/// Fraction of a frame slot each tick contributes to the animation.
/// The frame index advances once the accumulator reaches a full slot.
pub const ANIMATION_RATE: f32 = 0.3;

/// Direction an actor is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Whether the sprite should be drawn mirrored. Art faces right.
    pub fn flip_x(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Manages animation playback for an actor
///
/// Sequences are ordered, non-empty lists of frame identifiers keyed by
/// name. Switching sequences always resets the frame index and the
/// accumulator.
#[derive(Debug, Default)]
pub struct SpriteAnimator {
    /// All available sequences
    sequences: HashMap<String, Vec<String>>,
    /// Currently playing sequence name
    current: String,
    /// Current frame index
    frame_index: usize,
    /// Fractional progress toward the next frame
    accumulator: f32,
}

impl SpriteAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence. Frames must be non-empty.
    pub fn add_sequence(&mut self, name: &str, frames: Vec<String>) {
        debug_assert!(!frames.is_empty(), "sequence {name} has no frames");
        self.sequences.insert(name.to_string(), frames);
    }

    /// Play a sequence by name, restarting only when it differs from the
    /// current one. Enemies assert their pose every tick through this.
    pub fn play(&mut self, name: &str) {
        if self.current != name {
            self.play_from_start(name);
        }
    }

    /// Play a sequence from its first frame, even if it is already the
    /// current one. Re-triggered hero attacks must restart the swing.
    pub fn play_from_start(&mut self, name: &str) {
        self.current = name.to_string();
        self.frame_index = 0;
        self.accumulator = 0.0;
    }

    /// Advance the animation one tick. With `hold_last` the index stays
    /// on the final frame instead of wrapping (terminal death poses).
    pub fn advance(&mut self, hold_last: bool) {
        self.accumulator += ANIMATION_RATE;
        if self.accumulator >= 1.0 {
            self.accumulator = 0.0;
            let len = self.current_len();
            if len > 1 && !(hold_last && self.frame_index >= len - 1) {
                self.frame_index = (self.frame_index + 1) % len;
            }
        }
    }

    /// Get the current sequence name
    pub fn current_sequence(&self) -> &str {
        &self.current
    }

    /// Get the current frame index
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Whether the current frame is the sequence's last
    pub fn on_last_frame(&self) -> bool {
        let len = self.current_len();
        len > 0 && self.frame_index >= len - 1
    }

    /// Frame identifier to draw, with the index clamped defensively
    pub fn current_frame_id(&self) -> &str {
        self.sequences
            .get(&self.current)
            .and_then(|frames| frames.get(self.frame_index.min(frames.len().saturating_sub(1))))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.sequences.get(&self.current).map_or(0, Vec::len)
    }
}

/// Shared spatial and animation state for on-screen actors.
///
/// `pos` is the bottom-center of the sprite (the feet); y grows downward
/// toward the ground plane.
#[derive(Debug)]
pub struct ActorBody {
    pub pos: Vec2,
    pub facing: Facing,
    /// Sprite width and height in world units
    pub size: Vec2,
    pub animator: SpriteAnimator,
}

impl ActorBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            facing: Facing::Right,
            size,
            animator: SpriteAnimator::new(),
        }
    }

    /// Collision bounds anchored at the feet
    pub fn bounds(&self) -> Aabb {
        let half_w = self.size.x / 2.0;
        Aabb::new(
            Point2::new(self.pos.x - half_w, self.pos.y - self.size.y),
            Point2::new(self.pos.x + half_w, self.pos.y),
        )
    }
}

/// Draw-ready pose data for the presentation layer
#[derive(Debug, Clone)]
pub struct ActorPose {
    pub frame: String,
    pub position: Vec2,
    pub flip_x: bool,
}

/// Capability set shared by the hero and enemies
pub trait AnimatedActor {
    fn body(&self) -> &ActorBody;
    fn body_mut(&mut self) -> &mut ActorBody;
    fn is_dead(&self) -> bool;

    /// Advance the animation one tick; dead actors freeze on their final frame
    fn advance_animation(&mut self) {
        let hold_last = self.is_dead();
        self.body_mut().animator.advance(hold_last);
    }

    /// Collision bounds anchored at the feet
    fn bounds(&self) -> Aabb {
        self.body().bounds()
    }

    /// Snapshot of the current pose for rendering
    fn pose(&self) -> ActorPose {
        let body = self.body();
        ActorPose {
            frame: body.animator.current_frame_id().to_string(),
            position: body.pos,
            flip_x: body.facing.flip_x(),
        }
    }
}
