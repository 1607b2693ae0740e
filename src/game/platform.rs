// Static platform geometry

use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::na::Point2;

/// Visual tile dimensions in world units
pub const TILE_WIDTH: f32 = 64.0;
pub const TILE_HEIGHT: f32 = 32.0;

// Collision padding shrinks the rectangle inward from the visual tile
// bounds so sprites don't snag on the very edge of a platform.
const PAD_X_FRACTION: f32 = 0.1;
const PAD_TOP: f32 = 8.0;
const PAD_BOTTOM: f32 = 4.0;

/// A horizontal run of repeated tiles with a padded collision rectangle.
/// Immutable after construction.
#[derive(Debug)]
pub struct Platform {
    /// Sprite name of the repeated tile
    pub sprite: &'static str,
    /// Top-left origin of the first tile
    pub origin: Vec2,
    /// Number of repeated tiles
    pub repeat: u32,
    /// Padded collision rectangle
    rect: Aabb,
}

impl Platform {
    pub fn new(x: f32, y: f32, sprite: &'static str, repeat: u32) -> Self {
        let width = TILE_WIDTH * repeat as f32;
        let pad_x = TILE_WIDTH * PAD_X_FRACTION;
        let rect = Aabb::new(
            Point2::new(x + pad_x, y + PAD_TOP),
            Point2::new(x + width - pad_x, y + TILE_HEIGHT - PAD_BOTTOM),
        );

        Self {
            sprite,
            origin: Vec2::new(x, y),
            repeat,
            rect,
        }
    }

    /// Padded collision rectangle
    pub fn rect(&self) -> &Aabb {
        &self.rect
    }

    /// X of the left collision edge
    pub fn left(&self) -> f32 {
        self.rect.mins.x
    }

    /// X of the right collision edge
    pub fn right(&self) -> f32 {
        self.rect.maxs.x
    }

    /// Y of the standing surface (y grows downward)
    pub fn top(&self) -> f32 {
        self.rect.mins.y
    }

    /// Full visual width of the tile run
    pub fn width(&self) -> f32 {
        TILE_WIDTH * self.repeat as f32
    }
}

/// The forest stage layout
pub fn forest_layout() -> Vec<Platform> {
    vec![
        Platform::new(100.0, 350.0, "platform_grass", 3),
        Platform::new(400.0, 300.0, "platform_rock", 3),
        Platform::new(200.0, 200.0, "platform_log", 3),
        Platform::new(600.0, 250.0, "platform_rock", 3),
    ]
}
