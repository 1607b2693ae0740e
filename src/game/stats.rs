// Stage dimensions and actor tuning constants
//
// The whole simulation is configured by the fixed numbers below; there
// is no runtime configuration surface.

/// Stage width in world units
pub const STAGE_WIDTH: f32 = 800.0;

/// Stage height in world units
pub const STAGE_HEIGHT: f32 = 480.0;

/// Y coordinate of the ground plane (y grows downward)
pub const GROUND_LEVEL: f32 = STAGE_HEIGHT - 60.0;

/// Horizontal margin keeping the hero sprite inside the stage
pub const STAGE_EDGE_MARGIN: f32 = 50.0;

/// Downward acceleration added to vertical velocity per airborne tick
pub const GRAVITY_PER_TICK: f32 = 0.5;

/// Maximum distance below a platform top at which a falling hero snaps
/// onto it instead of passing through
pub const PLATFORM_SNAP_DISTANCE: f32 = 15.0;

/// Hero tuning values
#[derive(Debug, Clone)]
pub struct HeroStats {
    /// Horizontal movement per tick
    pub move_speed: f32,
    /// Upward velocity applied on jump
    pub jump_impulse: f32,
    /// Starting and maximum health
    pub max_health: i32,
    /// Ticks between attack triggers
    pub attack_cooldown: u32,
    /// Length of the hit-reaction window in ticks
    pub hit_reaction: u32,
    /// Sprite width in world units
    pub width: f32,
    /// Sprite height in world units
    pub height: f32,
}

pub const HERO_STATS: HeroStats = HeroStats {
    move_speed: 5.0,
    jump_impulse: 12.0,
    max_health: 15,
    attack_cooldown: 30,
    hit_reaction: 30,
    width: 20.0,
    height: 80.0,
};

/// Enemy tuning values, shared by every enemy kind
#[derive(Debug, Clone)]
pub struct EnemyStats {
    /// Horizontal distance at which an enemy starts attacking
    pub attack_range: f32,
    /// Horizontal distance at which an enemy starts chasing
    pub detection_range: f32,
    /// Vertical band within which the hero counts as reachable
    pub vertical_band: f32,
    /// Ticks between attack impacts
    pub attack_cooldown: u32,
    /// Chase speed as a multiple of base patrol speed
    pub chase_multiplier: f32,
    /// Distance from a platform edge at which a patrol reverses
    pub edge_nudge: f32,
    /// Base patrol speed range, rolled once per enemy
    pub min_speed: f32,
    pub max_speed: f32,
    /// Idle-timer threshold range at spawn
    pub spawn_idle_min: u32,
    pub spawn_idle_max: u32,
    /// Idle-timer threshold range for every later patrol leg
    pub idle_min: u32,
    pub idle_max: u32,
    /// Sprite width in world units
    pub width: f32,
    /// Sprite height in world units
    pub height: f32,
}

pub const ENEMY_STATS: EnemyStats = EnemyStats {
    attack_range: 35.0,
    detection_range: 100.0,
    vertical_band: 20.0,
    attack_cooldown: 60,
    chase_multiplier: 1.5,
    edge_nudge: 10.0,
    min_speed: 0.8,
    max_speed: 1.5,
    spawn_idle_min: 30,
    spawn_idle_max: 90,
    idle_min: 60,
    idle_max: 180,
    width: 30.0,
    height: 60.0,
};
