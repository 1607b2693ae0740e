// Enemy state machine: patrol, chase, attack, death

use glam::Vec2;
use rand::Rng;

use crate::engine::assets::SpriteCatalog;
use crate::engine::audio::{AudioOutput, SoundCue};

use super::actor::{ActorBody, AnimatedActor, Facing};
use super::combat::{self, IMPACT_FRAME};
use super::hero::Hero;
use super::stats::{EnemyStats, ENEMY_STATS, STAGE_WIDTH};

/// Ticks before the very first swing can connect
const INITIAL_ATTACK_COOLDOWN: u32 = 2;

/// Enemy variety; selects the sprite family and base health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Quick to kill
    Scout,
    /// Soaks more hits
    Brute,
}

impl EnemyKind {
    /// Sprite catalog prefix for this kind
    pub fn sprite_prefix(self) -> &'static str {
        match self {
            Self::Scout => "enemy_scout",
            Self::Brute => "enemy_brute",
        }
    }

    /// Starting health for this kind
    pub fn base_health(self) -> i32 {
        match self {
            Self::Scout => 3,
            Self::Brute => 5,
        }
    }

    /// Pick a kind at random
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Scout
        } else {
            Self::Brute
        }
    }
}

/// Behavior states; `Dead` is permanent once entered. Chasing is folded
/// into `Patrolling`, distinguished only by the hero's proximity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Patrolling,
    Attacking,
    Dead,
}

pub struct Enemy {
    body: ActorBody,
    kind: EnemyKind,
    state: EnemyState,
    stats: EnemyStats,
    health: i32,
    /// Base patrol speed, rolled once at spawn
    speed: f32,
    /// Walk direction, -1.0 or 1.0
    direction: f32,
    attack_cooldown: u32,
    idle_timer: u32,
    /// Patrol leg length; re-rolled whenever the timer expires
    idle_limit: u32,
    /// Horizontal interval the enemy is confined to, if platform-bound
    platform_limits: Option<(f32, f32)>,
    /// Ground enemies roam with no movement bounds at all
    is_ground_enemy: bool,
}

impl Enemy {
    pub fn new<R: Rng>(
        kind: EnemyKind,
        x: f32,
        y: f32,
        is_ground_enemy: bool,
        catalog: &dyn SpriteCatalog,
        rng: &mut R,
    ) -> Self {
        let stats = ENEMY_STATS;
        let prefix = kind.sprite_prefix();
        let mut body = ActorBody::new(Vec2::new(x, y), Vec2::new(stats.width, stats.height));

        let walk = catalog
            .sequence(prefix, "walk", 4)
            .unwrap_or_else(|_| vec![format!("{prefix}/walk_0")]);
        let attack = catalog
            .sequence(prefix, "attack", 8)
            .unwrap_or_else(|_| walk.clone());
        let death = catalog
            .sequence(prefix, "death", 4)
            .unwrap_or_else(|_| walk.clone());
        let idle = catalog
            .sequence(prefix, "idle", 4)
            .unwrap_or_else(|_| walk.clone());

        body.animator.add_sequence("walk", walk);
        body.animator.add_sequence("attack", attack);
        body.animator.add_sequence("death", death);
        body.animator.add_sequence("idle", idle);
        body.animator.play("idle");

        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        body.facing = if direction < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };

        Self {
            body,
            kind,
            state: EnemyState::Patrolling,
            health: kind.base_health(),
            speed: rng.random_range(stats.min_speed..stats.max_speed),
            direction,
            attack_cooldown: INITIAL_ATTACK_COOLDOWN,
            idle_timer: 0,
            idle_limit: rng.random_range(stats.spawn_idle_min..=stats.spawn_idle_max),
            platform_limits: None,
            is_ground_enemy,
            stats,
        }
    }

    /// Confine patrol and chase movement to [left, right]
    pub fn set_platform_limits(&mut self, left: f32, right: f32) {
        self.platform_limits = Some((left, right));
    }

    /// Advance the enemy one tick. Precedence: attack, then chase, then
    /// patrol; all gated on the hero sharing the enemy's vertical band.
    pub fn update<R: Rng>(&mut self, hero: &mut Hero, rng: &mut R, audio: &mut dyn AudioOutput) {
        if self.is_dead() {
            self.advance_animation();
            return;
        }

        let delta = hero.position() - self.body.pos;
        let distance = delta.x.abs();
        let same_band = delta.y.abs() < self.stats.vertical_band;

        if same_band && distance < self.stats.attack_range && !hero.is_dead() {
            self.state = EnemyState::Attacking;
            self.body.animator.play("attack");
            self.set_direction(if delta.x < 0.0 { -1.0 } else { 1.0 });

            if self.body.animator.frame_index() == IMPACT_FRAME
                && self.attack_cooldown == 0
                && combat::actors_overlap(&self.body, hero.body())
            {
                hero.take_hit(audio);
                self.attack_cooldown = self.stats.attack_cooldown;
                audio.play_cue(SoundCue::EnemyAttack);
            }
        } else {
            self.state = EnemyState::Patrolling;
            if same_band && distance < self.stats.detection_range && !hero.is_dead() {
                self.chase(delta.x);
            } else {
                self.patrol(rng);
            }
        }

        self.advance_animation();
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    /// Apply one point of damage. No-op once dead, so a swing landing on
    /// a corpse mid-death-animation changes nothing.
    pub fn take_hit(&mut self, audio: &mut dyn AudioOutput) {
        if self.is_dead() {
            return;
        }

        self.health -= 1;
        audio.play_cue(SoundCue::EnemyHit);

        if self.health <= 0 {
            self.state = EnemyState::Dead;
            self.body.animator.play_from_start("death");
            audio.play_cue(SoundCue::EnemyDeath);
            log::debug!("{:?} enemy died", self.kind);
        }
    }

    /// Whether the death animation has fully played out; the roster drops
    /// the enemy at this point.
    pub fn death_animation_finished(&self) -> bool {
        self.is_dead() && self.body.animator.on_last_frame()
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn platform_limits(&self) -> Option<(f32, f32)> {
        self.platform_limits
    }

    fn chase(&mut self, dx: f32) {
        self.body.animator.play("walk");
        self.set_direction(if dx < 0.0 { -1.0 } else { 1.0 });

        let new_x = self.body.pos.x + self.speed * self.stats.chase_multiplier * self.direction;
        if self.can_move_to(new_x) {
            self.body.pos.x = new_x;
        }
    }

    fn patrol<R: Rng>(&mut self, rng: &mut R) {
        self.body.animator.play("walk");

        // Reverse at platform edges; shortening the idle leg keeps the
        // enemy from loitering right on the lip
        if let Some((left, right)) = self.platform_limits {
            if self.body.pos.x <= left + self.stats.edge_nudge
                || self.body.pos.x >= right - self.stats.edge_nudge
            {
                self.set_direction(-self.direction);
                self.idle_timer = self.idle_limit / 2;
            }
        }

        let new_x = self.body.pos.x + self.speed * self.direction;
        if self.can_move_to(new_x) {
            self.body.pos.x = new_x;
        }

        self.idle_timer += 1;
        if self.idle_timer >= self.idle_limit {
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            self.set_direction(direction);
            self.idle_timer = 0;
            self.idle_limit = rng.random_range(self.stats.idle_min..=self.stats.idle_max);
        }
    }

    fn can_move_to(&self, new_x: f32) -> bool {
        if self.is_ground_enemy {
            return true;
        }
        if let Some((left, right)) = self.platform_limits {
            return (left..=right).contains(&new_x);
        }
        (0.0..=STAGE_WIDTH).contains(&new_x)
    }

    fn set_direction(&mut self, direction: f32) {
        self.direction = direction;
        self.body.facing = if direction < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };
    }
}

impl AnimatedActor for Enemy {
    fn body(&self) -> &ActorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }

    fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }
}
