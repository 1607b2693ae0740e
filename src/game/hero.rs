// Hero state machine: movement, jumping, attacking, damage, death

use glam::Vec2;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::na::Point2;

use crate::core::math::clamp;
use crate::engine::assets::SpriteCatalog;
use crate::engine::audio::{AudioOutput, SoundCue};
use crate::engine::input::FrameInput;

use super::actor::{ActorBody, AnimatedActor, Facing};
use super::combat::{self, IMPACT_FRAME};
use super::enemy::Enemy;
use super::platform::Platform;
use super::stats::{
    HeroStats, GRAVITY_PER_TICK, GROUND_LEVEL, HERO_STATS, PLATFORM_SNAP_DISTANCE,
    STAGE_EDGE_MARGIN, STAGE_WIDTH,
};

/// Spawn point at level start
const SPAWN_X: f32 = 100.0;

/// Horizontal inset of the platform collision probe
const PROBE_INSET_X: f32 = 5.0;
/// The probe reaches below the feet so platform tops register while falling
const PROBE_DROP: f32 = 10.0;

/// Behavior states. At most one is ever active by construction, and
/// `Dead` is permanent once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroState {
    /// Idle, running, or jumping; sub-selected by input and the grounded flag
    #[default]
    Normal,
    Attacking,
    HitReacting,
    Dead,
}

/// The player-controlled character
pub struct Hero {
    body: ActorBody,
    state: HeroState,
    stats: HeroStats,
    health: i32,
    velocity_y: f32,
    on_ground: bool,
    attack_cooldown: u32,
    hit_cooldown: u32,
    /// Set once the current swing has run its damage check
    attack_landed: bool,
    /// Edge memory for run/idle pose switches
    was_moving: bool,
}

impl Hero {
    /// Create a hero at the spawn point with full health, assembling
    /// animation sequences from whatever frames the catalog can provide.
    pub fn new(catalog: &dyn SpriteCatalog) -> Self {
        let stats = HERO_STATS;
        let mut body = ActorBody::new(
            Vec2::new(SPAWN_X, GROUND_LEVEL),
            Vec2::new(stats.width, stats.height),
        );

        let run = catalog
            .sequence("hero", "run", 8)
            .unwrap_or_else(|_| vec!["hero/run_0".to_string()]);
        let idle = catalog
            .sequence("hero", "idle", 4)
            .unwrap_or_else(|_| run.clone());
        let jump = catalog
            .sequence("hero", "jump", 1)
            .unwrap_or_else(|_| vec![run[0].clone()]);
        let attack = catalog
            .sequence("hero", "attack", 8)
            .unwrap_or_else(|_| run.clone());
        let hit = catalog
            .sequence("hero", "hit", 4)
            .unwrap_or_else(|_| run.clone());
        let death = catalog
            .sequence("hero", "death", 9)
            .unwrap_or_else(|_| run.clone());

        body.animator.add_sequence("run", run);
        body.animator.add_sequence("idle", idle);
        body.animator.add_sequence("jump", jump);
        body.animator.add_sequence("attack", attack);
        body.animator.add_sequence("hit", hit);
        body.animator.add_sequence("death", death);
        body.animator.play("idle");

        Self {
            body,
            state: HeroState::Normal,
            health: stats.max_health,
            stats,
            velocity_y: 0.0,
            on_ground: true,
            attack_cooldown: 0,
            hit_cooldown: 0,
            attack_landed: false,
            was_moving: false,
        }
    }

    /// Advance the hero one tick
    pub fn update(
        &mut self,
        input: &FrameInput,
        platforms: &[Platform],
        enemies: &mut [Enemy],
        audio: &mut dyn AudioOutput,
    ) {
        match self.state {
            HeroState::Dead => {
                self.advance_animation();
                return;
            }
            HeroState::HitReacting => {
                self.tick_hit_reaction(input);
                return;
            }
            HeroState::Attacking => self.tick_attack(input, enemies, audio),
            HeroState::Normal => self.tick_normal(input, audio),
        }

        self.advance_animation();
        self.apply_gravity();
        self.resolve_collisions(input, platforms);
        self.keep_in_bounds();
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    /// Apply one point of damage. No-op while already reacting to a hit
    /// or dead, so overlapping enemy swings cannot shred health.
    pub fn take_hit(&mut self, audio: &mut dyn AudioOutput) {
        if matches!(self.state, HeroState::HitReacting | HeroState::Dead) {
            return;
        }

        self.health -= 1;
        self.state = HeroState::HitReacting;
        self.hit_cooldown = self.stats.hit_reaction;
        self.body.animator.play_from_start("hit");

        if self.health <= 0 {
            self.die(audio);
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn state(&self) -> HeroState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn tick_normal(&mut self, input: &FrameInput, audio: &mut dyn AudioOutput) {
        self.handle_movement(input, false);
        self.handle_jump(input, audio);
        self.handle_attack_trigger(input, audio);
    }

    fn tick_attack(&mut self, input: &FrameInput, enemies: &mut [Enemy], audio: &mut dyn AudioOutput) {
        // Damage lands once per swing, on the impact frame. Several
        // overlapping enemies can be hit by the same swing.
        if self.body.animator.frame_index() == IMPACT_FRAME && !self.attack_landed {
            for enemy in enemies.iter_mut().filter(|e| !e.is_dead()) {
                if combat::actors_overlap(&self.body, enemy.body()) {
                    enemy.take_hit(audio);
                }
            }
            self.attack_landed = true;
        }

        // Reaching the end of the swing also closes the damage window
        if self.body.animator.on_last_frame() {
            self.attack_landed = true;
        }

        if self.attack_landed && !input.attack {
            self.state = HeroState::Normal;
            self.play_run_or_idle(input);
        }

        // Attacking does not root the hero
        self.handle_movement(input, true);
        self.handle_jump(input, audio);
    }

    fn tick_hit_reaction(&mut self, input: &FrameInput) {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);
        if self.hit_cooldown == 0 {
            self.state = HeroState::Normal;
            self.play_run_or_idle(input);
        }
    }

    fn handle_movement(&mut self, input: &FrameInput, allow_while_attacking: bool) {
        let attacking = self.state == HeroState::Attacking;
        if attacking && !allow_while_attacking {
            return;
        }

        let mut moving = false;
        if input.left {
            self.body.pos.x -= self.stats.move_speed;
            moving = true;
            if self.body.facing == Facing::Right {
                self.body.facing = Facing::Left;
                if !attacking {
                    self.body.animator.play_from_start("run");
                }
            }
        } else if input.right {
            self.body.pos.x += self.stats.move_speed;
            moving = true;
            if self.body.facing == Facing::Left {
                self.body.facing = Facing::Right;
                if !attacking {
                    self.body.animator.play_from_start("run");
                }
            }
        }

        // Start/stop edges reset the pose, but never mid-swing
        if !attacking {
            if moving && !self.was_moving {
                self.body.animator.play_from_start("run");
            } else if !moving && self.was_moving {
                self.body.animator.play_from_start("idle");
            }
        }
        self.was_moving = moving;
    }

    fn handle_jump(&mut self, input: &FrameInput, audio: &mut dyn AudioOutput) {
        if input.jump && self.on_ground && self.state != HeroState::Attacking {
            self.on_ground = false;
            self.velocity_y = -self.stats.jump_impulse;
            self.body.animator.play_from_start("jump");
            audio.play_cue(SoundCue::HeroJump);
        }
    }

    fn handle_attack_trigger(&mut self, input: &FrameInput, audio: &mut dyn AudioOutput) {
        if input.attack && self.state != HeroState::Attacking && self.attack_cooldown == 0 {
            self.state = HeroState::Attacking;
            self.attack_landed = false;
            self.attack_cooldown = self.stats.attack_cooldown;
            self.body.animator.play_from_start("attack");
            audio.play_cue(SoundCue::HeroAttack);
        }
    }

    fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.velocity_y += GRAVITY_PER_TICK;
            self.body.pos.y += self.velocity_y;
        }
    }

    fn resolve_collisions(&mut self, input: &FrameInput, platforms: &[Platform]) {
        self.on_ground = false;

        // Ground plane wins over any platform
        if self.body.pos.y >= GROUND_LEVEL {
            self.body.pos.y = GROUND_LEVEL;
            self.velocity_y = 0.0;
            self.on_ground = true;
            return;
        }

        let half_w = self.body.size.x / 2.0;
        let probe = Aabb::new(
            Point2::new(
                self.body.pos.x - half_w + PROBE_INSET_X,
                self.body.pos.y - self.body.size.y + PROBE_DROP,
            ),
            Point2::new(
                self.body.pos.x + half_w - PROBE_INSET_X,
                self.body.pos.y + PROBE_DROP,
            ),
        );

        for platform in platforms {
            if !probe.intersects(platform.rect()) {
                continue;
            }

            if self.velocity_y > 0.0
                && (self.body.pos.y - platform.top()).abs() < PLATFORM_SNAP_DISTANCE
            {
                // Falling close enough to the surface: land on it
                self.body.pos.y = platform.top();
                self.velocity_y = 0.0;
                self.on_ground = true;
            } else if !self.on_ground {
                // Airborne and pressing into the side: clamp to the edge
                if self.body.pos.x < platform.left() && input.right {
                    self.body.pos.x = platform.left() - half_w;
                } else if self.body.pos.x > platform.right() && input.left {
                    self.body.pos.x = platform.right() + half_w;
                }
            }
        }
    }

    fn keep_in_bounds(&mut self) {
        self.body.pos.x = clamp(self.body.pos.x, 0.0, STAGE_WIDTH - STAGE_EDGE_MARGIN);
        if self.body.pos.y < 0.0 {
            self.body.pos.y = 0.0;
            self.velocity_y = 0.0;
        }
    }

    fn play_run_or_idle(&mut self, input: &FrameInput) {
        if input.left || input.right {
            self.body.animator.play_from_start("run");
        } else {
            self.body.animator.play_from_start("idle");
        }
    }

    fn die(&mut self, audio: &mut dyn AudioOutput) {
        self.state = HeroState::Dead;
        self.body.animator.play_from_start("death");
        audio.play_cue(SoundCue::HeroDeath);
        log::info!("Hero died");
    }
}

impl AnimatedActor for Hero {
    fn body(&self) -> &ActorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }

    fn is_dead(&self) -> bool {
        self.state == HeroState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::StaticCatalog;
    use crate::engine::audio::NullAudio;
    use crate::game::enemy::EnemyKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hero() -> Hero {
        Hero::new(&StaticCatalog::forest_defaults())
    }

    fn tick(hero: &mut Hero, input: &FrameInput) {
        hero.update(input, &[], &mut [], &mut NullAudio);
    }

    fn holding_right() -> FrameInput {
        FrameInput {
            right: true,
            ..Default::default()
        }
    }

    fn attacking_input() -> FrameInput {
        FrameInput {
            attack: true,
            ..Default::default()
        }
    }

    /// Let a hit-reaction window expire
    fn wait_out_hit_reaction(hero: &mut Hero) {
        for _ in 0..HERO_STATS.hit_reaction + 1 {
            tick(hero, &FrameInput::default());
        }
    }

    #[test]
    fn test_spawns_grounded_with_full_health() {
        let hero = hero();
        assert_eq!(hero.health(), HERO_STATS.max_health);
        assert_eq!(hero.state(), HeroState::Normal);
        assert!(hero.on_ground());
        assert_eq!(hero.position().y, GROUND_LEVEL);
    }

    #[test]
    fn test_horizontal_movement() {
        let mut hero = hero();
        let start_x = hero.position().x;

        tick(&mut hero, &holding_right());
        assert_eq!(hero.position().x, start_x + HERO_STATS.move_speed);

        let left = FrameInput {
            left: true,
            ..Default::default()
        };
        tick(&mut hero, &left);
        assert_eq!(hero.position().x, start_x);
        assert!(hero.body().facing.flip_x());
    }

    #[test]
    fn test_stage_bounds_clamp() {
        let mut hero = hero();
        let left = FrameInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut hero, &left);
        }
        assert_eq!(hero.position().x, 0.0);

        for _ in 0..300 {
            tick(&mut hero, &holding_right());
        }
        assert_eq!(hero.position().x, STAGE_WIDTH - STAGE_EDGE_MARGIN);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut hero = hero();
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut hero, &jump);
        assert!(!hero.on_ground());
        assert!(hero.position().y < GROUND_LEVEL);

        let mut landed = false;
        for _ in 0..200 {
            tick(&mut hero, &FrameInput::default());
            if hero.on_ground() {
                landed = true;
                break;
            }
        }
        assert!(landed, "hero never came back down");
        assert_eq!(hero.position().y, GROUND_LEVEL);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut hero = hero();
        let jump = FrameInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut hero, &jump);
        let velocity_after_jump = hero.velocity_y;

        // A second jump edge mid-air must not re-apply the impulse
        tick(&mut hero, &jump);
        assert!(hero.velocity_y > velocity_after_jump, "gravity only");
    }

    #[test]
    fn test_attack_trigger_and_cooldown() {
        let mut hero = hero();
        tick(&mut hero, &attacking_input());

        assert_eq!(hero.state(), HeroState::Attacking);
        assert!(hero.attack_cooldown > 0);
        assert_eq!(hero.body().animator.current_sequence(), "attack");
    }

    #[test]
    fn test_attack_ends_on_release_after_landing() {
        let mut hero = hero();
        tick(&mut hero, &attacking_input());

        // Hold the attack through the whole swing; it stays active
        for _ in 0..60 {
            tick(&mut hero, &attacking_input());
        }
        assert_eq!(hero.state(), HeroState::Attacking);

        // Releasing after the swing has landed returns to Normal
        tick(&mut hero, &FrameInput::default());
        assert_eq!(hero.state(), HeroState::Normal);
        assert_eq!(hero.body().animator.current_sequence(), "idle");
    }

    #[test]
    fn test_swing_hits_every_overlapping_enemy_once() {
        let mut hero = hero();
        let catalog = StaticCatalog::forest_defaults();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut enemies = vec![
            Enemy::new(EnemyKind::Scout, 100.0, GROUND_LEVEL, true, &catalog, &mut rng),
            Enemy::new(EnemyKind::Brute, 110.0, GROUND_LEVEL, true, &catalog, &mut rng),
        ];
        let scout_health = enemies[0].health();
        let brute_health = enemies[1].health();

        let input = attacking_input();
        hero.update(&input, &[], &mut enemies, &mut NullAudio);
        assert_eq!(hero.state(), HeroState::Attacking);

        // Run the swing well past the impact frame
        for _ in 0..IMPACT_FRAME * 4 + 4 {
            hero.update(&input, &[], &mut enemies, &mut NullAudio);
        }

        // Both enemies lost exactly one hit point from the single swing
        assert_eq!(enemies[0].health(), scout_health - 1);
        assert_eq!(enemies[1].health(), brute_health - 1);

        // Holding the swing as it loops never lands again
        for _ in 0..80 {
            hero.update(&input, &[], &mut enemies, &mut NullAudio);
        }
        assert_eq!(enemies[0].health(), scout_health - 1);
        assert_eq!(enemies[1].health(), brute_health - 1);
    }

    #[test]
    fn test_take_hit_enters_reaction_and_blocks_repeat_damage() {
        let mut hero = hero();
        hero.take_hit(&mut NullAudio);

        assert_eq!(hero.state(), HeroState::HitReacting);
        assert_eq!(hero.health(), HERO_STATS.max_health - 1);

        // Further hits during the reaction window are ignored
        hero.take_hit(&mut NullAudio);
        hero.take_hit(&mut NullAudio);
        assert_eq!(hero.health(), HERO_STATS.max_health - 1);
    }

    #[test]
    fn test_hit_reaction_window_expires() {
        let mut hero = hero();
        hero.take_hit(&mut NullAudio);
        wait_out_hit_reaction(&mut hero);

        assert_eq!(hero.state(), HeroState::Normal);
    }

    #[test]
    fn test_fifteen_spaced_hits_kill_the_hero() {
        let mut hero = hero();
        for _ in 0..HERO_STATS.max_health {
            hero.take_hit(&mut NullAudio);
            wait_out_hit_reaction(&mut hero);
        }

        assert_eq!(hero.state(), HeroState::Dead);
        assert_eq!(hero.health(), 0);
        assert_eq!(hero.body().animator.current_sequence(), "death");
    }

    #[test]
    fn test_dead_is_permanent() {
        let mut hero = hero();
        for _ in 0..HERO_STATS.max_health {
            hero.take_hit(&mut NullAudio);
            wait_out_hit_reaction(&mut hero);
        }
        assert!(hero.is_dead());

        // Neither time nor damage changes anything after death
        for _ in 0..100 {
            tick(&mut hero, &holding_right());
        }
        hero.take_hit(&mut NullAudio);
        assert!(hero.is_dead());
        assert_eq!(hero.health(), 0);
    }

    #[test]
    fn test_death_animation_freezes_on_last_frame() {
        let mut hero = hero();
        for _ in 0..HERO_STATS.max_health {
            hero.take_hit(&mut NullAudio);
            wait_out_hit_reaction(&mut hero);
        }

        for _ in 0..200 {
            tick(&mut hero, &FrameInput::default());
        }
        assert!(hero.body().animator.on_last_frame());

        let frozen = hero.body().animator.frame_index();
        tick(&mut hero, &FrameInput::default());
        assert_eq!(hero.body().animator.frame_index(), frozen);
    }

    #[test]
    fn test_lands_on_platform_when_falling() {
        let platform = Platform::new(80.0, 350.0, "platform_grass", 3);
        let mut hero = hero();

        // Place the hero just above the platform surface, falling
        hero.body.pos = Vec2::new(150.0, platform.top() - 5.0);
        hero.on_ground = false;
        hero.velocity_y = 2.0;

        hero.update(
            &FrameInput::default(),
            std::slice::from_ref(&platform),
            &mut [],
            &mut NullAudio,
        );

        assert!(hero.on_ground());
        assert_eq!(hero.position().y, platform.top());
        assert_eq!(hero.velocity_y, 0.0);
    }

    #[test]
    fn test_side_clamp_when_pressing_into_platform() {
        let platform = Platform::new(300.0, 300.0, "platform_rock", 3);
        let mut hero = hero();

        // Airborne left of the platform, well below its surface
        hero.body.pos = Vec2::new(298.0, 349.5);
        hero.on_ground = false;
        hero.velocity_y = 0.0;

        hero.update(
            &holding_right(),
            std::slice::from_ref(&platform),
            &mut [],
            &mut NullAudio,
        );

        assert_eq!(
            hero.position().x,
            platform.left() - HERO_STATS.width / 2.0,
            "pushed back out of the platform side"
        );
    }
}
