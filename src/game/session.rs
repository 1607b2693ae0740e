// Game session controller
//
// Owns the top-level state machine (menu / playing / paused / game over),
// the cross-fade transitions between menu and gameplay, and the enemy
// roster lifecycle. While a transition is active, gameplay ticking is
// suspended so input and combat cannot race the level reset.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::math::lerp;
use crate::engine::assets::SpriteCatalog;
use crate::engine::audio::{AudioOutput, Theme};
use crate::engine::input::FrameInput;

use super::actor::AnimatedActor;
use super::enemy::{Enemy, EnemyKind};
use super::hero::Hero;
use super::platform::{self, Platform};
use super::snapshot::FrameSnapshot;
use super::stats::{GROUND_LEVEL, STAGE_WIDTH};

/// Overlay opacity change per tick during a fade
const FADE_STEP: u8 = 10;

/// Master music volume
const DEFAULT_VOLUME: f32 = 0.7;

/// Platform spawns keep this distance from the collision edges
const SPAWN_MARGIN: f32 = 30.0;

/// The ground enemy spawns at least this far from the stage edges
const GROUND_SPAWN_MARGIN: f32 = 100.0;

/// Top-level session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Phase of the cross-fade overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    FadingOut,
    FadingIn,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    phase: TransitionPhase,
    alpha: u8,
}

/// The running game: hero, enemy roster, platforms, and session state
pub struct GameSession {
    state: SessionState,
    transition: Option<Transition>,
    hero: Hero,
    enemies: Vec<Enemy>,
    platforms: Vec<Platform>,
    catalog: Box<dyn SpriteCatalog>,
    audio: Box<dyn AudioOutput>,
    rng: ChaCha8Rng,
    music_enabled: bool,
    master_volume: f32,
    exit_requested: bool,
}

impl GameSession {
    /// Create a session at the menu. The seed fixes the random stream, so
    /// a session is fully determined by its seed and input sequence.
    pub fn new(catalog: Box<dyn SpriteCatalog>, audio: Box<dyn AudioOutput>, seed: u64) -> Self {
        let hero = Hero::new(catalog.as_ref());
        let mut session = Self {
            state: SessionState::Menu,
            transition: None,
            hero,
            enemies: Vec::new(),
            platforms: platform::forest_layout(),
            catalog,
            audio,
            rng: ChaCha8Rng::seed_from_u64(seed),
            music_enabled: true,
            master_volume: DEFAULT_VOLUME,
            exit_requested: false,
        };

        if session.music_enabled {
            let volume = session.master_volume;
            session.audio.start_theme(Theme::Menu, volume);
        }

        session
    }

    /// Advance the session one tick
    pub fn update(&mut self, input: &FrameInput) {
        // An active transition owns the tick; gameplay is suspended
        if self.transition.is_some() {
            self.tick_transition();
            return;
        }

        match self.state {
            SessionState::Menu => {
                if input.confirm {
                    self.begin_fade_out();
                } else if input.toggle_sound {
                    self.toggle_music();
                } else if input.quit {
                    self.exit_requested = true;
                }
            }
            SessionState::Playing => {
                if input.pause {
                    self.state = SessionState::Paused;
                    log::info!("Game paused");
                    return;
                }

                self.tick_gameplay(input);

                // Hero death is the only path out of Playing besides pause
                if self.hero.is_dead() {
                    self.state = SessionState::GameOver;
                    log::info!("Game over");
                }
            }
            SessionState::Paused => {
                if input.pause {
                    self.state = SessionState::Playing;
                    log::info!("Game resumed");
                } else if input.menu {
                    self.return_to_menu();
                }
            }
            SessionState::GameOver => {
                if input.confirm {
                    self.begin_fade_out();
                } else if input.quit {
                    self.exit_requested = true;
                }
            }
        }
    }

    /// Build the draw-ready view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            state: self.state,
            transition_alpha: self.transition_alpha(),
            hero: self.hero.pose(),
            hero_health: self.hero.health(),
            hero_max_health: self.hero.max_health(),
            enemies: self.enemies.iter().map(|e| e.pose()).collect(),
            platforms: &self.platforms,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transition_phase(&self) -> Option<TransitionPhase> {
        self.transition.map(|t| t.phase)
    }

    /// Overlay opacity of the active transition, 0 when none
    pub fn transition_alpha(&self) -> u8 {
        self.transition.map_or(0, |t| t.alpha)
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn tick_gameplay(&mut self, input: &FrameInput) {
        self.hero
            .update(input, &self.platforms, &mut self.enemies, self.audio.as_mut());

        for enemy in &mut self.enemies {
            enemy.update(&mut self.hero, &mut self.rng, self.audio.as_mut());
        }

        // Filter pass so removal never skips a surviving entry
        self.enemies.retain(|e| !e.death_animation_finished());
    }

    fn tick_transition(&mut self) {
        let Some(transition) = self.transition else {
            return;
        };

        match transition.phase {
            TransitionPhase::FadingOut => {
                let alpha = transition.alpha.saturating_add(FADE_STEP);
                self.transition = Some(Transition {
                    phase: TransitionPhase::FadingOut,
                    alpha,
                });

                // The outgoing theme ducks as the overlay darkens
                if self.music_enabled {
                    let theme = self.active_theme();
                    let volume = self.fade_volume(alpha);
                    self.audio.set_theme_volume(theme, volume);
                }

                if alpha == u8::MAX {
                    self.enter_playing();
                    self.transition = Some(Transition {
                        phase: TransitionPhase::FadingIn,
                        alpha,
                    });
                }
            }
            TransitionPhase::FadingIn => {
                let alpha = transition.alpha.saturating_sub(FADE_STEP);
                self.transition = Some(Transition {
                    phase: TransitionPhase::FadingIn,
                    alpha,
                });

                // The gameplay theme ramps up as the overlay clears
                if self.music_enabled {
                    let volume = self.fade_volume(alpha);
                    self.audio.set_theme_volume(Theme::Gameplay, volume);
                }

                if alpha == 0 {
                    self.transition = None;
                }
            }
        }
    }

    /// Complete a fade-out: reset the level and switch to gameplay
    fn enter_playing(&mut self) {
        let outgoing_theme = self.active_theme();

        self.state = SessionState::Playing;
        self.hero = Hero::new(self.catalog.as_ref());
        self.spawn_enemies();

        if self.music_enabled {
            self.audio.stop_theme(outgoing_theme);
            self.audio.start_theme(Theme::Gameplay, 0.0);
        }

        log::info!("Session started with {} enemies", self.enemies.len());
    }

    /// One enemy per platform plus a roaming ground enemy
    fn spawn_enemies(&mut self) {
        self.enemies.clear();

        for platform in &self.platforms {
            let kind = EnemyKind::roll(&mut self.rng);
            let x = self
                .rng
                .random_range(platform.left() + SPAWN_MARGIN..platform.right() - SPAWN_MARGIN);
            let mut enemy = Enemy::new(
                kind,
                x,
                platform.top(),
                false,
                self.catalog.as_ref(),
                &mut self.rng,
            );
            enemy.set_platform_limits(platform.left(), platform.right());
            self.enemies.push(enemy);
        }

        let kind = EnemyKind::roll(&mut self.rng);
        let x = self
            .rng
            .random_range(GROUND_SPAWN_MARGIN..=STAGE_WIDTH - GROUND_SPAWN_MARGIN);
        self.enemies.push(Enemy::new(
            kind,
            x,
            GROUND_LEVEL,
            true,
            self.catalog.as_ref(),
            &mut self.rng,
        ));
    }

    fn begin_fade_out(&mut self) {
        self.transition = Some(Transition {
            phase: TransitionPhase::FadingOut,
            alpha: 0,
        });
    }

    fn return_to_menu(&mut self) {
        self.state = SessionState::Menu;
        if self.music_enabled {
            self.audio.stop_theme(Theme::Gameplay);
            self.audio.start_theme(Theme::Menu, self.master_volume);
        }
        log::info!("Returned to menu");
    }

    fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.audio.start_theme(Theme::Menu, self.master_volume);
        } else {
            self.audio.stop_theme(Theme::Menu);
            self.audio.stop_theme(Theme::Gameplay);
        }
    }

    /// Theme that is audible in the current state
    fn active_theme(&self) -> Theme {
        match self.state {
            SessionState::Menu => Theme::Menu,
            _ => Theme::Gameplay,
        }
    }

    /// Theme volume under a fade overlay of the given opacity
    fn fade_volume(&self, alpha: u8) -> f32 {
        lerp(self.master_volume, 0.0, alpha as f32 / 255.0)
    }
}
