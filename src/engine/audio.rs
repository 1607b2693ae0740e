// Audio output contract
//
// The simulation core fires cues and adjusts theme volume; it never
// observes playback state or failures. The presentation layer implements
// `AudioOutput` against a real mixer; `NullAudio` is the silent default.

/// One-shot sound effects triggered by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    HeroJump,
    HeroAttack,
    HeroDeath,
    EnemyAttack,
    EnemyHit,
    EnemyDeath,
}

impl SoundCue {
    /// Asset name of the cue in the sound store
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::HeroJump => "hero_jump",
            Self::HeroAttack => "hero_attack",
            Self::HeroDeath => "hero_death",
            Self::EnemyAttack => "enemy_attack",
            Self::EnemyHit => "enemy_hit",
            Self::EnemyDeath => "enemy_death",
        }
    }
}

/// Looping background themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Menu,
    Gameplay,
}

impl Theme {
    /// Asset name of the theme in the sound store
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Menu => "menu_theme",
            Self::Gameplay => "game_theme",
        }
    }
}

/// Fire-and-forget audio sink
pub trait AudioOutput {
    /// Play a one-shot cue
    fn play_cue(&mut self, cue: SoundCue);

    /// Start looping a theme at the given volume
    fn start_theme(&mut self, theme: Theme, volume: f32);

    /// Adjust the volume of a playing theme
    fn set_theme_volume(&mut self, theme: Theme, volume: f32);

    /// Stop a theme
    fn stop_theme(&mut self, theme: Theme);
}

/// Audio sink that discards everything
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioOutput for NullAudio {
    fn play_cue(&mut self, _cue: SoundCue) {}
    fn start_theme(&mut self, _theme: Theme, _volume: f32) {}
    fn set_theme_volume(&mut self, _theme: Theme, _volume: f32) {}
    fn stop_theme(&mut self, _theme: Theme) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_asset_names() {
        assert_eq!(SoundCue::HeroJump.asset_name(), "hero_jump");
        assert_eq!(SoundCue::EnemyDeath.asset_name(), "enemy_death");
    }

    #[test]
    fn test_theme_asset_names() {
        assert_eq!(Theme::Menu.asset_name(), "menu_theme");
        assert_eq!(Theme::Gameplay.asset_name(), "game_theme");
    }
}
