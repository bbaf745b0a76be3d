//! Sound trigger dispatch
//!
//! Effects are described as simple procedural tones; an `AudioBackend`
//! turns them into sound, and also owns the looping background track.
//! Playback is best-effort: with no backend the game runs silently.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Enemy took a hit
    EnemyHit,
    /// Player took a hit
    PlayerHit,
    /// Powerup collected
    Powerup,
    /// Enemy destroyed
    Explosion,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shoot => Some(Self::Shoot),
            GameEvent::EnemyHit => Some(Self::EnemyHit),
            GameEvent::PlayerHit => Some(Self::PlayerHit),
            GameEvent::PowerupCollected(_) => Some(Self::Powerup),
            GameEvent::Explosion => Some(Self::Explosion),
            GameEvent::LifeLost { .. }
            | GameEvent::StageAdvanced(_)
            | GameEvent::GameOver
            | GameEvent::MusicStart
            | GameEvent::MusicStop => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Shoot => Tone::Beep {
                freq: 800.0,
                duration: 0.1,
            },
            Self::EnemyHit => Tone::Beep {
                freq: 400.0,
                duration: 0.2,
            },
            Self::PlayerHit => Tone::Beep {
                freq: 200.0,
                duration: 0.3,
            },
            Self::Powerup => Tone::Beep {
                freq: 1000.0,
                duration: 0.2,
            },
            Self::Explosion => Tone::Noise { duration: 0.3 },
        }
    }
}

/// Procedural sound description (durations in seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    /// Square-ish beep with a decaying envelope
    Beep { freq: f32, duration: f32 },
    /// Burst of white noise
    Noise { duration: f32 },
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, tone: Tone, volume: f32);

    /// Start the looping background track, replacing any current one
    fn start_music(&mut self, _volume: f32) {}

    fn stop_music(&mut self) {}

    fn set_music_volume(&mut self, _volume: f32) {}
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    /// Whether game starts bring the music in
    music_enabled: bool,
    music_playing: bool,
    muted: bool,
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend available - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.6,
            music_enabled: true,
            music_playing: false,
            muted: false,
        }
    }

    /// Manager configured from the volume settings
    pub fn from_settings(backend: Option<Box<dyn AudioBackend>>, settings: &Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.music_enabled = settings.music;
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.refresh_music_volume();
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.refresh_music_volume();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.refresh_music_volume();
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    fn refresh_music_volume(&mut self) {
        if !self.music_playing {
            return;
        }
        let vol = self.effective_music_volume();
        if let Some(backend) = self.backend.as_mut() {
            backend.set_music_volume(vol);
        }
    }

    /// Start the background track from the top
    pub fn play_music(&mut self) {
        let vol = self.effective_music_volume();
        let Some(backend) = self.backend.as_mut() else { return };
        if self.music_playing {
            backend.stop_music();
        }
        backend.start_music(vol);
        self.music_playing = true;
    }

    pub fn stop_music(&mut self) {
        if !self.music_playing {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.stop_music();
        }
        self.music_playing = false;
    }

    /// Manual music switch. Returns whether music is now playing.
    pub fn toggle_music(&mut self) -> bool {
        if self.music_playing {
            self.stop_music();
        } else {
            self.play_music();
        }
        self.music_playing
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else { return };
        backend.play(effect.tone(), vol);
    }

    /// Play the sounds for one tick's events, in emission order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::MusicStart if self.music_enabled => self.play_music(),
                GameEvent::MusicStop => self.stop_music(),
                _ => {
                    if let Some(effect) = SoundEffect::for_event(event) {
                        self.play(effect);
                    }
                }
            }
        }
    }
}
