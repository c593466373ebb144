//! Audio cue routing
//!
//! The simulation emits `GameEvent`s; this maps them to sound effects and
//! hands them to whatever backend is plugged in. Every effect is described
//! as a short procedural sweep so backends need no sample files.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Score passed a milestone
    Milestone,
    /// Run ended
    Death,
}

/// Oscillator recipe for an effect: a sweep from `start_hz` to `end_hz`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration: f32,
}

impl SoundEffect {
    pub fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::Milestone { .. } => SoundEffect::Milestone,
            GameEvent::Death { .. } => SoundEffect::Death,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            // Quick upward chirp
            SoundEffect::Jump => Tone {
                start_hz: 400.0,
                end_hz: 800.0,
                duration: 0.12,
            },
            SoundEffect::Milestone => Tone {
                start_hz: 520.0,
                end_hz: 680.0,
                duration: 0.25,
            },
            // Descending buzz
            SoundEffect::Death => Tone {
                start_hz: 400.0,
                end_hz: 80.0,
                duration: 0.5,
            },
        }
    }
}

/// Something that can actually make noise
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32);
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32) {
        log::debug!(
            "♪ {:?} {:.0}->{:.0}Hz {:.2}s vol {:.2}",
            effect,
            tone.start_hz,
            tone.end_hz,
            tone.duration,
            volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink: Some(sink),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no backend; every cue is dropped
    pub fn disabled() -> Self {
        log::warn!("No audio backend - audio disabled");
        Self {
            sink: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Copy volume/mute preferences from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else { return };
        sink.play(effect, effect.tone(), vol);
    }

    /// Play the cues produced by one tick
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::from_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _tone: Tone, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.handle_events(&[
            GameEvent::Jump,
            GameEvent::Milestone { score: 100 },
            GameEvent::Death { score: 120 },
        ]);
        let played: Vec<_> = recorder.0.borrow().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![SoundEffect::Jump, SoundEffect::Milestone, SoundEffect::Death]
        );
    }

    #[test]
    fn test_mute_and_volume() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.apply_settings(&Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        });
        audio.play(SoundEffect::Jump);
        assert_eq!(recorder.0.borrow()[0].1, 0.25);

        audio.set_muted(true);
        audio.play(SoundEffect::Death);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_disabled_drops_cues() {
        let mut audio = AudioManager::disabled();
        audio.play(SoundEffect::Jump);
    }
}
