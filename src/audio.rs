//! Sound cue boundary
//!
//! The simulation only raises cues; a host-supplied `AudioSink` turns them
//! into sound. Each cue has a procedural tone description so a sink needs
//! no asset files.

use std::collections::HashMap;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits the left (player) paddle
    PlayerHit,
    /// Ball hits the right (opponent) paddle
    OpponentHit,
    /// Ball bounces off the upper edge
    UpperEdgeHit,
    /// Ball bounces off the lower edge
    LowerEdgeHit,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// Procedural tone for a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    /// Start frequency (Hz)
    pub freq: f32,
    /// Frequency at the end of the sweep (Hz)
    pub end_freq: f32,
    /// Seconds
    pub duration: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        match self {
            // Solid thump
            SoundEffect::PlayerHit => Tone {
                waveform: Waveform::Sine,
                freq: 150.0,
                end_freq: 60.0,
                duration: 0.1,
                gain: 0.6,
            },
            // Slightly brighter so the two sides are distinguishable
            SoundEffect::OpponentHit => Tone {
                waveform: Waveform::Square,
                freq: 220.0,
                end_freq: 90.0,
                duration: 0.1,
                gain: 0.4,
            },
            SoundEffect::UpperEdgeHit => Tone {
                waveform: Waveform::Triangle,
                freq: 440.0,
                end_freq: 440.0,
                duration: 0.08,
                gain: 0.3,
            },
            SoundEffect::LowerEdgeHit => Tone {
                waveform: Waveform::Triangle,
                freq: 330.0,
                end_freq: 330.0,
                duration: 0.08,
                gain: 0.3,
            },
        }
    }
}

/// Anything that can play a sound cue
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Volume/mute front end that "plays" tones by logging them
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
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
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let tone = effect.tone();
        log::trace!(
            "{:?}: {:?} {:.0}->{:.0}Hz {:.2}s gain {:.2}",
            effect,
            tone.waveform,
            tone.freq,
            tone.end_freq,
            tone.duration,
            tone.gain * vol
        );
    }
}

/// Counts cues instead of playing them (headless runs and tests)
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl RecordingAudio {
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|&&e| e == effect).count()
    }

    pub fn histogram(&self) -> HashMap<SoundEffect, usize> {
        let mut counts = HashMap::new();
        for effect in &self.played {
            *counts.entry(*effect).or_insert(0) += 1;
        }
        counts
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}

/// Forward every sound cue in `events` to `sink`
pub fn dispatch<S: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for event in events {
        if let GameEvent::Sound(effect) = event {
            sink.play(*effect);
        }
    }
}
