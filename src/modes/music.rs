//! Chiptune visualizer
//!
//! A four-channel step sequencer drives a row of bouncing bars. There is no
//! audio; the pattern only decides which bars jump and how high.

use crate::input_system::GameAction;

pub const CHANNELS: usize = 4;
pub const STEPS: usize = 16;
pub const DEFAULT_TEMPO: u32 = 8;
/// Fastest tempo, in ticks per step
pub const MIN_TEMPO: u32 = 4;
/// Slowest tempo, in ticks per step
pub const MAX_TEMPO: u32 = 30;
const TEMPO_STEP: u32 = 2;
/// Fraction of each bar kept every tick
const DECAY: f32 = 0.96;
/// Highest note value in the pattern
const NOTE_RANGE: f32 = 8.0;

// Lead, harmony, bass, drums; 0 is a rest
const PATTERN: [[u8; CHANNELS]; STEPS] = [
    [8, 0, 6, 8],
    [0, 5, 0, 0],
    [6, 0, 0, 3],
    [0, 4, 6, 0],
    [7, 0, 0, 8],
    [0, 5, 0, 0],
    [5, 0, 4, 3],
    [0, 3, 0, 0],
    [8, 0, 6, 8],
    [0, 6, 0, 0],
    [6, 0, 0, 3],
    [4, 0, 5, 0],
    [3, 7, 0, 8],
    [0, 0, 0, 3],
    [5, 4, 3, 0],
    [0, 0, 0, 3],
];

#[derive(Debug, Clone)]
pub struct MusicVisualizer {
    pub playing: bool,
    /// Ticks per sequencer step
    pub tempo: u32,
    pub step: usize,
    pub levels: [f32; CHANNELS],
    step_timer: u32,
}

impl MusicVisualizer {
    pub fn new() -> Self {
        MusicVisualizer {
            playing: false,
            tempo: DEFAULT_TEMPO,
            step: 0,
            levels: [0.0; CHANNELS],
            step_timer: 0,
        }
    }

    pub fn update(&mut self, actions: &[GameAction]) {
        for action in actions {
            match action {
                GameAction::Interact => self.playing = !self.playing,
                GameAction::Left => {
                    self.tempo = (self.tempo + TEMPO_STEP).min(MAX_TEMPO);
                }
                GameAction::Right => {
                    self.tempo = self.tempo.saturating_sub(TEMPO_STEP).max(MIN_TEMPO);
                }
                _ => {}
            }
        }

        for level in self.levels.iter_mut() {
            *level *= DECAY;
        }

        if self.playing {
            self.step_timer += 1;
            if self.step_timer >= self.tempo {
                self.step_timer = 0;
                self.trigger_step();
            }
        }
    }

    fn trigger_step(&mut self) {
        for (level, note) in self.levels.iter_mut().zip(PATTERN[self.step]) {
            if note > 0 {
                *level = (f32::from(note) / NOTE_RANGE).clamp(0.0, 1.0);
            }
        }
        self.step = (self.step + 1) % STEPS;
    }
}

impl Default for MusicVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_until_played() {
        let mut music = MusicVisualizer::new();
        for _ in 0..100 {
            music.update(&[]);
        }
        assert_eq!(music.step, 0);
        assert!(music.levels.iter().all(|level| *level == 0.0));
    }

    #[test]
    fn test_first_step_lights_bars() {
        let mut music = MusicVisualizer::new();
        music.update(&[GameAction::Interact]);
        for _ in 1..DEFAULT_TEMPO {
            music.update(&[]);
        }

        assert_eq!(music.step, 1);
        assert_eq!(music.levels[0], 1.0);
        assert_eq!(music.levels[1], 0.0);
        assert_eq!(music.levels[2], 0.75);
    }

    #[test]
    fn test_levels_decay_and_stay_in_range() {
        let mut music = MusicVisualizer::new();
        music.update(&[GameAction::Interact]);

        for _ in 0..1_000 {
            music.update(&[]);
            assert!(music.levels.iter().all(|level| (0.0..=1.0).contains(level)));
        }

        music.update(&[GameAction::Interact]);
        let before = music.levels[3];
        music.update(&[]);
        assert!(music.levels[3] <= before);
    }

    #[test]
    fn test_tempo_is_clamped() {
        let mut music = MusicVisualizer::new();
        music.update(&[GameAction::Right; 10]);
        assert_eq!(music.tempo, MIN_TEMPO);
        music.update(&[GameAction::Left; 30]);
        assert_eq!(music.tempo, MAX_TEMPO);
    }

    #[test]
    fn test_pattern_wraps() {
        let mut music = MusicVisualizer::new();
        music.update(&[GameAction::Interact]);
        for _ in 0..(DEFAULT_TEMPO as usize * STEPS) {
            music.update(&[]);
        }
        assert_eq!(music.step, 0);
    }
}
