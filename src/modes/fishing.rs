//! Fishing mini-game
//!
//! Cast at one of three spots, wait for a bite, then mash Space to reel the
//! fish in before it pulls the line slack.
//!
//! ```text
//!   Idle --cast--> Waiting --bite--> Reeling --progress 100--> Idle (catch)
//!                     |                  \--progress 0----> Idle (lost)
//!                     \--space (reel in)--> Idle
//! ```
//!
//! One of the spots is the "hot spot" and only that one can bite. It moves
//! around on its own every couple of seconds.

use log::info;
use rand::Rng;

use crate::game::ModeEvent;
use crate::input_system::GameAction;

/// Ticks between hot spot re-rolls (~2 seconds)
pub const HOT_SPOT_INTERVAL: u32 = 120;
/// Per-tick bite chance in percent while waiting on the hot spot
pub const BITE_CHANCE_PERCENT: u32 = 2;
/// Reel progress right after a bite
pub const REEL_START: f32 = 30.0;
/// Reel progress added per Space press
pub const REEL_PER_PRESS: f32 = 8.0;
pub const REEL_MAX: f32 = 100.0;
/// Water line where the bobber floats
pub const BOBBER_Y: f32 = 180.0;

/// The three places the panda can cast to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spot {
    Left,
    Middle,
    Right,
}

impl Spot {
    pub const ALL: [Spot; 3] = [Spot::Left, Spot::Middle, Spot::Right];

    /// Horizontal centre of the spot on the 320 px canvas
    pub fn x(&self) -> f32 {
        match self {
            Spot::Left => 80.0,
            Spot::Middle => 160.0,
            Spot::Right => 240.0,
        }
    }

    pub fn key_label(&self) -> &'static str {
        match self {
            Spot::Left => "A",
            Spot::Middle => "S",
            Spot::Right => "D",
        }
    }

    fn random<R: Rng>(rng: &mut R) -> Spot {
        Spot::ALL[rng.gen_range(0..Spot::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingState {
    Idle,
    Waiting,
    Reeling,
}

#[derive(Debug, Clone)]
pub struct FishingGame {
    pub state: FishingState,
    /// Where the line is, if cast
    pub cast_spot: Option<Spot>,
    /// Where the fish is; nothing until the first re-roll
    pub hot_spot: Option<Spot>,
    pub reel_progress: f32,
    pub fish_strength: f32,
    /// Fish caught since launch
    pub score: u32,
    reroll_timer: u32,
}

impl FishingGame {
    pub fn new() -> Self {
        FishingGame {
            state: FishingState::Idle,
            cast_spot: None,
            hot_spot: None,
            reel_progress: 0.0,
            fish_strength: 0.0,
            score: 0,
            reroll_timer: 0,
        }
    }

    /// Bobber position, present while the line is in the water
    pub fn bobber(&self) -> Option<(f32, f32)> {
        match self.state {
            FishingState::Idle => None,
            FishingState::Waiting | FishingState::Reeling => {
                self.cast_spot.map(|spot| (spot.x(), BOBBER_Y))
            }
        }
    }

    /// Reel progress as a fraction for the progress bar
    pub fn reel_fraction(&self) -> f32 {
        self.reel_progress / REEL_MAX
    }

    /// Advance one tick
    pub fn update<R: Rng>(&mut self, actions: &[GameAction], rng: &mut R) -> Vec<ModeEvent> {
        let mut events = Vec::new();

        self.reroll_timer += 1;
        if self.reroll_timer > HOT_SPOT_INTERVAL {
            self.reroll_timer = 0;
            self.hot_spot = Some(Spot::random(rng));
        }

        match self.state {
            FishingState::Idle => {
                let cast = actions.iter().find_map(|action| match action {
                    GameAction::Cast(spot) => Some(*spot),
                    _ => None,
                });
                if let Some(spot) = cast {
                    self.cast(spot);
                }
            }
            FishingState::Waiting => {
                if actions.contains(&GameAction::Interact) {
                    self.reel_in();
                } else if self.cast_spot.is_some()
                    && self.cast_spot == self.hot_spot
                    && rng.gen_range(0..100) < BITE_CHANCE_PERCENT
                {
                    self.state = FishingState::Reeling;
                    self.reel_progress = REEL_START;
                    self.fish_strength = rng.gen_range(0.5..1.5);
                }
            }
            FishingState::Reeling => {
                let presses = actions
                    .iter()
                    .filter(|action| **action == GameAction::Interact)
                    .count();

                self.reel_progress -= self.fish_strength;
                self.reel_progress += presses as f32 * REEL_PER_PRESS;
                self.reel_progress = self.reel_progress.clamp(0.0, REEL_MAX);

                if self.reel_progress >= REEL_MAX {
                    self.score += 1;
                    info!("Caught a fish! ({} this session)", self.score);
                    events.push(ModeEvent::FishCaught);
                    self.reel_in();
                } else if self.reel_progress <= 0.0 {
                    info!("The fish got away");
                    self.reel_in();
                }
            }
        }

        events
    }

    fn cast(&mut self, spot: Spot) {
        self.cast_spot = Some(spot);
        self.state = FishingState::Waiting;
    }

    fn reel_in(&mut self) {
        self.state = FishingState::Idle;
        self.cast_spot = None;
        self.reel_progress = 0.0;
    }
}

impl Default for FishingGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn reeling_game(strength: f32) -> FishingGame {
        let mut game = FishingGame::new();
        game.state = FishingState::Reeling;
        game.cast_spot = Some(Spot::Middle);
        game.reel_progress = REEL_START;
        game.fish_strength = strength;
        game
    }

    #[test]
    fn test_cast_moves_to_waiting() {
        let mut game = FishingGame::new();
        game.update(&[GameAction::Cast(Spot::Right)], &mut rng());

        assert_eq!(game.state, FishingState::Waiting);
        assert_eq!(game.bobber(), Some((240.0, BOBBER_Y)));
    }

    #[test]
    fn test_space_while_waiting_reels_in() {
        let mut game = FishingGame::new();
        let mut rng = rng();
        game.update(&[GameAction::Cast(Spot::Left)], &mut rng);
        game.update(&[GameAction::Interact], &mut rng);

        assert_eq!(game.state, FishingState::Idle);
        assert_eq!(game.bobber(), None);
    }

    #[test]
    fn test_no_bite_away_from_hot_spot() {
        let mut game = FishingGame::new();
        let mut rng = rng();
        game.update(&[GameAction::Cast(Spot::Left)], &mut rng);

        for _ in 0..5_000 {
            // Keep the fish pinned on the other side of the lake
            game.hot_spot = Some(Spot::Right);
            game.reroll_timer = 0;
            game.update(&[], &mut rng);
            assert_eq!(game.state, FishingState::Waiting);
        }
    }

    #[test]
    fn test_bite_eventually_on_hot_spot() {
        let mut game = FishingGame::new();
        let mut rng = rng();
        game.update(&[GameAction::Cast(Spot::Middle)], &mut rng);

        let mut bit = false;
        for _ in 0..5_000 {
            game.hot_spot = Some(Spot::Middle);
            game.reroll_timer = 0;
            game.update(&[], &mut rng);
            if game.state == FishingState::Reeling {
                bit = true;
                break;
            }
        }

        assert!(bit);
        assert_eq!(game.reel_progress, REEL_START);
        assert!(game.fish_strength >= 0.5 && game.fish_strength < 1.5);
    }

    #[test]
    fn test_hot_spot_rerolls() {
        let mut game = FishingGame::new();
        let mut rng = rng();
        assert_eq!(game.hot_spot, None);

        for _ in 0..=HOT_SPOT_INTERVAL {
            game.update(&[], &mut rng);
        }
        assert!(game.hot_spot.is_some());
    }

    #[test]
    fn test_mashing_catches_fish() {
        let mut game = reeling_game(1.0);
        let mut rng = rng();
        let mut events = Vec::new();

        for _ in 0..20 {
            events.extend(game.update(&[GameAction::Interact], &mut rng));
            if game.state == FishingState::Idle {
                break;
            }
        }

        assert_eq!(events, vec![ModeEvent::FishCaught]);
        assert_eq!(game.score, 1);
        assert_eq!(game.state, FishingState::Idle);
    }

    #[test]
    fn test_idle_reel_loses_fish() {
        let mut game = reeling_game(1.5);
        let mut rng = rng();

        for _ in 0..100 {
            let events = game.update(&[], &mut rng);
            assert!(events.is_empty());
        }

        assert_eq!(game.state, FishingState::Idle);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_reel_progress_stays_in_range() {
        let mut game = reeling_game(0.5);
        let mut rng = rng();
        let burst = [GameAction::Interact; 30];

        game.update(&burst, &mut rng);
        assert!(game.reel_progress <= REEL_MAX);

        let mut game = reeling_game(1.49);
        for _ in 0..40 {
            game.update(&[], &mut rng);
            assert!(game.reel_progress >= 0.0 && game.reel_progress <= REEL_MAX);
        }
    }
}
