//! Snack time: serve bamboo with Space and watch the panda chew through it

use log::info;

use crate::game::ModeEvent;
use crate::input_system::GameAction;

pub const PLATE_CAPACITY: u32 = 3;
/// Chew progress per tick; one stalk takes two seconds
pub const CHEW_PER_TICK: f32 = 1.0 / 120.0;
/// Paws swap every this many ticks while chewing
const PAW_SWAP_TICKS: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct EatingMode {
    /// Stalks waiting on the plate, including the one being eaten
    pub plate: u32,
    pub chew_progress: f32,
    pub eaten_this_session: u32,
    anim_tick: u32,
}

impl EatingMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_chewing(&self) -> bool {
        self.plate > 0
    }

    /// Alternating paw offset for the munching animation
    pub fn paws_down(&self) -> bool {
        self.is_chewing() && (self.anim_tick / PAW_SWAP_TICKS) % 2 == 0
    }

    pub fn update(&mut self, actions: &[GameAction]) -> Vec<ModeEvent> {
        let mut events = Vec::new();
        self.anim_tick = self.anim_tick.wrapping_add(1);

        for action in actions {
            if *action == GameAction::Interact && self.plate < PLATE_CAPACITY {
                self.plate += 1;
            }
        }

        if self.is_chewing() {
            self.chew_progress += CHEW_PER_TICK;
            if self.chew_progress >= 1.0 {
                self.chew_progress = 0.0;
                self.plate -= 1;
                self.eaten_this_session += 1;
                info!("Munched a bamboo stalk ({} this session)", self.eaten_this_session);
                events.push(ModeEvent::BambooEaten);
            }
        }

        events
    }
}
