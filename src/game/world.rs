// GameWorld struct and per-tick update
//
// GameWorld owns every mode's state together with the stats, the settings
// and the save manager. Mode handlers report back through ModeEvents and
// this is the only place those events touch shared state.

use std::time::Instant;

use chrono::NaiveDate;
use log::{info, warn};
use rand::rngs::StdRng;

use super::{Mode, ModeEvent};
use crate::gui::DirectoryMenu;
use crate::input_system::GameAction;
use crate::modes::{ChaseGame, EatingMode, FishingGame, FocusTimer, MusicVisualizer};
use crate::save::SaveManager;
use crate::settings::{AppSettings, Palette};
use crate::stats::GameStats;

/// Update ticks per second of play time
pub const TICKS_PER_SECOND: u64 = 60;

pub struct GameWorld {
    pub mode: Mode,
    /// Ticks since launch; drives idle animations
    pub tick: u64,
    pub stats: GameStats,
    pub settings: AppSettings,
    pub palette: Palette,
    pub focus: FocusTimer,
    pub fishing: FishingGame,
    pub chase: ChaseGame,
    pub eating: EatingMode,
    pub music: MusicVisualizer,
    pub directory: DirectoryMenu,
    storage: SaveManager,
    rng: StdRng,
}

impl GameWorld {
    /// Load stats and settings from `storage` and start on the directory
    ///
    /// A missing settings file is written out with the default profiles.
    pub fn new(mut storage: SaveManager, today: NaiveDate, now: Instant, rng: StdRng) -> Self {
        let (mut stats, found) = storage.load_or_default::<GameStats>();
        if found {
            info!(
                "Loaded stats: {}s played, {} fish caught",
                stats.total_play_seconds, stats.fish_caught
            );
        }
        stats.roll_over(today);

        let settings = match storage.load::<AppSettings>() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let settings = AppSettings::default();
                if let Err(e) = storage.save(&settings) {
                    warn!("Could not write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", storage.path_for::<AppSettings>().display(), e);
                AppSettings::default()
            }
        };
        storage.mark_autosaved(now);

        let palette = settings.palette();
        let mut directory = DirectoryMenu::new();
        directory.apply_palette(&palette);

        GameWorld {
            mode: Mode::Directory,
            tick: 0,
            chase: ChaseGame::new(stats.chase_wins_today),
            stats,
            settings,
            palette,
            focus: FocusTimer::new(),
            fishing: FishingGame::new(),
            eating: EatingMode::new(),
            music: MusicVisualizer::new(),
            directory,
            storage,
            rng,
        }
    }

    /// Advance one tick with this frame's actions
    pub fn update(&mut self, actions: &[GameAction], now: Instant, today: NaiveDate) {
        self.tick += 1;
        if self.tick % TICKS_PER_SECOND == 0 {
            self.stats.record_second();
            self.stats.roll_over(today);
        }

        if self.storage.should_autosave(now) {
            self.save_stats(now);
        }

        if self.mode != Mode::Directory && actions.contains(&GameAction::Back) {
            self.switch_mode(Mode::Directory);
            return;
        }

        let active = self.mode;
        let mut events = match active {
            Mode::Directory => {
                self.update_directory(actions);
                Vec::new()
            }
            Mode::Settings => {
                self.update_settings(actions);
                Vec::new()
            }
            Mode::Relax | Mode::Focus => Vec::new(),
            Mode::Fishing => self.fishing.update(actions, &mut self.rng),
            Mode::Chase => self.chase.update(actions, self.stats.chase_wins_today),
            Mode::Eating => self.eating.update(actions),
            Mode::Music => {
                self.music.update(actions);
                Vec::new()
            }
        };

        // The focus clock keeps running while another mode is on screen
        let focus_actions: &[GameAction] = if active == Mode::Focus { actions } else { &[] };
        events.extend(self.focus.update(focus_actions, now));

        for event in events {
            self.apply(event);
        }
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        if mode == Mode::Chase {
            self.chase.restart(self.stats.chase_wins_today);
        }
        info!("Mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    fn apply(&mut self, event: ModeEvent) {
        match event {
            ModeEvent::SwitchMode(mode) => self.switch_mode(mode),
            other => self.stats.apply(&other),
        }
    }

    fn update_directory(&mut self, actions: &[GameAction]) {
        for action in actions {
            match action {
                GameAction::SelectMode(mode) => {
                    self.switch_mode(*mode);
                    return;
                }
                GameAction::Up => self.directory.navigate_up(),
                GameAction::Down => self.directory.navigate_down(),
                GameAction::Confirm => {
                    self.switch_mode(self.directory.selected_mode());
                    return;
                }
                _ => {}
            }
        }
    }

    fn update_settings(&mut self, actions: &[GameAction]) {
        let before = self.settings.active_index;
        for action in actions {
            match action {
                GameAction::Left => self.settings.previous_profile(),
                GameAction::Right => self.settings.next_profile(),
                _ => {}
            }
        }

        if self.settings.active_index != before {
            self.palette = self.settings.palette();
            self.directory.apply_palette(&self.palette);
            if let Some(profile) = self.settings.active_profile() {
                info!("Colour profile: {}", profile.name);
            }
            if let Err(e) = self.storage.save(&self.settings) {
                warn!("Could not save settings: {}", e);
            }
        }
    }

    /// Write the stats file and restart the autosave clock
    pub fn save_stats(&mut self, now: Instant) {
        if let Err(e) = self.storage.save(&self.stats) {
            warn!("Could not save stats: {}", e);
        }
        self.storage.mark_autosaved(now);
    }

    /// Final save before the window closes
    pub fn shutdown(&mut self) {
        self.save_stats(Instant::now());
        info!(
            "Saved stats to {} ({}s played today)",
            self.storage.save_directory().display(),
            self.stats.today_play_seconds
        );
    }
}
