// Rendering - draws the active mode's scene
//
// Every scene is drawn from scratch each frame on the 320x240 logical canvas:
// clear to the profile background, then the mode's props, characters and HUD
// text. Nothing here mutates the world.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::{GameWorld, Mode};
use crate::art::{self, Costume};
use crate::draw::{fill_circle, fill_rect, stroke_line};
use crate::gui::contrast;
use crate::modes::chase::{Cell, MAZE_ROWS, WIN_SCORE};
use crate::modes::fishing::{FishingState, Spot};
use crate::modes::focus::{GOPHER_THRESHOLD, GopherPhase};
use crate::modes::music::{CHANNELS, STEPS};
use crate::text::{draw_centered_text, draw_simple_text};
use crate::ui::{ProgressBar, ProgressBarStyle};

const SCREEN_WIDTH: f32 = 320.0;
const TILE_SIZE: f32 = 16.0;

const WATER: Color = Color::RGB(0x4e, 0xcd, 0xc4);
const FISH_SHADOW: Color = Color::RGBA(0x00, 0x00, 0x00, 0x50);
const MAZE_WALL: Color = Color::RGB(0x55, 0x55, 0xff);
const DOT: Color = Color::RGB(0xff, 0xb8, 0xae);
const PLATE: Color = Color::RGB(0xdd, 0xdd, 0xdd);

impl GameWorld {
    /// Draw the current mode; the caller presents the canvas
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.palette.background);
        canvas.clear();

        match self.mode {
            Mode::Directory => self.render_directory(canvas),
            Mode::Settings => self.render_settings(canvas),
            Mode::Relax => self.render_relax(canvas),
            Mode::Focus => self.render_focus(canvas),
            Mode::Fishing => self.render_fishing(canvas),
            Mode::Chase => self.render_chase(canvas),
            Mode::Eating => self.render_eating(canvas),
            Mode::Music => self.render_music(canvas),
        }
    }

    fn text_color(&self) -> Color {
        contrast(self.palette.background)
    }

    fn render_directory(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.directory.render(canvas, 10, 10)?;
        art::draw_panda(canvas, 240.0, 150.0, Costume::Plain)?;

        let stats = format!(
            "STATS:\nTODAY: {}M\nTOTAL: {}M\nFISH: {}  WINS TODAY: {}",
            self.stats.today_play_seconds / 60,
            self.stats.total_play_seconds / 60,
            self.stats.fish_caught,
            self.stats.chase_wins_today,
        );
        draw_simple_text(canvas, &stats, 10, 180, self.text_color(), 1)
    }

    fn render_settings(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let name = self
            .settings
            .active_profile()
            .map(|profile| profile.name.to_uppercase())
            .unwrap_or_default();

        draw_simple_text(canvas, "SETTINGS", 10, 10, self.text_color(), 1)?;
        draw_centered_text(canvas, &format!("< {} >", name), 160, 30, self.palette.accent, 2)?;
        fill_rect(canvas, 100.0, 60.0, 120.0, 30.0, self.palette.accent)?;
        art::draw_panda(canvas, 160.0, 150.0, Costume::Plain)?;
        draw_centered_text(canvas, "LEFT/RIGHT: CHANGE  ESC: BACK", 160, 225, self.text_color(), 1)
    }

    fn render_relax(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_simple_text(canvas, "RELAX", 10, 10, self.text_color(), 1)?;
        let bob = (self.tick as f32 * 0.05).sin() * 2.0;
        art::draw_panda(canvas, 160.0, 140.0 + bob, Costume::Plain)
    }

    fn render_focus(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let focus = &self.focus;
        let fg = self.text_color();

        let status = if focus.gopher == GopherPhase::Celebrating {
            "DONE!"
        } else {
            "TIME:"
        };
        let (minutes, seconds) = focus.clock();
        draw_centered_text(canvas, status, 160, 10, fg, 1)?;
        draw_centered_text(canvas, &format!("{:02}:{:02}", minutes, seconds), 160, 22, fg, 2)?;

        let bar = ProgressBar::with_style(ProgressBarStyle {
            height: 4,
            warn_below: GOPHER_THRESHOLD as f32,
            ..Default::default()
        });
        let fraction = focus.remaining.as_secs_f32() / focus.target().as_secs_f32();
        bar.render(canvas, 110, 42, fraction, self.palette.accent)?;

        let paws_down = focus.active && self.tick % 10 < 5;
        art::draw_panda(canvas, 160.0, 120.0, Costume::Typing { paws_down })?;

        if focus.gopher != GopherPhase::Hidden {
            let gx = 240.0;
            let gy = 120.0 + (self.tick as f32 * 0.08).sin() * 5.0;
            art::draw_gopher(canvas, gx, gy)?;

            if focus.gopher == GopherPhase::Celebrating {
                let (hx, hy) = art::heart_position(gx, gy, focus.kiss_progress);
                art::draw_heart(canvas, hx, hy)?;
                draw_centered_text(canvas, "GREAT JOB!", 160, 180, self.palette.accent, 1)?;
                draw_centered_text(canvas, "[3] FISHING  [4] PANDA-MAN", 160, 200, fg, 1)?;
                return draw_centered_text(canvas, "SPACE: AGAIN", 160, 215, fg, 1);
            }
        }

        if !focus.active {
            draw_centered_text(canvas, "UP/DOWN: MINUTES  SPACE: START", 160, 225, fg, 1)?;
        }
        Ok(())
    }

    fn render_fishing(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let fishing = &self.fishing;

        draw_simple_text(
            canvas,
            &format!("FISH: {}", fishing.score),
            10,
            10,
            self.text_color(),
            1,
        )?;
        fill_rect(canvas, 0.0, 180.0, SCREEN_WIDTH, 60.0, WATER)?;

        for spot in Spot::ALL {
            let sx = spot.x();
            draw_simple_text(canvas, spot.key_label(), sx as i32 - 2, 220, Color::RGB(255, 255, 255), 1)?;
            if fishing.hot_spot == Some(spot) {
                fill_circle(canvas, sx, 200.0, 10.0, FISH_SHADOW)?;
            }
        }

        if let Some((bx, mut by)) = fishing.bobber() {
            if fishing.state == FishingState::Reeling {
                by += (self.tick as f32 * 0.8).sin() * 5.0;
            }
            stroke_line(canvas, (160.0, 140.0), (bx, by), 1, Color::RGB(255, 255, 255))?;
            fill_circle(canvas, bx, by, 3.0, self.palette.accent)?;

            if fishing.state == FishingState::Reeling {
                ProgressBar::new().render(canvas, 110, 120, fishing.reel_fraction(), self.palette.accent)?;
            }
        }

        art::draw_panda(canvas, 160.0, 140.0, Costume::Rod)
    }

    fn render_chase(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let chase = &self.chase;

        for (pos, cell) in chase.maze.iter() {
            let px = pos.col as f32 * TILE_SIZE;
            let py = pos.row as f32 * TILE_SIZE;
            match cell {
                Cell::Wall => fill_rect(canvas, px, py, TILE_SIZE, TILE_SIZE, MAZE_WALL)?,
                Cell::Dot => fill_circle(canvas, px + 8.0, py + 8.0, 2.0, DOT)?,
                Cell::Empty => {}
            }
        }

        let center = |col: i32, row: i32| {
            (col as f32 * TILE_SIZE + 8.0, row as f32 * TILE_SIZE + 8.0)
        };
        let (ppx, ppy) = center(chase.player.col, chase.player.row);
        art::draw_panda_head(canvas, ppx, ppy, 8.0)?;
        let (gpx, gpy) = center(chase.pursuer.col, chase.pursuer.row);
        art::draw_gopher_head(canvas, gpx, gpy)?;

        let hud_y = (MAZE_ROWS as f32 * TILE_SIZE) as i32 + 6;
        let hud = format!(
            "DOTS: {}/{}  LEFT: {}  WINS TODAY: {}",
            chase.score,
            WIN_SCORE,
            chase.maze.dots_remaining(),
            self.stats.chase_wins_today
        );
        draw_simple_text(canvas, &hud, 10, hud_y, self.text_color(), 1)?;

        if chase.game_over {
            draw_centered_text(canvas, "GAME OVER (SPACE)", 160, 100, self.palette.accent, 1)?;
        }
        if chase.won {
            draw_centered_text(canvas, "YOU WIN! (SPACE)", 160, 100, self.palette.accent, 1)?;
        }
        Ok(())
    }

    fn render_eating(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let eating = &self.eating;
        let fg = self.text_color();

        draw_simple_text(canvas, "SNACK TIME", 10, 10, fg, 1)?;
        draw_simple_text(canvas, &format!("EATEN: {}", eating.eaten_this_session), 10, 22, fg, 1)?;

        let paws_down = eating.paws_down();
        let costume = if eating.is_chewing() {
            Costume::Munching { paws_down }
        } else {
            Costume::Plain
        };
        art::draw_panda(canvas, 160.0, 110.0, costume)?;

        // Stalks still waiting, the one being chewed is in the panda's paws
        fill_rect(canvas, 115.0, 184.0, 90.0, 6.0, PLATE)?;
        for i in 0..eating.plate.saturating_sub(1) {
            art::draw_bamboo(canvas, 140.0 + i as f32 * 20.0, 164.0, 20.0)?;
        }

        if eating.is_chewing() {
            ProgressBar::new().render(canvas, 110, 200, eating.chew_progress, self.palette.accent)?;
        }
        draw_centered_text(canvas, "SPACE: SERVE BAMBOO", 160, 225, fg, 1)
    }

    fn render_music(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let music = &self.music;
        let fg = self.text_color();

        draw_simple_text(canvas, "CHIPTUNES", 10, 10, fg, 1)?;
        let status = if music.playing { "PLAYING" } else { "PAUSED" };
        draw_simple_text(canvas, &format!("{}  TEMPO: {}", status, music.tempo), 10, 22, fg, 1)?;

        const BAR_WIDTH: f32 = 40.0;
        const BAR_MAX: f32 = 120.0;
        const FLOOR: f32 = 190.0;
        let spacing = SCREEN_WIDTH / CHANNELS as f32;

        for (i, level) in music.levels.iter().enumerate() {
            let x = spacing * i as f32 + (spacing - BAR_WIDTH) / 2.0;
            let h = level.clamp(0.0, 1.0) * BAR_MAX;
            fill_rect(canvas, x, FLOOR - BAR_MAX, BAR_WIDTH, BAR_MAX, Color::RGBA(0, 0, 0, 0x30))?;
            fill_rect(canvas, x, FLOOR - h, BAR_WIDTH, h, self.palette.accent)?;
        }

        // Sequencer position
        let cell = 12.0;
        let row_x = (SCREEN_WIDTH - cell * STEPS as f32) / 2.0;
        for step in 0..STEPS {
            let color = if music.playing && (step + STEPS - 1) % STEPS == music.step {
                self.palette.accent
            } else {
                Color::RGBA(0, 0, 0, 0x50)
            };
            fill_rect(canvas, row_x + step as f32 * cell + 1.0, 198.0, cell - 2.0, 6.0, color)?;
        }

        draw_centered_text(canvas, "SPACE: PLAY  LEFT/RIGHT: TEMPO", 160, 225, fg, 1)
    }
}
