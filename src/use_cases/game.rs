// One player's authoritative game: entity ownership plus the fixed per-tick pipeline.

use super::types::TickOutcome;
use crate::domain::systems::bullets::{BulletConfig, tick_bullets};
use crate::domain::systems::formation::{spawn_formation, step_formation};
use crate::domain::systems::invader_fire::invader_fire;
use crate::domain::systems::player::{apply_intent, spawn_player};
use crate::domain::tuning::invader::InvaderTuning;
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::domain::{Bullet, FireDice, GameSnapshot, Intent, Invader, Player};
use tracing::debug;

pub struct Game {
    pub player: Player,
    // Storage order is collision order; dead invaders keep their slot.
    pub invaders: Vec<Invader>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub tick: u64,
    // +1 moves the formation right, -1 left.
    pub formation_dir: i32,

    player_tuning: PlayerTuning,
    invader_tuning: InvaderTuning,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_tuning(PlayerTuning::default(), InvaderTuning::default())
    }

    pub fn with_tuning(player_tuning: PlayerTuning, invader_tuning: InvaderTuning) -> Self {
        Self {
            player: spawn_player(&player_tuning),
            invaders: spawn_formation(&invader_tuning),
            bullets: Vec::new(),
            score: 0,
            tick: 0,
            formation_dir: 1,
            player_tuning,
            invader_tuning,
        }
    }

    /// Advances the game by exactly one tick.
    ///
    /// Order matters: input, tick counter, formation, bullets (move then collide),
    /// invader fire, termination check.
    pub fn advance<D: FireDice + ?Sized>(&mut self, input: &Intent, dice: &mut D) -> TickOutcome {
        apply_intent(
            &mut self.player,
            input,
            &mut self.bullets,
            &self.player_tuning,
        );

        self.tick += 1;

        step_formation(
            &mut self.invaders,
            &mut self.formation_dir,
            self.tick,
            &self.invader_tuning,
        );

        let report = tick_bullets(
            &mut self.bullets,
            &mut self.invaders,
            &mut self.player,
            BulletConfig {
                field_height: FIELD_HEIGHT,
                score_per_kill: self.invader_tuning.score_per_kill,
            },
        );
        self.score += report.score;
        if report.kills > 0 || report.player_hits > 0 {
            debug!(
                tick = self.tick,
                kills = report.kills,
                player_hits = report.player_hits,
                score = self.score,
                lives = self.player.lives,
                "bullets resolved"
            );
        }

        invader_fire(
            &self.invaders,
            &mut self.bullets,
            dice,
            &self.invader_tuning,
        );

        if self.player.lives <= 0 {
            TickOutcome::GameOver
        } else {
            TickOutcome::Continue
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            player_x: self.player.x,
            player_y: self.player.y,
            invaders: self
                .invaders
                .iter()
                .filter(|iv| iv.alive)
                .map(|iv| (iv.x, iv.y))
                .collect(),
            bullets: self.bullets.iter().map(|b| (b.x, b.y)).collect(),
            score: self.score,
            lives: self.player.lives,
        }
    }
}
