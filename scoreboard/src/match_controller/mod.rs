use futsal_common::{
    config::Game as GameConfig,
    side::{Side, SideBundle},
    snapshot::{MatchSnapshot, NUM_FOUL_SLOTS, secs_to_time_string},
};
use log::*;
use thiserror::Error;
use tokio::sync::watch;

pub mod clock;
use clock::*;

pub mod team;
use team::*;

/// Owns the complete scoreboard state and sequences every mutation: the
/// match clock, both teams, and the period counter. All operations are
/// synchronous; clock-running transitions are additionally broadcast on a
/// watch channel so the tick task can re-arm or cancel itself.
#[derive(Debug)]
pub struct MatchController {
    config: GameConfig,
    clock: MatchClock,
    teams: SideBundle<TeamState>,
    period: u32,
    start_stop_tx: watch::Sender<bool>,
    start_stop_rx: watch::Receiver<bool>,
}

impl MatchController {
    pub fn new(config: GameConfig) -> Self {
        let (start_stop_tx, start_stop_rx) = watch::channel(false);
        Self {
            clock: MatchClock::new(config.clock_duration),
            teams: SideBundle {
                left: TeamState::new(&config.teams.left),
                right: TeamState::new(&config.teams.right),
            },
            period: 1,
            start_stop_tx,
            start_stop_rx,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock_is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn clock_time(&self) -> u32 {
        self.clock.secs_remaining()
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// A receiver that observes every clock start/stop transition.
    pub fn clock_running_receiver(&self) -> watch::Receiver<bool> {
        self.start_stop_rx.clone()
    }

    fn send_clock_running(&self, running: bool) {
        self.start_stop_tx.send(running).unwrap();
    }

    fn status_string(&self) -> String {
        format!(
            "[P{} {}]",
            self.period,
            secs_to_time_string(self.clock.secs_remaining())
        )
    }

    pub fn start_clock(&mut self) {
        if self.clock.start() {
            info!("{} Starting the match clock", self.status_string());
            self.send_clock_running(true);
        }
    }

    pub fn pause_clock(&mut self) {
        if self.clock.pause() {
            info!("{} Pausing the match clock", self.status_string());
            self.send_clock_running(false);
        }
    }

    pub fn toggle_clock(&mut self) {
        if self.clock.is_running() {
            self.pause_clock();
        } else {
            self.start_clock();
        }
    }

    /// One discrete one-second decrement, applied by the tick task.
    pub fn tick(&mut self) {
        if self.clock.tick() {
            info!("{} Match clock expired", self.status_string());
            self.send_clock_running(false);
        }
    }

    pub fn reset_clock(&mut self) {
        if self.clock.reset(self.config.clock_duration) {
            self.send_clock_running(false);
        }
        info!("{} Match clock reset", self.status_string());
    }

    /// Manual clock edit; seconds are clamped to at most 59.
    pub fn set_clock(&mut self, minutes: u32, seconds: u32) {
        if self.clock.set(minutes, seconds) {
            self.send_clock_running(false);
        }
        info!("{} Clock set manually", self.status_string());
    }

    /// Manual clock edit from text, `"MM:SS"` or `"MM"`. Malformed input is
    /// discarded with no state change.
    pub fn set_clock_from_text(&mut self, text: &str) {
        match parse_clock_text(text) {
            Some((minutes, seconds)) => self.set_clock(minutes, seconds),
            None => warn!(
                "{} Discarding malformed clock input {text:?}",
                self.status_string()
            ),
        }
    }

    /// Commits a trimmed, upper-cased team name. A name that is blank after
    /// trimming is discarded and the prior name kept.
    pub fn set_team_name(&mut self, side: Side, raw: &str) {
        if self.teams[side].set_name(raw) {
            info!(
                "{} {side} team renamed to {:?}",
                self.status_string(),
                self.teams[side].name()
            );
        } else {
            warn!("{} Discarding blank {side} team name", self.status_string());
        }
    }

    pub fn set_team_color(&mut self, side: Side, color: String) {
        info!("{} {side} team color set to {color}", self.status_string());
        self.teams[side].set_color(color);
    }

    /// Stores an opaque image reference for the team; the content is never
    /// inspected.
    pub fn set_team_logo(&mut self, side: Side, logo: Option<String>) {
        info!(
            "{} {side} team logo {}",
            self.status_string(),
            if logo.is_some() { "set" } else { "cleared" }
        );
        self.teams[side].set_logo(logo);
    }

    pub fn add_score(&mut self, side: Side, delta: i32) {
        let new_score = self.teams[side].add_score(delta);
        info!(
            "{} {side} team score adjusted by {delta} to {new_score}",
            self.status_string()
        );
    }

    pub fn score(&self, side: Side) -> u32 {
        self.teams[side].score()
    }

    pub fn toggle_foul(&mut self, side: Side, index: usize) -> Result<()> {
        if index >= NUM_FOUL_SLOTS {
            return Err(MatchControllerError::InvalidFoulIndex(side, index));
        }
        let set = self.teams[side].toggle_foul(index);
        info!(
            "{} {side} team foul {index} {}",
            self.status_string(),
            if set { "set" } else { "cleared" }
        );
        Ok(())
    }

    pub fn toggle_timeout(&mut self, side: Side) {
        let used = self.teams[side].toggle_timeout();
        info!(
            "{} {side} team timeout marked {}",
            self.status_string(),
            if used { "used" } else { "available" }
        );
    }

    pub fn reset_team(&mut self, side: Side) {
        info!("{} Resetting the {side} team", self.status_string());
        self.teams[side] = TeamState::new(&self.config.teams[side]);
    }

    pub fn next_period(&mut self) {
        self.set_period(self.period.saturating_add(1));
    }

    pub fn previous_period(&mut self) {
        self.set_period(self.period.saturating_sub(1).max(1));
    }

    /// Applies a period transition. Any observed change re-arms both teams'
    /// timeouts in the same call, so no snapshot can see the new period with
    /// a stale `timeout_used`.
    fn set_period(&mut self, period: u32) {
        if period == self.period {
            return;
        }
        info!(
            "{} Moving from period {} to {period}, re-arming timeouts",
            self.status_string(),
            self.period
        );
        self.period = period;
        for (_, team) in self.teams.iter_mut() {
            team.clear_timeout();
        }
    }

    /// Wholesale reset of the entire scoreboard. The surrounding application
    /// is expected to confirm with the operator first.
    pub fn reset_all(&mut self) {
        info!("{} Resetting the entire scoreboard", self.status_string());
        for (side, team) in self.teams.iter_mut() {
            *team = TeamState::new(&self.config.teams[side]);
        }
        if self.clock.reset(self.config.clock_duration) {
            self.send_clock_running(false);
        }
        self.period = 1;
    }

    /// The current state as seen by renderers. Read-only, no side effects.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            teams: SideBundle {
                left: self.teams.left.as_snapshot(),
                right: self.teams.right.as_snapshot(),
            },
            secs_remaining: self.clock.secs_remaining(),
            clock_running: self.clock.is_running(),
            period: self.period,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MatchControllerError {
    #[error("No foul slot exists at index {1} for the {0} team")]
    InvalidFoulIndex(Side, usize),
}

pub type Result<T> = std::result::Result<T, MatchControllerError>;
