use crate::side::SideBundle;
use std::fmt::Write;

/// Number of accumulated-foul indicators per team.
pub const NUM_FOUL_SLOTS: usize = 5;

/// Selectable team colors, as hex strings. Custom values are also accepted
/// anywhere a color is set.
pub const TEAM_COLOR_PALETTE: [&str; 8] = [
    "#ef4444", // Red
    "#3b82f6", // Blue
    "#22c55e", // Green
    "#eab308", // Yellow
    "#a855f7", // Purple
    "#f97316", // Orange
    "#ffffff", // White
    "#000000", // Black
];

/// Read-only view of one team, as consumed by a renderer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TeamSnapshot {
    pub name: String,
    pub color: String,
    pub score: u32,
    pub fouls: [bool; NUM_FOUL_SLOTS],
    pub timeout_used: bool,
    pub logo: Option<String>,
}

/// The complete scoreboard state at one instant. Renderers only ever see
/// values of this type; all mutation goes through the `MatchController`
/// operations.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MatchSnapshot {
    pub teams: SideBundle<TeamSnapshot>,
    pub secs_remaining: u32,
    pub clock_running: bool,
    pub period: u32,
}

pub fn secs_to_time_string(secs: u32) -> String {
    let min = secs / 60;
    let sec = secs % 60;
    let mut time_string = String::new();
    write!(&mut time_string, "{min:02}:{sec:02}").unwrap();
    time_string
}
