use futsal_common::{
    config::TeamDefaults,
    snapshot::{NUM_FOUL_SLOTS, TeamSnapshot},
};

/// Live state of one team. Mutated only through `MatchController`
/// operations; renderers see it as a `TeamSnapshot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamState {
    name: String,
    color: String,
    score: u32,
    fouls: [bool; NUM_FOUL_SLOTS],
    timeout_used: bool,
    logo: Option<String>,
}

impl TeamState {
    pub fn new(defaults: &TeamDefaults) -> Self {
        Self {
            name: defaults.name.clone(),
            color: defaults.color.clone(),
            score: 0,
            fouls: [false; NUM_FOUL_SLOTS],
            timeout_used: false,
            logo: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn timeout_used(&self) -> bool {
        self.timeout_used
    }

    /// Commits a trimmed, upper-cased name. A name that is blank after
    /// trimming is rejected and the prior name kept; returns whether the
    /// edit was committed.
    pub fn set_name(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_uppercase();
        true
    }

    pub fn set_color(&mut self, color: String) {
        self.color = color;
    }

    pub fn set_logo(&mut self, logo: Option<String>) {
        self.logo = logo;
    }

    /// Applies any integer delta, clamping the result at zero.
    pub fn add_score(&mut self, delta: i32) -> u32 {
        self.score = self.score.saturating_add_signed(delta);
        self.score
    }

    /// Flips the foul slot at `index` and returns its new value. The caller
    /// must have validated `index < NUM_FOUL_SLOTS`.
    pub fn toggle_foul(&mut self, index: usize) -> bool {
        self.fouls[index] = !self.fouls[index];
        self.fouls[index]
    }

    /// Reads the foul slot at `index`. The caller must have validated
    /// `index < NUM_FOUL_SLOTS`.
    pub fn foul(&self, index: usize) -> bool {
        self.fouls[index]
    }

    /// Unconditional flip, including re-arming a used timeout. This is a
    /// manual-correction allowance for the operator, not a rules check.
    pub fn toggle_timeout(&mut self) -> bool {
        self.timeout_used = !self.timeout_used;
        self.timeout_used
    }

    pub fn clear_timeout(&mut self) {
        self.timeout_used = false;
    }

    pub fn as_snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            name: self.name.clone(),
            color: self.color.clone(),
            score: self.score,
            fouls: self.fouls,
            timeout_used: self.timeout_used,
            logo: self.logo.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn defaults() -> TeamDefaults {
        TeamDefaults {
            name: "EQUIPE A".to_string(),
            color: "#ef4444".to_string(),
        }
    }

    #[test]
    fn test_name_commit_rules() {
        let mut team = TeamState::new(&defaults());

        assert_eq!(team.set_name("   "), false);
        assert_eq!(team.name(), "EQUIPE A");

        assert_eq!(team.set_name("tigers"), true);
        assert_eq!(team.name(), "TIGERS");

        assert_eq!(team.set_name("  lions  "), true);
        assert_eq!(team.name(), "LIONS");
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let mut team = TeamState::new(&defaults());

        assert_eq!(team.add_score(1), 1);
        assert_eq!(team.add_score(3), 4);
        assert_eq!(team.add_score(-1), 3);
        assert_eq!(team.add_score(-10), 0);
        assert_eq!(team.add_score(-1), 0);
        assert_eq!(team.add_score(i32::MIN), 0);
    }

    #[test]
    fn test_foul_double_toggle() {
        let mut team = TeamState::new(&defaults());

        assert_eq!(team.toggle_foul(2), true);
        assert_eq!(team.foul(2), true);
        assert_eq!(team.toggle_foul(2), false);
        assert_eq!(team.foul(2), false);
    }

    #[test]
    fn test_fouls_settable_out_of_order() {
        let mut team = TeamState::new(&defaults());

        team.toggle_foul(4);
        team.toggle_foul(0);
        assert_eq!(team.foul(4), true);
        assert_eq!(team.foul(0), true);
        assert_eq!(team.foul(1), false);
    }

    #[test]
    fn test_timeout_rearms() {
        let mut team = TeamState::new(&defaults());

        assert_eq!(team.toggle_timeout(), true);
        assert_eq!(team.toggle_timeout(), false);
        assert_eq!(team.timeout_used(), false);
    }
}
