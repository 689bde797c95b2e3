use crate::side::SideBundle;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDefaults {
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Clock value at the start of each period, in seconds
    pub clock_duration: u32,
    pub teams: SideBundle<TeamDefaults>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            clock_duration: 1200,
            teams: SideBundle {
                left: TeamDefaults {
                    name: "EQUIPE A".to_string(),
                    color: "#ef4444".to_string(),
                },
                right: TeamDefaults {
                    name: "EQUIPE B".to_string(),
                    color: "#3b82f6".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ser_team_defaults() {
        let td = Game::default().teams.left;
        let serialized = toml::to_string(&td).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(td));
    }

    #[test]
    fn test_ser_game() {
        let game: Game = Default::default();
        let serialized = toml::to_string(&game).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(game));
    }
}
