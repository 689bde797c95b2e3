use serde::{Deserialize, Serialize};

pub use futsal_common::config::Game;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: Game,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ser_game() {
        let game: Game = Default::default();
        let serialized = toml::to_string(&game).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(game));
    }

    #[test]
    fn test_ser_config() {
        let config: Config = Default::default();
        let serialized = toml::to_string(&config).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(config));
    }
}
