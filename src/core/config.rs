//! Game configuration.
//!
//! Configuration is fixed at game creation and determines the initial
//! state. The only option today is the doubling cube.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Enable the doubling cube (`propose-double` / `accept` / `forfeit`).
    pub raise_stakes: bool,
}

impl GameConfig {
    /// Create a configuration with doubling disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the doubling cube.
    #[must_use]
    pub fn with_raise_stakes(mut self) -> Self {
        self.raise_stakes = true;
        self
    }

    /// The state a new game starts from.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::initial(self.raise_stakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Cube;

    #[test]
    fn test_default_config() {
        let config = GameConfig::new();
        assert!(!config.raise_stakes);
        assert_eq!(config.initial_state().cube, None);
    }

    #[test]
    fn test_raise_stakes() {
        let config = GameConfig::new().with_raise_stakes();
        assert!(config.raise_stakes);
        assert_eq!(config.initial_state().cube, Some(Cube::Centered));
    }
}
