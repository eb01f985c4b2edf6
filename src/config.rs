use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::error::ConfigError;

/// Default board edge length in tiles.
pub const DEFAULT_GRID_TILES: u16 = 20;

/// Smallest board that fits the starting body and still leaves room for food.
pub const MIN_GRID_TILES: u16 = 4;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Score granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Number of segments in a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Random placement attempts before food spawning falls back to a free-cell scan.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Session parameters fixed at game start.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid_tiles: u16,
    pub tick_interval: Duration,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_tiles: DEFAULT_GRID_TILES,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Checks the parameters and returns them unchanged when usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.grid_tiles < MIN_GRID_TILES {
            return Err(ConfigError::GridTooSmall {
                tiles: self.grid_tiles,
                min: MIN_GRID_TILES,
            });
        }

        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(self)
    }
}

/// Colors applied to the terminal front end.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Neon-on-slate palette.
pub const THEME_NEON: Theme = Theme {
    snake_head: Color::Rgb(0x4a, 0xde, 0x80),
    snake_body: Color::Rgb(0x22, 0xd3, 0xee),
    food: Color::Rgb(0xf4, 0x72, 0xb6),
    play_bg: Color::Rgb(0x1e, 0x29, 0x3b),
    border_fg: Color::Rgb(0x22, 0xd3, 0xee),
    hud_score: Color::White,
    menu_title: Color::Rgb(0x4a, 0xde, 0x80),
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph pair drawn for one snake segment (two columns per tile).
pub const GLYPH_SEGMENT: &str = "██";

/// Glyph pair drawn for the food tile.
pub const GLYPH_FOOD: &str = "▐▌";

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{GameConfig, MIN_GRID_TILES};
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(config));
        assert_eq!(config.grid_tiles, 20);
        assert_eq!(config.food_reward, 10);
    }

    #[test]
    fn tiny_grid_is_rejected() {
        let config = GameConfig {
            grid_tiles: MIN_GRID_TILES - 1,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall {
                tiles: MIN_GRID_TILES - 1,
                min: MIN_GRID_TILES
            })
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = GameConfig {
            tick_interval: Duration::ZERO,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
