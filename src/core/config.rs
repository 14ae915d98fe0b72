//! Validated game configuration.
//!
//! Field dimensions come from the embedding application, so they are
//! checked once at construction; the geometry code downstream never has
//! to consider a zero-width or zero-height grid.

use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Smallest accepted field dimension. A field narrower or shorter than
/// the widest spawn shape cannot host a single piece.
const MIN_DIMENSION: i16 = 4;

/// Rejected field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("field width {0} is below the minimum of 4")]
    WidthTooSmall(i16),
    #[error("field height {0} is below the minimum of 4")]
    HeightTooSmall(i16),
}

/// Field dimensions, validated at construction.
///
/// Instances can only be obtained through [`GameConfig::new`] or
/// [`Default`], so holding a `GameConfig` is proof the dimensions are
/// usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: i16,
    height: i16,
}

impl GameConfig {
    /// Build a configuration, rejecting dimensions that cannot host play.
    pub fn new(width: i16, height: i16) -> Result<Self, ConfigError> {
        if width < MIN_DIMENSION {
            return Err(ConfigError::WidthTooSmall(width));
        }
        if height < MIN_DIMENSION {
            return Err(ConfigError::HeightTooSmall(height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }
}

impl Default for GameConfig {
    /// The standard 10x20 field.
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_ten_by_twenty() {
        let config = GameConfig::default();
        assert_eq!(config.width(), 10);
        assert_eq!(config.height(), 20);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(GameConfig::new(0, 20), Err(ConfigError::WidthTooSmall(0)));
        assert_eq!(GameConfig::new(-3, 20), Err(ConfigError::WidthTooSmall(-3)));
        assert_eq!(GameConfig::new(10, 0), Err(ConfigError::HeightTooSmall(0)));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        // A 3-wide field cannot host the I piece.
        assert!(GameConfig::new(3, 20).is_err());
        assert!(GameConfig::new(10, 3).is_err());
        assert!(GameConfig::new(4, 4).is_ok());
    }
}
