//! Input validation shared by every search and by maze generation.

use std::fmt;

use crate::geom::{Point, Range};
use crate::key::{CellKey, WallSet};

/// Which end of a search a point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// An invalid search or generation configuration, reported before any work
/// is done.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("{endpoint} {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        width: i32,
        height: i32,
    },
    #[error("{endpoint} {point} is a wall")]
    BlockedEndpoint { endpoint: Endpoint, point: Point },
}

/// Check grid dimensions and that both endpoints are inside the grid.
///
/// Returns the grid bounds on success.
pub fn validate_bounds(
    start: Point,
    end: Point,
    width: i32,
    height: i32,
) -> Result<Range, ConfigError> {
    if width <= 0 || height <= 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    let bounds = Range::grid(width, height);
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !bounds.contains(point) {
            return Err(ConfigError::OutOfBounds {
                endpoint,
                point,
                width,
                height,
            });
        }
    }
    Ok(bounds)
}

/// Full validation of a search configuration: [`validate_bounds`] plus a
/// check that neither endpoint is a wall.
pub fn validate(
    start: Point,
    end: Point,
    width: i32,
    height: i32,
    walls: &WallSet,
) -> Result<Range, ConfigError> {
    let bounds = validate_bounds(start, end, width, height)?;
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if walls.contains(&CellKey::new(point)) {
            return Err(ConfigError::BlockedEndpoint { endpoint, point });
        }
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::walls_from_points;

    #[test]
    fn accepts_valid_config() {
        let walls = walls_from_points([Point::new(1, 1)]);
        let bounds = validate(Point::new(0, 0), Point::new(4, 4), 5, 5, &walls).unwrap();
        assert_eq!(bounds, Range::grid(5, 5));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let walls = WallSet::new();
        assert_eq!(
            validate(Point::ZERO, Point::ZERO, 0, 3, &walls),
            Err(ConfigError::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(matches!(
            validate(Point::ZERO, Point::ZERO, 3, -1, &walls),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let walls = WallSet::new();
        let err = validate(Point::new(-1, 0), Point::new(1, 1), 3, 3, &walls).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfBounds {
                endpoint: Endpoint::Start,
                ..
            }
        ));
        let err = validate(Point::ZERO, Point::new(3, 0), 3, 3, &walls).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfBounds {
                endpoint: Endpoint::End,
                ..
            }
        ));
        assert_eq!(err.to_string(), "end (3, 0) is outside the 3x3 grid");
    }

    #[test]
    fn rejects_walled_endpoints() {
        let walls = walls_from_points([Point::new(2, 2)]);
        assert_eq!(
            validate(Point::ZERO, Point::new(2, 2), 3, 3, &walls),
            Err(ConfigError::BlockedEndpoint {
                endpoint: Endpoint::End,
                point: Point::new(2, 2),
            })
        );
        // Bounds-only validation ignores walls.
        assert!(validate_bounds(Point::ZERO, Point::new(2, 2), 3, 3).is_ok());
    }
}
