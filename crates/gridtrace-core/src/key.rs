//! Canonical string keys for grid cells.
//!
//! A [`CellKey`] is the decimal `x` and `y` of a [`Point`] joined by a comma,
//! e.g. `"3,-1"`. The encoding is total over `i32` coordinates and
//! injective, so keys can stand in for points in any map or set.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

const SEPARATOR: char = ',';

/// A set of impassable cells. Every in-bounds cell not in the set is
/// passable.
pub type WallSet = HashSet<CellKey>;

/// Canonical key of a grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellKey(String);

impl CellKey {
    /// Encode `p` as a key.
    pub fn new(p: Point) -> Self {
        Self(format!("{}{SEPARATOR}{}", p.x, p.y))
    }

    /// Decode the key back into the point it was built from.
    pub fn point(&self) -> Result<Point, KeyError> {
        parse_point(&self.0)
    }

    /// The encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Point> for CellKey {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p)
    }
}

impl From<&Point> for CellKey {
    #[inline]
    fn from(p: &Point) -> Self {
        Self::new(*p)
    }
}

impl FromStr for CellKey {
    type Err = KeyError;

    /// Parse and canonicalize a key. `"+1,02"` is rejected rather than
    /// normalized, since it could never have been produced by [`CellKey::new`].
    fn from_str(s: &str) -> Result<Self, KeyError> {
        let p = parse_point(s)?;
        let key = Self::new(p);
        if key.0 != s {
            return Err(KeyError::NotCanonical(s.to_owned()));
        }
        Ok(key)
    }
}

impl AsRef<str> for CellKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors produced when decoding a string that is not a valid [`CellKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("cell key {0:?} has no ',' separator")]
    MissingSeparator(String),
    #[error("cell key {key:?} has an invalid coordinate {part:?}")]
    BadCoordinate { key: String, part: String },
    #[error("cell key {0:?} is not in canonical form")]
    NotCanonical(String),
}

fn parse_point(s: &str) -> Result<Point, KeyError> {
    let (x, y) = s
        .split_once(SEPARATOR)
        .ok_or_else(|| KeyError::MissingSeparator(s.to_owned()))?;
    let coord = |part: &str| {
        part.parse::<i32>().map_err(|_| KeyError::BadCoordinate {
            key: s.to_owned(),
            part: part.to_owned(),
        })
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// Build a [`WallSet`] from a list of points.
pub fn walls_from_points<I>(points: I) -> WallSet
where
    I: IntoIterator,
    I::Item: Into<CellKey>,
{
    points.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Range;

    #[test]
    fn encodes_as_x_comma_y() {
        assert_eq!(CellKey::new(Point::new(3, 14)).as_str(), "3,14");
        assert_eq!(CellKey::new(Point::new(-2, 0)).to_string(), "-2,0");
    }

    #[test]
    fn round_trips_every_cell_of_a_grid() {
        for p in Range::grid(23, 17) {
            assert_eq!(CellKey::new(p).point(), Ok(p));
        }
        let extreme = Point::new(i32::MIN, i32::MAX);
        assert_eq!(CellKey::new(extreme).point(), Ok(extreme));
    }

    #[test]
    fn distinct_points_have_distinct_keys() {
        // "1,12" vs "11,2" would collide without a separator.
        assert_ne!(CellKey::new(Point::new(1, 12)), CellKey::new(Point::new(11, 2)));
        let keys: HashSet<CellKey> = Range::grid(12, 12).iter().map(CellKey::new).collect();
        assert_eq!(keys.len(), 144);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "12".parse::<CellKey>(),
            Err(KeyError::MissingSeparator("12".into()))
        );
        assert!(matches!(
            "a,1".parse::<CellKey>(),
            Err(KeyError::BadCoordinate { .. })
        ));
        assert!(matches!(
            "1,2,3".parse::<CellKey>(),
            Err(KeyError::BadCoordinate { .. })
        ));
        assert_eq!(
            "+1,2".parse::<CellKey>(),
            Err(KeyError::NotCanonical("+1,2".into()))
        );
        assert_eq!("4,5".parse::<CellKey>().map(|k| k.point()), Ok(Ok(Point::new(4, 5))));
    }

    #[test]
    fn wall_set_from_points() {
        let walls = walls_from_points([Point::new(1, 1), Point::new(2, 1), Point::new(1, 1)]);
        assert_eq!(walls.len(), 2);
        assert!(walls.contains(&CellKey::new(Point::new(2, 1))));
    }
}
