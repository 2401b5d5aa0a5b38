//! **gridtrace-core** — foundational types shared by the gridtrace crates.
//!
//! This crate provides grid geometry ([`Point`], [`Range`]), the canonical
//! [`CellKey`] encoding used for every wall/visited/frontier set, and the
//! configuration checks run before a search or maze generation starts.

pub mod geom;
pub mod key;
pub mod validate;

pub use geom::{Point, Range};
pub use key::{CellKey, KeyError, WallSet, walls_from_points};
pub use validate::{ConfigError, Endpoint, validate, validate_bounds};
