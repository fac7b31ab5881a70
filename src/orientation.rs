//! Tile-map geometry classification: orientation and hexagonal stagger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Tile-map orientation type.
///
/// | Variant      | Description                  |
/// |:-------------|:-----------------------------|
/// | `Orthogonal` | Square tiles                 |
/// | `Isometric`  | Diamond tiles                |
/// | `Hexagonal`  | Hexagonal tiles              |
/// | `Staggered`  | Staggered isometric tiles    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TilemapOrientation {
    /// Orthogonal (square tiles) map
    #[default]
    Orthogonal,
    /// Isometric map
    Isometric,
    /// Hexagonal map
    Hexagonal,
    /// Staggered isometric map
    Staggered,
}

impl TilemapOrientation {
    /// Every orientation, in declaration order.
    pub const ALL: [TilemapOrientation; 4] = [
        TilemapOrientation::Orthogonal,
        TilemapOrientation::Isometric,
        TilemapOrientation::Hexagonal,
        TilemapOrientation::Staggered,
    ];

    /// Name as written in Tiled JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TilemapOrientation::Orthogonal => "orthogonal",
            TilemapOrientation::Isometric => "isometric",
            TilemapOrientation::Hexagonal => "hexagonal",
            TilemapOrientation::Staggered => "staggered",
        }
    }

    /// Whether `StaggerAxis` / `StaggerIndex` mean anything for this orientation.
    pub fn uses_stagger(self) -> bool {
        matches!(
            self,
            TilemapOrientation::Hexagonal | TilemapOrientation::Staggered
        )
    }
}

impl fmt::Display for TilemapOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TilemapOrientation {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapError::UnknownOrientation(s.to_owned()))
    }
}

/// Hexagonal stagger axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StaggerAxis {
    /// Columns are staggered (axis along x)
    X,
    /// Rows are staggered (axis along y)
    #[default]
    Y,
}

impl StaggerAxis {
    /// Both axes.
    pub const ALL: [StaggerAxis; 2] = [StaggerAxis::X, StaggerAxis::Y];

    /// Name as written in Tiled JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            StaggerAxis::X => "x",
            StaggerAxis::Y => "y",
        }
    }
}

impl fmt::Display for StaggerAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaggerAxis {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapError::UnknownStaggerAxis(s.to_owned()))
    }
}

/// Hexagonal stagger index: which row/column parity is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StaggerIndex {
    /// Odd rows/columns are shifted
    #[default]
    Odd,
    /// Even rows/columns are shifted
    Even,
}

impl StaggerIndex {
    /// Both parities.
    pub const ALL: [StaggerIndex; 2] = [StaggerIndex::Odd, StaggerIndex::Even];

    /// Name as written in Tiled JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            StaggerIndex::Odd => "odd",
            StaggerIndex::Even => "even",
        }
    }

    /// Whether row/column `i` carries the stagger offset.
    #[inline]
    pub fn is_staggered(self, i: i32) -> bool {
        let odd = i.rem_euclid(2) == 1;
        match self {
            StaggerIndex::Odd => odd,
            StaggerIndex::Even => !odd,
        }
    }
}

impl fmt::Display for StaggerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaggerIndex {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapError::UnknownStaggerIndex(s.to_owned()))
    }
}

/// Stagger axis and index of a hexagonal or staggered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Stagger {
    /// Axis along which rows/columns are shifted
    pub axis: StaggerAxis,
    /// Which parity is shifted
    pub index: StaggerIndex,
}

impl Stagger {
    /// Pair an axis with an index.
    pub fn new(axis: StaggerAxis, index: StaggerIndex) -> Self {
        Stagger { axis, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientations_equal_only_themselves() {
        for (i, a) in TilemapOrientation::ALL.iter().enumerate() {
            for (j, b) in TilemapOrientation::ALL.iter().enumerate() {
                assert_eq!(a == b, i == j, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn orientation_discriminants_follow_declaration_order() {
        let discriminants: Vec<u8> = TilemapOrientation::ALL
            .iter()
            .map(|o| *o as u8)
            .collect();
        assert_eq!(discriminants, vec![0, 1, 2, 3]);
    }

    #[test]
    fn only_hex_and_staggered_use_stagger() {
        let using: Vec<_> = TilemapOrientation::ALL
            .into_iter()
            .filter(|o| o.uses_stagger())
            .collect();
        assert_eq!(
            using,
            vec![TilemapOrientation::Hexagonal, TilemapOrientation::Staggered]
        );
    }

    #[test]
    fn stagger_enums_have_two_distinct_variants() {
        assert_eq!(StaggerAxis::ALL.len(), 2);
        assert_ne!(StaggerAxis::X, StaggerAxis::Y);
        assert_eq!(StaggerIndex::ALL.len(), 2);
        assert_ne!(StaggerIndex::Odd, StaggerIndex::Even);
    }

    #[test]
    fn parses_tiled_spellings_case_insensitively() {
        assert_eq!(
            "Hexagonal".parse::<TilemapOrientation>().unwrap(),
            TilemapOrientation::Hexagonal
        );
        assert_eq!(" x ".parse::<StaggerAxis>().unwrap(), StaggerAxis::X);
        assert_eq!("EVEN".parse::<StaggerIndex>().unwrap(), StaggerIndex::Even);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for o in TilemapOrientation::ALL {
            assert_eq!(o.to_string().parse::<TilemapOrientation>().unwrap(), o);
        }
        for a in StaggerAxis::ALL {
            assert_eq!(a.to_string().parse::<StaggerAxis>().unwrap(), a);
        }
        for i in StaggerIndex::ALL {
            assert_eq!(i.to_string().parse::<StaggerIndex>().unwrap(), i);
        }
    }

    #[test]
    fn rejects_unknown_text_with_typed_errors() {
        assert!(matches!(
            "hexagon".parse::<TilemapOrientation>(),
            Err(MapError::UnknownOrientation(s)) if s == "hexagon"
        ));
        assert!(matches!(
            "z".parse::<StaggerAxis>(),
            Err(MapError::UnknownStaggerAxis(_))
        ));
        assert!(matches!(
            "both".parse::<StaggerIndex>(),
            Err(MapError::UnknownStaggerIndex(_))
        ));
    }

    #[test]
    fn stagger_index_parity() {
        assert!(StaggerIndex::Odd.is_staggered(1));
        assert!(!StaggerIndex::Odd.is_staggered(2));
        assert!(StaggerIndex::Even.is_staggered(0));
        assert!(!StaggerIndex::Even.is_staggered(3));
        // negative rows keep alternating
        assert!(StaggerIndex::Odd.is_staggered(-1));
        assert!(StaggerIndex::Even.is_staggered(-2));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TilemapOrientation::Staggered).unwrap();
        assert_eq!(json, "\"staggered\"");
        let stagger: Stagger =
            serde_json::from_str(r#"{"axis":"x","index":"even"}"#).unwrap();
        assert_eq!(stagger, Stagger::new(StaggerAxis::X, StaggerIndex::Even));
    }

    #[test]
    fn defaults_match_tiled() {
        assert_eq!(TilemapOrientation::default(), TilemapOrientation::Orthogonal);
        assert_eq!(
            Stagger::default(),
            Stagger::new(StaggerAxis::Y, StaggerIndex::Odd)
        );
    }
}
