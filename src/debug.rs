//! Debug overlays a map or layer can draw on top of its tiles.
//!
//! ```
//! use macroquad_tiled_debug::{DebugDrawOptions, DebugOverlay};
//!
//! // show the map's grid & bounds shape
//! let mut opts = DebugDrawOptions::DRAW_GRID | DebugDrawOptions::DRAW_FRAME;
//!
//! // turn off grid visibility
//! opts.remove(DebugDrawOptions::DRAW_GRID);
//! assert_eq!(opts.overlays().collect::<Vec<_>>(), vec![DebugOverlay::Frame]);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use macroquad::color::Color;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MapError;

bitflags! {
    /// Set of debug overlays to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DebugDrawOptions: u8 {
        /// Visualize the node's tile grid.
        const DRAW_GRID = 1 << 0;
        /// Visualize the node's bounding rect.
        const DRAW_FRAME = 1 << 1;
        /// Visualize the node's pathfinding graph.
        const DRAW_GRAPH = 1 << 2;
        /// Draw objects' bounding shapes.
        const DRAW_OBJECT_FRAMES = 1 << 3;
        /// Draw the layer's anchor point.
        const DRAW_ANCHOR = 1 << 4;
    }
}

impl Default for DebugDrawOptions {
    fn default() -> Self {
        DebugDrawOptions::empty()
    }
}

impl DebugDrawOptions {
    /// Overlays in this set, in bit order.
    pub fn overlays(self) -> impl Iterator<Item = DebugOverlay> {
        DebugOverlay::ALL
            .into_iter()
            .filter(move |o| self.contains(o.flag()))
    }

    /// Whether `overlay` is part of the set.
    #[inline]
    pub fn shows(self, overlay: DebugOverlay) -> bool {
        self.contains(overlay.flag())
    }

    /// Add or remove a single overlay.
    #[inline]
    pub fn set_overlay(&mut self, overlay: DebugOverlay, on: bool) {
        self.set(overlay.flag(), on);
    }

    /// Flip a single overlay.
    #[inline]
    pub fn toggle_overlay(&mut self, overlay: DebugOverlay) {
        self.toggle(overlay.flag());
    }
}

impl From<DebugOverlay> for DebugDrawOptions {
    fn from(overlay: DebugOverlay) -> Self {
        overlay.flag()
    }
}

impl FromIterator<DebugOverlay> for DebugDrawOptions {
    fn from_iter<I: IntoIterator<Item = DebugOverlay>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DebugDrawOptions::empty(), |acc, o| acc | o.flag())
    }
}

/// `grid | frame`; `none` when empty.
impl fmt::Display for DebugDrawOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, overlay) in self.overlays().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(overlay.name())?;
        }
        Ok(())
    }
}

/// Accepts names separated by `|` or `,`, plus `none`/empty and `all`.
impl FromStr for DebugDrawOptions {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut opts = DebugDrawOptions::empty();
        for part in s.split(['|', ',']).map(str::trim) {
            if part.is_empty() || part.eq_ignore_ascii_case("none") {
                continue;
            }
            if part.eq_ignore_ascii_case("all") {
                opts |= DebugDrawOptions::all();
                continue;
            }
            opts |= part.parse::<DebugOverlay>()?.flag();
        }
        Ok(opts)
    }
}

impl Serialize for DebugDrawOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.overlays())
    }
}

/// Accepts a sequence of overlay names or the `FromStr` text form.
impl<'de> Deserialize<'de> for DebugDrawOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = DebugDrawOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of debug overlay names or a `|`-separated string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut opts = DebugDrawOptions::empty();
                while let Some(overlay) = seq.next_element::<DebugOverlay>()? {
                    opts |= overlay.flag();
                }
                Ok(opts)
            }
        }

        deserializer.deserialize_any(OptionsVisitor)
    }
}

/// A single debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DebugOverlay {
    /// Tile grid lines
    Grid,
    /// Bounding rect
    Frame,
    /// Pathfinding graph
    Graph,
    /// Object bounding shapes
    ObjectFrames,
    /// Anchor point marker
    Anchor,
}

impl DebugOverlay {
    /// Every overlay, in bit order.
    pub const ALL: [DebugOverlay; 5] = [
        DebugOverlay::Grid,
        DebugOverlay::Frame,
        DebugOverlay::Graph,
        DebugOverlay::ObjectFrames,
        DebugOverlay::Anchor,
    ];

    /// The flag this overlay corresponds to.
    pub fn flag(self) -> DebugDrawOptions {
        match self {
            DebugOverlay::Grid => DebugDrawOptions::DRAW_GRID,
            DebugOverlay::Frame => DebugDrawOptions::DRAW_FRAME,
            DebugOverlay::Graph => DebugDrawOptions::DRAW_GRAPH,
            DebugOverlay::ObjectFrames => DebugDrawOptions::DRAW_OBJECT_FRAMES,
            DebugOverlay::Anchor => DebugDrawOptions::DRAW_ANCHOR,
        }
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            DebugOverlay::Grid => "grid",
            DebugOverlay::Frame => "frame",
            DebugOverlay::Graph => "graph",
            DebugOverlay::ObjectFrames => "object_frames",
            DebugOverlay::Anchor => "anchor",
        }
    }

    /// Accepted spellings: snake case, camelCase and the `draw`-prefixed form.
    fn spellings(self) -> [&'static str; 3] {
        match self {
            DebugOverlay::Grid => ["grid", "grid", "drawGrid"],
            DebugOverlay::Frame => ["frame", "frame", "drawFrame"],
            DebugOverlay::Graph => ["graph", "graph", "drawGraph"],
            DebugOverlay::ObjectFrames => ["object_frames", "objectFrames", "drawObjectFrames"],
            DebugOverlay::Anchor => ["anchor", "anchor", "drawAnchor"],
        }
    }

    /// Colour the overlay is drawn with.
    pub fn color(self) -> Color {
        match self {
            DebugOverlay::Grid => Color::new(1.0, 1.0, 1.0, 0.25),
            DebugOverlay::Frame => Color::new(0.0, 0.89, 0.19, 0.8),
            DebugOverlay::Graph => Color::new(0.0, 0.47, 0.95, 0.6),
            DebugOverlay::ObjectFrames => Color::new(1.0, 0.63, 0.0, 0.8),
            DebugOverlay::Anchor => Color::new(0.9, 0.16, 0.22, 1.0),
        }
    }
}

impl fmt::Display for DebugOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `object_frames`, `objectFrames` and `drawObjectFrames`.
impl FromStr for DebugOverlay {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        DebugOverlay::ALL
            .into_iter()
            .find(|o| o.spellings().contains(&key))
            .ok_or_else(|| MapError::UnknownDebugOverlay(key.to_owned()))
    }
}

impl TryFrom<String> for DebugOverlay {
    type Error = MapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A node that owns a set of debug overlays.
pub trait DebugDrawable {
    /// Current overlays.
    fn debug_draw_options(&self) -> DebugDrawOptions;

    /// Mutable access to the overlays.
    fn debug_draw_options_mut(&mut self) -> &mut DebugDrawOptions;

    /// Replace every overlay at once.
    fn set_debug_draw_options(&mut self, opts: DebugDrawOptions) {
        *self.debug_draw_options_mut() = opts;
    }

    /// Turn `overlay` on.
    fn show_overlay(&mut self, overlay: DebugOverlay) {
        self.debug_draw_options_mut().insert(overlay.flag());
    }

    /// Turn `overlay` off. No-op when it is already off.
    fn hide_overlay(&mut self, overlay: DebugOverlay) {
        self.debug_draw_options_mut().remove(overlay.flag());
    }

    /// Whether `overlay` is on.
    fn is_showing(&self, overlay: DebugOverlay) -> bool {
        self.debug_draw_options().shows(overlay)
    }
}
