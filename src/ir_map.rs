// src/ir_map.rs
use macroquad::prelude::*;

use crate::debug::DebugDrawOptions;
use crate::orientation::{StaggerAxis, StaggerIndex, TilemapOrientation};

/// Canonical, format-agnostic map header. Unvalidated; see `Map::from_ir`.
#[derive(Debug, Clone)]
pub struct IrMap {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Tile width in pixels
    pub tile_w: u32,
    /// Tile height in pixels
    pub tile_h: u32,
    /// Grid orientation
    pub orientation: TilemapOrientation,
    /// Stagger axis as written in the source, if any
    pub stagger_axis: Option<StaggerAxis>,
    /// Stagger index as written in the source, if any
    pub stagger_index: Option<StaggerIndex>,
    /// Length of the flat hex side, in pixels
    pub hex_side_length: Option<u32>,
    /// Map-level overlays
    pub debug_draw: DebugDrawOptions,
    /// Layers in draw order
    pub layers: Vec<IrLayer>,
}

/// A layer header.
#[derive(Debug, Clone)]
pub struct IrLayer {
    /// Layer name (may be empty)
    pub name: String,
    /// Hidden layers draw nothing, overlays included
    pub visible: bool,
    /// World offset for this layer
    pub offset: Vec2,
    /// Layer-level overlays
    pub debug_draw: DebugDrawOptions,
}
