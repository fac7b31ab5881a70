#![warn(missing_docs)]

//! Tiled map orientation, hexagonal stagger and debug-overlay options for
//! Macroquad renderers.

mod debug;
mod error;
mod ir_map;
mod loader {
    pub mod json_loader;
}
mod map;
mod orientation;

pub use debug::{DebugDrawOptions, DebugDrawable, DebugOverlay};
pub use error::MapError;
pub use ir_map::{IrLayer, IrMap};
pub use loader::json_loader::{decode_map_file_to_ir, decode_map_str, DEBUG_DRAW_PROPERTY};
pub use map::{DebugDrawItem, DebugTarget, Layer, LayerId, Map, MapGeometry};
pub use orientation::{Stagger, StaggerAxis, StaggerIndex, TilemapOrientation};
