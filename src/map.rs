use crate::debug::{DebugDrawOptions, DebugDrawable, DebugOverlay};
use crate::error::MapError;
use crate::ir_map::*;
use crate::loader::json_loader::*;
use crate::orientation::{Stagger, StaggerAxis, StaggerIndex, TilemapOrientation};
use log::{debug, warn};
use macroquad::prelude::*;
use std::path::Path;

/// Index of a layer inside its [`Map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

/// Orientation, tile size and stagger of a map.
///
/// `stagger` is `Some` exactly when the orientation uses it, and
/// `hex_side_length` is only non-zero on hexagonal maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapGeometry {
    orientation: TilemapOrientation,
    tile_w: u32,
    tile_h: u32,
    stagger: Option<Stagger>,
    hex_side_length: u32,
}

impl MapGeometry {
    /// Hexagonal and staggered maps start with the default stagger.
    pub fn new(orientation: TilemapOrientation, tile_w: u32, tile_h: u32) -> Self {
        MapGeometry {
            orientation,
            tile_w,
            tile_h,
            stagger: orientation.uses_stagger().then(Stagger::default),
            hex_side_length: 0,
        }
    }

    /// Set the stagger axis and index.
    pub fn with_stagger(mut self, axis: StaggerAxis, index: StaggerIndex) -> Result<Self, MapError> {
        if !self.orientation.uses_stagger() {
            return Err(MapError::StaggerNotApplicable {
                orientation: self.orientation,
            });
        }
        self.stagger = Some(Stagger::new(axis, index));
        Ok(self)
    }

    /// Set the flat side length of hexagonal tiles.
    pub fn with_hex_side_length(mut self, len: u32) -> Result<Self, MapError> {
        if self.orientation != TilemapOrientation::Hexagonal {
            return Err(MapError::HexSideNotApplicable {
                orientation: self.orientation,
            });
        }
        self.hex_side_length = len;
        Ok(self)
    }

    /// Grid orientation.
    #[inline]
    pub fn orientation(&self) -> TilemapOrientation {
        self.orientation
    }

    /// Stagger pair; `None` on orthogonal and isometric maps.
    #[inline]
    pub fn stagger(&self) -> Option<Stagger> {
        self.stagger
    }

    /// Flat hex side length in pixels, `0` unless hexagonal.
    #[inline]
    pub fn hex_side_length(&self) -> u32 {
        self.hex_side_length
    }

    /// Tile size in pixels.
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        vec2(self.tile_w as f32, self.tile_h as f32)
    }
}

/// Runtime layer node.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Hidden layers draw nothing, overlays included
    pub visible: bool,
    /// World offset
    pub offset: Vec2,
    debug_draw: DebugDrawOptions,
}

impl DebugDrawable for Layer {
    fn debug_draw_options(&self) -> DebugDrawOptions {
        self.debug_draw
    }

    fn debug_draw_options_mut(&mut self) -> &mut DebugDrawOptions {
        &mut self.debug_draw
    }
}

/// Node an overlay belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugTarget {
    /// The whole map
    Map,
    /// One layer
    Layer(LayerId),
}

/// One overlay a renderer should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugDrawItem {
    /// Owner of the overlay
    pub target: DebugTarget,
    /// What to draw
    pub overlay: DebugOverlay,
    /// Colour to draw it with
    pub color: Color,
}

/// Runtime map node: geometry, layers and debug overlays.
#[derive(Debug, Clone)]
pub struct Map {
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    geometry: MapGeometry,
    layers: Vec<Layer>,
    debug_draw: DebugDrawOptions,
}

impl Map {
    /// Load a Tiled JSON map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let ir = decode_map_file_to_ir(path)?;
        Self::from_ir(ir)
    }

    /// Load a Tiled JSON map held in memory.
    pub fn load_from_str(json: &str) -> Result<Self, MapError> {
        let ir = decode_map_str(json)?;
        Self::from_ir(ir)
    }

    /// Validate a decoded header. Stagger fields on orientations that do not
    /// use them are ignored with a warning.
    pub fn from_ir(ir: IrMap) -> Result<Self, MapError> {
        if ir.width == 0 || ir.height == 0 {
            return Err(MapError::InvalidMap(format!(
                "Map dimensions must be non-zero, got {}x{}",
                ir.width, ir.height
            )));
        }
        if ir.tile_w == 0 || ir.tile_h == 0 {
            return Err(MapError::InvalidMap(format!(
                "Tile dimensions must be non-zero, got {}x{}",
                ir.tile_w, ir.tile_h
            )));
        }

        let mut geometry = MapGeometry::new(ir.orientation, ir.tile_w, ir.tile_h);

        if ir.orientation.uses_stagger() {
            geometry = geometry.with_stagger(
                ir.stagger_axis.unwrap_or_default(),
                ir.stagger_index.unwrap_or_default(),
            )?;
        } else if ir.stagger_axis.is_some() || ir.stagger_index.is_some() {
            warn!("ignoring stagger settings on {} map", ir.orientation);
        }

        match ir.hex_side_length {
            Some(len) if ir.orientation == TilemapOrientation::Hexagonal => {
                geometry = geometry.with_hex_side_length(len)?;
            }
            Some(_) => warn!("ignoring hex side length on {} map", ir.orientation),
            None => {}
        }

        let layers = ir
            .layers
            .into_iter()
            .map(|l| Layer {
                name: l.name,
                visible: l.visible,
                offset: l.offset,
                debug_draw: l.debug_draw,
            })
            .collect::<Vec<_>>();

        debug!(
            "built {} map {}x{} with {} layers, overlays: {}",
            geometry.orientation(),
            ir.width,
            ir.height,
            layers.len(),
            ir.debug_draw
        );

        Ok(Self {
            width: ir.width,
            height: ir.height,
            geometry,
            layers,
            debug_draw: ir.debug_draw,
        })
    }

    /// Orientation, tile size and stagger.
    #[inline]
    pub fn geometry(&self) -> &MapGeometry {
        &self.geometry
    }

    /// Shorthand for `geometry().orientation()`.
    #[inline]
    pub fn orientation(&self) -> TilemapOrientation {
        self.geometry.orientation
    }

    /// Layers in draw order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer by id.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    /// Mutable layer by id.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0)
    }

    /// First layer called `name`.
    pub fn layer_by_name(&self, name: &str) -> Option<LayerId> {
        self.layers.iter().position(|l| l.name == name).map(LayerId)
    }

    /// Map overlays first, then each visible layer's overlays in layer order.
    pub fn debug_draw_list(&self) -> Vec<DebugDrawItem> {
        let map_items = self
            .debug_draw
            .overlays()
            .map(|overlay| (DebugTarget::Map, overlay));

        let layer_items = self
            .layers
            .iter()
            .enumerate()
            .filter(|(_, l)| l.visible)
            .flat_map(|(i, l)| {
                l.debug_draw
                    .overlays()
                    .map(move |overlay| (DebugTarget::Layer(LayerId(i)), overlay))
            });

        map_items
            .chain(layer_items)
            .map(|(target, overlay)| DebugDrawItem {
                target,
                overlay,
                color: overlay.color(),
            })
            .collect()
    }
}

impl DebugDrawable for Map {
    fn debug_draw_options(&self) -> DebugDrawOptions {
        self.debug_draw
    }

    fn debug_draw_options_mut(&mut self) -> &mut DebugDrawOptions {
        &mut self.debug_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ir(orientation: TilemapOrientation) -> IrMap {
        IrMap {
            width: 4,
            height: 4,
            tile_w: 16,
            tile_h: 16,
            orientation,
            stagger_axis: None,
            stagger_index: None,
            hex_side_length: None,
            debug_draw: DebugDrawOptions::empty(),
            layers: Vec::new(),
        }
    }

    fn layer(name: &str, visible: bool, debug_draw: DebugDrawOptions) -> IrLayer {
        IrLayer {
            name: name.to_owned(),
            visible,
            offset: Vec2::ZERO,
            debug_draw,
        }
    }

    #[test]
    fn geometry_only_accepts_stagger_when_orientation_uses_it() {
        for o in TilemapOrientation::ALL {
            let res = MapGeometry::new(o, 16, 16).with_stagger(StaggerAxis::X, StaggerIndex::Even);
            assert_eq!(res.is_ok(), o.uses_stagger(), "{o}");
        }
        let err = MapGeometry::new(TilemapOrientation::Orthogonal, 16, 16)
            .with_stagger(StaggerAxis::X, StaggerIndex::Odd)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::StaggerNotApplicable {
                orientation: TilemapOrientation::Orthogonal
            }
        ));
    }

    #[test]
    fn geometry_defaults_stagger_for_staggered_orientations() {
        let g = MapGeometry::new(TilemapOrientation::Staggered, 64, 32);
        assert_eq!(g.stagger(), Some(Stagger::default()));
        assert_eq!(g.tile_size(), vec2(64.0, 32.0));
        assert_eq!(MapGeometry::new(TilemapOrientation::Isometric, 64, 32).stagger(), None);
    }

    #[test]
    fn hex_side_length_only_on_hexagonal() {
        let g = MapGeometry::new(TilemapOrientation::Hexagonal, 32, 28)
            .with_hex_side_length(14)
            .expect("hexagonal");
        assert_eq!(g.hex_side_length(), 14);
        let err = MapGeometry::new(TilemapOrientation::Staggered, 32, 28)
            .with_hex_side_length(14)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::HexSideNotApplicable {
                orientation: TilemapOrientation::Staggered
            }
        ));
        assert_eq!(
            err.to_string(),
            "Hex side length does not apply to staggered maps"
        );
    }

    #[test]
    fn from_ir_ignores_stagger_on_orthogonal_maps() {
        let mut raw = ir(TilemapOrientation::Orthogonal);
        raw.stagger_axis = Some(StaggerAxis::X);
        raw.hex_side_length = Some(10);
        let map = Map::from_ir(raw).expect("orthogonal map");
        assert_eq!(map.geometry().stagger(), None);
        assert_eq!(map.geometry().hex_side_length(), 0);
    }

    #[test]
    fn from_ir_fills_missing_stagger_fields() {
        let mut raw = ir(TilemapOrientation::Hexagonal);
        raw.stagger_index = Some(StaggerIndex::Even);
        let map = Map::from_ir(raw).expect("hex map");
        assert_eq!(
            map.geometry().stagger(),
            Some(Stagger::new(StaggerAxis::Y, StaggerIndex::Even))
        );
    }

    #[test]
    fn from_ir_rejects_zero_dimensions() {
        let mut raw = ir(TilemapOrientation::Orthogonal);
        raw.width = 0;
        assert!(matches!(Map::from_ir(raw), Err(MapError::InvalidMap(_))));

        let mut raw = ir(TilemapOrientation::Orthogonal);
        raw.tile_h = 0;
        assert!(matches!(Map::from_ir(raw), Err(MapError::InvalidMap(_))));
    }

    #[test]
    fn draw_list_orders_map_then_visible_layers() {
        let mut raw = ir(TilemapOrientation::Isometric);
        raw.debug_draw = DebugDrawOptions::DRAW_FRAME | DebugDrawOptions::DRAW_GRID;
        raw.layers = vec![
            layer("ground", true, DebugDrawOptions::DRAW_ANCHOR),
            layer("hidden", false, DebugDrawOptions::all()),
            layer("objects", true, DebugDrawOptions::DRAW_OBJECT_FRAMES),
        ];
        let map = Map::from_ir(raw).expect("map");

        let items: Vec<_> = map
            .debug_draw_list()
            .into_iter()
            .map(|i| (i.target, i.overlay))
            .collect();
        assert_eq!(
            items,
            vec![
                (DebugTarget::Map, DebugOverlay::Grid),
                (DebugTarget::Map, DebugOverlay::Frame),
                (DebugTarget::Layer(LayerId(0)), DebugOverlay::Anchor),
                (DebugTarget::Layer(LayerId(2)), DebugOverlay::ObjectFrames),
            ]
        );
    }

    #[test]
    fn draw_list_follows_runtime_edits() {
        let mut raw = ir(TilemapOrientation::Orthogonal);
        raw.layers = vec![layer("ground", true, DebugDrawOptions::DRAW_GRID)];
        let mut map = Map::from_ir(raw).expect("map");

        let ground = map.layer_by_name("ground").expect("ground layer");
        map.layer_mut(ground).expect("layer").hide_overlay(DebugOverlay::Grid);
        map.show_overlay(DebugOverlay::Graph);

        let list = map.debug_draw_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].target, DebugTarget::Map);
        assert_eq!(list[0].color, DebugOverlay::Graph.color());
    }
}
