// src/loader/json_loader.rs
use crate::debug::DebugDrawOptions;
use crate::error::MapError;
use crate::ir_map::*;
use crate::orientation::{StaggerAxis, StaggerIndex, TilemapOrientation};
use log::debug;
use macroquad::prelude::*;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;

/// Custom property (map or layer) holding the overlays to draw.
pub const DEBUG_DRAW_PROPERTY: &str = "debugDrawOptions";

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    name: String,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    offsetx: f32,
    #[serde(default)]
    offsety: f32,
    #[serde(default)]
    properties: Vec<JsonProperty>,
    // children of a "group" layer
    #[serde(default)]
    layers: Vec<JsonLayer>,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
struct JsonMap {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    #[serde(default)]
    orientation: Option<String>,
    #[serde(default)]
    staggeraxis: Option<String>,
    #[serde(default)]
    staggerindex: Option<String>,
    #[serde(default)]
    hexsidelength: Option<u32>,
    #[serde(default)]
    layers: Vec<JsonLayer>,
    #[serde(default)]
    properties: Vec<JsonProperty>,
}

#[derive(Deserialize)]
struct JsonProperty {
    name: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    value: JsonValue,
}

fn debug_draw_from_properties(props: &[JsonProperty]) -> Result<DebugDrawOptions, MapError> {
    let Some(prop) = props.iter().find(|p| p.name == DEBUG_DRAW_PROPERTY) else {
        return Ok(DebugDrawOptions::empty());
    };

    match (prop.kind.as_deref(), prop.value.as_str()) {
        (None | Some("string"), Some(text)) => text.parse(),
        (kind, _) => Err(MapError::InvalidMap(format!(
            "Property '{}' must be a string, got type {}",
            DEBUG_DRAW_PROPERTY,
            kind.unwrap_or("untyped")
        ))),
    }
}

/// Group layers are kept as a layer of their own, followed by their children.
/// Children inherit the group's visibility and offset.
fn flatten_layers(
    src: Vec<JsonLayer>,
    parent_visible: bool,
    parent_offset: Vec2,
    out: &mut Vec<IrLayer>,
) -> Result<(), MapError> {
    for l in src {
        let visible = parent_visible && l.visible;
        let offset = parent_offset + vec2(l.offsetx, l.offsety);
        out.push(IrLayer {
            name: l.name,
            visible,
            offset,
            debug_draw: debug_draw_from_properties(&l.properties)?,
        });
        flatten_layers(l.layers, visible, offset, out)?;
    }
    Ok(())
}

fn json_map_to_ir(j: JsonMap) -> Result<IrMap, MapError> {
    let orientation = match j.orientation.as_deref() {
        Some(text) => text.parse::<TilemapOrientation>()?,
        None => TilemapOrientation::default(),
    };
    let stagger_axis = j
        .staggeraxis
        .as_deref()
        .map(str::parse::<StaggerAxis>)
        .transpose()?;
    let stagger_index = j
        .staggerindex
        .as_deref()
        .map(str::parse::<StaggerIndex>)
        .transpose()?;

    let mut layers = Vec::with_capacity(j.layers.len());
    flatten_layers(j.layers, true, Vec2::ZERO, &mut layers)?;

    Ok(IrMap {
        width: j.width,
        height: j.height,
        tile_w: j.tilewidth,
        tile_h: j.tileheight,
        orientation,
        stagger_axis,
        stagger_index,
        hex_side_length: j.hexsidelength,
        debug_draw: debug_draw_from_properties(&j.properties)?,
        layers,
    })
}

/// Decode a Tiled JSON map held in memory.
pub fn decode_map_str(json: &str) -> Result<IrMap, MapError> {
    let j: JsonMap = serde_json::from_str(json)?;
    json_map_to_ir(j)
}

/// Decode a Tiled JSON map file. Only `.json` files are accepted.
pub fn decode_map_file_to_ir(path: impl AsRef<Path>) -> Result<IrMap, MapError> {
    let p = path.as_ref();
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::UnsupportedFormat(p.display().to_string()));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let j: JsonMap = serde_json::from_str(&txt).map_err(|source| MapError::Json {
        path: p.to_path_buf(),
        source,
    })?;

    let ir = json_map_to_ir(j)?;
    debug!(
        "decoded {} map {} ({}x{} tiles, {} layers)",
        ir.orientation,
        p.display(),
        ir.width,
        ir.height,
        ir.layers.len()
    );
    Ok(ir)
}
