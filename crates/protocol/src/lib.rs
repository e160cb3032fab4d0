//! Wire types for the map API.
//!
//! The backend serves a grid document shaped as
//! `{ "WebGrid": { "Nodes": [[ { "Node": {...} }, ... ], ...], "Name": ... } }`
//! and a static tileset resource mapping semantic terrain names to tile
//! indices. Terrain fields use reserved sentinel strings (`"NoGround"`,
//! `"NoLandscape"`) to mean "absent"; this module decodes them into proper
//! tagged variants so nothing downstream compares magic strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Index into the renderer's tile set.
pub type TileIndex = u16;

/// Sentinel the backend emits for a node without ground terrain.
pub const NO_GROUND: &str = "NoGround";
/// Sentinel the backend emits for a node without a landscape feature.
pub const NO_LANDSCAPE: &str = "NoLandscape";

/// Grid position as carried on the wire (`X` = column, `Y` = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ground terrain of a node. `Absent` is the `"NoGround"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Ground {
    #[default]
    Absent,
    Named(String),
}

impl Ground {
    /// Terrain name, or `None` when the field holds its sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Ground::Absent => None,
            Ground::Named(name) => Some(name),
        }
    }
}

impl Serialize for Ground {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name().unwrap_or(NO_GROUND))
    }
}

impl<'de> Deserialize<'de> for Ground {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == NO_GROUND {
            Ok(Ground::Absent)
        } else {
            Ok(Ground::Named(s))
        }
    }
}

/// Landscape feature of a node. `Absent` is the `"NoLandscape"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Landscape {
    #[default]
    Absent,
    Named(String),
}

impl Landscape {
    /// Feature name, or `None` when the field holds its sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Landscape::Absent => None,
            Landscape::Named(name) => Some(name),
        }
    }
}

impl Serialize for Landscape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name().unwrap_or(NO_LANDSCAPE))
    }
}

impl<'de> Deserialize<'de> for Landscape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == NO_LANDSCAPE {
            Ok(Landscape::Absent)
        } else {
            Ok(Landscape::Named(s))
        }
    }
}

/// One grid node as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "IsStructure", default)]
    pub is_structure: bool,
    #[serde(rename = "IsRoad", default)]
    pub is_road: bool,
    #[serde(rename = "Ground", default)]
    pub ground: Ground,
    #[serde(rename = "Landscape", default)]
    pub landscape: Landscape,
}

/// City summary attached to structure nodes.
///
/// The backend always emits a `City` object; a zero `ID` means the node has
/// no city. Unknown fields (production, storage, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// One entry of the 2D `Nodes` array: the node plus its city decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(rename = "Node")]
    pub node: NodeRecord,
    #[serde(rename = "City", default)]
    pub city: Option<CityRef>,
    /// Locations of the city's neighbouring cities; `null` on the wire when
    /// the node has none.
    #[serde(rename = "Neighbours", default)]
    pub neighbours: Option<Vec<Location>>,
}

impl NodeEntry {
    /// City at this node, filtering out the backend's zero-ID placeholder.
    pub fn city(&self) -> Option<&CityRef> {
        self.city.as_ref().filter(|c| c.id != 0)
    }

    pub fn neighbours(&self) -> &[Location] {
        self.neighbours.as_deref().unwrap_or(&[])
    }
}

/// The grid payload of a map response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebGrid {
    #[serde(rename = "Nodes")]
    pub nodes: Vec<Vec<NodeEntry>>,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// Top-level map API response. Extra siblings (user corporation info, ...)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapResponse {
    #[serde(rename = "WebGrid")]
    pub web_grid: WebGrid,
}

/// Static tileset resource: per-category name -> tile index tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSetDoc {
    #[serde(rename = "Landscape", default)]
    pub landscape: BTreeMap<String, TileIndex>,
    #[serde(rename = "Ground", default)]
    pub ground: BTreeMap<String, TileIndex>,
    #[serde(rename = "Structure", default)]
    pub structure: BTreeMap<String, TileIndex>,
    #[serde(rename = "Road", default)]
    pub road: BTreeMap<String, TileIndex>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GetMapType {
    #[serde(rename = "get_map")]
    GetMap,
}

impl Default for GetMapType {
    fn default() -> Self {
        Self::GetMap
    }
}

/// Request line for the line-delimited JSON map endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMapRequest {
    #[serde(rename = "type", default)]
    pub msg_type: GetMapType,
    pub id: u32,
}

impl GetMapRequest {
    pub fn new(id: u32) -> Self {
        Self {
            msg_type: GetMapType::GetMap,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_sentinel_roundtrip() {
        let absent: Ground = serde_json::from_str("\"NoGround\"").unwrap();
        assert_eq!(absent, Ground::Absent);
        assert_eq!(serde_json::to_string(&absent).unwrap(), "\"NoGround\"");

        let plain: Ground = serde_json::from_str("\"Plain\"").unwrap();
        assert_eq!(plain.name(), Some("Plain"));
        assert_eq!(serde_json::to_string(&plain).unwrap(), "\"Plain\"");
    }

    #[test]
    fn landscape_sentinel_roundtrip() {
        let absent: Landscape = serde_json::from_str("\"NoLandscape\"").unwrap();
        assert_eq!(absent.name(), None);

        let forest: Landscape = serde_json::from_str("\"Forest\"").unwrap();
        assert_eq!(forest, Landscape::Named("Forest".into()));
    }

    #[test]
    fn zero_city_id_is_no_city() {
        let entry: NodeEntry = serde_json::from_str(
            r#"{
                "Node": {
                    "Location": {"X": 0, "Y": 0},
                    "Ground": "Plain",
                    "Landscape": "NoLandscape"
                },
                "City": {"ID": 0, "Name": ""},
                "Neighbours": null
            }"#,
        )
        .unwrap();
        assert!(entry.city().is_none());
        assert!(entry.neighbours().is_empty());
    }

    #[test]
    fn get_map_request_wire_shape() {
        let line = serde_json::to_string(&GetMapRequest::new(3)).unwrap();
        assert_eq!(line, r#"{"type":"get_map","id":3}"#);
    }
}
