//! Layout export and import.
//!
//! The exchanged file is plain JSON with no version field:
//!
//! ```json
//! {
//!   "objects": [ { "name": "Hall", "color": "#ff7f50", "x": 10, "y": 10, "w": 100, "h": 50 } ],
//!   "tileWidth": 100,
//!   "tileHeight": 100
//! }
//! ```
//!
//! Import is lenient about what is missing and strict about types: absent or
//! null `objects` is an empty layout, and a falsy tile size (absent, `null`,
//! `false`, `""` or `0`) becomes 100. The top level must be an object, and a
//! field holding any other wrong JSON type fails the whole import.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

use crate::error::Result;
use crate::model::Shape;
use crate::shape_store::ShapeStore;
use crate::tiles::{TileConfig, DEFAULT_TILE_SIZE_MM};

/// File name offered when exporting.
pub const EXPORT_FILE_NAME: &str = "layout.json";

/// Portable form of the shape store plus the tile configuration.
///
/// Deserializes only from a JSON object; arrays are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct LayoutRecord {
    pub objects: Vec<Shape>,
    pub tile_width: f64,
    pub tile_height: f64,
}

/// Wire shape accepted on import, before defaults are applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayoutRecord {
    #[serde(default)]
    objects: Option<Vec<Shape>>,
    #[serde(default)]
    tile_width: Option<Value>,
    #[serde(default)]
    tile_height: Option<Value>,
}

fn imported_tile_size(value: Option<Value>, field: &str) -> std::result::Result<f64, String> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(DEFAULT_TILE_SIZE_MM),
        Some(Value::String(s)) if s.is_empty() => Ok(DEFAULT_TILE_SIZE_MM),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v != 0.0 && !v.is_nan() => Ok(v),
            _ => Ok(DEFAULT_TILE_SIZE_MM),
        },
        Some(other) => Err(format!("{field} must be a number, found {other}")),
    }
}

impl TryFrom<Map<String, Value>> for LayoutRecord {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let raw: RawLayoutRecord =
            serde_json::from_value(Value::Object(map)).map_err(|e| e.to_string())?;
        Ok(Self {
            objects: raw.objects.unwrap_or_default(),
            tile_width: imported_tile_size(raw.tile_width, "tileWidth")?,
            tile_height: imported_tile_size(raw.tile_height, "tileHeight")?,
        })
    }
}

impl LayoutRecord {
    /// Snapshot of the current layout. Tile sizes are written after the
    /// fallback is applied, so an exported file never carries a zero size.
    pub fn new(store: &ShapeStore, config: &TileConfig) -> Self {
        let config = config.effective();
        Self {
            objects: store.as_slice().to_vec(),
            tile_width: config.tile_width,
            tile_height: config.tile_height,
        }
    }

    pub fn tile_config(&self) -> TileConfig {
        TileConfig::new(self.tile_width, self.tile_height)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the record to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        info!(
            "Exported {} objects to {}",
            self.objects.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Reads and parses a layout file without blocking the caller's thread.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = tokio::fs::File::open(path.as_ref()).await?;
        let record = read_layout(file).await?;
        info!(
            "Read {} objects from {}",
            record.objects.len(),
            path.as_ref().display()
        );
        Ok(record)
    }
}

/// Reads the whole of `reader` as UTF-8 and parses it as a layout.
pub async fn read_layout<R: AsyncRead + Unpin>(mut reader: R) -> Result<LayoutRecord> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    LayoutRecord::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RectExtent;

    #[test]
    fn test_export_field_names() {
        let store = ShapeStore::from_shapes(vec![Shape::new(
            "Hall",
            "#ff7f50",
            RectExtent::new(10.0, 10.0, 100.0, 50.0),
        )]);
        let json = LayoutRecord::new(&store, &TileConfig::default())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tileWidth"], 100.0);
        assert_eq!(value["tileHeight"], 100.0);
        assert_eq!(value["objects"][0]["name"], "Hall");
        assert_eq!(value["objects"][0]["w"], 100.0);
        assert!(json.contains("\n  \"objects\""), "expected 2-space indent");
    }

    #[test]
    fn test_export_applies_fallback() {
        let record = LayoutRecord::new(&ShapeStore::new(), &TileConfig::new(0.0, 25.0));
        assert_eq!(record.tile_width, 1.0);
        assert_eq!(record.tile_height, 25.0);
    }

    #[test]
    fn test_import_defaults() {
        let record = LayoutRecord::from_json("{}").unwrap();
        assert!(record.objects.is_empty());
        assert_eq!(record.tile_config(), TileConfig::new(100.0, 100.0));

        let record =
            LayoutRecord::from_json(r#"{"objects":null,"tileWidth":0,"tileHeight":null}"#)
                .unwrap();
        assert!(record.objects.is_empty());
        assert_eq!(record.tile_config(), TileConfig::new(100.0, 100.0));
    }

    #[test]
    fn test_import_keeps_each_size_independently() {
        let record = LayoutRecord::from_json(r#"{"tileHeight":30}"#).unwrap();
        assert_eq!(record.tile_width, 100.0);
        assert_eq!(record.tile_height, 30.0);
    }

    #[test]
    fn test_import_rejects_wrong_types() {
        assert!(LayoutRecord::from_json(r#"{"objects":{}}"#).is_err());
        assert!(
            LayoutRecord::from_json(r#"{"objects":[{"x":"a","y":0,"w":1,"h":1}]}"#).is_err()
        );
        assert!(LayoutRecord::from_json(r#"{"tileWidth":"wide"}"#).is_err());
        assert!(LayoutRecord::from_json(r#"{"tileHeight":true}"#).is_err());
    }

    #[test]
    fn test_import_rejects_non_object_top_level() {
        for text in ["[]", "[null, 7, 9]", "42", "\"layout\"", "null"] {
            let err = LayoutRecord::from_json(text).unwrap_err();
            assert!(err.is_parse_error(), "{text} should fail to parse");
        }
    }

    #[test]
    fn test_import_falsy_tile_sizes_default() {
        for falsy in ["false", "\"\"", "0", "0.0", "null"] {
            let text = format!(r#"{{"tileWidth":{falsy},"tileHeight":25}}"#);
            let record = LayoutRecord::from_json(&text).unwrap();
            assert_eq!(record.tile_config(), TileConfig::new(100.0, 25.0), "{text}");
        }
        let record = LayoutRecord::from_json(r#"{"tileWidth":12.5,"tileHeight":false}"#).unwrap();
        assert_eq!(record.tile_config(), TileConfig::new(12.5, 100.0));
    }

    #[test]
    fn test_import_rejects_malformed_text() {
        let err = LayoutRecord::from_json("{ not json").unwrap_err();
        assert!(err.is_parse_error());
    }
}
