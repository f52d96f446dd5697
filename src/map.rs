//! Level map loading.
//!
//! Maps are JSON exports with a `layers` array; each layer has a `name` and
//! an `objects` list. Two layer names are recognized: `colliders` (static
//! geometry, where an object named `exit` becomes the level exit and
//! everything else a solid platform) and `spawnpoints` (grouped by object
//! name into ordered coordinate lists). Any other layer is ignored.

use std::collections::HashMap;
use std::fs;

use raylib::prelude::{Rectangle, Vector2};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::SCALE;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read map file '{0}'")]
    Io(String, #[source] std::io::Error),
    #[error("map '{0}' is not a valid map export")]
    Parse(String, #[source] serde_json::Error),
    #[error("map '{0}' has no player spawn point")]
    MissingPlayerSpawn(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    Platform,
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct ColliderRegion {
    pub rect: Rectangle,
    pub kind: ColliderKind,
}

#[derive(Debug, Deserialize)]
struct RawMap {
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    name: String,
    #[serde(default)]
    objects: Vec<RawObject>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    #[serde(default)]
    name: String,
    x: f32,
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
}

/// Static level data: collider regions plus spawn coordinates grouped by
/// tag. Read-only after load.
#[derive(Debug)]
pub struct LevelMap {
    pub name: String,
    pub colliders: Vec<ColliderRegion>,
    spawn_points: HashMap<String, Vec<Vector2>>,
}

impl LevelMap {
    /// Spawn coordinates recorded under `tag`, in source order. An absent
    /// tag is an empty list, not an error.
    pub fn spawn_points(&self, tag: &str) -> &[Vector2] {
        self.spawn_points.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rects of the solid colliders (exits are not solid).
    pub fn solid_rects(&self) -> Vec<Rectangle> {
        self.colliders
            .iter()
            .filter(|c| c.kind == ColliderKind::Platform)
            .map(|c| c.rect)
            .collect()
    }

    /// Smallest rect covering every collider, used for world bounds.
    pub fn bounds(&self) -> Rectangle {
        let mut min = Vector2::new(f32::MAX, f32::MAX);
        let mut max = Vector2::new(f32::MIN, f32::MIN);
        for c in &self.colliders {
            min.x = min.x.min(c.rect.x);
            min.y = min.y.min(c.rect.y);
            max.x = max.x.max(c.rect.x + c.rect.width);
            max.y = max.y.max(c.rect.y + c.rect.height);
        }
        if self.colliders.is_empty() {
            return Rectangle::new(0.0, 0.0, 0.0, 0.0);
        }
        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

/// Read and parse `maps/<name>.json`. A missing file or malformed data is a
/// hard error; levels never load partially.
pub fn load_map(name: &str) -> Result<LevelMap, MapError> {
    let path = format!("maps/{name}.json");
    let data = fs::read_to_string(&path).map_err(|e| MapError::Io(path, e))?;
    parse_map(name, &data)
}

/// Parse map data already in memory. Coordinates are scaled to world units.
pub fn parse_map(name: &str, data: &str) -> Result<LevelMap, MapError> {
    let raw: RawMap =
        serde_json::from_str(data).map_err(|e| MapError::Parse(name.to_string(), e))?;

    let mut colliders = Vec::new();
    let mut spawn_points: HashMap<String, Vec<Vector2>> = HashMap::new();

    for layer in raw.layers {
        match layer.name.as_str() {
            "colliders" => {
                for obj in layer.objects {
                    let kind = if obj.name == "exit" {
                        ColliderKind::Exit
                    } else {
                        ColliderKind::Platform
                    };
                    colliders.push(ColliderRegion {
                        rect: Rectangle::new(
                            obj.x * SCALE,
                            obj.y * SCALE,
                            obj.width * SCALE,
                            obj.height * SCALE,
                        ),
                        kind,
                    });
                }
            }
            "spawnpoints" => {
                for obj in layer.objects {
                    spawn_points
                        .entry(obj.name)
                        .or_default()
                        .push(Vector2::new(obj.x * SCALE, obj.y * SCALE));
                }
            }
            other => {
                log::debug!("map '{name}': ignoring layer '{other}'");
            }
        }
    }

    Ok(LevelMap {
        name: name.to_string(),
        colliders,
        spawn_points,
    })
}
