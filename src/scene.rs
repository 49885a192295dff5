//! Declarative shape lists loaded from TOML or JSON.
//!
//! ```toml
//! [[shapes]]
//! kind = "rectangle"
//! width = 4.0
//! height = 5.0
//!
//! [[shapes]]
//! kind = "circle"
//! radius = 3.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ShapeError};
use crate::shape::{Circle, Rectangle, Shape, Triangle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl ShapeSpec {
    pub fn build(&self) -> Box<dyn Shape> {
        match *self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)),
            ShapeSpec::Triangle { base, height } => Box::new(Triangle::new(base, height)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl Scene {
    /// Rectangle(4, 5) followed by Circle(3).
    pub fn demo() -> Self {
        Scene {
            shapes: vec![
                ShapeSpec::Rectangle {
                    width: 4.0,
                    height: 5.0,
                },
                ShapeSpec::Circle { radius: 3.0 },
            ],
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Picks the format from the extension. Without one, a scene starting with
    /// `{` is JSON and anything else is TOML, whose `[[shapes]]` header also
    /// starts with a bracket.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ShapeError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let scene = match format.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json(&content)?
                } else {
                    Self::from_toml(&content)?
                }
            }
        };

        info!(path = %path.display(), shapes = scene.shapes.len(), "loaded scene");
        Ok(scene)
    }

    /// Shapes in file order.
    pub fn into_shapes(self) -> Vec<Box<dyn Shape>> {
        self.shapes.into_iter().map(|spec| spec.build()).collect()
    }
}
