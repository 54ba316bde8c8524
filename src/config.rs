//! Mesh Options
//!
//! Host-facing construction options for a [`MeshEntity`](crate::scene::MeshEntity).
//! Options are typically built in code or parsed from a scene description:
//!
//! ```json
//! { "element": "#stage", "mesh": "walk.json", "animated": true }
//! ```
//!
//! [`MeshOptions::validate`] turns them into an immutable [`MeshConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{MeshError, Result};

/// Mesh file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshFormat {
    #[default]
    Json,
}

/// Reference to the host element a mesh is positioned against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRef(pub String);

impl ElementRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Unvalidated construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshOptions {
    /// Element the mesh is attached to. Required.
    pub element: Option<ElementRef>,
    /// Mesh file to load. Required.
    pub mesh: Option<String>,
    pub format: MeshFormat,
    /// Whether the mesh supports animations.
    pub animated: bool,
    /// Whether to center the mesh on the element when attaching.
    pub center: bool,
    /// Whether mesh units are scaled to element pixels.
    pub pixel_scale: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            element: None,
            mesh: None,
            format: MeshFormat::Json,
            animated: true,
            center: true,
            pixel_scale: true,
        }
    }
}

impl MeshOptions {
    #[must_use]
    pub fn new(element: impl Into<ElementRef>, mesh: impl Into<String>) -> Self {
        Self {
            element: Some(element.into()),
            mesh: Some(mesh.into()),
            ..Self::default()
        }
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    #[must_use]
    pub fn with_format(mut self, format: MeshFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    #[must_use]
    pub fn with_pixel_scale(mut self, pixel_scale: bool) -> Self {
        self.pixel_scale = pixel_scale;
        self
    }

    /// Checks the required options. Empty strings count as missing.
    pub fn validate(self) -> Result<MeshConfig> {
        let element = self
            .element
            .filter(|e| !e.0.is_empty())
            .ok_or(MeshError::MissingOption("element"))?;
        let mesh = self
            .mesh
            .filter(|m| !m.is_empty())
            .ok_or(MeshError::MissingOption("mesh"))?;

        Ok(MeshConfig {
            element,
            mesh,
            format: self.format,
            animated: self.animated,
            center: self.center,
            pixel_scale: self.pixel_scale,
        })
    }
}

/// Validated, immutable mesh configuration shared by an entity and its views.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    pub element: ElementRef,
    pub mesh: String,
    pub format: MeshFormat,
    pub animated: bool,
    pub center: bool,
    pub pixel_scale: bool,
}
