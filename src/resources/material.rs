use uuid::Uuid;

use crate::resources::texture::Texture;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub map: Option<Texture>,
    /// Whether the material blends morph targets.
    pub morph_targets: bool,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            map: None,
            morph_targets: false,
        }
    }

    #[must_use]
    pub fn with_map(mut self, map: Texture) -> Self {
        self.map = Some(map);
        self
    }

    /// Disables vertical flipping on the texture map, if there is one.
    pub fn disable_map_flip(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.flip_y = false;
        }
    }
}

/// Per-face material list shared by one renderable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiMaterial {
    pub materials: Vec<Material>,
}

impl MultiMaterial {
    #[must_use]
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
