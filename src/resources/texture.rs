use uuid::Uuid;

/// Texture map referenced by a material.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub id: Uuid,
    pub name: String,
    /// Whether the image is flipped vertically on upload.
    pub flip_y: bool,
}

impl Texture {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            flip_y: true,
        }
    }
}
