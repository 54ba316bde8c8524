use uuid::Uuid;

/// Parsed mesh geometry as delivered by a loader.
///
/// Vertex data stays with the renderer; only the counts the animation
/// layer needs are carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub id: Uuid,
    pub name: String,
    pub vertex_count: usize,
    /// One morph target per animation frame.
    pub morph_target_count: usize,
}

impl Geometry {
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_count: usize, morph_target_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            vertex_count,
            morph_target_count,
        }
    }
}
