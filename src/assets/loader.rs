use crate::resources::{Geometry, Material};

/// Parsed mesh delivered by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMesh {
    pub geometry: Geometry,
    pub materials: Vec<Material>,
}

/// One-shot handle a loader uses to deliver its result.
///
/// Completing consumes the handle, so a load calls back at most once.
/// Dropping it without completing marks the load as failed.
#[derive(Debug)]
pub struct LoadCompletion {
    path: String,
    sender: flume::Sender<LoadedMesh>,
}

impl LoadCompletion {
    pub(crate) fn new(path: impl Into<String>, sender: flume::Sender<LoadedMesh>) -> Self {
        Self {
            path: path.into(),
            sender,
        }
    }

    /// Path of the mesh being loaded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn complete(self, geometry: Geometry, materials: Vec<Material>) {
        let mesh = LoadedMesh {
            geometry,
            materials,
        };
        if self.sender.send(mesh).is_err() {
            log::debug!("View for {} dropped before its load completed", self.path);
        }
    }
}

/// Parses mesh files into geometry and materials.
///
/// Loading is asynchronous: implementations may complete immediately, on a
/// later tick, or from another thread. Results are applied on the update
/// thread the next time the owning view polls.
pub trait MeshLoader {
    fn load(&self, path: &str, completion: LoadCompletion);
}
