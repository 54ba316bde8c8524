pub mod loader;

pub use loader::{LoadCompletion, LoadedMesh, MeshLoader};
