//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MeshError`] covers the failure modes of a mesh entity:
//! - Configuration errors (missing required options)
//! - Usage errors (mutating playback state outside `play`/`stop`)
//! - Unknown animation clip lookups
//! - View attachment misuse
//! - Options parsing errors
//!
//! Malformed clip data (inverted frame windows, zero durations) is not an
//! error here: it is passed through unchanged to the renderable.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MeshError>`.
//!
//! ```rust,ignore
//! use morph_mesh::errors::{MeshError, Result};
//!
//! fn start(entity: &mut MeshEntity) -> Result<()> {
//!     entity.play("walk")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::scene::ViewPass;

/// The main error type for mesh entities.
#[derive(Error, Debug)]
pub enum MeshError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A required option was absent or empty at construction time.
    #[error("{0} must be defined")]
    MissingOption(&'static str),

    /// Options could not be parsed from a JSON description.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// Attempted to set `playing` to true directly.
    #[error("Cannot set playing to true. Call play()")]
    SetPlayingDirectly,

    /// `play` was called with a name that was never defined.
    #[error("Animation not defined: {0}")]
    UnknownAnimation(String),

    // ========================================================================
    // View Errors
    // ========================================================================
    /// A view for this pass already exists on the entity.
    #[error("A {0} view is already attached")]
    ViewAlreadyAttached(ViewPass),

    /// A secondary view was attached before the primary one.
    #[error("The primary view must be attached before the {0} view")]
    PrimaryViewRequired(ViewPass),
}

/// Alias for `Result<T, MeshError>`.
pub type Result<T> = std::result::Result<T, MeshError>;
