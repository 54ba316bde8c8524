use std::rc::Rc;

use crate::assets::MeshLoader;
use crate::config::ElementRef;
use crate::resources::{MeshFactory, Renderable, RenderableFactory};

/// Render scene a view draws into.
pub trait RenderScene {
    fn add(&mut self, renderable: &dyn Renderable);

    /// Positions the scene relative to the host element.
    fn attach(&mut self, element: &ElementRef, center: bool, pixel_scale: bool);
}

/// Hit-test set used for pointer triggers.
pub trait TriggerSet {
    fn add(&mut self, renderable: &dyn Renderable);
}

/// Host collaborators of a single view.
///
/// Loader and factory may be shared between passes; scene and trigger set
/// belong to the pass.
pub struct ViewContext {
    pub loader: Rc<dyn MeshLoader>,
    pub factory: Rc<dyn RenderableFactory>,
    pub scene: Box<dyn RenderScene>,
    pub triggers: Box<dyn TriggerSet>,
}

impl ViewContext {
    /// Uses the default [`MeshFactory`].
    pub fn new(
        loader: Rc<dyn MeshLoader>,
        scene: Box<dyn RenderScene>,
        triggers: Box<dyn TriggerSet>,
    ) -> Self {
        Self {
            loader,
            factory: Rc::new(MeshFactory),
            scene,
            triggers,
        }
    }

    #[must_use]
    pub fn with_factory(mut self, factory: Rc<dyn RenderableFactory>) -> Self {
        self.factory = factory;
        self
    }
}
