//! Shared fakes for the host collaborators.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use morph_mesh::animation::Direction;
use morph_mesh::config::ElementRef;
use morph_mesh::resources::{
    AnimationControl, Geometry, Material, MorphAnimMesh, MultiMaterial, Renderable,
    RenderableFactory, StaticMesh, Texture,
};
use morph_mesh::{
    LoadCompletion, MeshEntity, MeshEvent, MeshEventKind, MeshLoader, MeshOptions, RenderScene,
    TriggerSet, ViewContext, ViewPass,
};
use uuid::Uuid;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("skin").with_map(Texture::new("skin.png")),
        Material::new("cloth").with_map(Texture::new("cloth.png")),
        Material::new("eyes"),
    ]
}

// ============================================================================
// Loader
// ============================================================================

/// Holds completions until the test decides the load is done.
#[derive(Default)]
pub struct ManualLoader {
    pending: RefCell<Vec<LoadCompletion>>,
    requested: RefCell<Vec<String>>,
}

impl ManualLoader {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Completes every outstanding load with a mesh of `frames` morph targets.
    pub fn finish_all(&self, frames: usize) -> usize {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let count = pending.len();
        for completion in pending {
            completion.complete(Geometry::new("mesh", 24, frames), materials());
        }
        count
    }

    /// Drops every outstanding completion without delivering it.
    pub fn abandon_all(&self) {
        self.pending.borrow_mut().clear();
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl MeshLoader for ManualLoader {
    fn load(&self, path: &str, completion: LoadCompletion) {
        assert_eq!(completion.path(), path);
        self.requested.borrow_mut().push(path.to_string());
        self.pending.borrow_mut().push(completion);
    }
}

// ============================================================================
// Scene and triggers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Add {
        id: Uuid,
        animated: bool,
        material: MultiMaterial,
    },
    Trigger {
        id: Uuid,
    },
    Attach {
        element: ElementRef,
        center: bool,
        pixel_scale: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SceneLog(Rc<RefCell<Vec<SceneCall>>>);

impl SceneLog {
    pub fn calls(&self) -> Vec<SceneCall> {
        self.0.borrow().clone()
    }

    fn push(&self, call: SceneCall) {
        self.0.borrow_mut().push(call);
    }
}

pub struct RecordingScene(pub SceneLog);

impl RenderScene for RecordingScene {
    fn add(&mut self, renderable: &dyn Renderable) {
        self.0.push(SceneCall::Add {
            id: renderable.id(),
            animated: renderable.animation().is_some(),
            material: renderable.material().clone(),
        });
    }

    fn attach(&mut self, element: &ElementRef, center: bool, pixel_scale: bool) {
        self.0.push(SceneCall::Attach {
            element: element.clone(),
            center,
            pixel_scale,
        });
    }
}

pub struct RecordingTriggers(pub SceneLog);

impl TriggerSet for RecordingTriggers {
    fn add(&mut self, renderable: &dyn Renderable) {
        self.0.push(SceneCall::Trigger {
            id: renderable.id(),
        });
    }
}

pub fn view_context(loader: &Rc<ManualLoader>, log: &SceneLog) -> ViewContext {
    let loader: Rc<dyn MeshLoader> = loader.clone();
    ViewContext::new(
        loader,
        Box::new(RecordingScene(log.clone())),
        Box::new(RecordingTriggers(log.clone())),
    )
}

// ============================================================================
// Probe renderable
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ControlCall {
    SetTime(f32),
    SetDuration(f32),
    SetDirection(Direction),
    SetFrameRange(i32, i32),
    Advance(f32),
}

#[derive(Debug, Clone, Default)]
pub struct ControlLog(Rc<RefCell<Vec<ControlCall>>>);

impl ControlLog {
    pub fn calls(&self) -> Vec<ControlCall> {
        self.0.borrow().clone()
    }

    pub fn frame_ranges(&self) -> Vec<(i32, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ControlCall::SetFrameRange(s, e) => Some((s, e)),
                _ => None,
            })
            .collect()
    }

    pub fn advances(&self) -> Vec<f32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ControlCall::Advance(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }
}

/// Morph mesh that records every control call it receives.
pub struct ProbeRenderable {
    inner: MorphAnimMesh,
    log: ControlLog,
}

impl Renderable for ProbeRenderable {
    fn id(&self) -> Uuid {
        self.inner.id
    }

    fn geometry(&self) -> &Geometry {
        &self.inner.geometry
    }

    fn material(&self) -> &MultiMaterial {
        &self.inner.material
    }

    fn animation(&self) -> Option<&dyn AnimationControl> {
        Some(self)
    }

    fn animation_mut(&mut self) -> Option<&mut dyn AnimationControl> {
        Some(self)
    }

    fn morph_influences(&self) -> &[f32] {
        self.inner.morph_influences()
    }
}

impl AnimationControl for ProbeRenderable {
    fn time(&self) -> f32 {
        self.inner.time()
    }

    fn completed_cycles(&self) -> u32 {
        self.inner.completed_cycles()
    }

    fn set_time(&mut self, time: f32) {
        self.log.0.borrow_mut().push(ControlCall::SetTime(time));
        self.inner.set_time(time);
    }

    fn set_duration(&mut self, duration_ms: f32) {
        self.log.0.borrow_mut().push(ControlCall::SetDuration(duration_ms));
        self.inner.set_duration(duration_ms);
    }

    fn set_direction(&mut self, direction: Direction) {
        self.log.0.borrow_mut().push(ControlCall::SetDirection(direction));
        self.inner.set_direction(direction);
    }

    fn set_frame_range(&mut self, start: i32, end: i32) {
        self.log.0.borrow_mut().push(ControlCall::SetFrameRange(start, end));
        self.inner.set_frame_range(start, end);
    }

    fn advance(&mut self, delta_ms: f32) {
        self.log.0.borrow_mut().push(ControlCall::Advance(delta_ms));
        self.inner.advance(delta_ms);
    }
}

/// Factory producing [`ProbeRenderable`]s that share one control log.
pub struct ProbeFactory(pub ControlLog);

impl RenderableFactory for ProbeFactory {
    fn create_static(&self, geometry: Geometry, material: MultiMaterial) -> Box<dyn Renderable> {
        Box::new(StaticMesh::new(geometry, material))
    }

    fn create_animated(
        &self,
        geometry: Geometry,
        material: MultiMaterial,
    ) -> Box<dyn Renderable> {
        Box::new(ProbeRenderable {
            inner: MorphAnimMesh::new(geometry, material),
            log: self.0.clone(),
        })
    }
}

// ============================================================================
// Entity harness
// ============================================================================

pub struct Harness {
    pub entity: MeshEntity,
    pub loader: Rc<ManualLoader>,
    pub scene: SceneLog,
    pub events: flume::Receiver<MeshEvent>,
}

impl Harness {
    pub fn new(options: MeshOptions) -> Self {
        init_logger();
        let (sender, events) = flume::unbounded::<MeshEvent>();
        let mut entity = MeshEntity::new(options, Box::new(sender)).expect("valid options");
        let loader = ManualLoader::new();
        let scene = SceneLog::default();
        entity
            .attach_view(ViewPass::Primary, view_context(&loader, &scene))
            .expect("primary view");

        Self {
            entity,
            loader,
            scene,
            events,
        }
    }

    pub fn walk() -> Self {
        Self::new(MeshOptions::new("stage", "walk.json"))
    }

    /// Drains the events dispatched so far.
    pub fn events(&self) -> Vec<MeshEventKind> {
        self.events.try_iter().map(|e| e.kind).collect()
    }

    pub fn primary_time(&self) -> f32 {
        self.entity
            .view(ViewPass::Primary)
            .map_or(0.0, morph_mesh::MeshView::last_time)
    }
}
