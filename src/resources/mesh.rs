use uuid::Uuid;

use crate::animation::{AnimationAction, Direction};
use crate::resources::geometry::Geometry;
use crate::resources::material::MultiMaterial;

/// Playback controls exposed by animatable renderables.
///
/// `time` is normalized to [0, 1]. Completed cycles are counted by
/// `completed_cycles`, which `set_time` resets (see [`AnimationAction`]).
pub trait AnimationControl {
    fn time(&self) -> f32;
    fn completed_cycles(&self) -> u32;
    fn set_time(&mut self, time: f32);
    fn set_duration(&mut self, duration_ms: f32);
    fn set_direction(&mut self, direction: Direction);
    fn set_frame_range(&mut self, start: i32, end: i32);
    /// Advances playback and re-evaluates the pose. `0.0` only re-evaluates.
    fn advance(&mut self, delta_ms: f32);
}

/// An engine-level drawable object.
pub trait Renderable {
    fn id(&self) -> Uuid;
    fn geometry(&self) -> &Geometry;
    fn material(&self) -> &MultiMaterial;

    /// `None` when the renderable cannot advance animations.
    fn animation(&self) -> Option<&dyn AnimationControl> {
        None
    }

    fn animation_mut(&mut self) -> Option<&mut dyn AnimationControl> {
        None
    }

    /// Current morph target weights, one per geometry morph target.
    fn morph_influences(&self) -> &[f32] {
        &[]
    }
}

/// Builds renderables from loaded geometry.
pub trait RenderableFactory {
    fn create_static(&self, geometry: Geometry, material: MultiMaterial) -> Box<dyn Renderable>;
    fn create_animated(&self, geometry: Geometry, material: MultiMaterial)
    -> Box<dyn Renderable>;
}

/// Default factory producing [`StaticMesh`] and [`MorphAnimMesh`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MeshFactory;

impl RenderableFactory for MeshFactory {
    fn create_static(&self, geometry: Geometry, material: MultiMaterial) -> Box<dyn Renderable> {
        Box::new(StaticMesh::new(geometry, material))
    }

    fn create_animated(
        &self,
        geometry: Geometry,
        material: MultiMaterial,
    ) -> Box<dyn Renderable> {
        Box::new(MorphAnimMesh::new(geometry, material))
    }
}

// ============================================================================
// Static Mesh
// ============================================================================

#[derive(Debug, Clone)]
pub struct StaticMesh {
    pub id: Uuid,
    pub geometry: Geometry,
    pub material: MultiMaterial,
}

impl StaticMesh {
    #[must_use]
    pub fn new(geometry: Geometry, material: MultiMaterial) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            material,
        }
    }
}

impl Renderable for StaticMesh {
    fn id(&self) -> Uuid {
        self.id
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn material(&self) -> &MultiMaterial {
        &self.material
    }
}

// ============================================================================
// Morph Animated Mesh
// ============================================================================

/// Mesh whose animation frames are morph targets.
///
/// The active keyframe carries weight `mix` and the previously shown
/// keyframe carries `1 - mix`, blending between consecutive frames.
#[derive(Debug, Clone)]
pub struct MorphAnimMesh {
    pub id: Uuid,
    pub geometry: Geometry,
    pub material: MultiMaterial,
    action: AnimationAction,
    morph_influences: Vec<f32>,
    last_keyframe: i32,
    current_keyframe: i32,
}

impl MorphAnimMesh {
    #[must_use]
    pub fn new(geometry: Geometry, material: MultiMaterial) -> Self {
        let morph_influences = vec![0.0; geometry.morph_target_count];
        Self {
            id: Uuid::new_v4(),
            geometry,
            material,
            action: AnimationAction::new(),
            morph_influences,
            last_keyframe: 0,
            current_keyframe: 0,
        }
    }

    #[must_use]
    pub fn action(&self) -> &AnimationAction {
        &self.action
    }

    #[must_use]
    pub fn current_keyframe(&self) -> i32 {
        self.current_keyframe
    }

    /// Keyframes without a matching morph target are ignored.
    fn set_influence(&mut self, keyframe: i32, weight: f32) {
        if let Some(slot) = usize::try_from(keyframe)
            .ok()
            .and_then(|i| self.morph_influences.get_mut(i))
        {
            *slot = weight;
        }
    }

    fn apply_pose(&mut self) {
        let sample = self.action.sample();

        if sample.keyframe != self.current_keyframe {
            self.set_influence(self.last_keyframe, 0.0);
            self.set_influence(self.current_keyframe, 1.0);
            self.set_influence(sample.keyframe, 0.0);

            self.last_keyframe = self.current_keyframe;
            self.current_keyframe = sample.keyframe;
        }

        if self.last_keyframe == self.current_keyframe {
            self.set_influence(self.current_keyframe, 1.0);
        } else {
            self.set_influence(self.current_keyframe, sample.mix);
            self.set_influence(self.last_keyframe, 1.0 - sample.mix);
        }
    }
}

impl AnimationControl for MorphAnimMesh {
    fn time(&self) -> f32 {
        self.action.time
    }

    fn completed_cycles(&self) -> u32 {
        self.action.cycles
    }

    fn set_time(&mut self, time: f32) {
        self.action.seek(time);
    }

    fn set_duration(&mut self, duration_ms: f32) {
        self.action.duration_ms = duration_ms;
    }

    fn set_direction(&mut self, direction: Direction) {
        self.action.direction = direction;
    }

    fn set_frame_range(&mut self, start: i32, end: i32) {
        self.action.start_frame = start;
        self.action.end_frame = end;

        self.morph_influences.fill(0.0);
        let first = self.action.sample().keyframe;
        self.last_keyframe = first;
        self.current_keyframe = first;
    }

    fn advance(&mut self, delta_ms: f32) {
        self.action.update(delta_ms);
        self.apply_pose();
    }
}

impl Renderable for MorphAnimMesh {
    fn id(&self) -> Uuid {
        self.id
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn material(&self) -> &MultiMaterial {
        &self.material
    }

    fn animation(&self) -> Option<&dyn AnimationControl> {
        Some(self)
    }

    fn animation_mut(&mut self) -> Option<&mut dyn AnimationControl> {
        Some(self)
    }

    fn morph_influences(&self) -> &[f32] {
        &self.morph_influences
    }
}
