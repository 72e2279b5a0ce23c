use crate::assets::SkeletonBundle;
use crate::debug::{BONE_COLOR, DebugLines};
use crate::error::Error;
use crate::mesh::{BlendMode, DrawList, append_mesh};
use crate::texture::PagePtr;
use rusty_spine::controller::{SkeletonController, SkeletonControllerSettings};
use rusty_spine::draw::{ColorSpace, CullDirection};
use rusty_spine::{AnimationEvent, Physics};

/// Animations probed when none is requested. Calmer clips first; defaulting
/// to something like `run` makes a poor first frame.
const DEFAULT_ANIMATIONS: [&str; 3] = ["idle", "walk", "run"];

#[derive(Clone, Debug)]
pub struct ActorSettings {
    /// Skeleton world position.
    pub position: [f32; 2],
    /// Whether the atlas pages carry premultiplied alpha.
    pub premultiplied_alpha: bool,
    /// Skin to apply before posing; `None` keeps the setup skin.
    pub skin: Option<String>,
    /// Animation for track 0; `None` picks a default.
    pub animation: Option<String>,
    pub looping: bool,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            premultiplied_alpha: true,
            skin: None,
            animation: None,
            looping: true,
        }
    }
}

/// One posed skeleton instance: a skeleton plus the animation state driving
/// it, wrapped in the runtime's controller.
pub struct Actor {
    controller: SkeletonController,
    animations: Vec<String>,
    current_animation: usize,
    looping: bool,
}

impl Actor {
    pub fn new(bundle: &SkeletonBundle, settings: &ActorSettings) -> Result<Self, Error> {
        let animations = bundle.animation_names();

        let mut controller = SkeletonController::new(
            bundle.skeleton_data.clone(),
            bundle.state_data.clone(),
        )
        .with_settings(SkeletonControllerSettings {
            premultiplied_alpha: settings.premultiplied_alpha,
            cull_direction: CullDirection::CounterClockwise,
            color_space: ColorSpace::SRGB,
        });

        if let Some(skin) = settings.skin.as_deref() {
            if !bundle.has_skin(skin) {
                return Err(Error::UnknownSkin {
                    name: skin.to_owned(),
                    available: bundle.skin_names(),
                });
            }
            controller.skeleton.set_skin_by_name(skin)?;
            // A skin swap leaves the previous skin's attachments on the
            // slots until they are reset.
            controller.skeleton.set_slots_to_setup_pose();
        }

        controller.skeleton.set_x(settings.position[0]);
        controller.skeleton.set_y(settings.position[1]);

        controller.animation_state.set_listener(|_, event| {
            if let AnimationEvent::Event { name, .. } = event {
                log::debug!("animation event: {name}");
            }
        });

        let chosen = match settings.animation.as_deref() {
            Some(name) => {
                if !bundle.has_animation(name) {
                    return Err(Error::UnknownAnimation {
                        name: name.to_owned(),
                        available: animations,
                    });
                }
                name.to_owned()
            }
            None => DEFAULT_ANIMATIONS
                .iter()
                .map(|name| (*name).to_owned())
                .find(|name| animations.contains(name))
                .or_else(|| animations.first().cloned())
                .ok_or(Error::NoAnimations)?,
        };

        let mut actor = Self {
            controller,
            animations,
            current_animation: 0,
            looping: settings.looping,
        };
        actor.set_animation(&chosen)?;
        Ok(actor)
    }

    pub fn animation_names(&self) -> &[String] {
        &self.animations
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.animations
            .get(self.current_animation)
            .map(String::as_str)
    }

    /// Put `name` on track 0.
    pub fn set_animation(&mut self, name: &str) -> Result<(), Error> {
        let Some(index) = self.animations.iter().position(|a| a == name) else {
            return Err(Error::UnknownAnimation {
                name: name.to_owned(),
                available: self.animations.clone(),
            });
        };
        self.controller
            .animation_state
            .set_animation_by_name(0, name, self.looping)?;
        self.current_animation = index;
        log::info!("track 0: {name}");
        Ok(())
    }

    /// Switch track 0 to the next animation, wrapping around.
    pub fn cycle_animation(&mut self) -> Result<(), Error> {
        if self.animations.is_empty() {
            return Err(Error::NoAnimations);
        }
        let next = (self.current_animation + 1) % self.animations.len();
        let name = self.animations[next].clone();
        self.set_animation(&name)
    }

    /// Advance the animation clock, apply the state to the skeleton, and
    /// recompute world transforms. All three are delegated to the runtime.
    pub fn update(&mut self, delta_seconds: f32) {
        self.controller.update(delta_seconds, Physics::Update);
    }

    /// Extract the posed meshes into a renderer-agnostic draw list.
    pub fn append_draw_list(&mut self, out: &mut DrawList) {
        for renderable in self.controller.combined_renderables() {
            append_mesh(
                out,
                &renderable.vertices,
                &renderable.uvs,
                &renderable.colors,
                &renderable.dark_colors,
                &renderable.indices,
                BlendMode::from(renderable.blend_mode),
                renderable.premultiplied_alpha,
                renderable
                    .attachment_renderer_object
                    .and_then(|raw| PagePtr::from_raw(raw.cast())),
            );
        }
    }

    /// One segment per bone, from its world origin along its world X axis by
    /// the bone's length. Zero-length bones get a small cross instead.
    pub fn append_bone_lines(&self, out: &mut DebugLines) {
        for bone in self.controller.skeleton.bones() {
            let origin = [bone.world_x(), bone.world_y()];
            let length = bone.data().length();
            if length > 0.0 {
                let tip = [
                    origin[0] + length * bone.a(),
                    origin[1] + length * bone.c(),
                ];
                out.push_segment(origin, tip, BONE_COLOR);
            } else {
                out.push_cross(origin, 4.0, BONE_COLOR);
            }
        }
    }

    pub fn position(&self) -> [f32; 2] {
        [self.controller.skeleton.x(), self.controller.skeleton.y()]
    }
}
