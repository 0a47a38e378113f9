pub mod api;
pub mod bodies;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod interaction;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::error::{ConfigError, OrreryError, ValidationError};
pub use api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use bodies::registry::{BodyDescriptor, BodyId, BodyRegistry};
pub use bodies::simulation::{advance, PlayState};
pub use bodies::state::{orbital_position, BodyState};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::mesh::{Material, MeshColor, MeshComponent, MeshShape};
pub use crate::core::context::SimContext;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use input::queue::{EventChannel, InputEvent, InputQueue};
pub use input::router::EventRouter;
pub use interaction::picking::{pick, Ray};
pub use interaction::speed::{on_slider_change, speed_label};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{InstanceBuffer, MeshInstance};
pub use renderer::primitives::{LineBuffer, LineVertex, PointBuffer, PointVertex};
pub use systems::lighting::{DirectionalLight, LightState};
