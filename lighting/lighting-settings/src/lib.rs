//! Lighting demo settings: the tunable parameters of the demo, the metadata
//! table an inspector panel builds its widgets from, and the glue that turns
//! the current values into GPU constants and per-frame lights.

pub mod cbuffer;
pub mod descriptor;
pub mod error;
mod persist;
pub mod policy;
pub mod rig;
pub mod scene;
pub mod schema;
pub mod store;
pub mod uniform;
pub mod value;

pub use cbuffer::{SettingsCBuffer, CBUFFER_SLOT};
pub use descriptor::{descriptors_in, FieldDescriptor, FieldKind, Group, NumericRange, SettingKey, DESCRIPTORS};
pub use error::{Result, SettingsError};
pub use policy::WritePolicy;
pub use rig::{hill_height, CameraPose, LightRig, RigFrame};
pub use scene::Scene;
pub use schema::{DirectionalLightControls, LightingSettings, PointLightControls, SceneControls, SpotLightControls};
pub use store::{ChangeSet, SettingsStore, SharedSettings};
pub use uniform::SettingsUniform;
pub use value::SettingValue;
