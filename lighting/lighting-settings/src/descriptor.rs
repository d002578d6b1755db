//! Field metadata side-table consumed by a settings editor/inspector panel.
//!
//! Every field of [`LightingSettings`](crate::LightingSettings) has exactly one
//! [`FieldDescriptor`] in [`DESCRIPTORS`], in declaration order. The table is
//! immutable; only the values in the settings instance change at runtime.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Identifies one setting. Names follow the demo's shader-side field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SettingKey {
    CurrentScene,
    DoubleSyncInterval,
    EnableAmbientLighting,
    EnableDirectionalLight,
    DirLightDirection,
    DirLightColor,
    EnablePointLight,
    EnablePointLightAnim,
    PointLightColor,
    PointLightConstAtten,
    PointLightLinAtten,
    PointLightQuadAtten,
    PointLightRange,
    EnableSpotLight,
    EnableSpotLightAnim,
    SpotLightColor,
    SpotLightRange,
    SpotInnerAngle,
    SpotOuterAngle,
    SpotLightConeFalloff,
}

impl SettingKey {
    pub const COUNT: usize = 20;

    pub const ALL: [SettingKey; Self::COUNT] = [
        SettingKey::CurrentScene,
        SettingKey::DoubleSyncInterval,
        SettingKey::EnableAmbientLighting,
        SettingKey::EnableDirectionalLight,
        SettingKey::DirLightDirection,
        SettingKey::DirLightColor,
        SettingKey::EnablePointLight,
        SettingKey::EnablePointLightAnim,
        SettingKey::PointLightColor,
        SettingKey::PointLightConstAtten,
        SettingKey::PointLightLinAtten,
        SettingKey::PointLightQuadAtten,
        SettingKey::PointLightRange,
        SettingKey::EnableSpotLight,
        SettingKey::EnableSpotLightAnim,
        SettingKey::SpotLightColor,
        SettingKey::SpotLightRange,
        SettingKey::SpotInnerAngle,
        SettingKey::SpotOuterAngle,
        SettingKey::SpotLightConeFalloff,
    ];

    /// Position in [`SettingKey::ALL`] and [`DESCRIPTORS`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &DESCRIPTORS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn from_name(name: &str) -> Result<Self> {
        DESCRIPTORS
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.key)
            .ok_or_else(|| SettingsError::UnknownField(name.to_string()))
    }
}

/// Editor panel group a setting is shown under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    SceneControls,
    DirectionalLightControls,
    PointLightControls,
    SpotLightControls,
}

impl Group {
    pub const ALL: [Group; 4] = [
        Group::SceneControls,
        Group::DirectionalLightControls,
        Group::PointLightControls,
        Group::SpotLightControls,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Group::SceneControls => "Scene Controls",
            Group::DirectionalLightControls => "Directional Light Controls",
            Group::PointLightControls => "Point Light Controls",
            Group::SpotLightControls => "Spot Light Controls",
        }
    }
}

/// Slider range for a numeric field. Advisory unless the store runs with
/// [`WritePolicy::Clamp`](crate::WritePolicy::Clamp).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl NumericRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Nearest multiple of `step` counted from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        if self.step <= 0.0 {
            return value;
        }
        self.min + ((value - self.min) / self.step).round() * self.step
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    Bool,
    Scene,
    /// Unit 3-vector.
    Direction,
    /// RGB triple. With `hdr` the channels may exceed `range.max`.
    Color { range: NumericRange, hdr: bool },
    Float { range: NumericRange },
}

impl FieldKind {
    pub fn range(&self) -> Option<NumericRange> {
        match *self {
            FieldKind::Color { range, .. } | FieldKind::Float { range } => Some(range),
            _ => None,
        }
    }

    pub fn is_hdr(&self) -> bool {
        matches!(self, FieldKind::Color { hdr: true, .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: SettingKey,
    pub name: &'static str,
    pub group: Group,
    pub display_name: Option<&'static str>,
    pub help_text: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Display name, or the field name split into words ("EnablePointLightAnim" -> "Enable Point Light Anim").
    pub fn label(&self) -> Cow<'static, str> {
        match self.display_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(split_words(self.name)),
        }
    }
}

fn split_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn descriptors_in(group: Group) -> impl Iterator<Item = &'static FieldDescriptor> {
    DESCRIPTORS.iter().filter(move |d| d.group == group)
}

const UNIT_COLOR: FieldKind = FieldKind::Color { range: NumericRange::new(0.0, 1.0, 0.05), hdr: false };
const RANGE_60: NumericRange = NumericRange::new(0.0, 60.0, 0.25);
const ANGLE: NumericRange = NumericRange::new(0.0, 90.0, 1.0);

pub static DESCRIPTORS: [FieldDescriptor; SettingKey::COUNT] = [
    FieldDescriptor {
        key: SettingKey::CurrentScene,
        name: "CurrentScene",
        group: Group::SceneControls,
        display_name: None,
        help_text: "",
        kind: FieldKind::Scene,
    },
    FieldDescriptor {
        key: SettingKey::DoubleSyncInterval,
        name: "DoubleSyncInterval",
        group: Group::SceneControls,
        display_name: None,
        help_text: "",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::EnableAmbientLighting,
        name: "EnableAmbientLighting",
        group: Group::DirectionalLightControls,
        display_name: None,
        help_text: "Enables ambient lighting from the environment",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::EnableDirectionalLight,
        name: "EnableDirectionalLight",
        group: Group::DirectionalLightControls,
        display_name: None,
        help_text: "Enables directional lighting from the environment",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::DirLightDirection,
        name: "DirLightDirection",
        group: Group::DirectionalLightControls,
        display_name: Some("Light Direction"),
        help_text: "The direction of the light",
        kind: FieldKind::Direction,
    },
    FieldDescriptor {
        key: SettingKey::DirLightColor,
        name: "DirLightColor",
        group: Group::DirectionalLightControls,
        display_name: Some("Light Color"),
        help_text: "The color of the directional light",
        kind: UNIT_COLOR,
    },
    FieldDescriptor {
        key: SettingKey::EnablePointLight,
        name: "EnablePointLight",
        group: Group::PointLightControls,
        display_name: None,
        help_text: "Enables point light",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::EnablePointLightAnim,
        name: "EnablePointLightAnim",
        group: Group::PointLightControls,
        display_name: None,
        help_text: "Enables point light annimation",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::PointLightColor,
        name: "PointLightColor",
        group: Group::PointLightControls,
        display_name: Some("Point Light Color"),
        help_text: "The color of the point light",
        kind: UNIT_COLOR,
    },
    FieldDescriptor {
        key: SettingKey::PointLightConstAtten,
        name: "PointLightConstAtten",
        group: Group::PointLightControls,
        display_name: Some("PointLight Constant Attenuation"),
        help_text: "The constant falloff for the point light",
        kind: FieldKind::Float { range: NumericRange::new(0.0, 1.0, 0.05) },
    },
    FieldDescriptor {
        key: SettingKey::PointLightLinAtten,
        name: "PointLightLinAtten",
        group: Group::PointLightControls,
        display_name: Some("PointLight Linear Attenuation"),
        help_text: "The linear falloff for the point light",
        kind: FieldKind::Float { range: NumericRange::new(0.0, 1.0, 0.01) },
    },
    FieldDescriptor {
        key: SettingKey::PointLightQuadAtten,
        name: "PointLightQuadAtten",
        group: Group::PointLightControls,
        display_name: Some("PointLight Quadratic Attenuation"),
        help_text: "The quadratic falloff for the point light",
        kind: FieldKind::Float { range: NumericRange::new(0.0, 1.0, 0.01) },
    },
    FieldDescriptor {
        key: SettingKey::PointLightRange,
        name: "PointLightRange",
        group: Group::PointLightControls,
        display_name: Some("PointLight Range"),
        help_text: "The radius for the range of the point light",
        kind: FieldKind::Float { range: RANGE_60 },
    },
    FieldDescriptor {
        key: SettingKey::EnableSpotLight,
        name: "EnableSpotLight",
        group: Group::SpotLightControls,
        display_name: None,
        help_text: "Enables spot light",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::EnableSpotLightAnim,
        name: "EnableSpotLightAnim",
        group: Group::SpotLightControls,
        display_name: None,
        help_text: "Enables spot light annimation",
        kind: FieldKind::Bool,
    },
    FieldDescriptor {
        key: SettingKey::SpotLightColor,
        name: "SpotLightColor",
        group: Group::SpotLightControls,
        display_name: Some("Spot Light Color"),
        help_text: "The color of the spot light",
        kind: UNIT_COLOR,
    },
    FieldDescriptor {
        key: SettingKey::SpotLightRange,
        name: "SpotLightRange",
        group: Group::SpotLightControls,
        display_name: Some("SpotLight Range"),
        help_text: "The radius for the range of the spot light",
        kind: FieldKind::Float { range: RANGE_60 },
    },
    FieldDescriptor {
        key: SettingKey::SpotInnerAngle,
        name: "SpotInnerAngle",
        group: Group::SpotLightControls,
        display_name: Some("SpotLight Inner Angle"),
        help_text: "The inner angle (in degrees) of spot light cone",
        kind: FieldKind::Float { range: ANGLE },
    },
    FieldDescriptor {
        key: SettingKey::SpotOuterAngle,
        name: "SpotOuterAngle",
        group: Group::SpotLightControls,
        display_name: Some("SpotLight Outer Angle"),
        help_text: "The outer angle (in degrees) of spot light cone",
        kind: FieldKind::Float { range: ANGLE },
    },
    FieldDescriptor {
        key: SettingKey::SpotLightConeFalloff,
        name: "SpotLightConeFalloff",
        group: Group::SpotLightControls,
        display_name: Some("SpotLight Cone Falloff"),
        help_text: "The falloff of brightness from the inner angle to the outer angle",
        kind: FieldKind::Float { range: NumericRange::new(0.0, 10.0, 0.01) },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LightingSettings, SettingValue};

    #[test]
    fn table_order_matches_keys() {
        for (i, key) in SettingKey::ALL.iter().enumerate() {
            assert_eq!(DESCRIPTORS[i].key, *key);
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_name(key.name()).unwrap(), key);
        }
        assert!(matches!(
            SettingKey::from_name("KeyValue"),
            Err(SettingsError::UnknownField(_))
        ));
    }

    #[test]
    fn numeric_defaults_lie_within_declared_range() {
        let settings = LightingSettings::default();
        for desc in DESCRIPTORS.iter() {
            let Some(range) = desc.kind.range() else { continue };
            assert!(range.min <= range.max, "{}", desc.name);
            match settings.get(desc.key) {
                SettingValue::Float(v) => assert!(range.contains(v), "{} = {}", desc.name, v),
                SettingValue::Color(c) => {
                    for ch in c {
                        assert!(range.contains(ch), "{} channel {}", desc.name, ch);
                    }
                }
                other => panic!("{} has a range but holds {:?}", desc.name, other),
            }
        }
    }

    #[test]
    fn metadata_attached_to_expected_fields() {
        let inner = SettingKey::SpotInnerAngle.descriptor();
        assert_eq!(inner.label(), "SpotLight Inner Angle");
        assert_eq!(inner.kind.range(), Some(NumericRange::new(0.0, 90.0, 1.0)));
        assert_eq!(inner.group, Group::SpotLightControls);

        let range = SettingKey::PointLightRange.descriptor();
        assert_eq!(range.kind.range(), Some(NumericRange::new(0.0, 60.0, 0.25)));
        assert_eq!(range.help_text, "The radius for the range of the point light");

        let color = SettingKey::DirLightColor.descriptor();
        assert!(!color.kind.is_hdr());
        assert_eq!(color.kind.range().map(|r| r.step), Some(0.05));

        assert_eq!(SettingKey::DirLightDirection.descriptor().kind, FieldKind::Direction);
        assert_eq!(SettingKey::CurrentScene.descriptor().kind, FieldKind::Scene);
    }

    #[test]
    fn labels_default_to_split_field_name() {
        assert_eq!(SettingKey::EnablePointLightAnim.descriptor().label(), "Enable Point Light Anim");
        assert_eq!(SettingKey::CurrentScene.descriptor().label(), "Current Scene");
        assert_eq!(SettingKey::DirLightDirection.descriptor().label(), "Light Direction");
    }

    #[test]
    fn groups_partition_the_table() {
        let total: usize = Group::ALL.iter().map(|g| descriptors_in(*g).count()).sum();
        assert_eq!(total, SettingKey::COUNT);
        assert_eq!(descriptors_in(Group::SceneControls).count(), 2);
        assert_eq!(descriptors_in(Group::DirectionalLightControls).count(), 4);
        assert_eq!(descriptors_in(Group::PointLightControls).count(), 7);
        assert_eq!(descriptors_in(Group::SpotLightControls).count(), 7);
    }

    #[test]
    fn snap_and_clamp() {
        let r = NumericRange::new(0.0, 60.0, 0.25);
        assert_eq!(r.snap(30.1), 30.0);
        assert_eq!(r.snap(30.2), 30.25);
        assert_eq!(r.clamp(75.0), 60.0);
        assert_eq!(r.clamp(-1.0), 0.0);
        assert!(!r.contains(60.5));
    }
}
