//! How the declared ranges are treated when a value is written.

use serde::{Deserialize, Serialize};

use crate::descriptor::{FieldKind, SettingKey};
use crate::error::{Result, SettingsError};
use crate::value::SettingValue;

/// Ranges in the descriptor table are slider hints by default. `Clamp` turns
/// them into hard limits on every write through a [`SettingsStore`](crate::SettingsStore).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Store values exactly as given.
    #[default]
    Advisory,
    /// Clamp numbers and colour channels to the declared range, normalize directions.
    /// NaN and infinite values are rejected.
    Clamp,
}

impl WritePolicy {
    /// Returns the value to store. Type checking is left to [`LightingSettings::set`](crate::LightingSettings::set).
    pub fn apply(self, key: SettingKey, value: SettingValue) -> Result<SettingValue> {
        if self == WritePolicy::Advisory {
            return Ok(value);
        }
        if !value.is_finite() {
            return Err(SettingsError::NonFinite(key));
        }
        let kind = key.descriptor().kind;
        Ok(match (kind, value) {
            (FieldKind::Float { range }, SettingValue::Float(v)) => SettingValue::Float(range.clamp(v)),
            (FieldKind::Color { range, hdr }, SettingValue::Color(c)) => {
                SettingValue::Color(c.map(|ch| if hdr { ch.max(range.min) } else { range.clamp(ch) }))
            }
            (FieldKind::Direction, SettingValue::Direction(d)) => {
                SettingValue::Direction(normalize(d).ok_or(SettingsError::DegenerateDirection(key))?)
            }
            (_, other) => other,
        })
    }
}

pub(crate) fn normalize(v: [f32; 3]) -> Option<[f32; 3]> {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if !len.is_finite() || len < 1e-6 {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
}
