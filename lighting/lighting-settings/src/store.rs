//! Owner of the single settings instance, with per-frame change tracking.

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::descriptor::SettingKey;
use crate::error::Result;
use crate::policy::WritePolicy;
use crate::schema::LightingSettings;
use crate::value::SettingValue;

/// Bit per [`SettingKey`], set by writes since the last [`SettingsStore::end_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet(u32);

impl ChangeSet {
    pub fn insert(&mut self, key: SettingKey) {
        self.0 |= 1 << key.index();
    }

    pub fn contains(&self, key: SettingKey) -> bool {
        self.0 & (1 << key.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = SettingKey> + '_ {
        SettingKey::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsStore {
    settings: LightingSettings,
    policy: WritePolicy,
    changes: ChangeSet,
}

impl SettingsStore {
    pub fn new(policy: WritePolicy) -> Self {
        Self::with_settings(LightingSettings::default(), policy)
    }

    pub fn with_settings(settings: LightingSettings, policy: WritePolicy) -> Self {
        Self { settings, policy, changes: ChangeSet::default() }
    }

    pub fn settings(&self) -> &LightingSettings {
        &self.settings
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.settings.get(key)
    }

    /// Apply the write policy, store the value and mark the key changed.
    /// Writing the current value again is not recorded as a change.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        let stored = self.policy.apply(key, value)?;
        if !stored.same_as(&value) {
            warn!("{}: {:?} adjusted to {:?}", key.name(), value, stored);
        }
        if self.settings.get(key).same_as(&stored) {
            return Ok(());
        }
        self.settings.set(key, stored)?;
        self.changes.insert(key);
        debug!("{} = {:?}", key.name(), stored);
        Ok(())
    }

    /// Replace every value (e.g. after loading a file). Keys whose value differs are marked changed.
    pub fn replace(&mut self, settings: LightingSettings) {
        for key in SettingKey::ALL {
            if !self.settings.get(key).same_as(&settings.get(key)) {
                self.changes.insert(key);
            }
        }
        self.settings = settings;
    }

    pub fn reset_to_defaults(&mut self) {
        self.replace(LightingSettings::default());
    }

    pub fn changed(&self, key: SettingKey) -> bool {
        self.changes.contains(key)
    }

    pub fn changes(&self) -> ChangeSet {
        self.changes
    }

    /// Returns the changes recorded this frame and clears them.
    pub fn end_frame(&mut self) -> ChangeSet {
        std::mem::take(&mut self.changes)
    }
}

/// Store shared between an editor thread and a render thread.
#[derive(Clone, Debug, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<SettingsStore>>,
}

impl SharedSettings {
    pub fn new(store: SettingsStore) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    pub fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.inner.write().set(key, value)
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.inner.read().get(key)
    }

    /// Owned copy of the current values.
    pub fn snapshot(&self) -> LightingSettings {
        self.inner.read().settings().clone()
    }

    /// Snapshot plus the changes since the previous call, taken under one lock.
    pub fn begin_frame(&self) -> (LightingSettings, ChangeSet) {
        let mut store = self.inner.write();
        let changes = store.end_frame();
        (store.settings().clone(), changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use crate::scene::Scene;

    #[test]
    fn writes_are_tracked_until_end_frame() {
        let mut store = SettingsStore::new(WritePolicy::Advisory);
        assert!(store.changes().is_empty());
        store.set(SettingKey::CurrentScene, SettingValue::Scene(Scene::Skull)).unwrap();
        store.set(SettingKey::PointLightRange, SettingValue::Float(45.0)).unwrap();
        assert!(store.changed(SettingKey::CurrentScene));
        assert!(!store.changed(SettingKey::SpotLightRange));
        let frame = store.end_frame();
        assert_eq!(frame.iter().collect::<Vec<_>>(), vec![SettingKey::CurrentScene, SettingKey::PointLightRange]);
        assert!(store.changes().is_empty());
        assert_eq!(store.settings().point.range, 45.0);
    }

    #[test]
    fn rewriting_same_value_is_not_a_change() {
        let mut store = SettingsStore::default();
        store.set(SettingKey::PointLightRange, SettingValue::Float(30.0)).unwrap();
        assert!(store.changes().is_empty());
    }

    #[test]
    fn clamp_policy_applies_on_write() {
        let mut store = SettingsStore::new(WritePolicy::Clamp);
        store.set(SettingKey::SpotOuterAngle, SettingValue::Float(200.0)).unwrap();
        assert_eq!(store.settings().spot.outer_angle_degrees, 90.0);

        let mut advisory = SettingsStore::new(WritePolicy::Advisory);
        advisory.set(SettingKey::SpotOuterAngle, SettingValue::Float(200.0)).unwrap();
        assert_eq!(advisory.settings().spot.outer_angle_degrees, 200.0);
    }

    #[test]
    fn failed_write_leaves_store_untouched() {
        let mut store = SettingsStore::new(WritePolicy::Clamp);
        assert!(store.set(SettingKey::DirLightDirection, SettingValue::Direction([0.0; 3])).is_err());
        assert!(store.set(SettingKey::PointLightRange, SettingValue::Bool(true)).is_err());
        assert!(store.changes().is_empty());
        assert_eq!(store.settings(), &LightingSettings::default());
    }

    #[test]
    fn clamp_store_refuses_nan() {
        let mut store = SettingsStore::new(WritePolicy::Clamp);
        let err = store.set(SettingKey::SpotInnerAngle, SettingValue::Float(f32::NAN)).unwrap_err();
        assert!(matches!(err, SettingsError::NonFinite(SettingKey::SpotInnerAngle)));
        assert!(store.changes().is_empty());
        let inner = store.settings().spot.inner_angle_degrees;
        let range = SettingKey::SpotInnerAngle.descriptor().kind.range().unwrap();
        assert!(range.contains(inner));
        assert_eq!(inner, 20.0);
    }

    #[test]
    fn advisory_nan_is_recorded_once() {
        let mut store = SettingsStore::new(WritePolicy::Advisory);
        store.set(SettingKey::PointLightRange, SettingValue::Float(f32::NAN)).unwrap();
        assert!(store.settings().point.range.is_nan());
        assert!(store.end_frame().contains(SettingKey::PointLightRange));
        store.set(SettingKey::PointLightRange, SettingValue::Float(f32::NAN)).unwrap();
        assert!(store.changes().is_empty());
    }

    #[test]
    fn reset_marks_modified_keys() {
        let mut store = SettingsStore::default();
        store.set(SettingKey::EnableSpotLight, SettingValue::Bool(false)).unwrap();
        store.end_frame();
        store.reset_to_defaults();
        assert!(store.changed(SettingKey::EnableSpotLight));
        assert!(!store.changed(SettingKey::EnablePointLight));
        assert!(store.settings().spot.enable_spot_light);
    }

    #[test]
    fn shared_settings_across_threads() {
        let shared = SharedSettings::new(SettingsStore::default());
        let editor = shared.clone();
        std::thread::spawn(move || {
            editor.set(SettingKey::CurrentScene, SettingValue::Scene(Scene::Skull)).unwrap();
        })
        .join()
        .unwrap();
        let (snapshot, changes) = shared.begin_frame();
        assert_eq!(snapshot.scene.current_scene, Scene::Skull);
        assert!(changes.contains(SettingKey::CurrentScene));
        assert!(shared.begin_frame().1.is_empty());
    }
}
