//! User configuration and the persistence seam.
//!
//! [`SettingsStore`] is the host's key-value store, reduced to the
//! five keys the face uses. Reads go through [`DialConfig::load`] with
//! field-wise defaults; an absent key is indistinguishable from "not
//! yet set". Writes are write-through: every configuration push
//! rewrites the complete four-field set, so the persisted snapshot is
//! always self-consistent even if a previous session died mid-write.
//!
//! Store writes are fire-and-forget. A lost write only degrades the
//! next session's initial state, never the current one.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors;
use crate::state::steps;

// =============================================================================
// Storage Keys
// =============================================================================

/// Keys in the host key-value store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StorageKey {
    Use24h,
    BackgroundColor,
    ForegroundColor,
    SecondaryColor,
    StepGoal,
}

/// Number of distinct storage keys.
pub const STORAGE_KEY_COUNT: usize = 5;

impl StorageKey {
    /// Dense index for array-backed stores.
    #[inline]
    pub const fn index(self) -> usize { self as usize }
}

// =============================================================================
// Persistence Collaborator
// =============================================================================

/// Host-provided persistent key-value store. Writes are assumed
/// near-instant and are not retried on failure.
pub trait SettingsStore {
    fn exists(&self, key: StorageKey) -> bool;
    fn read_bool(&self, key: StorageKey) -> bool;
    fn read_int(&self, key: StorageKey) -> i32;
    fn write_bool(&mut self, key: StorageKey, value: bool);
    fn write_int(&mut self, key: StorageKey, value: i32);
}

// =============================================================================
// Dial Configuration
// =============================================================================

/// User-configurable display settings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialConfig {
    pub use_24h: bool,
    pub background: Rgb888,
    pub foreground: Rgb888,
    pub secondary: Rgb888,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            use_24h: true,
            background: colors::BLACK,
            foreground: colors::WHITE,
            secondary: colors::LIGHT_GRAY,
        }
    }
}

impl DialConfig {
    /// Load settings, defaulting each absent field independently.
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        let defaults = Self::default();
        Self {
            use_24h: if store.exists(StorageKey::Use24h) {
                store.read_bool(StorageKey::Use24h)
            } else {
                defaults.use_24h
            },
            background: load_color(store, StorageKey::BackgroundColor, defaults.background),
            foreground: load_color(store, StorageKey::ForegroundColor, defaults.foreground),
            secondary: load_color(store, StorageKey::SecondaryColor, defaults.secondary),
        }
    }

    /// Persist all four fields, changed or not.
    pub fn save<S: SettingsStore>(
        &self,
        store: &mut S,
    ) {
        store.write_bool(StorageKey::Use24h, self.use_24h);
        store.write_int(
            StorageKey::BackgroundColor,
            i32::from(colors::rgb_to_argb8(self.background)),
        );
        store.write_int(
            StorageKey::ForegroundColor,
            i32::from(colors::rgb_to_argb8(self.foreground)),
        );
        store.write_int(
            StorageKey::SecondaryColor,
            i32::from(colors::rgb_to_argb8(self.secondary)),
        );
    }

    /// Apply a partial configuration push, then write the full set
    /// through to the store.
    pub fn apply_update<S: SettingsStore>(
        &mut self,
        update: &ConfigUpdate,
        store: &mut S,
    ) {
        if let Some(use_24h) = update.use_24h {
            self.use_24h = use_24h;
        }
        if let Some(background) = update.background {
            self.background = background;
        }
        if let Some(foreground) = update.foreground {
            self.foreground = foreground;
        }
        if let Some(secondary) = update.secondary {
            self.secondary = secondary;
        }
        self.save(store);
    }
}

fn load_color<S: SettingsStore>(
    store: &S,
    key: StorageKey,
    default: Rgb888,
) -> Rgb888 {
    if store.exists(key) {
        colors::rgb_from_argb8(store.read_int(key) as u8)
    } else {
        default
    }
}

// =============================================================================
// Configuration Push
// =============================================================================

/// A partial settings update from the configuration channel. Absent
/// fields leave the corresponding setting untouched.
///
/// Colors on this channel arrive as `0xRRGGBB` integers rather than
/// the persisted packed byte; the `*_hex` builders normalize them.
#[derive(Clone, Copy, Default, Debug)]
pub struct ConfigUpdate {
    pub use_24h: Option<bool>,
    pub background: Option<Rgb888>,
    pub foreground: Option<Rgb888>,
    pub secondary: Option<Rgb888>,
}

impl ConfigUpdate {
    pub const fn with_use_24h(
        mut self,
        use_24h: bool,
    ) -> Self {
        self.use_24h = Some(use_24h);
        self
    }

    pub const fn with_background_hex(
        mut self,
        hex: u32,
    ) -> Self {
        self.background = Some(colors::rgb_from_hex(hex));
        self
    }

    pub const fn with_foreground_hex(
        mut self,
        hex: u32,
    ) -> Self {
        self.foreground = Some(colors::rgb_from_hex(hex));
        self
    }

    pub const fn with_secondary_hex(
        mut self,
        hex: u32,
    ) -> Self {
        self.secondary = Some(colors::rgb_from_hex(hex));
        self
    }
}

// =============================================================================
// Step Goal Persistence
// =============================================================================

/// Load the step goal, discarding implausible stored values.
pub fn load_step_goal<S: SettingsStore>(store: &S) -> u32 {
    let stored = if store.exists(StorageKey::StepGoal) {
        Some(store.read_int(StorageKey::StepGoal).max(0) as u32)
    } else {
        None
    };
    steps::sanitize_goal(stored)
}

/// Persist a raised step goal.
pub fn save_step_goal<S: SettingsStore>(
    store: &mut S,
    goal: u32,
) {
    store.write_int(StorageKey::StepGoal, goal as i32);
}

// =============================================================================
// Test Store
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::test_store::MemStore;
    use super::*;
    use crate::state::steps::DEFAULT_STEP_GOAL;

    #[test]
    fn test_load_defaults_from_empty_store() {
        let store = MemStore::default();
        let config = DialConfig::load(&store);
        assert_eq!(config, DialConfig::default());
        assert!(config.use_24h);
        assert_eq!(config.background, colors::BLACK);
        assert_eq!(config.foreground, colors::WHITE);
        assert_eq!(config.secondary, colors::LIGHT_GRAY);
    }

    #[test]
    fn test_fields_default_independently() {
        let mut store = MemStore::default();
        store.write_bool(StorageKey::Use24h, false);
        store.write_int(
            StorageKey::SecondaryColor,
            i32::from(colors::rgb_to_argb8(colors::STEPS_FILL)),
        );

        let config = DialConfig::load(&store);
        assert!(!config.use_24h);
        assert_eq!(config.secondary, colors::STEPS_FILL);
        // Absent keys keep their defaults
        assert_eq!(config.background, colors::BLACK);
        assert_eq!(config.foreground, colors::WHITE);
    }

    #[test]
    fn test_partial_push_changes_one_field_but_writes_all() {
        let mut store = MemStore::default();
        let mut config = DialConfig::default();

        config.apply_update(&ConfigUpdate::default().with_use_24h(false), &mut store);

        assert!(!config.use_24h);
        // Untouched fields keep their values
        assert_eq!(config.background, colors::BLACK);
        assert_eq!(config.foreground, colors::WHITE);
        assert_eq!(config.secondary, colors::LIGHT_GRAY);

        // ...but the full four-field snapshot was still written through
        assert!(store.exists(StorageKey::Use24h));
        assert!(store.exists(StorageKey::BackgroundColor));
        assert!(store.exists(StorageKey::ForegroundColor));
        assert!(store.exists(StorageKey::SecondaryColor));
    }

    #[test]
    fn test_push_colors_arrive_as_hex() {
        let mut store = MemStore::default();
        let mut config = DialConfig::default();

        let update = ConfigUpdate::default()
            .with_background_hex(0x555500)
            .with_foreground_hex(0xFFAAAA);
        config.apply_update(&update, &mut store);

        assert_eq!(config.background, colors::BATTERY_TRACK);
        assert_eq!(config.foreground, colors::STEPS_FILL);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut store = MemStore::default();
        let mut config = DialConfig::default();
        config.use_24h = false;
        config.background = colors::rgb_from_hex(0x005555);
        config.save(&mut store);

        let loaded = DialConfig::load(&store);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_step_goal_defaults_and_plausibility() {
        let mut store = MemStore::default();
        assert_eq!(load_step_goal(&store), DEFAULT_STEP_GOAL);

        store.write_int(StorageKey::StepGoal, 500);
        assert_eq!(load_step_goal(&store), DEFAULT_STEP_GOAL, "implausible stored goal is discarded");

        store.write_int(StorageKey::StepGoal, -1);
        assert_eq!(load_step_goal(&store), DEFAULT_STEP_GOAL);

        save_step_goal(&mut store, 12_000);
        assert_eq!(load_step_goal(&store), 12_000);
    }
}
