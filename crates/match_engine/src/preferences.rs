use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use match_core::AccessibilityPreferences;
use match_logging::{match_info, match_warn};

use crate::{AtomicFileWriter, PersistError};

pub const PREFERENCES_FILENAME: &str = "accessibility_preferences.ron";

/// Where accessibility preferences live between sessions.
///
/// Hosts load once at start-up and save after every change.
pub trait PreferenceStore: Send + Sync {
    /// A store with nothing saved yet yields the defaults.
    fn load(&self) -> Result<AccessibilityPreferences, PersistError>;
    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PersistError>;
}

/// Loads preferences, falling back to defaults on any error.
pub fn load_or_default(store: &dyn PreferenceStore) -> AccessibilityPreferences {
    store.load().unwrap_or_else(|err| {
        match_warn!("Failed to load accessibility preferences: {}", err);
        AccessibilityPreferences::default()
    })
}

/// RON file in a state directory.
#[derive(Debug, Clone)]
pub struct RonPreferenceStore {
    writer: AtomicFileWriter,
}

impl RonPreferenceStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(state_dir.into()),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(PREFERENCES_FILENAME)
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn load(&self) -> Result<AccessibilityPreferences, PersistError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(AccessibilityPreferences::default());
            }
            Err(err) => return Err(err.into()),
        };
        let preferences = ron::from_str(&content).map_err(|err| PersistError::Parse {
            path: path.clone(),
            message: err.to_string(),
        })?;
        match_info!("Loaded accessibility preferences from {:?}", path);
        Ok(preferences)
    }

    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PersistError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(preferences, pretty)
            .map_err(|err| PersistError::Serialize(err.to_string()))?;
        self.writer.write(PREFERENCES_FILENAME, &content)?;
        Ok(())
    }
}

/// Keeps preferences in memory; counts saves for inspection.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<AccessibilityPreferences>>,
    saves: Mutex<usize>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(preferences: AccessibilityPreferences) -> Self {
        Self {
            saved: Mutex::new(Some(preferences)),
            saves: Mutex::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<AccessibilityPreferences, PersistError> {
        let saved = self.saved.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(saved.unwrap_or_default())
    }

    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PersistError> {
        *self.saved.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(*preferences);
        *self.saves.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}
