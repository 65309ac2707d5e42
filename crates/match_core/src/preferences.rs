use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorBlindMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Some(ColorBlindMode::None),
            "protanopia" => Some(ColorBlindMode::Protanopia),
            "deuteranopia" => Some(ColorBlindMode::Deuteranopia),
            "tritanopia" => Some(ColorBlindMode::Tritanopia),
            _ => None,
        }
    }

    fn class_name(self) -> Option<&'static str> {
        match self {
            ColorBlindMode::None => None,
            ColorBlindMode::Protanopia => Some("colorblind-protanopia"),
            ColorBlindMode::Deuteranopia => Some("colorblind-deuteranopia"),
            ColorBlindMode::Tritanopia => Some("colorblind-tritanopia"),
        }
    }
}

/// Display preferences owned by whoever injects the store; there is no
/// process-wide copy. Missing fields in a persisted file take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityPreferences {
    pub screen_reader_optimized: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub large_text: bool,
    pub color_blind_mode: ColorBlindMode,
}

/// A single-field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    ScreenReaderOptimized(bool),
    HighContrast(bool),
    ReducedMotion(bool),
    LargeText(bool),
    ColorBlindMode(ColorBlindMode),
}

impl AccessibilityPreferences {
    /// Applies the change; returns whether anything differs afterwards.
    pub fn apply(&mut self, change: PreferenceChange) -> bool {
        let before = *self;
        match change {
            PreferenceChange::ScreenReaderOptimized(on) => self.screen_reader_optimized = on,
            PreferenceChange::HighContrast(on) => self.high_contrast = on,
            PreferenceChange::ReducedMotion(on) => self.reduced_motion = on,
            PreferenceChange::LargeText(on) => self.large_text = on,
            PreferenceChange::ColorBlindMode(mode) => self.color_blind_mode = mode,
        }
        before != *self
    }

    /// Class names the host applies to its root element.
    pub fn document_classes(&self) -> Vec<&'static str> {
        let toggles = [
            (self.high_contrast, "high-contrast"),
            (self.reduced_motion, "reduced-motion"),
            (self.large_text, "large-text"),
            (self.screen_reader_optimized, "sr-optimized"),
        ];
        toggles
            .into_iter()
            .filter_map(|(on, class)| on.then_some(class))
            .chain(self.color_blind_mode.class_name())
            .collect()
    }
}
