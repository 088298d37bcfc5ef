use serde::{Deserialize, Serialize};

use super::error::NotificationError;
use super::types::Urgency;

/// Raw image in the `(iiibiiay)` layout of the `image-data` hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub width: i32,
    pub height: i32,
    pub rowstride: i32,
    pub has_alpha: bool,
    pub bits_per_sample: i32,
    pub channels: i32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Wrap a tightly packed RGBA8 image.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, NotificationError> {
        let width_i = i32::try_from(width)
            .map_err(|_| NotificationError::invalid_image("width out of range"))?;
        let height_i = i32::try_from(height)
            .map_err(|_| NotificationError::invalid_image("height out of range"))?;
        let rowstride = width_i
            .checked_mul(4)
            .ok_or_else(|| NotificationError::invalid_image("rowstride overflows"))?;

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| NotificationError::invalid_image("image too large"))?;
        if pixels.len() != expected {
            return Err(NotificationError::invalid_image(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                pixels.len()
            )));
        }

        Ok(Self {
            width: width_i,
            height: height_i,
            rowstride,
            has_alpha: true,
            bits_per_sample: 8,
            channels: 4,
            data: pixels,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintValue {
    Byte(u8),
    Bool(bool),
    Str(String),
    Image(ImageData),
}

pub const URGENCY: &str = "urgency";
pub const CATEGORY: &str = "category";
pub const DESKTOP_ENTRY: &str = "desktop-entry";
pub const IMAGE_DATA: &str = "image-data";
pub const SOUND_FILE: &str = "sound-file";
pub const SOUND_NAME: &str = "sound-name";
pub const SUPPRESS_SOUND: &str = "suppress-sound";
pub const TRANSIENT: &str = "transient";
pub const RESIDENT: &str = "resident";

/// Optional `Notify` hints.
///
/// The freedesktop `category` hint (e.g. `im.received`) is unrelated to
/// [`NotificationCategory`](super::category::NotificationCategory), which
/// groups actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    pub urgency: Option<Urgency>,
    pub category: Option<String>,
    pub desktop_entry: Option<String>,
    pub image: Option<ImageData>,
    pub sound_file: Option<String>,
    pub sound_name: Option<String>,
    pub suppress_sound: Option<bool>,
    pub transient: Option<bool>,
    pub resident: Option<bool>,
}

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_desktop_entry(mut self, entry: impl Into<String>) -> Self {
        self.desktop_entry = Some(entry.into());
        self
    }

    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_sound_file(mut self, path: impl Into<String>) -> Self {
        self.sound_file = Some(path.into());
        self
    }

    pub fn with_sound_name(mut self, name: impl Into<String>) -> Self {
        self.sound_name = Some(name.into());
        self
    }

    pub fn with_suppress_sound(mut self, suppress: bool) -> Self {
        self.suppress_sound = Some(suppress);
        self
    }

    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = Some(transient);
        self
    }

    pub fn with_resident(mut self, resident: bool) -> Self {
        self.resident = Some(resident);
        self
    }

    /// Fill unset fields from `defaults`.
    pub fn or(mut self, defaults: &Hints) -> Self {
        self.urgency = self.urgency.or(defaults.urgency);
        self.category = self.category.or_else(|| defaults.category.clone());
        self.desktop_entry = self.desktop_entry.or_else(|| defaults.desktop_entry.clone());
        self.image = self.image.or_else(|| defaults.image.clone());
        self.sound_file = self.sound_file.or_else(|| defaults.sound_file.clone());
        self.sound_name = self.sound_name.or_else(|| defaults.sound_name.clone());
        self.suppress_sound = self.suppress_sound.or(defaults.suppress_sound);
        self.transient = self.transient.or(defaults.transient);
        self.resident = self.resident.or(defaults.resident);
        self
    }

    pub fn entries(&self) -> Vec<(&'static str, HintValue)> {
        let mut entries = Vec::new();

        if let Some(urgency) = self.urgency {
            entries.push((URGENCY, HintValue::Byte(urgency.as_byte())));
        }
        if let Some(category) = &self.category {
            entries.push((CATEGORY, HintValue::Str(category.clone())));
        }
        if let Some(entry) = &self.desktop_entry {
            entries.push((DESKTOP_ENTRY, HintValue::Str(entry.clone())));
        }
        if let Some(image) = &self.image {
            entries.push((IMAGE_DATA, HintValue::Image(image.clone())));
        }
        if let Some(path) = &self.sound_file {
            entries.push((SOUND_FILE, HintValue::Str(path.clone())));
        }
        if let Some(name) = &self.sound_name {
            entries.push((SOUND_NAME, HintValue::Str(name.clone())));
        }
        if let Some(suppress) = self.suppress_sound {
            entries.push((SUPPRESS_SOUND, HintValue::Bool(suppress)));
        }
        if let Some(transient) = self.transient {
            entries.push((TRANSIENT, HintValue::Bool(transient)));
        }
        if let Some(resident) = self.resident {
            entries.push((RESIDENT, HintValue::Bool(resident)));
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_rgba_layout() {
        let image = ImageData::from_rgba(2, 3, vec![0u8; 24]).unwrap();
        assert_eq!(image.rowstride, 8);
        assert_eq!(image.bits_per_sample, 8);
        assert_eq!(image.channels, 4);
        assert!(image.has_alpha);
    }

    #[test]
    fn test_image_from_rgba_rejects_short_buffer() {
        let err = ImageData::from_rgba(4, 4, vec![0u8; 10]).unwrap_err();
        assert!(matches!(err, NotificationError::InvalidImage(_)));
    }

    #[test]
    fn test_empty_hints_have_no_entries() {
        assert!(Hints::new().entries().is_empty());
    }

    #[test]
    fn test_entries_use_wire_names() {
        let hints = Hints::new()
            .with_urgency(Urgency::Critical)
            .with_category("im.received")
            .with_suppress_sound(true);
        let entries = hints.entries();

        assert!(entries.contains(&(URGENCY, HintValue::Byte(2))));
        assert!(entries.contains(&(CATEGORY, HintValue::Str("im.received".into()))));
        assert!(entries.contains(&(SUPPRESS_SOUND, HintValue::Bool(true))));
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_or_keeps_explicit_values() {
        let defaults = Hints::new()
            .with_urgency(Urgency::Low)
            .with_desktop_entry("herald");
        let merged = Hints::new().with_urgency(Urgency::Critical).or(&defaults);

        assert_eq!(merged.urgency, Some(Urgency::Critical));
        assert_eq!(merged.desktop_entry.as_deref(), Some("herald"));
    }
}
