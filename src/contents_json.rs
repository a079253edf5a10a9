//! Contents.json data model for the app icon set
//!
//! Mirrors the subset of Apple's asset catalog schema that a single-size
//! universal iOS app icon uses: one entry per rendered file, with optional
//! luminosity appearances for the dark and tinted slots.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Author recorded in `info`, the value Xcode itself writes.
pub const AUTHOR: &str = "xcode";

/// Root structure of a Contents.json file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentsFile {
    /// One entry per icon slot; several slots may share a file
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within the icon set
///
/// Field order is the serialized key order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// Appearance qualifiers (e.g. luminosity = dark); absent for the default slot
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub appearances: Option<Vec<Appearance>>,

    /// The PNG file backing this slot
    pub filename: String,

    /// The device type ("universal" for single-size app icons)
    pub idiom: String,

    /// Target platform ("ios")
    pub platform: String,

    /// Size in points, e.g. "1024x1024"
    pub size: String,
}

/// A single appearance qualifier
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Appearance {
    pub appearance: String,
    pub value: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    /// The application or tool that authored the asset catalog
    pub author: String,

    /// The format version of the asset catalog (always 1)
    pub version: u8,
}

impl ContentsFile {
    /// Creates an empty Contents.json structure with the specified author
    pub fn new(author: &str) -> Self {
        Self {
            images: Vec::new(),
            info: Info {
                author: author.to_string(),
                version: 1,
            },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }

    /// Returns the entry whose luminosity appearance equals `value`, if any
    pub fn find_appearance(&self, value: &str) -> Option<&ImageEntry> {
        self.images.iter().find(|image| {
            image
                .appearances
                .iter()
                .flatten()
                .any(|a| a.appearance == "luminosity" && a.value == value)
        })
    }
}

impl ImageEntry {
    /// Creates a universal iOS entry of `size`×`size` points with no appearances
    pub fn universal_ios(filename: &str, size: u32) -> Self {
        Self {
            appearances: None,
            filename: filename.to_string(),
            idiom: "universal".to_string(),
            platform: "ios".to_string(),
            size: format!("{size}x{size}"),
        }
    }

    /// Adds a luminosity appearance ("dark", "tinted")
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with_luminosity(mut self, value: &str) -> Self {
        self.appearances
            .get_or_insert_with(Vec::new)
            .push(Appearance {
                appearance: "luminosity".to_string(),
                value: value.to_string(),
            });
        self
    }
}

/// Builds the manifest for the two rendered variants
///
/// The default slot and the tinted slot both use the light file; the dark
/// slot uses the dark file.
pub fn app_icon_contents(light_filename: &str, dark_filename: &str, size: u32) -> ContentsFile {
    let mut contents = ContentsFile::new(AUTHOR);
    contents.add_image(ImageEntry::universal_ios(light_filename, size));
    contents.add_image(ImageEntry::universal_ios(dark_filename, size).with_luminosity("dark"));
    contents.add_image(ImageEntry::universal_ios(light_filename, size).with_luminosity("tinted"));
    contents
}

/// Writes `Contents.json` into `dir` and returns its path
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(contents).context("Failed to serialize Contents.json")?;
    let path = dir.join("Contents.json");
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_JSON: &str = r#"{
  "images": [
    {
      "filename": "icon_light.png",
      "idiom": "universal",
      "platform": "ios",
      "size": "1024x1024"
    },
    {
      "appearances": [
        {
          "appearance": "luminosity",
          "value": "dark"
        }
      ],
      "filename": "icon_dark.png",
      "idiom": "universal",
      "platform": "ios",
      "size": "1024x1024"
    },
    {
      "appearances": [
        {
          "appearance": "luminosity",
          "value": "tinted"
        }
      ],
      "filename": "icon_light.png",
      "idiom": "universal",
      "platform": "ios",
      "size": "1024x1024"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;

    #[test]
    fn test_contents_file_creation() {
        let contents = ContentsFile::new("com.example.app");
        assert_eq!(contents.info.author, "com.example.app");
        assert_eq!(contents.info.version, 1);
        assert!(contents.images.is_empty());
    }

    #[test]
    fn test_default_entry_omits_appearances() {
        let entry = ImageEntry::universal_ios("icon_light.png", 1024);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("appearances"));
        assert_eq!(entry.size, "1024x1024");
    }

    #[test]
    fn test_app_icon_contents_serializes_exactly() {
        let contents = app_icon_contents("icon_light.png", "icon_dark.png", 1024);
        let json = serde_json::to_string_pretty(&contents).unwrap();
        assert_eq!(json, EXPECTED_JSON);
    }

    #[test]
    fn test_find_appearance() {
        let contents = app_icon_contents("icon_light.png", "icon_dark.png", 1024);

        let dark = contents.find_appearance("dark").expect("dark slot");
        assert_eq!(dark.filename, "icon_dark.png");

        let tinted = contents.find_appearance("tinted").expect("tinted slot");
        assert_eq!(tinted.filename, "icon_light.png");

        assert!(contents.find_appearance("high-contrast").is_none());
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let contents = app_icon_contents("icon_light.png", "icon_dark.png", 1024);

        let path = write_contents_json(temp_dir.path(), &contents).unwrap();
        assert_eq!(path, temp_dir.path().join("Contents.json"));

        let parsed: ContentsFile =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, contents);
    }

    #[test]
    fn test_write_contents_json_missing_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let contents = ContentsFile::new(AUTHOR);
        assert!(write_contents_json(&missing, &contents).is_err());
    }
}
