use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Properties kept by the minimal filter, in output order.
pub const MINIMAL_PROPERTIES: [&str; 3] = ["DISTRICT_I", "DISTRICT_N", "Name20"];

/// Which feature properties survive reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFilter {
    /// Copy every property.
    #[default]
    Full,
    /// Keep only `MINIMAL_PROPERTIES`, defaulting missing values to `""`.
    Minimal,
}

impl PropertyFilter {
    /// Build the output properties for one feature.
    pub fn apply(&self, properties: Option<&Map<String, Value>>) -> Option<Map<String, Value>> {
        match self {
            PropertyFilter::Full => properties.cloned(),
            PropertyFilter::Minimal => Some(MINIMAL_PROPERTIES.iter()
                .map(|&key| {
                    let value = properties
                        .and_then(|props| props.get(key))
                        .filter(|value| !value.is_null())
                        .cloned()
                        .unwrap_or_else(|| Value::String(String::new()));
                    (key.to_string(), value)
                })
                .collect()),
        }
    }
}

/// A named output tier: how hard to decimate and which properties to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Fraction of ring detail to keep, in `(0, 1]`.
    pub simplification_factor: f64,
    #[serde(default)]
    pub property_filter: PropertyFilter,
}

impl Profile {
    pub fn new(name: impl Into<String>, simplification_factor: f64, property_filter: PropertyFilter) -> Self {
        Self { name: name.into(), simplification_factor, property_filter }
    }

    /// Decimation stride: `max(1, ceil(1 / factor))`.
    pub fn stride(&self) -> usize {
        ((1.0 / self.simplification_factor).ceil() as usize).max(1)
    }

    /// Built-in tiers, most to least aggressive.
    pub fn defaults() -> Vec<Profile> {
        vec![
            Profile::new("ultra-low", 0.05, PropertyFilter::Minimal),
            Profile::new("low", 0.1, PropertyFilter::Full),
            Profile::new("medium", 0.25, PropertyFilter::Full),
            Profile::new("high", 0.5, PropertyFilter::Full),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Profile name must not be empty");
        }
        // Names become part of output file names.
        if self.name.contains(['/', '\\']) || self.name.contains("..") {
            bail!("Profile name {:?} must not contain path separators or \"..\"", self.name);
        }
        let factor = self.simplification_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            bail!("Profile {:?}: simplification factor {} is outside (0, 1]", self.name, factor);
        }
        Ok(())
    }
}

/// Check every profile and reject empty lists and duplicate names.
pub fn validate_profiles(profiles: &[Profile]) -> Result<()> {
    if profiles.is_empty() {
        bail!("At least one profile is required");
    }
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        profile.validate()?;
        if !seen.insert(profile.name.as_str()) {
            bail!("Duplicate profile name {:?}", profile.name);
        }
    }
    Ok(())
}

/// Load and validate a JSON array of profiles.
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read profile list {}", path.display()))?;
    let profiles: Vec<Profile> = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse profile list {}", path.display()))?;
    validate_profiles(&profiles)?;
    Ok(profiles)
}
