//! The fixed catalog of colored die types.
//!
//! A catalog always holds exactly [`CATALOG_SIZE`] entries with unique keys.
//! Entry order is display order. The presentation fields are opaque to the
//! engine; only `key` participates in state bookkeeping.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of die types in every catalog.
pub const CATALOG_SIZE: usize = 4;

/// Terminal color family for a die's style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassColor {
    /// `c-blue`
    Blue,
    /// `c-yellow`
    Yellow,
    /// `c-red`
    Red,
    /// `c-purple`
    Purple,
    /// `c-green`
    Green,
    /// `c-cyan`
    Cyan,
    /// Any class without a known color.
    Plain,
}

impl ClassColor {
    /// Map a style class to its color family.
    pub fn from_class(visual_class: &str) -> Self {
        match visual_class {
            "c-blue" => Self::Blue,
            "c-yellow" => Self::Yellow,
            "c-red" => Self::Red,
            "c-purple" => Self::Purple,
            "c-green" => Self::Green,
            "c-cyan" => Self::Cyan,
            _ => Self::Plain,
        }
    }
}

/// One color/virtue of die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieType {
    /// Unique identifier, stable for the process lifetime.
    pub key: String,
    /// Short code shown on the die icon (e.g. `BLU`).
    pub display_code: String,
    /// Virtue name shown as the die's label.
    pub virtue: String,
    /// Style class used by renderers to pick colors.
    pub visual_class: String,
    /// Optional image shown for a rolled six.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub six_asset: Option<String>,
}

impl DieType {
    /// Create a die type without a six asset.
    pub fn new(
        key: impl Into<String>,
        display_code: impl Into<String>,
        virtue: impl Into<String>,
        visual_class: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_code: display_code.into(),
            virtue: virtue.into(),
            visual_class: visual_class.into(),
            six_asset: None,
        }
    }

    /// Attach an image for rolled sixes.
    pub fn with_six_asset(mut self, asset: impl Into<String>) -> Self {
        self.six_asset = Some(asset.into());
        self
    }

    /// Color family of this die's style class.
    pub fn color(&self) -> ClassColor {
        ClassColor::from_class(&self.visual_class)
    }

    /// True if `name` refers to this die by key, display code, or virtue
    /// (case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.key.eq_ignore_ascii_case(name)
            || self.display_code.eq_ignore_ascii_case(name)
            || self.virtue.eq_ignore_ascii_case(name)
    }
}

/// The ordered, validated set of die types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    dice: Vec<DieType>,
}

impl Catalog {
    /// Validate and build a catalog from a list of die types.
    pub fn new(dice: Vec<DieType>) -> EngineResult<Self> {
        if dice.len() != CATALOG_SIZE {
            return Err(EngineError::CatalogSize {
                expected: CATALOG_SIZE,
                found: dice.len(),
            });
        }

        let mut seen = HashSet::new();
        for (i, die) in dice.iter().enumerate() {
            if die.key.trim().is_empty() {
                return Err(EngineError::EmptyKey(i));
            }
            if !seen.insert(die.key.as_str()) {
                return Err(EngineError::DuplicateKey(die.key.clone()));
            }
        }

        Ok(Self { dice })
    }

    /// Parse a catalog from a JSON array of die types.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let dice: Vec<DieType> = serde_json::from_str(json)?;
        Self::new(dice)
    }

    /// Read a catalog from a JSON file.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// All die types in display order.
    pub fn dice(&self) -> &[DieType] {
        &self.dice
    }

    /// Position of a die type by exact key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.dice.iter().position(|d| d.key == key)
    }

    /// Look up a die type by exact key.
    pub fn get(&self, key: &str) -> Option<&DieType> {
        self.dice.iter().find(|d| d.key == key)
    }

    /// Resolve a user-typed name (key, code, or virtue) to a die type.
    pub fn find(&self, name: &str) -> Option<&DieType> {
        self.dice.iter().find(|d| d.matches(name))
    }

    /// Iterate over die types in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, DieType> {
        self.dice.iter()
    }

    /// Number of die types (always [`CATALOG_SIZE`]).
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false: a valid catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl Default for Catalog {
    /// The four virtue dice: Prudence, Speed, Audacity, Fortitude.
    fn default() -> Self {
        Self {
            dice: vec![
                DieType::new("blue", "BLU", "Prudence", "c-blue")
                    .with_six_asset("images/Prudence.png"),
                DieType::new("yellow", "YEL", "Speed", "c-yellow")
                    .with_six_asset("images/Speed.png"),
                DieType::new("red", "RED", "Audacity", "c-red")
                    .with_six_asset("images/Audacity.png"),
                DieType::new("purple", "PUR", "Fortitude", "c-purple")
                    .with_six_asset("images/Fortitude.png"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DieType;
    type IntoIter = std::slice::Iter<'a, DieType>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}
