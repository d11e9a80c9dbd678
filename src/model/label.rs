use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::common::collections::HashSet;

/// A single-character key bound to one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(char);

impl Label {
    pub fn as_char(self) -> char { self.0 }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("label alphabet is empty")]
    Empty,
    #[error("label {0:?} appears more than once in the alphabet")]
    Duplicate(char),
    #[error("label {0:?} is not a printable ascii character")]
    Unsupported(char),
}

/// Built-in label sets, named after the keyboard rows they cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum AlphabetPreset {
    #[default]
    DvorakLeft,
    DvorakBoth,
    QwertyLeft,
    QwertyBoth,
}

impl AlphabetPreset {
    pub fn letters(self) -> &'static str {
        match self {
            AlphabetPreset::DvorakLeft => "UEIOA.PYJK",
            AlphabetPreset::DvorakBoth => "UEIOA.PYJKDHTNSFGCBMWV",
            AlphabetPreset::QwertyLeft => "FDGSARET",
            AlphabetPreset::QwertyBoth => "FDGSARETJKLUIO",
        }
    }
}

/// The ordered set of labels handed out to windows.
///
/// Order is significant twice over: it is the order labels are assigned in,
/// and it is the order the registry iterates in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet(Vec<Label>);

impl Alphabet {
    /// Builds an alphabet from literal characters. Letters are upper-cased so
    /// that they line up with normalized key names.
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let mut seen = HashSet::default();
        let mut labels = Vec::with_capacity(letters.len());
        for c in letters.chars() {
            if !c.is_ascii_graphic() {
                return Err(AlphabetError::Unsupported(c));
            }
            let c = c.to_ascii_uppercase();
            if !seen.insert(c) {
                return Err(AlphabetError::Duplicate(c));
            }
            labels.push(Label(c));
        }
        if labels.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Alphabet(labels))
    }

    /// Accepts either a preset name or a literal set of letters.
    pub fn parse(name: &str) -> Result<Self, AlphabetError> {
        match AlphabetPreset::from_str(name) {
            Ok(preset) => Ok(preset.into()),
            Err(_) => Alphabet::new(name),
        }
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, index: usize) -> Option<Label> { self.0.get(index).copied() }

    pub fn position(&self, label: Label) -> Option<usize> {
        self.0.iter().position(|l| *l == label)
    }

    /// Finds the label for an already normalized key character.
    pub fn label_for(&self, c: char) -> Option<Label> { self.0.iter().copied().find(|l| l.0 == c) }

    pub fn allocator(&self) -> LabelAllocator<'_> { LabelAllocator::new(self) }
}

impl Default for Alphabet {
    fn default() -> Self { AlphabetPreset::default().into() }
}

impl From<AlphabetPreset> for Alphabet {
    fn from(preset: AlphabetPreset) -> Self {
        Alphabet(preset.letters().chars().map(Label).collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|l| write!(f, "{l}"))
    }
}

/// Hands out labels in alphabet order until the alphabet runs out.
///
/// The cursor only ever moves forward; a label is never given out twice.
#[derive(Debug)]
pub struct LabelAllocator<'a> {
    alphabet: &'a Alphabet,
    cursor: usize,
}

impl<'a> LabelAllocator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self { Self { alphabet, cursor: 0 } }

    pub fn next_label(&mut self) -> Option<Label> {
        let label = self.alphabet.get(self.cursor)?;
        self.cursor += 1;
        Some(label)
    }
}
