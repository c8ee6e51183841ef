//! Shared data structures for the rhyme detection kernel.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::phoneme::{is_nucleus, is_stressed};

/// One syllable of a nofabet transcription: onset, nucleus and coda phonemes in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub phonemes: Vec<String>,
}

impl Syllable {
    pub fn new(phonemes: Vec<String>) -> Self {
        Self { phonemes }
    }

    /// True if any phoneme carries a stress digit 1, 2 or 3
    pub fn is_stressed(&self) -> bool {
        self.phonemes.iter().any(|p| is_stressed(p))
    }

    /// Position of the first nucleus phoneme, if the syllable has one
    pub fn nucleus_index(&self) -> Option<usize> {
        self.phonemes.iter().position(|p| is_nucleus(p, false))
    }

    pub fn onset(&self) -> &[String] {
        match self.nucleus_index() {
            Some(idx) => &self.phonemes[..idx],
            None => &self.phonemes,
        }
    }

    pub fn nucleus(&self) -> Option<&str> {
        self.nucleus_index().map(|idx| self.phonemes[idx].as_str())
    }

    pub fn coda(&self) -> &[String] {
        match self.nucleus_index() {
            Some(idx) => &self.phonemes[idx + 1..],
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }
}

impl From<Vec<&str>> for Syllable {
    fn from(phonemes: Vec<&str>) -> Self {
        Self::new(phonemes.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phonemes.join(" "))
    }
}

/// Strength of an end rhyme between two verse lines.
///
/// Serialized as the numbers 0, 0.5 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RhymeScore {
    #[default]
    NoRhyme,
    /// Nødrim: identical sound including the onset, or one word contains the other
    Forced,
    /// Same nucleus and coda with a differing onset
    Proper,
}

impl RhymeScore {
    pub fn value(self) -> f64 {
        match self {
            RhymeScore::NoRhyme => 0.0,
            RhymeScore::Forced => 0.5,
            RhymeScore::Proper => 1.0,
        }
    }

    pub fn is_rhyme(self) -> bool {
        self != RhymeScore::NoRhyme
    }
}

impl From<RhymeScore> for f64 {
    fn from(score: RhymeScore) -> Self {
        score.value()
    }
}

impl fmt::Display for RhymeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for RhymeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// How verse lines are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Tokens are nofabet pronunciations with stress digits
    #[default]
    Phonemic,
    /// Tokens are written words
    Orthographic,
}

/// A verse line after tagging. Created once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedVerse {
    /// Position of the line in the stanza input, counting skipped empty lines
    pub verse_id: usize,
    pub tokens: Vec<String>,
    /// Phonemes from the last stressed syllable onward, or the last word
    pub rhyme_unit: Vec<String>,
    pub rhyme_tag: char,
    pub rhyme_score: RhymeScore,
    /// `verse_id` of the earlier line this one rhymes with
    pub rhymes_with: Option<usize>,
}

/// Tagged verses of one stanza together with its rhyme scheme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StanzaRhymes {
    pub rhyme_scheme: String,
    pub verses: Vec<TaggedVerse>,
}

impl StanzaRhymes {
    pub fn new(verses: Vec<TaggedVerse>) -> Self {
        let rhyme_scheme = crate::scheme::collate_rhyme_scheme(&verses);
        Self {
            rhyme_scheme,
            verses,
        }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
