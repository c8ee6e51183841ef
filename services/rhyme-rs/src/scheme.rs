//! Rhyme schemes per stanza and the annotation document for a whole poem.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::types::{RhymeScore, StanzaRhymes, TaggedVerse};

/// Verse lines of one stanza, each a list of tokens
pub type Stanza = Vec<Vec<String>>;

/// Join the tags of a stanza's verses into a scheme such as "abab"
pub fn collate_rhyme_scheme(verses: &[TaggedVerse]) -> String {
    verses.iter().map(|verse| verse.rhyme_tag).collect()
}

/// Rhyme annotations for every stanza of a poem, in stanza order.
///
/// Serializes to `{"stanza_0": [{"rhyme_scheme": ..}, {verse}, ..], ..}` with
/// token lists joined by spaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoemRhymes {
    pub stanzas: Vec<StanzaRhymes>,
}

impl PoemRhymes {
    pub fn schemes(&self) -> Vec<&str> {
        self.stanzas
            .iter()
            .map(|stanza| stanza.rhyme_scheme.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stanzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }
}

#[derive(Serialize)]
struct SchemeRecord<'a> {
    rhyme_scheme: &'a str,
}

#[derive(Serialize)]
struct FlatVerse {
    verse_id: usize,
    verse: String,
    rhyme_unit: String,
    rhyme_tag: char,
    rhyme_score: RhymeScore,
    rhymes_with: Option<usize>,
}

impl From<&TaggedVerse> for FlatVerse {
    fn from(verse: &TaggedVerse) -> Self {
        Self {
            verse_id: verse.verse_id,
            verse: verse.tokens.join(" "),
            rhyme_unit: verse.rhyme_unit.join(" "),
            rhyme_tag: verse.rhyme_tag,
            rhyme_score: verse.rhyme_score,
            rhymes_with: verse.rhymes_with,
        }
    }
}

struct StanzaAnnotation<'a>(&'a StanzaRhymes);

impl Serialize for StanzaAnnotation<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stanza = self.0;
        let mut seq = serializer.serialize_seq(Some(stanza.verses.len() + 1))?;
        seq.serialize_element(&SchemeRecord {
            rhyme_scheme: &stanza.rhyme_scheme,
        })?;
        for verse in &stanza.verses {
            seq.serialize_element(&FlatVerse::from(verse))?;
        }
        seq.end()
    }
}

impl Serialize for PoemRhymes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stanzas.len()))?;
        for (idx, stanza) in self.stanzas.iter().enumerate() {
            map.serialize_entry(&format!("stanza_{idx}"), &StanzaAnnotation(stanza))?;
        }
        map.end()
    }
}
