//! Pairwise rhyme scoring, phonemic and orthographic.
//!
//! Both scorers return a [`RhymeScore`]:
//! - `Proper` (1): only the rhyming part (nucleus + coda) matches
//! - `Forced` (0.5): nødrim, the onset matches too or one word contains the other
//! - `NoRhyme` (0)

use std::sync::OnceLock;

use ahash::AHashSet;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::phoneme::{
    find_last_stressed_syllable, find_syllable_rhyme, has_nucleus, is_nucleus, phonemes_match,
};
use crate::substring::longest_common_substring;
use crate::types::{RhymeScore, Syllable};

/// Norwegian inflectional endings that do not make a rhyme on their own
pub const GRAMMATICAL_SUFFIXES: &[&str] = &[
    "a", "e", "ar", "er", "en", "et", "ne", "ane", "ene", "es", "ens", "ers", "ets", "ande",
    "ende", "est", "ere", "te", "de",
];

/// Score two syllable sequences by their tails from the last stressed syllable
pub fn score_rhyme(syllables1: &[Syllable], syllables2: &[Syllable]) -> RhymeScore {
    let (Some(tail1), Some(tail2)) = (
        find_last_stressed_syllable(syllables1),
        find_last_stressed_syllable(syllables2),
    ) else {
        warn!(
            "Missing stress, cannot compare {:?} and {:?}",
            joined(syllables1),
            joined(syllables2)
        );
        return RhymeScore::NoRhyme;
    };

    if phonemes_match(&tail1, &tail2) {
        debug!("NØDRIM: {:?} and {:?}", tail1, tail2);
        return RhymeScore::Forced;
    }

    let (Some(rhyme1), Some(rhyme2)) = (
        find_syllable_rhyme(syllables1),
        find_syllable_rhyme(syllables2),
    ) else {
        return RhymeScore::NoRhyme;
    };

    if phonemes_match(&rhyme1, &rhyme2) {
        debug!("Rhyme: {:?} and {:?}", rhyme1, rhyme2);
        RhymeScore::Proper
    } else {
        RhymeScore::NoRhyme
    }
}

fn joined(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(Syllable::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Orthographic rhyme scorer with a configurable set of grammatical suffixes
#[derive(Debug, Clone)]
pub struct OrthographicScorer {
    suffixes: AHashSet<String>,
}

impl Default for OrthographicScorer {
    fn default() -> Self {
        Self::new(GRAMMATICAL_SUFFIXES.iter().copied())
    }
}

impl OrthographicScorer {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| Into::<String>::into(s).to_lowercase())
                .collect(),
        }
    }

    pub fn is_grammatical_suffix(&self, ending: &str) -> bool {
        self.suffixes.contains(ending)
    }

    /// Score two lower-cased words by their longest shared ending
    pub fn score(&self, word1: &str, word2: &str) -> RhymeScore {
        if word1 == word2 && has_nucleus(word1) {
            debug!("NØDRIM: {:?} repeated", word1);
            return RhymeScore::Forced;
        }

        let substring = longest_common_substring(word1, word2);

        if substring.is_empty() {
            return RhymeScore::NoRhyme;
        }
        if !word1.ends_with(&substring) || !word2.ends_with(&substring) {
            // shared text, but not an end rhyme
            return RhymeScore::NoRhyme;
        }
        if !has_nucleus(&substring) {
            return RhymeScore::NoRhyme;
        }
        if self.is_grammatical_suffix(&substring) {
            debug!("Shared ending {:?} is a grammatical suffix", substring);
            return RhymeScore::NoRhyme;
        }
        if let Some(rhyme) = orthographic_rhyme(&substring) {
            if self.is_grammatical_suffix(rhyme) {
                debug!("Rhyme {:?} of {:?} is a grammatical suffix", rhyme, substring);
                return RhymeScore::NoRhyme;
            }
        }
        if substring == word1 || substring == word2 {
            debug!("NØDRIM: {:?} and {:?}", word1, word2);
            return RhymeScore::Forced;
        }
        RhymeScore::Proper
    }
}

/// The part of a written ending from its first vowel onward
fn orthographic_rhyme(ending: &str) -> Option<&str> {
    ending
        .grapheme_indices(true)
        .find(|(_, g)| is_nucleus(g, true))
        .map(|(idx, _)| &ending[idx..])
}

static DEFAULT_SCORER: OnceLock<OrthographicScorer> = OnceLock::new();

fn default_scorer() -> &'static OrthographicScorer {
    DEFAULT_SCORER.get_or_init(OrthographicScorer::default)
}

/// Score two words with the default Norwegian suffix list
pub fn score_orthographic_rhyme(word1: &str, word2: &str) -> RhymeScore {
    default_scorer().score(word1, word2)
}
