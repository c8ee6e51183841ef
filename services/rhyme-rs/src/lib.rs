//! Verse Rhyme: end rhyme detection for Norwegian poetry.
//!
//! Provides:
//! - Nofabet phoneme classification and syllabification
//! - Rhyme scoring of phonemic transcriptions and written words
//! - Longest common substring matching over graphemes
//! - Stanza tagging into rhyme schemes such as "abab"
//! - Python bindings via PyO3 (feature `python`)

pub mod config;
pub mod error;
pub mod normalize;
pub mod phoneme;
pub mod scheme;
pub mod scoring;
pub mod substring;
pub mod tagger;
pub mod transcription;
pub mod types;

#[cfg(feature = "python")]
mod bindings;

pub use config::TaggerConfig;
pub use error::{Result, RhymeError};
pub use phoneme::{
    find_last_stressed_syllable, find_syllable_rhyme, is_nucleus, is_stressed,
    remove_syllable_onset, strip_stress, syllabify_line, syllabify_word,
};
pub use scheme::{collate_rhyme_scheme, PoemRhymes, Stanza};
pub use scoring::{score_orthographic_rhyme, score_rhyme, OrthographicScorer};
pub use substring::{longest_common_substring, shared_ending_substring};
pub use tagger::{tag_rhyming_verses, RhymeStrategy, TagAlphabet, Tagger};
pub use transcription::{get_stanzas_from_transcription, tag_poem_file, PoemTranscription};
pub use types::{Mode, RhymeScore, StanzaRhymes, Syllable, TaggedVerse};
