//! Transcription documents and the poem file driver.
//!
//! A transcription is a JSON object with a `text_id` and one `line_N` key per
//! verse line holding `[word, pronunciation]` pairs. An empty line separates
//! stanzas.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Result, RhymeError};
use crate::scheme::{PoemRhymes, Stanza};
use crate::tagger::Tagger;
use crate::types::Mode;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoemTranscription {
    pub text_id: Option<String>,
    #[serde(flatten)]
    pub lines: HashMap<String, Vec<(String, String)>>,
}

impl PoemTranscription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn line_count(&self) -> usize {
        self.lines.keys().filter(|k| k.starts_with("line_")).count()
    }

    /// Group lines into stanzas, keeping words or pronunciations per `mode`
    pub fn stanzas(&self, mode: Mode) -> Result<Vec<Stanza>> {
        let n_lines = self.line_count();
        debug!("Number of lines in poem: {}", n_lines);

        let mut poem = Vec::new();
        let mut stanza: Stanza = Vec::new();
        for n in 0..n_lines {
            let verse = self
                .lines
                .get(&format!("line_{n}"))
                .ok_or(RhymeError::MissingLine(n))?;

            if verse.is_empty() {
                if !stanza.is_empty() {
                    poem.push(std::mem::take(&mut stanza));
                }
                continue;
            }

            let tokens = verse
                .iter()
                .map(|(word, pronunciation)| match mode {
                    Mode::Orthographic => word.clone(),
                    Mode::Phonemic => pronunciation.clone(),
                })
                .collect();
            stanza.push(tokens);
        }
        if !stanza.is_empty() {
            poem.push(stanza);
        }
        Ok(poem)
    }
}

/// Parse a transcription document into stanzas of verse lines
pub fn get_stanzas_from_transcription(json: &str, mode: Mode) -> Result<Vec<Stanza>> {
    PoemTranscription::from_json(json)?.stanzas(mode)
}

/// Where the annotations for `poem_file` are written: `<stem>_rhyme_scheme.json` beside it
pub fn output_path(poem_file: &Path) -> Result<PathBuf> {
    let stem = poem_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| RhymeError::InvalidPath(poem_file.display().to_string()))?;
    Ok(poem_file.with_file_name(format!("{stem}_rhyme_scheme.json")))
}

/// Tag every stanza of a transcribed poem
pub fn tag_transcription(transcription: &PoemTranscription, tagger: &Tagger) -> Result<PoemRhymes> {
    let stanzas = transcription.stanzas(tagger.mode())?;
    Ok(tagger.tag_poem(&stanzas))
}

/// Annotate the rhyme schemes of a transcription file and save them next to it.
///
/// Returns the path of the written annotation file.
pub fn tag_poem_file(poem_file: impl AsRef<Path>, tagger: &Tagger) -> Result<PathBuf> {
    let poem_file = poem_file.as_ref();
    let transcription = PoemTranscription::from_path(poem_file)?;
    let poem_id = transcription.text_id.as_deref().unwrap_or("<unnamed>");
    debug!("Tagging poem: {}", poem_id);

    let rhymes = tag_transcription(&transcription, tagger)?;

    let outputfile = output_path(poem_file)?;
    std::fs::write(&outputfile, serde_json::to_string_pretty(&rhymes)?)?;
    info!(
        "Saved rhyme scheme annotations for poem {} to {}",
        poem_id,
        outputfile.display()
    );
    Ok(outputfile)
}
