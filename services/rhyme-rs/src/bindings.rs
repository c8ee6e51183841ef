//! Python bindings via PyO3.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::RhymeError;
use crate::phoneme::{find_last_stressed_syllable, syllabify_line};
use crate::scheme::collate_rhyme_scheme;
use crate::scoring::{score_orthographic_rhyme, score_rhyme};
use crate::substring::{longest_common_substring, shared_ending_substring};
use crate::tagger::{tag_rhyming_verses, Tagger};
use crate::transcription::tag_poem_file;
use crate::types::{Mode, Syllable, TaggedVerse};

impl From<RhymeError> for PyErr {
    fn from(err: RhymeError) -> Self {
        match err {
            RhymeError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn to_syllables(raw: Vec<Vec<String>>) -> Vec<Syllable> {
    raw.into_iter().map(Syllable::new).collect()
}

fn mode_for(orthographic: bool) -> Mode {
    if orthographic {
        Mode::Orthographic
    } else {
        Mode::Phonemic
    }
}

// ============================================================================
// SYLLABLE FUNCTIONS
// ============================================================================

#[pyfunction]
#[pyo3(name = "syllabify_line")]
fn py_syllabify_line(pronunciations: Vec<String>) -> PyResult<Vec<Vec<String>>> {
    Ok(syllabify_line(&pronunciations)
        .into_iter()
        .map(|s| s.phonemes)
        .collect())
}

#[pyfunction]
#[pyo3(name = "find_last_stressed_syllable")]
fn py_find_last_stressed_syllable(syllables: Vec<Vec<String>>) -> PyResult<Option<Vec<String>>> {
    let syllables = to_syllables(syllables);
    Ok(find_last_stressed_syllable(&syllables)
        .map(|tail| tail.into_iter().map(str::to_string).collect()))
}

// ============================================================================
// SCORING FUNCTIONS
// ============================================================================

#[pyfunction]
#[pyo3(name = "score_rhyme")]
fn py_score_rhyme(syllables1: Vec<Vec<String>>, syllables2: Vec<Vec<String>>) -> PyResult<f64> {
    let score = score_rhyme(&to_syllables(syllables1), &to_syllables(syllables2));
    Ok(score.value())
}

#[pyfunction]
#[pyo3(name = "score_orthographic_rhyme")]
fn py_score_orthographic_rhyme(word1: &str, word2: &str) -> PyResult<f64> {
    Ok(score_orthographic_rhyme(word1, word2).value())
}

#[pyfunction]
#[pyo3(name = "longest_common_substring")]
fn py_longest_common_substring(string1: &str, string2: &str) -> PyResult<String> {
    Ok(longest_common_substring(string1, string2))
}

#[pyfunction]
#[pyo3(name = "shared_ending_substring")]
fn py_shared_ending_substring(string1: &str, string2: &str) -> PyResult<String> {
    Ok(shared_ending_substring(string1, string2))
}

// ============================================================================
// TAGGING FUNCTIONS
// ============================================================================

#[pyfunction]
#[pyo3(name = "tag_rhyming_verses", signature = (verses, orthographic = false))]
fn py_tag_rhyming_verses(verses: Vec<Vec<String>>, orthographic: bool) -> PyResult<Vec<PyTaggedVerse>> {
    let tagged = tag_rhyming_verses(&verses, mode_for(orthographic));
    Ok(tagged.into_iter().map(PyTaggedVerse::from).collect())
}

#[pyfunction]
#[pyo3(name = "collate_rhyme_scheme")]
fn py_collate_rhyme_scheme(verses: Vec<PyRef<'_, PyTaggedVerse>>) -> PyResult<String> {
    let tagged: Vec<TaggedVerse> = verses.iter().map(|v| v.inner.clone()).collect();
    Ok(collate_rhyme_scheme(&tagged))
}

#[pyfunction]
#[pyo3(name = "tag_poem_file", signature = (poem_file, orthographic = false))]
fn py_tag_poem_file(poem_file: &str, orthographic: bool) -> PyResult<String> {
    let tagger = Tagger::with_mode(mode_for(orthographic));
    let outputfile = tag_poem_file(poem_file, &tagger)?;
    Ok(outputfile.display().to_string())
}

// ============================================================================
// PYTHON WRAPPER TYPES
// ============================================================================

#[pyclass(name = "TaggedVerse")]
struct PyTaggedVerse {
    inner: TaggedVerse,
}

impl From<TaggedVerse> for PyTaggedVerse {
    fn from(inner: TaggedVerse) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyTaggedVerse {
    #[getter]
    fn verse_id(&self) -> usize {
        self.inner.verse_id
    }

    #[getter]
    fn tokens(&self) -> Vec<String> {
        self.inner.tokens.clone()
    }

    #[getter]
    fn rhyme_unit(&self) -> Vec<String> {
        self.inner.rhyme_unit.clone()
    }

    #[getter]
    fn rhyme_tag(&self) -> String {
        self.inner.rhyme_tag.to_string()
    }

    #[getter]
    fn rhyme_score(&self) -> f64 {
        self.inner.rhyme_score.value()
    }

    #[getter]
    fn rhymes_with(&self) -> Option<usize> {
        self.inner.rhymes_with
    }

    fn __repr__(&self) -> String {
        format!(
            "TaggedVerse(verse_id={}, rhyme_tag='{}', rhyme_score={})",
            self.inner.verse_id, self.inner.rhyme_tag, self.inner.rhyme_score
        )
    }
}

// ============================================================================
// MODULE DEFINITION
// ============================================================================

#[pymodule]
fn verse_rhyme(_py: Python, m: &PyModule) -> PyResult<()> {
    // Syllables
    m.add_function(wrap_pyfunction!(py_syllabify_line, m)?)?;
    m.add_function(wrap_pyfunction!(py_find_last_stressed_syllable, m)?)?;

    // Scoring
    m.add_function(wrap_pyfunction!(py_score_rhyme, m)?)?;
    m.add_function(wrap_pyfunction!(py_score_orthographic_rhyme, m)?)?;
    m.add_function(wrap_pyfunction!(py_longest_common_substring, m)?)?;
    m.add_function(wrap_pyfunction!(py_shared_ending_substring, m)?)?;

    // Tagging
    m.add_function(wrap_pyfunction!(py_tag_rhyming_verses, m)?)?;
    m.add_function(wrap_pyfunction!(py_collate_rhyme_scheme, m)?)?;
    m.add_function(wrap_pyfunction!(py_tag_poem_file, m)?)?;

    m.add_class::<PyTaggedVerse>()?;

    Ok(())
}
