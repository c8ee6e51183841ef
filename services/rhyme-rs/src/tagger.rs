//! Line-by-line rhyme tagging of a stanza.
//!
//! Each line is compared with the already tagged lines, most recent first.
//! The first earlier line that rhymes hands down its tag; otherwise the line
//! gets the next unused letter. The search stops at the nearest match, so a
//! weaker recent match wins over a stronger older one.

use rayon::prelude::*;
use tracing::{debug, error};

use crate::config::TaggerConfig;
use crate::normalize::last_word;
use crate::phoneme::{find_last_stressed_syllable, syllabify_line};
use crate::scheme::{PoemRhymes, Stanza};
use crate::scoring::{score_rhyme, OrthographicScorer};
use crate::types::{Mode, RhymeScore, StanzaRhymes, Syllable, TaggedVerse};

/// Tag letters in the order they are handed out
const TAG_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Finite source of rhyme tags, scoped to one stanza
#[derive(Debug, Clone, Default)]
pub struct TagAlphabet {
    next: usize,
}

impl TagAlphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused letter, or `None` once all 52 are taken
    pub fn next_tag(&mut self) -> Option<char> {
        let tag = TAG_LETTERS.get(self.next).map(|&b| char::from(b))?;
        self.next += 1;
        Some(tag)
    }

    /// Start over from 'a' and hand it out
    pub fn restart(&mut self) -> char {
        self.next = 1;
        char::from(TAG_LETTERS[0])
    }

    pub fn remaining(&self) -> usize {
        TAG_LETTERS.len().saturating_sub(self.next)
    }
}

/// How a verse line is reduced to its rhyming unit and how two units are compared
pub trait RhymeStrategy {
    type Unit;

    /// `None` for an empty line, which is skipped
    fn rhyme_unit<S: AsRef<str>>(&self, tokens: &[S]) -> Option<Self::Unit>;

    fn score(&self, earlier: &Self::Unit, current: &Self::Unit) -> RhymeScore;

    /// Rhyme-relevant symbols of a unit, for the tagged record
    fn describe(&self, unit: &Self::Unit) -> Vec<String>;
}

/// Compare nofabet transcriptions by their last stressed syllables
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonemicStrategy;

impl RhymeStrategy for PhonemicStrategy {
    type Unit = Vec<Syllable>;

    fn rhyme_unit<S: AsRef<str>>(&self, tokens: &[S]) -> Option<Vec<Syllable>> {
        if tokens.iter().all(|t| t.as_ref().trim().is_empty()) {
            return None;
        }
        Some(syllabify_line(tokens))
    }

    fn score(&self, earlier: &Vec<Syllable>, current: &Vec<Syllable>) -> RhymeScore {
        score_rhyme(earlier, current)
    }

    fn describe(&self, unit: &Vec<Syllable>) -> Vec<String> {
        match find_last_stressed_syllable(unit) {
            Some(tail) => tail.into_iter().map(str::to_string).collect(),
            None => unit
                .last()
                .map(|syllable| syllable.phonemes.clone())
                .unwrap_or_default(),
        }
    }
}

/// Compare the last written word of each line
#[derive(Debug, Clone, Default)]
pub struct OrthographicStrategy {
    scorer: OrthographicScorer,
}

impl OrthographicStrategy {
    pub fn new(scorer: OrthographicScorer) -> Self {
        Self { scorer }
    }
}

impl RhymeStrategy for OrthographicStrategy {
    type Unit = String;

    fn rhyme_unit<S: AsRef<str>>(&self, tokens: &[S]) -> Option<String> {
        last_word(tokens)
    }

    fn score(&self, earlier: &String, current: &String) -> RhymeScore {
        self.scorer.score(earlier, current)
    }

    fn describe(&self, unit: &String) -> Vec<String> {
        vec![unit.clone()]
    }
}

fn fresh_tag(alphabet: &mut TagAlphabet) -> char {
    match alphabet.next_tag() {
        Some(tag) => tag,
        None => {
            error!("Ran out of rhyme tags! Initialising new alphabet.");
            alphabet.restart()
        }
    }
}

/// Tag the lines of one stanza with a strategy.
///
/// Empty lines are skipped but still count towards `verse_id`.
pub fn tag_verses<R, L, S>(strategy: &R, lines: &[L]) -> Vec<TaggedVerse>
where
    R: RhymeStrategy,
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut alphabet = TagAlphabet::new();
    let mut processed: Vec<TaggedVerse> = Vec::with_capacity(lines.len());
    // rhyme units, parallel to `processed`
    let mut units: Vec<R::Unit> = Vec::with_capacity(lines.len());

    for (verse_id, line) in lines.iter().enumerate() {
        let tokens = line.as_ref();
        let Some(unit) = strategy.rhyme_unit(tokens) else {
            continue;
        };

        let matched = processed
            .iter()
            .zip(&units)
            .rev()
            .find_map(|(previous, previous_unit)| {
                let score = strategy.score(previous_unit, &unit);
                score
                    .is_rhyme()
                    .then_some((previous.rhyme_tag, score, previous.verse_id))
            });

        let (rhyme_tag, rhyme_score, rhymes_with) = match matched {
            Some((tag, score, earlier)) => {
                debug!(verse_id, earlier, %score, "Verse rhymes with an earlier verse");
                (tag, score, Some(earlier))
            }
            None => (fresh_tag(&mut alphabet), RhymeScore::NoRhyme, None),
        };

        processed.push(TaggedVerse {
            verse_id,
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            rhyme_unit: strategy.describe(&unit),
            rhyme_tag,
            rhyme_score,
            rhymes_with,
        });
        units.push(unit);
    }

    processed
}

/// Tagger configured for one mode
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    mode: Mode,
    orthographic: OrthographicStrategy,
}

impl Tagger {
    pub fn new(config: &TaggerConfig) -> Self {
        Self {
            mode: config.mode,
            orthographic: OrthographicStrategy::new(OrthographicScorer::new(
                config.grammatical_suffixes.iter().cloned(),
            )),
        }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tag_stanza<L, S>(&self, lines: &[L]) -> Vec<TaggedVerse>
    where
        L: AsRef<[S]>,
        S: AsRef<str>,
    {
        match self.mode {
            Mode::Phonemic => tag_verses(&PhonemicStrategy, lines),
            Mode::Orthographic => tag_verses(&self.orthographic, lines),
        }
    }

    /// Tag stanzas independently (in parallel) and collect their schemes
    pub fn tag_poem(&self, stanzas: &[Stanza]) -> PoemRhymes {
        let stanzas = stanzas
            .par_iter()
            .map(|stanza| StanzaRhymes::new(self.tag_stanza(stanza)))
            .collect();
        PoemRhymes { stanzas }
    }
}

/// Tag a stanza with the default configuration for `mode`
pub fn tag_rhyming_verses<L, S>(verses: &[L], mode: Mode) -> Vec<TaggedVerse>
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    Tagger::with_mode(mode).tag_stanza(verses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tagged: &[TaggedVerse]) -> String {
        tagged.iter().map(|v| v.rhyme_tag).collect()
    }

    #[test]
    fn test_alphabet_is_bounded() {
        let mut alphabet = TagAlphabet::new();
        let letters: String = std::iter::from_fn(|| alphabet.next_tag()).collect();
        assert_eq!(letters.len(), 52);
        assert!(letters.starts_with("abc"));
        assert!(letters.ends_with("XYZ"));
        assert_eq!(alphabet.remaining(), 0);
        assert_eq!(alphabet.next_tag(), None);
        assert_eq!(alphabet.restart(), 'a');
        assert_eq!(alphabet.next_tag(), Some('b'));
    }

    #[test]
    fn test_tag_rhyming_verses_returns_rhyme_tag() {
        let verses = vec![
            vec!["EE2 N S OAH0 M"],
            vec!["G R UU1"],
            vec!["D EE1 N", "S OAH0 M"],
            vec!["G R UU1"],
        ];
        let output = tag_rhyming_verses(&verses, Mode::Phonemic);
        assert_eq!(tags(&output), "abab");
        assert_eq!(output[2].rhymes_with, Some(0));
        assert_eq!(output[3].rhymes_with, Some(1));
    }

    #[test]
    fn test_identical_phrases_result_in_noedrim() {
        let verses = vec![vec!["G R UU1"], vec!["G R UU1"]];
        let output = tag_rhyming_verses(&verses, Mode::Phonemic);
        assert_eq!(output[0].rhyme_tag, output[1].rhyme_tag);
        assert_eq!(output[1].rhyme_score, RhymeScore::Forced);
    }

    #[test]
    fn test_proper_rhymes_score_one() {
        let verses = vec![
            vec!["L OH2 K AX0 S"],
            vec!["S K R UH2 MP AX0 R", "IH3 N"],
            vec!["SJ L OH2 K AX0 S"],
            vec!["OEH1 R K AX0 N V IH3 N"],
        ];
        let result = tag_rhyming_verses(&verses, Mode::Phonemic);
        assert_eq!(result[2].rhyme_score, RhymeScore::Proper);
        assert_eq!(result[3].rhyme_score, RhymeScore::Proper);
        assert_eq!(tags(&result), "abab");
        assert_eq!(result[3].rhyme_unit, ["V", "IH3", "N"]);
    }

    #[test]
    fn test_orthographic_verses() {
        let verses = vec![
            vec!["Ensom", "ensom"],
            vec!["Det", "ord", "er", "fuldt", "af", "gru"],
            vec!["Ve", "ve", "den", "som"],
            vec!["ei", "frygter", "ordets", "gru"],
        ];
        let result = tag_rhyming_verses(&verses, Mode::Orthographic);
        assert_eq!(result[0].rhyme_tag, result[2].rhyme_tag);
        assert_eq!(result[1].rhyme_tag, result[3].rhyme_tag);
        assert_eq!(result[2].rhyme_score, RhymeScore::Forced);
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let verses = vec![vec!["G R UU1"], vec![], vec!["G R UU1"]];
        let result = tag_rhyming_verses(&verses, Mode::Phonemic);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].verse_id, 2);
        assert_eq!(result[1].rhymes_with, Some(0));
    }

    #[test]
    fn test_nearest_match_wins() {
        // "tusenfryd" stops at the forced match with "fryd" and never
        // reaches the proper rhyme with "bryd"
        let verses = vec![vec!["bryd"], vec!["fryd"], vec!["tusenfryd"]];
        let result = tag_rhyming_verses(&verses, Mode::Orthographic);
        assert_eq!(tags(&result), "aaa");
        assert_eq!(result[1].rhyme_score, RhymeScore::Proper);
        assert_eq!(result[2].rhyme_score, RhymeScore::Forced);
        assert_eq!(result[2].rhymes_with, Some(1));
    }

    #[test]
    fn test_unstressed_line_gets_fresh_tag() {
        let verses = vec![vec!["S OAH0 M"], vec!["D OAH0 M"]];
        let result = tag_rhyming_verses(&verses, Mode::Phonemic);
        assert_eq!(tags(&result), "ab");
        assert_eq!(result[0].rhyme_unit, ["S", "OAH0", "M"]);
    }

    #[test]
    fn test_tag_poem_keeps_stanza_order() {
        let poem: Vec<Stanza> = vec![
            vec![vec!["sangen".to_string()], vec!["klangen".to_string()]],
            vec![vec!["fryd".to_string()], vec!["sangen".to_string()]],
        ];
        let rhymes = Tagger::with_mode(Mode::Orthographic).tag_poem(&poem);
        assert_eq!(rhymes.schemes(), ["aa", "ab"]);
    }

    #[test]
    fn test_configured_suffixes_reach_the_tagger() {
        let config = TaggerConfig {
            mode: Mode::Orthographic,
            grammatical_suffixes: vec![],
        };
        let verses = vec![vec!["diktet"], vec!["brevet"]];
        let result = Tagger::new(&config).tag_stanza(&verses);
        assert_eq!(tags(&result), "aa");

        let result = tag_rhyming_verses(&verses, Mode::Orthographic);
        assert_eq!(tags(&result), "ab");
    }
}
