//! Phoneme classification and syllabification of nofabet transcriptions.
//!
//! Nofabet phonemes are upper-case symbols separated by spaces. Nuclei carry a
//! trailing stress digit: 0 is unstressed, 1 and 2 are primary stress with
//! toneme 1 and 2, 3 is secondary stress.

use tracing::debug;

use crate::types::Syllable;

/// Nofabet vowels, diphthongs and syllabic consonants
pub const PHONEMIC_NUCLEI: &[&str] = &[
    "AA", "AE", "AEH", "AEJ", "AEW", "AH", "AJ", "AU", "AX", "EE", "EH", "EJ", "EU", "IH", "II",
    "OA", "OAH", "OE", "OEH", "OEJ", "OH", "OJ", "OO", "OU", "UH", "UI", "UU", "YH", "YY", "LX",
    "MX", "NX", "RLX", "RNX", "RX", "SX",
];

/// Norwegian vowel letters
pub const ORTHOGRAPHIC_NUCLEI: &[&str] = &[
    "a", "e", "i", "o", "u", "y", "æ", "ø", "å", "é", "è", "ê", "ó", "ò", "ô",
];

/// Consonant clusters that may open a Norwegian syllable. Any single
/// consonant except NG is a legal onset on its own.
const ONSET_CLUSTERS: &[&[&str]] = &[
    &["P", "L"],
    &["P", "R"],
    &["P", "J"],
    &["B", "L"],
    &["B", "R"],
    &["B", "J"],
    &["T", "R"],
    &["T", "V"],
    &["T", "J"],
    &["D", "R"],
    &["D", "V"],
    &["D", "J"],
    &["K", "L"],
    &["K", "R"],
    &["K", "V"],
    &["K", "N"],
    &["K", "J"],
    &["G", "L"],
    &["G", "R"],
    &["G", "N"],
    &["G", "J"],
    &["F", "L"],
    &["F", "R"],
    &["F", "J"],
    &["F", "N"],
    &["V", "R"],
    &["V", "J"],
    &["S", "P"],
    &["S", "T"],
    &["S", "K"],
    &["S", "L"],
    &["S", "M"],
    &["S", "N"],
    &["S", "V"],
    &["S", "J"],
    &["SJ", "L"],
    &["M", "J"],
    &["N", "J"],
    &["H", "J"],
    &["H", "V"],
    &["S", "P", "L"],
    &["S", "P", "R"],
    &["S", "P", "J"],
    &["S", "T", "R"],
    &["S", "K", "R"],
    &["S", "K", "L"],
    &["S", "K", "V"],
    &["S", "K", "J"],
];

/// Check if a phoneme, or a space-joined syllable, carries stress (digit 1, 2 or 3)
pub fn is_stressed(unit: &str) -> bool {
    unit.chars().any(|c| matches!(c, '1'..='3'))
}

/// Strip stress digits 0-3 from both ends of a phoneme
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_matches(|c| matches!(c, '0'..='3'))
}

/// Check if a phoneme (or a letter, in orthographic mode) is a valid syllable nucleus
pub fn is_nucleus(symbol: &str, orthographic: bool) -> bool {
    if orthographic {
        let letter = strip_stress(symbol).to_lowercase();
        ORTHOGRAPHIC_NUCLEI.contains(&letter.as_str())
    } else {
        PHONEMIC_NUCLEI.contains(&strip_stress(symbol))
    }
}

/// Check if a written string contains at least one vowel letter
pub fn has_nucleus(text: &str) -> bool {
    text.chars()
        .any(|c| is_nucleus(c.encode_utf8(&mut [0; 4]), true))
}

/// Compare two phoneme sequences position by position, ignoring stress.
///
/// Only the overlapping prefix is compared when the lengths differ.
pub fn phonemes_match<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| strip_stress(x.as_ref()) == strip_stress(y.as_ref()))
}

fn is_legal_onset(cluster: &[&str]) -> bool {
    match cluster {
        [] => true,
        [single] => strip_stress(single) != "NG",
        _ => ONSET_CLUSTERS.iter().any(|onset| {
            onset.len() == cluster.len()
                && onset
                    .iter()
                    .zip(cluster)
                    .all(|(a, b)| *a == strip_stress(b))
        }),
    }
}

/// Index where the syllable after `nucleus` starts, given the next nucleus.
///
/// The longest legal onset at the end of the intervening cluster goes to the
/// next syllable.
fn onset_boundary(phonemes: &[&str], nucleus: usize, next: usize) -> usize {
    let cluster = &phonemes[nucleus + 1..next];
    (1..=cluster.len())
        .rev()
        .find(|&k| is_legal_onset(&cluster[cluster.len() - k..]))
        .map_or(next, |k| next - k)
}

/// Split one word's nofabet pronunciation into syllables, one per nucleus
pub fn syllabify_word(pronunciation: &str) -> Vec<Syllable> {
    let phonemes: Vec<&str> = pronunciation.split_whitespace().collect();
    if phonemes.is_empty() {
        return Vec::new();
    }

    let nuclei: Vec<usize> = phonemes
        .iter()
        .enumerate()
        .filter(|(_, p)| is_nucleus(p, false))
        .map(|(i, _)| i)
        .collect();

    if nuclei.is_empty() {
        debug!("No nucleus in {:?}, keeping it as one syllable", pronunciation);
        return vec![Syllable::from(phonemes)];
    }

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut start = 0;
    for (i, &nucleus) in nuclei.iter().enumerate() {
        let end = match nuclei.get(i + 1) {
            Some(&next) => onset_boundary(&phonemes, nucleus, next),
            None => phonemes.len(),
        };
        syllables.push(Syllable::from(phonemes[start..end].to_vec()));
        start = end;
    }
    syllables
}

/// Syllabify each word pronunciation of a verse line and concatenate the syllables
pub fn syllabify_line<S: AsRef<str>>(pronunciations: &[S]) -> Vec<Syllable> {
    pronunciations
        .iter()
        .flat_map(|word| syllabify_word(word.as_ref()))
        .collect()
}

/// Syllabify a line given as (word, pronunciation) pairs
pub fn syllabify(words: &[(String, String)]) -> Vec<Syllable> {
    words
        .iter()
        .flat_map(|(_, pronunciation)| syllabify_word(pronunciation))
        .collect()
}

/// Flattened phonemes from the last stressed syllable to the end.
///
/// Returns `None` when no syllable carries stress.
pub fn find_last_stressed_syllable(syllables: &[Syllable]) -> Option<Vec<&str>> {
    let idx = syllables.iter().rposition(Syllable::is_stressed)?;
    Some(
        syllables[idx..]
            .iter()
            .flat_map(|s| s.phonemes.iter().map(String::as_str))
            .collect(),
    )
}

/// Drop the onset: everything from the first nucleus onward
pub fn remove_syllable_onset<S: AsRef<str>>(phonemes: &[S]) -> Option<&[S]> {
    match phonemes.iter().position(|p| is_nucleus(p.as_ref(), false)) {
        Some(idx) => Some(&phonemes[idx..]),
        None => {
            let joined: Vec<&str> = phonemes.iter().map(AsRef::as_ref).collect();
            debug!("No nucleus found in {:?}", joined);
            None
        }
    }
}

/// Nucleus and coda from the last stressed syllable onward, i.e. the rhyming part
pub fn find_syllable_rhyme(syllables: &[Syllable]) -> Option<Vec<&str>> {
    let stressed = find_last_stressed_syllable(syllables)?;
    remove_syllable_onset(&stressed).map(|rhyme| rhyme.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(raw: &[&[&str]]) -> Vec<Syllable> {
        raw.iter().map(|s| Syllable::from(s.to_vec())).collect()
    }

    #[test]
    fn test_stress_markers() {
        assert!(is_stressed("OAH1"));
        assert!(is_stressed("EH2"));
        assert!(is_stressed("S T AEH3 R"));
        assert!(!is_stressed("AX0"));
        assert!(!is_stressed("K"));
    }

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("UU1"), "UU");
        assert_eq!(strip_stress("AX0"), "AX");
        assert_eq!(strip_stress("RNX0"), "RNX");
        assert_eq!(strip_stress("KJ"), "KJ");
    }

    #[test]
    fn test_nucleus_sets() {
        assert!(is_nucleus("OAH1", false));
        assert!(is_nucleus("NX0", false));
        assert!(!is_nucleus("NG", false));
        assert!(is_nucleus("ø", true));
        assert!(is_nucleus("A", true));
        assert!(!is_nucleus("k", true));
        assert!(has_nucleus("fryd"));
        assert!(!has_nucleus("st"));
    }

    #[test]
    fn test_syllabify_word() {
        let result = syllabify_word("K L IH2 P AX0 S T AEH3 R K AX0");
        assert_eq!(
            result,
            syllables(&[&["K", "L", "IH2"], &["P", "AX0"], &["S", "T", "AEH3", "R"], &["K", "AX0"]])
        );
    }

    #[test]
    fn test_syllabify_keeps_illegal_onset_in_coda() {
        let result = syllabify_word("S AH2 N IH0 NG S T YY0 RS RT");
        assert_eq!(
            result,
            syllables(&[&["S", "AH2"], &["N", "IH0", "NG"], &["S", "T", "YY0", "RS", "RT"]])
        );
    }

    #[test]
    fn test_syllabify_line_counts() {
        assert_eq!(syllabify_line(&["K V AH2 S", "S OAH0 M", "K N II1 V"]).len(), 3);
        assert_eq!(
            syllabify_line(&["IH0", "D AEW2 KJ OE3 T", "F L EH2 N J AH0 N D AX0"]).len(),
            6
        );
        assert_eq!(
            syllabify_line(&["M OO1 T", "J OO1 S AX0", "T R EH2 N J AH0 N D AX0"]).len(),
            6
        );
    }

    #[test]
    fn test_word_without_nucleus_is_one_syllable() {
        let result = syllabify_word("S T");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].nucleus(), None);
        assert!(syllabify_word("   ").is_empty());
    }

    #[test]
    fn test_find_last_stressed_syllable() {
        let input = syllables(&[
            &["S", "T", "OEH3"],
            &["R", "AX0"],
            &["D", "YY1", "D"],
            &["J", "OO1", "R"],
            &["N", "AE2", "V"],
            &["N", "AX0", "S"],
            &["K", "AH0", "N"],
        ]);
        assert_eq!(
            find_last_stressed_syllable(&input),
            Some(vec!["N", "AE2", "V", "N", "AX0", "S", "K", "AH0", "N"])
        );
    }

    #[test]
    fn test_unstressed_sequence_has_no_tail() {
        let input = syllables(&[&["S", "OAH0", "M"], &["D", "AX0"]]);
        assert_eq!(find_last_stressed_syllable(&input), None);
        assert_eq!(find_syllable_rhyme(&input), None);
    }

    #[test]
    fn test_remove_syllable_onset() {
        assert_eq!(
            remove_syllable_onset(&["B", "R", "AH1", "N"]),
            Some(&["AH1", "N"][..])
        );
        assert_eq!(remove_syllable_onset(&["S", "T"]), None);
    }

    #[test]
    fn test_find_syllable_rhyme() {
        let input = syllables(&[&["EH1", "N", "D"], &["D", "AX0", "N"], &["B", "R", "AH1", "N"]]);
        assert_eq!(find_syllable_rhyme(&input), Some(vec!["AH1", "N"]));
    }

    #[test]
    fn test_phonemes_match_ignores_stress() {
        assert!(phonemes_match(&["EE2", "N"], &["EE1", "N"]));
        assert!(!phonemes_match(&["EE2", "N"], &["UU1", "N"]));
        // only the overlap is compared
        assert!(phonemes_match(&["IH3", "N"], &["IH3", "N", "D"]));
    }
}
