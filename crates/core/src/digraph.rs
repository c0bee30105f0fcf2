//! Repair of ASCII-typed umlauts and eszett
//!
//! Learners without a German keyboard type `ae`, `oe`, `ue` for `ä`, `ö`, `ü`
//! and an uppercase `B` for `ß`. [`normalize_digraphs`] resolves those
//! surrogates under context rules strict enough to leave genuine vowel pairs
//! (`Bauer`, `Steuer`) alone.
//!
//! The digraph rules form an ordered table, [`DIGRAPH_RULES`]. Each rule is a
//! single left-to-right pass of non-overlapping replacements over the output
//! of the previous rule. A rule fires on its two-letter pattern when the
//! pattern starts a word (the previous character is not alphanumeric) or
//! directly follows an ASCII consonant of the rule's trigger case. A pattern
//! after a vowel never fires, so `zurueck` becomes `zurück` while `Bauer`
//! stays as typed.
//!
//! After all digraph rules, a final pass turns `B` into `ß` when it follows a
//! lowercase vowel and ends the word or precedes another lowercase vowel.

use crate::normalizers::Normalizer;

/// Case of the consonant that may trigger a digraph rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Word boundary or a lowercase consonant
    Lower,
    /// Word boundary or an uppercase consonant
    Upper,
}

impl Trigger {
    fn accepts(self, ch: char) -> bool {
        match self {
            Trigger::Lower => is_consonant(ch),
            Trigger::Upper => ch.is_ascii_uppercase() && is_consonant(ch.to_ascii_lowercase()),
        }
    }
}

/// One `(pattern, guard, replacement)` entry of the digraph table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigraphRule {
    /// The two typed letters
    pub pattern: [char; 2],
    /// Which consonants (besides a word boundary) may precede the pattern
    pub trigger: Trigger,
    /// Character written in place of the pattern
    pub replacement: char,
}

const fn rule(first: char, second: char, trigger: Trigger, replacement: char) -> DigraphRule {
    DigraphRule {
        pattern: [first, second],
        trigger,
        replacement,
    }
}

/// Digraph rules in application order.
///
/// The output case follows the first typed letter, except that a title-case
/// pair after a lowercase consonant (`fUehren`) is read as a stray shift and
/// yields a lowercase umlaut.
pub const DIGRAPH_RULES: [DigraphRule; 24] = [
    // ae / oe / ue
    rule('a', 'e', Trigger::Lower, 'ä'),
    rule('o', 'e', Trigger::Lower, 'ö'),
    rule('u', 'e', Trigger::Lower, 'ü'),
    // AE / OE / UE after uppercase consonants (TUER)
    rule('A', 'E', Trigger::Upper, 'Ä'),
    rule('O', 'E', Trigger::Upper, 'Ö'),
    rule('U', 'E', Trigger::Upper, 'Ü'),
    // lowercase pair after uppercase consonant (Tuer)
    rule('a', 'e', Trigger::Upper, 'ä'),
    rule('o', 'e', Trigger::Upper, 'ö'),
    rule('u', 'e', Trigger::Upper, 'ü'),
    // AE / OE / UE after lowercase consonants (bAE)
    rule('A', 'E', Trigger::Lower, 'Ä'),
    rule('O', 'E', Trigger::Lower, 'Ö'),
    rule('U', 'E', Trigger::Lower, 'Ü'),
    // title-case pair after uppercase consonant or at word start (Ueberfahrt)
    rule('A', 'e', Trigger::Upper, 'Ä'),
    rule('O', 'e', Trigger::Upper, 'Ö'),
    rule('U', 'e', Trigger::Upper, 'Ü'),
    // title-case pair after lowercase consonant (fUehren)
    rule('A', 'e', Trigger::Lower, 'ä'),
    rule('O', 'e', Trigger::Lower, 'ö'),
    rule('U', 'e', Trigger::Lower, 'ü'),
    // trailing capital after lowercase consonant (tuEr, hoEren)
    rule('a', 'E', Trigger::Lower, 'ä'),
    rule('o', 'E', Trigger::Lower, 'ö'),
    rule('u', 'E', Trigger::Lower, 'ü'),
    // trailing capital after uppercase consonant (TuEr)
    rule('a', 'E', Trigger::Upper, 'ä'),
    rule('o', 'E', Trigger::Upper, 'ö'),
    rule('u', 'E', Trigger::Upper, 'ü'),
];

/// Typed input and the character it produces, for help screens
pub const CHARACTER_MAPPINGS: [(&str, &str); 7] = [
    ("ae", "ä"),
    ("oe", "ö"),
    ("ue", "ü"),
    ("Ae", "Ä"),
    ("Oe", "Ö"),
    ("Ue", "Ü"),
    ("B (after vowel)", "ß"),
];

pub fn character_mappings() -> &'static [(&'static str, &'static str)] {
    &CHARACTER_MAPPINGS
}

/// Whether the text already contains any German special character
pub fn has_german_chars(text: &str) -> bool {
    text.chars().any(|c| matches!(c, 'ä' | 'ö' | 'ü' | 'ß' | 'Ä' | 'Ö' | 'Ü'))
}

fn is_consonant(ch: char) -> bool {
    matches!(
        ch,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 'r' | 's'
            | 't' | 'v' | 'w' | 'x' | 'y' | 'z'
    )
}

fn is_lowercase_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ö' | 'ü')
}

/// Unicode-aware: `ß` continues a word and `_` ends one, unlike a regex `\b`
fn at_word_start(chars: &[char], index: usize) -> bool {
    index == 0 || !chars[index - 1].is_alphanumeric()
}

fn pattern_at(chars: &[char], index: usize, pattern: [char; 2]) -> bool {
    chars.get(index) == Some(&pattern[0]) && chars.get(index + 1) == Some(&pattern[1])
}

fn apply_rule(chars: &[char], rule: &DigraphRule) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if at_word_start(chars, i) && pattern_at(chars, i, rule.pattern) {
            out.push(rule.replacement);
            i += 2;
            continue;
        }
        if rule.trigger.accepts(chars[i]) && pattern_at(chars, i + 1, rule.pattern) {
            out.push(chars[i]);
            out.push(rule.replacement);
            i += 3;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

fn eszett_follows(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(ch) => !ch.is_alphanumeric() || is_lowercase_vowel(ch),
    }
}

fn apply_eszett(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if ch == 'B'
                && i > 0
                && is_lowercase_vowel(chars[i - 1])
                && eszett_follows(chars.get(i + 1).copied())
            {
                'ß'
            } else {
                ch
            }
        })
        .collect()
}

/// Resolve ASCII umlaut and eszett surrogates in user-typed text
///
/// Total over all inputs; the empty string maps to itself and already
/// correct text is returned unchanged.
pub fn normalize_digraphs(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = text.chars().collect();
    for rule in &DIGRAPH_RULES {
        chars = apply_rule(&chars, rule);
    }
    apply_eszett(&chars).into_iter().collect()
}

/// Pipeline adapter for [`normalize_digraphs`]
#[derive(Clone, Default)]
pub struct DigraphNormalizer;

impl Normalizer for DigraphNormalizer {
    fn normalize(&self, input: &str) -> String {
        normalize_digraphs(input)
    }

    fn name(&self) -> &str {
        "digraph"
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![("rules".to_string(), DIGRAPH_RULES.len().to_string())]
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}
