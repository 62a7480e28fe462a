//! Word tables for the analyzer
//!
//! Weights follow the usual opinion-lexicon convention: polarity in
//! [-1.0, 1.0], subjectivity in [0.0, 1.0]. All tables are sorted by word so
//! lookups can binary search.

/// Lexicon entry for a scored word
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("absurd", -0.5, 1.0),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.6, 1.0),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boring", -0.8, 1.0),
    ("brilliant", 0.9, 0.9),
    ("broken", -0.4, 0.4),
    ("calm", 0.3, 0.7),
    ("cool", 0.35, 0.65),
    ("crazy", -0.6, 0.9),
    ("cruel", -0.8, 0.9),
    ("cute", 0.5, 1.0),
    ("delicious", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("depressed", -0.7, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("dull", -0.4, 0.7),
    ("dumb", -0.6, 0.8),
    ("easy", 0.4, 0.8),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.75),
    ("exciting", 0.5, 0.9),
    ("fail", -0.5, 0.5),
    ("failed", -0.5, 0.5),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.4, 0.5),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.7, 0.9),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.9, 1.0),
    ("great", 0.8, 0.75),
    ("gross", -0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.8, 0.9),
    ("hates", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.4, 0.6),
    ("impressive", 0.9, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("joy", 0.8, 0.8),
    ("kind", 0.6, 0.9),
    ("lame", -0.5, 0.8),
    ("like", 0.3, 0.4),
    ("lonely", -0.6, 1.0),
    ("lost", -0.4, 0.4),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.8, 0.9),
    ("loves", 0.5, 0.6),
    ("mad", -0.6, 0.9),
    ("miserable", -1.0, 1.0),
    ("nasty", -0.9, 1.0),
    ("nice", 0.6, 1.0),
    ("okay", 0.2, 0.5),
    ("outstanding", 0.9, 0.9),
    ("pathetic", -1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.7, 0.8),
    ("poor", -0.4, 0.6),
    ("proud", 0.8, 0.9),
    ("sad", -0.5, 1.0),
    ("scared", -0.6, 1.0),
    ("sick", -0.7, 0.9),
    ("silly", -0.3, 0.9),
    ("slow", -0.3, 0.4),
    ("smart", 0.6, 0.8),
    ("smooth", 0.4, 0.6),
    ("sorry", -0.5, 1.0),
    ("stupid", -0.8, 0.9),
    ("sucks", -0.7, 0.9),
    ("superb", 1.0, 1.0),
    ("sweet", 0.35, 0.65),
    ("terrible", -1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("thanks", 0.4, 0.5),
    ("tired", -0.4, 0.8),
    ("ugh", -0.4, 0.9),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 1.0),
    ("upset", -0.6, 0.9),
    ("useless", -0.5, 0.6),
    ("weird", -0.3, 0.9),
    ("well", 0.3, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.6, 0.7),
    ("worst", -1.0, 1.0),
    ("worthless", -0.6, 0.6),
    ("wow", 0.4, 0.9),
    ("wrong", -0.5, 0.7),
];

/// Words that flip the polarity of the next scored word
const NEGATORS: &[&str] = &[
    "ain't",
    "aren't",
    "can't",
    "cannot",
    "couldn't",
    "didn't",
    "doesn't",
    "don't",
    "isn't",
    "neither",
    "never",
    "no",
    "nobody",
    "none",
    "not",
    "nothing",
    "shouldn't",
    "wasn't",
    "weren't",
    "won't",
    "wouldn't",
];

/// (word, boost) - scales the next scored word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("completely", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.35),
    ("super", 1.4),
    ("totally", 1.3),
    ("truly", 1.3),
    ("utterly", 1.5),
    ("very", 1.3),
];

pub fn lookup(word: &str) -> Option<Entry> {
    LEXICON
        .binary_search_by(|(w, _, _)| w.cmp(&word))
        .ok()
        .map(|i| {
            let (_, polarity, subjectivity) = LEXICON[i];
            Entry {
                polarity,
                subjectivity,
            }
        })
}

pub fn is_negator(word: &str) -> bool {
    NEGATORS.binary_search(&word).is_ok()
}

pub fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .binary_search_by(|(w, _)| w.cmp(&word))
        .ok()
        .map(|i| INTENSIFIERS[i].1)
}
