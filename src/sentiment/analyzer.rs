//! Lexicon-based polarity and subjectivity scoring
//!
//! Scores a message by averaging the lexicon weights of the words it
//! contains. Negators flip the next scored word, intensifiers scale it, and
//! both expire after a couple of unmatched words so "not at all that good"
//! reads differently from "not good".

use super::lexicon;

/// How many unmatched words a negator or intensifier survives
const MODIFIER_WINDOW: u8 = 2;

/// Polarity multiplier applied under negation. "not good" lands mildly
/// negative rather than fully inverted.
const NEGATION_FACTOR: f64 = -0.5;

/// Aggregate scores for one message
#[derive(Debug, Clone, Copy, Default)]
pub struct Scores {
    /// Negative to positive, in [-1.0, 1.0]
    pub polarity: f64,
    /// Factual to opinion-based, in [0.0, 1.0]
    pub subjectivity: f64,
}

/// Score `text` against the lexicon.
///
/// Unknown words contribute nothing; a message with no scored words comes
/// back all zeros.
#[must_use]
pub fn analyze(text: &str) -> Scores {
    let normalized = text.to_lowercase().replace('\u{2019}', "'");
    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut matched = 0_usize;
    let mut negate_remaining = 0_u8;
    let mut boost: Option<(f64, u8)> = None;

    for token in normalized
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
    {
        if lexicon::is_negator(token) {
            negate_remaining = MODIFIER_WINDOW;
            continue;
        }
        if let Some(factor) = lexicon::intensifier(token) {
            boost = Some((factor, MODIFIER_WINDOW));
            continue;
        }
        if let Some(entry) = lexicon::lookup(token) {
            let factor = boost.take().map_or(1.0, |(f, _)| f);
            let mut polarity = entry.polarity * factor;
            let subjectivity = (entry.subjectivity * factor).min(1.0);
            if negate_remaining > 0 {
                polarity *= NEGATION_FACTOR;
                negate_remaining = 0;
            }
            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity;
            matched += 1;
        } else {
            negate_remaining = negate_remaining.saturating_sub(1);
            if let Some((factor, window)) = boost {
                boost = (window > 1).then_some((factor, window - 1));
            }
        }
    }

    if matched == 0 {
        return Scores::default();
    }
    #[allow(clippy::cast_precision_loss)]
    let count = matched as f64;
    Scores {
        polarity: polarity_sum / count,
        subjectivity: subjectivity_sum / count,
    }
}
