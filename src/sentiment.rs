//! Sentiment analysis for chat messages
//!
//! A small lexicon-based analyzer. Nothing statistical: word weights,
//! negation, and intensifiers, averaged over the message. Good enough to
//! drive the mood readout in the chat reply.

mod analyzer;
mod lexicon;

pub use analyzer::{analyze, Scores};

use crate::protocol::Sentiment;

/// Reply sent when the incoming message is empty or all whitespace
pub const EMPTY_INPUT_REPLY: &str = "Please enter a message to analyze.";

/// Polarity above this reads as positive
const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity below this reads as negative
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Bucket a polarity score into a mood label.
#[must_use]
pub fn classify(polarity: f64) -> Sentiment {
    if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Build the full chat reply for `message`: mood label, raw scores, and a
/// short explanation of what the scores mean.
#[must_use]
pub fn respond(message: &str) -> (String, Sentiment) {
    if message.trim().is_empty() {
        return (EMPTY_INPUT_REPLY.to_string(), Sentiment::Neutral);
    }

    let scores = analyze(message);
    let sentiment = classify(scores.polarity);
    let label = sentiment.label().to_uppercase();
    let polarity = scores.polarity;
    let subjectivity = scores.subjectivity;
    let reply = format!(
        "Your mood: {label}\n\
         \n\
         Sentiment Scores:\n\
         \u{2022} Polarity: {polarity:.3} (range: -1.0 to 1.0)\n\
         \u{2022} Subjectivity: {subjectivity:.3} (range: 0.0 to 1.0)\n\
         \n\
         Explanation:\n\
         \u{2022} Polarity measures how positive/negative your message is\n\
         \u{2022} Subjectivity measures how opinion-based vs factual your message is"
    );
    (reply, sentiment)
}
