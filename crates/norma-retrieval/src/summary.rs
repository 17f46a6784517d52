//! Optional presentation step: pick the single sentence of a winning
//! fragment closest to the question. Not part of ranking; `query` never
//! calls it. Overlap is plain token intersection, no embedding calls.

use std::collections::HashSet;

use norma_index::normalizer::normalize;

/// The fragment sentence sharing the most normalized tokens with the
/// question, or `None` when no sentence shares any.
pub fn pick_sentence(fragment: &str, question: &str) -> Option<String> {
    let question_tokens: HashSet<String> =
        normalize(question).split_whitespace().map(String::from).collect();
    if question_tokens.is_empty() {
        return None;
    }

    let mut best: Option<(usize, &str)> = None;
    for sentence in split_sentences(fragment) {
        let normalized = normalize(sentence);
        let overlap = normalized
            .split_whitespace()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter(|t| question_tokens.contains(*t))
            .count();
        // Strict comparison: the earliest best sentence wins ties.
        if overlap > 0 && best.map_or(true, |(b, _)| overlap > b) {
            best = Some((overlap, sentence));
        }
    }
    best.map(|(_, s)| s.trim().to_string())
}

fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
