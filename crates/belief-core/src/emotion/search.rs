//! Emotion search and the emotion-likeness detector.

use super::list::EMOTIONS;
use super::model::Emotion;

/// Searches the reference list by substring.
///
/// Name matches rank before synonym matches; both tiers preserve source
/// order. A blank query returns the leading `limit` entries unfiltered, which
/// is also what [`common_emotions`] exposes for the default suggestion view.
pub fn search_emotions(query: &str, limit: usize) -> Vec<&'static Emotion> {
    let query = query.trim();
    if query.is_empty() {
        return EMOTIONS.iter().take(limit).collect();
    }

    let lower_query = query.to_lowercase();
    let mut name_matches = Vec::new();
    let mut synonym_matches = Vec::new();

    for emotion in EMOTIONS {
        if emotion.name_matches(&lower_query) {
            name_matches.push(emotion);
        } else if emotion.synonym_matches(&lower_query) {
            synonym_matches.push(emotion);
        }
    }

    name_matches.extend(synonym_matches);
    name_matches.truncate(limit);
    name_matches
}

/// The default suggestion set: the first `limit` entries of the canonical
/// list, order preserved.
pub fn common_emotions(limit: usize) -> Vec<&'static Emotion> {
    EMOTIONS.iter().take(limit).collect()
}

/// Judges whether free text "looks like" an emotion.
///
/// The candidate is matched by substring against every reference name and
/// synonym. When the text contains a colon, only the segment after the last
/// colon is checked: the part before it is a body-part scope such as
/// `Chest: fear`, not emotion text. Dictionary membership is required; short
/// unrecognized words are not accepted.
pub fn looks_like_emotion(text: &str) -> bool {
    let candidate = match text.rsplit_once(':') {
        Some((_, tail)) => tail,
        None => text,
    };
    let candidate = candidate.trim().to_lowercase();
    if candidate.is_empty() {
        return false;
    }

    EMOTIONS.iter().any(|emotion| {
        candidate.contains(&emotion.name.to_lowercase())
            || emotion
                .synonyms
                .iter()
                .any(|synonym| candidate.contains(&synonym.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_leading_slice_in_source_order() {
        let results = search_emotions("", 5);
        let names: Vec<&str> = results.iter().map(|e| e.name).collect();
        assert_eq!(names, ["Happy", "Sad", "Angry", "Afraid", "Anxious"]);
        assert_eq!(common_emotions(5).len(), 5);
    }

    #[test]
    fn name_matches_rank_before_synonym_matches() {
        // "fear" only occurs in synonyms ("fearful"), so Afraid surfaces
        // through the synonym tier.
        let results = search_emotions("fear", 20);
        let names: Vec<&str> = results.iter().map(|e| e.name).collect();
        assert!(names.contains(&"Afraid"));

        // "sad" is a name match for Sad, which must lead the results.
        let results = search_emotions("sad", 20);
        let names: Vec<&str> = results.iter().map(|e| e.name).collect();
        assert_eq!(names[0], "Sad");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(search_emotions("zzzzqqq", 10).is_empty());
    }

    #[test]
    fn limit_truncates_results() {
        assert_eq!(search_emotions("a", 3).len(), 3);
    }

    #[test]
    fn detector_matches_names_and_synonyms() {
        assert!(looks_like_emotion("fear"));
        assert!(looks_like_emotion("I feel so anxious about this"));
        assert!(looks_like_emotion("terrified"));
        assert!(!looks_like_emotion("my boss"));
        assert!(!looks_like_emotion(""));
    }

    #[test]
    fn detector_checks_segment_after_last_colon() {
        assert!(looks_like_emotion("Chest: fear"));
        // The body-part scope alone must not satisfy the detector.
        assert!(!looks_like_emotion("Chest:"));
        assert!(looks_like_emotion("Chest: tight: scared"));
    }

    // Documents the rejected word-count heuristic: a short unrecognized
    // string is NOT treated as an emotion just because it is one or two
    // words long.
    #[test]
    fn short_unrecognized_words_are_rejected() {
        assert!(!looks_like_emotion("wobbly"));
        assert!(!looks_like_emotion("quite wobbly"));
    }
}
