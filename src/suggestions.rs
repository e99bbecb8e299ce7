use crate::consts;

pub fn parse_suggestions(raw_text: &str) -> Vec<String> {
    let lines = raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut questions: Vec<String> = Vec::new();
    for line in lines {
        // Lines that do not open with a numbered item are headers or
        // chatter, but only while the list is still being collected.
        let numbered = line.chars().take(2).any(|c| c.is_numeric());
        if !numbered && questions.len() < consts::MAX_SUGGESTIONS {
            continue;
        }

        // Strip the list prefix ("1.", "2)", ...) up to the first letter.
        // The scan stops after the leading characters; a line with no
        // letter there is kept whole.
        let mut cleaned = line;
        for (pos, (idx, ch)) in line.char_indices().enumerate() {
            if ch.is_alphabetic() {
                cleaned = &line[idx..];
                break;
            }
            if pos > 5 {
                break;
            }
        }

        if cleaned.contains('?') {
            questions.push(cleaned.trim().to_string());
        } else if cleaned.chars().count() > 10 {
            questions.push(cleaned.trim().to_string());
        }
    }

    questions.truncate(consts::MAX_SUGGESTIONS);
    if questions.is_empty() {
        return consts::FALLBACK_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }
    questions
}
