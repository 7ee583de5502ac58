/// Offline placeholder for the AI assistant page. No model is wired in;
/// replies are canned, with an emergency redirect for questions that sound
/// like an active incident rather than a learning question.
const EMERGENCY_WORDS: [&str; 6] = [
    "fire",
    "earthquake",
    "flood",
    "smoke",
    "injured",
    "trapped",
];

pub fn is_emergency_question(question: &str) -> bool {
    let lower = question.to_lowercase();
    EMERGENCY_WORDS.iter().any(|w| lower.contains(w))
}

pub fn placeholder_reply(question: &str) -> String {
    if is_emergency_question(question) {
        return "If this is happening right now, open the Emergency SOS page and alert an \
                adult immediately. For practice questions, try the Learning Modules."
            .to_string();
    }

    format!(
        "This is a placeholder answer for: \"{}\".\nOnce the safety assistant is wired up, \
         I'll walk you through this properly.",
        question.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_keywords_trigger_sos_redirect() {
        assert!(is_emergency_question("There is SMOKE in the corridor"));
        let reply = placeholder_reply("help, fire in the lab");
        assert!(reply.contains("Emergency SOS"));
    }

    #[test]
    fn ordinary_questions_get_the_placeholder() {
        assert!(!is_emergency_question("what is an assembly point?"));
        let reply = placeholder_reply("what is an assembly point?");
        assert!(reply.contains("assembly point"));
        assert!(reply.contains("placeholder"));
    }
}
