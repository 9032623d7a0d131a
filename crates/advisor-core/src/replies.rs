//! Canned advisor replies and the keyword rules that pick between them.

pub const WELCOME: &str = "Hi, I'm your AI insurance advisor. Tell me what you'd like to \
protect (your life, your home or your car) and I'll point you to the cover that fits.";

pub const LIFE_REPLY: &str = "Life insurance pays a lump sum or a regular income to the people \
who depend on you if you die during the policy term. Most people choose cover that would clear \
the mortgage and replace a few years of salary. Term cover is the most affordable option; \
whole-of-life cover costs more but never expires. Would you like a rough idea of how much cover \
you might need?";

pub const HOME_REPLY: &str = "Home insurance usually comes in two parts. Buildings cover protects \
the structure itself and is normally required by your mortgage lender. Contents cover protects \
your belongings, from furniture to laptops, against theft, fire and water damage. Many insurers \
offer both together at a discount. Are you a homeowner, or are you renting?";

pub const MOTOR_REPLY: &str = "For car insurance there are three main levels of cover. Third party \
only is the legal minimum. Third party, fire and theft adds protection for your own vehicle in \
those cases. Comprehensive covers damage to your own car too, and is often no more expensive. \
Your age, postcode, annual mileage and claims history all affect the price. Shall we go through \
what matters most to you?";

pub const GUIDANCE_REPLY: &str = "No problem, let's start with the basics. Most households look at \
three things first: life insurance to protect the people who rely on them, home and contents \
cover for where they live, and motor insurance if they drive. Tell me which of these sounds most \
relevant and I'll explain the options.";

pub const FALLBACK_REPLY: &str = "Thanks for your message. I can help with life insurance, home and \
contents cover, and car insurance. Could you tell me a little more about what you'd like to \
protect, so I can point you in the right direction?";

/// Which keyword group a message matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Life,
    Home,
    Motor,
    Guidance,
}

impl Topic {
    pub fn reply(self) -> &'static str {
        match self {
            Topic::Life => LIFE_REPLY,
            Topic::Home => HOME_REPLY,
            Topic::Motor => MOTOR_REPLY,
            Topic::Guidance => GUIDANCE_REPLY,
        }
    }
}

/// Keyword groups in priority order. First group with any substring hit wins.
const KEYWORD_GROUPS: &[(&[&str], Topic)] = &[
    (&["life"], Topic::Life),
    (&["home", "contents", "mortgage"], Topic::Home),
    (&["car", "motor"], Topic::Motor),
    (&["help", "where", "start"], Topic::Guidance),
];

/// Classify free text into a topic, case-insensitively.
pub fn topic_for(input: &str) -> Option<Topic> {
    let lowered = input.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, topic)| *topic)
}

/// Pick the canned reply for `input`. Pure and total: unmatched input,
/// including the empty string, gets the fallback.
pub fn select_reply(input: &str) -> &'static str {
    topic_for(input).map_or(FALLBACK_REPLY, Topic::reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_is_case_insensitive() {
        assert_eq!(select_reply("LIFE cover please"), LIFE_REPLY);
        assert_eq!(select_reply("Life"), LIFE_REPLY);
    }

    #[test]
    fn test_life_beats_later_groups() {
        assert_eq!(select_reply("life and car insurance"), LIFE_REPLY);
        assert_eq!(select_reply("car first, then life"), LIFE_REPLY);
        assert_eq!(select_reply("where do I start with life and home?"), LIFE_REPLY);
    }

    #[test]
    fn test_each_group() {
        assert_eq!(select_reply("my home"), HOME_REPLY);
        assert_eq!(select_reply("Contents of my flat"), HOME_REPLY);
        assert_eq!(select_reply("new mortgage"), HOME_REPLY);
        assert_eq!(select_reply("I want car insurance"), MOTOR_REPLY);
        assert_eq!(select_reply("Motorbike"), MOTOR_REPLY);
        assert_eq!(select_reply("help!"), GUIDANCE_REPLY);
        assert_eq!(select_reply("Where should I begin"), GUIDANCE_REPLY);
    }

    #[test]
    fn test_home_beats_motor() {
        assert_eq!(select_reply("car and home"), HOME_REPLY);
    }

    #[test]
    fn test_substring_match() {
        // "scary" contains "car"; matching is plain substring, not word-based
        assert_eq!(select_reply("that's scary"), MOTOR_REPLY);
        assert_eq!(topic_for("restart"), Some(Topic::Guidance));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(select_reply(""), FALLBACK_REPLY);
        assert_eq!(select_reply("   "), FALLBACK_REPLY);
        assert_eq!(select_reply("what about pets?"), FALLBACK_REPLY);
        assert_eq!(topic_for("travel"), None);
    }

    #[test]
    fn test_deterministic() {
        let input = "Is MOTOR cover expensive?";
        assert_eq!(select_reply(input), select_reply(input));
    }
}
