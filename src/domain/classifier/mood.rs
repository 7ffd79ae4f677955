//! Emoji (mood) derivation

/// Closed set of emotional categories an entry can be shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Coping,
    Fear,
    Anxiety,
    Shame,
    Anger,
    Fatigue,
    Reflective,
    Calm,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Coping => "😊",
            Mood::Fear => "😨",
            Mood::Anxiety => "😰",
            Mood::Shame => "😢",
            Mood::Anger => "😤",
            Mood::Fatigue => "😔",
            Mood::Reflective => "🤔",
            Mood::Calm => "😌",
        }
    }
}

/// One keyword rule: any stem found in the text selects `mood`
struct MoodRule {
    stems: &'static [&'static str],
    mood: Mood,
}

/// Priority order: the first rule with a matching stem wins, even when a
/// later rule also matches.
const MOOD_RULES: &[MoodRule] = &[
    MoodRule {
        stems: &[
            "справ", "контрол", "смог", "coped", "cope", "in control", "under control",
            "managed", "resisted", "proud",
        ],
        mood: Mood::Coping,
    },
    MoodRule {
        stems: &["страх", "боюсь", "пани", "fear", "afraid", "scared", "panic"],
        mood: Mood::Fear,
    },
    MoodRule {
        stems: &[
            "тревог", "беспоко", "волну", "игра", "сыгра", "anxi", "worr", "nervous", "urge",
            "gambl", "play",
        ],
        mood: Mood::Anxiety,
    },
    MoodRule {
        stems: &["стыд", "вин", "сожале", "shame", "asham", "guilt", "regret"],
        mood: Mood::Shame,
    },
    MoodRule {
        stems: &[
            "злость", "раздраж", "бесит", "angry", "anger", "irritat", "annoy", "furious",
        ],
        mood: Mood::Anger,
    },
    MoodRule {
        stems: &[
            "устал", "скуч", "апати", "долг", "tired", "exhaust", "bored", "apath", "debt",
        ],
        mood: Mood::Fatigue,
    },
    MoodRule {
        stems: &["думаю", "размышл", "хоч", "i think", "thinking", "wonder", "want"],
        mood: Mood::Reflective,
    },
];

/// Pick a mood for `text` by case-insensitive substring search.
///
/// Falls back to [`Mood::Calm`] when nothing matches.
pub fn derive_mood(text: &str) -> Mood {
    let lower = text.to_lowercase();

    MOOD_RULES
        .iter()
        .find(|rule| rule.stems.iter().any(|stem| lower.contains(stem)))
        .map(|rule| rule.mood)
        .unwrap_or(Mood::Calm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_calm() {
        assert_eq!(derive_mood(""), Mood::Calm);
        assert_eq!(derive_mood("Sat in the park"), Mood::Calm);
    }

    #[test]
    fn test_each_category_reachable() {
        assert_eq!(derive_mood("I coped with it"), Mood::Coping);
        assert_eq!(derive_mood("I was afraid"), Mood::Fear);
        assert_eq!(derive_mood("Strong urge"), Mood::Anxiety);
        assert_eq!(derive_mood("So much guilt"), Mood::Shame);
        assert_eq!(derive_mood("Really annoyed"), Mood::Anger);
        assert_eq!(derive_mood("Just tired"), Mood::Fatigue);
        assert_eq!(derive_mood("I wonder why"), Mood::Reflective);
    }

    #[test]
    fn test_first_rule_wins() {
        // Fear and coping both match; coping is listed first.
        assert_eq!(derive_mood("I was scared but I managed"), Mood::Coping);
        // Anxiety outranks fatigue regardless of word order.
        assert_eq!(derive_mood("Tired of debt, worried all day"), Mood::Anxiety);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(derive_mood("PANIC"), Mood::Fear);
        assert_eq!(derive_mood("СТЫДНО"), Mood::Shame);
    }

    #[test]
    fn test_russian_stems() {
        assert_eq!(derive_mood("Я справился"), Mood::Coping);
        assert_eq!(derive_mood("Хочу сыграть"), Mood::Anxiety);
        assert_eq!(derive_mood("Думаю о деньгах"), Mood::Reflective);
    }

    #[test]
    fn test_deterministic() {
        let text = "Worried about money and a bit ashamed";
        let first = derive_mood(text);
        for _ in 0..10 {
            assert_eq!(derive_mood(text), first);
        }
    }
}
