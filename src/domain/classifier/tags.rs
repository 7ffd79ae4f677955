//! Tag derivation

use crate::domain::entry::MAX_TAGS;
use crate::domain::Locale;

/// Fixed tag vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Casino,
    Betting,
    UrgeToGamble,
    Winning,
    Losing,
    Debt,
    Money,
    Shame,
    Guilt,
    Anxiety,
    Fear,
    Family,
    Loneliness,
    Boredom,
    Fatigue,
    Stress,
    Work,
    Home,
    Outdoors,
}

impl Tag {
    /// Display label stored on entries
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Tag::Casino => "Casino",
                Tag::Betting => "Betting",
                Tag::UrgeToGamble => "Urge to gamble",
                Tag::Winning => "Winning",
                Tag::Losing => "Losing",
                Tag::Debt => "Debt",
                Tag::Money => "Money",
                Tag::Shame => "Shame",
                Tag::Guilt => "Guilt",
                Tag::Anxiety => "Anxiety",
                Tag::Fear => "Fear",
                Tag::Family => "Family",
                Tag::Loneliness => "Loneliness",
                Tag::Boredom => "Boredom",
                Tag::Fatigue => "Fatigue",
                Tag::Stress => "Stress",
                Tag::Work => "Work",
                Tag::Home => "At home",
                Tag::Outdoors => "Outdoors",
            },
            Locale::Ru => match self {
                Tag::Casino => "Казино",
                Tag::Betting => "Ставки",
                Tag::UrgeToGamble => "Желание играть",
                Tag::Winning => "Выигрыш",
                Tag::Losing => "Проигрыш",
                Tag::Debt => "Долги",
                Tag::Money => "Деньги",
                Tag::Shame => "Стыд",
                Tag::Guilt => "Вина",
                Tag::Anxiety => "Тревога",
                Tag::Fear => "Страх",
                Tag::Family => "Семья",
                Tag::Loneliness => "Одиночество",
                Tag::Boredom => "Скука",
                Tag::Fatigue => "Усталость",
                Tag::Stress => "Стресс",
                Tag::Work => "Работа",
                Tag::Home => "Дома",
                Tag::Outdoors => "На улице",
            },
        }
    }
}

/// Keyword stem to tag, in the order tags are collected.
/// Several stems may share a tag.
const TAG_RULES: &[(&str, Tag)] = &[
    ("казино", Tag::Casino),
    ("casino", Tag::Casino),
    ("ставк", Tag::Betting),
    ("bet", Tag::Betting),
    ("wager", Tag::Betting),
    ("bookmaker", Tag::Betting),
    ("игр", Tag::UrgeToGamble),
    ("сыгра", Tag::UrgeToGamble),
    ("gambl", Tag::UrgeToGamble),
    ("urge", Tag::UrgeToGamble),
    ("slot", Tag::UrgeToGamble),
    ("poker", Tag::UrgeToGamble),
    ("выигр", Tag::Winning),
    ("win", Tag::Winning),
    ("jackpot", Tag::Winning),
    ("проигр", Tag::Losing),
    ("lost", Tag::Losing),
    ("lose", Tag::Losing),
    ("losing", Tag::Losing),
    ("loss", Tag::Losing),
    ("долг", Tag::Debt),
    ("debt", Tag::Debt),
    ("денег", Tag::Money),
    ("money", Tag::Money),
    ("cash", Tag::Money),
    ("займ", Tag::Debt),
    ("loan", Tag::Debt),
    ("credit", Tag::Debt),
    ("стыд", Tag::Shame),
    ("shame", Tag::Shame),
    ("asham", Tag::Shame),
    ("вин", Tag::Guilt),
    ("guilt", Tag::Guilt),
    ("тревог", Tag::Anxiety),
    ("беспоко", Tag::Anxiety),
    ("anxi", Tag::Anxiety),
    ("worr", Tag::Anxiety),
    ("страх", Tag::Fear),
    ("fear", Tag::Fear),
    ("afraid", Tag::Fear),
    ("scared", Tag::Fear),
    ("семь", Tag::Family),
    ("жен", Tag::Family),
    ("муж", Tag::Family),
    ("family", Tag::Family),
    ("wife", Tag::Family),
    ("husband", Tag::Family),
    ("kids", Tag::Family),
    ("одиноч", Tag::Loneliness),
    ("lonel", Tag::Loneliness),
    ("alone", Tag::Loneliness),
    ("скуч", Tag::Boredom),
    ("bored", Tag::Boredom),
    ("boring", Tag::Boredom),
    ("устал", Tag::Fatigue),
    ("tired", Tag::Fatigue),
    ("exhausted", Tag::Fatigue),
    ("стресс", Tag::Stress),
    ("stress", Tag::Stress),
    ("работ", Tag::Work),
    ("work", Tag::Work),
    ("office", Tag::Work),
    ("boss", Tag::Work),
    ("дом", Tag::Home),
    ("home", Tag::Home),
    ("couch", Tag::Home),
    ("улиц", Tag::Outdoors),
    ("street", Tag::Outdoors),
    ("outside", Tag::Outdoors),
];

/// Collect up to [`MAX_TAGS`] distinct tags whose stems occur in `text`.
///
/// Result order follows [`TAG_RULES`], not the order words appear in text.
pub fn derive_tags(text: &str) -> Vec<Tag> {
    let lower = text.to_lowercase();
    let mut tags = Vec::with_capacity(MAX_TAGS);

    for (stem, tag) in TAG_RULES {
        if tags.len() == MAX_TAGS {
            break;
        }
        if lower.contains(stem) && !tags.contains(tag) {
            tags.push(*tag);
        }
    }

    tags
}
