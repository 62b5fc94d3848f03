//! Numerus (plural) rules for catalog languages.
//!
//! Each rule family describes how many `<numerusform>` elements a
//! translation must provide and which of them is chosen for a count.
//! The families follow the groupings Qt Linguist uses when it creates
//! numerus forms for a target language.

use std::fmt;

use super::data::primary_subtag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// A single form for every count (Japanese, Chinese, Korean, ...).
    NoPlural,
    /// `n == 1` / other (English, German, Hebrew, ...).
    English,
    /// `n <= 1` / other.
    French,
    /// `n % 10 == 1 && n % 100 != 11` / `n != 0` / zero.
    Latvian,
    /// one / two / other.
    Irish,
    /// one / 2..=4 / other (Czech, Slovak).
    Slovak,
    Lithuanian,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian, Bosnian.
    Russian,
    Polish,
    Romanian,
    Slovenian,
    Arabic,
    Welsh,
}

impl PluralRule {
    /// Pick the rule for a locale tag such as "he_IL" or "pt-BR".
    ///
    /// Only the primary language subtag is considered. Unknown languages
    /// use [`PluralRule::English`].
    pub fn for_language(tag: &str) -> Self {
        match primary_subtag(tag).as_str() {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" | "tr" | "fa" | "lo" | "my" | "km"
            | "bo" | "dz" | "ka" | "jv" | "su" => PluralRule::NoPlural,
            "fr" | "ff" | "kab" | "ln" => PluralRule::French,
            "lv" => PluralRule::Latvian,
            "ga" => PluralRule::Irish,
            "cs" | "sk" => PluralRule::Slovak,
            "lt" => PluralRule::Lithuanian,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::Russian,
            "pl" => PluralRule::Polish,
            "ro" | "mo" => PluralRule::Romanian,
            "sl" => PluralRule::Slovenian,
            "ar" => PluralRule::Arabic,
            "cy" => PluralRule::Welsh,
            _ => PluralRule::English,
        }
    }

    /// Number of numerus forms a translation must provide.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::NoPlural => 1,
            PluralRule::English | PluralRule::French => 2,
            PluralRule::Latvian
            | PluralRule::Irish
            | PluralRule::Slovak
            | PluralRule::Lithuanian
            | PluralRule::Russian
            | PluralRule::Polish
            | PluralRule::Romanian => 3,
            PluralRule::Slovenian => 4,
            PluralRule::Welsh => 5,
            PluralRule::Arabic => 6,
        }
    }

    /// Index of the numerus form used for `count`. Always `< form_count()`.
    pub fn form_index(&self, count: i64) -> usize {
        let n = count.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;

        match self {
            PluralRule::NoPlural => 0,
            PluralRule::English => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            PluralRule::Slovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Russian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
            PluralRule::Welsh => match n {
                0 => 0,
                1 => 1,
                2..=5 => 2,
                6 => 3,
                _ => 4,
            },
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluralRule::NoPlural => "no-plural",
            PluralRule::English => "english",
            PluralRule::French => "french",
            PluralRule::Latvian => "latvian",
            PluralRule::Irish => "irish",
            PluralRule::Slovak => "slovak",
            PluralRule::Lithuanian => "lithuanian",
            PluralRule::Russian => "russian",
            PluralRule::Polish => "polish",
            PluralRule::Romanian => "romanian",
            PluralRule::Slovenian => "slovenian",
            PluralRule::Arabic => "arabic",
            PluralRule::Welsh => "welsh",
        };
        write!(f, "{}", name)
    }
}
