/// Pictogram bucket for a provider condition code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    /// Fog, mist, haze and the rest of the 7xx group.
    Atmosphere,
    ClearSky,
    Clouds,
    Unknown,
}

impl ConditionIcon {
    /// Map a provider condition code to its icon bucket.
    ///
    /// Codes in 400..500 are not assigned by the provider and fall through to
    /// `Unknown`, as does anything at or above 900.
    pub fn from_condition_id(id: i64) -> Self {
        match id {
            200..=299 => ConditionIcon::Thunderstorm,
            300..=399 => ConditionIcon::Drizzle,
            500..=599 => ConditionIcon::Rain,
            600..=699 => ConditionIcon::Snow,
            700..=799 => ConditionIcon::Atmosphere,
            800 => ConditionIcon::ClearSky,
            801..=899 => ConditionIcon::Clouds,
            _ => ConditionIcon::Unknown,
        }
    }

    /// Emoji representation for the display surface.
    pub fn emoji(self) -> &'static str {
        match self {
            ConditionIcon::Thunderstorm => "\u{26c8}\u{fe0f}",
            ConditionIcon::Drizzle => "\u{1f326}",
            ConditionIcon::Rain => "\u{1f327}",
            ConditionIcon::Snow => "\u{2745}",
            ConditionIcon::Atmosphere => "\u{1f32b}",
            ConditionIcon::ClearSky => "\u{2600}\u{fe0f}",
            ConditionIcon::Clouds => "\u{26c5}",
            ConditionIcon::Unknown => "\u{2753}",
        }
    }
}
