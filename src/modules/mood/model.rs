use std::fmt;
use std::str::FromStr;

/// Recommendation bucket offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Emotional,
    Thriller,
    Romantic,
    Scifi,
    Family,
    Action,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Emotional,
        Mood::Thriller,
        Mood::Romantic,
        Mood::Scifi,
        Mood::Family,
        Mood::Action,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Emotional => "emotional",
            Mood::Thriller => "thriller",
            Mood::Romantic => "romantic",
            Mood::Scifi => "scifi",
            Mood::Family => "family",
            Mood::Action => "action",
        }
    }

    /// Upstream genre names, matched exactly against `/genre/movie/list`.
    pub fn genre_names(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["Comedy", "Adventure", "Music", "Family"],
            Mood::Emotional => &["Drama"],
            Mood::Thriller => &["Thriller", "Mystery"],
            Mood::Romantic => &["Romance"],
            Mood::Scifi => &["Science Fiction"],
            Mood::Family => &["Family", "Animation"],
            Mood::Action => &["Action", "Adventure"],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == wanted)
            .ok_or(UnknownMood(wanted))
    }
}
