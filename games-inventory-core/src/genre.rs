/// Genre of a stocked game, stored in the `genre` column as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Genre {
    #[default]
    Unknown,
    Action,
    Strategy,
    Rpg,
    Fps,
    Sport,
}

const ALL_GENRES: &[Genre] = &[
    Genre::Unknown,
    Genre::Action,
    Genre::Strategy,
    Genre::Rpg,
    Genre::Fps,
    Genre::Sport,
];

impl Genre {
    pub fn code(&self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Action => 1,
            Self::Strategy => 2,
            Self::Rpg => 3,
            Self::Fps => 4,
            Self::Sport => 5,
        }
    }

    /// Map a stored code back to a genre. `None` for anything outside the set.
    pub fn from_code(code: i64) -> Option<Self> {
        ALL_GENRES.iter().copied().find(|g| g.code() == code)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Action => "action",
            Self::Strategy => "strategy",
            Self::Rpg => "rpg",
            Self::Fps => "fps",
            Self::Sport => "sport",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Action => "Action",
            Self::Strategy => "Strategy",
            Self::Rpg => "RPG",
            Self::Fps => "FPS",
            Self::Sport => "Sport",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Unknown => &["unknown", "none", "other"],
            Self::Action => &["action"],
            Self::Strategy => &["strategy", "rts", "tbs"],
            Self::Rpg => &["rpg", "role-playing", "role playing"],
            Self::Fps => &["fps", "shooter", "first-person shooter"],
            Self::Sport => &["sport", "sports"],
        }
    }

    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone)]
pub struct GenreParseError(pub String);

impl std::fmt::Display for GenreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown genre: '{}'", self.0)
    }
}

impl std::error::Error for GenreParseError {}

impl std::str::FromStr for Genre {
    type Err = GenreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(code) = lower.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| GenreParseError(s.to_string()));
        }
        ALL_GENRES
            .iter()
            .copied()
            .find(|g| g.aliases().contains(&lower.as_str()))
            .ok_or_else(|| GenreParseError(s.to_string()))
    }
}
