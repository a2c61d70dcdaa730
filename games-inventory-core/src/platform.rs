/// Platform a stocked game runs on.
///
/// Stored in the `platform` column as its integer code. The set is closed:
/// any other code is rejected before a row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Pc,
    XboxOne,
    Xbox360,
    Ps3,
    Ps4,
}

/// All platform variants in code order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Pc,
    Platform::XboxOne,
    Platform::Xbox360,
    Platform::Ps3,
    Platform::Ps4,
];

impl Platform {
    /// Integer code persisted in the `platform` column.
    pub fn code(&self) -> i64 {
        match self {
            Self::Pc => 0,
            Self::XboxOne => 1,
            Self::Xbox360 => 2,
            Self::Ps3 => 3,
            Self::Ps4 => 4,
        }
    }

    /// Map a stored code back to a platform. `None` for anything outside the set.
    pub fn from_code(code: i64) -> Option<Self> {
        ALL_PLATFORMS.iter().copied().find(|p| p.code() == code)
    }

    /// Canonical short name used for CLI arguments.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::XboxOne => "xboxone",
            Self::Xbox360 => "xbox360",
            Self::Ps3 => "ps3",
            Self::Ps4 => "ps4",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::XboxOne => "Xbox One",
            Self::Xbox360 => "Xbox 360",
            Self::Ps3 => "PlayStation 3",
            Self::Ps4 => "PlayStation 4",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// The canonical short name always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Pc => &["pc", "windows", "computer"],
            Self::XboxOne => &["xboxone", "xbox one", "xone", "xb1"],
            Self::Xbox360 => &["xbox360", "xbox 360", "x360"],
            Self::Ps3 => &["ps3", "playstation3", "playstation 3"],
            Self::Ps4 => &["ps4", "playstation4", "playstation 4"],
        }
    }

    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive), or from
    /// its integer code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(code) = lower.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| PlatformParseError(s.to_string()));
        }
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.aliases().contains(&lower.as_str()))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}
