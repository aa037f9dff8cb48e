use std::fmt;
use std::str::FromStr;

/// Declared alphabetically so the derived ordering sorts by county name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum County {
    Middlesex,
    Somerset,
}

impl County {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Middlesex => "MIDDLESEX",
            Self::Somerset => "SOMERSET",
        }
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Bridgewater,
    Edison,
    Franklin,
    Piscataway,
    Somerville,
}

impl Location {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Bridgewater,
            Self::Edison,
            Self::Franklin,
            Self::Piscataway,
            Self::Somerville,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bridgewater => "BRIDGEWATER",
            Self::Edison => "EDISON",
            Self::Franklin => "FRANKLIN",
            Self::Piscataway => "PISCATAWAY",
            Self::Somerville => "SOMERVILLE",
        }
    }

    pub const fn zip_code(self) -> &'static str {
        match self {
            Self::Bridgewater => "08807",
            Self::Edison => "08837",
            Self::Franklin => "08873",
            Self::Piscataway => "08854",
            Self::Somerville => "08876",
        }
    }

    pub const fn county(self) -> County {
        match self {
            Self::Bridgewater | Self::Franklin | Self::Somerville => County::Somerset,
            Self::Edison | Self::Piscataway => County::Middlesex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location '{0}'")]
pub struct UnknownLocation(pub String);

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|location| location.label().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownLocation(raw.to_owned()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.label(), self.zip_code(), self.county())
    }
}
