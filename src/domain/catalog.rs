use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI-imposed bounds for the numeric inputs. The sliders clamp these
/// structurally; nothing downstream re-validates them post hoc.
pub const YEAR_MIN: u16 = 2000;
pub const YEAR_MAX: u16 = 2023;
pub const NA_SALES_MAX: f64 = 10.0;
pub const EU_SALES_MAX: f64 = 10.0;
pub const JP_SALES_MAX: f64 = 5.0;
pub const OTHER_SALES_MAX: f64 = 5.0;
pub const SALES_STEP: f64 = 0.1;

/// Closed set of platforms the model was trained on.
/// Declaration order is the category encoding and must match the training
/// pipeline exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Ps4,
    XboxOne,
    Pc,
    Switch,
    Ps5,
    XboxSeriesX,
    Mobile,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Ps4,
        Platform::XboxOne,
        Platform::Pc,
        Platform::Switch,
        Platform::Ps5,
        Platform::XboxSeriesX,
        Platform::Mobile,
        Platform::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Ps4 => "PS4",
            Platform::XboxOne => "Xbox One",
            Platform::Pc => "PC",
            Platform::Switch => "Switch",
            Platform::Ps5 => "PS5",
            Platform::XboxSeriesX => "Xbox Series X",
            Platform::Mobile => "Mobile",
            Platform::Other => "Other",
        }
    }

    /// Category code used by the numeric feature layout.
    pub fn code(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown platform: {}", s))
    }
}

/// Closed set of genres. Declaration order is the category encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Action,
    Adventure,
    Rpg,
    Sports,
    Shooter,
    Strategy,
    Puzzle,
    Racing,
    Simulation,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Rpg,
        Genre::Sports,
        Genre::Shooter,
        Genre::Strategy,
        Genre::Puzzle,
        Genre::Racing,
        Genre::Simulation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Rpg => "RPG",
            Genre::Sports => "Sports",
            Genre::Shooter => "Shooter",
            Genre::Strategy => "Strategy",
            Genre::Puzzle => "Puzzle",
            Genre::Racing => "Racing",
            Genre::Simulation => "Simulation",
        }
    }

    pub fn code(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown genre: {}", s))
    }
}

/// Closed set of publishers. Declaration order is the category encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Publisher {
    #[default]
    Ea,
    Ubisoft,
    Activision,
    Nintendo,
    Sony,
    Microsoft,
    TakeTwo,
    Other,
}

impl Publisher {
    pub const ALL: [Publisher; 8] = [
        Publisher::Ea,
        Publisher::Ubisoft,
        Publisher::Activision,
        Publisher::Nintendo,
        Publisher::Sony,
        Publisher::Microsoft,
        Publisher::TakeTwo,
        Publisher::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Publisher::Ea => "EA",
            Publisher::Ubisoft => "Ubisoft",
            Publisher::Activision => "Activision",
            Publisher::Nintendo => "Nintendo",
            Publisher::Sony => "Sony",
            Publisher::Microsoft => "Microsoft",
            Publisher::TakeTwo => "Take-Two",
            Publisher::Other => "Other",
        }
    }

    pub fn code(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Publisher {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown publisher: {}", s))
    }
}
