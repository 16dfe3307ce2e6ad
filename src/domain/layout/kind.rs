use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::AppError;

/// Which branch of a project's work-file tree an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Reusable assets: characters, props, environments.
    #[default]
    Asset,
    /// Shots assembled from assets.
    Shot,
}

impl Kind {
    /// Both kinds, in display order.
    pub const ALL: [Kind; 2] = [Kind::Asset, Kind::Shot];

    /// Directory name under `01_Data/01_Blender/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Kind::Asset => "Asset",
            Kind::Shot => "Shot",
        }
    }

    /// Parse a kind, ignoring case.
    pub fn from_name(name: &str) -> Option<Kind> {
        match name.trim().to_lowercase().as_str() {
            "asset" | "assets" | "a" => Some(Kind::Asset),
            "shot" | "shots" | "s" => Some(Kind::Shot),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for Kind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_name(s).ok_or_else(|| AppError::InvalidKind(s.to_string()))
    }
}

impl Serialize for Kind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.dir_name())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Kind::from_name(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid kind '{}': expected Asset or Shot", raw))
        })
    }
}
