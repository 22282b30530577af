//! The five elements (Wuxing) and their two fixed cycles.
//!
//! Elements are arranged in the generation cycle
//! Wood → Fire → Earth → Metal → Water → Wood. Each element overcomes the
//! element two steps ahead of it in that cycle.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// All five elements in generation-cycle order.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    /// Position in the generation cycle (Wood = 0).
    pub fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a position in the generation cycle, wrapping modulo 5.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 5]
    }

    /// The element this one generates (one step ahead).
    pub fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one overcomes (two steps ahead).
    pub fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that generates this one.
    pub fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that overcomes this one.
    pub fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The Chinese character for this element.
    pub fn chinese(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// Parse an element from its Chinese character or English name.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "木" | "wood" | "mu" => Ok(Self::Wood),
            "火" | "fire" | "huo" => Ok(Self::Fire),
            "土" | "earth" | "tu" => Ok(Self::Earth),
            "金" | "metal" | "jin" => Ok(Self::Metal),
            "水" | "water" | "shui" => Ok(Self::Water),
            _ => Err(CoreError::token("element", s)),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Metal => write!(f, "Metal"),
            Self::Water => write!(f, "Water"),
        }
    }
}
