//! Five-element relations and the dimension scores derived from them.
//!
//! [`relate`] classifies how one element stands to another. [`score`] turns
//! that classification into five bounded dimension scores using a weight
//! table, and [`energy_index`] folds a day master and the current day into
//! a single 0-100 value.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Lowest score any dimension can take.
pub const SCORE_MIN: i32 = 0;
/// Highest score any dimension can take.
pub const SCORE_MAX: i32 = 100;
/// Neutral starting point for every score.
pub const DEFAULT_BASELINE: i32 = 50;

/// How element `a` relates to element `b`.
///
/// The four directional flags are computed independently. When `a == b`
/// only `is_same` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// `a` generates `b`.
    pub generates: bool,
    /// `a` overcomes `b`.
    pub overcomes: bool,
    /// `b` generates `a`.
    pub is_generated_by: bool,
    /// `b` overcomes `a`.
    pub is_overcome_by: bool,
    /// `a` and `b` are the same element.
    pub is_same: bool,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = if self.is_same {
            "same"
        } else if self.generates {
            "generates"
        } else if self.overcomes {
            "overcomes"
        } else if self.is_generated_by {
            "is generated by"
        } else if self.is_overcome_by {
            "is overcome by"
        } else {
            "unrelated"
        };
        write!(f, "{label}")
    }
}

/// Classify the relation of `a` to `b`.
pub fn relate(a: Element, b: Element) -> Relation {
    if a == b {
        return Relation {
            is_same: true,
            ..Relation::default()
        };
    }
    Relation {
        generates: a.generates() == b,
        overcomes: a.overcomes() == b,
        is_generated_by: b.generates() == a,
        is_overcome_by: b.overcomes() == a,
        is_same: false,
    }
}

/// One axis of the energy radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// 财运
    Wealth,
    /// 事业
    Career,
    /// 感情
    Love,
    /// 健康
    Health,
    /// 灵感
    Creativity,
}

impl Dimension {
    /// All dimensions in radar order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Wealth,
            Self::Career,
            Self::Love,
            Self::Health,
            Self::Creativity,
        ]
    }

    /// Chinese label.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Wealth => "财运",
            Self::Career => "事业",
            Self::Love => "感情",
            Self::Health => "健康",
            Self::Creativity => "灵感",
        }
    }

    /// Parse a dimension name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wealth" | "财运" => Some(Self::Wealth),
            "career" | "事业" => Some(Self::Career),
            "love" | "感情" => Some(Self::Love),
            "health" | "健康" => Some(Self::Health),
            "creativity" | "灵感" => Some(Self::Creativity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wealth => write!(f, "Wealth"),
            Self::Career => write!(f, "Career"),
            Self::Love => write!(f, "Love"),
            Self::Health => write!(f, "Health"),
            Self::Creativity => write!(f, "Creativity"),
        }
    }
}

/// Score contribution of each relation flag for one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationWeights {
    /// Added when `generates` is set.
    pub generates: i32,
    /// Added when `overcomes` is set.
    pub overcomes: i32,
    /// Added when `is_generated_by` is set.
    pub is_generated_by: i32,
    /// Added when `is_overcome_by` is set.
    pub is_overcome_by: i32,
    /// Added when `is_same` is set.
    pub is_same: i32,
}

impl RelationWeights {
    /// Weights in flag order: generates, overcomes, is generated by,
    /// is overcome by, same.
    pub const fn new(
        generates: i32,
        overcomes: i32,
        is_generated_by: i32,
        is_overcome_by: i32,
        is_same: i32,
    ) -> Self {
        Self {
            generates,
            overcomes,
            is_generated_by,
            is_overcome_by,
            is_same,
        }
    }

    /// Sum of the weights whose flag is set.
    pub fn apply(&self, relation: &Relation) -> i32 {
        [
            (relation.generates, self.generates),
            (relation.overcomes, self.overcomes),
            (relation.is_generated_by, self.is_generated_by),
            (relation.is_overcome_by, self.is_overcome_by),
            (relation.is_same, self.is_same),
        ]
        .into_iter()
        .filter_map(|(flag, w)| flag.then_some(w))
        .fold(0, i32::saturating_add)
    }
}

/// Per-dimension weights used by [`score`].
///
/// The default reproduces the fixed radar table:
///
/// | dimension  | generates | overcomes | generated by | overcome by | same |
/// |------------|-----------|-----------|--------------|-------------|------|
/// | wealth     | +15       | +20       | -10          | -25         | 0    |
/// | career     | +20       | 0         | 0            | -15         | 0    |
/// | love       | 0         | 0         | 0            | 0           | +15  |
/// | health     | -15       | 0         | 0            | -20         | 0    |
/// | creativity | +20       | 0         | 0            | 0           | 0    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Wealth weights.
    pub wealth: RelationWeights,
    /// Career weights.
    pub career: RelationWeights,
    /// Love weights.
    pub love: RelationWeights,
    /// Health weights.
    pub health: RelationWeights,
    /// Creativity weights.
    pub creativity: RelationWeights,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            wealth: RelationWeights::new(15, 20, -10, -25, 0),
            career: RelationWeights::new(20, 0, 0, -15, 0),
            love: RelationWeights::new(0, 0, 0, 0, 15),
            health: RelationWeights::new(-15, 0, 0, -20, 0),
            creativity: RelationWeights::new(20, 0, 0, 0, 0),
        }
    }
}

impl ScoreTable {
    /// Weights for one dimension.
    pub fn weights(&self, dimension: Dimension) -> &RelationWeights {
        match dimension {
            Dimension::Wealth => &self.wealth,
            Dimension::Career => &self.career,
            Dimension::Love => &self.love,
            Dimension::Health => &self.health,
            Dimension::Creativity => &self.creativity,
        }
    }

    /// Replace the weights for one dimension.
    pub fn with_weights(mut self, dimension: Dimension, weights: RelationWeights) -> Self {
        match dimension {
            Dimension::Wealth => self.wealth = weights,
            Dimension::Career => self.career = weights,
            Dimension::Love => self.love = weights,
            Dimension::Health => self.health = weights,
            Dimension::Creativity => self.creativity = weights,
        }
        self
    }
}

/// The five radar scores, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Wealth score.
    pub wealth: u8,
    /// Career score.
    pub career: u8,
    /// Love score.
    pub love: u8,
    /// Health score.
    pub health: u8,
    /// Creativity score.
    pub creativity: u8,
}

impl DimensionScores {
    /// Score of one dimension.
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Wealth => self.wealth,
            Dimension::Career => self.career,
            Dimension::Love => self.love,
            Dimension::Health => self.health,
            Dimension::Creativity => self.creativity,
        }
    }

    /// `(dimension, score)` pairs in radar order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::all().iter().map(|&d| (d, self.get(d)))
    }

    /// Arithmetic mean of the five scores, rounded down.
    pub fn average(&self) -> u8 {
        let total: u32 = self.iter().map(|(_, s)| u32::from(s)).sum();
        (total / 5) as u8
    }
}

fn clamp_score(value: i32) -> u8 {
    value.clamp(SCORE_MIN, SCORE_MAX) as u8
}

/// Derive the five dimension scores: `baseline + Σ weight·flag`, clamped
/// to 0..=100 per dimension. The sum saturates, so any `i32` baseline is safe.
pub fn score(baseline: i32, relation: &Relation, table: &ScoreTable) -> DimensionScores {
    let dim =
        |d: Dimension| clamp_score(baseline.saturating_add(table.weights(d).apply(relation)));
    DimensionScores {
        wealth: dim(Dimension::Wealth),
        career: dim(Dimension::Career),
        love: dim(Dimension::Love),
        health: dim(Dimension::Health),
        creativity: dim(Dimension::Creativity),
    }
}

const DAY_MASTER_WEIGHTS: RelationWeights = RelationWeights::new(20, 15, -20, -25, 0);
const BRANCH_WEIGHTS: RelationWeights = RelationWeights::new(10, 0, 0, -15, 0);

/// Overall energy of a day for a given day master, 0..=100.
///
/// Starts at 50, then adds the relation of the day master to the current
/// day's stem element and to its branch element.
pub fn energy_index(day_master: Element, current_stem: Element, current_branch: Element) -> u8 {
    let stem = DAY_MASTER_WEIGHTS.apply(&relate(day_master, current_stem));
    let branch = BRANCH_WEIGHTS.apply(&relate(day_master, current_branch));
    clamp_score(DEFAULT_BASELINE.saturating_add(stem).saturating_add(branch))
}
