//! Single hexagram lines (爻).
//!
//! Three coins summing to 3 give old yin, 4 young yin, 5 young yang and 6
//! old yang. Old lines are the moving ones that flip in the changed hexagram.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::coin::{Coin, toss_coins};
use crate::error::{OracleError, OracleResult};

/// The four outcomes of a line toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Sum 3. Yin, moving.
    OldYin,
    /// Sum 4. Yin, at rest.
    YoungYin,
    /// Sum 5. Yang, at rest.
    YoungYang,
    /// Sum 6. Yang, moving.
    OldYang,
}

impl LineKind {
    /// Classify a coin sum.
    pub fn from_sum(sum: u8) -> OracleResult<Self> {
        match sum {
            3 => Ok(Self::OldYin),
            4 => Ok(Self::YoungYin),
            5 => Ok(Self::YoungYang),
            6 => Ok(Self::OldYang),
            other => Err(OracleError::InvalidLineSum(other)),
        }
    }

    /// The coin sum that produces this kind.
    pub fn sum(self) -> u8 {
        match self {
            Self::OldYin => 3,
            Self::YoungYin => 4,
            Self::YoungYang => 5,
            Self::OldYang => 6,
        }
    }

    /// Traditional ritual number (6, 7, 8, 9).
    pub fn ritual_number(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "老阴"),
            Self::YoungYin => write!(f, "少阴"),
            Self::YoungYang => write!(f, "少阳"),
            Self::OldYang => write!(f, "老阳"),
        }
    }
}

/// One line of a hexagram, numbered 1 (bottom) to 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YaoLine {
    /// Coin sum, 3..=6.
    pub sum: u8,
    /// Position from the bottom, 1..=6.
    pub position: u8,
    /// Current polarity.
    pub is_yang: bool,
    /// Whether the toss made this a moving line.
    pub is_old: bool,
}

impl YaoLine {
    /// Build a line from a coin sum and its position.
    pub fn from_sum(sum: u8, position: u8) -> OracleResult<Self> {
        if !(1..=6).contains(&position) {
            return Err(OracleError::InvalidLinePosition(position));
        }
        let kind = LineKind::from_sum(sum)?;
        Ok(Self {
            sum,
            position,
            is_yang: sum >= 5,
            is_old: matches!(kind, LineKind::OldYin | LineKind::OldYang),
        })
    }

    /// Build a line from a toss outcome. `position` is taken as given.
    pub(crate) fn from_kind(kind: LineKind, position: u8) -> Self {
        Self {
            sum: kind.sum(),
            position,
            is_yang: matches!(kind, LineKind::YoungYang | LineKind::OldYang),
            is_old: matches!(kind, LineKind::OldYin | LineKind::OldYang),
        }
    }

    /// The toss outcome this line came from.
    pub fn kind(&self) -> LineKind {
        match (self.is_old, self.sum >= 5) {
            (true, false) => LineKind::OldYin,
            (false, false) => LineKind::YoungYin,
            (false, true) => LineKind::YoungYang,
            (true, true) => LineKind::OldYang,
        }
    }

    /// The same line with its polarity flipped. Sum, position and the
    /// moving flag are kept.
    pub fn flipped(&self) -> Self {
        Self {
            is_yang: !self.is_yang,
            ..*self
        }
    }

    /// Text drawing of the line, with a mark on moving lines.
    pub fn glyph(&self) -> &'static str {
        match (self.is_yang, self.is_old) {
            (true, false) => "━━━━━━━",
            (true, true) => "━━━━━━━ ○",
            (false, false) => "━━━ ━━━",
            (false, true) => "━━━ ━━━ ×",
        }
    }
}

impl std::fmt::Display for YaoLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.kind())
    }
}

/// Toss three coins for the line at `position` (clamped to 1-6).
pub fn toss_line(rng: &mut StdRng, position: u8) -> YaoLine {
    let coins = toss_coins(rng);
    let yang_faces = coins.iter().filter(|c| **c == Coin::Yang).count();
    let kind = match yang_faces {
        0 => LineKind::OldYin,
        1 => LineKind::YoungYin,
        2 => LineKind::YoungYang,
        _ => LineKind::OldYang,
    };
    YaoLine::from_kind(kind, position.clamp(1, 6))
}
