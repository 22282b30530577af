//! Stem-branch pairs and the sixty-term sexagenary cycle.
//!
//! A [`Pillar`] is whatever (stem, branch) the calendar formulas produce.
//! A [`GanZhi`] is a validated member of the cycle: only pairs whose stem
//! and branch indices share parity belong to it, giving exactly sixty.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{CoreError, CoreResult};
use crate::stem_branch::{EarthlyBranch, HeavenlyStem};

/// NaYin names, one per consecutive pair of cycle members starting at 甲子.
const NAYIN: [(&str, Element); 30] = [
    ("海中金", Element::Metal),
    ("炉中火", Element::Fire),
    ("大林木", Element::Wood),
    ("路旁土", Element::Earth),
    ("剑锋金", Element::Metal),
    ("山头火", Element::Fire),
    ("涧下水", Element::Water),
    ("城头土", Element::Earth),
    ("白蜡金", Element::Metal),
    ("杨柳木", Element::Wood),
    ("井泉水", Element::Water),
    ("屋上土", Element::Earth),
    ("霹雳火", Element::Fire),
    ("松柏木", Element::Wood),
    ("长流水", Element::Water),
    ("沙中金", Element::Metal),
    ("山下火", Element::Fire),
    ("平地木", Element::Wood),
    ("壁上土", Element::Earth),
    ("金箔金", Element::Metal),
    ("覆灯火", Element::Fire),
    ("天河水", Element::Water),
    ("大驿土", Element::Earth),
    ("钗钏金", Element::Metal),
    ("桑柘木", Element::Wood),
    ("大溪水", Element::Water),
    ("沙中土", Element::Earth),
    ("天上火", Element::Fire),
    ("石榴木", Element::Wood),
    ("大海水", Element::Water),
];

/// The derived "sound" element name of a cycle member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NaYin {
    /// Three-character name, e.g. 海中金.
    pub name: &'static str,
    /// The element the name carries.
    pub element: Element,
}

impl std::fmt::Display for NaYin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A stem and branch as produced by the pillar formulas.
///
/// The month and day formulas work on lunar month and day numbers, so the
/// resulting pair is not guaranteed to belong to the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    /// Heavenly stem.
    pub stem: HeavenlyStem,
    /// Earthly branch.
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Pair a stem with a branch.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Whether stem and branch share parity.
    pub fn is_cycle_member(&self) -> bool {
        (self.stem.index() + self.branch.index()) % 2 == 0
    }

    /// The validated cycle member, or `None` for a parity-violating pair.
    pub fn gan_zhi(&self) -> Option<GanZhi> {
        GanZhi::new(self.stem, self.branch).ok()
    }

    /// NaYin of the pair, when it belongs to the cycle.
    pub fn nayin(&self) -> Option<NaYin> {
        self.gan_zhi().map(|gz| gz.nayin())
    }
}

impl From<GanZhi> for Pillar {
    fn from(gz: GanZhi) -> Self {
        Self::new(gz.stem(), gz.branch())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// A member of the sixty-term cycle, stored as its index (甲子 = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GanZhi(u8);

impl GanZhi {
    /// Number of members in the cycle.
    pub const CYCLE: usize = 60;

    /// Build the member for a stem and branch of equal parity.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> CoreResult<Self> {
        let s = stem.index() as i64;
        let b = branch.index() as i64;
        if (s - b) % 2 != 0 {
            return Err(CoreError::InvalidPair {
                stem: stem.chinese(),
                branch: branch.chinese(),
            });
        }
        // index ≡ s (mod 10) and index ≡ b (mod 12)
        Ok(Self((6 * s - 5 * b).rem_euclid(60) as u8))
    }

    /// The member at a cycle index, wrapping modulo 60.
    pub fn from_cycle_index(index: i64) -> Self {
        Self(index.rem_euclid(60) as u8)
    }

    /// Position in the cycle, 0..=59.
    pub fn cycle_index(self) -> usize {
        self.0 as usize
    }

    /// Heavenly stem of this member.
    pub fn stem(self) -> HeavenlyStem {
        HeavenlyStem::ALL[self.cycle_index() % 10]
    }

    /// Earthly branch of this member.
    pub fn branch(self) -> EarthlyBranch {
        EarthlyBranch::ALL[self.cycle_index() % 12]
    }

    /// The NaYin shared by this member and its partner in the pair.
    pub fn nayin(self) -> NaYin {
        let (name, element) = NAYIN[self.cycle_index() / 2];
        NaYin { name, element }
    }

    /// Parse a two-character token such as "甲子".
    pub fn parse(s: &str) -> CoreResult<Self> {
        let t = s.trim();
        let mut chars = t.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                let stem = HeavenlyStem::parse(&a.to_string())?;
                let branch = EarthlyBranch::parse(&b.to_string())?;
                Self::new(stem, branch)
            }
            _ => Err(CoreError::token("ganzhi", s)),
        }
    }
}

impl TryFrom<u8> for GanZhi {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        if (value as usize) < Self::CYCLE {
            Ok(Self(value))
        } else {
            Err(CoreError::token("cycle index", value.to_string()))
        }
    }
}

impl From<GanZhi> for u8 {
    fn from(gz: GanZhi) -> Self {
        gz.0
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}
