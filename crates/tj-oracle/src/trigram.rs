//! The eight trigrams (八卦).
//!
//! A trigram's index is its three-bit value plus one, reading yang as 1
//! and taking the top line as the most significant bit.

use serde::{Deserialize, Serialize};
use tj_core::Element;

use crate::error::{OracleError, OracleResult};

/// One of the eight three-line figures, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ 坤, earth. Bits 000.
    Kun,
    /// ☳ 震, thunder. Bits 001.
    Zhen,
    /// ☵ 坎, water. Bits 010.
    Kan,
    /// ☱ 兑, lake. Bits 011.
    Dui,
    /// ☶ 艮, mountain. Bits 100.
    Gen,
    /// ☲ 离, fire. Bits 101.
    Li,
    /// ☴ 巽, wind. Bits 110.
    Xun,
    /// ☰ 乾, heaven. Bits 111.
    Qian,
}

impl Trigram {
    /// All trigrams in index order (index 1 first).
    pub const ALL: [Self; 8] = [
        Self::Kun,
        Self::Zhen,
        Self::Kan,
        Self::Dui,
        Self::Gen,
        Self::Li,
        Self::Xun,
        Self::Qian,
    ];

    /// Early Heaven (先天) order: 乾1 兑2 离3 震4 巽5 坎6 艮7 坤8.
    const EARLY_HEAVEN: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// Trigram from its three-bit value (0-7).
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// Three-bit value, top line most significant.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Index 1-8.
    pub fn index(self) -> u8 {
        self.bits() + 1
    }

    /// Trigram at index 1-8.
    pub fn from_index(index: u8) -> OracleResult<Self> {
        match index {
            1..=8 => Ok(Self::from_bits(index - 1)),
            other => Err(OracleError::InvalidTrigramIndex(other)),
        }
    }

    /// Trigram at Early Heaven number 1-8.
    pub fn from_early_heaven(number: u8) -> OracleResult<Self> {
        match number {
            1..=8 => Ok(Self::EARLY_HEAVEN[(number - 1) as usize]),
            other => Err(OracleError::InvalidTrigramIndex(other)),
        }
    }

    /// Polarity of each line, bottom to top.
    pub fn lines(self) -> [bool; 3] {
        let b = self.bits();
        [b & 0b001 != 0, b & 0b010 != 0, b & 0b100 != 0]
    }

    /// Build from line polarities, bottom to top.
    pub fn from_lines(lines: [bool; 3]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &yang)| acc | (u8::from(yang) << i));
        Self::from_bits(bits)
    }

    /// Chinese name.
    pub fn chinese(self) -> char {
        match self {
            Self::Kun => '坤',
            Self::Zhen => '震',
            Self::Kan => '坎',
            Self::Dui => '兑',
            Self::Gen => '艮',
            Self::Li => '离',
            Self::Xun => '巽',
            Self::Qian => '乾',
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Kun => '☷',
            Self::Zhen => '☳',
            Self::Kan => '☵',
            Self::Dui => '☱',
            Self::Gen => '☶',
            Self::Li => '☲',
            Self::Xun => '☴',
            Self::Qian => '☰',
        }
    }

    /// The natural image the trigram stands for.
    pub fn nature(self) -> &'static str {
        match self {
            Self::Kun => "地",
            Self::Zhen => "雷",
            Self::Kan => "水",
            Self::Dui => "泽",
            Self::Gen => "山",
            Self::Li => "火",
            Self::Xun => "风",
            Self::Qian => "天",
        }
    }

    /// Associated element.
    pub fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Kun | Self::Gen => Element::Earth,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Li => Element::Fire,
        }
    }

    /// Short reading of the figure.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::Qian => "创造、刚健",
            Self::Kun => "承载、柔顺",
            Self::Zhen => "震动、警觉",
            Self::Xun => "渗入、顺从",
            Self::Kan => "险陷、智慧",
            Self::Li => "光明、依附",
            Self::Gen => "停止、稳重",
            Self::Dui => "喜悦、言说",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.chinese())
    }
}
