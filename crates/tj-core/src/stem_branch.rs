//! Heavenly Stems, Earthly Branches, and the zodiac animals.
//!
//! These are the fixed lookup tables every other computation builds on:
//! ten stems mapped two-per-element, twelve branches each carrying one
//! hidden stem, and the twelve animals that name the branches.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{CoreError, CoreResult};

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_PINYIN: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_PINYIN: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

/// Hidden stem index for each branch, in branch order.
///
/// 子癸 丑己 寅甲 卯乙 辰戊 巳丙 午丁 未己 申庚 酉辛 戌戊 亥壬
const HIDDEN_STEMS: [usize; 12] = [9, 5, 0, 1, 4, 2, 3, 5, 6, 7, 4, 8];

/// One of the ten Heavenly Stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    /// 甲
    Jia,
    /// 乙
    Yi,
    /// 丙
    Bing,
    /// 丁
    Ding,
    /// 戊
    Wu,
    /// 己
    Ji,
    /// 庚
    Geng,
    /// 辛
    Xin,
    /// 壬
    Ren,
    /// 癸
    Gui,
}

impl HeavenlyStem {
    /// All stems in cycle order.
    pub const ALL: [Self; 10] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];

    /// Position in the cycle, 0..=9.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stem at `index`, failing for anything outside 0..=9.
    pub fn from_index(index: usize) -> CoreResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CoreError::token("stem", index.to_string()))
    }

    /// The stem at `index` taken modulo 10.
    pub fn wrapping(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    /// The element of this stem: `ALL[index / 2]`, two stems per element.
    pub fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Yang stems sit at even indices.
    pub fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// The Chinese character.
    pub fn chinese(self) -> char {
        STEM_CHARS[self.index()]
    }

    /// Romanized name.
    pub fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index()]
    }

    /// Parse from the Chinese character or pinyin.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let t = s.trim();
        let lower = t.to_lowercase();
        STEM_CHARS
            .iter()
            .position(|c| c.to_string() == t)
            .or_else(|| STEM_PINYIN.iter().position(|&p| p == lower))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| CoreError::token("stem", s))
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

/// One of the twelve Earthly Branches (地支).
///
/// The default is 子, used when the birth hour is unknown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EarthlyBranch {
    /// 子
    #[default]
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

impl EarthlyBranch {
    /// All branches in cycle order.
    pub const ALL: [Self; 12] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];

    /// Position in the cycle, 0..=11.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The branch at `index`, failing for anything outside 0..=11.
    pub fn from_index(index: usize) -> CoreResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CoreError::token("branch", index.to_string()))
    }

    /// The branch at `index` taken modulo 12.
    pub fn wrapping(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// The stem hidden in this branch.
    pub fn hidden_stem(self) -> HeavenlyStem {
        HeavenlyStem::ALL[HIDDEN_STEMS[self.index()]]
    }

    /// The element of this branch, read through its hidden stem.
    pub fn element(self) -> Element {
        self.hidden_stem().element()
    }

    /// The zodiac animal named by this branch.
    pub fn zodiac(self) -> ZodiacAnimal {
        ZodiacAnimal::ALL[self.index()]
    }

    /// The branch opposite this one (six steps away).
    pub fn clash(self) -> Self {
        Self::wrapping(self.index() as i64 + 6)
    }

    /// The Chinese character.
    pub fn chinese(self) -> char {
        BRANCH_CHARS[self.index()]
    }

    /// Romanized name.
    pub fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index()]
    }

    /// Parse from the Chinese character or pinyin.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let t = s.trim();
        let lower = t.to_lowercase();
        BRANCH_CHARS
            .iter()
            .position(|c| c.to_string() == t)
            .or_else(|| BRANCH_PINYIN.iter().position(|&p| p == lower))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| CoreError::token("branch", s))
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

/// The twelve zodiac animals (生肖), in branch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacAnimal {
    /// 鼠
    Rat,
    /// 牛
    Ox,
    /// 虎
    Tiger,
    /// 兔
    Rabbit,
    /// 龙
    Dragon,
    /// 蛇
    Snake,
    /// 马
    Horse,
    /// 羊
    Goat,
    /// 猴
    Monkey,
    /// 鸡
    Rooster,
    /// 狗
    Dog,
    /// 猪
    Pig,
}

impl ZodiacAnimal {
    /// All animals in branch order.
    pub const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// The branch this animal names.
    pub fn branch(self) -> EarthlyBranch {
        EarthlyBranch::ALL[self as usize]
    }

    /// The Chinese character.
    pub fn chinese(self) -> char {
        match self {
            Self::Rat => '鼠',
            Self::Ox => '牛',
            Self::Tiger => '虎',
            Self::Rabbit => '兔',
            Self::Dragon => '龙',
            Self::Snake => '蛇',
            Self::Horse => '马',
            Self::Goat => '羊',
            Self::Monkey => '猴',
            Self::Rooster => '鸡',
            Self::Dog => '狗',
            Self::Pig => '猪',
        }
    }

    /// Parse from the Chinese character or English name.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let t = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| t == a.chinese().to_string() || t == a.to_string().to_lowercase())
            .ok_or_else(|| CoreError::token("zodiac", s))
    }
}

impl std::fmt::Display for ZodiacAnimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_group_two_per_element() {
        assert_eq!(HeavenlyStem::Jia.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Yi.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Bing.element(), Element::Fire);
        assert_eq!(HeavenlyStem::Wu.element(), Element::Earth);
        assert_eq!(HeavenlyStem::Geng.element(), Element::Metal);
        assert_eq!(HeavenlyStem::Gui.element(), Element::Water);
    }

    #[test]
    fn stem_index_round_trip() {
        for (i, s) in HeavenlyStem::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(HeavenlyStem::from_index(i), Ok(*s));
        }
        assert!(HeavenlyStem::from_index(10).is_err());
    }

    #[test]
    fn stem_wrapping_handles_negatives() {
        assert_eq!(HeavenlyStem::wrapping(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::wrapping(12), HeavenlyStem::Bing);
    }

    #[test]
    fn branch_elements_follow_hidden_stems() {
        assert_eq!(EarthlyBranch::Zi.hidden_stem(), HeavenlyStem::Gui);
        assert_eq!(EarthlyBranch::Zi.element(), Element::Water);
        assert_eq!(EarthlyBranch::Chou.element(), Element::Earth);
        assert_eq!(EarthlyBranch::Yin.element(), Element::Wood);
        assert_eq!(EarthlyBranch::Wu.element(), Element::Fire);
        assert_eq!(EarthlyBranch::You.element(), Element::Metal);
        assert_eq!(EarthlyBranch::Hai.element(), Element::Water);
    }

    #[test]
    fn branch_index_bounds() {
        assert_eq!(EarthlyBranch::from_index(11), Ok(EarthlyBranch::Hai));
        assert!(matches!(
            EarthlyBranch::from_index(12),
            Err(CoreError::InvalidToken { kind: "branch", .. })
        ));
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(HeavenlyStem::parse("丙"), Ok(HeavenlyStem::Bing));
        assert_eq!(HeavenlyStem::parse("Geng"), Ok(HeavenlyStem::Geng));
        assert!(HeavenlyStem::parse("子").is_err());
        assert_eq!(EarthlyBranch::parse("午"), Ok(EarthlyBranch::Wu));
        assert_eq!(EarthlyBranch::parse("hai"), Ok(EarthlyBranch::Hai));
        assert!(EarthlyBranch::parse("甲").is_err());
        assert!(EarthlyBranch::parse("").is_err());
    }

    #[test]
    fn default_branch_is_zi() {
        assert_eq!(EarthlyBranch::default(), EarthlyBranch::Zi);
    }

    #[test]
    fn zodiac_round_trip() {
        for b in EarthlyBranch::ALL {
            assert_eq!(b.zodiac().branch(), b);
        }
        assert_eq!(ZodiacAnimal::parse("马"), Ok(ZodiacAnimal::Horse));
        assert_eq!(ZodiacAnimal::parse("dragon"), Ok(ZodiacAnimal::Dragon));
        assert!(ZodiacAnimal::parse("cat").is_err());
    }

    #[test]
    fn clash_is_six_apart() {
        assert_eq!(EarthlyBranch::Wu.clash(), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::Hai.clash(), EarthlyBranch::Si);
    }

    #[test]
    fn display() {
        assert_eq!(HeavenlyStem::Jia.to_string(), "甲");
        assert_eq!(EarthlyBranch::Zi.to_string(), "子");
        assert_eq!(ZodiacAnimal::Rooster.to_string(), "Rooster");
    }
}
