//! Tai sui (太岁): the animals a year branch offends, and what to do about it.
//!
//! For a year branch `b` the offended branches are `b` itself (值), the
//! opposite branch (冲), the harm partner (害, indices summing to 7 mod 12)
//! and the break partner (破). The four never coincide.

use serde::{Deserialize, Serialize};
use tj_core::{EarthlyBranch, ZodiacAnimal};

/// How a branch stands to the year's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaiSuiKind {
    /// 值太岁: the year's own animal.
    Same,
    /// 冲太岁: the opposite animal.
    Clash,
    /// 害太岁: the harm partner.
    Harm,
    /// 破太岁: the break partner.
    Break,
}

/// Break partner by branch index: 子酉 丑辰 寅亥 卯午 巳申 未戌.
const BREAK_PARTNER: [usize; 12] = [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2];

impl TaiSuiKind {
    /// All kinds, strongest first.
    pub const ALL: [Self; 4] = [Self::Same, Self::Clash, Self::Harm, Self::Break];

    /// The branch offended in this way by `year`.
    pub fn offended_branch(self, year: EarthlyBranch) -> EarthlyBranch {
        let b = year.index();
        match self {
            Self::Same => year,
            Self::Clash => year.clash(),
            Self::Harm => EarthlyBranch::ALL[(19 - b) % 12],
            Self::Break => EarthlyBranch::ALL[BREAK_PARTNER[b]],
        }
    }

    /// Chinese label.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Same => "值太岁",
            Self::Clash => "冲太岁",
            Self::Harm => "害太岁",
            Self::Break => "破太岁",
        }
    }

    /// Customary remedies.
    pub fn remedies(self) -> &'static [&'static str] {
        match self {
            Self::Same => &["多喝水", "穿白色衣物", "家中放置蓝色物品", "避免穿红色"],
            Self::Clash => &["佩戴金属饰品", "保持低调", "多行善积德", "避免冒险"],
            Self::Harm => &["佩戴玉饰", "谨言慎行", "多静心", "避免锋利物品"],
            Self::Break => &["穿金色衣物", "多接触水", "保持平和心态", "避免与人争执"],
        }
    }
}

impl std::fmt::Display for TaiSuiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

/// How `animal` fares in a year of `year`, if it offends tai sui at all.
pub fn offends(year: EarthlyBranch, animal: ZodiacAnimal) -> Option<TaiSuiKind> {
    TaiSuiKind::ALL
        .into_iter()
        .find(|kind| kind.offended_branch(year) == animal.branch())
}

/// The four animals offending tai sui in a year of `year`.
pub fn tai_sui_animals(year: EarthlyBranch) -> [(TaiSuiKind, ZodiacAnimal); 4] {
    TaiSuiKind::ALL.map(|kind| (kind, kind.offended_branch(year).zodiac()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horse_year() {
        let animals = tai_sui_animals(EarthlyBranch::Wu);
        assert_eq!(
            animals,
            [
                (TaiSuiKind::Same, ZodiacAnimal::Horse),
                (TaiSuiKind::Clash, ZodiacAnimal::Rat),
                (TaiSuiKind::Harm, ZodiacAnimal::Ox),
                (TaiSuiKind::Break, ZodiacAnimal::Rabbit),
            ]
        );
    }

    #[test]
    fn pairs_are_symmetric() {
        for b in EarthlyBranch::ALL {
            for kind in [TaiSuiKind::Clash, TaiSuiKind::Harm, TaiSuiKind::Break] {
                let partner = kind.offended_branch(b);
                assert_eq!(kind.offended_branch(partner), b, "{kind} {b}");
            }
        }
    }

    #[test]
    fn four_distinct_animals() {
        for b in EarthlyBranch::ALL {
            let animals = tai_sui_animals(b).map(|(_, a)| a);
            for (i, a) in animals.iter().enumerate() {
                assert!(!animals[i + 1..].contains(a), "{b}: {a} repeated");
            }
        }
    }

    #[test]
    fn offends_lookup() {
        assert_eq!(
            offends(EarthlyBranch::Wu, ZodiacAnimal::Rat),
            Some(TaiSuiKind::Clash)
        );
        assert_eq!(offends(EarthlyBranch::Wu, ZodiacAnimal::Tiger), None);
        assert_eq!(
            offends(EarthlyBranch::Zi, ZodiacAnimal::Goat),
            Some(TaiSuiKind::Harm)
        );
        assert_eq!(
            offends(EarthlyBranch::Zi, ZodiacAnimal::Rooster),
            Some(TaiSuiKind::Break)
        );
    }

    #[test]
    fn remedies_listed() {
        for kind in TaiSuiKind::ALL {
            assert_eq!(kind.remedies().len(), 4);
        }
        assert_eq!(TaiSuiKind::Same.to_string(), "值太岁");
    }
}
