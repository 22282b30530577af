//! Names and readings of the sixty-four hexagrams.
//!
//! Hexagrams are numbered here by their trigram pair, but the traditional
//! names follow the King Wen sequence. [`KING_WEN`] bridges the two.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};
use crate::trigram::Trigram;

/// Name and short reading of one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    /// Position in the King Wen sequence, 1-64.
    pub king_wen: u8,
    /// Romanized name.
    pub name: &'static str,
    /// Chinese name.
    pub chinese: &'static str,
    /// English gloss.
    pub meaning: &'static str,
    /// One-line advice.
    pub advice: &'static str,
}

const fn info(
    king_wen: u8,
    name: &'static str,
    chinese: &'static str,
    meaning: &'static str,
    advice: &'static str,
) -> HexagramInfo {
    HexagramInfo {
        king_wen,
        name,
        chinese,
        meaning,
        advice,
    }
}

/// `KING_WEN[upper.bits()][lower.bits()]`, rows and columns in
/// [`Trigram::ALL`] order.
#[rustfmt::skip]
pub const KING_WEN: [[u8; 8]; 8] = [
    [2, 24, 7, 19, 15, 36, 46, 11],   // 坤
    [16, 51, 40, 54, 62, 55, 32, 34], // 震
    [8, 3, 29, 60, 39, 63, 48, 5],    // 坎
    [45, 17, 47, 58, 31, 49, 28, 43], // 兑
    [23, 27, 4, 41, 52, 22, 18, 26],  // 艮
    [35, 21, 64, 38, 56, 30, 50, 14], // 离
    [20, 42, 59, 61, 53, 37, 57, 9],  // 巽
    [12, 25, 6, 10, 33, 13, 44, 1],   // 乾
];

const HEXAGRAMS: [HexagramInfo; 64] = [
    info(1, "Qian", "乾", "Creative Force - Heaven", "Be assertive and leading"),
    info(2, "Kun", "坤", "Receiving Force - Earth", "Be receptive and nurturing"),
    info(3, "Zhun", "屯", "Difficulty at the Beginning", "Start slowly and carefully"),
    info(4, "Meng", "蒙", "Youthful Folly", "Seek guidance and education"),
    info(5, "Xu", "需", "Waiting", "Have patience and prepare"),
    info(6, "Song", "讼", "Conflict", "Avoid disputes, seek harmony"),
    info(7, "Shi", "师", "The Army", "Organize and lead with discipline"),
    info(8, "Bi", "比", "Seeking Alliance", "Build relationships and trust"),
    info(9, "Xiao Chu", "小畜", "Small Accumulation", "Gradual progress, small wins"),
    info(10, "Lu", "履", "Treading Carefully", "Proceed with caution"),
    info(11, "Tai", "泰", "Peace and Harmony", "Enjoy prosperity and balance"),
    info(12, "Pi", "否", "Obstruction", "Wait for better times"),
    info(13, "Tong Ren", "同人", "Seeking Fellowship", "Connect with like-minded people"),
    info(14, "Da You", "大有", "Great Possession", "Enjoy success and abundance"),
    info(15, "Qian", "谦", "Modesty", "Stay humble and grounded"),
    info(16, "Yu", "豫", "Enthusiasm", "Channel energy positively"),
    info(17, "Sui", "随", "Following", "Adapt and go with flow"),
    info(18, "Gu", "蛊", "Decay", "Address problems before they spread"),
    info(19, "Lin", "临", "Approaching", "Take initiative and lead"),
    info(20, "Guan", "观", "Contemplation", "Observe before acting"),
    info(21, "Shi Ke", "噬嗑", "Biting Through", "Take decisive action"),
    info(22, "Bi", "贲", "Adornment", "Focus on presentation"),
    info(23, "Bo", "剥", "Stripping Away", "Simplify and let go"),
    info(24, "Fu", "复", "Return", "Time for renewal and restart"),
    info(25, "Wu Wang", "无妄", "Innocence", "Act with sincerity"),
    info(26, "Da Chu", "大畜", "Great Accumulation", "Prepare for big opportunities"),
    info(27, "Yi", "颐", "Nourishment", "Take care of your foundation"),
    info(28, "Da Guo", "大过", "Great Excess", "Balance extremes carefully"),
    info(29, "Kan", "坎", "Danger", "Stay cautious and resilient"),
    info(30, "Li", "离", "Clarity", "Seek illumination and awareness"),
    info(31, "Xian", "咸", "Influence", "Be sensitive to others"),
    info(32, "Heng", "恒", "Constancy", "Stay persistent and steady"),
    info(33, "Dun", "遯", "Retreat", "Know when to step back"),
    info(34, "Da Zhuang", "大壮", "Great Strength", "Channel power wisely"),
    info(35, "Jin", "晋", "Progress", "Move forward with grace"),
    info(36, "Ming Yi", "明夷", "Darkness Visible", "Endure through difficulty"),
    info(37, "Jia Ren", "家人", "Family", "Focus on home and relationships"),
    info(38, "Kui", "睽", "Opposition", "Find common ground"),
    info(39, "Jian", "蹇", "Obstruction", "Navigate obstacles carefully"),
    info(40, "Jie", "解", "Release", "Let go of burdens"),
    info(41, "Sun", "损", "Decrease", "Simplify and reduce"),
    info(42, "Yi", "益", "Increase", "Build and expand"),
    info(43, "Guai", "夬", "Breakthrough", "Make decisive changes"),
    info(44, "Gou", "姤", "Meeting", "Seize opportunities wisely"),
    info(45, "Cui", "萃", "Gathering", "Unite with others"),
    info(46, "Sheng", "升", "Rising", "Continue upward progress"),
    info(47, "Kun", "困", "Exhaustion", "Find strength in adversity"),
    info(48, "Jing", "井", "The Well", "Maintain your foundation"),
    info(49, "Ge", "革", "Transformation", "Embrace necessary changes"),
    info(50, "Ding", "鼎", "The Cauldron", "New beginnings await"),
    info(51, "Zhen", "震", "Thunder", "Awaken and take action"),
    info(52, "Gen", "艮", "Stillness", "Find inner peace"),
    info(53, "Jian", "渐", "Gradual Progress", "Step by step advancement"),
    info(54, "Gui Mei", "归妹", "Marriage", "Balance partnerships"),
    info(55, "Feng", "丰", "Abundance", "Maximize your potential"),
    info(56, "Lv", "旅", "Travel", "Adapt to new environments"),
    info(57, "Xun", "巽", "Wind", "Be flexible and gentle"),
    info(58, "Dui", "兑", "Joy", "Share happiness with others"),
    info(59, "Huan", "涣", "Dispersion", "Clear obstacles and spread"),
    info(60, "Jie", "节", "Moderation", "Set boundaries wisely"),
    info(61, "Zhong Fu", "中孚", "Sincerity", "Be true to yourself"),
    info(62, "Xiao Guo", "小过", "Small Excess", "Pay attention to details"),
    info(63, "Ji Ji", "既济", "Completion", "Celebrate achievements"),
    info(64, "Wei Ji", "未济", "Before Completion", "Prepare for next cycle"),
];

/// King Wen number of the hexagram with the given trigrams.
pub fn king_wen_number(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.bits() as usize][lower.bits() as usize]
}

/// Name and reading of the hexagram with the given trigrams.
pub fn hexagram_info(upper: Trigram, lower: Trigram) -> &'static HexagramInfo {
    &HEXAGRAMS[(king_wen_number(upper, lower) - 1) as usize]
}

/// Look up a hexagram by King Wen number.
pub fn by_king_wen(number: u32) -> OracleResult<&'static HexagramInfo> {
    match number {
        1..=64 => Ok(&HEXAGRAMS[(number - 1) as usize]),
        other => Err(OracleError::InvalidHexagramNumber(other)),
    }
}
