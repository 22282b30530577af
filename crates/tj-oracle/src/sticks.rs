//! Fortune sticks (签).

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

/// One fortune stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortuneStick {
    /// Stick number, 1-8.
    pub number: u8,
    /// Grade, e.g. 上上签.
    pub title: &'static str,
    /// The verse.
    pub content: &'static str,
    /// What to do about it.
    pub advice: &'static str,
}

impl std::fmt::Display for FortuneStick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "第{}签 {}：{}。{}",
            self.number, self.title, self.content, self.advice
        )
    }
}

/// The eight sticks in the cup.
pub const STICKS: [FortuneStick; 8] = [
    FortuneStick {
        number: 1,
        title: "上上签",
        content: "吉人自有天相，大吉大利",
        advice: "今日诸事皆宜，可放手去做",
    },
    FortuneStick {
        number: 2,
        title: "上签",
        content: "春风得意，马到成功",
        advice: "努力必有回报，坚持下去",
    },
    FortuneStick {
        number: 3,
        title: "中上",
        content: "稳扎稳打，步步高升",
        advice: "循序渐进，不可急躁",
    },
    FortuneStick {
        number: 4,
        title: "中签",
        content: "平平稳稳，无忧无虑",
        advice: "保持现状，静心养性",
    },
    FortuneStick {
        number: 5,
        title: "中下",
        content: "小人作祟，需加防范",
        advice: "谨言慎行，避免冲突",
    },
    FortuneStick {
        number: 6,
        title: "下签",
        content: "困难重重，需待时机",
        advice: "不宜妄动，静待时机",
    },
    FortuneStick {
        number: 7,
        title: "下下签",
        content: "危机四伏，步步惊心",
        advice: "退避三舍，保守为上",
    },
    FortuneStick {
        number: 8,
        title: "上签",
        content: "贵人相助，好事将近",
        advice: "把握机遇，乘势而为",
    },
];

/// Draw a stick at random.
pub fn draw_stick(rng: &mut StdRng) -> &'static FortuneStick {
    &STICKS[rng.random_range(0..STICKS.len())]
}

/// The stick for a fixed seed: `seed mod 8`.
pub fn stick_for_seed(seed: u64) -> &'static FortuneStick {
    &STICKS[(seed % STICKS.len() as u64) as usize]
}
