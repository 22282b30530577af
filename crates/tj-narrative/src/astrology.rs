//! Simplified Western astrology.
//!
//! The sun sign comes from the usual date ranges. Moon and rising signs are
//! rough placeholders: the moon sign steps every 2.5 days through a 30-day
//! window of the day of year, and the rising sign steps every two hours of
//! the birth time. Neither tracks the sky.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use Quality::{Cardinal, Fixed, Mutable};
use WesternElement::{Air, Earth, Fire, Water};

/// Triplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternElement {
    /// 火
    Fire,
    /// 土
    Earth,
    /// 风
    Air,
    /// 水
    Water,
}

impl WesternElement {
    /// Chinese label.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Air => "风",
            Self::Water => "水",
        }
    }
}

/// Quadruplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// 开创
    Cardinal,
    /// 固定
    Fixed,
    /// 变动
    Mutable,
}

impl Quality {
    /// Chinese label.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Cardinal => "开创",
            Self::Fixed => "固定",
            Self::Mutable => "变动",
        }
    }
}

/// The twelve signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunSign {
    /// ♈ 白羊座, 3/21-4/19.
    Aries,
    /// ♉ 金牛座, 4/20-5/20.
    Taurus,
    /// ♊ 双子座, 5/21-6/20.
    Gemini,
    /// ♋ 巨蟹座, 6/21-7/22.
    Cancer,
    /// ♌ 狮子座, 7/23-8/22.
    Leo,
    /// ♍ 处女座, 8/23-9/22.
    Virgo,
    /// ♎ 天秤座, 9/23-10/22.
    Libra,
    /// ♏ 天蝎座, 10/23-11/21.
    Scorpio,
    /// ♐ 射手座, 11/22-12/21.
    Sagittarius,
    /// ♑ 摩羯座, 12/22-1/19.
    Capricorn,
    /// ♒ 水瓶座, 1/20-2/18.
    Aquarius,
    /// ♓ 双鱼座, 2/19-3/20.
    Pisces,
}

struct SignData {
    chinese: &'static str,
    symbol: char,
    element: WesternElement,
    quality: Quality,
    ruler: &'static str,
    start: (u32, u32),
    end: (u32, u32),
    traits: [&'static str; 4],
}

const fn sign(
    chinese: &'static str,
    symbol: char,
    element: WesternElement,
    quality: Quality,
    ruler: &'static str,
    (start, end): ((u32, u32), (u32, u32)),
    traits: [&'static str; 4],
) -> SignData {
    SignData {
        chinese,
        symbol,
        element,
        quality,
        ruler,
        start,
        end,
        traits,
    }
}

#[rustfmt::skip]
const SIGNS: [SignData; 12] = [
    sign("白羊座", '♈', Fire, Cardinal, "火星", ((3, 21), (4, 19)), ["勇敢", "冲动", "领导力", "竞争意识"]),
    sign("金牛座", '♉', Earth, Fixed, "金星", ((4, 20), (5, 20)), ["稳定", "务实", "忠诚", "艺术感"]),
    sign("双子座", '♊', Air, Mutable, "水星", ((5, 21), (6, 20)), ["聪明", "好奇", "多才多艺", "善变"]),
    sign("巨蟹座", '♋', Water, Cardinal, "月亮", ((6, 21), (7, 22)), ["敏感", "温柔", "顾家", "情绪化"]),
    sign("狮子座", '♌', Fire, Fixed, "太阳", ((7, 23), (8, 22)), ["自信", "慷慨", "领导力", "表演欲"]),
    sign("处女座", '♍', Earth, Mutable, "水星", ((8, 23), (9, 22)), ["细心", "完美主义", "勤劳", "分析能力"]),
    sign("天秤座", '♎', Air, Cardinal, "金星", ((9, 23), (10, 22)), ["和谐", "公正", "社交", "犹豫不决"]),
    sign("天蝎座", '♏', Water, Fixed, "冥王星", ((10, 23), (11, 21)), ["神秘", "执着", "深刻", "占有欲"]),
    sign("射手座", '♐', Fire, Mutable, "木星", ((11, 22), (12, 21)), ["乐观", "冒险精神", "自由", "直率"]),
    sign("摩羯座", '♑', Earth, Cardinal, "土星", ((12, 22), (1, 19)), ["稳重", "野心", "责任", "保守"]),
    sign("水瓶座", '♒', Air, Fixed, "天王星", ((1, 20), (2, 18)), ["创新", "独立", "人道主义", "叛逆"]),
    sign("双鱼座", '♓', Water, Mutable, "海王星", ((2, 19), (3, 20)), ["浪漫", "敏感", "艺术", "逃避"]),
];

impl SunSign {
    /// All signs, Aries first.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    fn data(self) -> &'static SignData {
        &SIGNS[self as usize]
    }

    /// Chinese name, e.g. 白羊座.
    pub fn chinese(self) -> &'static str {
        self.data().chinese
    }

    /// Unicode glyph.
    pub fn symbol(self) -> char {
        self.data().symbol
    }

    /// Triplicity.
    pub fn element(self) -> WesternElement {
        self.data().element
    }

    /// Quadruplicity.
    pub fn quality(self) -> Quality {
        self.data().quality
    }

    /// Ruling planet.
    pub fn ruler(self) -> &'static str {
        self.data().ruler
    }

    /// Four character traits.
    pub fn traits(self) -> &'static [&'static str; 4] {
        &self.data().traits
    }

    /// Whether `(month, day)` falls in the sign's range.
    pub fn contains(self, month: u32, day: u32) -> bool {
        let (start, end) = (self.data().start, self.data().end);
        let md = (month, day);
        if start <= end {
            start <= md && md <= end
        } else {
            md >= start || md <= end
        }
    }

    /// Sun sign of a birth date.
    pub fn for_date(date: NaiveDate) -> Self {
        let (m, d) = (date.month(), date.day());
        Self::ALL
            .into_iter()
            .find(|s| s.contains(m, d))
            .unwrap_or(Self::Capricorn)
    }

    /// Approximate moon sign: `floor((dayOfYear mod 30) / 2.5)`.
    pub fn moon_for_date(date: NaiveDate) -> Self {
        let step = (date.ordinal() % 30) * 2 / 5;
        Self::ALL[(step % 12) as usize]
    }

    /// Approximate rising sign: one sign per two hours of the birth time.
    pub fn rising_for_time(time: NaiveTime) -> Self {
        let minutes = time.hour() * 60 + time.minute();
        Self::ALL[(minutes / 120 % 12) as usize]
    }
}

impl std::fmt::Display for SunSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.chinese())
    }
}

/// Sun, moon and (when the birth time is known) rising sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyChart {
    /// Sign of the birth date.
    pub sun: SunSign,
    /// Approximate moon sign.
    pub moon: SunSign,
    /// Approximate rising sign; needs a birth time.
    pub rising: Option<SunSign>,
}

impl std::fmt::Display for AstrologyChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "太阳 {}  月亮 {}  上升 ", self.sun, self.moon)?;
        match self.rising {
            Some(sign) => write!(f, "{sign}"),
            None => write!(f, "需要准确的出生时间"),
        }
    }
}

/// Build a chart from a birth date and optional birth time.
pub fn chart(date: NaiveDate, time: Option<NaiveTime>) -> AstrologyChart {
    AstrologyChart {
        sun: SunSign::for_date(date),
        moon: SunSign::moon_for_date(date),
        rising: time.map(SunSign::rising_for_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sun_sign_boundaries() {
        assert_eq!(SunSign::for_date(date(2000, 3, 21)), SunSign::Aries);
        assert_eq!(SunSign::for_date(date(2000, 3, 20)), SunSign::Pisces);
        assert_eq!(SunSign::for_date(date(2000, 4, 19)), SunSign::Aries);
        assert_eq!(SunSign::for_date(date(2000, 4, 20)), SunSign::Taurus);
        assert_eq!(SunSign::for_date(date(1990, 5, 20)), SunSign::Taurus);
    }

    #[test]
    fn capricorn_wraps_year_end() {
        assert_eq!(SunSign::for_date(date(2000, 12, 22)), SunSign::Capricorn);
        assert_eq!(SunSign::for_date(date(2000, 12, 31)), SunSign::Capricorn);
        assert_eq!(SunSign::for_date(date(2001, 1, 1)), SunSign::Capricorn);
        assert_eq!(SunSign::for_date(date(2001, 1, 19)), SunSign::Capricorn);
        assert_eq!(SunSign::for_date(date(2001, 1, 20)), SunSign::Aquarius);
    }

    #[test]
    fn every_day_has_exactly_one_sign() {
        let mut d = date(2024, 1, 1);
        while d.year() == 2024 {
            let count = SunSign::ALL
                .iter()
                .filter(|s| s.contains(d.month(), d.day()))
                .count();
            assert_eq!(count, 1, "{d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn moon_sign_from_day_of_year() {
        // Jan 1 is day 1: floor(1 / 2.5) = 0.
        assert_eq!(SunSign::moon_for_date(date(2001, 1, 1)), SunSign::Aries);
        // Day 5: floor(5 / 2.5) = 2.
        assert_eq!(SunSign::moon_for_date(date(2001, 1, 5)), SunSign::Gemini);
        // Day 29: floor(29 / 2.5) = 11.
        assert_eq!(SunSign::moon_for_date(date(2001, 1, 29)), SunSign::Pisces);
        // Day 30 wraps to 0.
        assert_eq!(SunSign::moon_for_date(date(2001, 1, 30)), SunSign::Aries);
    }

    #[test]
    fn rising_sign_needs_time() {
        let c = chart(date(1990, 5, 20), None);
        assert_eq!(c.rising, None);
        assert!(c.to_string().ends_with("需要准确的出生时间"));

        let t = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let c = chart(date(1990, 5, 20), Some(t));
        // 870 minutes / 120 = 7.
        assert_eq!(c.rising, Some(SunSign::Scorpio));
        assert_eq!(
            SunSign::rising_for_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
            SunSign::Aries
        );
        assert_eq!(
            SunSign::rising_for_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap()),
            SunSign::Pisces
        );
    }

    #[test]
    fn sign_data() {
        assert_eq!(SunSign::Leo.to_string(), "♌ 狮子座");
        assert_eq!(SunSign::Leo.element(), WesternElement::Fire);
        assert_eq!(SunSign::Leo.quality(), Quality::Fixed);
        assert_eq!(SunSign::Scorpio.ruler(), "冥王星");
        assert_eq!(SunSign::Gemini.element().chinese(), "风");
        assert_eq!(SunSign::Virgo.traits()[1], "完美主义");
    }
}
