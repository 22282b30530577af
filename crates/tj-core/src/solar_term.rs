//! The twelve 节, the solar terms that open each month of the
//! solar-term calendar.
//!
//! A 节 falls when the sun's apparent ecliptic longitude reaches its
//! target (立春 at 315 degrees, then every 30 degrees). The longitude is
//! taken from the leading terms of the VSOP87 Earth series with nutation
//! and aberration (Meeus, *Astronomical Algorithms*, 2nd ed., chapters 25
//! and 32), which places each term within about a minute. Term dates are
//! civil dates in China Standard Time (UTC+8), and a month starts on the
//! day its 节 falls.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::stem_branch::EarthlyBranch;

/// Julian day of 0001-01-01 00:00 UTC minus one, so that
/// `num_days_from_ce + JD_CE_OFFSET` is the Julian day of that midnight.
const JD_CE_OFFSET: f64 = 1_721_424.5;
const J2000: f64 = 2_451_545.0;
const TROPICAL_YEAR: f64 = 365.2422;
const CST_OFFSET_DAYS: f64 = 8.0 / 24.0;

// Heliocentric longitude of the Earth, VSOP87 series L0..L5 (Meeus,
// Appendix III). Each row is [A, B, C] for A * cos(B + C * t), with t in
// Julian millennia from J2000 and the sum in units of 1e-8 radian.
#[rustfmt::skip]
static L0: [[f64; 3]; 64] = [
    [175347046.0, 0.0, 0.0],
    [3341656.0, 4.6692568, 6283.07585],
    [34894.0, 4.6261, 12566.1517],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11506.7698],
    [1273.0, 2.0371, 529.691],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.92, 0.067],
    [317.0, 5.849, 11790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.98],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161000.69],
    [85.0, 1.3, 6275.96],
    [85.0, 3.67, 71430.7],
    [80.0, 1.81, 17260.15],
    [79.0, 3.04, 12036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.5, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.9],
    [57.0, 2.78, 6286.6],
    [56.0, 4.39, 14143.5],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.4, 19651.05],
    [39.0, 6.17, 10447.39],
    [37.0, 6.04, 10213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17789.85],
    [30.0, 0.44, 83996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];
static L1: [[f64; 3]; 34] = [
    [628331966747.0, 0.0, 0.0],
    [206059.0, 2.678235, 6283.07585],
    [4303.0, 2.6351, 12566.1517],
    [425.0, 1.59, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.4, 796.3],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.3],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.0],
    [11.0, 0.77, 553.57],
    [10.0, 1.3, 6286.6],
    [10.0, 4.24, 1349.87],
    [9.0, 2.7, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.3, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];
static L2: [[f64; 3]; 20] = [
    [52919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.3],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18849.23],
    [9.0, 2.06, 77713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.3],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];
static L3: [[f64; 3]; 7] = [
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12566.15],
    [3.0, 5.2, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.3, 18849.23],
    [1.0, 5.97, 242.73],
];
static L4: [[f64; 3]; 3] = [
    [114.0, PI, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12566.15],
];
static L5: [[f64; 3]; 1] = [
    [1.0, PI, 0.0],
];

/// One of the twelve 节, in calendar order from 小寒.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jie {
    /// 小寒, opens the 丑 month.
    XiaoHan,
    /// 立春, opens the 寅 month.
    LiChun,
    /// 惊蛰, opens the 卯 month.
    JingZhe,
    /// 清明, opens the 辰 month.
    QingMing,
    /// 立夏, opens the 巳 month.
    LiXia,
    /// 芒种, opens the 午 month.
    MangZhong,
    /// 小暑, opens the 未 month.
    XiaoShu,
    /// 立秋, opens the 申 month.
    LiQiu,
    /// 白露, opens the 酉 month.
    BaiLu,
    /// 寒露, opens the 戌 month.
    HanLu,
    /// 立冬, opens the 亥 month.
    LiDong,
    /// 大雪, opens the 子 month.
    DaXue,
}

const JIE_NAMES: [&str; 12] = [
    "小寒", "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪",
];

impl Jie {
    /// All twelve in calendar order. The n-th one falls in the n-th
    /// Gregorian month.
    pub const ALL: [Self; 12] = [
        Self::XiaoHan,
        Self::LiChun,
        Self::JingZhe,
        Self::QingMing,
        Self::LiXia,
        Self::MangZhong,
        Self::XiaoShu,
        Self::LiQiu,
        Self::BaiLu,
        Self::HanLu,
        Self::LiDong,
        Self::DaXue,
    ];

    /// Position in calendar order, 0..=11.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        JIE_NAMES[self.index()]
    }

    /// Apparent solar longitude at which the term falls, in degrees.
    pub fn longitude(self) -> f64 {
        (285.0 + 30.0 * self.index() as f64) % 360.0
    }

    /// Branch of the month this term opens.
    pub fn month_branch(self) -> EarthlyBranch {
        EarthlyBranch::wrapping(self.index() as i64 + 1)
    }

    /// The civil date (UTC+8) on which the term falls in solar `year`.
    pub fn date_in(self, year: i32) -> Option<NaiveDate> {
        let ut = term_moment(year, self.longitude())? - delta_t(year) / 86_400.0;
        let days = (ut + CST_OFFSET_DAYS - JD_CE_OFFSET).floor();
        NaiveDate::from_num_days_from_ce_opt(days as i32)
    }
}

impl std::fmt::Display for Jie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// Branch of the solar-term month containing `date`.
///
/// Dates from 大雪 up to the next 小寒 belong to 子, 小寒 to 立春 to 丑,
/// and so on. The lunar month number plays no part.
pub fn solar_month_branch(date: NaiveDate) -> EarthlyBranch {
    let jie = Jie::ALL[date.month0() as usize];
    match jie.date_in(date.year()) {
        Some(start) if date < start => EarthlyBranch::wrapping(jie.index() as i64),
        _ => jie.month_branch(),
    }
}

/// Julian day of midnight UTC at the start of `date`.
fn julian_day(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + JD_CE_OFFSET
}

/// Normalize an angle to (-180, 180].
fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn series(terms: &[[f64; 3]], t: f64) -> f64 {
    terms.iter().map(|[a, b, c]| a * (b + c * t).cos()).sum()
}

/// Apparent geocentric longitude of the sun in degrees [0, 360), for a
/// Julian ephemeris day.
pub(crate) fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / 365_250.0;
    let earth = (series(&L0, t)
        + series(&L1, t) * t
        + series(&L2, t) * t.powi(2)
        + series(&L3, t) * t.powi(3)
        + series(&L4, t) * t.powi(4)
        + series(&L5, t) * t.powi(5))
        / 1e8;

    // Nutation in longitude, accurate to half an arcsecond.
    let centuries = t * 10.0;
    let node = (125.04452 - 1934.136261 * centuries).to_radians();
    let sun = (280.4665 + 36000.7698 * centuries).to_radians();
    let moon = (218.3165 + 481267.8813 * centuries).to_radians();
    let nutation = -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin();

    // Earth-sun distance in AU, enough for the aberration term.
    let radius = 1.000140 + 0.016707 * (3.0984635 + 6283.07585 * t).cos();
    let correction_arcsec = nutation - 0.09033 - 20.4898 / radius;

    (earth.to_degrees() + 180.0 + correction_arcsec / 3600.0).rem_euclid(360.0)
}

/// Julian ephemeris day at which the sun reaches `longitude` during solar
/// `year`, refined from a mean-motion estimate anchored on 20 March.
fn term_moment(year: i32, longitude: f64) -> Option<f64> {
    let equinox = NaiveDate::from_ymd_opt(year, 3, 20)?;
    let offset = if longitude >= 270.0 {
        longitude - 360.0
    } else {
        longitude
    };
    let mut jde = julian_day(equinox) + 0.5 + offset / 360.0 * TROPICAL_YEAR;
    for _ in 0..8 {
        let miss = normalize_to_pm180(longitude - apparent_solar_longitude(jde));
        jde += miss / 360.0 * TROPICAL_YEAR;
    }
    Some(jde)
}

/// TT minus UT in seconds (Espenak and Meeus polynomials).
fn delta_t(year: i32) -> f64 {
    let y = f64::from(year);
    if !(1900..2150).contains(&year) {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if year < 1920 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941 {
        let u = y - 1920.0;
        21.20 + 0.84493 * u - 0.076100 * u.powi(2) + 0.0020936 * u.powi(3)
    } else if year < 1961 {
        let u = y - 1950.0;
        29.07 + 0.407 * u - u.powi(2) / 233.0 + u.powi(3) / 2547.0
    } else if year < 1986 {
        let u = y - 1975.0;
        45.45 + 1.067 * u - u.powi(2) / 260.0 - u.powi(3) / 718.0
    } else if year < 2005 {
        let u = y - 2000.0;
        63.86 + 0.3345 * u - 0.060374 * u.powi(2)
            + 0.0017275 * u.powi(3)
            + 0.000651814 * u.powi(4)
            + 0.00002373599 * u.powi(5)
    } else if year < 2050 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn apparent_longitude_matches_meeus_example_25b() {
        // 1992-10-13 0h TD: 199°54'21.818"
        let lon = apparent_solar_longitude(2_448_908.5);
        let expected = 199.0 + 54.0 / 60.0 + 21.818 / 3600.0;
        assert!((lon - expected).abs() < 0.0005, "{lon}");
    }

    #[test]
    fn known_term_dates() {
        assert_eq!(Jie::LiChun.date_in(2024), Some(date(2024, 2, 4)));
        assert_eq!(Jie::LiChun.date_in(2025), Some(date(2025, 2, 3)));
        assert_eq!(Jie::LiChun.date_in(2000), Some(date(2000, 2, 4)));
        assert_eq!(Jie::XiaoHan.date_in(1990), Some(date(1990, 1, 5)));
        assert_eq!(Jie::XiaoHan.date_in(2025), Some(date(2025, 1, 5)));
        assert_eq!(Jie::JingZhe.date_in(2024), Some(date(2024, 3, 5)));
        assert_eq!(Jie::QingMing.date_in(2024), Some(date(2024, 4, 4)));
        assert_eq!(Jie::MangZhong.date_in(2024), Some(date(2024, 6, 5)));
        assert_eq!(Jie::DaXue.date_in(2024), Some(date(2024, 12, 6)));
    }

    #[test]
    fn each_term_falls_in_its_own_month() {
        for year in [1900, 1937, 1984, 2000, 2033, 2066, 2100] {
            for jie in Jie::ALL {
                let d = jie.date_in(year).unwrap();
                assert_eq!(d.month0() as usize, jie.index(), "{year} {jie}");
                assert!((3..=9).contains(&d.day()), "{year} {jie} {d}");
            }
        }
    }

    #[test]
    fn month_changes_on_term_day() {
        assert_eq!(solar_month_branch(date(2025, 2, 2)), EarthlyBranch::Chou);
        assert_eq!(solar_month_branch(date(2025, 2, 3)), EarthlyBranch::Yin);
        assert_eq!(solar_month_branch(date(1990, 1, 4)), EarthlyBranch::Zi);
        assert_eq!(solar_month_branch(date(1990, 1, 5)), EarthlyBranch::Chou);
    }

    #[test]
    fn month_branches_through_a_year() {
        assert_eq!(solar_month_branch(date(2024, 1, 1)), EarthlyBranch::Zi);
        assert_eq!(solar_month_branch(date(2024, 6, 15)), EarthlyBranch::Wu);
        assert_eq!(solar_month_branch(date(2024, 12, 5)), EarthlyBranch::Hai);
        assert_eq!(solar_month_branch(date(2024, 12, 31)), EarthlyBranch::Zi);
    }

    #[test]
    fn branch_follows_jie_order() {
        assert_eq!(Jie::LiChun.month_branch(), EarthlyBranch::Yin);
        assert_eq!(Jie::DaXue.month_branch(), EarthlyBranch::Zi);
        assert_eq!(Jie::XiaoHan.month_branch(), EarthlyBranch::Chou);
        assert_eq!(Jie::LiChun.longitude(), 315.0);
        assert_eq!(Jie::QingMing.longitude(), 15.0);
        assert_eq!(Jie::LiChun.to_string(), "立春");
    }

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_to_pm180(190.0), -170.0);
        assert_eq!(normalize_to_pm180(-190.0), 170.0);
        assert_eq!(normalize_to_pm180(180.0), 180.0);
    }
}
