//! Golden values for lunar conversion and four-pillar derivation.

use chrono::NaiveDate;
use tj_core::{
    EarthlyBranch, LunarCalendar, SexagenaryCalendar, TableLunarCalendar, solar_month_branch,
};

struct Golden {
    solar: (i32, u32, u32),
    lunar: (i32, u32, u32, bool),
    year: &'static str,
    month: &'static str,
    day: &'static str,
    hour_zi: &'static str,
    hour_wu: &'static str,
    day_cycle: &'static str,
}

const GOLDEN: &[Golden] = &[
    Golden {
        solar: (1900, 1, 31),
        lunar: (1900, 1, 1, false),
        year: "庚子",
        month: "甲丑",
        day: "辛辰",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "甲辰",
    },
    Golden {
        solar: (1984, 6, 15),
        lunar: (1984, 5, 16, false),
        year: "甲子",
        month: "丙午",
        day: "丙辰",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "庚辰",
    },
    Golden {
        solar: (1990, 1, 1),
        lunar: (1989, 12, 5, false),
        year: "己巳",
        month: "乙子",
        day: "乙寅",
        hour_zi: "丙子",
        hour_wu: "壬午",
        day_cycle: "丙寅",
    },
    Golden {
        solar: (2000, 1, 1),
        lunar: (1999, 11, 25, false),
        year: "己卯",
        month: "癸子",
        day: "乙午",
        hour_zi: "丙子",
        hour_wu: "壬午",
        day_cycle: "戊午",
    },
    Golden {
        solar: (2023, 3, 22),
        lunar: (2023, 2, 1, true),
        year: "癸卯",
        month: "己卯",
        day: "辛卯",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "己卯",
    },
    Golden {
        solar: (2023, 4, 20),
        lunar: (2023, 3, 1, false),
        year: "癸卯",
        month: "辛辰",
        day: "辛申",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "戊申",
    },
    Golden {
        solar: (2024, 2, 10),
        lunar: (2024, 1, 1, false),
        year: "甲辰",
        month: "戊寅",
        day: "辛辰",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "甲辰",
    },
    Golden {
        solar: (2026, 2, 17),
        lunar: (2026, 1, 1, false),
        year: "丙午",
        month: "庚寅",
        day: "辛戌",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "壬戌",
    },
    // Either side of 小寒 and 立春: the month turns on the 节, not the lunar month.
    Golden {
        solar: (1990, 1, 4),
        lunar: (1989, 12, 8, false),
        year: "己巳",
        month: "乙子",
        day: "戊巳",
        hour_zi: "壬子",
        hour_wu: "戊午",
        day_cycle: "己巳",
    },
    Golden {
        solar: (1990, 1, 5),
        lunar: (1989, 12, 9, false),
        year: "己巳",
        month: "乙丑",
        day: "己午",
        hour_zi: "甲子",
        hour_wu: "庚午",
        day_cycle: "庚午",
    },
    Golden {
        solar: (2024, 2, 3),
        lunar: (2023, 12, 24, false),
        year: "癸卯",
        month: "己丑",
        day: "甲酉",
        hour_zi: "甲子",
        hour_wu: "庚午",
        day_cycle: "丁酉",
    },
    Golden {
        solar: (2024, 2, 4),
        lunar: (2023, 12, 25, false),
        year: "癸卯",
        month: "己寅",
        day: "乙戌",
        hour_zi: "丙子",
        hour_wu: "壬午",
        day_cycle: "戊戌",
    },
    Golden {
        solar: (2025, 2, 1),
        lunar: (2025, 1, 4, false),
        year: "乙巳",
        month: "己丑",
        day: "甲丑",
        hour_zi: "甲子",
        hour_wu: "庚午",
        day_cycle: "辛丑",
    },
    Golden {
        solar: (2025, 2, 3),
        lunar: (2025, 1, 6, false),
        year: "乙巳",
        month: "己寅",
        day: "丙卯",
        hour_zi: "戊子",
        hour_wu: "甲午",
        day_cycle: "癸卯",
    },
];

fn solar(g: &Golden) -> NaiveDate {
    let (y, m, d) = g.solar;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn lunar_dates() {
    let cal = TableLunarCalendar::new();
    for g in GOLDEN {
        let l = cal.lunar_date(solar(g)).unwrap();
        assert_eq!(
            (l.year, l.month, l.day, l.is_leap_month),
            g.lunar,
            "{:?}",
            g.solar
        );
    }
}

#[test]
fn four_pillars() {
    let cal = SexagenaryCalendar::new();
    for g in GOLDEN {
        let p = cal.four_pillars(solar(g), None).unwrap();
        assert_eq!(p.year.to_string(), g.year, "{:?} year", g.solar);
        assert_eq!(p.month.to_string(), g.month, "{:?} month", g.solar);
        assert_eq!(p.day.to_string(), g.day, "{:?} day", g.solar);
        assert_eq!(p.hour.to_string(), g.hour_zi, "{:?} hour", g.solar);

        let p = cal
            .four_pillars(solar(g), Some(EarthlyBranch::Wu))
            .unwrap();
        assert_eq!(p.hour.to_string(), g.hour_wu, "{:?} hour 午", g.solar);
    }
}

#[test]
fn day_cycle_pillars() {
    let cal = SexagenaryCalendar::new();
    for g in GOLDEN {
        assert_eq!(cal.day_pillar(solar(g)).to_string(), g.day_cycle);
    }
}

#[test]
fn year_and_hour_pillars_always_in_cycle() {
    let cal = SexagenaryCalendar::new();
    let mut date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(1952, 1, 1).unwrap();
    while date < end {
        for hour in EarthlyBranch::ALL {
            let p = cal.four_pillars(date, Some(hour)).unwrap();
            assert!(p.year.is_cycle_member(), "{date} year {}", p.year);
            assert!(p.hour.is_cycle_member(), "{date} hour {}", p.hour);
        }
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn lunar_new_year_before_lichun_stays_in_chou_month() {
    // 2023-01-22 and 2025-01-29 open lunar years ahead of 立春.
    let cal = SexagenaryCalendar::new();
    for (y, m, d) in [(2023, 1, 22), (2025, 1, 29)] {
        let p = cal
            .four_pillars(NaiveDate::from_ymd_opt(y, m, d).unwrap(), None)
            .unwrap();
        assert_eq!(p.lunar.month, 1);
        assert_eq!(p.month.branch, EarthlyBranch::Chou, "{y}-{m}-{d}");
    }
}

#[test]
fn month_branch_matches_solar_terms() {
    let cal = SexagenaryCalendar::new();
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    while date < end {
        let p = cal.four_pillars(date, None).unwrap();
        assert_eq!(p.month.branch, solar_month_branch(date), "{date}");
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn parity_violating_day_pillar_has_no_nayin() {
    let cal = SexagenaryCalendar::new();
    let p = cal
        .four_pillars(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), None)
        .unwrap();
    assert!(p.day.gan_zhi().is_none());
    assert_eq!(p.year.nayin().map(|n| n.name), Some("大林木"));
}
