//! Table-driven Chinese lunisolar calendar.
//!
//! Each lunar year from 1900 to 2100 is packed into one word:
//!
//! - bits 0-3: the leap month number, 0 when the year has none
//! - bits 4-15: month lengths, month 1 at bit 15 down to month 12 at bit 4,
//!   set for a 30-day month and clear for a 29-day month
//! - bit 16: set when the leap month has 30 days
//!
//! Lunar 1900/1/1 falls on solar 1900-01-31.
//!
//! The month animal does not follow the lunar month number. It comes from
//! the solar-term month the date falls in, which opens on its 节
//! (立春 for 寅, 惊蛰 for 卯, and so on).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::ganzhi::GanZhi;
use crate::solar_term::solar_month_branch;
use crate::stem_branch::{EarthlyBranch, ZodiacAnimal};

const FIRST_YEAR: i32 = 1900;

#[rustfmt::skip]
const YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

/// Days from 0001-01-01 (day 1) to 1900-01-31, the first lunar new year.
const BASE_DAYS_FROM_CE: i32 = 693_626;

/// Days from 0001-01-01 (day 1) to 1900-01-01, a 甲戌 day.
const DAY_CYCLE_EPOCH: i32 = 693_596;
const DAY_CYCLE_EPOCH_INDEX: i64 = 10;

fn leap_month(info: u32) -> u32 {
    info & 0xf
}

fn leap_days(info: u32) -> i64 {
    match (leap_month(info), info & 0x1_0000) {
        (0, _) => 0,
        (_, 0) => 29,
        _ => 30,
    }
}

fn month_days(info: u32, month: u32) -> i64 {
    if info & (0x1_0000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(info: u32) -> i64 {
    (1..=12).map(|m| month_days(info, m)).sum::<i64>() + leap_days(info)
}

/// The sexagenary member of a solar day, counted continuously from
/// 1900-01-01 (甲戌). Works for any date, inside the lunar table or not.
pub fn day_cycle(date: NaiveDate) -> GanZhi {
    let offset = i64::from(date.num_days_from_ce() - DAY_CYCLE_EPOCH);
    GanZhi::from_cycle_index(offset + DAY_CYCLE_EPOCH_INDEX)
}

/// A resolved lunar date together with its three zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, changing at the lunar new year.
    pub year: i32,
    /// Lunar month, 1-12. A leap month repeats the number of the month before it.
    pub month: u32,
    /// Day of the lunar month, 1-30.
    pub day: u32,
    /// Whether `month` is the intercalary repeat.
    pub is_leap_month: bool,
    /// Animal of the lunar year.
    pub year_zodiac: ZodiacAnimal,
    /// Animal of the solar-term month (立春 to 惊蛰 = 虎).
    pub month_zodiac: ZodiacAnimal,
    /// Animal of the day in the continuous day cycle.
    pub day_zodiac: ZodiacAnimal,
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "闰" } else { "" };
        write!(f, "{}年{}{}月{}日", self.year, leap, self.month, self.day)
    }
}

/// Anything able to turn a solar date into a lunar date.
///
/// The sexagenary calendar only needs the lunar year, month and day plus
/// the three zodiac animals, so any adapter producing a [`LunarDate`] will do.
pub trait LunarCalendar {
    /// Resolve a solar date, or fail with [`CoreError::DateOutOfRange`].
    fn lunar_date(&self, date: NaiveDate) -> CoreResult<LunarDate>;
}

/// Lunar calendar backed by the packed month tables for 1900-2100.
#[derive(Debug, Clone)]
pub struct TableLunarCalendar {
    /// Offset in days from the base date to each lunar new year, plus one
    /// trailing entry marking the end of the table.
    new_years: Vec<i64>,
}

impl Default for TableLunarCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLunarCalendar {
    /// Build the calendar, precomputing the new year offsets.
    pub fn new() -> Self {
        let mut new_years = Vec::with_capacity(YEAR_INFO.len() + 1);
        let mut offset = 0;
        new_years.push(offset);
        for info in YEAR_INFO {
            offset += year_days(info);
            new_years.push(offset);
        }
        Self { new_years }
    }

    /// First and last solar dates the table covers.
    pub fn supported_range(&self) -> (NaiveDate, NaiveDate) {
        let total = self.new_years.last().copied().unwrap_or(0);
        (Self::from_offset(0), Self::from_offset(total - 1))
    }

    fn from_offset(offset: i64) -> NaiveDate {
        i32::try_from(offset)
            .ok()
            .and_then(|o| NaiveDate::from_num_days_from_ce_opt(BASE_DAYS_FROM_CE + o))
            .unwrap_or(NaiveDate::MIN)
    }

    fn out_of_range(&self, date: NaiveDate) -> CoreError {
        let (first, last) = self.supported_range();
        tracing::warn!(%date, %first, %last, "date outside lunar table");
        CoreError::DateOutOfRange { date, first, last }
    }
}

impl LunarCalendar for TableLunarCalendar {
    fn lunar_date(&self, date: NaiveDate) -> CoreResult<LunarDate> {
        let offset = i64::from(date.num_days_from_ce() - BASE_DAYS_FROM_CE);
        let total = self.new_years.last().copied().unwrap_or(0);
        if !(0..total).contains(&offset) {
            return Err(self.out_of_range(date));
        }

        // new_years[0] == 0 <= offset, so the partition point is at least 1.
        let year_index = self.new_years.partition_point(|&start| start <= offset) - 1;
        let info = YEAR_INFO[year_index];
        let mut remaining = offset - self.new_years[year_index];

        let leap = leap_month(info);
        let mut month = 1;
        let mut is_leap_month = false;
        loop {
            let days = if is_leap_month {
                leap_days(info)
            } else {
                month_days(info, month)
            };
            if remaining < days || month > 12 {
                break;
            }
            remaining -= days;
            if leap != 0 && month == leap && !is_leap_month {
                is_leap_month = true;
            } else {
                is_leap_month = false;
                month += 1;
            }
        }

        let year = FIRST_YEAR + year_index as i32;
        Ok(LunarDate {
            year,
            month,
            day: remaining as u32 + 1,
            is_leap_month,
            year_zodiac: EarthlyBranch::wrapping(i64::from(year) - 4).zodiac(),
            month_zodiac: solar_month_branch(date).zodiac(),
            day_zodiac: day_cycle(date).branch().zodiac(),
        })
    }
}
