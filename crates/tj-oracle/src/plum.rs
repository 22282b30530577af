//! Plum blossom (梅花易数) casting from a date.
//!
//! The date's numbers pick the trigrams and the moving line directly, so
//! the same date always gives the same reading:
//!
//! - upper = `((year + month) mod 8) + 1`
//! - lower = `((month + day) mod 8) + 1`
//! - moving line = `((year + day) mod 6) + 1`
//!
//! Trigram numbers follow the Early Heaven order.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::hexagram::Hexagram;
use crate::trigram::Trigram;

/// The outcome of a plum blossom cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlumBlossomCast {
    /// Date the cast was taken from.
    pub date: NaiveDate,
    /// Early Heaven number of the upper trigram, 1-8.
    pub upper_number: u8,
    /// Early Heaven number of the lower trigram, 1-8.
    pub lower_number: u8,
    /// Position of the moving line, 1-6.
    pub moving_line: u8,
    /// The primary hexagram, with its moving line marked.
    pub hexagram: Hexagram,
}

impl PlumBlossomCast {
    /// The hexagram after the moving line flips.
    pub fn changed(&self) -> Hexagram {
        // A plum blossom cast always carries exactly one moving line.
        self.hexagram.changed().unwrap_or(self.hexagram)
    }
}

impl std::fmt::Display for PlumBlossomCast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let main = self.hexagram.info();
        let changed = self.changed().info();
        write!(
            f,
            "{} {}{} → {} (line {})",
            self.date,
            self.hexagram.upper().nature(),
            self.hexagram.lower().nature(),
            main.chinese,
            self.moving_line
        )?;
        write!(f, ", changes to {}", changed.chinese)
    }
}

fn small(value: i64, modulus: i64) -> u8 {
    (value.rem_euclid(modulus) + 1) as u8
}

/// Cast a plum blossom hexagram for `date`.
pub fn plum_blossom(date: NaiveDate) -> PlumBlossomCast {
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let d = i64::from(date.day());

    let upper_number = small(y + m, 8);
    let lower_number = small(m + d, 8);
    let moving_line = small(y + d, 6);

    let upper = Trigram::from_early_heaven(upper_number).unwrap_or(Trigram::Qian);
    let lower = Trigram::from_early_heaven(lower_number).unwrap_or(Trigram::Qian);
    let base = Hexagram::from_trigrams(upper, lower);
    let hexagram = base.with_moving_line(moving_line).unwrap_or(base);

    PlumBlossomCast {
        date,
        upper_number,
        lower_number,
        moving_line,
        hexagram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn numbers_from_date() {
        // 1990-05-20: (1990+5)%8+1 = 4, (5+20)%8+1 = 2, (1990+20)%6+1 = 1
        let cast = plum_blossom(date(1990, 5, 20));
        assert_eq!(cast.upper_number, 4);
        assert_eq!(cast.lower_number, 2);
        assert_eq!(cast.moving_line, 1);
        assert_eq!(cast.hexagram.upper(), Trigram::Zhen);
        assert_eq!(cast.hexagram.lower(), Trigram::Dui);
        assert_eq!(cast.hexagram.info().chinese, "归妹");
        assert_eq!(cast.hexagram.moving_lines(), vec![1]);
    }

    #[test]
    fn exactly_one_moving_line() {
        let mut d = date(2024, 1, 1);
        for _ in 0..400 {
            let cast = plum_blossom(d);
            assert_eq!(cast.hexagram.moving_lines(), vec![cast.moving_line]);
            assert_ne!(cast.changed().number(), cast.hexagram.number());
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(plum_blossom(date(2026, 2, 17)), plum_blossom(date(2026, 2, 17)));
    }

    #[test]
    fn display_mentions_change() {
        let text = plum_blossom(date(1990, 5, 20)).to_string();
        assert!(text.starts_with("1990-05-20 雷泽 → 归妹 (line 1)"));
        assert!(text.contains("changes to"));
    }
}
