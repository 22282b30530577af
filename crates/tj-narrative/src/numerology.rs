//! Pythagorean numerology.
//!
//! Letters map to 1-9 cyclically (a=1 … i=9, j=1 …). Reductions sum the
//! decimal digits until one digit remains, keeping the master numbers 11,
//! 22 and 33 where a reading calls for it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Numbers that are not reduced further in personal readings.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit, stopping at a master number when
/// `keep_master` is set.
pub fn reduce(mut n: u32, keep_master: bool) -> u32 {
    while n > 9 && !(keep_master && MASTER_NUMBERS.contains(&n)) {
        n = digit_sum(n);
    }
    n
}

/// Life path: `year + month + day`, reduced with master numbers kept.
pub fn life_path(birth: NaiveDate) -> u32 {
    let total = birth.year().unsigned_abs() + birth.month() + birth.day();
    reduce(total, true)
}

/// Frequency of a calendar day: the digit sum of `YYYYMMDD`, reduced to 1-9.
pub fn daily_frequency(date: NaiveDate) -> u32 {
    let total =
        digit_sum(date.year().unsigned_abs()) + digit_sum(date.month()) + digit_sum(date.day());
    reduce(total, false)
}

/// Value of a Latin letter, case-insensitive.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase()
        .then(|| (u32::from(c) - u32::from('a')) % 9 + 1)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn name_number(name: &str, keep: impl Fn(char) -> bool) -> Option<u32> {
    let values: Vec<u32> = name
        .chars()
        .filter(|&c| keep(c))
        .filter_map(letter_value)
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(reduce(values.iter().sum(), true))
}

/// Expression number from every letter of the name.
pub fn expression(name: &str) -> Option<u32> {
    name_number(name, |_| true)
}

/// Soul urge number from the vowels.
pub fn soul_urge(name: &str) -> Option<u32> {
    name_number(name, is_vowel)
}

/// Personality number from the consonants.
pub fn personality(name: &str) -> Option<u32> {
    name_number(name, |c| !is_vowel(c))
}

/// Title, Chinese name and keywords of a number.
pub fn describe(n: u32) -> Option<(&'static str, &'static str, &'static str)> {
    let entry = match n {
        1 => ("The Independent", "独立者", "独立、创新、领袖"),
        2 => ("The Diplomat", "外交官", "合作、平衡、外交"),
        3 => ("The Creative", "创造者", "创意、表达、社交"),
        4 => ("The Builder", "建设者", "稳定、勤奋、务实"),
        5 => ("The Adventurer", "探险家", "自由、冒险、变化"),
        6 => ("The Nurturer", "滋养者", "责任、和谐、家庭"),
        7 => ("The Seeker", "探索者", "灵性、探索、分析"),
        8 => ("The Achiever", "成就者", "权力、成就、物质"),
        9 => ("The Humanitarian", "人道主义者", "人道、智慧、终结"),
        11 => ("The Master Teacher", "大师导师", "直觉、启迪、灵性"),
        22 => ("The Master Builder", "大师建设者", "远见、建设、实干"),
        33 => ("The Master Healer", "大师疗愈者", "疗愈、奉献、慈悲"),
        _ => return None,
    };
    Some(entry)
}

/// Keywords of a number, or an empty string for numbers without a meaning.
pub fn keywords(n: u32) -> &'static str {
    describe(n).map_or("", |(_, _, k)| k)
}

/// Numbers that get along with `n`.
pub fn compatible_numbers(n: u32) -> &'static [u32] {
    match n {
        1 | 5 | 7 | 9 => &[1, 3, 5, 7, 9],
        2 | 4 => &[2, 4, 8],
        3 => &[1, 3, 5, 9],
        6 | 8 => &[2, 4, 6, 8],
        11 => &[1, 2, 3, 5, 7, 9, 11],
        22 => &[1, 2, 3, 4, 6, 8, 22],
        33 => &[1, 3, 5, 7, 9, 33],
        _ => &[],
    }
}

/// Personal numbers of a birth date and, optionally, a Latin-letter name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyReading {
    /// Life path number.
    pub life_path: u32,
    /// Day of the month, unreduced.
    pub birthday: u32,
    /// Expression number; needs a name.
    pub expression: Option<u32>,
    /// Soul urge number; needs a name with vowels.
    pub soul_urge: Option<u32>,
    /// Personality number; needs a name with consonants.
    pub personality: Option<u32>,
}

impl NumerologyReading {
    /// Compute the reading.
    pub fn new(birth: NaiveDate, name: Option<&str>) -> Self {
        let name = name.unwrap_or_default();
        Self {
            life_path: life_path(birth),
            birthday: birth.day(),
            expression: expression(name),
            soul_urge: soul_urge(name),
            personality: personality(name),
        }
    }

    /// Numbers compatible with the life path.
    pub fn compatible(&self) -> &'static [u32] {
        compatible_numbers(self.life_path)
    }
}

impl std::fmt::Display for NumerologyReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "生命灵数 {}", self.life_path)?;
        if let Some((title, chinese, words)) = describe(self.life_path) {
            write!(f, " {chinese} ({title}): {words}")?;
        }
        let named = [
            ("表达数", self.expression),
            ("灵魂数", self.soul_urge),
            ("人格数", self.personality),
        ];
        for (label, value) in named {
            if let Some(v) = value {
                write!(f, "\n{label} {v} {}", keywords(v))?;
            }
        }
        write!(f, "\n生日数 {}", self.birthday)
    }
}
