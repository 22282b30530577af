//! Six-line hexagrams and their numbering.
//!
//! Lines 1-3 form the lower trigram and lines 4-6 the upper. The hexagram
//! number is `(upper - 1) * 8 + lower` over trigram indices, so every
//! number in 1..=64 names exactly one trigram pair.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::line::{YaoLine, toss_line};
use crate::names::{HexagramInfo, hexagram_info};
use crate::trigram::Trigram;

/// Six lines, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [YaoLine; 6],
}

fn trigram_of(lines: &[YaoLine]) -> Trigram {
    Trigram::from_lines([lines[0].is_yang, lines[1].is_yang, lines[2].is_yang])
}

fn number_of(upper: Trigram, lower: Trigram) -> u8 {
    (upper.index() - 1) * 8 + lower.index()
}

/// Encode six lines into a hexagram number, 1..=64.
pub fn encode(lines: &[YaoLine; 6]) -> u8 {
    number_of(trigram_of(&lines[3..6]), trigram_of(&lines[0..3]))
}

/// Split a hexagram number into its `(upper, lower)` trigrams.
pub fn decode(number: u32) -> OracleResult<(Trigram, Trigram)> {
    if !(1..=64).contains(&number) {
        return Err(OracleError::InvalidHexagramNumber(number));
    }
    let n = (number - 1) as u8;
    Ok((Trigram::from_bits(n / 8), Trigram::from_bits(n % 8)))
}

/// Number of the changed hexagram, or `None` when no line is moving.
pub fn changed_hexagram(lines: &[YaoLine; 6]) -> Option<u8> {
    if !lines.iter().any(|l| l.is_old) {
        return None;
    }
    let changed = lines.map(|l| if l.is_old { l.flipped() } else { l });
    Some(encode(&changed))
}

/// Cast a hexagram with six three-coin tosses, bottom line first.
pub fn cast_hexagram(rng: &mut StdRng) -> Hexagram {
    let lines = [1, 2, 3, 4, 5, 6].map(|position| toss_line(rng, position));
    let hexagram = Hexagram { lines };
    tracing::debug!(
        number = hexagram.number(),
        changed = ?hexagram.changed_number(),
        "cast hexagram"
    );
    hexagram
}

impl Hexagram {
    /// Wrap six lines, bottom first.
    pub fn new(lines: [YaoLine; 6]) -> Self {
        Self { lines }
    }

    /// Build from any slice of exactly six lines.
    pub fn from_lines(lines: &[YaoLine]) -> OracleResult<Self> {
        let lines: [YaoLine; 6] = lines
            .try_into()
            .map_err(|_| OracleError::WrongLineCount(lines.len()))?;
        Ok(Self { lines })
    }

    /// Build from six coin sums, bottom first.
    pub fn from_sums(sums: &[u8]) -> OracleResult<Self> {
        let lines = sums
            .iter()
            .zip(1..)
            .map(|(&sum, position)| YaoLine::from_sum(sum, position))
            .collect::<OracleResult<Vec<_>>>()?;
        Self::from_lines(&lines)
    }

    /// The pure hexagram for a trigram pair, with no moving lines.
    pub fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        let [l1, l2, l3] = lower.lines();
        let [l4, l5, l6] = upper.lines();
        let mut position = 0;
        let lines = [l1, l2, l3, l4, l5, l6].map(|yang| {
            position += 1;
            let sum = if yang { 5 } else { 4 };
            YaoLine {
                sum,
                position,
                is_yang: yang,
                is_old: false,
            }
        });
        Self { lines }
    }

    /// The six lines, bottom first.
    pub fn lines(&self) -> &[YaoLine; 6] {
        &self.lines
    }

    /// Lower trigram (lines 1-3).
    pub fn lower(&self) -> Trigram {
        trigram_of(&self.lines[0..3])
    }

    /// Upper trigram (lines 4-6).
    pub fn upper(&self) -> Trigram {
        trigram_of(&self.lines[3..6])
    }

    /// Hexagram number, 1..=64.
    pub fn number(&self) -> u8 {
        encode(&self.lines)
    }

    /// Name and reading.
    pub fn info(&self) -> &'static HexagramInfo {
        hexagram_info(self.upper(), self.lower())
    }

    /// Positions (1-6) of the moving lines.
    pub fn moving_lines(&self) -> Vec<u8> {
        self.lines
            .iter()
            .filter(|l| l.is_old)
            .map(|l| l.position)
            .collect()
    }

    /// The hexagram after every moving line flips polarity, if any moves.
    ///
    /// The flipped lines keep their moving flag, so the result still
    /// records where the change came from.
    pub fn changed(&self) -> Option<Hexagram> {
        if !self.lines.iter().any(|l| l.is_old) {
            return None;
        }
        Some(Self {
            lines: self.lines.map(|l| if l.is_old { l.flipped() } else { l }),
        })
    }

    /// Number of the changed hexagram, if any line moves.
    pub fn changed_number(&self) -> Option<u8> {
        changed_hexagram(&self.lines)
    }

    /// Set the line at `position` (1-6) moving, keeping its polarity.
    pub fn with_moving_line(mut self, position: u8) -> OracleResult<Self> {
        let line = self
            .lines
            .get_mut(usize::from(position).wrapping_sub(1))
            .ok_or(OracleError::InvalidLinePosition(position))?;
        line.is_old = true;
        line.sum = if line.is_yang { 6 } else { 3 };
        Ok(self)
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.info();
        writeln!(
            f,
            "#{} {} {} ({}) {}{}",
            self.number(),
            info.chinese,
            info.name,
            info.meaning,
            self.upper().symbol(),
            self.lower().symbol()
        )?;
        for line in self.lines.iter().rev() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn moving_first_line() {
        let h = Hexagram::from_sums(&[3, 4, 5, 4, 5, 4]).unwrap();
        assert_eq!(h.lower(), Trigram::Gen);
        assert_eq!(h.lower().index(), 5);
        assert_eq!(h.upper(), Trigram::Kan);
        assert_eq!(h.upper().index(), 3);
        assert_eq!(h.number(), 21);
        assert_eq!(h.moving_lines(), vec![1]);

        let changed = h.changed().unwrap();
        assert_eq!(h.changed_number(), Some(22));
        assert_eq!(changed.number(), 22);
        for (a, b) in h.lines().iter().zip(changed.lines()) {
            if a.position == 1 {
                assert_ne!(a.is_yang, b.is_yang);
                assert!(b.is_old);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn named_through_king_wen() {
        let h = Hexagram::from_sums(&[3, 4, 5, 4, 5, 4]).unwrap();
        assert_eq!(h.info().chinese, "蹇");
        assert_eq!(h.changed().unwrap().info().chinese, "既济");
    }

    #[test]
    fn still_hexagram_has_no_change() {
        let h = Hexagram::from_sums(&[4, 5, 4, 5, 4, 5]).unwrap();
        assert_eq!(h.changed(), None);
        assert_eq!(h.changed_number(), None);
        assert!(h.moving_lines().is_empty());
    }

    #[test]
    fn number_one_decodes_to_first_pair() {
        assert_eq!(decode(1), Ok((Trigram::Kun, Trigram::Kun)));
        assert_eq!(decode(64), Ok((Trigram::Qian, Trigram::Qian)));
        assert_eq!(decode(0), Err(OracleError::InvalidHexagramNumber(0)));
        assert_eq!(decode(65), Err(OracleError::InvalidHexagramNumber(65)));
    }

    #[test]
    fn all_yang_and_all_yin() {
        let yang = Hexagram::from_sums(&[5; 6]).unwrap();
        assert_eq!(yang.number(), 64);
        assert_eq!(yang.info().chinese, "乾");
        let yin = Hexagram::from_sums(&[4; 6]).unwrap();
        assert_eq!(yin.number(), 1);
        assert_eq!(yin.info().chinese, "坤");
    }

    #[test]
    fn all_moving_lines_invert() {
        let h = Hexagram::from_sums(&[6; 6]).unwrap();
        assert_eq!(h.number(), 64);
        assert_eq!(h.changed_number(), Some(1));
    }

    #[test]
    fn wrong_line_count() {
        assert_eq!(
            Hexagram::from_sums(&[4, 5, 4]),
            Err(OracleError::WrongLineCount(3))
        );
        assert_eq!(
            Hexagram::from_sums(&[4, 5, 4, 5, 4, 9]),
            Err(OracleError::InvalidLineSum(9))
        );
    }

    #[test]
    fn cast_is_reproducible() {
        let a = cast_hexagram(&mut StdRng::seed_from_u64(42));
        let b = cast_hexagram(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        for (i, l) in a.lines().iter().enumerate() {
            assert_eq!(l.position as usize, i + 1);
        }
    }

    #[test]
    fn with_moving_line_bounds() {
        let h = Hexagram::from_trigrams(Trigram::Li, Trigram::Kan);
        assert!(h.with_moving_line(0).is_err());
        assert!(h.with_moving_line(7).is_err());
        let moved = h.with_moving_line(6).unwrap();
        assert_eq!(moved.moving_lines(), vec![6]);
    }

    #[test]
    fn display_lists_lines_top_down() {
        let h = Hexagram::from_trigrams(Trigram::Qian, Trigram::Qian);
        let text = h.to_string();
        assert!(text.starts_with("#64 乾 Qian"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn serde_roundtrip() {
        let h = Hexagram::from_sums(&[3, 4, 5, 6, 5, 4]).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        let back: Hexagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    fn trigram() -> impl Strategy<Value = Trigram> {
        (0u8..8).prop_map(Trigram::from_bits)
    }

    proptest! {
        #[test]
        fn encode_decode_bijection(upper in trigram(), lower in trigram()) {
            let h = Hexagram::from_trigrams(upper, lower);
            let n = h.number();
            prop_assert!((1..=64).contains(&n));
            prop_assert_eq!(decode(u32::from(n)).unwrap(), (upper, lower));
            prop_assert_eq!(u32::from(upper.index()), (u32::from(n) - 1) / 8 + 1);
            prop_assert_eq!(u32::from(lower.index()), (u32::from(n) - 1) % 8 + 1);
        }

        #[test]
        fn no_moving_lines_no_change(sums in proptest::collection::vec(4u8..=5, 6)) {
            let h = Hexagram::from_sums(&sums).unwrap();
            prop_assert_eq!(h.changed_number(), None);
        }

        #[test]
        fn changed_is_stable(sums in proptest::collection::vec(3u8..=6, 6)) {
            let h = Hexagram::from_sums(&sums).unwrap();
            prop_assert_eq!(h.changed_number(), h.changed_number());
            prop_assert_eq!(h.changed().map(|c| c.number()), h.changed_number());
        }
    }
}
