//! The three coins of a line toss.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One face of a tossed coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coin {
    /// 背, the reverse. Counts 1.
    Yin,
    /// 字, the inscribed face. Counts 2.
    Yang,
}

impl Coin {
    /// Numeric value of the face.
    pub fn value(self) -> u8 {
        match self {
            Self::Yin => 1,
            Self::Yang => 2,
        }
    }

    /// Toss a single fair coin.
    pub fn toss(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Yang
        } else {
            Self::Yin
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "背"),
            Self::Yang => write!(f, "字"),
        }
    }
}

/// Toss three coins and return the faces.
pub fn toss_coins(rng: &mut StdRng) -> [Coin; 3] {
    [Coin::toss(rng), Coin::toss(rng), Coin::toss(rng)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn coin_values() {
        assert_eq!(Coin::Yin.value(), 1);
        assert_eq!(Coin::Yang.value(), 2);
    }

    #[test]
    fn toss_is_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(toss_coins(&mut a), toss_coins(&mut b));
        }
    }

    #[test]
    fn both_faces_appear() {
        let mut rng = StdRng::seed_from_u64(1);
        let faces: Vec<Coin> = (0..100).map(|_| Coin::toss(&mut rng)).collect();
        assert!(faces.contains(&Coin::Yin));
        assert!(faces.contains(&Coin::Yang));
    }
}
