//! I Ching casting for Tianji.
//!
//! Simulates the three-coin method line by line, encodes six lines into a
//! hexagram number through its two trigrams, and derives the changed
//! hexagram from the moving lines. Also provides the date-based plum
//! blossom cast, the eight fortune sticks, and tarot draws.

pub mod coin;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod names;
pub mod plum;
pub mod sticks;
pub mod tarot;
pub mod trigram;

pub use coin::{Coin, toss_coins};
pub use error::{OracleError, OracleResult};
pub use hexagram::{Hexagram, cast_hexagram, changed_hexagram, decode, encode};
pub use line::{LineKind, YaoLine, toss_line};
pub use names::{HexagramInfo, by_king_wen, hexagram_info, king_wen_number};
pub use plum::{PlumBlossomCast, plum_blossom};
pub use sticks::{FortuneStick, draw_stick, stick_for_seed};
pub use tarot::{
    DrawnCard, PlacedCard, Spread, SpreadPosition, Suit, TarotCard, TarotReading, draw_cards,
    read_spread,
};
pub use trigram::Trigram;
