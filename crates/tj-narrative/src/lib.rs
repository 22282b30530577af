//! Fortune narratives for Tianji.
//!
//! Turns the values computed by `tj-core` and `tj-oracle` into readable
//! text: the daily fortune with its lucky attributes and avoidance list,
//! simplified Western astrology and numerology, and prompts for an
//! external narrative service together with the parser and ordered
//! endpoint fallback used to talk to it.

pub mod astrology;
pub mod client;
pub mod composer;
pub mod config;
pub mod error;
pub mod lucky;
pub mod numerology;
pub mod prompt;
pub mod response;
pub mod taisui;

pub use astrology::{AstrologyChart, SunSign, chart};
pub use client::{NarrativeClient, NarrativeRequest, ReadingKind, Transport};
pub use composer::{Booster, DailyFortune, FortuneComposer};
pub use config::{ApiFlavor, ComposerConfig, EndpointCandidate, NarrativeConfig};
pub use error::{NarrativeError, NarrativeResult};
pub use numerology::NumerologyReading;
pub use prompt::{PromptBuilder, truncate_chars};
pub use response::NarrativeResponse;
pub use taisui::{TaiSuiKind, tai_sui_animals};
