//! Core types for Tianji.
//!
//! Provides the Heavenly Stem and Earthly Branch tables, the sixty-term
//! sexagenary cycle with its NaYin names, a table-driven lunar calendar,
//! the twelve 节 solar terms that open the pillar months,
//! the four-pillar (Bazi) calendar, and the five-element relation engine
//! that turns element pairs into bounded dimension scores.

pub mod calendar;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod lunar;
pub mod relation;
pub mod solar_term;
pub mod stem_branch;

pub use calendar::{FourPillars, SexagenaryCalendar, hour_branch_for};
pub use element::Element;
pub use error::{CoreError, CoreResult};
pub use ganzhi::{GanZhi, NaYin, Pillar};
pub use lunar::{LunarCalendar, LunarDate, TableLunarCalendar, day_cycle};
pub use relation::{
    Dimension, DimensionScores, Relation, RelationWeights, ScoreTable, energy_index, relate, score,
};
pub use solar_term::{Jie, solar_month_branch};
pub use stem_branch::{EarthlyBranch, HeavenlyStem, ZodiacAnimal};
