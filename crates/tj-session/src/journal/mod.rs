//! Journal of the readings taken during a session.

pub mod entry;
pub mod log;

pub use entry::ReadingEntry;
pub use log::Journal;
