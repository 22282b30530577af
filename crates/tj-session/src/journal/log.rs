//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::ReadingEntry;

/// A chronological log of readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<ReadingEntry>,
}

fn moving_text(moving: &[u8]) -> String {
    if moving.is_empty() {
        "none".to_string()
    } else {
        let lines: Vec<String> = moving.iter().map(|m| m.to_string()).collect();
        lines.join(", ")
    }
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: ReadingEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[ReadingEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Reading Journal\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%Y-%m-%d %H:%M");
            match entry {
                ReadingEntry::Bazi {
                    profile,
                    birth_date,
                    pillars,
                    day_master,
                    ..
                } => {
                    out.push_str(&format!("## 八字 {birth_date}\n\n"));
                    if let Some(id) = profile {
                        out.push_str(&format!("**Profile**: {id}\n"));
                    }
                    out.push_str(&format!("**Pillars**: {pillars}\n"));
                    out.push_str(&format!("**Day master**: {day_master}\n"));
                    out.push_str(&format!("*{time}*\n\n"));
                }
                ReadingEntry::Fortune {
                    date,
                    day,
                    energy,
                    keyword,
                    ..
                } => {
                    out.push_str(&format!("## 今日运势 {date} {day}日\n\n"));
                    out.push_str(&format!("**Energy**: {energy} | **Keyword**: {keyword}\n"));
                    out.push_str(&format!("*{time}*\n\n"));
                }
                ReadingEntry::Hexagram {
                    method,
                    question,
                    number,
                    name,
                    moving,
                    changed,
                    ..
                } => {
                    out.push_str(&format!("## 卦 #{number} {name} ({method})\n\n"));
                    if let Some(q) = question {
                        out.push_str(&format!("**Question**: {q}\n"));
                    }
                    out.push_str(&format!("**Moving lines**: {}\n", moving_text(moving)));
                    if let Some(c) = changed {
                        out.push_str(&format!("**Changes to**: {c}\n"));
                    }
                    out.push_str(&format!("*{time}*\n\n"));
                }
                ReadingEntry::Stick {
                    number,
                    title,
                    content,
                    ..
                } => {
                    out.push_str(&format!("**签 {number}** {title}: {content}\n\n"));
                }
                ReadingEntry::Sign {
                    sun, moon, rising, ..
                } => {
                    out.push_str(&format!("**Sun** {sun} | **Moon** {moon}"));
                    if let Some(r) = rising {
                        out.push_str(&format!(" | **Rising** {r}"));
                    }
                    out.push_str("\n\n");
                }
                ReadingEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Reading Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                ReadingEntry::Bazi {
                    profile,
                    birth_date,
                    pillars,
                    day_master,
                    ..
                } => {
                    let who = profile.as_deref().unwrap_or("-");
                    out.push_str(&format!("Bazi {birth_date} ({who}): {pillars}\n"));
                    out.push_str(&format!("  Day master: {day_master}\n\n"));
                }
                ReadingEntry::Fortune {
                    date,
                    day,
                    energy,
                    keyword,
                    ..
                } => {
                    out.push_str(&format!(
                        "Fortune {date} {day}: energy {energy}, {keyword}\n\n"
                    ));
                }
                ReadingEntry::Hexagram {
                    method,
                    question,
                    number,
                    name,
                    moving,
                    changed,
                    ..
                } => {
                    out.push_str(&format!("Hexagram ({method}): #{number} {name}\n"));
                    if let Some(q) = question {
                        out.push_str(&format!("  Question: {q}\n"));
                    }
                    out.push_str(&format!("  Moving lines: {}\n", moving_text(moving)));
                    if let Some(c) = changed {
                        out.push_str(&format!("  Changes to: {c}\n"));
                    }
                    out.push('\n');
                }
                ReadingEntry::Stick {
                    number,
                    title,
                    content,
                    ..
                } => {
                    out.push_str(&format!("Stick {number} {title}: {content}\n\n"));
                }
                ReadingEntry::Sign {
                    sun, moon, rising, ..
                } => {
                    let rising = rising.as_deref().unwrap_or("unknown");
                    out.push_str(&format!("Signs: sun {sun}, moon {moon}, rising {rising}\n\n"));
                }
                ReadingEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn hexagram_entry() -> ReadingEntry {
        ReadingEntry::Hexagram {
            method: "coins".to_string(),
            question: Some("换工作？".to_string()),
            number: 21,
            name: "蹇".to_string(),
            moving: vec![1],
            changed: Some("既济".to_string()),
            timestamp: Utc.with_ymd_and_hms(2026, 2, 17, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
        assert_eq!(j.export_text(), "Reading Journal\n===============\n\n");
    }

    #[test]
    fn export_markdown_hexagram() {
        let mut j = Journal::new();
        j.append(hexagram_entry());
        let md = j.export_markdown();
        assert!(md.contains("## 卦 #21 蹇 (coins)"));
        assert!(md.contains("**Question**: 换工作？"));
        assert!(md.contains("**Moving lines**: 1"));
        assert!(md.contains("**Changes to**: 既济"));
        assert!(md.contains("*2026-02-17 08:30*"));
    }

    #[test]
    fn export_text_bazi_and_note() {
        let mut j = Journal::new();
        j.append(ReadingEntry::Bazi {
            profile: Some("me".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1984, 6, 15).unwrap(),
            pillars: "甲子 丙午 丙辰 戊子".to_string(),
            day_master: "丙火".to_string(),
            timestamp: Utc::now(),
        });
        j.append(ReadingEntry::Note {
            text: "remember".to_string(),
            timestamp: Utc::now(),
        });
        let txt = j.export_text();
        assert!(txt.contains("Bazi 1984-06-15 (me): 甲子 丙午 丙辰 戊子"));
        assert!(txt.contains("Day master: 丙火"));
        assert!(txt.contains("Note: remember"));
    }

    #[test]
    fn still_hexagram_text() {
        let mut j = Journal::new();
        j.append(ReadingEntry::Hexagram {
            method: "coins".to_string(),
            question: None,
            number: 64,
            name: "乾".to_string(),
            moving: vec![],
            changed: None,
            timestamp: Utc::now(),
        });
        let txt = j.export_text();
        assert!(txt.contains("Moving lines: none"));
        assert!(!txt.contains("Changes to"));
    }

    #[test]
    fn sign_without_rising() {
        let mut j = Journal::new();
        j.append(ReadingEntry::Sign {
            sun: "双子座".to_string(),
            moon: "白羊座".to_string(),
            rising: None,
            timestamp: Utc::now(),
        });
        assert!(j.export_text().contains("rising unknown"));
        assert!(!j.export_markdown().contains("Rising"));
    }

    #[test]
    fn journal_serde_roundtrip() {
        let mut j = Journal::new();
        j.append(hexagram_entry());
        let json = serde_json::to_string(&j).unwrap();
        let back: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries(), j.entries());
    }
}
