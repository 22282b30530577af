//! Prompt text for the narrative service.
//!
//! Prompts lead with the computed facts so that cutting them to the
//! configured character limit keeps what matters.

use chrono::{Datelike, NaiveDate};
use tj_core::{Element, FourPillars};
use tj_oracle::Hexagram;

use crate::composer::DailyFortune;

/// Cut `text` to at most `limit` characters, on a character boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(end, _)| &text[..end])
}

/// Builds prompts from computed readings.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    gender: Option<String>,
    question: Option<String>,
}

impl PromptBuilder {
    /// Create a builder with no gender or question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mention the subject's gender in analysis prompts.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// The question asked of the oracle.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Prompt for a full four-pillar analysis.
    pub fn analysis(&self, birth: NaiveDate, pillars: &FourPillars) -> String {
        let counts = pillars.element_counts();
        let distribution: Vec<String> = Element::ALL
            .iter()
            .map(|e| format!("{}{}", e.chinese(), counts[e.index()]))
            .collect();
        let missing: String = pillars
            .missing_elements()
            .iter()
            .map(|e| e.chinese())
            .collect();
        let master = pillars.day_master();

        let mut out = String::from("请为以下八字信息生成专业的命理分析报告，使用Markdown格式。\n\n");
        out.push_str(&format!(
            "出生日期：{}年{}月{}日\n",
            birth.year(),
            birth.month(),
            birth.day()
        ));
        if let Some(gender) = &self.gender {
            out.push_str(&format!("性别：{gender}\n"));
        }
        out.push_str(&format!("生肖：{}\n", pillars.lunar.year_zodiac.chinese()));
        out.push_str(&format!(
            "八字：年柱{} 月柱{} 日柱{} 时柱{}\n",
            pillars.year, pillars.month, pillars.day, pillars.hour
        ));
        out.push_str(&format!("日主：{}{}\n", master, master.element().chinese()));
        out.push_str(&format!("五行分布：{}\n", distribution.join(" ")));
        if !missing.is_empty() {
            out.push_str(&format!("五行缺：{missing}\n"));
        }
        out.push_str(
            "\n请依次分析：一、日主特质；二、五行平衡与调补；三、优势与挑战；\
             四、事业财运；五、健康感情；六、幸运元素；七、个人建议。",
        );
        out
    }

    /// Prompt for interpreting a cast hexagram.
    pub fn hexagram(&self, hexagram: &Hexagram) -> String {
        let info = hexagram.info();
        let mut out = String::from("请解读以下周易卦象，使用Markdown格式。\n\n");
        if let Some(question) = &self.question {
            out.push_str(&format!("所问之事：{question}\n"));
        }
        out.push_str(&format!(
            "本卦：第{}卦 {}（上{}下{}），{}\n",
            info.king_wen,
            info.chinese,
            hexagram.upper().nature(),
            hexagram.lower().nature(),
            info.meaning
        ));
        let moving = hexagram.moving_lines();
        if moving.is_empty() {
            out.push_str("动爻：无\n");
        } else {
            let positions: Vec<String> = moving.iter().map(u8::to_string).collect();
            out.push_str(&format!("动爻：第{}爻\n", positions.join("、")));
        }
        if let Some(changed) = hexagram.changed() {
            let c = changed.info();
            out.push_str(&format!("变卦：第{}卦 {}，{}\n", c.king_wen, c.chinese, c.meaning));
        }
        let lines: Vec<String> = hexagram.lines().iter().map(|l| l.kind().to_string()).collect();
        out.push_str(&format!("六爻（自下而上）：{}\n", lines.join(" ")));
        out.push_str("\n请说明卦意、动爻含义与变卦趋势，并给出行动建议。");
        out
    }

    /// Prompt for expanding a composed daily fortune.
    pub fn fortune(&self, fortune: &DailyFortune) -> String {
        let radar: Vec<String> = fortune
            .radar
            .iter()
            .map(|(d, v)| format!("{}{}", d.chinese(), v))
            .collect();
        let mut out = String::from("请根据以下信息写一段今日运势解读。\n\n");
        out.push_str(&format!(
            "日期：{} {}日，日主{}，能量指数{}\n",
            fortune.date,
            fortune.today,
            fortune.day_master(),
            fortune.energy
        ));
        out.push_str(&format!("五维：{}\n", radar.join(" ")));
        out.push_str(&format!("关键词：{}\n", fortune.keyword));
        out.push_str(&format!("东方：{}\n", fortune.eastern));
        out
    }
}
