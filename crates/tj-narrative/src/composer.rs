//! Daily fortune composition.
//!
//! Everything here is deterministic: the same birth data and day always
//! give the same fortune. The radar compares the day master's element with
//! the element of today's stem.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tj_core::{
    DimensionScores, EarthlyBranch, Element, FourPillars, GanZhi, HeavenlyStem, Relation,
    SexagenaryCalendar, energy_index, relate, score,
};

use crate::astrology::{SunSign, WesternElement};
use crate::config::ComposerConfig;
use crate::error::NarrativeResult;
use crate::lucky::{element_color, lucky_colors, lucky_direction};
use crate::numerology::{daily_frequency, keywords, life_path};
use crate::taisui::{TaiSuiKind, offends};

const QUOTES: [&str; 3] = [
    "烈焰之中守住秩序的寒冰，方能雕出栋梁之才。",
    "火烈则木焦，金裁则木成。今日的寂静与规矩是你最好的护身符。",
    "喧嚣之中让自己成为那潭静水，以不变应万变。",
];

const KEYWORDS: [&str; 8] = [
    "官星修剪",
    "秩序重建",
    "定心养性",
    "静水深流",
    "破局",
    "沉潜",
    "蓄势",
    "绸缪",
];

/// Things to carry or use today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booster {
    /// Lucky colors, joined.
    pub color: String,
    /// Lucky number: the day's numerology frequency.
    pub number: u32,
    /// Lucky direction.
    pub direction: String,
    /// Lucky item.
    pub item: String,
}

/// One day's fortune for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFortune {
    /// The day the fortune is for.
    pub date: NaiveDate,
    /// Pillars of the birth date.
    pub pillars: FourPillars,
    /// Today's stem and branch in the continuous day cycle.
    pub today: GanZhi,
    /// How the day master stands to today's stem.
    pub relation: Relation,
    /// Chinese reading.
    pub eastern: String,
    /// Western reading.
    pub western: String,
    /// The five radar scores.
    pub radar: DimensionScores,
    /// Overall energy, 0-100.
    pub energy: u8,
    /// Lucky attributes.
    pub booster: Booster,
    /// What to avoid.
    pub avoidance: Vec<String>,
    /// Closing line.
    pub quote: String,
    /// Keyword of the day.
    pub keyword: String,
    /// Whether the birth animal offends this year's tai sui.
    pub tai_sui: Option<TaiSuiKind>,
}

impl DailyFortune {
    /// The day master stem.
    pub fn day_master(&self) -> HeavenlyStem {
        self.pillars.day_master()
    }
}

impl std::fmt::Display for DailyFortune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}日  关键词：{}", self.date, self.today, self.keyword)?;
        writeln!(f, "能量指数 {}", self.energy)?;
        writeln!(f, "\n【东方】{}", self.eastern)?;
        writeln!(f, "【西方】{}", self.western)?;
        writeln!(f)?;
        for (dimension, value) in self.radar.iter() {
            writeln!(f, "{} {:>3}", dimension.chinese(), value)?;
        }
        writeln!(
            f,
            "\n幸运色 {}  幸运数字 {}  方位 {}  物品 {}",
            self.booster.color, self.booster.number, self.booster.direction, self.booster.item
        )?;
        for item in &self.avoidance {
            writeln!(f, "· {item}")?;
        }
        if let Some(kind) = self.tai_sui {
            writeln!(f, "今年{}：{}", kind, kind.remedies().join("、"))?;
        }
        write!(f, "\n「{}」", self.quote)
    }
}

/// Assembles daily fortunes from computed values.
#[derive(Debug, Clone, Default)]
pub struct FortuneComposer {
    config: ComposerConfig,
    calendar: SexagenaryCalendar,
}

impl FortuneComposer {
    /// Create a composer with the given config.
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            calendar: SexagenaryCalendar::new(),
        }
    }

    /// The composer's config.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose the fortune for `today` of someone born on `birth`.
    pub fn compose(
        &self,
        birth: NaiveDate,
        hour: Option<EarthlyBranch>,
        today: NaiveDate,
    ) -> NarrativeResult<DailyFortune> {
        let pillars = self.calendar.four_pillars(birth, hour)?;
        let this_year = self.calendar.four_pillars(today, None)?.year.branch;
        let today_gz = self.calendar.day_pillar(today);

        let master = pillars.day_master().element();
        let current = today_gz.stem().element();
        let relation = relate(master, current);
        let radar = score(self.config.baseline, &relation, &self.config.score_table);
        let energy = energy_index(master, current, today_gz.branch().element());

        let sun = SunSign::for_date(birth);
        let path = life_path(birth);
        let frequency = daily_frequency(today);

        let stem_i = today_gz.stem().index();
        let branch_i = today_gz.branch().index();
        let birth_day = birth.day() as usize;

        tracing::debug!(%birth, %today, day = %today_gz, %relation, energy, "composed fortune");

        Ok(DailyFortune {
            date: today,
            pillars,
            today: today_gz,
            relation,
            eastern: eastern_text(pillars.day_master(), today_gz, &relation),
            western: western_text(sun, path, frequency),
            radar,
            energy,
            booster: Booster {
                color: lucky_colors(today_gz.stem()).join("、"),
                number: frequency,
                direction: lucky_direction(today_gz.stem()).to_string(),
                item: lucky_item(sun.element()).to_string(),
            },
            avoidance: avoidance(master, current, &relation),
            quote: QUOTES[(stem_i + branch_i) / 2 % QUOTES.len()].to_string(),
            keyword: KEYWORDS[(stem_i + branch_i + birth_day) % KEYWORDS.len()].to_string(),
            tai_sui: offends(this_year, pillars.lunar.year_zodiac),
        })
    }
}

fn eastern_text(master: HeavenlyStem, today: GanZhi, relation: &Relation) -> String {
    let me = master.element().chinese();
    let it = today.stem().element().chinese();
    let head = format!("今日{today}，{it}气当令。对你的{master}{me}日主而言，");
    let body = if relation.is_same {
        format!("{it}与{me}同气相求，比肩相助之日。宜结伴同行、巩固根基，不宜孤军冒进。")
    } else if relation.generates {
        format!("{me}生{it}，是食伤泄秀之日。创意灵感丰富，适合表达创作，但需注意精力消耗。")
    } else if relation.overcomes {
        format!("{me}克{it}，财星显现之日。宜务实求财、把握机会，量力而行。")
    } else if relation.is_generated_by {
        format!("{it}生{me}，印星护身之日。宜学习进修、静心谋划，贵人助力。")
    } else if relation.is_overcome_by {
        format!("{it}克{me}，官杀当令之日。压力与规矩并至，宜守正持重、少出锋芒。")
    } else {
        "今日气场平稳，宜静心养性，不宜冒进。".to_string()
    };
    head + &body
}

fn western_text(sun: SunSign, path: u32, frequency: u32) -> String {
    let mood = match sun.element() {
        WesternElement::Water => "情绪较为敏感",
        WesternElement::Fire => "行动力充沛",
        WesternElement::Earth => "脚踏实地",
        WesternElement::Air => "思维活跃",
    };
    format!(
        "你的太阳星座是{}（{}象{}），守护星{}。今日星象显示{}。生命灵数{}（{}），今日灵数频率为{}（{}）。",
        sun.chinese(),
        sun.element().chinese(),
        sun.quality().chinese(),
        sun.ruler(),
        mood,
        path,
        keywords(path),
        frequency,
        keywords(frequency)
    )
}

fn lucky_item(element: WesternElement) -> &'static str {
    match element {
        WesternElement::Fire => "金属饰品",
        WesternElement::Water => "水晶球",
        WesternElement::Earth | WesternElement::Air => "机械表",
    }
}

fn avoidance(master: Element, current: Element, relation: &Relation) -> Vec<String> {
    let mut list = Vec::new();
    if relation.is_overcome_by {
        list.push(format!(
            "忌与人正面口角 - {}克{}，一句话说错可能毁掉关系",
            current.chinese(),
            master.chinese()
        ));
        list.push("忌剧烈运动 - 气场相战，关节易受伤".to_string());
    }
    if current == Element::Metal {
        list.push("忌熬夜 - 金日耗肝血，晚11点前入睡".to_string());
        list.push("忌冲动决策 - 金气肃杀，约束为主".to_string());
    }
    let threat = master.overcome_by();
    list.push(format!(
        "忌穿{} - {}克{}，易添压力",
        element_color(threat),
        threat.chinese(),
        master.chinese()
    ));
    list
}
