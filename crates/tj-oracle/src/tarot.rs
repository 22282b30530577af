//! Tarot (塔罗) deck and spreads.
//!
//! The 78-card deck is numbered 0-77: the 22 major arcana first, then
//! fourteen cards each of wands, cups, swords and pentacles (Ace to 10,
//! Page, Knight, Queen, King). Draws come from an injected [`StdRng`]
//! without replacement, and each drawn card lands upright or reversed
//! on a fair coin.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 78;

/// Minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// 权杖
    Wands,
    /// 圣杯
    Cups,
    /// 宝剑
    Swords,
    /// 金币
    Pentacles,
}

impl Suit {
    /// Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Suit::Wands => "权杖",
            Suit::Cups => "圣杯",
            Suit::Swords => "宝剑",
            Suit::Pentacles => "金币",
        }
    }

    /// Classical element of the suit.
    pub fn element(self) -> &'static str {
        match self {
            Suit::Wands => "Fire",
            Suit::Cups => "Water",
            Suit::Swords => "Air",
            Suit::Pentacles => "Earth",
        }
    }
}

/// One card of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    /// Deck position, 0-77.
    pub id: u8,
    /// English name.
    pub name: &'static str,
    /// Chinese name.
    pub chinese: &'static str,
    /// Roman numeral for the major arcana, rank symbol for the minor.
    pub symbol: &'static str,
    /// `None` for the major arcana.
    pub suit: Option<Suit>,
    /// Upright meaning.
    pub upright: &'static str,
    /// Reversed meaning.
    pub reversed: &'static str,
    /// English keywords.
    pub keywords: &'static [&'static str],
    /// Element, planet or sign the card is associated with.
    pub association: &'static str,
}

impl TarotCard {
    /// Whether this is one of the 22 major arcana.
    pub fn is_major(&self) -> bool {
        self.suit.is_none()
    }
}

impl std::fmt::Display for TarotCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.chinese, self.name)
    }
}

/// The full deck in id order.
pub static DECK: [TarotCard; DECK_SIZE] = [
    TarotCard {
        id: 0,
        name: "The Fool",
        chinese: "愚人",
        symbol: "0",
        suit: None,
        upright: "新的开始、天真无邪、自由自在、冒险、信任宇宙",
        reversed: "冲动、盲目冒险、缺乏计划、愚昧、不负责任",
        keywords: &["new beginnings", "innocence", "spontaneity", "freedom", "adventure"],
        association: "Air",
    },
    TarotCard {
        id: 1,
        name: "The Magician",
        chinese: "魔术师",
        symbol: "I",
        suit: None,
        upright: "创造力、技能、意志力、资源、表达能力",
        reversed: "操纵、欺骗、潜能未用、计划不周",
        keywords: &["willpower", "creation", "manifestation", "skill", "power"],
        association: "Mercury",
    },
    TarotCard {
        id: 2,
        name: "The High Priestess",
        chinese: "女祭司",
        symbol: "II",
        suit: None,
        upright: "直觉、智慧、内在声音、潜意识、神秘学",
        reversed: "流于表面、忽视直觉、困惑",
        keywords: &["intuition", "sacred knowledge", "divine feminine", "mystery"],
        association: "Moon",
    },
    TarotCard {
        id: 3,
        name: "The Empress",
        chinese: "皇后",
        symbol: "III",
        suit: None,
        upright: "丰盛、母性、创造力、自然、艺术",
        reversed: "依赖、空虚、创造受阻、过度付出",
        keywords: &["fertility", "abundance", "nature", "nurturing", "creativity"],
        association: "Venus",
    },
    TarotCard {
        id: 4,
        name: "The Emperor",
        chinese: "皇帝",
        symbol: "IV",
        suit: None,
        upright: "权威、秩序、稳定、领导力、父亲形象",
        reversed: "专横、僵化、缺乏自律、独断",
        keywords: &["authority", "structure", "control", "father figure", "stability"],
        association: "Aries",
    },
    TarotCard {
        id: 5,
        name: "The Hierophant",
        chinese: "教皇",
        symbol: "V",
        suit: None,
        upright: "传统、教导、信仰、精神指导、仪式",
        reversed: "叛逆、新方法、非传统信念",
        keywords: &["tradition", "spirituality", "education", "belief", "group"],
        association: "Taurus",
    },
    TarotCard {
        id: 6,
        name: "The Lovers",
        chinese: "恋人",
        symbol: "VI",
        suit: None,
        upright: "爱情、和谐、选择、价值观、伙伴关系",
        reversed: "不和、价值错位、沟通不良、冲突",
        keywords: &["love", "harmony", "relationships", "choices", "union"],
        association: "Gemini",
    },
    TarotCard {
        id: 7,
        name: "The Chariot",
        chinese: "战车",
        symbol: "VII",
        suit: None,
        upright: "胜利、意志力、决心、克服障碍、旅途",
        reversed: "冲动好斗、缺乏方向、能量受阻",
        keywords: &["victory", "willpower", "determination", "control", "action"],
        association: "Cancer",
    },
    TarotCard {
        id: 8,
        name: "Strength",
        chinese: "力量",
        symbol: "VIII",
        suit: None,
        upright: "勇气、耐心、内在力量、柔情、克服恐惧",
        reversed: "软弱、自我怀疑、强迫、攻击性",
        keywords: &["courage", "perseverance", "inner strength", "compassion", "patience"],
        association: "Leo",
    },
    TarotCard {
        id: 9,
        name: "The Hermit",
        chinese: "隐士",
        symbol: "IX",
        suit: None,
        upright: "内省、独自、指引、智慧、灵性寻求",
        reversed: "孤立、寂寞、退缩、拒绝",
        keywords: &["introspection", "solitude", "wisdom", "inner guidance", "truth"],
        association: "Virgo",
    },
    TarotCard {
        id: 10,
        name: "Wheel of Fortune",
        chinese: "命运之轮",
        symbol: "X",
        suit: None,
        upright: "命运、转变、机遇、循环、好运",
        reversed: "厄运、抗拒改变、停滞不前",
        keywords: &["destiny", "luck", "cycles", "turning points", "opportunity"],
        association: "Jupiter",
    },
    TarotCard {
        id: 11,
        name: "Justice",
        chinese: "正义",
        symbol: "XI",
        suit: None,
        upright: "公正、平衡、真理、法律、责任",
        reversed: "不公、不诚实、法律纠纷、逃避责任",
        keywords: &["justice", "truth", "law", "balance", "accountability"],
        association: "Libra",
    },
    TarotCard {
        id: 12,
        name: "The Hanged Man",
        chinese: "倒吊人",
        symbol: "XII",
        suit: None,
        upright: "暂停、牺牲、新的视角、等待、臣服",
        reversed: "拖延、无谓牺牲、缺乏进展",
        keywords: &["suspension", "sacrifice", "new perspective", "waiting", "peace"],
        association: "Neptune",
    },
    TarotCard {
        id: 13,
        name: "Death",
        chinese: "死神",
        symbol: "XIII",
        suit: None,
        upright: "转变、结束、放下、重生、蜕变",
        reversed: "抗拒改变、停滞、害怕结束",
        keywords: &["ending", "transformation", "rebirth", "change", "letting go"],
        association: "Scorpio",
    },
    TarotCard {
        id: 14,
        name: "Temperance",
        chinese: "节制",
        symbol: "XIV",
        suit: None,
        upright: "平衡、调和、耐心、适中、灵魂整合",
        reversed: "过度、失衡、急躁、缺乏节制",
        keywords: &["balance", "moderation", "patience", "harmony", "purpose"],
        association: "Sagittarius",
    },
    TarotCard {
        id: 15,
        name: "The Devil",
        chinese: "恶魔",
        symbol: "XV",
        suit: None,
        upright: "欲望、束缚、物质主义、阴影面、沉迷",
        reversed: "挣脱束缚、解放、觉察、恢复",
        keywords: &["addiction", "obsession", "materialism", "shadow", "bondage"],
        association: "Capricorn",
    },
    TarotCard {
        id: 16,
        name: "The Tower",
        chinese: "塔",
        symbol: "XVI",
        suit: None,
        upright: "突变、破坏、解放、觉醒、剧变",
        reversed: "躲过灾难、害怕改变、抗拒",
        keywords: &["sudden change", "upheaval", "revelation", "liberation", "chaos"],
        association: "Mars",
    },
    TarotCard {
        id: 17,
        name: "The Star",
        chinese: "星星",
        symbol: "XVII",
        suit: None,
        upright: "希望、灵感、疗愈、灵性、信心",
        reversed: "绝望、无助、缺乏信心、贫瘠",
        keywords: &["hope", "inspiration", "healing", "serenity", "spirituality"],
        association: "Aquarius",
    },
    TarotCard {
        id: 18,
        name: "The Moon",
        chinese: "月亮",
        symbol: "XVIII",
        suit: None,
        upright: "直觉、幻觉、恐惧、潜意识、梦境",
        reversed: "释放恐惧、真相浮现、克服幻象",
        keywords: &["intuition", "subconscious", "fear", "illusion", "dreams"],
        association: "Pisces",
    },
    TarotCard {
        id: 19,
        name: "The Sun",
        chinese: "太阳",
        symbol: "XIX",
        suit: None,
        upright: "成功、活力、喜悦、生命力、正能量",
        reversed: "暂时低落、不够清晰、失败",
        keywords: &["success", "vitality", "joy", "life force", "positivity"],
        association: "Sun",
    },
    TarotCard {
        id: 20,
        name: "Judgment",
        chinese: "审判",
        symbol: "XX",
        suit: None,
        upright: "觉醒、复活、内心召唤、原谅、评估",
        reversed: "自我怀疑、拒绝、忽视召唤、内疚",
        keywords: &["rebirth", "inner calling", "judgment", "forgiveness", "renewal"],
        association: "Pluto",
    },
    TarotCard {
        id: 21,
        name: "The World",
        chinese: "世界",
        symbol: "XXI",
        suit: None,
        upright: "完成、成就、整体、旅程终点、新循环",
        reversed: "未完成、有终无始、停滞",
        keywords: &["completion", "achievement", "wholeness", "integration", "travel"],
        association: "Saturn",
    },
    TarotCard {
        id: 22,
        name: "Ace of Wands",
        chinese: "权杖Ace",
        symbol: "A",
        suit: Some(Suit::Wands),
        upright: "灵感、萌芽、热情、新机会、创造力",
        reversed: "延迟、缺乏方向、创造受阻",
        keywords: &["inspiration", "new opportunity", "creativity", "passion"],
        association: "Fire",
    },
    TarotCard {
        id: 23,
        name: "Two of Wands",
        chinese: "权杖二",
        symbol: "2",
        suit: Some(Suit::Wands),
        upright: "规划、决策、扩展视野、未来计划",
        reversed: "畏惧未知、计划不周、观望",
        keywords: &["planning", "future", "decision", "expansion"],
        association: "Fire",
    },
    TarotCard {
        id: 24,
        name: "Three of Wands",
        chinese: "权杖三",
        symbol: "3",
        suit: Some(Suit::Wands),
        upright: "预见、等待、拓展、初步成功",
        reversed: "阻碍、延误、挫败、缺乏远见",
        keywords: &["progress", "looking ahead", "anticipation", "expansion"],
        association: "Fire",
    },
    TarotCard {
        id: 25,
        name: "Four of Wands",
        chinese: "权杖四",
        symbol: "4",
        suit: Some(Suit::Wands),
        upright: "庆祝、和谐、休息、团队成功",
        reversed: "家庭不稳、冲突、庆祝中断",
        keywords: &["celebration", "harmony", "rest", "community"],
        association: "Fire",
    },
    TarotCard {
        id: 26,
        name: "Five of Wands",
        chinese: "权杖五",
        symbol: "5",
        suit: Some(Suit::Wands),
        upright: "竞争、冲突、挑战、力量竞争",
        reversed: "回避冲突、妥协、和解",
        keywords: &["conflict", "competition", "challenge", "tension"],
        association: "Fire",
    },
    TarotCard {
        id: 27,
        name: "Six of Wands",
        chinese: "权杖六",
        symbol: "6",
        suit: Some(Suit::Wands),
        upright: "胜利、认可、荣誉、公众形象",
        reversed: "自负、缺乏认可、公开失败",
        keywords: &["victory", "recognition", "triumph", "pride"],
        association: "Fire",
    },
    TarotCard {
        id: 28,
        name: "Seven of Wands",
        chinese: "权杖七",
        symbol: "7",
        suit: Some(Suit::Wands),
        upright: "防御、坚持、挑战、保护成果",
        reversed: "精疲力竭、放弃、不堪重负",
        keywords: &["defense", "perseverance", "challenge", "holding on"],
        association: "Fire",
    },
    TarotCard {
        id: 29,
        name: "Eight of Wands",
        chinese: "权杖八",
        symbol: "8",
        suit: Some(Suit::Wands),
        upright: "快速移动、进展、消息、行动",
        reversed: "等待、挫败、行动延迟",
        keywords: &["movement", "speed", "progress", "action"],
        association: "Fire",
    },
    TarotCard {
        id: 30,
        name: "Nine of Wands",
        chinese: "权杖九",
        symbol: "9",
        suit: Some(Suit::Wands),
        upright: "韧性、经验、坚持、最后冲刺",
        reversed: "多疑、疲惫、过早放弃",
        keywords: &["resilience", "perseverance", "last stand", "experience"],
        association: "Fire",
    },
    TarotCard {
        id: 31,
        name: "Ten of Wands",
        chinese: "权杖十",
        symbol: "10",
        suit: Some(Suit::Wands),
        upright: "重担、责任、压力、完成负荷",
        reversed: "不懂分担、倦怠、压力",
        keywords: &["burden", "responsibility", "stress", "completion"],
        association: "Fire",
    },
    TarotCard {
        id: 32,
        name: "Page of Wands",
        chinese: "权杖侍从",
        symbol: "P",
        suit: Some(Suit::Wands),
        upright: "探索、热情、好奇、新消息",
        reversed: "缺乏方向、不成熟、拖延",
        keywords: &["exploration", "enthusiasm", "curiosity", "message"],
        association: "Fire",
    },
    TarotCard {
        id: 33,
        name: "Knight of Wands",
        chinese: "权杖骑士",
        symbol: "Kn",
        suit: Some(Suit::Wands),
        upright: "行动、冲动、热情、冒险家",
        reversed: "傲慢、鲁莽、延误",
        keywords: &["action", "adventure", "passion", "impatience"],
        association: "Fire",
    },
    TarotCard {
        id: 34,
        name: "Queen of Wands",
        chinese: "权杖皇后",
        symbol: "Q",
        suit: Some(Suit::Wands),
        upright: "自信、魅力、热情、独立",
        reversed: "嫉妒、不安、苛求",
        keywords: &["confidence", "charm", "independence", "passion"],
        association: "Fire",
    },
    TarotCard {
        id: 35,
        name: "King of Wands",
        chinese: "权杖国王",
        symbol: "K",
        suit: Some(Suit::Wands),
        upright: "领导力、远见、创业精神、激励",
        reversed: "专横、冲动、缺乏远见",
        keywords: &["leadership", "vision", "entrepreneurship", "inspiration"],
        association: "Fire",
    },
    TarotCard {
        id: 36,
        name: "Ace of Cups",
        chinese: "圣杯Ace",
        symbol: "A",
        suit: Some(Suit::Cups),
        upright: "爱、情感、亲密、新的感情",
        reversed: "情感封闭、空虚、孤独",
        keywords: &["love", "emotion", "intimacy", "new feelings"],
        association: "Water",
    },
    TarotCard {
        id: 37,
        name: "Two of Cups",
        chinese: "圣杯二",
        symbol: "2",
        suit: Some(Suit::Cups),
        upright: "伙伴关系、爱情、和谐、相互吸引",
        reversed: "失衡、沟通破裂、不和",
        keywords: &["partnership", "love", "harmony", "attraction"],
        association: "Water",
    },
    TarotCard {
        id: 38,
        name: "Three of Cups",
        chinese: "圣杯三",
        symbol: "3",
        suit: Some(Suit::Cups),
        upright: "庆祝、友谊、创造力、聚会",
        reversed: "孤立、放纵、流言",
        keywords: &["celebration", "friendship", "joy", "community"],
        association: "Water",
    },
    TarotCard {
        id: 39,
        name: "Four of Cups",
        chinese: "圣杯四",
        symbol: "4",
        suit: Some(Suit::Cups),
        upright: "沉思、冷漠、低落、内省",
        reversed: "新视角、觉察、觉醒",
        keywords: &["contemplation", "apathy", "boredom", "reflection"],
        association: "Water",
    },
    TarotCard {
        id: 40,
        name: "Five of Cups",
        chinese: "圣杯五",
        symbol: "5",
        suit: Some(Suit::Cups),
        upright: "失去、悲伤、失望、继续前行",
        reversed: "接纳、疗愈、原谅",
        keywords: &["loss", "grief", "regret", "moving on"],
        association: "Water",
    },
    TarotCard {
        id: 41,
        name: "Six of Cups",
        chinese: "圣杯六",
        symbol: "6",
        suit: Some(Suit::Cups),
        upright: "怀旧、童年、纯真、重逢",
        reversed: "沉溺过去、不切实际、不成熟",
        keywords: &["nostalgia", "innocence", "memory", "reunion"],
        association: "Water",
    },
    TarotCard {
        id: 42,
        name: "Seven of Cups",
        chinese: "圣杯七",
        symbol: "7",
        suit: Some(Suit::Cups),
        upright: "选择、幻想、空想、犹豫不决",
        reversed: "清醒、做出选择、真相",
        keywords: &["choices", "illusion", "fantasy", "dreaming"],
        association: "Water",
    },
    TarotCard {
        id: 43,
        name: "Eight of Cups",
        chinese: "圣杯八",
        symbol: "8",
        suit: Some(Suit::Cups),
        upright: "离开、寻求真相、失望",
        reversed: "害怕改变、逃避、停滞",
        keywords: &["walking away", "seeking", "disappointment", "truth"],
        association: "Water",
    },
    TarotCard {
        id: 44,
        name: "Nine of Cups",
        chinese: "圣杯九",
        symbol: "9",
        suit: Some(Suit::Cups),
        upright: "满足、知足、愿望成真",
        reversed: "不满、贪婪、空虚",
        keywords: &["satisfaction", "contentment", "fulfillment", "wishes"],
        association: "Water",
    },
    TarotCard {
        id: 45,
        name: "Ten of Cups",
        chinese: "圣杯十",
        symbol: "10",
        suit: Some(Suit::Cups),
        upright: "和谐、喜悦、家庭、圆满",
        reversed: "家庭破裂、不和、家庭冲突",
        keywords: &["harmony", "joy", "family", "blessing"],
        association: "Water",
    },
    TarotCard {
        id: 46,
        name: "Page of Cups",
        chinese: "圣杯侍从",
        symbol: "P",
        suit: Some(Suit::Cups),
        upright: "创意讯息、直觉、新的感受",
        reversed: "情绪不成熟、敏感、困惑",
        keywords: &["creativity", "intuition", "emotion", "message"],
        association: "Water",
    },
    TarotCard {
        id: 47,
        name: "Knight of Cups",
        chinese: "圣杯骑士",
        symbol: "Kn",
        suit: Some(Suit::Cups),
        upright: "浪漫、创意、迷人、理想主义",
        reversed: "不切实际、喜怒无常、善于操纵",
        keywords: &["romance", "charm", "creativity", "idealism"],
        association: "Water",
    },
    TarotCard {
        id: 48,
        name: "Queen of Cups",
        chinese: "圣杯皇后",
        symbol: "Q",
        suit: Some(Suit::Cups),
        upright: "慈悲、情感安全、直觉敏锐",
        reversed: "不安、相互依赖、情感操纵",
        keywords: &["compassion", "intuition", "emotional security", "nurturing"],
        association: "Water",
    },
    TarotCard {
        id: 49,
        name: "King of Cups",
        chinese: "圣杯国王",
        symbol: "K",
        suit: Some(Suit::Cups),
        upright: "情绪平衡、智慧、圆融",
        reversed: "冷漠、操纵、情感疏离",
        keywords: &["wisdom", "diplomacy", "emotional balance", "control"],
        association: "Water",
    },
    TarotCard {
        id: 50,
        name: "Ace of Swords",
        chinese: "宝剑Ace",
        symbol: "A",
        suit: Some(Suit::Swords),
        upright: "真相、清晰、新想法、突破",
        reversed: "混乱、失序、粗暴、谎言",
        keywords: &["truth", "clarity", "breakthrough", "new ideas"],
        association: "Air",
    },
    TarotCard {
        id: 51,
        name: "Two of Swords",
        chinese: "宝剑二",
        symbol: "2",
        suit: Some(Suit::Swords),
        upright: "艰难抉择、僵局、回避",
        reversed: "信息揭晓、做出决定",
        keywords: &["choice", "stalemate", "indecision", "blocking"],
        association: "Air",
    },
    TarotCard {
        id: 52,
        name: "Three of Swords",
        chinese: "宝剑三",
        symbol: "3",
        suit: Some(Suit::Swords),
        upright: "心碎、悲伤、哀痛、背叛",
        reversed: "疗愈、原谅、走出伤痛",
        keywords: &["heartbreak", "grief", "sorrow", "pain"],
        association: "Air",
    },
    TarotCard {
        id: 53,
        name: "Four of Swords",
        chinese: "宝剑四",
        symbol: "4",
        suit: Some(Suit::Swords),
        upright: "休息、恢复、冥想、平静",
        reversed: "焦躁、倦怠、压力",
        keywords: &["rest", "recovery", "meditation", "tranquility"],
        association: "Air",
    },
    TarotCard {
        id: 54,
        name: "Five of Swords",
        chinese: "宝剑五",
        symbol: "5",
        suit: Some(Suit::Swords),
        upright: "冲突、失败、不择手段",
        reversed: "和解、原谅、继续前行",
        keywords: &["conflict", "defeat", "struggle", "tension"],
        association: "Air",
    },
    TarotCard {
        id: 55,
        name: "Six of Swords",
        chinese: "宝剑六",
        symbol: "6",
        suit: Some(Suit::Swords),
        upright: "过渡、离开、疗愈之旅",
        reversed: "困住、情感包袱、抗拒改变",
        keywords: &["transition", "moving on", "journey", "healing"],
        association: "Air",
    },
    TarotCard {
        id: 56,
        name: "Seven of Swords",
        chinese: "宝剑七",
        symbol: "7",
        suit: Some(Suit::Swords),
        upright: "欺骗、狡诈、策略、偷窃",
        reversed: "坦白、暴露、承认错误",
        keywords: &["deception", "strategy", "stealth", "trickery"],
        association: "Air",
    },
    TarotCard {
        id: 57,
        name: "Eight of Swords",
        chinese: "宝剑八",
        symbol: "8",
        suit: Some(Suit::Swords),
        upright: "受困、受限、停滞、受害者心态",
        reversed: "自由、释放、自我认知",
        keywords: &["trapped", "restriction", "feeling stuck", "victim"],
        association: "Air",
    },
    TarotCard {
        id: 58,
        name: "Nine of Swords",
        chinese: "宝剑九",
        symbol: "9",
        suit: Some(Suit::Swords),
        upright: "焦虑、担忧、恐惧、噩梦",
        reversed: "希望、克服恐惧、疗愈",
        keywords: &["anxiety", "fear", "worry", "nightmares"],
        association: "Air",
    },
    TarotCard {
        id: 59,
        name: "Ten of Swords",
        chinese: "宝剑十",
        symbol: "10",
        suit: Some(Suit::Swords),
        upright: "背叛、痛苦、结束、危机",
        reversed: "恢复、疗愈、重生",
        keywords: &["betrayal", "pain", "ending", "crisis"],
        association: "Air",
    },
    TarotCard {
        id: 60,
        name: "Page of Swords",
        chinese: "宝剑侍从",
        symbol: "P",
        suit: Some(Suit::Swords),
        upright: "好奇、善于沟通、思维活跃",
        reversed: "出言不逊、愤世嫉俗、言辞刻薄",
        keywords: &["curiosity", "communication", "mental clarity", "youth"],
        association: "Air",
    },
    TarotCard {
        id: 61,
        name: "Knight of Swords",
        chinese: "宝剑骑士",
        symbol: "Kn",
        suit: Some(Suit::Swords),
        upright: "行动导向、思路清晰、直接",
        reversed: "咄咄逼人、急躁、缺乏方向",
        keywords: &["action", "clarity", "directness", "ambition"],
        association: "Air",
    },
    TarotCard {
        id: 62,
        name: "Queen of Swords",
        chinese: "宝剑皇后",
        symbol: "Q",
        suit: Some(Suit::Swords),
        upright: "理智、独立、思维敏锐",
        reversed: "冷漠、尖刻、善于操纵",
        keywords: &["intellect", "independence", "clarity", "wisdom"],
        association: "Air",
    },
    TarotCard {
        id: 63,
        name: "King of Swords",
        chinese: "宝剑国王",
        symbol: "K",
        suit: Some(Suit::Swords),
        upright: "权威、真理、清晰、公正",
        reversed: "专制、严苛、善于操纵",
        keywords: &["authority", "truth", "justice", "clarity"],
        association: "Air",
    },
    TarotCard {
        id: 64,
        name: "Ace of Pentacles",
        chinese: "金币Ace",
        symbol: "A",
        suit: Some(Suit::Pentacles),
        upright: "新机会、繁荣、显化",
        reversed: "错失机会、投资失误",
        keywords: &["opportunity", "prosperity", "new venture", "manifestation"],
        association: "Earth",
    },
    TarotCard {
        id: 65,
        name: "Two of Pentacles",
        chinese: "金币二",
        symbol: "2",
        suit: Some(Suit::Pentacles),
        upright: "平衡、取舍、兼顾、适应",
        reversed: "失衡、过度扩张、混乱",
        keywords: &["balance", "priorities", "flexibility", "adapting"],
        association: "Earth",
    },
    TarotCard {
        id: 66,
        name: "Three of Pentacles",
        chinese: "金币三",
        symbol: "3",
        suit: Some(Suit::Pentacles),
        upright: "团队合作、技能、精通、协作",
        reversed: "缺乏合作、工艺粗糙",
        keywords: &["teamwork", "skills", "mastery", "collaboration"],
        association: "Earth",
    },
    TarotCard {
        id: 67,
        name: "Four of Pentacles",
        chinese: "金币四",
        symbol: "4",
        suit: Some(Suit::Pentacles),
        upright: "安全、稳定、掌控、占有欲",
        reversed: "慷慨、分享、放下控制",
        keywords: &["security", "stability", "control", "holding on"],
        association: "Earth",
    },
    TarotCard {
        id: 68,
        name: "Five of Pentacles",
        chinese: "金币五",
        symbol: "5",
        suit: Some(Suit::Pentacles),
        upright: "困境、贫穷、孤立、挣扎",
        reversed: "恢复、疗愈、财务改善",
        keywords: &["hardship", "poverty", "isolation", "struggle"],
        association: "Earth",
    },
    TarotCard {
        id: 69,
        name: "Six of Pentacles",
        chinese: "金币六",
        symbol: "6",
        suit: Some(Suit::Pentacles),
        upright: "慷慨、慈善、分享、平衡",
        reversed: "负债、依赖、不对等交换",
        keywords: &["generosity", "charity", "sharing", "balance"],
        association: "Earth",
    },
    TarotCard {
        id: 70,
        name: "Seven of Pentacles",
        chinese: "金币七",
        symbol: "7",
        suit: Some(Suit::Pentacles),
        upright: "耐心、投资、长远眼光",
        reversed: "急躁、缺乏远见、停滞",
        keywords: &["patience", "investment", "growth", "waiting"],
        association: "Earth",
    },
    TarotCard {
        id: 71,
        name: "Eight of Pentacles",
        chinese: "金币八",
        symbol: "8",
        suit: Some(Suit::Pentacles),
        upright: "技能、精通、专注、匠心",
        reversed: "缺乏动力、质量低劣",
        keywords: &["skill", "mastery", "dedication", "craftsmanship"],
        association: "Earth",
    },
    TarotCard {
        id: 72,
        name: "Nine of Pentacles",
        chinese: "金币九",
        symbol: "9",
        suit: Some(Suit::Pentacles),
        upright: "富足、独立、自给自足",
        reversed: "依赖、财务损失、孤独",
        keywords: &["abundance", "independence", "luxury", "self-sufficiency"],
        association: "Earth",
    },
    TarotCard {
        id: 73,
        name: "Ten of Pentacles",
        chinese: "金币十",
        symbol: "10",
        suit: Some(Suit::Pentacles),
        upright: "财富、家庭、传承、稳定",
        reversed: "财务损失、家庭冲突、动荡",
        keywords: &["wealth", "family", "inheritance", "stability"],
        association: "Earth",
    },
    TarotCard {
        id: 74,
        name: "Page of Pentacles",
        chinese: "金币侍从",
        symbol: "P",
        suit: Some(Suit::Pentacles),
        upright: "务实、学习、新机会",
        reversed: "不专注、物质化、懒散",
        keywords: &["learning", "opportunity", "practicality", "growth"],
        association: "Earth",
    },
    TarotCard {
        id: 75,
        name: "Knight of Pentacles",
        chinese: "金币骑士",
        symbol: "Kn",
        suit: Some(Suit::Pentacles),
        upright: "可靠、耐心、勤奋、有条理",
        reversed: "懒惰、不可靠、乏味",
        keywords: &["reliability", "patience", "hard work", "methodical"],
        association: "Earth",
    },
    TarotCard {
        id: 76,
        name: "Queen of Pentacles",
        chinese: "金币皇后",
        symbol: "Q",
        suit: Some(Suit::Pentacles),
        upright: "务实、关怀、安稳、富足",
        reversed: "嫉妒、不安、疏忽",
        keywords: &["practicality", "nurturing", "abundance", "security"],
        association: "Earth",
    },
    TarotCard {
        id: 77,
        name: "King of Pentacles",
        chinese: "金币国王",
        symbol: "K",
        suit: Some(Suit::Pentacles),
        upright: "财富、事业、权威、稳定",
        reversed: "贪婪、物质主义、腐败",
        keywords: &["wealth", "authority", "stability", "business"],
        association: "Earth",
    },
];

/// Look up a card by id.
pub fn card(id: u8) -> OracleResult<&'static TarotCard> {
    DECK.get(usize::from(id)).ok_or(OracleError::InvalidCardId(id))
}

/// A card as it came out of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    /// The card.
    pub card: &'static TarotCard,
    /// Landed upside down.
    pub reversed: bool,
}

impl DrawnCard {
    /// 正位 or 逆位.
    pub fn orientation(&self) -> &'static str {
        if self.reversed { "逆位" } else { "正位" }
    }

    /// The meaning for the card's orientation.
    pub fn meaning(&self) -> &'static str {
        if self.reversed {
            self.card.reversed
        } else {
            self.card.upright
        }
    }
}

impl std::fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}：{}", self.card, self.orientation(), self.meaning())
    }
}

/// Draw up to `count` distinct cards, skipping any id in `exclude`.
///
/// Returns fewer than `count` cards when the exclusions leave too few.
pub fn draw_cards(rng: &mut StdRng, count: usize, exclude: &[u8]) -> Vec<DrawnCard> {
    let mut pool: Vec<&'static TarotCard> =
        DECK.iter().filter(|c| !exclude.contains(&c.id)).collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool.into_iter()
        .map(|card| DrawnCard {
            card,
            reversed: rng.random_bool(0.5),
        })
        .collect()
}

/// A labelled slot in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadPosition {
    /// Short label, e.g. 过去.
    pub label: &'static str,
    /// What the slot speaks to.
    pub description: &'static str,
}

const DAILY_POSITIONS: [SpreadPosition; 1] = [SpreadPosition {
    label: "今日卡",
    description: "今日能量指引",
}];

const THREE_CARD_POSITIONS: [SpreadPosition; 3] = [
    SpreadPosition {
        label: "过去",
        description: "过去的经历与影响",
    },
    SpreadPosition {
        label: "现在",
        description: "当前的状况与挑战",
    },
    SpreadPosition {
        label: "未来",
        description: "未来的可能性与建议",
    },
];

/// Supported spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Spread {
    /// One card for the day.
    #[default]
    Daily,
    /// Past, present, future.
    ThreeCard,
}

impl Spread {
    /// Parse `daily` / `three` (or 今日 / 三张).
    pub fn parse(s: &str) -> OracleResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "今日" => Ok(Spread::Daily),
            "three" | "three-card" | "3" | "三张" => Ok(Spread::ThreeCard),
            other => Err(OracleError::UnknownSpread(other.to_string())),
        }
    }

    /// Slots in reading order.
    pub fn positions(self) -> &'static [SpreadPosition] {
        match self {
            Spread::Daily => &DAILY_POSITIONS,
            Spread::ThreeCard => &THREE_CARD_POSITIONS,
        }
    }
}

/// A card placed in a spread slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedCard {
    /// The slot.
    pub position: SpreadPosition,
    /// The card drawn for it.
    pub drawn: DrawnCard,
}

/// A completed spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TarotReading {
    /// Which spread was laid.
    pub spread: Spread,
    /// One card per position, in order.
    pub cards: Vec<PlacedCard>,
}

/// Lay out `spread`, drawing one card per position.
///
/// Fails when the exclusions leave fewer cards than the spread needs.
pub fn read_spread(
    spread: Spread,
    rng: &mut StdRng,
    exclude: &[u8],
) -> OracleResult<TarotReading> {
    let positions = spread.positions();
    let drawn = draw_cards(rng, positions.len(), exclude);
    if drawn.len() < positions.len() {
        return Err(OracleError::NotEnoughCards {
            needed: positions.len(),
            available: drawn.len(),
        });
    }
    tracing::debug!(?spread, cards = drawn.len(), "laid tarot spread");
    Ok(TarotReading {
        spread,
        cards: positions
            .iter()
            .zip(drawn)
            .map(|(&position, drawn)| PlacedCard { position, drawn })
            .collect(),
    })
}
