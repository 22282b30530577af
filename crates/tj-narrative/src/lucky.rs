//! Lucky colors, directions and element colors.

use tj_core::{Element, HeavenlyStem};

/// Three lucky colors for a day stem, most favourable first.
pub fn lucky_colors(stem: HeavenlyStem) -> [&'static str; 3] {
    match stem {
        HeavenlyStem::Jia => ["青色", "绿色", "蓝色"],
        HeavenlyStem::Yi => ["青色", "绿色", "黑色"],
        HeavenlyStem::Bing => ["红色", "紫色", "白色"],
        HeavenlyStem::Ding => ["红色", "紫色", "银色"],
        HeavenlyStem::Wu => ["黄色", "棕色", "金色"],
        HeavenlyStem::Ji => ["黄色", "棕色", "白色"],
        HeavenlyStem::Geng => ["白色", "金色", "灰色"],
        HeavenlyStem::Xin => ["白色", "金色", "银色"],
        HeavenlyStem::Ren => ["蓝色", "黑色", "青色"],
        HeavenlyStem::Gui => ["蓝色", "黑色", "银色"],
    }
}

/// Favourable direction for a stem, following its element.
pub fn lucky_direction(stem: HeavenlyStem) -> &'static str {
    match stem.element() {
        Element::Wood => "东",
        Element::Fire => "南",
        Element::Earth => "中",
        Element::Metal => "西",
        Element::Water => "北",
    }
}

/// The color an element is dressed in.
pub fn element_color(element: Element) -> &'static str {
    match element {
        Element::Wood => "绿色",
        Element::Fire => "红色",
        Element::Earth => "黄色",
        Element::Metal => "白色",
        Element::Water => "黑色",
    }
}
