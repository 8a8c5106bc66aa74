use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::core::RankingEntry;
use crate::t;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

pub(crate) fn medal(rank: usize) -> &'static str {
    rank.checked_sub(1)
        .and_then(|idx| MEDALS.get(idx))
        .copied()
        .unwrap_or("🏅")
}

#[component]
pub fn Podium(ranking: Vec<RankingEntry>, card_color: &'static str) -> Element {
    let unit = t!("unit-pieces");

    rsx! {
        section { class: "podium",
            h4 { class: "podium__title", {t!("ranking-title")} }
            for entry in ranking {
                article { key: "{entry.rank}", class: "podium__card", style: "background:{card_color};",
                    div { class: "podium__operator", "{medal(entry.rank)} {entry.operator}" }
                    h5 { class: "podium__pieces", "{format_count(entry.total_pieces)} {unit}" }
                }
            }
        }
    }
}
