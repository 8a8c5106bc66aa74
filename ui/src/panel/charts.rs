use dioxus::prelude::*;

use crate::core::format::format_count;
use crate::core::SeriesPoint;
use crate::t;

const LINE_WIDTH: f64 = 640.0;
const LINE_HEIGHT: f64 = 280.0;
const LINE_PADDING: f64 = 32.0;

/// Each value as a percentage of the series maximum (all zero for an empty or
/// all-zero series).
pub(crate) fn relative_sizes(points: &[SeriesPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    points
        .iter()
        .map(|p| {
            if max == 0 {
                0.0
            } else {
                p.value as f64 / max as f64 * 100.0
            }
        })
        .collect()
}

/// SVG coordinates for the hourly line, evenly spaced on x, scaled on y so the
/// maximum touches the top padding.
pub(crate) fn line_coordinates(
    points: &[SeriesPoint],
    width: f64,
    height: f64,
    padding: f64,
) -> Vec<(f64, f64)> {
    let inner_w = (width - 2.0 * padding).max(0.0);
    let inner_h = (height - 2.0 * padding).max(0.0);
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    relative_sizes(points)
        .into_iter()
        .enumerate()
        .map(|(idx, pct)| {
            let x = if points.len() > 1 {
                padding + step * idx as f64
            } else {
                width / 2.0
            };
            let y = padding + inner_h * (1.0 - pct / 100.0);
            (x, y)
        })
        .collect()
}

#[component]
pub fn HorizontalBarChart(title: String, points: Vec<SeriesPoint>, template: &'static str) -> Element {
    let sizes = relative_sizes(&points);
    let rows: Vec<(SeriesPoint, f64)> = points.into_iter().zip(sizes).collect();

    rsx! {
        figure { class: "chart chart--hbar {template}",
            figcaption { class: "chart__title", "{title}" }
            if rows.is_empty() {
                p { class: "chart__empty", {t!("chart-empty")} }
            }
            for (point, size) in rows {
                div { key: "{point.label}", class: "chart__hbar-row",
                    span { class: "chart__label", "{point.label}" }
                    div { class: "chart__hbar-track",
                        div { class: "chart__bar", style: "width:{size:.2}%" }
                    }
                    span { class: "chart__value", "{format_count(point.value)}" }
                }
            }
        }
    }
}

#[component]
pub fn VerticalBarChart(title: String, points: Vec<SeriesPoint>, template: &'static str) -> Element {
    let sizes = relative_sizes(&points);
    let columns: Vec<(SeriesPoint, f64)> = points.into_iter().zip(sizes).collect();

    rsx! {
        figure { class: "chart chart--vbar {template}",
            figcaption { class: "chart__title", "{title}" }
            if columns.is_empty() {
                p { class: "chart__empty", {t!("chart-empty")} }
            }
            div { class: "chart__vbar-area",
                for (point, size) in columns {
                    div { key: "{point.label}", class: "chart__vbar-column",
                        span { class: "chart__value", "{format_count(point.value)}" }
                        div { class: "chart__vbar-track",
                            div { class: "chart__bar", style: "height:{size:.2}%" }
                        }
                        span { class: "chart__label", "{point.label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LineChart(title: String, points: Vec<SeriesPoint>, template: &'static str) -> Element {
    let coords = line_coordinates(&points, LINE_WIDTH, LINE_HEIGHT, LINE_PADDING);
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let markers: Vec<(SeriesPoint, (f64, f64))> = points.into_iter().zip(coords).collect();
    let baseline = LINE_HEIGHT - LINE_PADDING;
    let axis_end = LINE_WIDTH - LINE_PADDING;
    let label_y = LINE_HEIGHT - 8.0;

    rsx! {
        figure { class: "chart chart--line {template}",
            figcaption { class: "chart__title", "{title}" }
            if markers.is_empty() {
                p { class: "chart__empty", {t!("chart-empty")} }
            } else {
                svg {
                    class: "chart__svg",
                    view_box: "0 0 {LINE_WIDTH} {LINE_HEIGHT}",
                    preserve_aspect_ratio: "none",
                    line {
                        class: "chart__axis",
                        x1: "{LINE_PADDING}",
                        y1: "{baseline}",
                        x2: "{axis_end}",
                        y2: "{baseline}",
                    }
                    polyline { class: "chart__line", points: "{polyline}" }
                    for (point, (x, y)) in markers {
                        g { key: "{point.label}",
                            circle { class: "chart__marker", cx: "{x:.1}", cy: "{y:.1}", r: "4",
                                title { "{point.label}: {format_count(point.value)}" }
                            }
                            text { class: "chart__tick", x: "{x:.1}", y: "{label_y}", text_anchor: "middle", "{point.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[u64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| SeriesPoint {
                label: format!("{}h", idx + 7),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn sizes_are_relative_to_the_maximum() {
        assert_eq!(relative_sizes(&points(&[50, 100, 25])), vec![50.0, 100.0, 25.0]);
        assert_eq!(relative_sizes(&points(&[0, 0])), vec![0.0, 0.0]);
        assert!(relative_sizes(&[]).is_empty());
    }

    #[test]
    fn line_spans_the_padded_box() {
        let coords = line_coordinates(&points(&[10, 20, 0]), 100.0, 60.0, 10.0);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0].0, 10.0);
        assert_eq!(coords[2].0, 90.0);
        // Maximum touches the top padding, zero sits on the baseline.
        assert_eq!(coords[1].1, 10.0);
        assert_eq!(coords[2].1, 50.0);
    }

    #[test]
    fn single_point_is_centered() {
        let coords = line_coordinates(&points(&[5]), 100.0, 60.0, 10.0);
        assert_eq!(coords, vec![(50.0, 10.0)]);
    }
}
