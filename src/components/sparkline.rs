//! Inline SVG trend sparkline.
//!
//! Path construction is plain geometry over the sample vector, kept free of
//! DOM types so it can be exercised in native tests.

#[cfg(test)]
#[path = "sparkline_test.rs"]
mod sparkline_test;

use leptos::prelude::*;

use crate::net::types::Momentum;

/// Drawing area of the sparkline, in viewBox units.
pub const WIDTH: f64 = 96.0;
pub const HEIGHT: f64 = 28.0;

/// Scale samples into `(x, y)` viewBox coordinates. A flat series (or one
/// with a single sample) renders as a midline rather than dividing by a
/// zero range.
fn scale(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let Some(first) = values.first() else {
        return Vec::new();
    };
    let (min, max) = values
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let range = if max - min < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = step * i as f64;
            let y = height - (v - min) / range * height;
            (x, y)
        })
        .collect()
}

/// SVG `d` attribute for the trend line, or `None` when there is nothing
/// to draw.
pub fn line_path(values: &[f64], width: f64, height: f64) -> Option<String> {
    let points = scale(values, width, height);
    let (first, rest) = points.split_first()?;
    let mut path = format!("M{:.1},{:.1}", first.0, first.1);
    for (x, y) in rest {
        path.push_str(&format!(" L{x:.1},{y:.1}"));
    }
    Some(path)
}

/// SVG `d` attribute for the filled region under the trend line.
pub fn area_path(values: &[f64], width: f64, height: f64) -> Option<String> {
    let points = scale(values, width, height);
    let last_x = points.last()?.0;
    let line = line_path(values, width, height)?;
    Some(format!("{line} L{last_x:.1},{height:.1} L0.0,{height:.1} Z"))
}

/// Y coordinate of the final sample, for the end-point marker.
pub fn last_point_y(values: &[f64], width: f64, height: f64) -> Option<(f64, f64)> {
    scale(values, width, height).last().copied()
}

/// Sparkline cell for one leaderboard row. Empty sample vectors render a
/// placeholder dash so the column keeps its width.
#[component]
pub fn Sparkline(values: Vec<f64>, momentum: Momentum) -> impl IntoView {
    let trend = match momentum {
        Momentum::Rising => "sparkline sparkline--rising",
        Momentum::Falling => "sparkline sparkline--falling",
        Momentum::Stable => "sparkline sparkline--stable",
    };
    let line = line_path(&values, WIDTH, HEIGHT);
    let area = area_path(&values, WIDTH, HEIGHT);
    let marker = last_point_y(&values, WIDTH, HEIGHT);

    view! {
        <span class=trend>
            {match (line, area) {
                (Some(line), Some(area)) => {
                    view! {
                        <svg
                            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                            preserveAspectRatio="none"
                            aria-hidden="true"
                        >
                            <path class="sparkline__area" d=area></path>
                            <path class="sparkline__line" d=line></path>
                            {marker
                                .map(|(x, y)| {
                                    view! {
                                        <circle
                                            class="sparkline__dot"
                                            cx=format!("{x:.1}")
                                            cy=format!("{y:.1}")
                                            r="2"
                                        ></circle>
                                    }
                                })}
                        </svg>
                    }
                        .into_any()
                }
                _ => view! { <span class="sparkline__empty">"\u{2013}"</span> }.into_any(),
            }}
        </span>
    }
}
