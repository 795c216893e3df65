//! Summary charts derived from fetched records.
//!
//! # Responsibility
//! - Derive chart data (bar counts, achievement proportions) from records.
//! - Draw that data as standalone inline SVG.
//!
//! # Invariants
//! - Bars are ordered by ascending initial (code-point order).
//! - Proportion slices partition every goal; percentages sum to 100.

use super::html::escape;
use crate::model::{Contact, Goal, GoalStatus};
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt::Write;

const BAR_COLOR: &str = "#4c72b0";
const SLICE_COLORS: [&str; 2] = ["#4c72b0", "#dd8452"];
const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 320.0;
const PLOT_MARGIN: f64 = 40.0;
const PIE_RADIUS: f64 = 110.0;

/// One chart, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Proportion(ProportionChart),
}

impl Chart {
    pub fn to_svg(&self) -> String {
        match self {
            Self::Bar(chart) => chart.to_svg(),
            Self::Proportion(chart) => chart.to_svg(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: char,
    pub count: usize,
}

/// Count of records per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Counts contacts by the first character of their name.
    ///
    /// Contacts without an initial (NULL or empty name) are not counted.
    pub fn by_initial(contacts: &[Contact]) -> Self {
        let mut counts = BTreeMap::<char, usize>::new();
        for initial in contacts.iter().filter_map(Contact::initial) {
            *counts.entry(initial).or_default() += 1;
        }
        Self {
            title: "Contacts".to_string(),
            bars: counts
                .into_iter()
                .map(|(label, count)| Bar { label, count })
                .collect(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = svg_open(&self.title);
        let _ = write!(
            out,
            "<text class=\"title\" x=\"{:.2}\" y=\"24\" text-anchor=\"middle\">{}</text>",
            CHART_WIDTH / 2.0,
            escape(&self.title)
        );

        let plot_width = CHART_WIDTH - 2.0 * PLOT_MARGIN;
        let plot_height = CHART_HEIGHT - 2.0 * PLOT_MARGIN;
        let baseline = CHART_HEIGHT - PLOT_MARGIN;
        let _ = write!(
            out,
            "<line class=\"axis\" x1=\"{m:.2}\" y1=\"{b:.2}\" x2=\"{e:.2}\" y2=\"{b:.2}\" stroke=\"#333\"/>",
            m = PLOT_MARGIN,
            b = baseline,
            e = CHART_WIDTH - PLOT_MARGIN
        );

        let max_count = self.bars.iter().map(|bar| bar.count).max().unwrap_or(0);
        if max_count > 0 {
            let slot = plot_width / self.bars.len() as f64;
            for (index, bar) in self.bars.iter().enumerate() {
                let height = plot_height * bar.count as f64 / max_count as f64;
                let x = PLOT_MARGIN + slot * index as f64 + slot * 0.1;
                let center = x + slot * 0.4;
                let label = escape(&bar.label.to_string());
                let _ = write!(
                    out,
                    "<g class=\"bar\" data-label=\"{label}\" data-count=\"{count}\">\
                     <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{height:.2}\" fill=\"{BAR_COLOR}\"/>\
                     <text x=\"{center:.2}\" y=\"{ly:.2}\" text-anchor=\"middle\">{label}</text>\
                     <text x=\"{center:.2}\" y=\"{cy:.2}\" text-anchor=\"middle\">{count}</text></g>",
                    count = bar.count,
                    y = baseline - height,
                    w = slot * 0.8,
                    ly = baseline + 16.0,
                    cy = baseline - height - 4.0,
                );
            }
        }

        out.push_str("</svg>");
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub status: GoalStatus,
    pub count: usize,
    pub percent: f64,
}

impl Slice {
    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Percentage to one decimal place, e.g. `66.7%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// Two-slice share of achieved versus pending goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionChart {
    /// Ordered by count descending; ties put `Achieved` first.
    pub slices: [Slice; 2],
}

impl ProportionChart {
    /// Partitions `goals` by their achieved flag.
    ///
    /// Returns `None` for an empty slice, which has no proportions.
    pub fn achievement(goals: &[Goal]) -> Option<Self> {
        if goals.is_empty() {
            return None;
        }

        let total = goals.len();
        let achieved = goals.iter().filter(|goal| goal.achieved).count();
        let slice = |status, count: usize| Slice {
            status,
            count,
            percent: count as f64 * 100.0 / total as f64,
        };

        let achieved_slice = slice(GoalStatus::Achieved, achieved);
        let pending_slice = slice(GoalStatus::Pending, total - achieved);
        let slices = if pending_slice.count > achieved_slice.count {
            [pending_slice, achieved_slice]
        } else {
            [achieved_slice, pending_slice]
        };
        Some(Self { slices })
    }

    pub fn slice(&self, status: GoalStatus) -> &Slice {
        if self.slices[0].status == status {
            &self.slices[0]
        } else {
            &self.slices[1]
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = svg_open("Goals");
        let cx = CHART_WIDTH / 2.0;
        let cy = CHART_HEIGHT / 2.0;

        // Counter-clockwise from 12 o'clock.
        let mut start = PI / 2.0;
        for (slice, color) in self.slices.iter().zip(SLICE_COLORS) {
            let _ = write!(
                out,
                "<g class=\"slice\" data-label=\"{}\" data-percent=\"{}\">",
                slice.label(),
                slice.percent_label()
            );
            let sweep = 2.0 * PI * slice.percent / 100.0;
            if slice.count > 0 {
                if slice.percent >= 100.0 {
                    let _ = write!(
                        out,
                        "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{PIE_RADIUS:.2}\" fill=\"{color}\"/>"
                    );
                } else {
                    let end = start + sweep;
                    let (x0, y0) = polar(cx, cy, PIE_RADIUS, start);
                    let (x1, y1) = polar(cx, cy, PIE_RADIUS, end);
                    let large_arc = u8::from(sweep > PI);
                    let _ = write!(
                        out,
                        "<path d=\"M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {PIE_RADIUS:.2} {PIE_RADIUS:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z\" fill=\"{color}\"/>"
                    );
                }

                let middle = start + sweep / 2.0;
                let (lx, ly) = polar(cx, cy, PIE_RADIUS * 1.18, middle);
                let (px, py) = polar(cx, cy, PIE_RADIUS * 0.6, middle);
                let _ = write!(
                    out,
                    "<text x=\"{lx:.2}\" y=\"{ly:.2}\" text-anchor=\"middle\">{}</text>\
                     <text x=\"{px:.2}\" y=\"{py:.2}\" text-anchor=\"middle\">{}</text>",
                    slice.label(),
                    slice.percent_label()
                );
            }
            out.push_str("</g>");
            start += sweep;
        }

        out.push_str("</svg>");
        out
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}

fn svg_open(label: &str) -> String {
    format!(
        "<svg class=\"chart\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" \
         width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" role=\"img\" aria-label=\"{}\">",
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::{BarChart, Chart, ProportionChart};
    use crate::model::{Contact, Goal, GoalStatus};

    fn goals(flags: &[bool]) -> Vec<Goal> {
        flags.iter().map(|&achieved| Goal { achieved }).collect()
    }

    #[test]
    fn bars_follow_code_point_order_and_keep_case() {
        let contacts = ["bea", "Bob", "amy", "Abe", "Zed"].map(Contact::new);
        let chart = BarChart::by_initial(&contacts);
        let labels = chart.bars.iter().map(|bar| bar.label).collect::<String>();
        assert_eq!(labels, "ABZab");
        assert!(chart.bars.iter().all(|bar| bar.count == 1));
    }

    #[test]
    fn contacts_without_initial_are_not_counted() {
        let contacts = vec![Contact::new("Amy"), Contact::new(""), Contact { name: None }];
        let chart = BarChart::by_initial(&contacts);
        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.bars[0].count, 1);
    }

    #[test]
    fn bar_svg_has_one_group_per_bar() {
        let contacts = ["Amy", "Abe", "Bob"].map(Contact::new);
        let svg = BarChart::by_initial(&contacts).to_svg();
        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        let a = svg.find("data-label=\"A\" data-count=\"2\"").unwrap();
        let b = svg.find("data-label=\"B\" data-count=\"1\"").unwrap();
        assert!(a < b);
    }

    #[test]
    fn proportions_partition_and_sum_to_hundred() {
        for flags in [
            vec![true],
            vec![false, false],
            vec![true, false, false],
            vec![true, true, false, false, false, false, true],
        ] {
            let chart = ProportionChart::achievement(&goals(&flags)).unwrap();
            let counted: usize = chart.slices.iter().map(|slice| slice.count).sum();
            let percent: f64 = chart.slices.iter().map(|slice| slice.percent).sum();
            assert_eq!(counted, flags.len());
            assert!((percent - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn larger_bucket_comes_first() {
        let chart = ProportionChart::achievement(&goals(&[true, false, false])).unwrap();
        assert_eq!(chart.slices[0].status, GoalStatus::Pending);
        assert_eq!(chart.slices[0].percent_label(), "66.7%");
        assert_eq!(chart.slices[1].percent_label(), "33.3%");
        assert_eq!(chart.slice(GoalStatus::Achieved).count, 1);

        let tie = ProportionChart::achievement(&goals(&[false, true])).unwrap();
        assert_eq!(tie.slices[0].status, GoalStatus::Achieved);
    }

    #[test]
    fn empty_goals_have_no_proportions() {
        assert!(ProportionChart::achievement(&[]).is_none());
    }

    #[test]
    fn full_slice_draws_circle_and_empty_slice_draws_nothing() {
        let svg = ProportionChart::achievement(&goals(&[true, true]))
            .unwrap()
            .to_svg();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("data-label=\"Pending\" data-percent=\"0.0%\"></g>"));
    }

    #[test]
    fn chart_serializes_with_type_tag() {
        let contacts = ["Amy", "Bob"].map(Contact::new);
        let value = serde_json::to_value(Chart::Bar(BarChart::by_initial(&contacts))).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["title"], "Contacts");
        assert_eq!(value["bars"][1]["label"], "B");
        assert_eq!(value["bars"][1]["count"], 1);
    }
}
