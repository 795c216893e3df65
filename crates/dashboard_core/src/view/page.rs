//! Full-page layout: sidebar navigation plus main panel.

use super::chart::Chart;
use super::html::escape;
use crate::model::EntityKind;
use std::fmt::Write;

const STYLE: &str = "body{margin:0;display:flex;font-family:sans-serif;color:#262730}\
.sidebar{width:14rem;min-height:100vh;padding:1.5rem;background:#f0f2f6}\
.sidebar fieldset{border:0;padding:0}\
.sidebar label{display:block;margin:.4rem 0}\
main{flex:1;padding:1.5rem 3rem}\
table.grid{border-collapse:collapse;margin-bottom:2rem}\
table.grid th,table.grid td{border:1px solid #ddd;padding:.25rem .6rem;text-align:left}\
.error{color:#7d1a1a;background:#fde8e8;padding:1rem;white-space:pre-wrap}\
footer{margin-top:2rem;color:#888;font-size:.8rem}";

/// Rendered output of one navigation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    selected: EntityKind,
    grid: String,
    chart: Option<Chart>,
}

impl Page {
    pub fn new(selected: EntityKind, grid: String, chart: Option<Chart>) -> Self {
        Self {
            selected,
            grid,
            chart,
        }
    }

    pub fn selected(&self) -> EntityKind {
        self.selected
    }

    pub fn heading(&self) -> &'static str {
        self.selected.label()
    }

    pub fn grid(&self) -> &str {
        &self.grid
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Complete HTML document for this page.
    pub fn to_html(&self) -> String {
        let mut main = format!("<h2>{}</h2>\n{}\n", self.heading(), self.grid);
        if let Some(chart) = &self.chart {
            let _ = writeln!(main, "<figure>{}</figure>", chart.to_svg());
        }
        layout(self.selected, &main)
    }
}

/// Page shown when a navigation cycle fails; `message` is displayed raw.
pub fn error_page(selected: EntityKind, message: &str) -> String {
    let main = format!(
        "<h2>{}</h2>\n<pre class=\"error\">{}</pre>\n",
        selected.label(),
        escape(message)
    );
    layout(selected, &main)
}

fn layout(selected: EntityKind, main: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{} · Dashboard</title>", selected.label());
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");
    out.push_str(&sidebar(selected));
    let _ = write!(
        out,
        "<main>\n{main}<footer>dashboard_core {}</footer>\n</main>\n</body>\n</html>\n",
        crate::core_version()
    );
    out
}

fn sidebar(selected: EntityKind) -> String {
    let mut out = String::from(
        "<aside class=\"sidebar\">\n<h1>Navigation</h1>\n<form method=\"get\" action=\"/\">\n<fieldset>\n<legend>Go to</legend>\n",
    );
    for kind in EntityKind::ALL {
        let checked = if kind == selected { " checked" } else { "" };
        let _ = writeln!(
            out,
            "<label><input type=\"radio\" name=\"page\" value=\"{label}\"{checked} onchange=\"this.form.submit()\"> {label}</label>",
            label = kind.label()
        );
    }
    out.push_str("</fieldset>\n<noscript><button type=\"submit\">Go</button></noscript>\n</form>\n</aside>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{error_page, Page};
    use crate::model::EntityKind;

    #[test]
    fn sidebar_offers_both_choices_and_checks_selection() {
        let html = Page::new(EntityKind::Goals, String::new(), None).to_html();
        assert!(html.contains("<h1>Navigation</h1>"));
        assert!(html.contains("<legend>Go to</legend>"));
        assert!(html.contains("value=\"Contacts\" onchange"));
        assert!(html.contains("value=\"Goals\" checked"));
        assert!(html.contains("<h2>Goals</h2>"));
        assert!(!html.contains("<figure>"));
    }

    #[test]
    fn error_page_shows_escaped_message() {
        let html = error_page(EntityKind::Contacts, "no such table: <contacts>");
        assert!(html.contains("<pre class=\"error\">no such table: &lt;contacts&gt;</pre>"));
        assert!(html.contains("value=\"Contacts\" checked"));
    }
}
