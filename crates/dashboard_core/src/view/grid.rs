//! Data grid rendering.

use super::html::escape;
use crate::model::Table;
use std::fmt::Write;

/// Renders every column and row of `table` as an HTML table.
///
/// NULL cells render empty. There is no pagination.
pub fn render_grid(table: &Table) -> String {
    let mut out = String::from("<table class=\"grid\">\n<thead><tr>");
    for column in table.columns() {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            let class = if cell.is_null() { " class=\"null\"" } else { "" };
            let _ = write!(out, "<td{class}>{}</td>", escape(&cell.to_string()));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}
