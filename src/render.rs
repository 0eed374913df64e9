//! HTML table rendering of a materialized grid.
//!
//! Presentation only: consumes a [`Grid`] and emits a `<table>` with
//! `rowspan` cells. Covered cells emit nothing; collision containers emit
//! their members side by side in column order.

use std::collections::HashMap;
use std::fmt::Write;

use crate::axis::{format_minutes, Weekday};
use crate::config::LayoutConfig;
use crate::layout::{Cell, CollisionCell, Grid, SingleCell};
use crate::models::TimeBlock;

/// Number of distinct course colour classes.
pub const COLOR_SLOTS: usize = 6;

/// Short campus label for compact cells.
///
/// Well-known campuses map to a fixed tag; anything else is truncated
/// to ten characters, upper-cased.
pub fn campus_short_label(campus: &str) -> String {
    let upper = campus.to_uppercase();
    if upper.contains("ALEMANIA") || upper.contains("RIVAS") {
        "ALEMANIA".to_string()
    } else if upper.contains("NORTE") || upper.contains("PABLO") {
        "NORTE".to_string()
    } else if upper.contains("VIRTUAL") || upper.contains("ONLINE") {
        "VIRTUAL".to_string()
    } else if upper.contains("FRANCISCO") {
        "S.FCO".to_string()
    } else {
        upper.chars().take(10).collect()
    }
}

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders grids as HTML tables.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    placeholder: String,
    colors: HashMap<String, usize>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            placeholder: "N/A".to_string(),
            colors: HashMap::new(),
        }
    }

    /// Renderer with the configured campus placeholder.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new().with_placeholder(config.placeholder.clone())
    }

    /// Text shown for an absent campus.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Assigns colour slots in the order courses were selected.
    pub fn with_course_order<S: AsRef<str>>(mut self, courses: &[S]) -> Self {
        self.colors = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_ref().to_string(), i % COLOR_SLOTS))
            .collect();
        self
    }

    /// CSS class for a course; unknown courses get the first slot.
    pub fn color_class(&self, course: &str) -> String {
        format!("color-{}", self.colors.get(course).copied().unwrap_or(0))
    }

    /// Renders the full table.
    pub fn render(&self, grid: &Grid) -> String {
        let mut html = String::from("<table class=\"schedule-table\"><thead><tr>");
        html.push_str("<th class=\"time-header\">Time</th>");
        for day in Weekday::ALL {
            let _ = write!(html, "<th class=\"day-header\">{}</th>", day.label());
        }
        html.push_str("</tr></thead><tbody>");

        for row in grid.rows() {
            let _ = write!(
                html,
                "<tr><td class=\"time-cell\">{}</td>",
                row.label.as_deref().unwrap_or("")
            );
            for cell in &row.cells {
                self.render_cell(&mut html, cell);
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }

    fn render_cell(&self, html: &mut String, cell: &Cell) {
        match cell {
            Cell::Covered => {}
            Cell::Empty => html.push_str("<td class=\"empty-cell\"></td>"),
            Cell::Single(single) => self.render_single(html, single),
            Cell::Collision(collision) => self.render_collision(html, collision),
        }
    }

    fn render_single(&self, html: &mut String, cell: &SingleCell) {
        let _ = write!(
            html,
            "<td class=\"block-cell {}\" rowspan=\"{}\">",
            self.color_class(&cell.block.course),
            cell.span
        );
        self.render_content(html, &cell.block);
        html.push_str("</td>");
    }

    fn render_collision(&self, html: &mut String, cell: &CollisionCell) {
        let _ = write!(
            html,
            "<td class=\"block-cell collision-cell\" rowspan=\"{}\"><div class=\"collision-flex\">",
            cell.span
        );
        for (member, col) in cell.cluster.members().iter().zip(&cell.columns) {
            let _ = write!(
                html,
                "<div class=\"collision-block-flex {}\" data-column=\"{}/{}\">",
                self.color_class(&member.block.course),
                col.column_index,
                col.total_columns
            );
            self.render_content(html, &member.block);
            html.push_str("</div>");
        }
        html.push_str("</div></td>");
    }

    fn render_content(&self, html: &mut String, block: &TimeBlock) {
        let campus = block
            .campus
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.placeholder);
        let _ = write!(
            html,
            "<div class=\"block-content\">\
             <span class=\"block-title\">{}</span>\
             <span class=\"block-section\">Sec {} - Grp {}</span>\
             <span class=\"block-time\">{} - {}</span>\
             <span class=\"block-campus\">{}</span></div>",
            escape_html(&block.course),
            block.section,
            block.group,
            format_minutes(block.start().minutes()),
            format_minutes(block.end().minutes()),
            escape_html(campus)
        );
    }
}
