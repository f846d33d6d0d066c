//! Host-page markup for the dashboard.
//!
//! Every branch is a `<div>` carrying `data-testid` so the active branch can
//! be found from outside. Interpolated text is HTML-escaped.

use std::fmt::Write;

use html_escape::encode_text;

use crate::domain::view::{Branch, DashboardView, EMPTY_PROMPT, LOADING_TEXT};

const ERROR_ICON: &str = "⚠️";

#[must_use]
pub fn render_markup(view: DashboardView<'_>) -> String {
    let mut out = String::from("<div class=\"weather-dashboard\">\n");
    let branch = view.branch();
    out.push_str(&branch_open_tag(branch));
    out.push('\n');

    match view {
        DashboardView::Loading => {
            out.push_str("<div class=\"loading-spinner\"></div>\n");
            let _ = writeln!(out, "<p>{LOADING_TEXT}</p>");
        }
        DashboardView::Error(message) => {
            let _ = writeln!(out, "<div class=\"error-icon\">{ERROR_ICON}</div>");
            let _ = writeln!(out, "<h2>{}</h2>", encode_text(message));
        }
        DashboardView::Weather(snapshot) => {
            let _ = writeln!(
                out,
                "<div class=\"location\">{}</div>",
                encode_text(&snapshot.location_label())
            );
            let _ = writeln!(
                out,
                "<div class=\"temperature\">{}</div>",
                encode_text(&snapshot.temperature_label())
            );
            let _ = writeln!(
                out,
                "<div class=\"condition\">{}</div>",
                encode_text(&snapshot.condition)
            );
        }
        DashboardView::Empty => {
            let _ = writeln!(out, "<p>{EMPTY_PROMPT}</p>");
        }
    }

    out.push_str("</div>\n</div>");
    out
}

fn branch_class(branch: Branch) -> &'static str {
    match branch {
        Branch::Loading => "loading",
        Branch::Error => "error",
        Branch::Weather => "current-weather",
        Branch::Empty => "empty-state",
    }
}

fn branch_open_tag(branch: Branch) -> String {
    format!(
        "<div class=\"{}\" data-testid=\"{}\">",
        branch_class(branch),
        branch.test_id()
    )
}

/// Whether `markup` contains the element for `branch`.
///
/// Matches the whole opening tag; escaped text cannot produce one since `<`
/// is always encoded.
#[must_use]
pub fn contains_branch(markup: &str, branch: Branch) -> bool {
    markup.contains(&branch_open_tag(branch))
}
