//! Plain-text rendering of the panel.
//!
//! Output is deterministic for a given [`PanelState`] so it can be asserted
//! on directly.

use std::fmt::Write;

use crate::config::ViewConfig;
use crate::github::UserProfile;
use crate::panel::{PanelState, Phase};
use crate::view::{FilterField, RepoView, format_date};

const HEADERS: [&str; 7] = [
    "Name",
    "Size",
    "Created",
    "Updated",
    "Stars",
    "Language",
    "Repository",
];

/// Render the whole panel for its current phase.
#[must_use]
pub fn render(state: &PanelState) -> String {
    let mut out = String::new();

    match state.phase() {
        Phase::Idle => {
            out.push_str("Enter a GitHub username to list its repositories.\n");
        }
        Phase::Loading => {
            let _ = writeln!(out, "[loading] fetching {} ...", state.username());
        }
        Phase::ProfileLoaded => {
            if let Some(user) = state.user() {
                render_profile(&mut out, user);
            }
            out.push_str("\n[loading] fetching repositories ...\n");
        }
        Phase::Ready => {
            if let Some(user) = state.user() {
                render_profile(&mut out, user);
            }
            out.push('\n');
            render_filter(&mut out, state);
            out.push('\n');
            let view = state.view();
            render_table(&mut out, &view, state.settings());
            out.push('\n');
            render_pagination(&mut out, &view);
        }
        Phase::Error { message } => {
            let _ = writeln!(out, "Error loading {}: {message}", state.username());
            out.push_str("Type `retry` to try again or search for another user.\n");
        }
    }

    out
}

/// Profile summary block.
pub fn render_profile(out: &mut String, user: &UserProfile) {
    let _ = writeln!(out, "Repositories of {}", user.display_name());
    out.push('\n');
    let rows = [
        ("User", user.login.clone()),
        ("Followers", user.followers.to_string()),
        ("Repositories", user.public_repos.to_string()),
        ("Profile", user.html_url.clone()),
        ("Avatar", user.avatar_url.clone()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<14}{value}");
    }
}

fn render_filter(out: &mut String, state: &PanelState) {
    let filter = state.filter();
    let fields: Vec<&str> = FilterField::ALL.iter().map(|f| f.as_str()).collect();
    let _ = writeln!(
        out,
        "Filter by {} ({}): \"{}\"",
        filter.field.label(),
        filter.field,
        filter.text
    );
    let _ = writeln!(out, "  fields: {}", fields.join(", "));
}

/// Repository table for the rows of `view`.
pub fn render_table(out: &mut String, view: &RepoView<'_>, settings: &ViewConfig) {
    let rows: Vec<[String; 7]> = view
        .rows
        .iter()
        .map(|repo| {
            [
                repo.name.clone(),
                format!("{} KB", repo.size),
                format_date(&repo.created_at, &settings.date_format, settings.timezone),
                format_date(&repo.updated_at, &settings.date_format, settings.timezone),
                repo.stargazers_count.to_string(),
                repo.language.clone().unwrap_or_default(),
                repo.html_url.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(str::to_string), &widths);
    let rule = widths.map(|w| "-".repeat(w));
    write_row(out, &rule, &widths);

    if rows.is_empty() {
        out.push_str("  (no repositories on this page)\n");
    }
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        // Name is left-aligned, every other column right-aligned.
        if i == 0 {
            let _ = write!(line, "{cell:<width$}");
        } else {
            let _ = write!(line, "{cell:>width$}");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn render_pagination(out: &mut String, view: &RepoView<'_>) {
    if view.page_count == 0 {
        out.push_str("No repositories match the filter.\n");
        return;
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} repositories)",
        view.page, view.page_count, view.filtered_count
    );
}
