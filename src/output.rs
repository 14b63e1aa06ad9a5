//! Plain-text output for each housing view.
//!
//! Every function returns a `String` so the shell and the one-shot
//! subcommands print the same thing, and tests can compare it directly.

use housing_core::{Category, ComparisonTable, HousingInfo, Localizer, Residence};
use housing_screen::{HousingState, Route};
use std::fmt::Write;

/// Display options from the `[output]` config section.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub show_descriptions: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { show_descriptions: true }
    }
}

pub const NO_DATA: &str = "housing information is not available yet";

/// Render whichever view `state` is on.
pub fn view<L: Localizer + ?Sized>(state: &HousingState, localizer: &L, opts: OutputOptions) -> String {
    let Some(info) = state.info.as_deref() else {
        return NO_DATA.to_string();
    };

    let mut out = match state.route() {
        Route::Menu => menu(info, localizer),
        Route::ResidenceList => residence_list(info, localizer),
        Route::Resources => resources(info, localizer, opts),
        Route::ResidenceDetails => match state.selected_residence() {
            Some(r) => residence_details(r, &state.filtered, &state.query.query, localizer, opts),
            None => NO_DATA.to_string(),
        },
        Route::ResidenceSelect => selection(info, state.selection.picked()),
        Route::ResidenceCompare => match &state.comparison {
            Some(c) => comparison(&ComparisonTable::build(&info.categories, c, localizer)),
            None => NO_DATA.to_string(),
        },
    };

    if let Some(notice) = &state.notice {
        let _ = write!(out, "\n! {notice}");
    }
    out
}

pub fn menu<L: Localizer + ?Sized>(info: &HousingInfo, localizer: &L) -> String {
    let mut out = String::from("Housing");
    for (i, section) in info.sections.iter().enumerate() {
        let _ = write!(out, "\n  {}. {}", i + 1, localizer.resolve(&section.name));
    }
    out
}

pub fn residence_list<L: Localizer + ?Sized>(info: &HousingInfo, localizer: &L) -> String {
    let mut out = String::from("Residences");
    for residence in &info.residences {
        let _ = write!(out, "\n  {}", residence.name);
        let address = localizer.resolve_opt(residence.address.as_ref());
        if !address.is_empty() {
            let _ = write!(out, " — {address}");
        }
    }
    out
}

pub fn resources<L: Localizer + ?Sized>(info: &HousingInfo, localizer: &L, opts: OutputOptions) -> String {
    let mut out = String::from("Resources");
    for (i, resource) in info.resources.iter().enumerate() {
        let _ = write!(out, "\n  {}. {} <{}>", i + 1, localizer.resolve(&resource.name), resource.link);
        let description = localizer.resolve_opt(resource.description.as_ref());
        if opts.show_descriptions && !description.is_empty() {
            let _ = write!(out, "\n     {description}");
        }
    }
    out
}

/// Details view: heading, then the filtered categories. Placeholder
/// properties are never printed.
pub fn residence_details<L: Localizer + ?Sized>(
    residence: &Residence,
    filtered: &[Category],
    query: &str,
    localizer: &L,
    opts: OutputOptions,
) -> String {
    let mut out = residence.name.clone();
    let address = localizer.resolve_opt(residence.address.as_ref());
    if !address.is_empty() {
        let _ = write!(out, "\n{address}");
    }
    let description = localizer.resolve_opt(residence.description.as_ref());
    if opts.show_descriptions && !description.is_empty() {
        let _ = write!(out, "\n{description}");
    }
    if !query.trim().is_empty() {
        let _ = write!(out, "\nfilter: {query}");
    }

    let mut printed = 0;
    for category in filtered {
        let rows: Vec<_> = category.visible_properties().collect();
        if rows.is_empty() {
            continue;
        }
        let _ = write!(out, "\n\n{}", localizer.resolve(&category.name));
        for p in rows {
            let mark = if p.value { "yes" } else { "no" };
            let _ = write!(out, "\n  [{mark:>3}] {}", localizer.resolve(&p.name));
            printed += 1;
        }
    }
    if printed == 0 {
        out.push_str("\n\nno matching properties");
    }
    out
}

pub fn selection(info: &HousingInfo, picked: &[String]) -> String {
    let mut out = String::from("Pick residences to compare");
    for residence in &info.residences {
        let mark = if picked.contains(&residence.name) { "x" } else { " " };
        let _ = write!(out, "\n  [{mark}] {}", residence.name);
    }
    out
}

pub fn comparison(table: &ComparisonTable) -> String {
    let label_width = table
        .groups
        .iter()
        .flat_map(|g| g.rows.iter().map(|r| r.name.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:label_width$}", "");
    for column in &table.columns {
        let _ = write!(out, " | {column}");
    }
    for group in &table.groups {
        let _ = write!(out, "\n{}", group.category);
        for row in &group.rows {
            let _ = write!(out, "\n{:label_width$}", format!("  {}", row.name));
            for (column, value) in table.columns.iter().zip(&row.values) {
                let width = column.chars().count();
                let mark = if *value { "yes" } else { "-" };
                let _ = write!(out, " | {mark:<width$}");
            }
        }
    }
    out
}
