// src/gui/components/filter_panel.rs
//
// Include/exclude make filter rows in the left panel. Each row: make combo,
// dependent model multi-select (disabled until a make is chosen), Remove.
// A make claimed by one row is greyed out in its siblings of the same kind.

use std::collections::HashMap;

use eframe::egui;

use crate::api::MakeCatalog;
use crate::filters::{FilterKind, FilterRows};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.heading("Make filters");
    ui.separator();

    let mut add_clicked: Option<FilterKind> = None;

    {
        // Field-level borrows so the catalog guard and the row vecs coexist
        let App {
            state,
            include,
            exclude,
            catalog,
            pending_adds,
            ..
        } = app;

        let cache = catalog.lock().unwrap();
        let catalog_ref = cache.get();
        let loading = cache.is_pending();

        egui::ScrollArea::vertical()
            .id_salt("filter_panel_scroll")
            .show(ui, |ui| {
                section(
                    ui,
                    include,
                    catalog_ref,
                    &mut state.gui.show_include_filters,
                    loading,
                    pending_adds,
                    &mut add_clicked,
                );
                ui.separator();
                section(
                    ui,
                    exclude,
                    catalog_ref,
                    &mut state.gui.show_exclude_filters,
                    loading,
                    pending_adds,
                    &mut add_clicked,
                );
            });
    }

    if let Some(kind) = add_clicked {
        actions::filter::add_filter(app, ctx, kind);
    }
}

fn section(
    ui: &mut egui::Ui,
    rows: &mut FilterRows,
    catalog: Option<&MakeCatalog>,
    open: &mut bool,
    loading: bool,
    pending_adds: &[FilterKind],
    add_clicked: &mut Option<FilterKind>,
) {
    let kind = rows.kind;

    ui.horizontal(|ui| {
        if ui.selectable_label(*open, kind.label()).clicked() {
            *open = !*open;
        }
        if ui.button("Add filter").clicked() {
            *add_clicked = Some(kind);
        }
        if loading && pending_adds.contains(&kind) {
            ui.spinner();
        }
    });

    if !*open {
        return;
    }

    if rows.is_empty() {
        ui.weak("No filters");
        return;
    }

    // Per-row (make, still selectable) lists, resolved before the widget
    // loop takes rows mutably
    let selectable: HashMap<u64, Vec<(String, bool)>> = match catalog {
        Some(catalog) => rows
            .rows()
            .iter()
            .map(|r| {
                let makes = rows
                    .selectable_makes(r.id, catalog)
                    .map(|(m, enabled)| (s!(m), enabled))
                    .collect();
                (r.id, makes)
            })
            .collect(),
        None => HashMap::new(),
    };

    let mut remove: Option<u64> = None;

    for row in rows.rows_mut() {
        let row_id = row.id;

        ui.horizontal(|ui| {
            let selected = row.make.clone().unwrap_or_else(|| s!("Select make"));
            egui::ComboBox::from_id_salt((kind.label(), "make", row_id))
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(row.make.is_none(), "Select make")
                        .clicked()
                    {
                        row.set_make(None);
                    }
                    let Some(makes) = selectable.get(&row_id) else { return };
                    for (make, enabled) in makes {
                        let own = row.make.as_deref() == Some(make.as_str());
                        let resp =
                            ui.add_enabled(*enabled, egui::SelectableLabel::new(own, make));
                        if resp.clicked() {
                            row.set_make(Some(make.clone()));
                        }
                    }
                });

            if ui.button("Remove").clicked() {
                remove = Some(row_id);
            }
        });

        // Dependent model multi-select
        match (&row.make, catalog) {
            (Some(make), Some(catalog)) => {
                let make = make.clone();
                let models = catalog.get(&make).cloned().unwrap_or_default();
                ui.indent((kind.label(), "models", row_id), |ui| {
                    for model in &models {
                        let on = row.models.iter().any(|m| m == model);
                        if ui.selectable_label(on, model).clicked() {
                            row.toggle_model(model);
                        }
                    }
                });
            }
            _ => {
                ui.add_enabled(false, egui::Label::new("Models: pick a make first"));
            }
        }

        ui.add_space(4.0);
    }

    if let Some(id) = remove {
        rows.remove_row(id);
        logd!("Filter: Removed {:?} row {}", kind, id);
    }
}
