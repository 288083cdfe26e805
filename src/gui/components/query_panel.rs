// src/gui/components/query_panel.rs
//
// Query controls above the results: group-by keys, min count, search URL,
// scrape page span, and the two trigger buttons. Layout only; the network
// work lives in gui/actions.

use eframe::egui;

use crate::config::options::SortKey;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.heading("Grouped results");
    ui.separator();

    {
        let query = &mut app.state.options.query;

        ui.horizontal(|ui| {
            ui.label("Group by:");
            ui.checkbox(&mut query.group_make, "Make");
            ui.checkbox(&mut query.group_model, "Model");
            ui.checkbox(&mut query.group_year, "Year");

            ui.separator();

            ui.label("Min group size:");
            ui.add(egui::DragValue::new(&mut query.min_count).range(0..=10_000));

            ui.separator();

            ui.label("Default sort:");
            egui::ComboBox::from_id_salt("default_sort")
                .selected_text(query.default_sort.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut query.default_sort, SortKey::Year, "Year");
                    ui.selectable_value(&mut query.default_sort, SortKey::Price, "Price");
                });
        });

        ui.horizontal(|ui| {
            ui.label("Search URL:");
            ui.add(
                egui::TextEdit::singleline(&mut query.search_url)
                    .desired_width(420.0)
                    .hint_text("listing-site search URL (optional for fetch)"),
            );
        });
    }

    {
        let scrape = &mut app.state.options.scrape;
        ui.horizontal(|ui| {
            ui.label("Scrape pages:");
            ui.add(egui::DragValue::new(&mut scrape.start_page).range(1..=999));
            ui.label("to");
            ui.add(egui::DragValue::new(&mut scrape.max_pages).range(1..=999));
        });
    }

    ui.horizontal(|ui| {
        if ui.button("Fetch").clicked() {
            actions::fetch::fetch(app, ctx);
        }
        if ui.button("Scrape + Fetch").clicked() {
            actions::scrape::scrape_then_fetch(app, ctx);
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
