// src/gui/components/results_view.rs
//
// Draws the group cards: header with collapsed ranges, lead thumbnail,
// show/hide toggle, per-group sort combo, and the linked car list.
// Purely a view over App.groups; sorting state lives in each GroupView.

use eframe::egui;

use crate::config::options::SortKey;
use crate::gui::app::App;
use crate::results;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.groups.is_empty() {
        ui.weak("No results yet. Fetch to populate.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (ix, view) in app.groups.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.heading(view.header());

                    if let Some(src) = view.lead_image() {
                        ui.add(
                            egui::Image::new(src)
                                .max_height(120.0)
                                .max_width(220.0),
                        );
                    }

                    ui.horizontal(|ui| {
                        let toggle = if view.expanded { "Hide Cars" } else { "Show Cars" };
                        if ui.button(toggle).clicked() {
                            view.expanded = !view.expanded;
                        }

                        ui.label("Sort:");
                        let mut key = view.sort_key;
                        egui::ComboBox::from_id_salt(("group_sort", ix))
                            .selected_text(key.label())
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut key, SortKey::Year, "Year");
                                ui.selectable_value(&mut key, SortKey::Price, "Price");
                            });
                        view.set_sort(key);
                    });

                    if view.expanded {
                        ui.indent(("car_list", ix), |ui| {
                            for car in view.cars() {
                                ui.hyperlink_to(
                                    results::car_line(car),
                                    results::car_url(car),
                                );
                            }
                        });
                    }
                });
                ui.add_space(6.0);
            }
        });
}
