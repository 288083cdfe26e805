// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    api::{ApiClient, GroupedResult},
    catalog::CatalogCache,
    config::{consts::BASE_URL, state::AppState},
    filters::{FilterKind, FilterRows},
    results::GroupView,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Car Browse",
        options,
        Box::new(|cc| {
            // Thumbnails arrive as plain https URLs
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = App::new(AppState::default()).map_err(|e| e.to_string())?;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // backend client, shared with worker threads
    pub client: Arc<ApiClient>,

    // make/model filter rows per kind
    pub include: FilterRows,
    pub exclude: FilterRows,

    // session catalog cache + filter-adds waiting for it
    pub catalog: Arc<Mutex<CatalogCache>>,
    pub pending_adds: Vec<FilterKind>,

    // rendered groups (rebuilt whenever a response lands)
    pub groups: Vec<GroupView>,

    // worker → UI handoff slot; whichever response lands last wins
    pub incoming: Arc<Mutex<Option<Vec<GroupedResult>>>>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, Box<dyn Error>> {
        let client = ApiClient::new(BASE_URL)?;
        logf!("Init: base={}", BASE_URL);

        Ok(Self {
            state,
            client: Arc::new(client),
            include: FilterRows::new(FilterKind::Include),
            exclude: FilterRows::new(FilterKind::Exclude),
            catalog: Arc::new(Mutex::new(CatalogCache::default())),
            pending_adds: Vec::new(),
            groups: Vec::new(),
            incoming: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(s!("Idle"))),
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap().clone()
    }

    pub fn rows_mut(&mut self, kind: FilterKind) -> &mut FilterRows {
        match kind {
            FilterKind::Include => &mut self.include,
            FilterKind::Exclude => &mut self.exclude,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up anything the workers delivered since last frame
        actions::fetch::poll_results(self);
        actions::filter::poll_catalog(self);

        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self, ctx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::query_panel::draw(ui, self, ctx);

            ui.separator();

            components::results_view::draw(ui, self);
        });
    }
}
