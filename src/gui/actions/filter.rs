// src/gui/actions/filter.rs
use std::thread;

use eframe::egui;

use crate::{filters::FilterKind, gui::app::App};

/// "Add filter" clicked. With the catalog in memory the row appears
/// immediately; otherwise the add is queued and at most one catalog fetch
/// is started. Queued adds are replayed by `poll_catalog` once it lands.
pub fn add_filter(app: &mut App, ctx: &egui::Context, kind: FilterKind) {
    let start_fetch = {
        let mut cache = app.catalog.lock().unwrap();
        if cache.get().is_some() {
            drop(cache);
            app.rows_mut(kind).add_row();
            logd!("Filter: Added {:?} row", kind);
            return;
        }
        cache.request()
    };

    app.pending_adds.push(kind);

    if start_fetch {
        logf!("Catalog: Fetch begin");
        app.status("Loading makes…");

        let client = app.client.clone();
        let catalog = app.catalog.clone();
        let status = app.status.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let result = client.fetch_makes().map_err(|e| e.to_string());
            match &result {
                Ok(cat) => {
                    logf!("Catalog: OK makes={}", cat.len());
                    *status.lock().unwrap() = s!("Ready");
                }
                Err(e) => loge!("Catalog: Error: {}", e), // poll_catalog surfaces it
            }
            catalog.lock().unwrap().complete(result);
            ctx2.request_repaint();
        });
    }
}

/// UI-thread side: replay queued adds when the catalog is Ready; on failure
/// drop them and reset the cache so the next click retries.
pub fn poll_catalog(app: &mut App) {
    let failure;
    let ready;
    {
        let mut cache = app.catalog.lock().unwrap();
        failure = cache.take_failure();
        ready = cache.get().is_some();
    }

    if let Some(msg) = failure {
        app.pending_adds.clear();
        app.status(format!("Error: {msg}"));
        return;
    }

    if ready && !app.pending_adds.is_empty() {
        for kind in std::mem::take(&mut app.pending_adds) {
            app.rows_mut(kind).add_row();
            logd!("Filter: Added queued {:?} row", kind);
        }
    }
}
