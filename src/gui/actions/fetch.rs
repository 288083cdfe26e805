// src/gui/actions/fetch.rs
use std::thread;

use eframe::egui;

use crate::{gui::app::App, results};

/// Kick off a grouped-results fetch on a worker thread. No cancellation:
/// overlapping fetches are allowed and whichever lands last overwrites the
/// results slot.
pub fn fetch(app: &App, ctx: &egui::Context) {
    let options = app.state.options.query.clone();
    let include = app.include.to_param();
    let exclude = app.exclude.to_param();

    logf!(
        "Fetch: Begin group_by={:?} min_count={} include={} exclude={}",
        options.group_by(),
        options.min_count,
        include.is_some(),
        exclude.is_some(),
    );
    app.status("Fetching…");

    let client = app.client.clone();
    let incoming = app.incoming.clone();
    let status = app.status.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        match client.fetch_grouped(&options, include.as_ref(), exclude.as_ref()) {
            Ok(groups) => {
                logf!("Fetch: OK groups={}", groups.len());
                *incoming.lock().unwrap() = Some(groups);
                *status.lock().unwrap() = s!("Ready");
            }
            Err(e) => {
                loge!("Fetch: Error: {}", e);
                *status.lock().unwrap() = format!("Error: {e}");
            }
        }
        ctx2.request_repaint();
    });
}

/// UI-thread side of the handoff: rebuild the group views from the latest
/// delivered response.
pub fn poll_results(app: &mut App) {
    let delivered = app.incoming.lock().unwrap().take();
    if let Some(groups) = delivered {
        let default_sort = app.state.options.query.default_sort;
        app.groups = results::build_views(groups, default_sort);
        logd!("View: rebuilt {} group(s)", app.groups.len());
    }
}
