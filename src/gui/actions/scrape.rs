// src/gui/actions/scrape.rs
use std::thread;

use eframe::egui;

use crate::gui::app::App;

/// POST the scrape trigger, then chain into the grouped fetch. The chain is
/// strictly ordered inside one worker: a failed POST means no GET at all.
pub fn scrape_then_fetch(app: &App, ctx: &egui::Context) {
    let options = app.state.options.query.clone();
    let scrape = app.state.options.scrape.clone();
    let include = app.include.to_param();
    let exclude = app.exclude.to_param();

    logf!(
        "Scrape: Begin url={:?} pages={}..{}",
        options.search_url, scrape.start_page, scrape.max_pages
    );
    app.status("Scraping…");

    let client = app.client.clone();
    let incoming = app.incoming.clone();
    let status = app.status.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        match client.scrape_then_fetch(&options, &scrape, include.as_ref(), exclude.as_ref()) {
            Ok(groups) => {
                logf!("Scrape: OK groups={}", groups.len());
                *incoming.lock().unwrap() = Some(groups);
                *status.lock().unwrap() = s!("Ready");
            }
            Err(e) => {
                loge!("Scrape: Error: {}", e);
                *status.lock().unwrap() = format!("Error: {e}");
            }
        }
        ctx2.request_repaint();
    });
}
