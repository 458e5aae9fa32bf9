mod api;
mod app;
mod components;
mod config;
mod containers;
mod flows;
mod logging;
mod models;
mod pages;
mod session;
mod storage;

#[cfg(test)]
mod flows_test;

use std::rc::Rc;

use app::{App, AppProps};
use config::WebConfig;
use storage::BrowserTokenStore;
use tracing::Level;
use yew::Renderer;

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        let location = info
            .location()
            .map(|location| {
                format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
            })
            .unwrap_or_default();
        web_sys::console::error_1(&format!("Panic: {payload}{location}").into());
    }));

    logging::init(if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    });
    tracing::info!("starting TicketDesk dashboard");

    let config = WebConfig::new();
    tracing::debug!(api = config.api_base_url(), "using API");
    Renderer::<App>::with_props(AppProps {
        tokens: Rc::new(BrowserTokenStore),
        config,
    })
    .render();
}
