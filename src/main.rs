mod app;
mod config;
mod fetcher;
mod filter;
mod model;
mod render;
mod surface;
mod utils;
mod view;

use app::Catalog;
use config::{AppConfig, load_config};
use fetcher::image_probe::verify_images;
use fetcher::{HttpImageProbe, HttpProductSource, ProductSource};
use render::{PageContent, RenderSettings};
use std::fs;
use std::path::Path;
use std::time::Duration;
use surface::events::spawn_stdin_listener;
use surface::{Document, PRODUCTS_ID};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let settings = RenderSettings {
        currency: config.currency.clone(),
        placeholder_image: config.placeholder_image.clone(),
    };
    let mut catalog = match Catalog::bind(Document::catalog_page(), config.items_per_page, settings) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Host document is incomplete: {}", e);
            return;
        }
    };

    let source = match HttpProductSource::new(config.products_url.clone()) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return;
        }
    };

    let probe = if config.verify_images {
        match HttpImageProbe::new(Duration::from_secs(config.image_timeout_seconds)) {
            Ok(probe) => Some(probe),
            Err(e) => {
                warn!("Image verification disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    info!("Fetching products...");
    if let Some(content) = catalog.load(source.fetch_products().await) {
        show(&mut catalog, content, probe.as_ref(), &config).await;
    }

    let (tx, mut rx) = mpsc::channel(32);
    spawn_stdin_listener(tx);
    info!("Filter with `name <text>`, `brand <text>` or `type <text>`; a bare field clears it.");

    while let Some(event) = rx.recv().await {
        match catalog.handle_input(&event) {
            Ok(content) => show(&mut catalog, content, probe.as_ref(), &config).await,
            Err(e) => {
                error!("Input handling failed: {}", e);
                return;
            }
        }
    }
}

/// Puts a rendered page into the product container and presents the container.
async fn show(
    catalog: &mut Catalog<Document>,
    mut content: PageContent,
    probe: Option<&HttpImageProbe>,
    config: &AppConfig,
) {
    if let Some(probe) = probe {
        verify_images(&mut content, probe, &catalog.settings().placeholder_image).await;
    }

    if let Err(e) = catalog.display(content) {
        error!("Render failed: {}", e);
        return;
    }

    let shown = match catalog.surface().content(PRODUCTS_ID) {
        Ok(Some(shown)) => shown,
        Ok(None) => return,
        Err(e) => {
            error!("Render failed: {}", e);
            return;
        }
    };
    info!(
        "Showing page {} ({} matching products)",
        catalog.state().current_page() + 1,
        catalog.state().filtered().len()
    );
    println!("{}\n", shown.to_text());

    if let Some(path) = &config.html_output {
        match shown.to_html() {
            Ok(html) => write_snapshot(Path::new(path), &html),
            Err(e) => warn!("HTML render failed: {}", e),
        }
    }
}

fn write_snapshot(path: &Path, html: &str) {
    if let Some(folder) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(folder) {
            warn!("Failed to create snapshot folder: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, html) {
        warn!("Failed to write HTML snapshot: {}", e);
    } else {
        info!("Saved HTML snapshot: {}", path.display());
    }
}
