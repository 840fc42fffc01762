// Runtime wiring: build the page, fire the ready event once, and drive the
// sweep timer until it goes off.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::core::{
    auto_dismiss::AutoDismisser,
    config::ConfigManager,
    dismiss::BannerDismisser,
    model::BannerKind,
    page::{Page, PageError},
};

/// Build the demo page: a container holding the flash banners a fresh page
/// load shows, plus regular content that must survive the sweep.
fn build_page(marker: &str) -> Result<Page, PageError> {
    let mut page = Page::new();
    let root = page.root();
    let container = page.append_child(root, &["container"])?;
    page.append_child(container, &["page-header"])?;
    page.append_child(container, &[marker, "alert-success"])?;
    page.append_child(container, &[marker, "alert-warning"])?;
    page.append_child(container, &[marker, "alert-danger"])?;
    page.append_child(container, &["content"])?;
    Ok(page)
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_manager = ConfigManager::new(PathBuf::from("."));
    let settings = config_manager.load();
    info!(
        "Sweeping '{}' banners {} ms after page ready",
        settings.marker, settings.delay_ms
    );

    let runtime = tokio::runtime::Runtime::new().expect("error while starting the runtime");
    runtime.block_on(async move {
        let mut page = match build_page(&settings.marker) {
            Ok(page) => page,
            Err(e) => {
                error!("Failed to build the page: {}", e);
                return;
            }
        };

        for id in page.query_all(&settings.marker) {
            match page.class_list(id).and_then(BannerKind::from_classes) {
                Some(kind) => info!("Mounted {} banner #{}", kind.display_name(), id),
                None => info!("Mounted banner #{}", id),
            }
        }

        let mut dismisser = BannerDismisser;
        let mut auto = AutoDismisser::new(&settings);

        // Markup is fully built at this point - the page is ready
        auto.on_ready(Instant::now());

        loop {
            if let Some(report) = auto.tick(Instant::now(), &mut page, &mut dismisser) {
                info!(
                    "Sweep done at {}: {} matched, {} dismissed, {} failed; {} banner(s) left",
                    report.completed_at.format("%H:%M:%S%.3f"),
                    report.matched,
                    report.dismissed,
                    report.failed,
                    page.query_all(&settings.marker).len()
                );
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });
}
