//! Static UI bundle
//!
//! Serves the built single-page app from the configured directory. Paths that
//! match no file fall back to `index.html` so client-side routes survive a
//! reload.

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Entry point of the UI bundle
pub const INDEX_FILE: &str = "index.html";

/// Build the static file service for `static_dir`, if it exists
pub fn static_files(static_dir: &str) -> Option<Files> {
    let root = Path::new(static_dir);
    if !root.is_dir() {
        warn!(
            "Static directory {} not found, serving API only",
            root.display()
        );
        return None;
    }

    info!("Serving UI from {}", root.display());
    let index: PathBuf = root.join(INDEX_FILE);

    Some(
        Files::new("/", root)
            .index_file(INDEX_FILE)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(&index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    )
}
