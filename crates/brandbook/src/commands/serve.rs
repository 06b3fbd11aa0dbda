//! Preview server for generated manuals.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// First HTML file in `dir`, by name.
fn find_manual(dir: &Path) -> Result<Option<String>> {
    let mut manuals: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".html"))
        .collect();

    manuals.sort();
    Ok(manuals.into_iter().next())
}

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'brandbook generate' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    let url = match find_manual(&dir)? {
        Some(manual) => format!("http://{}/{}", addr, manual),
        None => {
            tracing::warn!("No manual found in {}", dir.display());
            format!("http://{}", addr)
        }
    };

    tracing::info!("Serving {} at {}", dir.display(), url);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}
