//! Case study and server commands.
//!
//! Output is built as a `String` by the `render_*` functions and printed by
//! the `cmd_*` wrappers.

use std::fmt::Write as _;

use folio_core::{Catalog, RenderDecision, resolve};
use folio_site::Server;
use tracing::info;

use crate::config::FolioConfig;
use crate::error::Result;

/// Catalog listing: `id  title` per line, or a JSON array.
pub fn render_list(catalog: Catalog, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(catalog.all())?);
    }
    let width = catalog
        .ids()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for study in catalog.all() {
        writeln!(out, "{:<width$}  {}", study.id.as_str(), study.title)?;
    }
    Ok(out)
}

/// Resolve `segments` and describe the decision.
pub fn render_show(catalog: Catalog, segments: &[String], json: bool) -> Result<String> {
    let decision = resolve(catalog, segments)?;
    if json {
        return Ok(serde_json::to_string_pretty(&decision)?);
    }

    let mut out = String::new();
    match decision {
        RenderDecision::Listing { studies } => {
            writeln!(out, "listing ({} case studies)", studies.len())?;
            for study in studies {
                writeln!(out, "  {}  {}", study.href(), study.title)?;
            }
        }
        RenderDecision::Detail { study } => {
            writeln!(out, "detail: {}", study.title)?;
            writeln!(out, "  {}", study.subtitle)?;
            writeln!(out, "  role:     {}", study.role)?;
            writeln!(out, "  timeline: {}", study.timeline)?;
            writeln!(out, "  preview:  {}", study.preview_src)?;
        }
    }
    Ok(out)
}

pub fn cmd_list(json: bool) -> Result<()> {
    print!("{}", render_list(Catalog::builtin(), json)?);
    Ok(())
}

pub fn cmd_show(segments: &[String], json: bool) -> Result<()> {
    print!("{}", render_show(Catalog::builtin(), segments, json)?);
    Ok(())
}

/// Run the server until Ctrl+C.
pub async fn cmd_serve(config: &FolioConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let server_config = config.server_config(host, port);
    info!(
        addr = %server_config.addr(),
        static_dir = %server_config.static_dir.display(),
        "Starting {}",
        server_config.site_title
    );
    Server::new(server_config).bind().await?.serve().await?;
    Ok(())
}
