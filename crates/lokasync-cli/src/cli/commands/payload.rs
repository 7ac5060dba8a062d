//! `lokasync payload <node> <url> <version>` – build and print an update request.

use anyhow::{Context, Result};
use lokasync_core::config::LokaSyncConfig;
use lokasync_core::drive;
use lokasync_core::payload::{build_update_request, UpdateRequest};
use lokasync_core::session::UuidSessionIds;
use lokasync_core::validate;

/// Per-invocation overrides on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct PayloadOptions {
    pub session_id: Option<String>,
    pub no_normalize: bool,
    pub strict: bool,
}

/// Applies URL normalization and validation per `cfg`/`opts`, then builds the request.
pub fn prepare_request(
    cfg: &LokaSyncConfig,
    node: &str,
    firmware_url: &str,
    version: &str,
    opts: &PayloadOptions,
) -> Result<UpdateRequest> {
    let firmware_url = if cfg.normalize_drive_urls && !opts.no_normalize {
        drive::direct_download_url(firmware_url)
    } else {
        firmware_url.to_string()
    };

    let req = match &opts.session_id {
        Some(id) => build_update_request(&|| id.clone(), node, &firmware_url, version),
        None => build_update_request(&UuidSessionIds, node, &firmware_url, version),
    };

    if cfg.strict_validation || opts.strict {
        validate::validate_request(&req).context("invalid firmware update input")?;
    }
    Ok(req)
}

pub fn run_payload(
    cfg: &LokaSyncConfig,
    node: &str,
    firmware_url: &str,
    version: &str,
    opts: &PayloadOptions,
) -> Result<()> {
    let req = prepare_request(cfg, node, firmware_url, version, opts)?;
    let json = req.to_json().context("encode update request")?;
    tracing::info!(
        node_codename = %req.node_codename,
        session_id = %req.session_id,
        "prepared firmware update"
    );
    println!("topic: {}", cfg.mqtt.publish_topic_firmware);
    println!("qos: {}", cfg.mqtt.default_qos);
    println!("{json}");
    Ok(())
}
