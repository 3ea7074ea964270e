//! CLI command handlers, grouped by what they ask the probe for.

mod decode;
mod metadata;
mod report;

pub use decode::{run_duration, run_image_size, run_lines};
pub use metadata::{
    run_available, run_kind, run_length, run_location, run_modified, run_type,
};
pub use report::run_report;

pub(crate) use metadata::kind_label;

use anyhow::{Context, Result};
use cinfo_core::{ContentProbe, ProbeResult, TransportOptions};

/// Builds a probe for `url` and runs `f` on the blocking pool (libcurl blocks).
pub(crate) async fn with_probe<T, F>(url: &str, opts: TransportOptions, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&ContentProbe) -> ProbeResult<T> + Send + 'static,
{
    let probe = ContentProbe::parse(url)?.with_options(opts);
    let value = tokio::task::spawn_blocking(move || f(&probe))
        .await
        .context("probe task join")??;
    Ok(value)
}
