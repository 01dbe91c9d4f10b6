//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod print;

pub(crate) use check::CheckArgs;
pub(crate) use print::PrintArgs;

use sitenav_config::Config;
use sitenav_site::ResolvedNav;
use sitenav_storage::FsStorage;

use crate::error::CliError;

/// Run one resolution pass for a loaded configuration.
pub(crate) fn resolve_nav(config: &Config) -> Result<ResolvedNav, CliError> {
    let storage = FsStorage::new(config.docs_resolved.source_dir.clone());
    let nav = sitenav_site::resolve(
        &config.site_resolved,
        &config.sidebar_resolved,
        &storage,
    )?;
    Ok(nav)
}
