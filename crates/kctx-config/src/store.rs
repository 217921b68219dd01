use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::kubeconfig::KubeConfig;
use crate::paths;

/// A parsed kubeconfig together with the file it came from, so it can be written back in place.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: KubeConfig,
}

impl LoadedConfig {
    pub fn load(path: &str) -> Result<Self> {
        let path = paths::resolve(path).context("no kubeconfig path could be resolved")?;
        tracing::debug!(path = %path.display(), "loading kubeconfig");

        let contents =
            fs::read_to_string(&path).with_context(|| format!("read kubeconfig file '{}'", path.display()))?;
        let config =
            KubeConfig::from_yaml(&contents).with_context(|| format!("parse kubeconfig file '{}'", path.display()))?;

        Ok(Self { path, config })
    }

    /// Writes the whole document to a private temp file next to the target, then renames it over the
    /// target, so readers see either the old file or the new one.
    pub fn persist(&self) -> Result<()> {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let contents = self.config.to_yaml().context("serialize kubeconfig")?;
        write_atomic(&target, contents.as_bytes())?;

        tracing::info!(path = %target.display(), "wrote kubeconfig");
        Ok(())
    }
}

// The temp file is created 0600 under a unique name and only widened to the target's mode before
// any content is written. It is removed on drop if the rename never happens.
fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let mut tmp =
        NamedTempFile::new_in(dir).with_context(|| format!("create temp file in '{}'", dir.display()))?;

    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .with_context(|| format!("copy permissions to '{}'", tmp.path().display()))?;
    }
    tmp.write_all(contents).with_context(|| format!("write temp file '{}'", tmp.path().display()))?;
    tmp.as_file().sync_all().with_context(|| format!("sync temp file '{}'", tmp.path().display()))?;

    tmp.persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("replace kubeconfig file '{}'", target.display()))?;
    Ok(())
}
