use std::ffi::OsString;
use std::path::PathBuf;

pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// `<home>/.kube/config`, when a home directory is known.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}

/// Path handed to the loader: the explicit value verbatim (even if empty), else the home default, else empty.
pub fn locate(explicit: Option<String>) -> String {
    match explicit {
        Some(path) => path,
        None => default_path().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default(),
    }
}

/// Turns a located path into the file to read. An empty path falls back to the first existing
/// `KUBECONFIG` entry, then to the home default.
pub fn resolve(path: &str) -> Option<PathBuf> {
    resolve_with(path, std::env::var_os(KUBECONFIG_ENV), default_path())
}

pub(crate) fn resolve_with(path: &str, env: Option<OsString>, home_default: Option<PathBuf>) -> Option<PathBuf> {
    if !path.is_empty() {
        return Some(PathBuf::from(path));
    }

    if let Some(paths) = env {
        let found = std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()).find(|p| p.exists());
        if let Some(found) = found {
            tracing::debug!(path = %found.display(), "using kubeconfig from {KUBECONFIG_ENV}");
            return Some(found);
        }
    }

    home_default
}
