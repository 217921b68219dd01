pub mod kubeconfig;
pub mod paths;
pub mod store;

pub use kubeconfig::{ContextEntry, KubeConfig, NamedContext, Passthrough};
pub use paths::{default_path, locate, resolve, KUBECONFIG_ENV};
pub use store::LoadedConfig;
