use std::fmt;

use kctx_config::{KubeConfig, LoadedConfig};

use crate::error::{KctxError, Result};

/// Whether an apply step touched the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Changed,
    Unchanged,
}

/// Per-step results of one invocation; `None` for a step that was not requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub context: Option<Switch>,
    pub namespace: Option<Switch>,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        self.context == Some(Switch::Changed) || self.namespace == Some(Switch::Changed)
    }
}

pub fn load(path: &str) -> Result<LoadedConfig> {
    LoadedConfig::load(path).map_err(KctxError::Load)
}

pub fn persist(loaded: &LoadedConfig) -> Result<()> {
    loaded.persist().map_err(KctxError::Write)
}

pub fn apply_context(config: &mut KubeConfig, target: &str) -> Result<Switch> {
    if !config.has_context(target) {
        return Err(KctxError::NotFound(target.to_string()));
    }
    if config.current_context == target {
        tracing::debug!(context = target, "context already active");
        return Ok(Switch::Unchanged);
    }

    tracing::debug!(from = %config.current_context, to = target, "switching context");
    config.current_context = target.to_string();
    Ok(Switch::Changed)
}

/// Sets the namespace of the entry `current-context` points at. An empty target selects the default namespace.
pub fn apply_namespace(config: &mut KubeConfig, target: &str) -> Result<Switch> {
    let current = config.current_context.clone();
    let Some(entry) = config.current_mut() else {
        return Err(KctxError::NotFound(current));
    };
    if entry.namespace == target {
        tracing::debug!(context = %current, namespace = target, "namespace already active");
        return Ok(Switch::Unchanged);
    }

    tracing::debug!(context = %current, from = %entry.namespace, to = target, "switching namespace");
    entry.namespace = target.to_string();
    Ok(Switch::Changed)
}

/// Applies the requested switches in memory, context first so the namespace lands on the newly selected entry.
/// Stops at the first failure.
pub fn apply(config: &mut KubeConfig, context: Option<&str>, namespace: Option<&str>) -> Result<Outcome> {
    let mut outcome = Outcome::default();
    if let Some(target) = context {
        outcome.context = Some(apply_context(config, target)?);
    }
    if let Some(target) = namespace {
        outcome.namespace = Some(apply_namespace(config, target)?);
    }
    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentState<'a> {
    pub context: &'a str,
    pub namespace: &'a str,
}

impl fmt::Display for CurrentState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "current context '{}' namespace '{}'", self.context, self.namespace)
    }
}

pub fn current_state(config: &KubeConfig) -> Result<CurrentState<'_>> {
    let entry = config.current().ok_or_else(|| KctxError::NotFound(config.current_context.clone()))?;
    Ok(CurrentState { context: &config.current_context, namespace: &entry.namespace })
}
