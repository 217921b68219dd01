use std::io::Write;

use anyhow::Result;
use kctx_core::{Outcome, Switch};

use crate::cli::{self, Request};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Runs one invocation and returns the process exit status. Messages go to `out`; usage and errors go to `err`.
pub fn execute(request: &Request, out: &mut impl Write, err: &mut impl Write) -> u8 {
    if request.is_empty() {
        let _ = writeln!(err, "{}", cli::usage().trim_end());
        return EXIT_FAILURE;
    }

    match run(request, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!("invocation failed: {e:?}");
            let _ = writeln!(err, "{e:#}");
            EXIT_FAILURE
        }
    }
}

fn run(request: &Request, out: &mut impl Write) -> Result<()> {
    let mut loaded = kctx_core::load(&request.kubeconfig)?;

    if request.output {
        if request.context.is_some() || request.namespace.is_some() {
            tracing::warn!("-o reports only; ignoring -c/-n");
        }
        let state = kctx_core::current_state(&loaded.config)?;
        writeln!(out, "{state}")?;
        return Ok(());
    }

    let outcome = kctx_core::apply(&mut loaded.config, request.context.as_deref(), request.namespace.as_deref())?;
    if outcome.changed() {
        kctx_core::persist(&loaded)?;
    }
    report(request, &outcome, out)?;
    Ok(())
}

fn report(request: &Request, outcome: &Outcome, out: &mut impl Write) -> std::io::Result<()> {
    if let (Some(switch), Some(context)) = (outcome.context, request.context.as_deref()) {
        match switch {
            Switch::Changed => writeln!(out, "switched to context '{context}'")?,
            Switch::Unchanged if request.verbose => writeln!(out, "context is already '{context}'")?,
            Switch::Unchanged => {}
        }
    }
    if let (Some(switch), Some(namespace)) = (outcome.namespace, request.namespace.as_deref()) {
        match switch {
            Switch::Changed => writeln!(out, "switched to namespace '{namespace}'")?,
            Switch::Unchanged if request.verbose => writeln!(out, "namespace is already '{namespace}'")?,
            Switch::Unchanged => {}
        }
    }
    Ok(())
}
