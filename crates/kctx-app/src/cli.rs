use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "kctx", version, about = "switches kubernetes contexts and namespaces")]
pub struct Cli {
    /// (optional) absolute path to the kubeconfig file [default: ~/.kube/config]
    #[arg(short = 'k', long = "kubeconfig", value_name = "PATH")]
    pub kubeconfig: Option<String>,

    /// (optional) target context
    #[arg(short, long, value_name = "CONTEXT")]
    pub context: Option<String>,

    /// (optional) target namespace; an empty value selects the default namespace
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// (optional) verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// (optional) output the current context and namespace
    #[arg(short, long)]
    pub output: bool,
}

/// One invocation's worth of settings, resolved once from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub kubeconfig: String,
    pub context: Option<String>,
    pub namespace: Option<String>,
    pub verbose: bool,
    pub output: bool,
}

impl Request {
    /// Nothing to switch and nothing to report.
    pub fn is_empty(&self) -> bool {
        !self.output && self.context.is_none() && self.namespace.is_none()
    }
}

impl From<Cli> for Request {
    fn from(cli: Cli) -> Self {
        Self {
            kubeconfig: kctx_config::locate(cli.kubeconfig),
            context: cli.context,
            namespace: cli.namespace,
            verbose: cli.verbose,
            output: cli.output,
        }
    }
}

pub fn usage() -> String {
    format!("usage of kctx:\n{}", Cli::command().render_help())
}
