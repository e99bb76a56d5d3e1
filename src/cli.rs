#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Source file containing a single arithmetic expression
    #[arg(required_unless_present = "eval")]
    pub file: Option<std::path::PathBuf>,

    /// Evaluate an expression given directly on the command line
    #[arg(short, long, conflicts_with = "file")]
    pub eval: Option<String>,
}
