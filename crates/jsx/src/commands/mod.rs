mod check;
mod dump;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use dump::DumpCmd;
use libjsx_parser::JsxParserConfig;

#[derive(Debug, clap::Parser)]
#[command(name = "jsx")]
pub(crate) enum CommandEnum {
    /// Parse JSX files and report any syntax errors.
    Check(Box<CheckCmd>),

    /// Print the ESTree JSON of a parsed JSX file.
    Dump(Box<DumpCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Dump(cmd) => cmd.run(cli).await,
        }
    }
}

/// Parser options shared by every command.
#[derive(Debug, clap::Args)]
pub(crate) struct ParserArgs {
    #[arg(
        default_value_t=JsxParserConfig::DEFAULT_MAX_RECURSION_DEPTH,
        help="Maximum nesting depth of elements and expressions before \
             parsing fails.",
        long,
    )]
    max_recursion_depth: usize,
}
impl ParserArgs {
    pub(crate) fn to_config(&self) -> JsxParserConfig {
        JsxParserConfig {
            max_recursion_depth: self.max_recursion_depth,
            ..JsxParserConfig::default()
        }
    }
}
