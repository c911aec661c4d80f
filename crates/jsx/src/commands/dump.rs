use crate::commands::ParserArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libjsx_parser::JsxParser;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DumpCmd {
    #[arg(
        help="Print the JSON on a single line.",
        long,
    )]
    compact: bool,

    #[command(flatten)]
    parser_args: ParserArgs,

    #[arg(
        help="Path to the JSX file to parse.",
        name="FILE",
    )]
    file_path: PathBuf,
}

impl DumpCmd {
    async fn read_source(&self) -> anyhow::Result<String> {
        tokio::fs::read_to_string(&self.file_path)
            .await
            .with_context(|| format!("failed to read {:#?}", self.file_path))
    }
}

#[inherent::inherent]
impl RunnableCommand for DumpCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match self.read_source().await {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let display_path =
            PathBuf::from(output_utils::display_path(&self.file_path));
        let parser = JsxParser::with_file_path(
            &source,
            &display_path,
            self.parser_args.to_config(),
        );
        let node = match parser.parse_expression() {
            Ok(node) => node,
            Err(e) => return CommandResult::stderr(format_args!(
                "{}",
                e.format_detailed(Some(&source)),
            )),
        };

        let json = if self.compact {
            serde_json::to_string(&node)
        } else {
            serde_json::to_string_pretty(&node)
        };
        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the syntax tree: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
