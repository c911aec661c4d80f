use crate::commands::ParserArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libjsx_parser::JsxParser;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "jsx".to_string(),
            "tsx".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    jsx_file_exts: Vec<String>,

    #[command(flatten)]
    parser_args: ParserArgs,

    #[arg(
        help="Paths to one or more JSX files or directories containing JSX \
             files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl CheckCmd {
    /// Finds all files with one of the configured extensions at or under
    /// each input path, recording walk failures in `errors`.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<String>,
    ) -> (Vec<PathBuf>, usize) {
        let jsx_file_exts: HashSet<String> =
            self.jsx_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                        continue
                    },
                };

                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue
                }

                let has_jsx_ext = path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| jsx_file_exts.contains(&*ext));
                if has_jsx_ext {
                    log::trace!("Found file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file named explicitly is checked whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --jsx-file-exts ({}).",
                jsx_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths.sort();
        (file_paths, num_skipped_files)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];
        let (file_paths, num_skipped_files) =
            self.collect_file_paths(&mut errors);

        log::debug!(
            "Found {} JSX files to be checked.",
            file_paths.len(),
        );

        let config = self.parser_args.to_config();
        let mut num_failed_files = 0;
        for path in &file_paths {
            let display_path = PathBuf::from(output_utils::display_path(path));
            let source = match tokio::fs::read_to_string(path).await {
                Ok(source) => source,
                Err(e) => {
                    errors.push(format!("{}: {e}", display_path.display()));
                    num_failed_files += 1;
                    continue
                },
            };

            let parser = JsxParser::with_file_path(
                &source,
                &display_path,
                config.clone(),
            );
            match parser.parse_expression() {
                Ok(node) => log::debug!(
                    "Parsed {} ({}).",
                    display_path.display(),
                    node.kind(),
                ),
                Err(e) => {
                    log::debug!("{e}");
                    errors.push(e.format_detailed(Some(&source)));
                    num_failed_files += 1;
                },
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{}\n{} {num_failed_files} of {} JSX files failed to parse.",
                errors.join("\n"),
                output_utils::RED_X,
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All JSX parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} files with other extensions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
        ))
    }
}
