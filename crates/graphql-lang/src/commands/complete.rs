use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_discovery;
use crate::output_utils;
use graphql_language_service::Schema;
use graphql_language_service::file_reader;
use graphql_language_service::interface::CompletionItem;
use graphql_language_service::interface::get_autocomplete_suggestions;
use graphql_language_service::project::DEFAULT_GRAPHQL_FILE_EXTS;
use graphql_language_service::project::DEFAULT_TEMPLATE_TAGS;
use graphql_language_service::schema::SchemaAssembler;
use graphql_online_parser::EmbeddedLanguageParser;
use graphql_online_parser::OnlineParser;
use graphql_online_parser::Position;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CompleteCmd {
    #[arg(
        help="Schema files or directories containing schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Print the suggestions as a JSON array.",
        long,
    )]
    json: bool,

    #[arg(help="The file to complete in.", name="FILE_PATH")]
    file_path: PathBuf,

    #[arg(help="1-indexed line of the cursor.", name="LINE")]
    line: usize,

    #[arg(help="1-indexed column of the cursor.", name="COLUMN")]
    column: usize,
}
impl CompleteCmd {
    fn load_schema(&self) -> anyhow::Result<Schema> {
        let discovered = file_discovery::find_files(&self.schema, is_graphql_file)?;
        let assembly = SchemaAssembler::new().load_files(&discovered.files).assemble();
        for err in assembly.gql_errors() {
            log::debug!("Schema diagnostic: {err}");
        }
        Ok(assembly.schema)
    }

    fn suggestions(&self) -> anyhow::Result<Vec<CompletionItem>> {
        let schema = self.load_schema()?;
        let source = file_reader::read_content(&self.file_path)?;
        let position = Position::new(self.line, self.column);
        let items =
            if is_graphql_file(&self.file_path) {
                get_autocomplete_suggestions(&schema, &OnlineParser::new(), &source, position)
            } else {
                let parser = EmbeddedLanguageParser::tagged_templates(
                    OnlineParser::new(),
                    DEFAULT_TEMPLATE_TAGS,
                )?;
                get_autocomplete_suggestions(&schema, &parser, &source, position)
            };
        Ok(items)
    }
}

#[inherent::inherent]
impl RunnableCommand for CompleteCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let items = match self.suggestions() {
            Ok(items) => items,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if self.json {
            return match serde_json::to_string_pretty(&items) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize suggestions: {err}",
                    output_utils::RED_X,
                )),
            };
        }

        let lines =
            items.iter()
                .map(|item| match &item.detail {
                    Some(detail) => format!("{}\t{detail}", item.label),
                    None => item.label.clone(),
                })
                .collect::<Vec<_>>();
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}

fn is_graphql_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| DEFAULT_GRAPHQL_FILE_EXTS.iter().any(|known| ext == *known))
}
