use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use graphql_language_service::file_reader;
use graphql_language_service::project::DEFAULT_GRAPHQL_FILE_EXTS;
use graphql_language_service::project::DEFAULT_TEMPLATE_TAGS;
use graphql_online_parser::Document;
use graphql_online_parser::DocumentExtractor;
use graphql_online_parser::EmbeddedLanguageParser;
use graphql_online_parser::OnlineParser;
use graphql_online_parser::Position;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractCmd {
    #[arg(
        help="Regex matching the text that opens an embedded GraphQL region. \
             Defaults to tagged template literals (graphql`, gql`, Relay.QL`).",
        long,
        requires="end",
    )]
    start: Option<String>,

    #[arg(
        help="Regex matching the text that closes an embedded GraphQL region.",
        long,
        requires="start",
    )]
    end: Option<String>,

    #[arg(
        help="Skip `${...}` interpolation holes inside regions delimited by \
             --start/--end.",
        long,
    )]
    interpolation: bool,

    #[arg(
        help="Path to a GraphQL file, or a host-language file with embedded \
             GraphQL.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}
impl ExtractCmd {
    fn parser(&self) -> anyhow::Result<EmbeddedLanguageParser> {
        let parser = match (&self.start, &self.end) {
            (Some(start), Some(end)) =>
                EmbeddedLanguageParser::new(OnlineParser::new(), start, end)?
                    .with_interpolation(self.interpolation),
            _ => EmbeddedLanguageParser::tagged_templates(
                OnlineParser::new(),
                DEFAULT_TEMPLATE_TAGS,
            )?,
        };
        Ok(parser)
    }

    fn extract(&self, source: &str) -> anyhow::Result<Vec<Document>> {
        let is_graphql_file =
            self.start.is_none()
                && self.file_path
                    .extension()
                    .is_some_and(|ext| DEFAULT_GRAPHQL_FILE_EXTS.iter().any(|known| ext == *known));
        if is_graphql_file {
            return Ok(vec![Document::whole_file(source)]);
        }
        Ok(DocumentExtractor::new(self.parser()?).get_documents(source))
    }
}

#[inherent::inherent]
impl RunnableCommand for ExtractCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let result =
            file_reader::read_content(&self.file_path)
                .map_err(anyhow::Error::from)
                .and_then(|source| Ok((self.extract(&source)?, source)));
        let (documents, source) = match result {
            Ok(result) => result,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Extracted {} documents from {:#?}.", documents.len(), self.file_path);

        let rendered =
            documents.iter()
                .map(|document| {
                    let start = Position::from_offset(&source, document.span.start);
                    let unterminated =
                        if document.is_unterminated() { " (unterminated)" } else { "" };
                    format!(
                        "# {}:{start}{unterminated}\n{}",
                        self.file_path.display(),
                        document.body(),
                    )
                })
                .collect::<Vec<_>>();
        CommandResult::stdout(format_args!("{}", rendered.join("\n\n")))
    }
}
