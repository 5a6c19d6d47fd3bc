//! Output formatting for tokenized messages

use microtext_tokenizer::{Token, TokenSequence};
use serde::Serialize;

/// How tokens are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[surface/lexeme, ...]` on one line
    #[default]
    Tokens,
    /// One token per line: index, start, end, type, surface, lexeme
    Table,
    /// One JSON object per message
    Json,
}

#[derive(Serialize)]
struct MessageReport<'a> {
    text: &'a str,
    tokens: &'a TokenSequence,
}

/// Render the tokens of one message
pub fn render(
    text: &str,
    tokens: &TokenSequence,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Tokens => Ok(tokens.to_string()),
        OutputFormat::Table => Ok(render_table(tokens)),
        OutputFormat::Json => serde_json::to_string(&MessageReport { text, tokens }),
    }
}

fn render_table(tokens: &TokenSequence) -> String {
    tokens.iter().map(table_row).collect::<Vec<_>>().join("\n")
}

fn table_row(token: &Token) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        token.index(),
        token.start_offset(),
        token.end_offset(),
        token.token_type(),
        token.surface_form(),
        token.lexeme()
    )
}
