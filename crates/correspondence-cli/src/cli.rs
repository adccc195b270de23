//! Argument definitions and request assembly

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use correspondence_types::{DocumentType, GenerationRequest, ToneOption};
use std::io::Read;
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("assessor-letters")
        .version(env!("CARGO_PKG_VERSION"))
        .about("GPT-based correspondence and document assistant for the county assessor's office")
        .long_about(
            "Generates professional letters and summaries for the county assessor's office. \
            Choose a document type and tone, and provide the relevant details or paste the \
            email/request text.",
        )
        .arg(
            Arg::new("document-type")
                .long("document-type")
                .short('d')
                .value_name("TYPE")
                .help("Document type to generate (see --list-types)")
                .value_parser(|s: &str| s.parse::<DocumentType>())
                .default_value("appeal-response"),
        )
        .arg(
            Arg::new("tone")
                .long("tone")
                .short('t')
                .value_name("TONE")
                .help("Tone of the generated text: professional, friendly or formal")
                .value_parser(|s: &str| s.parse::<ToneOption>())
                .default_value("professional"),
        )
        .arg(
            Arg::new("content")
                .long("content")
                .value_name("TEXT")
                .help("Relevant details or the pasted email/request text")
                .conflicts_with("content-file"),
        )
        .arg(
            Arg::new("content-file")
                .long("content-file")
                .value_name("FILE")
                .help("Read the details from a file instead of stdin")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON credentials file (defaults to OPENAI_API_KEY from the environment)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List document types and tones, then exit")
                .action(ArgAction::SetTrue),
        )
}

/// Assemble the request from parsed arguments, reading stdin when no content flag is given
pub fn request_from_matches(matches: &ArgMatches) -> Result<GenerationRequest> {
    let document_type = matches
        .get_one::<DocumentType>("document-type")
        .copied()
        .unwrap_or(DocumentType::AppealResponse);
    let tone = matches
        .get_one::<ToneOption>("tone")
        .copied()
        .unwrap_or(ToneOption::Professional);

    let user_content = if let Some(text) = matches.get_one::<String>("content") {
        text.clone()
    } else if let Some(path) = matches.get_one::<PathBuf>("content-file") {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read content from stdin")?;
        buffer
    };

    Ok(GenerationRequest::new(document_type, tone, user_content))
}

/// Menu of document types and tones
pub fn render_catalog() -> String {
    let mut out = String::from("Document types:\n");
    for doc_type in DocumentType::ALL {
        out.push_str(&format!(
            "  {:<26} {:<26} {}\n",
            doc_type.slug(),
            doc_type.label(),
            doc_type.purpose()
        ));
    }

    out.push_str("\nTones:\n");
    for tone in ToneOption::ALL {
        out.push_str(&format!("  {}\n", tone.label().to_lowercase()));
    }
    out
}
