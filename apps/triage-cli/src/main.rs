//! Command-line front end for audit-decision triage.
//!
//! Decodes a decision PDF, runs the text-analysis engine over the extracted
//! text, and prints the citation list and the public-damage verdict.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shared_types::{DamageVerdict, TriageReport};
use tracing::info;
use triage_engine::TriageEngine;

/// Characters of extracted text shown by `--show-text`.
const TEXT_PREVIEW_CHARS: usize = 1000;

#[derive(Parser)]
#[command(
    name = "triage-cli",
    about = "Extract law citations and a public-damage verdict from an audit-decision PDF"
)]
struct Args {
    /// Path to the decision PDF
    pdf: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print a truncated preview of the extracted text
    #[arg(long)]
    show_text: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let bytes = std::fs::read(&args.pdf)
        .with_context(|| format!("Cannot read {}", args.pdf.display()))?;
    let filename = args
        .pdf
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());

    // A corrupt or encrypted file stops here; an empty but readable document
    // does not.
    let document = shared_pdf::decision_document_from_bytes(filename.clone(), filename.clone(), &bytes)
        .context("PDF could not be decoded")?;
    info!(pages = document.pages, file = %filename, "document decoded");

    let full_text = document.text_content.join("\n");
    if full_text.trim().is_empty() {
        eprintln!("Uyarı: belge çözüldü ancak sayfalardan metin çıkarılamadı.");
    }

    let report = TriageEngine::new().analyze(&document);

    if args.show_text {
        let preview: String = full_text.chars().take(TEXT_PREVIEW_CHARS).collect();
        println!("--- metin önizleme ---");
        println!("{preview}");
        println!("----------------------");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

/// Human-readable rendering of a triage report.
fn render_report(report: &TriageReport) -> String {
    let mut out = String::new();

    if report.citations.is_empty() {
        out.push_str("Kanun/madde ifadesi bulunamadı.\n");
    } else {
        let joined = report
            .citations
            .iter()
            .map(|c| c.canonical())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str("Tespit edilen kanunlar: ");
        out.push_str(&joined);
        out.push('\n');
    }

    out.push_str(match report.verdict {
        DamageVerdict::DamagePresent => "Kamu Zararı VAR\n",
        DamageVerdict::DamageAbsent => "Kamu Zararı YOK\n",
        DamageVerdict::Undetermined => "Kamu zararı durumu net anlaşılamadı\n",
    });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::CitationRef;

    fn report(citations: Vec<CitationRef>, verdict: DamageVerdict) -> TriageReport {
        TriageReport {
            document_id: "doc-1".to_string(),
            citations,
            verdict,
            analyzed_at: 0,
        }
    }

    #[test]
    fn test_renders_comma_joined_citations() {
        let rendered = render_report(&report(
            vec![CitationRef::new("5018", "71"), CitationRef::new("6085", "55")],
            DamageVerdict::DamagePresent,
        ));
        assert!(rendered.contains("Tespit edilen kanunlar: 5018/71, 6085/55"));
        assert!(rendered.contains("Kamu Zararı VAR"));
    }

    #[test]
    fn test_renders_empty_citation_list_as_not_found() {
        let rendered = render_report(&report(vec![], DamageVerdict::Undetermined));
        assert!(rendered.contains("Kanun/madde ifadesi bulunamadı"));
        assert!(rendered.contains("net anlaşılamadı"));
    }

    #[test]
    fn test_renders_absent_verdict() {
        let rendered = render_report(&report(vec![], DamageVerdict::DamageAbsent));
        assert!(rendered.contains("Kamu Zararı YOK"));
    }
}
