use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use termdoc_builder::{collect_documents, options_from_flags};
use termdoc_core::export::{save_all, ExportPaths};
use termdoc_core::{process_documents, stem, MatrixKind, StopwordSet, TermOrder};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "termdoc")]
#[command(about = "Build term-document matrices from plain text documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build incidence, count and TF-IDF matrices and export them as CSV
    Build {
        /// Input path: a .txt/.json/.jsonl file or a directory of them
        #[arg(long)]
        input: String,
        /// Output directory
        #[arg(long)]
        output: String,
        /// Keep stopwords instead of removing them
        #[arg(long, default_value_t = false)]
        keep_stopwords: bool,
        /// Apply the suffix stemmer to every token
        #[arg(long, default_value_t = false)]
        stem: bool,
        /// Treat differently cased words as different terms
        #[arg(long, default_value_t = false)]
        case_sensitive: bool,
        /// Comma separated words to drop
        #[arg(long, default_value = "")]
        exclude: String,
        /// Stopword file (one word per line) replacing the built-in English list
        #[arg(long)]
        stopwords: Option<String>,
        /// Row order of the exported matrices
        #[arg(long, default_value = "alphabetical")]
        order: TermOrder,
        /// Matrices to export
        #[arg(long, value_delimiter = ',', default_value = "incidence,count,tfidf")]
        matrix: Vec<MatrixKind>,
    },
    /// Print the stem of each given word
    Stem {
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, keep_stopwords, stem, case_sensitive, exclude, stopwords, order, matrix } => {
            let options = options_from_flags(keep_stopwords, stem, case_sensitive, &exclude);
            let stopwords = match stopwords {
                Some(path) => StopwordSet::from_file(path)?,
                None => StopwordSet::english(),
            };
            build(&input, &output, &options, &stopwords, order, &matrix)
        }
        Commands::Stem { words } => {
            for w in words {
                println!("{w}\t{}", stem(&w));
            }
            Ok(())
        }
    }
}

fn build(
    input: &str,
    output: &str,
    options: &termdoc_core::ProcessingOptions,
    stopwords: &StopwordSet,
    order: TermOrder,
    kinds: &[MatrixKind],
) -> Result<()> {
    let docs = collect_documents(input)?;
    tracing::info!(num_docs = docs.len(), "collected documents");

    let bundle = process_documents(&docs, options, stopwords)
        .with_context(|| format!("processing documents from {input}"))?
        .sorted(order);
    tracing::info!(num_docs = bundle.num_docs(), num_terms = bundle.num_terms(), "built matrices");

    let paths = ExportPaths::new(output);
    let written = save_all(&paths, &bundle, kinds, options)?;
    for path in &written {
        tracing::debug!(path = %path.display(), "wrote");
    }
    tracing::info!(output, files = written.len(), "export complete");
    Ok(())
}
