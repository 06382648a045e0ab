use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use arrel_endings::EndingTable;
use arrel_engine::{Grammar, VerbDictionary};
use arrel_protocol::{RawEndingTable, VerbList};
use clap::{Parser, Subcommand};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Catalan lemmatiser: verb dictionary compiler and word analyser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compiles a JSON verb list to the rkyv binary dictionary
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Prints the lemma candidates of each word
    Analyze {
        /// Verb dictionary, JSON (`.json`) or compiled binary
        #[arg(short, long, value_name = "FILE")]
        dict: Option<PathBuf>,

        /// Conjugation table in JSON, instead of the built-in Catalan one
        #[arg(short, long, value_name = "FILE")]
        endings: Option<PathBuf>,

        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Compile { input, output } => compile_dictionary(&input, &output),
        Command::Analyze { dict, endings, words } => analyze(dict.as_deref(), endings.as_deref(), &words),
    }
}

fn compile_dictionary(input: &Path, output: &Path) -> anyhow::Result<()> {
    info!(input = %input.display(), "reading verb list");
    let input_data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let list: VerbList = serde_json::from_str(&input_data)?;

    println!("⚙️  Compiling verb list version {} with {} verbs...", list.version, list.verbs.len());

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&list)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;

    println!("✅ Binary dictionary written to {}", output.display());
    Ok(())
}

fn load_dictionary(path: Option<&Path>) -> anyhow::Result<VerbDictionary> {
    let Some(path) = path else {
        return Ok(VerbDictionary::new());
    };
    let dict = if path.extension().is_some_and(|ext| ext == "json") {
        VerbDictionary::from_json(&fs::read_to_string(path)?)?
    } else {
        VerbDictionary::from_archive(&fs::read(path)?)?
    };
    info!(path = %path.display(), verbs = dict.len(), "dictionary loaded");
    Ok(dict)
}

fn analyze(dict: Option<&Path>, endings: Option<&Path>, words: &[String]) -> anyhow::Result<()> {
    let dict = load_dictionary(dict)?;

    let custom;
    let table = match endings {
        Some(path) => {
            let raw: RawEndingTable = serde_json::from_str(&fs::read_to_string(path)?)
                .with_context(|| format!("parsing conjugation table {}", path.display()))?;
            custom = arrel_endings::compile(&raw)?;
            &custom
        }
        None => EndingTable::catalan(),
    };
    let grammar = Grammar::with_endings(table, dict);
    if grammar.dictionary().is_empty() {
        warn!("no verb dictionary loaded; only unvalidated candidates will be printed");
    }

    for word in words {
        let lemmas = grammar.lemmas_of(word);
        println!("{}", word);
        println!("  verbs:    {}", lemmas.verbs.join(", "));
        println!("  spelled:  {}", lemmas.verb_variants.join(", "));
        println!("  nominal:  {}", lemmas.bases.into_iter().collect::<Vec<_>>().join(", "));
    }
    Ok(())
}
