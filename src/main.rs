use std::process;

use clap::Parser;
use encoding_rs::Encoding;
use tracing::Level;

use dom_translation_nodes::core::{
    extract_from_data, print_error_message, print_info_message, read_input,
};
use dom_translation_nodes::env::core::{LogLevel, NoColor};
use dom_translation_nodes::env::EnvVar;
use dom_translation_nodes::parsers::html::get_node_name;
use dom_translation_nodes::translation::config::{ConfigManager, ExtractionConfig};
use dom_translation_nodes::translation::error::{TranslationError, TranslationResult};
use dom_translation_nodes::translation::pipeline::{group_into_units, TranslationUnit};

#[derive(Parser, Debug)]
#[command(
    name = "translation-nodes",
    version,
    about = "Lists the elements of an HTML document that should be translated"
)]
struct Cli {
    /// HTML file to read, or - for stdin
    #[arg(value_name = "TARGET")]
    target: String,

    /// Id of the element used as root (defaults to <body>)
    #[arg(short = 'r', long = "root", value_name = "ID")]
    root: Option<String>,

    /// Maximum number of nodes to return (1-15000)
    #[arg(short = 'b', long, value_name = "N")]
    budget: Option<usize>,

    /// Path to a TOML or JSON config file
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<String>,

    /// Character encoding of the input document
    #[arg(short = 'e', long, value_name = "LABEL", default_value = "utf-8")]
    encoding: String,

    /// Print nodes as a JSON array
    #[arg(short = 'j', long)]
    json: bool,

    /// Print translation units instead of individual nodes
    #[arg(short = 'u', long, conflicts_with = "json")]
    units: bool,

    /// Log level written to stderr
    #[arg(long, value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // .env 里的日志级别和颜色设置要在初始化日志之前生效
    ConfigManager::load_dotenv();
    let no_color = NoColor::get().unwrap_or(false);

    init_tracing(cli.log_level.as_deref(), no_color);

    if let Err(error) = run(&cli) {
        let msg = format!("Error: {error}");
        if no_color {
            eprintln!("{msg}");
        } else {
            print_error_message(&msg);
        }
        process::exit(1);
    }
}

fn init_tracing(cli_level: Option<&str>, no_color: bool) {
    let level = cli_level
        .map(str::to_string)
        .or_else(|| LogLevel::get().ok())
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

fn run(cli: &Cli) -> TranslationResult<()> {
    let config = load_config(cli)?;

    if Encoding::for_label(cli.encoding.as_bytes()).is_none() {
        return Err(TranslationError::ConfigError(format!(
            "Unknown encoding: {}",
            cli.encoding
        )));
    }

    let data = read_input(&cli.target)?;
    let extracted =
        extract_from_data(&data, Some(cli.encoding.as_str()), cli.root.as_deref(), config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&extracted.nodes.summaries())?;
        print_info_message(&json);
    } else if cli.units {
        for unit in group_into_units(&extracted.nodes) {
            print_info_message(&describe_unit(&unit));
        }
    } else {
        for node in &extracted.nodes {
            print_info_message(&node.describe());
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> TranslationResult<ExtractionConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)?.into_config(),
        None => ConfigManager::new()?.into_config(),
    };

    if let Some(budget) = cli.budget {
        config.budget = budget;
        config.validate()?;
    }

    Ok(config)
}

fn describe_unit(unit: &TranslationUnit) -> String {
    let root = format!("{}[root]", get_node_name(&unit.root).unwrap_or_default());
    if unit.members.is_empty() {
        return root;
    }

    let members: Vec<&str> = unit.members.iter().filter_map(get_node_name).collect();
    format!("{root} > {}", members.join(" "))
}
