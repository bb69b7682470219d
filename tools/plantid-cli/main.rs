use clap::{Parser, ValueEnum};
use plantid::features::{HEIGHT_FIELD, LEAF_WIDTH_FIELD, parse_measurement};
use plantid::logging;
use plantid::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CriterionCli {
    Gini,
    Entropy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StemCli {
    Thin,
    Medium,
    Thick,
}

impl From<StemCli> for StemQuality {
    fn from(value: StemCli) -> Self {
        match value {
            StemCli::Thin => StemQuality::Thin,
            StemCli::Medium => StemQuality::Medium,
            StemCli::Thick => StemQuality::Thick,
        }
    }
}

/// Identify plant species from height, leaf width and stem quality
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Plant height in centimetres
    #[arg(long, default_value_t = 80.0)]
    height: f64,

    /// Leaf width in centimetres
    #[arg(long, default_value_t = 4.0)]
    width: f64,

    /// Stem quality
    #[arg(long, value_enum, default_value_t = StemCli::Medium)]
    stem: StemCli,

    /// Training dataset JSON file (defaults to the built-in dataset)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Species knowledge base JSON file (defaults to the built-in species)
    #[arg(long)]
    species: Option<PathBuf>,

    /// Load a previously saved model artifact instead of training
    #[arg(long, conflicts_with = "dataset")]
    model: Option<PathBuf>,

    /// Save the trained model to this path
    #[arg(long)]
    save_model: Option<PathBuf>,

    /// Maximum depth of the decision tree
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Split criterion used for training
    #[arg(long, value_enum, default_value_t = CriterionCli::Gini)]
    criterion: CriterionCli,

    /// Directory that image paths are resolved against
    #[arg(long, default_value = ".")]
    images: PathBuf,

    /// Show the decision tree rules
    #[arg(long)]
    rules: bool,

    /// List the species in the knowledge base
    #[arg(long)]
    catalog: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let identifier = build_identifier(&cli);
    let options = RenderOptions {
        show_rules: cli.rules,
        image_root: cli.images.clone(),
    };

    if cli.human {
        run_interactive(&identifier, &options);
    } else {
        run_non_interactive(&cli, &identifier, &options);
    }

    if cli.catalog {
        println!("\n{}", ReportFormatter::format_catalog(identifier.knowledge()));
    }
}

/// Trains or loads the model and assembles the identifier. Any failure here is fatal.
fn build_identifier(cli: &Cli) -> Identifier {
    let knowledge = match &cli.species {
        Some(path) => KnowledgeBase::from_file(path),
        None => KnowledgeBase::builtin(),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load species data: {}", e)));

    let start = Instant::now();
    let model = match &cli.model {
        Some(path) => TrainedModel::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load model: {}", e))),
        None => {
            let set = match &cli.dataset {
                Some(path) => TrainingSet::from_file(path),
                None => TrainingSet::builtin(),
            }
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load dataset: {}", e)));

            let config = TreeConfig {
                max_depth: Some(cli.max_depth),
                criterion: match cli.criterion {
                    CriterionCli::Gini => Criterion::Gini,
                    CriterionCli::Entropy => Criterion::Entropy,
                },
                ..TreeConfig::default()
            };
            TreeClassifier::new(config)
                .train(&set)
                .unwrap_or_else(|e| exit_with_error(&format!("Training failed: {}", e)))
        }
    };
    tracing::info!(elapsed = ?start.elapsed(), "Model ready");

    if let Some(path) = &cli.save_model {
        model
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save model: {}", e)));
        println!("Saved model to '{}'", path.display());
    }

    Identifier::builder(knowledge)
        .with_model(model)
        .with_input_limits(InputLimits::default())
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

/// Identifies the plant described by the command-line flags.
fn run_non_interactive(cli: &Cli, identifier: &Identifier, options: &RenderOptions) {
    let measurements = Measurements::new(cli.height, cli.width, cli.stem.into())
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    match identifier.identify(&measurements) {
        Ok(result) => print!("{}", ReportFormatter::format_identification(&result, options)),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(identifier: &Identifier, options: &RenderOptions) {
    println!("--- Plant Species Identification ---");
    if let Some(limits) = identifier.limits() {
        println!(
            "Height: {}-{} cm, leaf width: {}-{} cm, stem: thin / medium / thick",
            limits.height_cm.0, limits.height_cm.1, limits.leaf_width_cm.0, limits.leaf_width_cm.1
        );
    }

    loop {
        let height = prompt_until_valid("Plant height (cm)", "80", |raw| {
            parse_measurement(HEIGHT_FIELD, raw)
        });
        let width = prompt_until_valid("Leaf width (cm)", "4.0", |raw| {
            parse_measurement(LEAF_WIDTH_FIELD, raw)
        });
        let stem = prompt_until_valid("Stem quality", "medium", |raw| raw.parse::<StemQuality>());

        match Measurements::new(height, width, stem).and_then(|m| {
            identifier
                .identify(&m)
                .map(|result| ReportFormatter::format_identification(&result, options))
        }) {
            Ok(report) => println!("\n{}", report),
            Err(e) => {
                println!("Invalid input: {}. Please try again.", e);
                continue;
            }
        }

        let again = prompt_for_input("Identify another plant? (y/n)", Some("n"));
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }
}

/// Re-prompts until `parse` accepts the input.
fn prompt_until_valid<T>(
    prompt_text: &str,
    default: &str,
    parse: impl Fn(&str) -> std::result::Result<T, InputError>,
) -> T {
    loop {
        let raw = prompt_for_input(prompt_text, Some(default));
        match parse(&raw) {
            Ok(value) => return value,
            Err(e) => println!("Invalid input: {}", e),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => exit_with_error("Input closed"),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
