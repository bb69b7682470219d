use clap::Parser;
use plantid::data::{LabeledSample, TrainingSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest length written to the output; the dataset loader rejects zero.
const MIN_MEASUREMENT: f64 = 0.01;

/// A CLI tool to generate training data for the plant classifier
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_training_set.json")]
    output: String,

    /// Number of jittered copies to generate for each built-in sample
    #[arg(long, default_value_t = 10)]
    copies: usize,

    /// Maximum relative jitter applied to height and leaf width (0.1 = ±10%)
    #[arg(long, default_value_t = 0.1)]
    jitter: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Also keep the original built-in samples in the output
    #[arg(long)]
    include_originals: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..1.0).contains(&cli.jitter) {
        eprintln!("Error: --jitter ({}) must be in [0, 1)", cli.jitter);
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let base = TrainingSet::builtin()?;
    println!(
        "Generating training data ({} copies of {} samples, jitter ±{:.0}%)...",
        cli.copies,
        base.len(),
        cli.jitter * 100.0
    );

    let mut generated = if cli.include_originals {
        base.clone()
    } else {
        TrainingSet::default()
    };
    for sample in base.samples() {
        for _ in 0..cli.copies {
            generated.push(jitter_sample(&mut rng, sample, cli.jitter));
        }
    }

    generated.save(&cli.output)?;
    println!(
        "Successfully generated {} samples and saved them to '{}'",
        generated.len(),
        cli.output
    );

    Ok(())
}

/// Scales the lengths of `sample` by a random factor in `[1 - jitter, 1 + jitter]`.
/// The stem quality and species are kept. Lengths never drop below
/// [`MIN_MEASUREMENT`].
fn jitter_sample(rng: &mut impl Rng, sample: &LabeledSample, jitter: f64) -> LabeledSample {
    let mut scale = || {
        if jitter > 0.0 {
            rng.random_range((1.0 - jitter)..=(1.0 + jitter))
        } else {
            1.0
        }
    };
    let height = round_to(sample.height_cm * scale(), 1).max(MIN_MEASUREMENT);
    let width = round_to(sample.leaf_width_cm * scale(), 2).max(MIN_MEASUREMENT);
    LabeledSample::new(height, width, sample.stem_quality, sample.species.clone())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantid::features::StemQuality;

    #[test]
    fn test_extreme_jitter_keeps_samples_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let tiny = LabeledSample::new(0.3, 0.2, StemQuality::Thin, "lavender");

        let mut generated = TrainingSet::default();
        for _ in 0..1_000 {
            generated.push(jitter_sample(&mut rng, &tiny, 0.999));
        }

        for sample in generated.samples() {
            assert!(sample.height_cm >= MIN_MEASUREMENT);
            assert!(sample.leaf_width_cm >= MIN_MEASUREMENT);
        }
        assert!(generated.validate().is_ok());
    }

    #[test]
    fn test_zero_jitter_copies_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = TrainingSet::builtin().unwrap();
        let copy = jitter_sample(&mut rng, &base.samples()[0], 0.0);
        assert_eq!(copy, base.samples()[0]);
    }
}
