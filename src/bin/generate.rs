//! Synthetic data generator
//!
//! Fabricates the planet dataset used by the dashboard and fits the scaler
//! artifact over the engineered feature vectors. Paths, row count and seed
//! come from the same environment as the server.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use exohabit_server::config::Config;
use exohabit_server::logic::features::FeatureVector;
use exohabit_server::logic::model::Scaler;
use exohabit_server::logic::Dataset;
use exohabit_server::models::PlanetRecord;

const STAR_TYPES: [&str; 4] = ["G", "K", "M", "F"];
const DAYS_PER_YEAR: f64 = 365.25;

/// Per-column sampling distributions
struct Columns {
    radius: Normal<f64>,
    mass: Normal<f64>,
    eq_temp: Normal<f64>,
    insolation: Normal<f64>,
    period: Normal<f64>,
    density: Normal<f64>,
    star_temp: Normal<f64>,
    star_lum: Normal<f64>,
    star_met: Normal<f64>,
}

impl Columns {
    fn new() -> Result<Self, rand_distr::NormalError> {
        Ok(Self {
            radius: Normal::new(1.0, 0.5)?,
            mass: Normal::new(1.0, 0.5)?,
            eq_temp: Normal::new(288.0, 50.0)?,
            insolation: Normal::new(1.0, 0.5)?,
            period: Normal::new(365.0, 100.0)?,
            density: Normal::new(5.51, 1.0)?,
            star_temp: Normal::new(5778.0, 800.0)?,
            star_lum: Normal::new(1.0, 0.3)?,
            star_met: Normal::new(0.0, 0.2)?,
        })
    }
}

/// Ground-truth labelling rule
fn is_habitable(radius: f64, eq_temp: f64) -> bool {
    (0.8..=1.5).contains(&radius) && (200.0..=320.0).contains(&eq_temp)
}

fn generate_rows(samples: usize, seed: u64) -> Result<Vec<PlanetRecord>, rand_distr::NormalError> {
    let columns = Columns::new()?;
    let mut rng = StdRng::seed_from_u64(seed);

    let rows = (0..samples)
        .map(|i| {
            let radius = columns.radius.sample(&mut rng);
            let mass = columns.mass.sample(&mut rng);
            let eq_temp = columns.eq_temp.sample(&mut rng);
            let insolation = columns.insolation.sample(&mut rng);
            let period = columns.period.sample(&mut rng);
            // Kepler's third law around a solar-mass star
            let semi_major_axis = (period.abs() / DAYS_PER_YEAR).powf(2.0 / 3.0);
            let star_type = STAR_TYPES.choose(&mut rng).copied().unwrap_or("G");

            PlanetRecord {
                name: format!("Kepler-{i}"),
                radius: Some(radius),
                mass: Some(mass),
                eq_temp: Some(eq_temp),
                insolation: Some(insolation),
                period: Some(period),
                habitable: is_habitable(radius, eq_temp) as u8,
                semi_major_axis: Some(semi_major_axis),
                density: Some(columns.density.sample(&mut rng)),
                star_temp: Some(columns.star_temp.sample(&mut rng)),
                star_lum: Some(columns.star_lum.sample(&mut rng).abs()),
                star_met: Some(columns.star_met.sample(&mut rng)),
                star_type: Some(star_type.to_string()),
            }
        })
        .collect();

    Ok(rows)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!(
        "Generating {} synthetic planets (seed {})...",
        config.generator_samples,
        config.generator_seed
    );
    let rows = generate_rows(config.generator_samples, config.generator_seed)
        .context("invalid sampling distribution")?;

    let vectors: Vec<FeatureVector> = rows
        .iter()
        .map(|row| FeatureVector::assemble(&row.to_inputs().engineer()))
        .collect();

    if let Some(parent) = config.data_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let dataset = Dataset::new(rows);
    dataset
        .save(&config.data_path)
        .with_context(|| format!("failed to write {}", config.data_path.display()))?;
    tracing::info!(
        "Dataset written: {} ({} rows, {} habitable)",
        config.data_path.display(),
        dataset.len(),
        dataset.habitable_count()
    );

    let scaler = Scaler::fit(&vectors).context("failed to fit scaler")?;
    scaler
        .save(&config.scaler_path)
        .with_context(|| format!("failed to write {}", config.scaler_path.display()))?;
    tracing::info!("Scaler written: {}", config.scaler_path.display());

    Ok(())
}
