use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use globe_core::{Atlas, GameMode, GeoPoint, QuizParams, Region, ResolverKind, Session};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod play;
mod store;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find countries on the globe from your terminal")]
struct Args {
    /// GeoJSON FeatureCollection of country polygons
    #[arg(long, default_value = "data/world.geo.json")]
    dataset: PathBuf,

    /// Point-in-country lookup strategy
    #[arg(long, value_enum)]
    resolver: Option<ResolverArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play quiz rounds
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Click)]
        mode: ModeArg,

        /// Asia, Europe, Americas, Africa, Oceania or World
        #[arg(long, default_value = "World")]
        region: Region,

        /// Rounds before the game ends
        #[arg(long, default_value_t = 5)]
        rounds: u32,

        /// Fixed seed for reproducible target picks
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file overriding quiz parameters
        #[arg(long)]
        params: Option<PathBuf>,

        #[arg(long, default_value = ".globe-quiz-high-score")]
        high_score_file: PathBuf,
    },

    /// Print the country containing a point
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// List the catalog with centroids and regions
    Catalog {
        #[arg(long)]
        region: Option<Region>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Typing,
    Click,
    Precision,
}

impl From<ModeArg> for GameMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Typing => GameMode::Typing,
            ModeArg::Click => GameMode::Click,
            ModeArg::Precision => GameMode::Precision,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResolverArg {
    Linear,
    Rtree,
}

impl From<ResolverArg> for ResolverKind {
    fn from(r: ResolverArg) -> Self {
        match r {
            ResolverArg::Linear => ResolverKind::LinearScan,
            ResolverArg::Rtree => ResolverKind::RTree,
        }
    }
}

fn load_params(path: Option<&Path>) -> anyhow::Result<QuizParams> {
    let Some(path) = path else {
        return Ok(QuizParams::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    QuizParams::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn load_atlas(path: &Path, kind: ResolverKind) -> anyhow::Result<Atlas> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let atlas = Atlas::from_reader(BufReader::new(file), kind)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "[native] {} countries from {}",
        atlas.catalog().len(),
        path.display()
    );
    Ok(atlas)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match args.command {
        Command::Play {
            mode,
            region,
            rounds,
            seed,
            params,
            high_score_file,
        } => {
            let mut params = load_params(params.as_deref())?;
            if let Some(r) = args.resolver {
                params.resolver = r.into();
            }
            let atlas = load_atlas(&args.dataset, params.resolver)?;
            let seed = seed.unwrap_or_else(rand::random);
            let store = store::FileHighScore::new(high_score_file);
            let mut session = Session::new(atlas, params, Box::new(store), seed);
            play::run(
                &mut session,
                play::PlayOptions {
                    mode: mode.into(),
                    region,
                    rounds: rounds.max(1),
                },
            )?;
        }
        Command::Locate { lat, lon } => {
            let kind = args.resolver.map(Into::into).unwrap_or_default();
            let atlas = load_atlas(&args.dataset, kind)?;
            match atlas.country_at(GeoPoint::new(lat, lon)) {
                Some(name) => println!("{name}"),
                None => println!("(ocean)"),
            }
        }
        Command::Catalog { region } => {
            let atlas = load_atlas(&args.dataset, ResolverKind::default())?;
            for record in atlas.catalog().records() {
                if region.map_or(true, |r| r == Region::World || r == record.region) {
                    println!(
                        "{:<40} {:>8.3} {:>9.3}  {}",
                        record.name, record.lat, record.lon, record.region
                    );
                }
            }
        }
    }
    Ok(())
}
