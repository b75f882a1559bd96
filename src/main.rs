use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::info;

use poi_index::kdtree::PoiKdTree;
use poi_index::loader::load_pois;
use poi_index::{Poi, PoiFilter, Result};

#[derive(Parser, Debug)]
#[command(version, about = "Query an immutable k-d tree of points of interest", long_about = None)]
struct Cli {
    /// Path to the POI data file (CSV with an `id,name,type,lat,lon` header).
    #[arg(long, value_name = "FILE")]
    data: PathBuf,

    /// Extra data files merged into the index after the main file.
    #[arg(long, value_name = "FILE")]
    merge: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All POIs within a radius of the target, in traversal order.
    Within {
        #[command(flatten)]
        target: Target,

        /// Search radius in kilometers.
        #[arg(long)]
        radius: f64,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// The k nearest POIs to the target, closest first.
    Nearest {
        #[command(flatten)]
        target: Target,

        /// Number of results to return.
        #[arg(short)]
        k: usize,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Target latitude in degrees.
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Target longitude in degrees.
    #[arg(allow_negative_numbers = true)]
    lon: f64,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Category filter; `all` matches every category.
    #[arg(long, default_value = "all")]
    category: String,

    /// Case-insensitive text filter over name and category.
    #[arg(long)]
    text: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> PoiFilter {
        let mut filter = PoiFilter::any();
        if self.category != "all" {
            filter = filter.with_category(self.category);
        }
        if let Some(text) = self.text {
            filter = filter.with_text(text);
        }
        filter
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // Usage problems exit with code 1; --help and --version print to
        // stdout and leave with 0.
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        process::exit(code);
    });

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut pois = load_pois(&cli.data)?;
    for path in &cli.merge {
        pois.extend(load_pois(path)?);
    }

    let tree = PoiKdTree::from(pois);
    info!("indexed {} POIs", tree.len());

    let output = match cli.command {
        Command::Within {
            target,
            radius,
            filter,
        } => {
            let results = tree.within(target.lat, target.lon, radius, &filter.into_filter());
            info!("{} POIs within {radius} km", results.len());
            serde_json::to_string_pretty(&results)?
        }
        Command::Nearest { target, k, filter } => {
            let results = tree.nearest(target.lat, target.lon, k, &filter.into_filter());
            info!("{} nearest POIs", results.len());
            let pois: Vec<&Poi> = results.iter().map(|(poi, _)| *poi).collect();
            serde_json::to_string_pretty(&pois)?
        }
    };

    println!("{output}");
    Ok(())
}
