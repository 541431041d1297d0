use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vaxviz::registry::StaticRegistry;
use vaxviz::{aggregate, enrich, loader, viz};

#[derive(Parser, Debug)]
#[command(
    name = "vaxviz",
    version,
    about = "Join vaccination coverage with socioeconomic data and generate interactive HTML charts"
)]
struct Cli {
    /// Vaccination indicator CSV (country_code, time_period, obs_value)
    #[arg(long, default_value = "unicef_indicator.csv")]
    indicators: PathBuf,
    /// Socioeconomic metadata CSV (country_code, time_period, life_expectancy, gdp_per_capita)
    #[arg(long, default_value = "unicef_metadata.csv")]
    metadata: PathBuf,
    /// Directory the four HTML artifacts are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let joined = loader::load_and_join(&cli.indicators, &cli.metadata)?;
    log::debug!("joined {} indicator rows", joined.len());

    let registry = StaticRegistry::default();
    let rows = enrich::annotate(joined, &registry);
    let continents: Vec<&str> = enrich::distinct_continents(&rows)
        .iter()
        .map(|c| c.label())
        .collect();
    println!("Continents found: {}", continents.join(", "));

    // The four passes are independent; each consumes only the read-only
    // enriched table.
    let ts = aggregate::time_series(&rows);
    let ts_path = cli.out_dir.join("time_series.html");
    viz::render_time_series(&ts, &ts_path)?;
    println!("✓ {} generated", ts_path.display());

    let map_path = cli.out_dir.join("map.html");
    viz::render_map(&rows, &map_path)?;
    println!("✓ {} generated", map_path.display());

    let scatter_path = cli.out_dir.join("scatter.html");
    viz::render_scatter(&rows, &scatter_path)?;
    println!("✓ {} generated", scatter_path.display());

    let ranking = aggregate::growth_ranking(&rows, 10);
    let bar_path = cli.out_dir.join("bar.html");
    viz::render_bar(&ranking, &bar_path)?;
    println!("✓ {} generated", bar_path.display());

    Ok(())
}
