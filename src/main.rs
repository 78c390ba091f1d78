use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use u_lineup::pool::load_pool;
use u_lineup::{logging, report, LineupOptimizer, RunConfig};

#[derive(Debug, Parser)]
#[command(name = "u-lineup")]
#[command(about = "Find the highest-projected DFS lineups under a salary cap")]
struct Cli {
    /// TOML run configuration.
    #[arg(long)]
    config: PathBuf,

    /// Override the salary table path.
    #[arg(long)]
    salaries: Option<PathBuf>,

    /// Override the projection table path.
    #[arg(long)]
    projections: Option<PathBuf>,

    /// Override the salary budget.
    #[arg(long)]
    budget: Option<u64>,

    /// Override the number of lineups to print.
    #[arg(long)]
    lineups: Option<usize>,

    /// Override the excluded player names.
    #[arg(long, value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Override the slot labels, e.g. `QB,RB,RB,WR,WR,WR,TE,FLEX,DST`.
    #[arg(long, value_delimiter = ',')]
    slots: Option<Vec<String>>,

    /// Override the flex-eligible positions, e.g. `RB,WR`.
    #[arg(long, value_delimiter = ',')]
    flex: Option<Vec<String>>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

impl Cli {
    fn apply(self, mut config: RunConfig) -> RunConfig {
        if let Some(p) = self.salaries {
            config.salaries = p;
        }
        if let Some(p) = self.projections {
            config.projections = p;
        }
        if let Some(b) = self.budget {
            config.budget = b;
        }
        if let Some(k) = self.lineups {
            config.lineups = k;
        }
        if let Some(names) = self.exclude {
            config.exclude = names;
        }
        if let Some(slots) = self.slots {
            config.slots = slots;
        }
        if let Some(flex) = self.flex {
            config.flex = flex;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = RunConfig::from_file(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;
    let config = cli.apply(config);
    config.validate().context("invalid run configuration")?;
    tracing::debug!("Run config: {:?}", config);

    let template = config.template()?;

    let pool = load_pool(&config.salaries, &config.projections).with_context(|| {
        format!(
            "loading {} and {}",
            config.salaries.display(),
            config.projections.display()
        )
    })?;

    let result = LineupOptimizer::run_with_stats(&pool, &template, &config.search_config())?;
    tracing::info!(
        "Searched {} combinations over {} players in {} ms",
        result.stats.combinations,
        result.stats.filtered_pool_size,
        result.stats.elapsed_ms
    );

    print!("{}", report::render(&result.lineups));
    Ok(())
}
