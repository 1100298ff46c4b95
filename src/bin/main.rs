//! Vitrine CLI - Explore an order dataset from the terminal
//!
//! Usage:
//!   vitrine overview [dataset.csv] [--from <date>] [--to <date>] [--categories <a,b>]
//!   vitrine detail [dataset.csv] --view <view> [...]
//!   vitrine categories [dataset.csv] [--from <date>] [--to <date>]
//!   vitrine validate [dataset.csv]
//!
//! Examples:
//!   vitrine overview dataset/all_data.csv --from 2017-01-01 --to 2017-12-31
//!   vitrine detail dataset/all_data.csv --view city-data --categories toys,books
//!   vitrine overview --default-selection --output json

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use vitrine::config::Settings;
use vitrine::dataset;
use vitrine::filter::{default_selection, DateRange, FilterParams};
use vitrine::render::{format_count, DetailView, TextRenderer};
use vitrine::session::{Dashboard, ReadySnapshot, Snapshot};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Vitrine - Order-analytics engine behind an e-commerce dashboard")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = vitrine::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary metrics and the daily trend for the selected filters
    Overview {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// One of the three on-demand detail views
    Detail {
        #[command(flatten)]
        filters: FilterArgs,

        /// Detail view to render
        #[arg(long)]
        view: ViewArg,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List the categories available under the date range
    Categories {
        /// Path to the dataset CSV (defaults to the configured path)
        file: Option<PathBuf>,

        /// Start of the date range (YYYY-MM-DD, defaults to the earliest order date)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD, defaults to the latest order date)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Load the dataset and report its shape without rendering anything
    Validate {
        /// Path to the dataset CSV (defaults to the configured path)
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Path to the dataset CSV (defaults to the configured path)
    file: Option<PathBuf>,

    /// Start of the date range (YYYY-MM-DD, defaults to the earliest order date)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD, defaults to the latest order date)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Selected categories; no selection means no restriction
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,

    /// Pre-select the first five categories, like the dashboard multi-select
    #[arg(long, conflicts_with = "categories")]
    default_selection: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    SalesTrend,
    CityData,
    ProductData,
}

impl From<ViewArg> for DetailView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::SalesTrend => DetailView::SalesTrend,
            ViewArg::CityData => DetailView::CityData,
            ViewArg::ProductData => DetailView::ProductData,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned text tables
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match Settings::load_or_default(&cli.config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Overview { filters, output } => cmd_overview(&settings, filters, output),
        Commands::Detail {
            filters,
            view,
            output,
        } => cmd_detail(&settings, filters, view.into(), output),
        Commands::Categories { file, from, to } => cmd_categories(&settings, file, from, to),
        Commands::Validate { file } => cmd_validate(&settings, file),
    }
}

/// Explicit path wins; otherwise the configured path with env expansion.
fn resolve_dataset(settings: &Settings, file: Option<PathBuf>) -> Result<PathBuf, ExitCode> {
    match file {
        Some(path) => Ok(path),
        None => match settings.dataset.resolved_path() {
            Ok(path) => Ok(PathBuf::from(path)),
            Err(e) => {
                eprintln!("Error resolving dataset path: {}", e);
                Err(ExitCode::FAILURE)
            }
        },
    }
}

fn open_dashboard(settings: &Settings, file: Option<PathBuf>) -> Result<Dashboard, ExitCode> {
    let path = resolve_dataset(settings, file)?;
    Dashboard::open(&path).map_err(|e| {
        eprintln!("Error loading dataset '{}': {}", path.display(), e);
        ExitCode::FAILURE
    })
}

/// Build filter parameters from the CLI selections, defaulting missing
/// date bounds to the dataset's own bounds. `None` means the dataset has
/// no rows at all.
fn build_params(
    dashboard: &Dashboard,
    filters: &FilterArgs,
) -> Result<Option<FilterParams>, ExitCode> {
    let Some((min, max)) = dashboard.dataset().date_bounds() else {
        return Ok(None);
    };

    let start = filters.from.unwrap_or(min);
    let end = filters.to.unwrap_or(max);
    let range = match DateRange::new(start, end) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    let params = if filters.default_selection {
        let options = dashboard.category_options(&range);
        FilterParams::new(range).with_categories(default_selection(&options))
    } else {
        FilterParams::new(range).with_categories(filters.categories.iter().cloned())
    };
    Ok(Some(params))
}

fn refresh(dashboard: &mut Dashboard, params: &FilterParams) -> Result<Snapshot, ExitCode> {
    dashboard.refresh(params).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    })
}

fn cmd_overview(settings: &Settings, filters: FilterArgs, output: OutputFormat) -> ExitCode {
    let renderer = TextRenderer::new(&settings.display.currency_label);
    let mut dashboard = match open_dashboard(settings, filters.file.clone()) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let params = match build_params(&dashboard, &filters) {
        Ok(Some(params)) => params,
        Ok(None) => {
            println!("{}", renderer.no_data());
            return ExitCode::SUCCESS;
        }
        Err(code) => return code,
    };

    match refresh(&mut dashboard, &params) {
        Ok(Snapshot::Ready(snapshot)) => {
            print_snapshot(&renderer, &snapshot, output, None);
            ExitCode::SUCCESS
        }
        Ok(Snapshot::NoData) => {
            println!("{}", renderer.no_data());
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

fn cmd_detail(
    settings: &Settings,
    filters: FilterArgs,
    view: DetailView,
    output: OutputFormat,
) -> ExitCode {
    let renderer = TextRenderer::new(&settings.display.currency_label);
    let mut dashboard = match open_dashboard(settings, filters.file.clone()) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let params = match build_params(&dashboard, &filters) {
        Ok(Some(params)) => params,
        Ok(None) => {
            println!("{}", renderer.no_data());
            return ExitCode::SUCCESS;
        }
        Err(code) => return code,
    };

    match refresh(&mut dashboard, &params) {
        Ok(Snapshot::Ready(snapshot)) => {
            print_snapshot(&renderer, &snapshot, output, Some(view));
            ExitCode::SUCCESS
        }
        Ok(Snapshot::NoData) => {
            println!("{}", renderer.no_data());
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

fn print_snapshot(
    renderer: &TextRenderer,
    snapshot: &ReadySnapshot,
    output: OutputFormat,
    view: Option<DetailView>,
) {
    match output {
        OutputFormat::Text => match view {
            Some(view) => println!("{}", renderer.detail(view, snapshot)),
            None => println!("{}", renderer.overview(snapshot)),
        },
        OutputFormat::Json => {
            let value = match view {
                None => json!({
                    "range": snapshot.range,
                    "summary": snapshot.summary,
                    "daily_sales": snapshot.aggregates.daily_sales,
                }),
                Some(DetailView::SalesTrend) => json!({
                    "daily_sales": snapshot.aggregates.daily_sales,
                }),
                Some(DetailView::CityData) => json!({
                    "top_cities": snapshot.aggregates.top_cities,
                    "bottom_cities": snapshot.aggregates.bottom_cities,
                }),
                Some(DetailView::ProductData) => json!({
                    "top_products": snapshot.aggregates.top_products,
                    "bottom_products": snapshot.aggregates.bottom_products,
                }),
            };
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("Error serializing output: {}", e),
            }
        }
    }
}

fn cmd_categories(
    settings: &Settings,
    file: Option<PathBuf>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> ExitCode {
    let dashboard = match open_dashboard(settings, file) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let Some((min, max)) = dashboard.dataset().date_bounds() else {
        println!("No categories: the dataset is empty.");
        return ExitCode::SUCCESS;
    };
    let range = match DateRange::new(from.unwrap_or(min), to.unwrap_or(max)) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = dashboard.category_options(&range);
    if options.is_empty() {
        println!("No categories in {} - {}.", range.start(), range.end());
    } else {
        println!("Categories in {} - {}:", range.start(), range.end());
        for category in &options {
            println!("  - {}", category);
        }
    }
    ExitCode::SUCCESS
}

fn cmd_validate(settings: &Settings, file: Option<PathBuf>) -> ExitCode {
    let path = match resolve_dataset(settings, file) {
        Ok(path) => path,
        Err(code) => return code,
    };
    let dataset = match dataset::load(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error loading dataset '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("OK: {}", path.display());
    println!("Rows: {}", format_count(dataset.len() as u64));
    match dataset.date_bounds() {
        Some((min, max)) => {
            println!("Date range: {} - {}", min, max);
            let range = DateRange::new(min, max).expect("bounds are ordered");
            let options = vitrine::filter::category_options(&dataset, &range);
            println!("Categories: {}", options.len());
        }
        None => println!("Date range: (empty dataset)"),
    }
    ExitCode::SUCCESS
}
