use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use saju_base::{
    ALL_POSITIONS, CalculatorConfig, Saju, SajuChart, Script, SolarTerm, all_pillars, toggle,
    transliterate,
};
use saju_config::SajuConfig;
use saju_search::{
    ApproximateSolarTerms, BoundaryProvider, FixedBoundaries, SolarTermTable,
    chart_for_local_birth, saju_for_local_birth,
};
use saju_time::BirthInstant;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (Saju) calculator")]
struct Cli {
    /// Config file (TOML). Falls back to $SAJU_CONFIG, then built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date and time on the zone clock (YYYY-MM-DDThh:mm)
    date: String,
    /// Local-time correction in minutes for the day and hour pillars,
    /// e.g. -24. Overrides local_offset_minutes from the config
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i32>,
    /// Birth time unknown: disable the 23:30 day rollover
    #[arg(long)]
    no_time: bool,
    /// 입춘 already reached at the birth instant (requires --month-term)
    #[arg(long, requires = "month_term")]
    spring: Option<bool>,
    /// The month's governing term already reached (requires --spring)
    #[arg(long, requires = "spring")]
    month_term: Option<bool>,
    /// Solar-term table (TOML) instead of the configured boundary source
    #[arg(long, conflicts_with = "spring")]
    table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars with ohaeng and sipsin
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Full chart: sipsin, hidden stems, twelve stages and spirits per pillar
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Solar-term instants for a civil year (approximate model)
    Terms {
        /// Civil year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Zone offset in minutes. Overrides boundary.utc_offset_minutes
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
    },
    /// Convert stem/branch symbols between hanja and hangul
    Convert {
        /// Text containing stem/branch symbols
        text: String,
        /// Target script; defaults to the other script of the input
        #[arg(long, value_enum)]
        to: Option<ScriptArg>,
    },
    /// List the 60-pillar cycle from 甲子
    Cycle,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Hanja,
    Hangul,
}

impl From<ScriptArg> for Script {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Hanja => Script::Hanja,
            ScriptArg::Hangul => Script::Hangul,
        }
    }
}

#[derive(Serialize)]
struct PillarsReport {
    instant: BirthInstant,
    local_offset_minutes: i32,
    saju: Saju,
    ohaeng: String,
    sipsin: String,
    zodiac_animal: &'static str,
}

#[derive(Serialize)]
struct TermRow {
    term: SolarTerm,
    hangul: &'static str,
    hanja: &'static str,
    longitude_deg: f64,
    at: BirthInstant,
}

#[derive(Serialize)]
struct CycleRow {
    index: u8,
    hanja: String,
    hangul: String,
}

fn main() {
    let cli = Cli::parse();
    let config = SajuConfig::resolve(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    init_tracing(&config.log_filter);

    let result = match cli.command {
        Commands::Pillars { birth } => run_pillars(&birth, &config, cli.json),
        Commands::Chart { birth } => run_chart(&birth, &config, cli.json),
        Commands::Terms { year, utc_offset } => run_terms(year, utc_offset, &config, cli.json),
        Commands::Convert { text, to } => {
            let out = match to {
                Some(script) => transliterate(&text, script.into()),
                None => toggle(&text),
            };
            println!("{out}");
            Ok(())
        }
        Commands::Cycle => run_cycle(cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the configured filter. Logs go to stderr.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(saju_config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Zone-time birth instant and the local correction in minutes.
///
/// Term facts are looked up on the zone clock; the correction only reaches
/// the day and hour pillars.
fn birth_input(args: &BirthArgs, config: &SajuConfig) -> CliResult<(BirthInstant, i32)> {
    let instant: BirthInstant = args.date.parse()?;
    let offset = args.offset.unwrap_or(config.local_offset_minutes);
    let local = instant.with_offset_minutes(offset)?;
    if offset != 0 {
        debug!(%instant, %local, offset, "local time correction");
    }
    Ok((instant, offset))
}

fn calculator_config(args: &BirthArgs, config: &SajuConfig) -> CalculatorConfig {
    CalculatorConfig {
        track_time: config.calculator.track_time && !args.no_time,
    }
}

/// Explicit facts, then an explicit table, then the configured source.
fn boundary_provider(
    args: &BirthArgs,
    config: &SajuConfig,
) -> CliResult<Box<dyn BoundaryProvider>> {
    if let (Some(spring), Some(month_term)) = (args.spring, args.month_term) {
        return Ok(Box::new(FixedBoundaries::new(spring, month_term)));
    }
    if let Some(path) = &args.table {
        return Ok(Box::new(SolarTermTable::load(path)?));
    }
    Ok(config.build_provider()?)
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn compute_saju(args: &BirthArgs, config: &SajuConfig) -> CliResult<(BirthInstant, i32, Saju)> {
    let (instant, offset) = birth_input(args, config)?;
    let provider = boundary_provider(args, config)?;
    let calc = calculator_config(args, config);
    let saju = saju_for_local_birth(provider.as_ref(), &instant, offset, &calc)?;
    Ok((instant, offset, saju))
}

fn print_birth(instant: &BirthInstant, offset: i32) {
    if offset == 0 {
        println!("Birth:  {instant}");
    } else {
        println!("Birth:  {instant} (local correction {offset:+} min)");
    }
}

fn run_pillars(args: &BirthArgs, config: &SajuConfig, json: bool) -> CliResult<()> {
    let (instant, offset, saju) = compute_saju(args, config)?;
    if json {
        return print_json(&PillarsReport {
            instant,
            local_offset_minutes: offset,
            saju,
            ohaeng: saju.ohaeng().label(),
            sipsin: saju.sipsin().label(),
            zodiac_animal: saju.zodiac_animal(),
        });
    }

    print_birth(&instant, offset);
    for (pos, pillar) in ALL_POSITIONS.iter().zip(saju.pillars()) {
        println!("{:<6}  {}  {}", pos.hangul(), pillar.hanja(), pillar.hangul());
    }
    println!("오행:   {}", saju.ohaeng().label());
    println!("십신:   {}", saju.sipsin().label());
    println!("띠:     {}", saju.zodiac_animal());
    Ok(())
}

fn run_chart(args: &BirthArgs, config: &SajuConfig, json: bool) -> CliResult<()> {
    let (instant, offset) = birth_input(args, config)?;
    let provider = boundary_provider(args, config)?;
    let calc = calculator_config(args, config);
    let chart = chart_for_local_birth(provider.as_ref(), &instant, offset, &calc)?;
    if json {
        return print_json(&chart);
    }
    print_birth(&instant, offset);
    print_chart(&chart);
    Ok(())
}

fn print_chart(chart: &SajuChart) {
    for col in &chart.columns {
        let stem_sipsin = col
            .stem_sipsin
            .map(|s| s.label())
            .unwrap_or_else(|| "일간(日干)".to_string());
        let hidden: String = col.hidden_stems.iter().map(|s| s.hanja()).collect();
        println!(
            "{}  {} {}  {:<10} {:<10} 지장간 {:<4} {}({})  {}",
            col.position.hangul(),
            col.pillar.hanja(),
            col.pillar.hangul(),
            stem_sipsin,
            col.branch_sipsin.label(),
            hidden,
            col.twelve_stage.hangul(),
            col.twelve_stage.hanja(),
            col.twelve_spirit.hangul(),
        );
    }
    let counts = chart
        .element_counts
        .iter()
        .map(|(e, n)| format!("{}{n}", e.hangul()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("오행:   {} ({counts})", chart.ohaeng.label());
    println!("십신:   {}", chart.sipsin.label());
    println!("띠:     {}", chart.zodiac_animal);
}

fn run_terms(year: i32, utc_offset: Option<i32>, config: &SajuConfig, json: bool) -> CliResult<()> {
    let finder =
        ApproximateSolarTerms::new(utc_offset.unwrap_or(config.boundary.utc_offset_minutes));
    let rows: Vec<TermRow> = finder
        .terms_for_year(year)?
        .into_iter()
        .map(|(term, at)| TermRow {
            term,
            hangul: term.hangul(),
            hanja: term.hanja(),
            longitude_deg: term.longitude_deg(),
            at,
        })
        .collect();
    if json {
        return print_json(&rows);
    }
    for r in &rows {
        println!(
            "{} {}  {:<12} {:>5.0}°  {}",
            r.hangul,
            r.hanja,
            r.term.name(),
            r.longitude_deg,
            r.at
        );
    }
    Ok(())
}

fn run_cycle(json: bool) -> CliResult<()> {
    let rows: Vec<CycleRow> = all_pillars()
        .map(|p| CycleRow {
            index: p.sexagenary_index(),
            hanja: p.hanja(),
            hangul: p.hangul(),
        })
        .collect();
    if json {
        return print_json(&rows);
    }
    for r in &rows {
        println!("{:>2}  {}  {}", r.index, r.hanja, r.hangul);
    }
    Ok(())
}
