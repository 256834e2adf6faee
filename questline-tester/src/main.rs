mod common;
mod live;
mod logic;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use questline_core::{DEFAULT_API_BASE, DEMO_USER_ID, Endpoints};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use common::scenario::{expand_scenarios, find_scenario, list_scenarios};
use live::{LiveCtx, ReqwestBackend, run_live};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Scripted quest-session scenarios (fast, no network)
    Logic,
    /// Checks against a running quest service
    Live,
    /// Run both logic and live checks
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "questline-tester", version)]
#[command(about = "Automated QA for Questline - scripted session scenarios and live backend checks")]
struct Args {
    /// Test mode: logic (fast), live (needs the quest service), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for the whole catalog)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Iterations per logic scenario; each one starts a day later
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Live-specific options
    /// Origin of the quest service
    #[arg(long, env = "QUESTLINE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Customer id the live checks run as
    #[arg(long, env = "QUESTLINE_USER_ID", default_value = DEMO_USER_ID)]
    user_id: String,

    /// Per-request timeout for live checks, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);

    let mut all_results = run_logic_scenarios(&args, &scenarios, Utc::now());
    all_results.extend(run_live_scenarios(&args, &scenarios).await?);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧭 Questline Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    start: DateTime<Utc>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(start, args.verbose);
    for scenario_name in scenarios {
        match find_scenario(scenario_name) {
            Some(info) if info.support.logic => {
                results.extend(tester.run_scenario(info.key, args.iterations.max(1)));
            }
            Some(_) => eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            ),
            None => eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow()),
        }
    }
    results
}

async fn run_live_scenarios(args: &Args, scenarios: &[String]) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Live | TestMode::Both) {
        return Ok(results);
    }

    println!("{}", "🌐 Running Live Checks".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let endpoints = Endpoints::new(&args.api_base);
    println!("Target: {} as user {}", endpoints.base(), args.user_id);
    let backend = ReqwestBackend::new(endpoints, Duration::from_secs(args.timeout_secs))
        .context("building HTTP client")?;
    let ctx = LiveCtx {
        backend,
        user_id: args.user_id.clone(),
        verbose: args.verbose,
    };

    for scenario_name in scenarios {
        let Some(info) = find_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if !info.support.live {
            if args.mode == TestMode::Live {
                eprintln!(
                    "⚠️  Scenario {} has no live check",
                    scenario_name.yellow()
                );
            }
            continue;
        }

        let started = Instant::now();
        let Some(outcome) = run_live(info.key, &ctx).await else {
            continue;
        };
        let elapsed = started.elapsed();
        let failures = match outcome {
            Ok(()) => {
                println!("✅ [live] {} - {:?}", info.key.green(), elapsed);
                Vec::new()
            }
            Err(err) => {
                eprintln!("❌ [live] {} - {:?}: {:#}", info.key.red(), elapsed, err);
                vec![format!("{err:#}")]
            }
        };
        results.push(ScenarioResult::from_iterations(
            &format!("{} (live)", info.key),
            1,
            failures,
            vec![elapsed],
        ));
    }
    Ok(results)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                logic::reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Questline Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
