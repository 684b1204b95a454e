use clap::Parser;
use htn_grounder::{
    error::GroundingError,
    grounding::ground,
    parsed_types::{Domain, Problem},
    search::{
        search_engines::{SearchEngineName, SearchResult, TerminationCondition},
        validate, Verbosity,
    },
};
use serde::de::DeserializeOwned;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Ground an HTN domain and problem, then search for a plan.
struct Cli {
    #[arg(help = "The domain file (.json or .ron)")]
    domain: Option<PathBuf>,
    #[arg(help = "The problem file (.json or .ron)")]
    problem: Option<PathBuf>,
    #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Dfs
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "The time limit of the search, e.g. 30s or 5min",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "The memory limit of the search in MB",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(help = "Stop after grounding and print the encoded problem's size", long)]
    ground_only: bool,
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Ron {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Grounding(#[from] GroundingError),
}

/// Reads a file as RON if its extension says so, as JSON otherwise.
fn load<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|extension| extension == "ron") {
        ron::from_str(&text).map_err(|source| LoadError::Ron {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, LoadError> {
    let domain: Option<Domain> = cli.domain.as_deref().map(load).transpose()?;
    let problem: Option<Problem> = cli.problem.as_deref().map(load).transpose()?;
    let encoded = ground(domain.as_ref(), problem.as_ref())?;

    if let Err(reason) = encoded.check_solvable() {
        info!(%reason, "grounding proved the problem unsolvable");
    }
    if cli.ground_only {
        println!("Fluents: {}", encoded.fluents().len());
        println!("Tasks: {}", encoded.tasks().len());
        println!("Actions: {}", encoded.actions().len());
        println!("Methods: {}", encoded.methods().len());
        println!("Totally ordered: {}", encoded.is_totally_ordered());
        return Ok(ExitCode::SUCCESS);
    }

    let mut termination_condition = TerminationCondition::new(cli.time_limit, cli.memory_limit_mb);
    let mut engine = cli.search_engine_name.create();
    let (result, _) = engine.search(&encoded, &mut termination_condition);
    termination_condition.finalise();

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            if let Err(e) = validate(&plan, &encoded) {
                info!("plan is invalid: {}", e);
                return Ok(ExitCode::FAILURE);
            }
            info!("plan is valid");
            info!(
                plan_length = plan.num_actions(),
                decompositions = plan.len() - plan.num_actions()
            );

            println!("Plan found:");
            println!("{}", plan.to_string(&encoded));
            println!("Plan length: {}", plan.num_actions());

            if let Some(path) = cli.plan {
                std::fs::write(&path, plan.to_decomposition_string(&encoded))
                    .map_err(|source| LoadError::Io { path, source })?;
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            Ok(ExitCode::FAILURE)
        }
    }
}
