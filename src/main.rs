//! candidate-intake - runs a YAML answer sheet through the intake form.
//!
//! Each step is submitted in order. The first rejected step is printed as
//! JSON with its per-field errors and the process exits with status 1;
//! otherwise the final record is printed.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use candidate_intake::{
    adapters::{InMemoryRecordStore, RestCountriesDirectory},
    application::{
        AnswerSheet, AnswerSheetError, CountryLookup, FinalSubmitHandler, StartIntakeCommand,
        StartIntakeHandler, SubmitStepCommand, SubmitStepHandler,
    },
    config::{AppConfig, ConfigError, LoggingConfig, ValidationError},
    domain::foundation::DomainError,
    ports::{CountryLookupError, RecordStore},
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "candidate-intake", version, about = "Validate a candidate intake answer sheet")]
struct Args {
    /// YAML file with the answers, keyed by step number
    answers: PathBuf,

    /// ISO code of the phone prefix country (defaults to the configured dial code)
    #[arg(long, env = "CANDIDATE_INTAKE_PHONE_COUNTRY")]
    phone_country: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Answers(#[from] AnswerSheetError),

    #[error("country directory unavailable: {0}")]
    Directory(#[from] CountryLookupError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("step {0} was rejected")]
    Rejected(u8),

    #[error("step {0} could not be saved")]
    NotSaved(u8),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = run(args, config).await {
        error!(error = %e, "Intake run failed");
        std::process::exit(1);
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let json = logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!logging.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(json)
        .with(plain)
        .init();
}

async fn run(args: Args, config: AppConfig) -> Result<(), CliError> {
    config.validate()?;
    let answers = AnswerSheet::from_path(&args.answers)?;

    // Adapters
    let directory = RestCountriesDirectory::new(config.country.rest_countries())?;
    let lookup = CountryLookup::new(Arc::new(directory), config.country.popular_codes_list());
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());

    let start = StartIntakeHandler::new(
        lookup,
        store.clone(),
        config.country.default_dial_code.clone(),
    );
    let submit = SubmitStepHandler::new(store.clone());
    let finish = FinalSubmitHandler::new(store);

    let mut session = start.handle(StartIntakeCommand::default()).await.session;
    if let Some(iso) = &args.phone_country {
        session.select_country(iso)?;
    }

    let steps: Vec<u8> = session.schema().steps().iter().map(|s| s.number()).collect();
    for step in steps {
        let values = answers.step(step);
        let result = submit.handle(&mut session, SubmitStepCommand { step, values }).await?;
        if result.save.is_failed() {
            print_json(&result, args.pretty)?;
            return Err(CliError::NotSaved(step));
        }
        if !result.outcome.is_advanced() {
            print_json(&result, args.pretty)?;
            return Err(CliError::Rejected(step));
        }
        info!(step, save = ?result.save, "Step accepted");
    }

    let result = finish.handle(&session).await?;
    print_json(&result, args.pretty)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
