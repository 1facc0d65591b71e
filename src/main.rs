use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gratuity_engine::api::{AppState, create_router};
use gratuity_engine::config::{AppConfig, RulesLoader};
use gratuity_engine::error::EngineResult;
use gratuity_engine::presentation::{GratuityForm, ReportWriter, ResultPipeline, SummaryWriter};
use gratuity_engine::telemetry;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "gratuity-engine",
    about = "Calculate UAE end-of-service gratuity from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate a single gratuity and print the breakdown
    Calculate(CalculateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Directory containing rules.yaml (defaults to the built-in UAE rules)
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Basic monthly salary
    #[arg(long, allow_hyphen_values = true)]
    basic_salary: String,
    /// Years of service (decimals allowed)
    #[arg(long, allow_hyphen_values = true)]
    years: String,
    /// Additional months of service (clamped to 0-11)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    months: String,
    /// Monthly allowances to include in the salary basis
    #[arg(long, allow_hyphen_values = true)]
    allowances: Option<String>,
    /// Directory containing rules.yaml (defaults to the built-in UAE rules)
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> EngineResult<()> {
    match Cli::parse().into_command() {
        Command::Serve(args) => run_server(args).await,
        Command::Calculate(args) => run_calculate(args),
    }
}

impl Cli {
    /// The selected subcommand, falling back to `serve` when none is given.
    fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

async fn run_server(args: ServeArgs) -> EngineResult<()> {
    let mut config = AppConfig::load()?;
    apply_serve_overrides(&mut config, args);

    telemetry::init(&config.telemetry)?;

    let rules = RulesLoader::load_or_builtin(config.rules_dir.as_ref())?.into_rules();
    info!(rules = %rules.metadata.code, currency = %rules.currency, "Gratuity rules loaded");

    let app = create_router(AppState::new(rules));
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "Gratuity engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Command-line flags win over environment settings.
fn apply_serve_overrides(config: &mut AppConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(rules) = args.rules {
        config.rules_dir = Some(rules);
    }
}

fn run_calculate(args: CalculateArgs) -> EngineResult<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let rules_dir = rules_dir_for(&args, &config);
    let rules = RulesLoader::load_or_builtin(rules_dir.as_ref())?.into_rules();
    let input = form_from_args(&args).sanitize();

    let currency = rules.currency.clone();
    let mut pipeline = ResultPipeline::new(rules)
        .with_consumer(ReportWriter::new(std::io::stdout(), currency.as_str()))
        .with_consumer(SummaryWriter::new(std::io::stdout(), currency.as_str()));

    match pipeline.run(&input) {
        Ok(result) => {
            info!(
                total_gratuity = %result.total_gratuity,
                was_capped = result.was_capped,
                "Calculation completed"
            );
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "Calculation failed");
            Err(err)
        }
    }
}

/// `--rules` first, then `GRATUITY_RULES_DIR`; `None` selects the built-in rules.
fn rules_dir_for(args: &CalculateArgs, config: &AppConfig) -> Option<PathBuf> {
    args.rules.clone().or_else(|| config.rules_dir.clone())
}

/// Maps the raw flag values onto the form so they are sanitized the same way.
fn form_from_args(args: &CalculateArgs) -> GratuityForm {
    GratuityForm {
        basic_salary: args.basic_salary.clone(),
        years_worked: args.years.clone(),
        months_worked: args.months.clone(),
        include_allowances: args.allowances.is_some(),
        allowances: args.allowances.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gratuity_engine::calculation::compute_with_rules;
    use gratuity_engine::config::GratuityRules;
    use gratuity_engine::error::EngineError;
    use gratuity_engine::presentation::ResultView;
    use rust_decimal::Decimal;

    fn parse(argv: &[&str]) -> Command {
        Cli::try_parse_from(argv)
            .expect("arguments parse")
            .into_command()
    }

    fn calculate_args(argv: &[&str]) -> CalculateArgs {
        match parse(argv) {
            Command::Calculate(args) => args,
            other => panic!("expected calculate, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_runs_server_with_defaults() {
        match parse(&["gratuity-engine"]) {
            Command::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
                assert!(args.rules.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn serve_flags_override_environment() {
        let mut config = AppConfig::from_lookup(|key| match key {
            "GRATUITY_PORT" => Some("4000".to_string()),
            "GRATUITY_RULES_DIR" => Some("/etc/gratuity".to_string()),
            _ => None,
        })
        .expect("config builds");

        let args = match parse(&["gratuity-engine", "serve", "--port", "8080"]) {
            Command::Serve(args) => args,
            other => panic!("expected serve, got {other:?}"),
        };
        apply_serve_overrides(&mut config, args);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.rules_dir, Some(PathBuf::from("/etc/gratuity")));
    }

    #[test]
    fn allowances_flag_enables_allowances_and_months_clamp() {
        let args = calculate_args(&[
            "gratuity-engine",
            "calculate",
            "--basic-salary",
            "10000",
            "--years",
            "2",
            "--months",
            "24",
            "--allowances",
            "500",
        ]);
        let input = form_from_args(&args).sanitize();

        assert!(input.include_allowances);
        assert_eq!(input.allowances, Decimal::from(500));
        assert_eq!(input.months_worked, 11);

        let result = compute_with_rules(&input, &GratuityRules::uae()).expect("calculates");
        let view = ResultView::from_result(&result, "AED");
        assert_eq!(view.service_period, "2.92 years");
        assert_eq!(view.total_gratuity, "AED 21,437.50");
    }

    #[test]
    fn allowances_off_without_flag() {
        let args = calculate_args(&[
            "gratuity-engine",
            "calculate",
            "--basic-salary",
            "10000",
            "--years",
            "3",
        ]);
        let input = form_from_args(&args).sanitize();

        assert!(!input.include_allowances);
        assert_eq!(input.allowances, Decimal::ZERO);
        assert_eq!(input.months_worked, 0);
    }

    #[test]
    fn negative_salary_parses_then_sanitizes_to_zero() {
        let args = calculate_args(&[
            "gratuity-engine",
            "calculate",
            "--basic-salary",
            "-5",
            "--years",
            "3",
        ]);
        assert_eq!(args.basic_salary, "-5");

        let input = form_from_args(&args).sanitize();
        assert_eq!(input.basic_salary, Decimal::ZERO);

        let err = compute_with_rules(&input, &GratuityRules::uae()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "basic_salary"
        ));
    }

    #[test]
    fn calculate_requires_salary_and_years() {
        assert!(Cli::try_parse_from(["gratuity-engine", "calculate", "--years", "3"]).is_err());
        assert!(
            Cli::try_parse_from(["gratuity-engine", "calculate", "--basic-salary", "10"]).is_err()
        );
    }

    #[test]
    fn rules_flag_wins_over_environment() {
        let config = AppConfig::from_lookup(|key| {
            (key == "GRATUITY_RULES_DIR").then(|| "/etc/gratuity".to_string())
        })
        .expect("config builds");

        let with_flag = calculate_args(&[
            "gratuity-engine",
            "calculate",
            "--basic-salary",
            "1",
            "--years",
            "1",
            "--rules",
            "config/uae",
        ]);
        assert_eq!(
            rules_dir_for(&with_flag, &config),
            Some(PathBuf::from("config/uae"))
        );

        let without_flag = calculate_args(&[
            "gratuity-engine",
            "calculate",
            "--basic-salary",
            "1",
            "--years",
            "1",
        ]);
        assert_eq!(
            rules_dir_for(&without_flag, &config),
            Some(PathBuf::from("/etc/gratuity"))
        );
    }
}
