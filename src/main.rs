use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use resume_match::config::AppConfig;
use resume_match::error::AppError;
use resume_match::screening::report::ScreeningReportView;
use resume_match::screening::{
    screening_router, CsvFileSink, DirectoryTextSource, ExtractorConfig, ReportSink,
    RequirementProfile, ScreeningService, ScreeningState, Vocabulary,
};
use resume_match::telemetry;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Resume Screening Engine",
    about = "Screen candidate résumés against a requirement profile, as a service or from the command line",
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
    /// Screen a directory of plain-text résumés and print the report
    Screen(ScreenArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// Directory containing one .txt résumé dump per candidate
    #[arg(long)]
    resume_dir: PathBuf,
    /// Vocabulary JSON mapping canonical labels to synonym variants
    #[arg(long)]
    vocabulary: PathBuf,
    /// Requirement profile JSON (required domain, tools, skills)
    #[arg(long)]
    requirement: PathBuf,
    /// Match threshold in percent (defaults to the configured value)
    #[arg(long)]
    threshold: Option<f64>,
    /// Report date stamp (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    generated_on: Option<NaiveDate>,
    /// Write one CSV row per candidate to this path
    #[arg(long)]
    csv_out: Option<PathBuf>,
    /// Include a per-candidate listing in the output
    #[arg(long)]
    list_candidates: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Screen(args) => run_screen(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let vocabulary = config
        .screening
        .vocabulary_path
        .as_ref()
        .map(Vocabulary::from_path)
        .transpose()?;
    let screening_state = Arc::new(ScreeningState {
        vocabulary,
        threshold: config.screening.match_threshold,
    });

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(screening_router(screening_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "resume screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let ScreenArgs {
        resume_dir,
        vocabulary,
        requirement,
        threshold,
        generated_on,
        csv_out,
        list_candidates,
    } = args;

    let vocabulary = Vocabulary::from_path(&vocabulary)?;
    let requirement = load_requirement(&requirement)?;
    let threshold = threshold.unwrap_or(config.screening.match_threshold);

    let service = ScreeningService::new(&vocabulary, ExtractorConfig::default(), threshold)?;
    let source = DirectoryTextSource::new(resume_dir);
    let report = service.screen_source(&source, &requirement)?;

    let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());
    let view = report.view(generated_on);

    render_screening_report(&view, list_candidates);

    if let Some(path) = csv_out {
        CsvFileSink::new(&path).deliver(&view)?;
        println!("\nCSV rows written to {}", path.display());
    }

    Ok(())
}

fn load_requirement(path: &Path) -> Result<RequirementProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let requirement = serde_json::from_str(&raw)?;
    Ok(requirement)
}

fn render_screening_report(view: &ScreeningReportView, list_candidates: bool) {
    println!("Résumé screening report");
    println!(
        "Generated {} (match threshold {}%)",
        view.generated_on, view.threshold
    );

    println!("\nTotals");
    println!("- Resumes processed: {}", view.summary.total_candidates);
    println!("- Matched: {}", view.summary.matched_count);
    println!(
        "- Average match: {:.2}%",
        view.summary.average_match_percentage
    );
    println!("{}", view.summary.headline);

    if !list_candidates {
        return;
    }

    if view.candidates.is_empty() {
        println!("\nCandidates: none");
        return;
    }

    println!("\nCandidates");
    for candidate in &view.candidates {
        let name = candidate.name.as_deref().unwrap_or("(no name)");
        let email = candidate.email.as_deref().unwrap_or("-");
        let experience_note = if candidate.experience_met {
            ""
        } else {
            " | below experience floor"
        };
        println!(
            "- {} | {} | {} | {:.2}%{}",
            candidate.document_id, name, email, candidate.match_percentage, experience_note
        );
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
