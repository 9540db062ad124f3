//! services/client/src/bin/trip.rs

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client_lib::{
    adapters::navigator::command_for,
    commands::{self, Outcome},
    config::Config,
    error::ClientError,
    state::AppState,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trip_planner_core::domain::{LoginRequest, Pace, Route};
use trip_planner_core::planner::Handoff;
use trip_planner_core::validation::SignupForm;
use trip_planner_core::wizard::{CreationMethod, TripForm, WizardStage};

#[derive(Parser)]
#[command(name = "trip", version, about = "AI Trip terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "TRIP_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, env = "TRIP_PASSWORD_CONFIRM", hide_env_values = true)]
        password_confirm: String,
    },
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TRIP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show whether a session is active
    Status,
    /// Plan a new trip
    Plan {
        #[arg(long)]
        title: String,
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Return date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        region: String,
        #[arg(long, default_value = "")]
        style: String,
        /// slow, normal or fast
        #[arg(long, default_value = "normal")]
        pace: Pace,
        /// ai or map
        #[arg(long, default_value = "ai")]
        method: CreationMethod,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    debug!(api = %config.api_base_url, ai = %config.ai_service_url, "Configuration loaded");

    // --- 2. Wire Adapters & Run the Command ---
    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: Config) -> Result<(), ClientError> {
    let state = AppState::build(config)?;

    match command {
        Command::Signup {
            email,
            name,
            password,
            password_confirm,
        } => {
            let form = SignupForm {
                email,
                password,
                password_confirm,
                name,
            };
            let user = commands::signup(&state, &form).await?;
            println!(
                "{}님, 가입이 완료되었습니다. `{}`로 로그인하세요.",
                user.name,
                command_for(Route::Login)
            );
        }
        Command::Login { email, password } => {
            commands::login(&state, &LoginRequest { email, password }).await?;
            println!("로그인되었습니다.");
        }
        Command::Logout => {
            commands::logout(&state).await;
            println!("로그아웃되었습니다.");
        }
        Command::Status => {
            let session = commands::status(&state).await;
            if session.is_logged_in {
                println!("로그인 상태입니다.");
            } else {
                println!(
                    "로그인되어 있지 않습니다. `{}`를 실행하세요.",
                    command_for(Route::Login)
                );
            }
        }
        Command::Plan {
            title,
            start,
            end,
            region,
            style,
            pace,
            method,
        } => {
            let form = TripForm {
                title,
                start_date: Some(start),
                end_date: Some(end),
                region,
                style,
                pace,
            };
            match commands::plan(&state, form, method).await? {
                Outcome::Redirected(route) => {
                    println!(
                        "로그인이 필요합니다. `{}`를 먼저 실행하세요.",
                        command_for(route)
                    );
                }
                Outcome::Done(handoff) => print_handoff(&handoff),
            }
        }
    }

    debug!("Command finished");
    Ok(())
}

fn print_handoff(handoff: &Handoff) {
    let trip = handoff.trip();
    println!(
        "[{}] 여행 #{} '{}' ({} ~ {}, {})",
        WizardStage::Create.label(),
        trip.id,
        trip.title,
        trip.start_date,
        trip.end_date,
        trip.region
    );

    match handoff {
        Handoff::Ai {
            recommendations, ..
        } => {
            for place in &recommendations.recommendations {
                println!(
                    "  - {} ({:.1}): {}",
                    place.place, place.rating, place.description
                );
            }
            if !recommendations.message.is_empty() {
                println!("{}", recommendations.message);
            }
        }
        Handoff::Map { .. } => {
            println!("지도에서 일정을 직접 구성하세요.");
        }
    }
}
