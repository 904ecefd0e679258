use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use daa_quiz::client::{spawn_poller, LeaderboardFetch, LeaderboardView};
use daa_quiz::config::{self, LEADERBOARD_POLL_INTERVAL};
use daa_quiz::context::FileNameStore;
use daa_quiz::data::{daa_questions, load_questions_from_json};
use daa_quiz::{server, tui, App, Question, QuizError, ScoreClient, ServerConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the score store
    #[arg(short, long, global = true, default_value = config::backend_url())]
    backend: String,

    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    /// File the display name is remembered in
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the quiz in the terminal (default)
    Play,
    /// Run the score store
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        /// Persist scores to this JSON file
        #[arg(long)]
        data_file: Option<PathBuf>,
        /// Origin allowed by CORS, or "*"
        #[arg(long)]
        allowed_origin: Option<String>,
    },
    /// Print the leaderboard
    Leaderboard {
        /// Keep printing every few seconds until interrupted
        #[arg(short, long)]
        watch: bool,
    },
    /// Remove every score from the store
    Clear,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);

    // Anything below error would draw over the TUI.
    let default_level = if matches!(command, Command::Play) { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let result = match command {
        Command::Serve {
            host,
            port,
            data_file,
            allowed_origin,
        } => serve(host, port, data_file, allowed_origin),
        Command::Play => with_runtime(play(cli.backend, cli.questions, cli.profile)),
        Command::Leaderboard { watch } => with_runtime(print_leaderboard(cli.backend, cli.questions, watch)),
        Command::Clear => with_runtime(clear(cli.backend)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn with_runtime<F>(future: F) -> Result<(), QuizError>
where
    F: std::future::Future<Output = Result<(), QuizError>>,
{
    tokio::runtime::Runtime::new()?.block_on(future)
}

fn serve(
    host: Option<String>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
    allowed_origin: Option<String>,
) -> Result<(), QuizError> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if data_file.is_some() {
        config.data_file = data_file;
    }
    if let Some(origin) = allowed_origin {
        config.allowed_origin = origin;
    }

    actix_web::rt::System::new().block_on(server::run(config))
}

fn load_questions(path: Option<PathBuf>) -> Result<Vec<Question>, QuizError> {
    match path {
        Some(path) => Ok(load_questions_from_json(path)?),
        None => Ok(daa_questions()),
    }
}

async fn play(backend: String, questions: Option<PathBuf>, profile: Option<PathBuf>) -> Result<(), QuizError> {
    let questions = load_questions(questions)?;
    let client = ScoreClient::new(&backend)?;
    let names = FileNameStore::new(profile.unwrap_or_else(config::default_profile_path));

    let app = App::new(questions, Box::new(names));
    tui::run(app, client).await
}

async fn print_leaderboard(backend: String, questions: Option<PathBuf>, watch: bool) -> Result<(), QuizError> {
    let total = load_questions(questions)?.len() as u32;
    let client = ScoreClient::new(&backend)?;

    if !watch {
        let entries = client.get_leaderboard().await?;
        print_board(Ok(entries), total);
        return Ok(());
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<LeaderboardFetch>();
    let poller = spawn_poller(client, LEADERBOARD_POLL_INTERVAL, tx);

    loop {
        tokio::select! {
            fetch = rx.recv() => match fetch {
                Some(fetch) => print_board(fetch, total),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    poller.abort();
    Ok(())
}

fn print_board(fetch: LeaderboardFetch, total: u32) {
    let mut view = LeaderboardView::new();
    view.apply(fetch);

    if let Some(err) = view.error() {
        println!("{}", err);
        return;
    }

    let rows = view.rows(None, total);
    if rows.is_empty() {
        println!("{}", daa_quiz::client::leaderboard::EMPTY_MESSAGE);
        return;
    }

    println!("{:<6}{:<24}{:<8}PERFORMANCE", "RANK", "NAME", "SCORE");
    for row in rows {
        println!(
            "{:<6}{:<24}{:<8}{}",
            row.rank,
            row.name,
            format!("{}/{}", row.score, total),
            row.performance.label()
        );
    }
    println!();
}

async fn clear(backend: String) -> Result<(), QuizError> {
    let client = ScoreClient::new(&backend)?;
    client.clear_leaderboard().await?;
    println!("Leaderboard cleared");
    Ok(())
}
