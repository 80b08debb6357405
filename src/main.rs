use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use scrobcli::{cli, config, error, types::Session};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Last.fm API
    Auth,

    /// Show a user profile
    User(UserOptions),

    /// List recently played tracks
    Tracks(TracksOptions),

    /// List friends of a user
    Friends(FriendsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    /// Username to look up instead of the authenticated account
    #[clap(long)]
    pub user: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Username to look up instead of the authenticated account
    #[clap(long)]
    pub user: Option<String>,

    /// Number of tracks to show
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct FriendsOptions {
    /// Username to look up instead of the authenticated account
    #[clap(long)]
    pub user: Option<String>,

    /// Number of friends to show
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let auth_result: Arc<Mutex<Option<Session>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&auth_result)).await;
        }
        Command::User(opt) => cli::show_user(opt.user).await,
        Command::Tracks(opt) => cli::list_tracks(opt.user, opt.limit).await,
        Command::Friends(opt) => cli::list_friends(opt.user, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
