use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "repo-favorites")]
#[command(
    about = "Repo Favorites - Search GitHub repositories as you type and keep a favorites list"
)]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// GitHub access token (optional, raises the search rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Quiet period in milliseconds after the last keystroke
    #[arg(long, env = "SEARCH_DEBOUNCE_MS", default_value_t = 1000)]
    pub debounce_ms: u64,

    /// Number of repositories requested per search
    #[arg(long, env = "SEARCH_PER_PAGE", default_value_t = 5)]
    pub per_page: u8,

    /// Literal text appended to every query
    #[arg(long, env = "SEARCH_QUERY_SUFFIX", default_value = "-", allow_hyphen_values = true)]
    pub query_suffix: String,

    /// Send the query exactly as typed
    #[arg(long)]
    pub no_query_suffix: bool,

    /// Request timeout in seconds (no explicit timeout by default)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

/// One line read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// New full contents of the search box
    KeyUp(String),
    /// Click the n-th result (1-based)
    Pick(usize),
    /// Click the removal control of the n-th favorite (1-based)
    Remove(usize),
    /// Click the n-th favorite anywhere but its removal control
    Open(usize),
    Show,
    Stats,
    Quit,
    Unknown(String),
}

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        // "::" escapes a search text that itself starts with a colon
        if let Some(text) = line.strip_prefix("::") {
            return InputCommand::KeyUp(format!(":{}", text));
        }

        let Some(command) = line.strip_prefix(':') else {
            return InputCommand::KeyUp(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let index = parts.next().and_then(|s| s.parse::<usize>().ok());

        match (name, index) {
            ("pick", Some(n)) if n > 0 => InputCommand::Pick(n),
            ("remove", Some(n)) if n > 0 => InputCommand::Remove(n),
            ("open", Some(n)) if n > 0 => InputCommand::Open(n),
            ("show", _) => InputCommand::Show,
            ("stats", _) => InputCommand::Stats,
            ("quit", _) | ("q", _) => InputCommand::Quit,
            _ => InputCommand::Unknown(line.to_string()),
        }
    }
}
