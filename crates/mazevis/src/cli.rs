use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mazevis_core::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mazevis")]
#[command(author, version, about)]
#[command(long_about = "Animated breadth-first and depth-first maze solving.\n\n\
    Each maze is searched with every configured algorithm; the visited cells \
    are revealed in order, then the path from A to B is traced.\n\n\
    Examples:\n  \
    mazevis                          Animate laberinto_1..3.in.txt\n  \
    mazevis a.txt b.txt              Animate the given mazes\n  \
    mazevis maze.txt -a dfs          Only show depth-first search\n  \
    mazevis solve maze.txt           Print traversal orders and paths\n  \
    mazevis solve --format json      Same, as JSON")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Maze files to animate (defaults to laberinto_1.in.txt .. laberinto_3.in.txt)
    pub files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Algorithm to show (repeat to set the cycle order: -a dfs -a bfs)
    #[arg(short, long = "algorithm", global = false)]
    pub algorithms: Vec<Algorithm>,

    /// Start on a specific maze (1-indexed)
    #[arg(long, global = false)]
    pub maze: Option<usize>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print traversal orders and paths without opening a window
    Solve {
        /// Maze files to solve (defaults to laberinto_1.in.txt .. laberinto_3.in.txt)
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. animation.hold_ms, animation.algorithms, display.theme)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Solve { files, format }) => crate::commands::solve::run(files, format),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => crate::app::run(crate::app::LaunchOptions {
                files: self.files,
                algorithms: self.algorithms,
                start_maze: self.maze,
            }),
        }
    }
}
