use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ebalarm")]
#[command(about = "Generate EasyBuilder Pro alarm import tables from PLC symbol exports")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.ebalarm)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a symbol export and report the alarms found
    Parse {
        /// Symbol export file
        input: PathBuf,

        /// Export format (codesys, omron-sysmac). Default: last used
        #[arg(short, long)]
        source: Option<String>,

        /// Print alarms as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a symbol export and write the alarm import spreadsheet
    Export {
        /// Symbol export file
        input: PathBuf,

        /// Output spreadsheet (default: input with .xlsx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PLC name used as alarm device. Default: general.plc_name
        #[arg(short, long)]
        plc: Option<String>,

        /// Export format (codesys, omron-sysmac). Default: last used
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Manage alarm categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List configured categories
    List {
        /// Include unused slots
        #[arg(short, long)]
        all: bool,
    },

    /// Show one category slot
    Show {
        /// Slot number (0-255)
        slot: usize,
    },

    /// Create or update a category slot
    Set {
        /// Slot number (0-255), lower slots win
        slot: usize,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Regex matched against symbol names (empty disables the slot)
        #[arg(long)]
        filter: Option<String>,

        /// Background color ("r,g,b" or "#rrggbb")
        #[arg(long)]
        bg: Option<String>,

        /// Foreground color ("r,g,b" or "#rrggbb")
        #[arg(long)]
        fg: Option<String>,
    },

    /// Reset a slot to its defaults
    Clear {
        /// Slot number (0-255)
        slot: usize,
    },

    /// Load the builtin presets into the first slots
    Preset {
        /// Overwrite slots that are already in use
        #[arg(short, long)]
        force: bool,
    },

    /// Show which category a symbol name falls into
    Test {
        /// Symbol name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., general.plc_name)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., general.plc_name)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with default template
    Init,
}
