//! CLI structure and command definitions

use clap::{Args, Parser, Subcommand};
use merakictl_core::{Direction, TotalPages};
use serde_json::Value;

use crate::output;

/// Command-line client for the Meraki Dashboard API
#[derive(Parser, Debug)]
#[command(name = "merakictl")]
#[command(version, about = "Command-line client for the Meraki Dashboard API")]
#[command(long_about = "
Command-line client for the Meraki Dashboard API

Every Dashboard operation is available through `call`, by its snake_case,
kebab-case or camelCase name. Failed calls print {\"error\": \"...\"} and exit 1.

EXAMPLES:
    # Store an API key in a profile
    merakictl profile set work --api-key 0123456789abcdef --default

    # Or use the environment
    export MERAKI_DASHBOARD_API_KEY=0123456789abcdef

    # Look up a device
    merakictl call get_device Q2XX-XXXX-XXXX

    # List an organization's networks as a table
    merakictl call getOrganizationNetworks 549236 -o table

    # Filter output with JMESPath
    merakictl call get-organization-devices 549236 -q '[?model==`MR46`].serial'

    # Follow every page of network events
    merakictl call get_network_events L_1234 --param productType=wireless --total-pages all

For more help on a specific command, run:
    merakictl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "MERAKICTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "MERAKICTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// JMESPath query to filter output
    #[arg(long, short = 'q', global = true)]
    pub query: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON for API responses, tables for listings
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

impl OutputFormat {
    /// Concrete format, using `fallback` for `auto`
    pub fn resolve(self, fallback: output::OutputFormat) -> output::OutputFormat {
        match self {
            OutputFormat::Auto => fallback,
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Yaml => output::OutputFormat::Yaml,
            OutputFormat::Table => output::OutputFormat::Table,
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call a Dashboard operation by name
    #[command(visible_alias = "c")]
    #[command(after_help = "EXAMPLES:
    # Required arguments are positional, in the operation's declared order
    merakictl call get_network_client L_1234 k74272e

    # Optional parameters
    merakictl call get_organization_devices 549236 --param perPage=100 --param 'serials=[\"Q2XX-AAAA-AAAA\"]'

    # Request body fields from a file
    merakictl call update_device Q2XX-XXXX-XXXX --data @device.json

    # List arguments take JSON
    merakictl call create_organization_network 549236 HQ '[\"wireless\",\"switch\"]'
")]
    Call(CallArgs),

    /// Browse the operation catalog
    #[command(subcommand, visible_alias = "ops")]
    Operations(OperationsCommands),

    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    Profile(ProfileCommands),

    /// Show version information
    #[command(visible_alias = "ver")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Operation name (get_device, get-device or getDevice)
    pub operation: String,

    /// Required arguments in declared order; JSON arrays and objects are parsed
    pub arguments: Vec<String>,

    /// Optional parameter as key=value; the value is read as JSON when it parses
    #[arg(long = "param", short = 'P', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// JSON object of optional parameters (use @file to read from a file)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Pages to fetch for paginated operations (a count, or 'all')
    #[arg(long)]
    pub total_pages: Option<TotalPages>,

    /// Direction to follow pages in (next or prev)
    #[arg(long)]
    pub direction: Option<Direction>,
}

fn parse_param(pair: &str) -> Result<(String, Value), String> {
    merakictl_core::Options::parse_pair(pair)
}

#[derive(Subcommand, Debug)]
pub enum OperationsCommands {
    /// List operations
    #[command(visible_alias = "ls")]
    List {
        /// Only operations with this tag (devices, networks, wireless, ...)
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// Show one operation's parameters and pagination defaults
    Show {
        /// Operation name
        name: String,
    },

    /// List operation tags
    Tags,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all configured profiles
    #[command(visible_alias = "ls")]
    List,

    /// Show the path to the configuration file
    Path,

    /// Show details of a specific profile
    #[command(visible_alias = "get")]
    Show {
        /// Profile name to show
        name: String,
    },

    /// Set or create a profile
    #[command(visible_alias = "add")]
    #[command(after_help = "EXAMPLES:
    # Create a profile and make it the default
    merakictl profile set work --api-key 0123456789abcdef --default

    # Read the key from the environment when the profile is used
    merakictl profile set ci --api-key '${MERAKI_DASHBOARD_API_KEY}'

    # Point a profile at the China Dashboard
    merakictl profile set cn --api-key KEY --base-url https://api.meraki.cn/api/v1
")]
    Set {
        /// Profile name
        name: String,

        /// Dashboard API key
        #[arg(long)]
        api_key: String,

        /// API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Application identifier appended to the User-Agent
        #[arg(long)]
        caller: Option<String>,

        /// Organization ID to remember with this profile
        #[arg(long)]
        organization_id: Option<String>,

        /// Store the API key in the OS keyring
        #[cfg(feature = "secure-storage")]
        #[arg(long)]
        use_keyring: bool,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Remove a profile
    #[command(visible_alias = "rm")]
    Remove {
        /// Profile name to remove
        name: String,
    },

    /// Set the default profile
    #[command(visible_alias = "def")]
    Default {
        /// Profile name
        name: String,
    },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
