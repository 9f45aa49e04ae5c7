//! CLI Adapter.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::api::{self, ConfigKind, GogsOptions, NexusOptions};
use crate::domain::{AppError, Credentials, PollTiming, WorkdirRetention};

const DEFAULT_CONFIG_FILE: &str = "examples/configFile.json";

#[derive(Parser)]
#[command(name = "grid-init")]
#[command(version)]
#[command(
    about = "Bootstrap Gogs and Nexus servers from declarative configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install Gogs and create its organizations and repositories
    Gogs {
        /// Configuration document
        #[arg(long, env = "GOGS_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Gogs base URL
        #[arg(long, env = "GOGS_HOST", default_value = "http://localhost:8181")]
        host: String,
        /// Repository cloned for danta-aem-demo content
        #[arg(
            long,
            env = "GOGS_DEMO_REPO_URL",
            default_value = "git@github.com:xumak-grid/demo.git"
        )]
        demo_repo_url: String,
        /// Leave seeding working directories on disk
        #[arg(
            long,
            env = "GRID_INIT_KEEP_WORKDIRS",
            value_parser = clap::builder::BoolishValueParser::new()
        )]
        keep_workdirs: bool,
        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Create Nexus hosted, proxy and group repositories
    Nexus {
        /// Configuration document
        #[arg(long, env = "NEXUS_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Nexus base URL
        #[arg(long, env = "NEXUS_HOST", default_value = "http://localhost:8081")]
        host: String,
        #[arg(long, env = "NEXUS_USER", default_value = "admin")]
        user: String,
        #[arg(long, env = "NEXUS_PASS", default_value = "admin123", hide_env_values = true)]
        password: String,
        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Check a configuration document without contacting any server
    Validate {
        kind: Target,
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Gogs,
    Nexus,
}

#[derive(Args)]
struct TimingArgs {
    /// Seconds to wait for the server to become ready
    #[arg(long, env = "GRID_INIT_TIMEOUT", default_value_t = 60,
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
    /// Seconds between readiness probes
    #[arg(long, env = "GRID_INIT_POLL_INTERVAL", default_value_t = 3,
          value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval: u64,
    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "GRID_INIT_REQUEST_TIMEOUT", default_value_t = 5,
          value_parser = clap::value_parser!(u64).range(1..))]
    request_timeout: u64,
}

impl TimingArgs {
    fn poll_timing(&self) -> PollTiming {
        PollTiming {
            interval: Duration::from_secs(self.poll_interval),
            deadline: Duration::from_secs(self.timeout),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Gogs { config, host, demo_repo_url, keep_workdirs, timing } => {
            let retention =
                if keep_workdirs { WorkdirRetention::Keep } else { WorkdirRetention::Remove };
            let options = GogsOptions {
                config_path: config,
                host,
                demo_repo_url,
                retention,
                timing: timing.poll_timing(),
                request_timeout: Duration::from_secs(timing.request_timeout),
            };
            api::bootstrap_gogs(&options).map(|report| report.log_summary())
        }
        Commands::Nexus { config, host, user, password, timing } => {
            let options = NexusOptions {
                config_path: config,
                host,
                credentials: Credentials::new(user, password),
                timing: timing.poll_timing(),
                request_timeout: Duration::from_secs(timing.request_timeout),
            };
            api::bootstrap_nexus(&options).map(|report| report.log_summary())
        }
        Commands::Validate { kind, config } => {
            let kind = match kind {
                Target::Gogs => ConfigKind::Gogs,
                Target::Nexus => ConfigKind::Nexus,
            };
            api::validate_config(kind, &config).map(|_| {
                println!("✅ {} is valid", config.display());
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
