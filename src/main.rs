//! portal-rbac - inspect and validate the portal access policy
//!
//! Answers the same questions the UI asks (module tiers, route guards,
//! navigation) against the built-in tables or a policy file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use portal_rbac::auth::rbac::{AccessLevel, AccessPolicy, RbacSystem};
use portal_rbac::config::{Config, ConfigOverrides, LoggingOverrides, RbacOverrides};
use portal_rbac::config::validation::validate_policy;
use portal_rbac::utils::logging::{LogLevel, init_logging};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(
    name = "portal-rbac",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Inspect and validate the portal access policy"
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, short, env = "PORTAL_RBAC_CONFIG")]
    config: Option<PathBuf>,

    /// Policy file overriding the configured one
    #[arg(long, short)]
    policy: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Settings given as flags; absent flags leave the loaded value alone
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rbac: RbacOverrides {
                policy_file: self.policy.clone(),
                ..Default::default()
            },
            logging: LoggingOverrides {
                level: self.log_level,
                json: self.json_logs.then_some(true),
            },
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the registry entry a role resolves to
    Role { role: String },
    /// Show a role's access tiers on a module
    Module { role: String, module: String },
    /// Decide route access for a role
    Route { role: String, path: String },
    /// Print the navigation menu for a role
    Nav { role: String },
    /// List the modules a role manages
    Managed { role: String },
    /// Best access level on every module
    Matrix { role: String },
    /// Validate configuration and policy
    Check,
    /// Print the effective policy (YAML unless --json)
    Dump {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ModuleReport<'a> {
    role: &'a str,
    module: &'a str,
    base: bool,
    management: bool,
    approval: bool,
    level: AccessLevel,
}

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging.level, config.logging.json) {
        eprintln!("Warning: {}", e);
    }

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let env_overrides =
        ConfigOverrides::from_env().context("invalid PORTAL_RBAC_* environment")?;
    let base = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };

    // File, then environment, then flags
    let config = base.merge(env_overrides).merge(cli.overrides());
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    let rbac = match command {
        Command::Check => return check(config),
        _ => RbacSystem::new(&config.rbac).context("failed to build policy engine")?,
    };
    debug!("Running {:?}", command);

    match command {
        Command::Role { role } => print_json(rbac.get_role_info(&role))?,
        Command::Module { role, module } => print_json(&ModuleReport {
            role: &role,
            module: &module,
            base: rbac.has_base_access(&role, &module),
            management: rbac.has_management_access(&role, &module),
            approval: rbac.has_approval_access(&role, &module),
            level: rbac.get_user_access_level(&role, &module),
        })?,
        Command::Route { role, path } => print_json(&rbac.get_route_access(&role, &path))?,
        Command::Nav { role } => print_json(&rbac.get_navigation_items(&role))?,
        Command::Managed { role } => print_json(&rbac.get_user_managed_modules(&role))?,
        Command::Matrix { role } => print_json(&rbac.get_access_summary(&role))?,
        Command::Dump { json: false } => print!("{}", rbac.policy().to_yaml()?),
        Command::Dump { json: true } => println!("{}", rbac.policy().to_json()?),
        Command::Check => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn check(config: &Config) -> anyhow::Result<ExitCode> {
    let policy = match &config.rbac.policy_file {
        Some(path) => AccessPolicy::from_file(path)?,
        None => AccessPolicy::default(),
    };

    let report = validate_policy(&policy, &config.rbac);
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for err in &report.errors {
        println!("error: {}", err);
    }

    if report.is_ok() {
        println!(
            "policy ok: {} roles, {} modules, {} navigation sections",
            policy.roles.len(),
            policy.modules.len(),
            policy.navigation.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
