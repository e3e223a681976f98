//! Operations CLI for Twatter Engine permission management
//!
//! Works directly on the decimal bit-sets stored in principal rows, so an
//! operator can decode what a row grants, compute the result of a grant or
//! revoke before persisting it, and inspect the dependency edges between
//! permissions.
//!
//! Usage:
//!   twatter list
//!   twatter decode 3
//!   twatter grant 0 BAN_USERS MANAGE_REPORTS
//!   twatter revoke 3 MANAGE_USERS
//!   twatter check 3 MANAGE_USERS_EXTENDED
//!   twatter deps MANAGE_USERS_EXTENDED
//!
//! Unknown permission names are a hard error here, unlike the engine's
//! lenient name fold: a typo at the keyboard must not quietly grant nothing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use auth_permissions::{
    dependants_of, dependencies_of, grant, has_all, has_any, holds_all_literal,
    holds_any_literal, permission_list, revoke, Permission, PermissionBits,
};

/// Twatter Engine permission operations
#[derive(Parser, Debug)]
#[command(name = "twatter")]
#[command(about = "Inspect and compute Twatter permission bit-sets")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every permission with its bit pattern
    List,

    /// Show the permission names literally held by a decimal bit-set
    Decode {
        /// Stored decimal bit-set (e.g. "3")
        bits: String,
    },

    /// Add permissions to a bit-set and print the result
    Grant {
        /// Stored decimal bit-set to start from
        bits: String,
        /// Permission names to add
        #[arg(required = true)]
        permissions: Vec<String>,
    },

    /// Remove permissions from a bit-set (cascading through dependants)
    /// and print the result
    Revoke {
        /// Stored decimal bit-set to start from
        bits: String,
        /// Permission names to remove
        #[arg(required = true)]
        permissions: Vec<String>,
    },

    /// Check a bit-set against required permissions; exit 0 if allowed
    Check {
        /// Stored decimal bit-set to check
        bits: String,
        /// Required permission names
        #[arg(required = true)]
        permissions: Vec<String>,
        /// Pass if any one permission is held (default: all must be held)
        #[arg(long)]
        any: bool,
        /// Test literal bit membership; no ADMINISTRATOR short-circuit
        #[arg(long)]
        literal: bool,
    },

    /// Show the permissions a permission implies
    Deps {
        /// Permission name
        permission: String,
    },

    /// Show the permissions that imply a permission (revocation cascade)
    Dependants {
        /// Permission name
        permission: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_permissions(names: &[String]) -> Result<Vec<Permission>> {
    names
        .iter()
        .map(|name| Ok(name.parse::<Permission>()?))
        .collect()
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::List => {
            for permission in Permission::ALL {
                let bits = permission.bits();
                println!(
                    "{:<24} {:>16}  0b{}",
                    permission.name(),
                    bits.to_string(),
                    bits.to_binary()
                );
            }
        }

        Command::Decode { bits } => {
            let bits: PermissionBits = bits.parse()?;
            let names = permission_list(&bits);
            if names.is_empty() {
                println!("(none)");
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }

        Command::Grant { bits, permissions } => {
            let mut bits: PermissionBits = bits.parse()?;
            for permission in parse_permissions(&permissions)? {
                bits = grant(&bits, permission);
            }
            println!("{bits}");
        }

        Command::Revoke { bits, permissions } => {
            let mut bits: PermissionBits = bits.parse()?;
            for permission in parse_permissions(&permissions)? {
                bits = revoke(&bits, permission);
            }
            println!("{bits}");
        }

        Command::Check {
            bits,
            permissions,
            any,
            literal,
        } => {
            let bits: PermissionBits = bits.parse()?;
            let required = parse_permissions(&permissions)?;
            debug!(?required, %bits, any, literal, "running check");

            let allowed = match (any, literal) {
                (true, true) => holds_any_literal(&bits, &required),
                (true, false) => has_any(&bits, &required),
                (false, true) => holds_all_literal(&bits, &required),
                (false, false) => has_all(&bits, &required),
            };

            if allowed {
                println!("allowed");
            } else {
                println!("denied");
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Deps { permission } => {
            let permission: Permission = permission.parse()?;
            print_names(dependencies_of(permission));
        }

        Command::Dependants { permission } => {
            let permission: Permission = permission.parse()?;
            print_names(dependants_of(permission));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_names(permissions: Vec<Permission>) {
    if permissions.is_empty() {
        println!("(none)");
    } else {
        for permission in permissions {
            println!("{permission}");
        }
    }
}
