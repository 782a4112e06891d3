// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atelier - a trilingual personal portfolio site.
//!
//! This is the binary entry point: it loads the configuration, then either
//! serves the site or just reports what it would do.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;
mod shutdown;

/// Atelier - a trilingual personal portfolio site.
#[derive(Parser, Debug)]
#[command(name = "atelier", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands. Running with none is the same as `serve`.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the portfolio site server.
    Serve,
    /// Load and validate the configuration, then exit.
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match atelier_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            atelier_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Check) => {
            println!("configuration ok");
            println!("  server   {}:{}", config.server.host, config.server.port);
            println!("  database {}", config.storage.database_path);
            println!("  uploads  {}", config.uploads.uploads_dir().display());
            if config.admin.uses_default_credentials() {
                println!("  warning: admin credentials are still the defaults");
            }
        }
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("atelier: {e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config = atelier_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
