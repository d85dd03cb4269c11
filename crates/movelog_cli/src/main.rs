//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `movelog_core` linkage.
//! - Report whether the environment-configured store can be opened.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("movelog_core ping={}", movelog_core::ping());
    println!("movelog_core version={}", movelog_core::core_version());

    let config = match movelog_core::store_config_from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("store config unavailable: {err}");
            return ExitCode::SUCCESS;
        }
    };

    match movelog_core::open_store(&config.db_path) {
        Ok(_) => {
            println!("store ok path={}", config.db_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("store open failed path={}: {err}", config.db_path.display());
            ExitCode::FAILURE
        }
    }
}
