// envfile-rs: Environment File Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Set | Unset | Apply | Get | List | Options | Inis | Version
//! ```

use std::process::ExitCode;

use envfile_rs::cli::global::GlobalOptions;
use envfile_rs::cli::{self, Command};
use envfile_rs::cmd::OutputOptions;
use envfile_rs::cmd::config::{run_inis_command, run_options_command};
use envfile_rs::cmd::store::{
    run_apply_command, run_get_command, run_list_command, run_set_command, run_unset_command,
};
use envfile_rs::config::Config;
use envfile_rs::config::loader::ConfigLoader;
use envfile_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const LOCAL_CONFIG: &str = "envfile.toml";
const ENV_PREFIX: &str = "ENVFILE";

fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Inis) => {
            let sources = build_config_loader(&cli.global).sources();
            let output = OutputOptions {
                diff: false,
                json: cli.global.json,
            };
            return exit_code(run_inis_command(&sources, output));
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .console_level(config.global.output_log_level)
        .file_level(config.global.file_log_level)
        .maybe_log_file(config.global.log_file.clone())
        .store_path(config.store.path.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let output = OutputOptions {
        diff: config.store.diff,
        json: cli.global.json,
    };

    let result = match &cli.command {
        Some(Command::Options) => run_options_command(config, output),
        Some(Command::Set(args)) => run_set_command(args, config, output),
        Some(Command::Unset(args)) => run_unset_command(args, config, output),
        Some(Command::Apply(args)) => run_apply_command(args, config, output),
        Some(Command::Get(args)) => run_get_command(args, config, output),
        Some(Command::List) => run_list_command(config, output),
        Some(Command::Version | Command::Inis) | None => Ok(()),
    };

    exit_code(result)
}

fn exit_code(result: envfile_rs::error::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for ini_path in &global.inis {
        loader = loader.ini(ini_path);
    }
    loader
        .local(LOCAL_CONFIG)
        .env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envfile_rs::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    loader.build()
}
