//! Command dispatch and audit orchestration.
//!
//! The audit itself is a linear composition: load the key set, scan the
//! source tree, reconcile, print. The loader and scanner are independent
//! of each other; only the reconciler consumes both.

use std::{env, fs, path::Path};

use anyhow::Result;
use colored::Colorize;

use super::{
    args::{Arguments, AuditCommand, Command},
    exit_status::ExitStatus,
};
use crate::config::{self, CONFIG_FILE_NAME, default_config_json};
use crate::{keyset, reconciler, report, scanner};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Init) => init(),
        // Bare `keyaudit` runs the audit with default settings.
        None => audit(AuditCommand::default()),
    }
}

fn audit(cmd: AuditCommand) -> Result<ExitStatus> {
    let common = cmd.args.common;
    let cwd = env::current_dir()?;

    let loaded = config::load_config(&cwd)?;
    if common.verbose {
        if loaded.from_file {
            eprintln!(
                "{} Using configuration from {}",
                "info:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        } else {
            eprintln!(
                "{} No {} found, using defaults",
                "info:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }
    }
    let config = loaded.config;

    let reference = common
        .reference_file
        .unwrap_or_else(|| Path::new(&config.reference_file).to_path_buf());
    let source_root = common
        .source_root
        .unwrap_or_else(|| Path::new(&config.source_root).to_path_buf());

    let keys = keyset::load_key_set(&reference)?;
    let scan = scanner::scan_usages(&source_root, &config.ignores, common.verbose);
    let summary = reconciler::reconcile(&keys, scan.usages);

    report::print_report(&reference.display().to_string(), &summary);
    report::print_skip_warning(scan.skipped_count, common.verbose);

    Ok(ExitStatus::Success)
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
