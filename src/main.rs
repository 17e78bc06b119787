use clap::Parser;
use std::process;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use taskhelper::cli::commands::{Cli, Commands};
use taskhelper::cli::{self, Context};
use taskhelper::config::{Config, LOG_ENV};
use taskhelper::notify;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("taskhelper=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let mut config = match Config::resolve(cli_args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => process::exit(cli::fail(&e, json_output)),
    };
    if let Some(catalog) = cli_args.catalog {
        config.catalog_path = Some(catalog);
    }
    notify::configure(config.notifications.clone());
    let ctx = Context::new(json_output, config);

    let exit_code = match cli_args.command {
        Commands::List(args) => cli::list::run_list(args, &ctx),
        Commands::Show { id } => cli::list::run_show(id, &ctx),
        Commands::Categories => cli::list::run_categories(&ctx),
        Commands::Create(args) => cli::create::run(args, &ctx),
        Commands::Dashboard { role, view, status } => {
            cli::dashboard::run(&role, view.as_deref(), &status, &ctx)
        }
        Commands::Applicants { sort, select } => cli::applicants::run(&sort, select, &ctx),
    };

    process::exit(exit_code);
}
