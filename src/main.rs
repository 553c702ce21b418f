use anyhow::Result;
use clap::Parser;
use console::style;
use log::error;
use photo_organize::cli::Cli;
use photo_organize::component::DirWalker;
use photo_organize::config::Config;
use photo_organize::init;
use photo_organize::tools::{FileSystem, OsFs, check_dir_flag};
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();
    let fs = OsFs::new();

    if let Err(e) = check_flags(&fs, &cli) {
        println!("{e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            println!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let walker = DirWalker::new(&fs, config.image_type_table, &cli.src, &cli.dst);
    match walker.walk() {
        Ok(()) => {
            println!("{}", style("done!").green().bold());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let reason = format!("{e:#}");
            error!(error = reason.as_str(); "got an error when walking dir");
            println!("{} {reason}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn check_flags(fs: &dyn FileSystem, cli: &Cli) -> Result<()> {
    check_dir_flag(fs, &cli.src)?;
    check_dir_flag(fs, &cli.dst)
}
