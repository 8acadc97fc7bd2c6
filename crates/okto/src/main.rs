use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use okto::catalog;
use okto::RunOptions;

const USAGE: &str = "\
okto - a CHIP-8 emulator

Usage:
  okto <ROM> [--ipf N] [--seed N]
  okto --list-roms [DIR]

A bare ROM name that is not an existing file is looked up in the roms/
directory.

Options:
  --ipf N        instructions executed per rendered frame (default 2)
  --seed N       seed the random number generator for reproducible runs
  --list-roms    print the .ch8 files found in DIR (default roms/)
  -h, --help     show this help";

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1).peekable();
    let mut options = RunOptions::default();
    let mut rom_arg: Option<String> = None;
    let mut list_roms = false;
    let mut list_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--list-roms" => {
                list_roms = true;
                if let Some(dir) = args.next_if(|next| !next.starts_with('-')) {
                    list_dir = Some(PathBuf::from(dir));
                }
            }
            "--ipf" => {
                let value = args.next().context("--ipf needs a value")?;
                options.cycles_per_frame =
                    value.parse().context("--ipf expects a number")?;
            }
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                options.seed = Some(value.parse().context("--seed expects a number")?);
            }
            other if other.starts_with('-') => {
                bail!("unknown option '{other}'\n\n{USAGE}");
            }
            other => rom_arg = Some(other.to_string()),
        }
    }

    if list_roms {
        let dir = list_dir.unwrap_or_else(|| PathBuf::from(catalog::DEFAULT_ROM_DIR));
        for entry in catalog::scan(&dir)? {
            println!("{}\t{}", entry.name, entry.path.display());
        }
        return Ok(());
    }

    let rom_arg = match rom_arg {
        Some(rom) => rom,
        None => bail!("no ROM given\n\n{USAGE}"),
    };
    let path = catalog::resolve(&rom_arg);
    log::info!("loading ROM {}", path.display());
    let rom = std::fs::read(&path)
        .with_context(|| format!("failed to read ROM file {}", path.display()))?;

    okto::run(&rom, &options)
}
