use std::{env, path::PathBuf, process};

use ledger_core::{
    cli::{run_cli, CliOptions},
    init,
};

fn main() {
    init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(err) = run_cli(options) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut path: Option<PathBuf> = None;
    let mut create = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-f" | "--file" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for `{arg}`"))?;
                path = Some(PathBuf::from(value));
            }
            "--create" => create = true,
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    let path = path.ok_or_else(|| String::from("a ledger file is required (-f <path>)"))?;
    Ok(CliOptions { path, create })
}

fn print_usage() {
    eprintln!(
        "Usage: ledger_core_cli -f <ledger.json> [--create]\n\
         Options:\n  \
         -f, --file <path>  ledger file to open\n      \
         --create       create the file if it does not exist"
    );
}
