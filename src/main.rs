use foldtable::errors::FoldResult;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() -> FoldResult<()> {
    let config_path = parse_args();
    foldtable::app::run(config_path.as_deref())?;
    Ok(())
}

fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut args_iter = args.iter();

    let mut config_path = None;
    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("foldtable {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-c" | "--config" => {
                let path = args_iter.next().unwrap_or_else(|| {
                    eprintln!("error: option '{}' requires an argument", arg);
                    process::exit(1);
                });
                config_path = Some(PathBuf::from(path));
            }
            arg => {
                eprintln!("error: unknown option '{}'", arg);
                print_help();
                process::exit(1);
            }
        }
    }

    config_path
}

fn print_help() {
    println!("foldtable - Collapsible sectioned tables in the terminal");
    println!();
    println!("USAGE:");
    println!("    foldtable [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>  Read config from <path>");
    println!("    -h, --help           Print help information");
    println!("    -V, --version        Print version information");
}
