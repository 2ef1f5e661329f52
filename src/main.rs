use std::io::{self, BufWriter, Write};

use fixtures::{Manifest, suites};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    // Handle flags
    if args.len() == 2 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("Fixture runner {}", VERSION);
                return;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            "--list" | "-l" => {
                list_suites();
                return;
            }
            _ => {}
        }
    }

    if args.len() != 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let name = &args[1];
    let suite = match suites::find(name) {
        Some(suite) => suite,
        None => {
            eprintln!("error: unknown suite '{}'", name);
            eprintln!("run with --list to see the available suites");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    if let Err(e) = (suite.run)(&mut out).and_then(|_| out.flush()) {
        eprintln!("error: {}: {}", name, e);
        std::process::exit(1);
    }
}

fn list_suites() {
    let manifest = match Manifest::bundled() {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("error: suites.toml is invalid: {}", e);
            std::process::exit(1);
        }
    };
    for entry in &manifest.suites {
        println!("{:<8}  {:>6} stdout lines  {}", entry.name, entry.stdout_lines, entry.theme);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <suite>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Print this help message");
    eprintln!("  -l, --list       List the available suites");
    eprintln!("  -v, --version    Print version information");
}
