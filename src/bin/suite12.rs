use std::io::{self, BufWriter, Write};

use fixtures::suites::suite12;

// Standalone fixture; command-line arguments are ignored.
fn main() {
    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    if let Err(e) = suite12::run(&mut out).and_then(|_| out.flush()) {
        eprintln!("error: suite12: {}", e);
        std::process::exit(1);
    }
}
