use std::io::{self, BufWriter, Write};

use fixtures::suites::suite4;

// Standalone fixture; command-line arguments are ignored.
fn main() {
    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    if let Err(e) = suite4::run(&mut out).and_then(|_| out.flush()) {
        eprintln!("error: suite4: {}", e);
        std::process::exit(1);
    }
}
