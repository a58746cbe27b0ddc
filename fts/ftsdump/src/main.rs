//! `ftsdump` CLI
//!
//! Prints the tokens the Unicode full-text-search tokenizer produces.

use ftsdump::{init_tracing, run, DumpError, DumpOptions, USAGE};

fn main() {
    init_tracing();

    let options = match DumpOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if let Err(err) = run(&options, &mut out) {
        // Broken pipe (e.g. `ftsdump file | head`) is not worth reporting.
        if matches!(&err, DumpError::Write(io) if io.kind() == std::io::ErrorKind::BrokenPipe) {
            return;
        }
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    if let Err(err) = std::io::Write::flush(&mut out) {
        if err.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
