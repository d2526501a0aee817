//! Command-line interface for dumpsplit
//!
//! Runs a class-dump style tool against a binary and splits the dump into
//! one header file per declaration, plus a shared banner file.
//!
//! Usage:
//!   dumpsplit `<dump-tool>` `<binary>` `<output-dir>`

use clap::error::ErrorKind;
use clap::{Arg, Command};
use dumpsplit::dump::pipeline::{Pipeline, VERSION_HEADER_FILE};
use std::path::Path;

fn main() {
    env_logger::init();

    let cmd = Command::new("dumpsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Splits class-dump output into one header file per declaration")
        .arg(
            Arg::new("tool")
                .help("Path to the class-dump executable")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("binary")
                .help("Path to the binary to inspect")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("output-dir")
                .help("Directory to write the header files into")
                .required(true)
                .index(3),
        );

    let matches = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // Argument errors go to standard output, not stderr; help and
            // version requests land here too and are not failures.
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            println!("{}", err.render());
            std::process::exit(status);
        }
    };

    let tool = matches.get_one::<String>("tool").expect("tool is required");
    let binary = matches
        .get_one::<String>("binary")
        .expect("binary is required");
    let out_dir = matches
        .get_one::<String>("output-dir")
        .expect("output-dir is required");
    handle_split_command(tool, binary, out_dir);
}

/// Handle the one and only command: run the tool and split its output.
fn handle_split_command(tool: &str, binary: &str, out_dir: &str) {
    let pipeline = Pipeline::new();
    let report = pipeline
        .run(Path::new(tool), Path::new(binary), Path::new(out_dir))
        .unwrap_or_else(|err| {
            eprintln!("Split failed: {}", err);
            std::process::exit(1);
        });

    println!(
        "Wrote {} declaration file(s) and {} to {}",
        report.declaration_paths.len(),
        VERSION_HEADER_FILE,
        out_dir
    );
}
