//! Hexroyale -- inspection tool for battle-royale game-state payloads.
//!
//! Reads a transport payload from a file and either pretty-prints the
//! decoded document, extracts the turn preview, or shrinks the map by one
//! ring and emits the re-encoded payload on stdout.

use std::process::ExitCode;

use hexroyale::codec;
use hexroyale::map::shrink;
use hexroyale::preview::GamePreview;

const USAGE: &str = "usage: hexroyale <decode|preview|shrink> <payload-file>";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, path) = match args.as_slice() {
        [command, path] => (command.as_str(), path.as_str()),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(command, path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &str, path: &str) -> Result<(), String> {
    let payload =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    let mut doc = codec::decode(&payload).map_err(|e| format!("decode failed: {e}"))?;

    match command {
        "decode" => {
            let pretty = serde_json::to_string_pretty(&doc)
                .expect("Value serialization cannot fail");
            println!("{pretty}");
        }
        "preview" => {
            let preview = GamePreview::from_document(&doc);
            let pretty = serde_json::to_string_pretty(&preview)
                .expect("preview serialization cannot fail");
            println!("{pretty}");
        }
        "shrink" => {
            let report = shrink(&mut doc).map_err(|e| e.to_string())?;
            eprintln!(
                "new radius {}, units touched: {:?}",
                report.new_radius, report.units_touched
            );
            println!("{}", codec::encode(&doc));
        }
        other => return Err(format!("unknown command '{other}'\n{USAGE}")),
    }

    Ok(())
}
