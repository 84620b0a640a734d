use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use std::process;

use clap::Parser;
use retainer::{Args, Config, EditorSource, LineSource, PlainSource, print_banner, run};

fn repl(config: &Config) -> Result<(), String> {
    let mut stdout = io::stdout();
    print_banner(&mut stdout).map_err(|e| e.to_string())?;

    let interactive = !config.plain && io::stdin().is_terminal();
    let mut source: Box<dyn LineSource> = if interactive {
        match EditorSource::new(config.history.clone()) {
            Ok(editor) => Box::new(editor),
            Err(e) => {
                eprintln!("warning: line editor unavailable ({e}), using plain input");
                Box::new(PlainSource::stdin())
            }
        }
    } else {
        Box::new(PlainSource::stdin())
    };

    run(source.as_mut(), config, &mut stdout)?;
    Ok(())
}

fn run_file(path: &Path, config: &Config) -> Result<(), String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to read file '{}': {e}", path.display()))?;

    let mut source = PlainSource::new(BufReader::new(file), io::sink());
    let config = Config {
        prompt: String::new(),
        ..config.clone()
    };
    run(&mut source, &config, &mut io::stdout())?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    let config = Config::from(&args);

    let result = match args.file {
        Some(ref path) => run_file(path, &config),
        None => repl(&config),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
