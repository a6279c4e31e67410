mod launch;
mod user_interaction;

use crate::launch::ServerExit;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use colored::Colorize;
use common::constants::{MODELS_DIR, SERVER_PORT};
use common::model_file::{self, ModelFile, ModelList};
use common::types::Opts;
use std::io;
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Parser)]
#[clap(version, about = "Serves a GGUF model with the llama-cpp-python server")]
struct Cli {
    /// Print what would happen, without doing it
    #[clap(short, long)]
    noop: bool,
    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
    /// Directory containing GGUF model files
    #[clap(short, long, default_value = MODELS_DIR)]
    dir: Utf8PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let opts = Opts {
        verbose: cli.verbose,
        noop: cli.noop,
    };

    let models = model_file::model_files(&cli.dir).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", cli.dir, e);
        exit(1);
    });

    if models.is_empty() {
        print_no_models_guidance(&cli.dir);
        exit(1);
    }

    if opts.verbose {
        println!("Found {} model(s) in {}", models.len(), cli.dir);
    }

    // Once the server is up, Ctrl+C belongs to it: the handler stands aside
    // and we read the interrupt back off the child's exit status. Before
    // then, Ctrl+C means the user is backing out.
    let in_server = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&in_server);

    ctrlc::set_handler(move || {
        if !handler_flag.load(Ordering::SeqCst) {
            println!("\nCancelled.");
            exit(0);
        }
    })
    .expect("could not set interrupt handler");

    println!("Available GGUF models:");
    println!();
    user_interaction::print_options(&models);
    println!();

    let model = match select_model(&models) {
        Ok(Some(model)) => model,
        Ok(None) => {
            println!("Cancelled.");
            exit(0);
        }
        Err(e) => {
            eprintln!("Failed to read selection: {}", e);
            exit(1);
        }
    };

    announce(model);
    in_server.store(true, Ordering::SeqCst);

    match launch::run_server(&model.path, &opts) {
        Ok(ServerExit::Clean) => (),
        Ok(ServerExit::Interrupted) => println!("\nServer stopped."),
        Ok(ServerExit::Failed(status)) => {
            eprintln!("Error starting server: {}", status);
            exit(1);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!("llama-cpp-python not found. Install it with:");
            eprintln!("  pip install 'llama-cpp-python[server]'");
            exit(1);
        }
        Err(e) => {
            eprintln!("Failed to start server: {}", e);
            exit(1);
        }
    }
}

fn select_model(models: &ModelList) -> io::Result<Option<&ModelFile>> {
    if let [only] = models.as_slice() {
        println!("Using the only available model: {}", only.name);
        return Ok(Some(only));
    }

    loop {
        let input = match user_interaction::get_choice(models.len())? {
            Some(input) => input,
            None => return Ok(None),
        };

        match user_interaction::parse_choice(&input, models.len()) {
            Some(index) => return Ok(Some(&models[index])),
            None => println!("Please enter a number between 1 and {}", models.len()),
        }
    }
}

fn announce(model: &ModelFile) {
    println!();
    println!(
        "Starting llama-cpp-python server with model: {}",
        model.name.as_str().bold()
    );
    println!();
    println!(
        "Server will be available at: http://localhost:{}",
        SERVER_PORT
    );
    println!("Press Ctrl+C to stop the server");
    println!();
}

fn print_no_models_guidance(dir: &Utf8Path) {
    eprintln!("No GGUF models found in '{}'.", dir);
    eprintln!();
    eprintln!("Download a GGUF model and place it in that directory.");
    eprintln!();
    eprintln!("Recommended sources:");
    eprintln!("  - Hugging Face: https://huggingface.co/models?search=gguf");
    eprintln!("  - TheBloke's models: https://huggingface.co/TheBloke");
}

#[cfg(test)]
mod test {
    use super::*;
    use camino::Utf8PathBuf;

    fn model(name: &str) -> ModelFile {
        ModelFile {
            name: name.to_string(),
            path: Utf8PathBuf::from("models").join(name),
            size: 1024,
            mtime: 1730563919,
        }
    }

    #[test]
    fn test_select_model_sole_candidate() {
        let models = vec![model("only-one.gguf")];

        assert_eq!(
            Some(&models[0]),
            select_model(&models).unwrap()
        );
    }
}
