use camino::Utf8Path;
use common::constants::{
    PYTHON, SERVER_CTX, SERVER_GPU_LAYERS, SERVER_HOST, SERVER_MODULE, SERVER_PORT,
};
use common::types::Opts;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus};

const SIGINT: i32 = 2;

/// How a server run ended, as far as the launcher cares.
#[derive(Debug)]
pub enum ServerExit {
    Clean,
    Interrupted,
    Failed(ExitStatus),
}

/// Runs the server in the foreground, inheriting our stdio, blocking until it
/// exits or is interrupted. A missing interpreter surfaces as a NotFound
/// error from the spawn.
///
pub fn run_server(model: &Utf8Path, opts: &Opts) -> io::Result<ServerExit> {
    let cmd = server_command(model);

    if opts.verbose || opts.noop {
        println!("{}", format_command(&cmd));
    }

    if opts.noop {
        return Ok(ServerExit::Clean);
    }

    run_command(cmd)
}

pub fn server_command(model: &Utf8Path) -> Command {
    let mut cmd = Command::new(PYTHON);
    cmd.arg("-m")
        .arg(SERVER_MODULE)
        .arg("--model")
        .arg(model.as_str())
        .arg("--host")
        .arg(SERVER_HOST)
        .arg("--port")
        .arg(SERVER_PORT.to_string())
        .arg("--n_ctx")
        .arg(SERVER_CTX.to_string())
        .arg("--n_gpu_layers")
        .arg(SERVER_GPU_LAYERS.to_string());
    cmd
}

fn run_command(mut cmd: Command) -> io::Result<ServerExit> {
    let status = cmd.status()?;

    if status.success() {
        Ok(ServerExit::Clean)
    } else if status.signal() == Some(SIGINT) {
        Ok(ServerExit::Interrupted)
    } else {
        Ok(ServerExit::Failed(status))
    }
}

/// Returns a printable string of the given command
///
pub fn format_command(cmd: &Command) -> String {
    format!(
        "{} {}",
        cmd.get_program().to_string_lossy(),
        cmd.get_args()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_server_command() {
        let cmd = server_command(Utf8Path::new("models/tiny-llama.gguf"));

        assert_eq!(
            "python -m llama_cpp.server --model models/tiny-llama.gguf \
            --host 0.0.0.0 --port 8080 --n_ctx 4096 --n_gpu_layers 0",
            format_command(&cmd)
        );
    }

    #[test]
    fn test_run_command_clean() {
        assert!(matches!(
            run_command(Command::new("/bin/true")).unwrap(),
            ServerExit::Clean
        ));
    }

    #[test]
    fn test_run_command_failed() {
        match run_command(Command::new("/bin/false")).unwrap() {
            ServerExit::Failed(status) => assert_eq!(Some(1), status.code()),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_run_command_interrupted() {
        let mut cmd = Command::new("/bin/sh");
        cmd.arg("-c").arg("kill -INT $$");

        assert!(matches!(
            run_command(cmd).unwrap(),
            ServerExit::Interrupted
        ));
    }

    #[test]
    fn test_run_command_missing_binary() {
        assert_eq!(
            io::ErrorKind::NotFound,
            run_command(Command::new("/no/such/interpreter"))
                .unwrap_err()
                .kind()
        );
    }

    #[test]
    fn test_run_server_noop() {
        let opts = Opts {
            verbose: false,
            noop: true,
        };

        assert!(matches!(
            run_server(Utf8Path::new("/no/such/model.gguf"), &opts).unwrap(),
            ServerExit::Clean
        ));
    }
}
