use anyhow::{anyhow, Context as _, Result};
use rolodex_store::paths;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn launch(
    db_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    seed_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    if verbose {
        eprintln!("db: {}", db_path.display());
    }
    let mut command = build_command(&db_path, config_path, seed_file);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        let status = command.status().map_err(exec_error)?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(db_path: &Path, config_path: Option<PathBuf>, seed_file: Option<PathBuf>) -> Command {
    let mut command = Command::new(find_tui_binary());
    command.arg("--db-path").arg(db_path);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if let Some(path) = seed_file {
        command.arg("--seed-file").arg(path);
    }
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("rolodex-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "rolodex-tui binary not found; build it with `cargo build -p rolodex-tui` or install the package"
        );
    }
    anyhow!("launch rolodex-tui failed: {}", err)
}

#[cfg(test)]
mod tests {
    use super::build_command;
    use std::path::{Path, PathBuf};

    #[test]
    fn forwards_paths_to_tui() {
        let command = build_command(
            Path::new("/tmp/rolodex.sqlite3"),
            Some(PathBuf::from("/tmp/config.toml")),
            Some(PathBuf::from("/tmp/seed.json")),
        );
        let args: Vec<_> = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "--db-path",
                "/tmp/rolodex.sqlite3",
                "--config",
                "/tmp/config.toml",
                "--seed-file",
                "/tmp/seed.json"
            ]
        );
    }
}
