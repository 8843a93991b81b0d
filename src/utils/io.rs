// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory (not created).
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("dev", "passforge", "passforge") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::debug!("Could not determine config directory");
            None
        }
    }
}

/// Load `.env` from the working directory, then `passforge.env` from the
/// config directory. Earlier files win; existing variables are never
/// overridden. Returns the files that were loaded.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = get_app_config_dir() {
        candidates.push(dir.join("passforge.env"));
    }
    load_env_from(&candidates)
}

fn load_env_from(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| path.is_file())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .cloned()
        .collect()
}
