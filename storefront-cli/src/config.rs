//! Environment loading for the storefront CLI

use std::path::PathBuf;

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.storefront/.env
///
/// dotenvy never overwrites a variable that is already set, so earlier
/// files win. Returns the files that were loaded; called before tracing is
/// up, so the caller logs them.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// Get the storefront config directory path (~/.storefront)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".storefront"))
}
