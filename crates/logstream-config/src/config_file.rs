//! Locating `.logstream.toml`

use std::path::PathBuf;

const CONFIG_FILE: &str = ".logstream.toml";

/// Places a config file is looked for, in order of precedence: the working
/// directory, the home directory, then `config.toml` in the platform config
/// directory.
fn candidate_paths() -> Vec<PathBuf> {
    let home = dirs::home_dir().map(|home| home.join(CONFIG_FILE));
    let platform = crate::paths::config_file_path().ok();

    std::iter::once(Some(PathBuf::from(CONFIG_FILE)))
        .chain([home, platform])
        .flatten()
        .collect()
}

/// Content of the first config file that can be read, if any
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_directory_comes_first() {
        let candidates = candidate_paths();
        assert_eq!(candidates.first(), Some(&PathBuf::from(CONFIG_FILE)));
    }
}
