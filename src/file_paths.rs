use std::{env, path};

fn get_config_dir() -> Option<path::PathBuf> {
    // first try $CTINT_CONFIG_DIR
    if let Some(env_var_config_dir) = env::var_os("CTINT_CONFIG_DIR") {
        return Some(path::PathBuf::from(env_var_config_dir));
    }

    // otherwise use the platform directory:
    // Linux: $XDG_CONFIG_HOME/ctint or $HOME/.config/ctint
    // macOS: $HOME/Library/Application Support/ctint
    // Windows: {FOLDERID_RoamingAppData}\ctint\config
    let proj_dirs = directories::ProjectDirs::from("", "", "ctint")?;
    Some(path::PathBuf::from(proj_dirs.config_dir()))
}

pub fn get_config_file_location() -> Option<path::PathBuf> {
    let mut config_path = get_config_dir()?;
    config_path.push("config.toml");
    Some(config_path)
}

pub fn get_history_file_location() -> Option<path::PathBuf> {
    let mut history_path = get_config_dir()?;
    history_path.push("history");
    Some(history_path)
}
