#![cfg(feature = "appdata")]

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::coincfg::{constants::CONFIG_FILE_EXTENSION, Coin};

/// Serialises tests that read or repoint `HOME`.
#[cfg(test)]
pub(crate) static HOME_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// get_app_data_dir returns an operating system specific directory to be used
/// for storing application data for an application.
///
/// A leading period on `app_name` is stripped. An empty name or a single dot
/// requests the current directory. The first character of the name is
/// lowercased for POSIX style systems and uppercased for macOS and Windows.
///
/// `roaming` only applies to Windows, where it selects %APPDATA% over
/// %LOCALAPPDATA%.
///
/// ## Gives
///
///   POSIX (Linux/BSD): ~/.aeon
///
///   Mac OS: $HOME/Library/Application Support/Aeon
///
///   Windows: %LOCALAPPDATA%\Aeon
///
///   Plan 9: $home/aeon
pub fn get_app_data_dir(app_name: &str, roaming: bool) -> Option<PathBuf> {
    let dir_data = DirData {
        app_name: app_name.to_string(),
        os: env::consts::OS,
        roaming,
    };

    dir_data.get_app_data_dir()
}

/// Path a user override of a bundled coin definition is read from, e.g.
/// `~/.aeon/aeon.toml`.
pub fn default_config_path(coin: Coin) -> Option<PathBuf> {
    let name = coin.to_string();
    let dir = get_app_data_dir(&name, false)?;

    Some(dir.join(name).with_extension(CONFIG_FILE_EXTENSION))
}

struct DirData {
    os: &'static str,
    app_name: String,
    roaming: bool,
}

impl DirData {
    fn get_app_data_dir(mut self) -> Option<PathBuf> {
        if self.app_name.is_empty() || self.app_name == "." {
            return Some(".".into());
        }

        // Strip "." if caller prepend a period to path.
        if let Some(value) = self.app_name.strip_prefix('.') {
            self.app_name = value.to_string();
        }

        match dirs::home_dir() {
            Some(dir) => self.retrieve_from_os(&dir),

            None => match env::var("HOME") {
                Ok(val) => self.retrieve_from_os(Path::new(&val)),
                Err(_) => None,
            },
        }
    }

    fn retrieve_from_os(&self, home_dir: &Path) -> Option<PathBuf> {
        let mut chars = self.app_name.chars();
        let first = chars.next()?;
        let rest = chars.as_str();

        let app_name_upper = format!("{}{}", first.to_uppercase(), rest);
        let app_name_lower = format!("{}{}", first.to_lowercase(), rest);

        match self.os {
            "windows" => {
                // Windows XP and before didn't have a LOCALAPPDATA, so fallback
                // to regular APPDATA when LOCALAPPDATA is not set.
                let mut app_data = env::var("LOCALAPPDATA").unwrap_or_default();

                if app_data.is_empty() || self.roaming {
                    app_data = env::var("APPDATA").ok()?;
                }

                Some(Path::new(&app_data).join(app_name_upper))
            }

            "macos" => {
                if home_dir.as_os_str().is_empty() {
                    return None;
                }

                Some(
                    home_dir
                        .join("Library")
                        .join("Application Support")
                        .join(app_name_upper),
                )
            }

            "plan9" => {
                if home_dir.as_os_str().is_empty() {
                    return None;
                }

                Some(home_dir.join(app_name_lower))
            }

            _ => {
                if home_dir.as_os_str().is_empty() {
                    return None;
                }

                Some(home_dir.join(format!(".{}", app_name_lower)))
            }
        }
    }
}
