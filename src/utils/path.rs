//! Path utilities: expand ~ in user-supplied locations.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the user's home directory.
/// Paths without a tilde pass through untouched.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
