use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Error, Result};

const FILE_PREFIX: &str = "hm_";
const FILE_SUFFIX: &str = ".pls";

/// Writes the playlist document into `dir` as `hm_<unix-seconds>.pls`,
/// removing playlists left behind by previous runs first.
pub fn write_playlist(dir: &Path, content: &str) -> Result<PathBuf> {
    remove_stale_playlists(dir);

    let path = dir.join(format!("{FILE_PREFIX}{}{FILE_SUFFIX}", Utc::now().timestamp()));
    fs::write(&path, content)?;
    info!(path = %path.display(), "playlist written");
    Ok(path)
}

/// Best-effort cleanup of `hm_*.pls` files from earlier runs. A file we
/// cannot remove is not worth failing the run over.
fn remove_stale_playlists(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX) {
            debug!(file = name, "removing stale playlist");
            let _ = fs::remove_file(entry.path());
        }
    }
}

/// Hands the playlist to a media player: the configured command when set,
/// the platform opener otherwise. The child is left running detached.
pub fn launch_player(path: &Path, player: Option<&str>) -> Result<()> {
    let mut command = match player {
        Some(player) => {
            let mut c = Command::new(player);
            c.arg(path);
            c
        }
        None => opener(path),
    };

    command
        .spawn()
        .map_err(|e| Error::Player(e.to_string()))?;
    info!(path = %path.display(), "player launched");
    Ok(())
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
    let mut c = Command::new("cmd");
    c.args(["/C", "start", ""]).arg(path);
    c
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut c = Command::new("open");
    c.arg(path);
    c
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener(path: &Path) -> Command {
    let mut c = Command::new("xdg-open");
    c.arg(path);
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_playlist_with_expected_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_playlist(dir.path(), "[playlist]\nNumberOfEntries=0\n").unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("hm_"));
        assert!(name.ends_with(".pls"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[playlist]\nNumberOfEntries=0\n"
        );
    }

    #[test]
    fn removes_stale_playlists_but_not_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("hm_1700000000.pls");
        let unrelated = dir.path().join("keep.txt");
        fs::write(&stale, "old").unwrap();
        fs::write(&unrelated, "keep").unwrap();

        let path = write_playlist(dir.path(), "new").unwrap();

        assert!(!stale.exists());
        assert!(unrelated.exists());
        assert!(path.exists());
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let result = write_playlist(Path::new("/nonexistent/dir"), "content");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
