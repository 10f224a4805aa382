//! Directory scanning for definition files.

use std::{
    env,
    path::{Path, PathBuf},
};

use ros2model_core::{Action, InterfacePackage, Message, Service};
use walkdir::WalkDir;

use crate::{InterfaceError, Parsed, parse_action_file, parse_msg_file, parse_srv_file};

/// Colon-separated install prefixes searched for package share directories.
pub const AMENT_PREFIX_PATH: &str = "AMENT_PREFIX_PATH";

/// `<prefix>/share/<package_name>` for the first prefix where it is a
/// directory.
pub fn find_package_share<I, P>(prefixes: I, package_name: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    prefixes
        .into_iter()
        .map(|prefix| prefix.as_ref().join("share").join(package_name))
        .find(|share| share.is_dir())
}

/// Share directory of an installed package, searched along
/// `$AMENT_PREFIX_PATH`.
pub fn package_share_directory(package_name: &str) -> Result<PathBuf, InterfaceError> {
    let prefixes = env::var_os(AMENT_PREFIX_PATH).unwrap_or_default();
    let share = find_package_share(env::split_paths(&prefixes), package_name).ok_or_else(|| {
        InterfaceError::PackageNotFound {
            package_name: package_name.to_string(),
        }
    })?;
    tracing::debug!(
        package = package_name,
        share = %share.display(),
        "resolved share directory"
    );
    Ok(share)
}

/// Files directly inside `dir` with the given extension, sorted by file name.
///
/// A missing directory yields no files; packages commonly ship only some of
/// `msg/`, `srv/` and `action/`.
pub fn spec_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, InterfaceError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "no definition directory");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn scan_dir<T>(
    dir: &Path,
    extension: &str,
    parse: impl Fn(&Path) -> Result<Parsed<T>, InterfaceError>,
) -> Result<Vec<T>, InterfaceError> {
    spec_files(dir, extension)?
        .iter()
        .map(|path| -> Result<T, InterfaceError> {
            let parsed = parse(path)?;
            if !parsed.is_clean() {
                tracing::debug!(
                    path = %path.display(),
                    lines = ?parsed.malformed_lines,
                    "skipped malformed lines"
                );
            }
            Ok(parsed.into_definition())
        })
        .collect()
}

pub fn scan_msg_dir(dir: &Path) -> Result<Vec<Message>, InterfaceError> {
    scan_dir(dir, "msg", parse_msg_file)
}

pub fn scan_srv_dir(dir: &Path) -> Result<Vec<Service>, InterfaceError> {
    scan_dir(dir, "srv", parse_srv_file)
}

pub fn scan_action_dir(dir: &Path) -> Result<Vec<Action>, InterfaceError> {
    scan_dir(dir, "action", parse_action_file)
}

/// Parse every definition under an installed package's share directory
/// (`msg/`, `srv/` and `action/`).
pub fn scan_package(
    share_dir: &Path,
    package_name: &str,
) -> Result<InterfacePackage, InterfaceError> {
    let package = InterfacePackage {
        package_name: package_name.to_string(),
        messages: scan_msg_dir(&share_dir.join("msg"))?,
        services: scan_srv_dir(&share_dir.join("srv"))?,
        actions: scan_action_dir(&share_dir.join("action"))?,
    };
    tracing::info!(
        package = package_name,
        "Found {} messages, {} services and {} actions.",
        package.messages.len(),
        package.services.len(),
        package.actions.len()
    );
    Ok(package)
}
