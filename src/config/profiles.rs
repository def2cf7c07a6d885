use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::AwsPaths;

const DEFAULT_PROFILE: &str = "default";
const PROFILE_ENV_VAR: &str = "AWS_PROFILE";
const CONFIG_SECTION_PREFIX: &str = "profile ";

/// Returns every profile named in `~/.aws/config` and `~/.aws/credentials`,
/// deduplicated across both files and sorted alphabetically.
///
/// A file that is missing or unreadable contributes no names; that is the
/// normal first-run case, not an error. If neither file yields a name the
/// result is exactly `["default"]`, so callers always have something to
/// select.
pub fn discover_profiles(paths: &AwsPaths) -> Vec<String> {
    let mut names = BTreeSet::new();
    names.extend(section_names(paths.config_file(), true));
    names.extend(section_names(paths.credentials_file(), false));

    if names.is_empty() {
        names.insert(DEFAULT_PROFILE.to_string());
    }

    names.into_iter().collect()
}

/// The active profile from `AWS_PROFILE`, or `default` when unset or empty.
pub fn current_profile() -> String {
    current_profile_from(std::env::var(PROFILE_ENV_VAR).ok().as_deref())
}

/// Pure core of [`current_profile`]; the value is passed through verbatim,
/// with no trimming and no check against the discovered set.
pub fn current_profile_from(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_PROFILE.to_string(),
    }
}

fn section_names(path: &Path, strip_profile_prefix: bool) -> BTreeSet<String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return BTreeSet::new();
    };

    let mut names = BTreeSet::new();
    for line in raw.lines() {
        let line = line.trim();
        let Some(inner) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            continue;
        };

        let mut name = inner.trim();
        // Sections in the config file read `[profile staging]`; the prefix is
        // part of the file format, not the profile name. The credentials file
        // has no such convention, so its sections are taken verbatim.
        if strip_profile_prefix {
            if let Some(stripped) = name.strip_prefix(CONFIG_SECTION_PREFIX) {
                name = stripped.trim();
            }
        }

        names.insert(name.to_string());
    }

    names
}
