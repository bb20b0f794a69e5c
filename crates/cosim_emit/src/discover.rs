//! Design name lookup in the simulation directory.

use crate::error::EmitError;
use std::path::Path;

/// Finds the design name from the vendor elaboration script in `dir`.
///
/// Exactly one regular file named `<name><suffix>` with a non-empty `<name>`
/// must exist; its `<name>` is returned. Other files are ignored.
pub fn discover_top_name(dir: &Path, suffix: &str) -> Result<String, EmitError> {
    let entries = std::fs::read_dir(dir).map_err(EmitError::io(dir))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(EmitError::io(dir))?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        if file_name
            .strip_suffix(suffix)
            .is_some_and(|stem| !stem.is_empty())
        {
            found.push(file_name);
        }
    }
    found.sort();

    match found.as_slice() {
        [only] => {
            let top = only[..only.len() - suffix.len()].to_string();
            log::debug!("design name `{top}` taken from {only}");
            Ok(top)
        }
        _ => Err(EmitError::TopNameDiscovery {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "_elaborate.do";

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "# generated\n").unwrap();
    }

    #[test]
    fn single_match_among_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "mytop_elaborate.do");
        touch(dir.path(), "mytop_compile.do");
        touch(dir.path(), "mytop_simulate.do");
        touch(dir.path(), "README.txt");
        assert_eq!(discover_top_name(dir.path(), SUFFIX).unwrap(), "mytop");
    }

    #[test]
    fn no_match() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "mytop_compile.do");
        match discover_top_name(dir.path(), SUFFIX) {
            Err(EmitError::TopNameDiscovery { found, .. }) => assert!(found.is_empty()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn several_matches_are_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b_elaborate.do");
        touch(dir.path(), "a_elaborate.do");
        match discover_top_name(dir.path(), SUFFIX) {
            Err(EmitError::TopNameDiscovery { found, .. }) => {
                assert_eq!(found, vec!["a_elaborate.do", "b_elaborate.do"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_stem_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "_elaborate.do");
        touch(dir.path(), "design_1_wrapper_elaborate.do");
        assert_eq!(
            discover_top_name(dir.path(), SUFFIX).unwrap(),
            "design_1_wrapper"
        );
    }

    #[test]
    fn directories_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("old_elaborate.do")).unwrap();
        touch(dir.path(), "top_elaborate.do");
        assert_eq!(discover_top_name(dir.path(), SUFFIX).unwrap(), "top");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_top_name(&missing, SUFFIX),
            Err(EmitError::Io { .. })
        ));
    }
}
