//! Writes a new component scaffold.
//!
//! A scaffold is one folder named after the component, holding the component source and
//! its stylesheet:
//!
//! ```text
//! <components dir>/
//!   ExampleButton/
//!     ExampleButton.tsx
//!     _example-button.scss
//! ```
//!
//! An existing folder is never overwritten. If anything fails after the folder was
//! created, the folder is removed again so no half-written component is left behind.

use crate::config::ScaffoldConfig;
use crate::error::{Result, Rollback, ScaffoldError};
use crate::name::{ComponentName, StyleToken};
use crate::probe;
use crate::templates;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Paths produced by a successful [`generate_component`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub component_dir: PathBuf,
    pub source_file: PathBuf,
    pub style_file: PathBuf,
    pub style_token: StyleToken,
}

impl Scaffold {
    /// Path of `file` relative to the components directory, e.g. `MyCard/MyCard.tsx`.
    pub fn relative(&self, file: &Path) -> PathBuf {
        let parent = self.component_dir.parent().unwrap_or(&self.component_dir);
        file.strip_prefix(parent).unwrap_or(file).to_path_buf()
    }
}

/// Generates the scaffold for `name` inside `components_dir`.
///
/// This function:
/// 1. Refuses to continue if `components_dir/name` already exists.
/// 2. Creates the component folder.
/// 3. Writes `{name}.{source_ext}` and `_{token}.{style_ext}` from the embedded templates.
///
/// # Errors
///
/// * [`ScaffoldError::ComponentExists`] if the folder is already there. Nothing is touched.
/// * [`ScaffoldError::Write`] if creating the folder or a file fails. The partial folder
///   has been rolled back as reported by its `rollback` field.
pub fn generate_component(
    components_dir: &Path,
    name: &ComponentName,
    config: &ScaffoldConfig,
) -> Result<Scaffold> {
    let component_dir = components_dir.join(name.as_str());
    if probe::exists(&component_dir) {
        return Err(ScaffoldError::ComponentExists {
            name: name.to_string(),
            path: component_dir,
        });
    }

    let token = name.style_token();
    let source_name = templates::component_file_name(name, &config.source_ext);
    let style_name = templates::stylesheet_file_name(&token, &config.style_ext);
    let scaffold = Scaffold {
        source_file: component_dir.join(source_name),
        style_file: component_dir.join(style_name),
        component_dir,
        style_token: token,
    };

    // create_dir (not create_dir_all) so a folder appearing since the check is not reused.
    if let Some(parent) = scaffold.component_dir.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| write_error(parent, source, Rollback::Skipped))?;
    }
    fs::create_dir(&scaffold.component_dir).map_err(|source| {
        write_error(&scaffold.component_dir, source, Rollback::Skipped)
    })?;
    log::debug!("Created {}", scaffold.component_dir.display());

    if let Err((path, source)) = write_files(&scaffold, name, config) {
        log::debug!("Writing {} failed: {}", path.display(), source);
        let rollback = rollback(&scaffold.component_dir);
        return Err(write_error(&path, source, rollback));
    }

    Ok(scaffold)
}

fn write_files(
    scaffold: &Scaffold,
    name: &ComponentName,
    config: &ScaffoldConfig,
) -> std::result::Result<(), (PathBuf, io::Error)> {
    let source = templates::render_component(name, &scaffold.style_token, &config.style_ext);
    fs::write(&scaffold.source_file, source).map_err(|e| (scaffold.source_file.clone(), e))?;
    log::debug!("Wrote {}", scaffold.source_file.display());

    let style = templates::render_stylesheet(name, &scaffold.style_token);
    fs::write(&scaffold.style_file, style).map_err(|e| (scaffold.style_file.clone(), e))?;
    log::debug!("Wrote {}", scaffold.style_file.display());

    Ok(())
}

/// Best-effort recursive removal of a partially written component folder.
pub fn rollback(component_dir: &Path) -> Rollback {
    match fs_extra::dir::remove(component_dir) {
        Ok(()) => {
            log::info!("Rolled back {}", component_dir.display());
            Rollback::Removed
        }
        Err(e) => {
            // fs_extra's own message is generic; the OS cause sits in the kind.
            let reason = match &e.kind {
                fs_extra::error::ErrorKind::Io(io) => io.to_string(),
                _ => e.to_string(),
            };
            log::warn!("Rollback of {} failed: {}", component_dir.display(), reason);
            Rollback::Failed(reason)
        }
    }
}

fn write_error(path: &Path, source: io::Error, rollback: Rollback) -> ScaffoldError {
    ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
        rollback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ComponentName {
        ComponentName::parse(raw).unwrap()
    }

    #[test]
    fn test_generate_component_layout() {
        let root = tempfile::tempdir().unwrap();
        let scaffold =
            generate_component(root.path(), &name("ExampleButton"), &ScaffoldConfig::default())
                .unwrap();

        let dir = root.path().join("ExampleButton");
        assert_eq!(scaffold.component_dir, dir);
        assert_eq!(scaffold.source_file, dir.join("ExampleButton.tsx"));
        assert_eq!(scaffold.style_file, dir.join("_example-button.scss"));

        let source = fs::read_to_string(&scaffold.source_file).unwrap();
        assert!(source.starts_with("import \"./_example-button.scss\";"));
        assert!(source.contains("className=\"example-button\""));
        assert!(source.contains("<h1>ExampleButton</h1>"));

        let style = fs::read_to_string(&scaffold.style_file).unwrap();
        assert!(style.starts_with(".example-button {"));

        assert_eq!(
            scaffold.relative(&scaffold.style_file),
            PathBuf::from("ExampleButton/_example-button.scss")
        );
    }

    #[test]
    fn test_creates_missing_components_dir() {
        let root = tempfile::tempdir().unwrap();
        let components = root.path().join("src/components");

        generate_component(&components, &name("Card"), &ScaffoldConfig::default()).unwrap();
        assert!(components.join("Card/Card.tsx").is_file());
    }

    #[test]
    fn test_existing_component_untouched() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("Card");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("Card.tsx"), "original").unwrap();

        let err = generate_component(root.path(), &name("Card"), &ScaffoldConfig::default())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ComponentExists { .. }));
        assert_eq!(fs::read_to_string(dir.join("Card.tsx")).unwrap(), "original");
        assert!(!dir.join("_card.scss").exists());
    }

    #[test]
    fn test_existing_file_with_component_name_collides() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("Card"), "").unwrap();

        let err = generate_component(root.path(), &name("Card"), &ScaffoldConfig::default())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ComponentExists { .. }));
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let root = tempfile::tempdir().unwrap();
        // The stylesheet path points into a folder that never exists, so the second
        // write fails after the component source was already written.
        let config = ScaffoldConfig {
            style_ext: "scss/missing".to_string(),
            ..ScaffoldConfig::default()
        };

        let err = generate_component(root.path(), &name("Broken"), &config).unwrap_err();

        match err {
            ScaffoldError::Write { path, rollback, .. } => {
                assert!(path.ends_with("missing"));
                assert_eq!(rollback, Rollback::Removed);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!root.path().join("Broken").exists());
    }

    #[test]
    fn test_failed_folder_creation_skips_rollback() {
        let root = tempfile::tempdir().unwrap();
        let components = root.path().join("components");
        fs::write(&components, "a file, not a folder").unwrap();

        let err = generate_component(&components, &name("Card"), &ScaffoldConfig::default())
            .unwrap_err();

        match err {
            ScaffoldError::Write { rollback, .. } => assert_eq!(rollback, Rollback::Skipped),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            fs::read_to_string(&components).unwrap(),
            "a file, not a folder"
        );
    }

    #[test]
    fn test_rollback_failure_keeps_os_reason() {
        let root = tempfile::tempdir().unwrap();
        // A regular file exists but cannot be removed as a directory.
        let file = root.path().join("NotAFolder");
        fs::write(&file, "").unwrap();

        match rollback(&file) {
            Rollback::Failed(reason) => {
                assert!(reason.contains("os error"), "reason: {}", reason);
                assert!(!reason.contains("Look inside err_kind"), "reason: {}", reason);
            }
            other => panic!("unexpected rollback: {:?}", other),
        }
        assert!(file.is_file());
    }

    #[test]
    fn test_rollback_of_missing_dir_is_ok() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(rollback(&root.path().join("gone")), Rollback::Removed);
    }
}
