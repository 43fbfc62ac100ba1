//! Runs one `create-component` invocation and reports its progress.
//!
//! Flow: validate name -> locate components dir -> collision check -> write files.
//! Progress lines go to stdout, fatal errors to stderr.

use crate::config::ScaffoldConfig;
use crate::error::{Result, Rollback, ScaffoldError};
use crate::generator::{self, Scaffold};
use crate::locator::{self, ComponentsDir};
use crate::name::ComponentName;
use std::path::Path;

pub const USAGE: &str = "Usage: create-component ComponentName";

/// Scaffolds `raw_name` under the project rooted at `root`.
pub fn run(root: &Path, raw_name: Option<&str>, config: &ScaffoldConfig) -> Result<Scaffold> {
    let name = ComponentName::parse(raw_name.unwrap_or_default())?;
    log::info!("Creating component '{}' under {}", name, root.display());

    let components_dir = locator::locate(root, config)?;
    match &components_dir {
        ComponentsDir::Created(path) => {
            println!("📁 No components folder found. Creating: {}", path.display())
        }
        ComponentsDir::Found(path) => println!("🔍 Using components folder: {}", path.display()),
    }

    let scaffold = generator::generate_component(components_dir.path(), &name, config)?;
    report_success(&name, components_dir.path(), &scaffold);
    Ok(scaffold)
}

fn report_success(name: &ComponentName, components_dir: &Path, scaffold: &Scaffold) {
    println!("✅ Component \"{}\" created successfully!", name);
    println!("📁 Created in: {}/", components_dir.display());
    println!("📄 Created: {}", scaffold.relative(&scaffold.source_file).display());
    println!("🎨 Created: {}", scaffold.relative(&scaffold.style_file).display());
}

/// Prints the single fatal line for `err`, plus usage or rollback hints where relevant.
pub fn report_error(err: &ScaffoldError) {
    eprintln!("❌ {}", err);
    match err {
        ScaffoldError::MissingName => println!("{}", USAGE),
        ScaffoldError::Write {
            rollback: Rollback::Failed(reason),
            path,
            ..
        } => {
            let dir = path.parent().unwrap_or(path);
            eprintln!("{}", rollback_warning(dir, reason));
        }
        _ => {}
    }
}

/// Warning shown when a partial component folder could not be removed.
pub fn rollback_warning(component_dir: &Path, reason: &str) -> String {
    format!(
        "⚠️  Could not remove partial component at {}: {}",
        component_dir.display(),
        reason
    )
}
