use std::path::PathBuf;

/// Static layout of a scaffold: where to look for the components folder and which
/// file extensions to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Components folder candidates relative to the project root, highest priority first.
    pub candidates: Vec<PathBuf>,
    /// Folder created when no candidate exists.
    pub fallback: PathBuf,
    pub source_ext: String,
    pub style_ext: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            // Common layouts in Next.js style projects
            candidates: [
                "components",
                "src/components",
                "app/components",
                "src/app/components",
                "lib/components",
                "src/lib/components",
            ]
            .iter()
            .map(PathBuf::from)
            .collect(),
            fallback: PathBuf::from("src/components"),
            source_ext: "tsx".to_string(),
            style_ext: "scss".to_string(),
        }
    }
}
