use clap::Parser;

/// Command-line interface of the scaffolding tool.
#[derive(Parser, Debug)]
#[command(name = "create-component", version)]
#[command(about = "Scaffold a component and its stylesheet", long_about = None)]
pub struct Cli {
    /// The component name in PascalCase (e.g. ExampleButton).
    // Optional so that a missing name is reported by the tool, not by clap.
    #[arg(value_name = "ComponentName")]
    pub name: Option<String>,
}
