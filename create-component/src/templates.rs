//! Embedded file templates.
//!
//! Templates live under `src/internal/templates` and are compiled into the binary, so the
//! tool works from any directory once installed.

use crate::name::{ComponentName, StyleToken};

const COMPONENT_TEMPLATE: &str = include_str!("internal/templates/component.tsx");
const STYLESHEET_TEMPLATE: &str = include_str!("internal/templates/stylesheet.scss");

/// Fills `{{COMPONENT_NAME}}`, `{{STYLE_TOKEN}}` and `{{STYLE_EXT}}`.
fn replace_placeholders(
    template: &str,
    name: &ComponentName,
    token: &StyleToken,
    style_ext: &str,
) -> String {
    template
        .replace("{{COMPONENT_NAME}}", name.as_str())
        .replace("{{STYLE_TOKEN}}", token.as_str())
        .replace("{{STYLE_EXT}}", style_ext)
}

/// Renders the component source: imports `_{token}.{style_ext}` and default-exports a
/// function component rendering `<div className={token}><h1>{name}</h1></div>`.
pub fn render_component(name: &ComponentName, token: &StyleToken, style_ext: &str) -> String {
    replace_placeholders(COMPONENT_TEMPLATE, name, token, style_ext)
}

/// Renders the stylesheet: a single empty `.{token}` rule.
pub fn render_stylesheet(name: &ComponentName, token: &StyleToken) -> String {
    replace_placeholders(STYLESHEET_TEMPLATE, name, token, "")
}

/// Stylesheet file name for a token, e.g. `_example-button.scss`.
pub fn stylesheet_file_name(token: &StyleToken, style_ext: &str) -> String {
    format!("_{}.{}", token, style_ext)
}

/// Component source file name, e.g. `ExampleButton.tsx`.
pub fn component_file_name(name: &ComponentName, source_ext: &str) -> String {
    format!("{}.{}", name, source_ext)
}
