//! Files written into a new project.

use super::PackageId;
use crate::bundler::{Result, error::Context, settings::DEFAULT_INSTALLER_ARGUMENTS};
use handlebars::Handlebars;
use serde_json::json;

/// Version given to new projects.
pub const DEFAULT_VERSION: &str = "1.0.0.0";

const MANIFEST_TEMPLATE: &str = r#"# appshell project manifest
[app]
package_id = "{{package_id}}"
name = "{{name}}"
version = "{{version}}"
display_name = "{{name}}"

[windows]
manufacturer = "{{manufacturer}}"
# Desktop installer wrapped by `appshell build appx`, relative to this file
installer = ""
installer_arguments = "{{installer_arguments}}"
"#;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{{name}}</title>
    <link rel="manifest" href="manifest.json">
  </head>
  <body>
    <h1>{{name}}</h1>
    <p>{{package_id}} {{version}}</p>
  </body>
</html>
"#;

/// Escape for TOML basic strings.
fn escape_toml(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn template_data(package_id: &PackageId) -> serde_json::Value {
    json!({
        "package_id": package_id.as_str(),
        "name": package_id.name(),
        "version": DEFAULT_VERSION,
        "manufacturer": package_id.organization(),
        "installer_arguments": DEFAULT_INSTALLER_ARGUMENTS,
    })
}

/// Render `appshell.toml`.
pub fn project_manifest(package_id: &PackageId) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(escape_toml);
    Ok(handlebars.render_template(MANIFEST_TEMPLATE, &template_data(package_id))?)
}

/// Render `app/index.html`.
pub fn index_html(package_id: &PackageId) -> Result<String> {
    let handlebars = Handlebars::new();
    Ok(handlebars.render_template(INDEX_TEMPLATE, &template_data(package_id))?)
}

/// Contents of `app/manifest.json`.
pub fn web_manifest(package_id: &PackageId) -> Result<String> {
    let manifest = json!({
        "name": package_id.name(),
        "xwalk_package_id": package_id.as_str(),
        "version": DEFAULT_VERSION,
        "start_url": "index.html",
    });
    serde_json::to_string_pretty(&manifest)
        .map(|s| s + "\n")
        .context("failed to serialize manifest.json")
}
