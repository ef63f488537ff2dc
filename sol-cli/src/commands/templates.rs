//! Starter templates

use crate::utils::print_success;
use anyhow::{bail, Context, Result};
use colored::*;
use sol_editor::templates::{self, TEMPLATES};
use std::fs;
use std::path::Path;

pub fn templates_command() -> Result<()> {
    for template in TEMPLATES {
        let marker = if template.key == templates::DEFAULT_TEMPLATE {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {:<8} {}{}", template.key.cyan(), template.label, marker);
    }
    Ok(())
}

pub fn new_command(path: &Path, template: &str, force: bool) -> Result<()> {
    let Some(template) = templates::find(template) else {
        let known: Vec<&str> = TEMPLATES.iter().map(|t| t.key).collect();
        bail!(
            "Unknown template '{}' (available: {})",
            template,
            known.join(", ")
        );
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, template.source)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    print_success(&format!(
        "Created {} from the {} template",
        path.display(),
        template.label
    ));
    Ok(())
}
