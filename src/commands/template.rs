use std::fs;
use std::path::Path;

use anyhow::Context;

use dsctl::config::files::{OBJECT_TYPES_FILE, QUICK_LINKS_FILE};
use dsctl::template::{self, ENV_EXAMPLE_FILE};

use crate::cli::TemplateKind;

pub struct Template;

impl Template {
    /// Write a sample configuration file into the base directory.
    pub fn execute(kind: &TemplateKind, base_dir: &Path) -> anyhow::Result<()> {
        let (name, content) = match kind {
            TemplateKind::ObjectTypes => (OBJECT_TYPES_FILE, template::object_types_json()),
            TemplateKind::QuickLinks => (QUICK_LINKS_FILE, template::quick_links_json()),
            TemplateKind::Env => (ENV_EXAMPLE_FILE, template::example_env()),
        };

        let path = base_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        println!("✓ Generated {}", path.display());
        Ok(())
    }
}
