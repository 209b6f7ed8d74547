use std::path::Path;

use anyhow::Context;

use dsctl::config::EnvSettings;
use dsctl::export;
use dsctl::remote::{DatasourceApi, HttpApi};
use dsctl::report;

pub struct Pull;

impl Pull {
    /// Fetch a remote datasource record, print its summary, and with
    /// `save` export it to the local file layout.
    pub fn execute(
        id: &str,
        save: bool,
        out: Option<&Path>,
        verbose: bool,
        base_dir: &Path,
        env_file: Option<&Path>,
    ) -> anyhow::Result<()> {
        let settings = EnvSettings::load(base_dir, env_file)?;

        let api_key = settings
            .api_key
            .as_deref()
            .context("INDEXING_API_KEY is not set")?;
        let instance = settings
            .instance
            .as_deref()
            .context("INDEXING_INSTANCE is not set")?;

        if verbose {
            println!("Fetching '{id}' from instance '{instance}'...");
        }

        let api = HttpApi::new(instance, api_key)?;
        let record = api
            .retrieve(id)
            .with_context(|| format!("failed to retrieve datasource '{id}'"))?;

        println!("{}", report::remote_summary(id, &record));

        if save {
            let target = out.unwrap_or(base_dir);
            let manifest = export::export(&record, id, instance, target)?;
            println!("{}", report::export_summary(&manifest));
        } else {
            println!("Tip: add --save to export this configuration to {id}-config/");
        }

        Ok(())
    }
}
