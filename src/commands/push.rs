use std::path::Path;

use anyhow::Context;

use dsctl::config::{self, EnvSettings};
use dsctl::remote::HttpApi;
use dsctl::report;
use dsctl::sync::wire::{self, RemoteDatasource};
use dsctl::sync::{SyncEngine, SyncOutcome};

use crate::interactive;

pub struct Push;

impl Push {
    /// Assemble the local configuration and create-or-update the remote
    /// record under its ID.
    pub fn execute(
        force: bool,
        yes: bool,
        verbose: bool,
        base_dir: &Path,
        env_file: Option<&Path>,
    ) -> anyhow::Result<()> {
        let settings = EnvSettings::load(base_dir, env_file)?;

        let assembled = config::assemble(&settings, base_dir).context(
            "configuration could not be assembled (run 'dsctl template env' for a starter env file)",
        )?;

        println!("{}", report::config_summary(&assembled));

        let api_key = settings
            .api_key
            .as_deref()
            .context("INDEXING_API_KEY is not set")?;
        let instance = settings
            .instance
            .as_deref()
            .context("INDEXING_INSTANCE is not set")?;

        if verbose {
            println!("Pushing to instance '{instance}'...");
        }

        let api = HttpApi::new(instance, api_key)?;
        let engine = SyncEngine::new(&api);

        let id = assembled.config.id.clone();
        let local_record = wire::to_remote(&assembled.config);
        let mut confirm = |existing: &RemoteDatasource| {
            interactive::confirm_overwrite(&id, &local_record, existing)
        };

        match engine.push(&assembled.config, force || yes, &mut confirm)? {
            SyncOutcome::Created => {
                println!("✓ Created datasource '{id}'");
            }
            SyncOutcome::Updated => {
                println!("✓ Updated datasource '{id}'");
            }
            SyncOutcome::Aborted => {
                println!("Aborted: existing configuration left unchanged");
            }
        }

        Ok(())
    }
}
