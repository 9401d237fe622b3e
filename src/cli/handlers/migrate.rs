//! Migrate command handler

use crate::config::Settings;
use crate::db;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Applies pending migrations, lists them on `dry_run`, or reverts
    /// `rollback` steps.
    ///
    /// # Errors
    ///
    /// Fails on an invalid database section, an unreachable database, or a
    /// migration that does not apply cleanly.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if dry_run {
            let pending = db::pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                print_names(&pending);
                println!("\nRun without --dry-run to apply them");
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            tracing::warn!(steps, "Reverting database migrations");
            let reverted = db::revert_migrations(url, steps).await?;
            if reverted.is_empty() {
                println!("✓ No applied migrations to revert");
            } else {
                println!("✓ Reverted {} migration(s):", reverted.len());
                print_names(&reverted);
            }
            if (reverted.len() as u32) < steps {
                println!("Requested {steps} step(s); the database had no more to revert");
            }
            return Ok(());
        }

        let applied = db::run_pending_migrations(url).await?;
        tracing::info!(count = applied.len(), "Database migrations applied");
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            print_names(&applied);
        }
        Ok(())
    }
}

fn print_names(names: &[String]) {
    for name in names {
        println!("  - {name}");
    }
}
