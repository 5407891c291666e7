//! Reset command - unconditional wipe of both collections.
//!
//! This is the dangerous administrative counterpart of the `delete_all`
//! test hook; it only runs with an explicit `--yes`.

use crate::cli::ResetArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{
    Database, RegistrationRepository, RegistrationStore, StudentRepository, StudentStore,
};

/// Execute the reset command
pub async fn execute(args: ResetArgs, config: Config) -> AppResult<()> {
    if !args.yes {
        return Err(AppError::internal(
            "reset wipes every registration and student record; re-run with --yes to confirm",
        ));
    }

    let db = Database::connect(&config).await?;

    let registrations = RegistrationStore::new(&db).delete_all().await?;
    let students = StudentStore::new(&db).delete_all().await?;

    tracing::info!(registrations, students, "collections wiped");
    Ok(())
}
