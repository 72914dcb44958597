//! Compile every stored service set into config files on disk.
//!
//! Configuration comes from the environment (or a `.env` file):
//! `DATABASE_URL` (required), `SETFORGE_DIALECT` (`modern`/`legacy`),
//! `SETFORGE_OUT` (output directory, default `rendered`),
//! `SETFORGE_MIGRATE=1` to run schema migrations first.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use setforge_compiler::{ConfigOutput, ConfigRenderer, PgStore, VarEqualsMatcher};
use setforge_core::emit::Dialect;
use setforge_db::repositories::ServiceSetRepo;
use setforge_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = DbPool::connect(&database_url)
        .await
        .context("connecting to database")?;

    if std::env::var("SETFORGE_MIGRATE").as_deref() == Ok("1") {
        setforge_db::MIGRATOR
            .run(&pool)
            .await
            .context("running migrations")?;
    }

    let dialect = match std::env::var("SETFORGE_DIALECT").as_deref() {
        Ok("legacy") => Dialect::Legacy,
        _ => Dialect::Modern,
    };
    let out_dir =
        PathBuf::from(std::env::var("SETFORGE_OUT").unwrap_or_else(|_| "rendered".to_string()));

    let sets = ServiceSetRepo::list_all(&pool)
        .await
        .context("loading service sets")?;

    let store = PgStore::new(pool);
    let matcher = VarEqualsMatcher;
    let renderer = ConfigRenderer::new(&store, &matcher);

    let mut config = ConfigOutput::new(dialect);
    for set in &sets {
        renderer
            .render_to_config(set, &mut config)
            .await
            .with_context(|| format!("rendering service set '{}'", set.object_name))?;
    }

    for (path, file) in config.files() {
        let target = out_dir.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&target, file.content())
            .with_context(|| format!("writing {}", target.display()))?;
        tracing::info!(path = %target.display(), "wrote config file");
    }

    tracing::info!(
        sets = sets.len(),
        files = config.files().len(),
        "compile complete"
    );
    Ok(())
}
