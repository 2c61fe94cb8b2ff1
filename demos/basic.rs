use std::sync::Arc;
use std::time::Duration;

use toastkit::{Engine, EngineConfig, LogWriter, ToastOptions, ToastPatch, Variant};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let mut cfg = EngineConfig::default();
    cfg.default_duration = Duration::from_secs(2);

    let engine = Engine::builder(cfg)
        .with_subscriber(Arc::new(LogWriter))
        .build();

    // Variant sugar with the engine defaults.
    engine.success("Profile saved").await?;
    engine.warning("Disk almost full").await?;

    // A named sticky toast, morphed in place a moment later.
    let id = engine
        .notify(
            ToastOptions::new()
                .with_id("sync")
                .with_title("Syncing")
                .with_description("3 documents pending")
                .with_duration(Duration::ZERO),
        )
        .await?;

    tokio::time::sleep(Duration::from_millis(500)).await;
    engine
        .update(
            &id,
            ToastPatch::new()
                .with_variant(Variant::Success)
                .with_title("Synced")
                .with_description("All documents up to date")
                .with_duration(Duration::from_secs(2)),
        )
        .await;

    // Let the countdowns run out, then observe the empty registry.
    tokio::time::sleep(Duration::from_secs(3)).await;
    println!("live toasts: {}", engine.len().await);

    engine.shutdown().await;
    Ok(())
}
