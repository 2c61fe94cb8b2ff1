use std::sync::Arc;
use std::time::Duration;

use toastkit::{
    Engine, EngineConfig, LogWriter, PromiseBranch, PromiseHandlers, ToastOptions,
};

async fn upload(files: u32, fail: bool) -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(800)).await;
    if fail {
        Err("connection reset".to_string())
    } else {
        Ok(files)
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let engine = Engine::builder(EngineConfig::default())
        .with_subscriber(Arc::new(LogWriter))
        .build();

    // One toast tracks the whole operation: loading, then success.
    let outcome = engine
        .promise(
            upload(3, false),
            PromiseHandlers::new(
                ToastOptions::new().with_title("Uploading"),
                PromiseBranch::render(|n: &u32| {
                    ToastOptions::new().with_title(format!("Uploaded {n} files"))
                }),
                PromiseBranch::render(|e: &String| {
                    ToastOptions::new()
                        .with_title("Upload failed")
                        .with_description(e.clone())
                }),
            ),
        )
        .await?;
    println!("upload outcome: {outcome:?}");

    // Same flow, error path.
    let outcome = engine
        .promise(
            upload(5, true),
            PromiseHandlers::new(
                ToastOptions::new().with_title("Uploading"),
                PromiseBranch::options(ToastOptions::new().with_title("Uploaded")),
                PromiseBranch::render(|e: &String| {
                    ToastOptions::new()
                        .with_title("Upload failed")
                        .with_description(e.clone())
                }),
            ),
        )
        .await?;
    println!("upload outcome: {outcome:?}");

    // Let the terminal toasts auto-dismiss before tearing down.
    tokio::time::sleep(Duration::from_secs(5)).await;
    engine.shutdown().await;
    Ok(())
}
