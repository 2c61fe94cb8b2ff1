use std::sync::Arc;
use std::time::Duration;

use toastkit::{Engine, EngineConfig, LogWriter, Position, ToastOptions};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let mut cfg = EngineConfig::default();
    cfg.max_visible = 3;
    cfg.default_duration = Duration::ZERO;

    let engine = Engine::builder(cfg)
        .with_subscriber(Arc::new(LogWriter))
        .build();

    // Overfill one anchor: the cap evicts the oldest toasts.
    for i in 1..=5 {
        engine
            .notify(
                ToastOptions::new()
                    .with_id(format!("build-{i}"))
                    .with_title(format!("Build #{i} finished"))
                    .with_position(Position::BottomRight),
            )
            .await?;
    }

    // A second anchor has its own independent cap.
    engine
        .notify(
            ToastOptions::new()
                .with_title("Deploy started")
                .with_position(Position::TopCenter),
        )
        .await?;

    tokio::time::sleep(Duration::from_millis(100)).await;
    for stack in engine.stacks().await {
        let offset = if stack.position.is_top() {
            engine.config().offset_top
        } else {
            engine.config().offset_bottom
        };
        println!("{} (offset {offset}px):", stack.position.as_label());
        for toast in &stack.toasts {
            println!("  {} {:?}", toast.id, toast.title);
        }
    }

    engine.dismiss_position(Position::BottomRight).await;
    println!("after sweep: {} live", engine.len().await);

    engine.shutdown().await;
    Ok(())
}
