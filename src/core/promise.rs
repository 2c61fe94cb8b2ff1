//! # Promise adapter: one toast tracking an async operation.
//!
//! [`Engine::promise`] shows a sticky loading toast, awaits the operation,
//! then morphs the **same** toast into its terminal state in place. The id
//! never changes, so a renderer animates a single element through
//! loading → success / error.
//!
//! ```text
//! promise(fut, handlers)
//!     │
//!     ├─ create(loading branch, sticky)     id = "toast-n"
//!     ├─ fut.await
//!     │     Ok(v)  ──► success branch(v) ─┐
//!     │     Err(e) ──► error branch(e)  ──┼─► update(id, patch)
//!     └─ return the original Result ◄─────┘
//! ```
//!
//! ## Rules
//! - the loading toast is sticky; a spinner never times out on its own
//! - terminal patches default to the engine's `default_duration` unless the
//!   branch chose one, so resolved toasts do auto-dismiss
//! - the operation's output passes through untouched; observing it in a
//!   toast never consumes or alters it
//! - dismissing the loading toast mid-flight is tolerated: the terminal
//!   update becomes a no-op, the result is still returned

use std::future::Future;

use crate::core::engine::Engine;
use crate::error::NotifyError;
use crate::toast::{ToastId, ToastOptions, Variant};

/// Terminal content for one branch of a tracked operation.
///
/// Either fixed options, or a closure rendering options from the operation's
/// output (by reference, so the output itself survives).
pub enum PromiseBranch<T> {
    Options(ToastOptions),
    Render(Box<dyn FnOnce(&T) -> ToastOptions + Send>),
}

impl<T> PromiseBranch<T> {
    /// Fixed terminal content.
    pub fn options(opts: impl Into<ToastOptions>) -> Self {
        PromiseBranch::Options(opts.into())
    }

    /// Terminal content rendered from the operation's output.
    pub fn render<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> ToastOptions + Send + 'static,
    {
        PromiseBranch::Render(Box::new(f))
    }

    fn resolve(self, value: &T) -> ToastOptions {
        match self {
            PromiseBranch::Options(opts) => opts,
            PromiseBranch::Render(f) => f(value),
        }
    }
}

/// The three states of a tracked operation.
pub struct PromiseHandlers<T, E> {
    loading: ToastOptions,
    success: PromiseBranch<T>,
    error: PromiseBranch<E>,
}

impl<T, E> PromiseHandlers<T, E> {
    pub fn new(
        loading: impl Into<ToastOptions>,
        success: PromiseBranch<T>,
        error: PromiseBranch<E>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success,
            error,
        }
    }
}

impl Engine {
    /// Tracks `fut` with a single toast: loading while pending, then morphed
    /// in place to the success or error branch.
    ///
    /// Returns the operation's own result; toast bookkeeping never swallows
    /// it. Creation can fail only the way [`notify`](Engine::notify) can
    /// (duplicate external id on the loading options, engine terminated).
    pub async fn promise<T, E, F>(
        &self,
        fut: F,
        handlers: PromiseHandlers<T, E>,
    ) -> Result<Result<T, E>, NotifyError>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.promise_with_id(fut, handlers)
            .await
            .map(|(_, outcome)| outcome)
    }

    /// [`promise`](Engine::promise) variant that also exposes the loading
    /// toast's id, for callers that want to dismiss or annotate mid-flight.
    pub async fn promise_with_id<T, E, F>(
        &self,
        fut: F,
        handlers: PromiseHandlers<T, E>,
    ) -> Result<(ToastId, Result<T, E>), NotifyError>
    where
        F: Future<Output = Result<T, E>>,
    {
        let PromiseHandlers {
            loading,
            success,
            error,
        } = handlers;

        let id = self.loading(loading).await?;
        let outcome = fut.await;

        let (mut patch_opts, variant) = match &outcome {
            Ok(value) => (success.resolve(value), Variant::Success),
            Err(err) => (error.resolve(err), Variant::Error),
        };
        if patch_opts.variant.is_none() {
            patch_opts.variant = Some(variant);
        }
        if patch_opts.duration.is_none() {
            // Terminal states auto-dismiss; only the spinner is sticky.
            patch_opts.duration = Some(self.config().default_duration);
        }

        self.update(&id, patch_opts.into_patch()).await;
        Ok((id, outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::config::EngineConfig;
    use crate::toast::Position;

    fn handlers() -> PromiseHandlers<u32, String> {
        PromiseHandlers::new(
            ToastOptions::new().with_title("Uploading"),
            PromiseBranch::render(|n: &u32| {
                ToastOptions::new().with_title(format!("Uploaded {n} files"))
            }),
            PromiseBranch::render(|e: &String| ToastOptions::new().with_title(e.clone())),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_morphs_same_toast() {
        let eng = Engine::builder(EngineConfig::default()).build();
        let (id, outcome) = eng
            .promise_with_id(async { Ok::<_, String>(3u32) }, handlers())
            .await
            .unwrap();

        assert_eq!(outcome, Ok(3));
        let view = eng.get(&id).await.unwrap();
        assert_eq!(view.variant, Variant::Success);
        assert_eq!(view.title.as_deref(), Some("Uploaded 3 files"));
        // Terminal state picked up the default countdown.
        assert!(!view.is_sticky());
        assert_eq!(eng.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_branch_and_result_passthrough() {
        let eng = Engine::builder(EngineConfig::default()).build();
        let (id, outcome) = eng
            .promise_with_id(
                async { Err::<u32, _>("network down".to_string()) },
                handlers(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, Err("network down".to_string()));
        let view = eng.get(&id).await.unwrap();
        assert_eq!(view.variant, Variant::Error);
        assert_eq!(view.title.as_deref(), Some("network down"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_stays_sticky_until_resolution() {
        let eng = Engine::builder(EngineConfig::default()).build();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let eng2 = std::sync::Arc::clone(&eng);
        let task = tokio::spawn(async move {
            eng2.promise(
                async {
                    rx.await.unwrap();
                    Ok::<_, String>(1u32)
                },
                handlers(),
            )
            .await
        });

        // Give the adapter time to create the loading toast.
        tokio::time::sleep(Duration::from_millis(5)).await;
        let stack = eng.stack(Position::TopRight).await;
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].variant, Variant::Loading);
        assert!(stack[0].is_sticky());

        // A long-running operation never times out its spinner.
        tokio::time::advance(Duration::from_secs(120)).await;
        assert_eq!(eng.len().await, 1);

        tx.send(()).unwrap();
        task.await.unwrap().unwrap().unwrap();
        assert_eq!(
            eng.stack(Position::TopRight).await[0].variant,
            Variant::Success
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolved_toast_auto_dismisses() {
        let eng = Engine::builder(EngineConfig::default()).build();
        eng.promise(async { Ok::<_, String>(1u32) }, handlers())
            .await
            .unwrap()
            .unwrap();

        tokio::time::advance(eng.config().default_duration).await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(eng.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_mid_flight_is_tolerated() {
        let eng = Engine::builder(EngineConfig::default()).build();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let eng2 = std::sync::Arc::clone(&eng);
        let task = tokio::spawn(async move {
            eng2.promise_with_id(
                async {
                    rx.await.unwrap();
                    Ok::<_, String>(9u32)
                },
                handlers(),
            )
            .await
        });

        tokio::time::sleep(Duration::from_millis(5)).await;
        let id = eng.stack(Position::TopRight).await[0].id.clone();
        assert!(eng.dismiss(&id).await);

        tx.send(()).unwrap();
        let (_, outcome) = task.await.unwrap().unwrap();
        // The update hit a gone id (no-op) and the result still came back.
        assert_eq!(outcome, Ok(9));
        assert!(eng.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_branch_options() {
        let eng = Engine::builder(EngineConfig::default()).build();
        let handlers = PromiseHandlers::new(
            "saving",
            PromiseBranch::options(ToastOptions::new().with_title("Saved")),
            PromiseBranch::options("Save failed"),
        );
        let (id, _) = eng
            .promise_with_id(async { Ok::<_, String>(()) }, handlers)
            .await
            .unwrap();

        let view = eng.get(&id).await.unwrap();
        assert_eq!(view.title.as_deref(), Some("Saved"));
        assert_eq!(view.variant, Variant::Success);
    }
}
