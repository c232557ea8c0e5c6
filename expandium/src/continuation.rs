use tokio::sync::oneshot;

/// Single-shot resume handle handed to callback-style code by [`suspend`]
///
/// Resuming consumes the handle, so a continuation can fire at most once;
/// double-resume is unrepresentable rather than checked at run time.
#[derive(Debug)]
pub struct Continuation<T> {
    sender: oneshot::Sender<T>,
}

impl<T> Continuation<T> {
    /// Resume the suspended caller with `value`.
    pub fn resume(self, value: T) {
        // A send only fails if the suspended future was dropped first, in
        // which case there is no caller left to resume.
        let _ = self.sender.send(value);
    }
}

/// Suspend until the continuation handed to `start` is resumed.
///
/// `start` receives a [`Continuation`] and is expected to arrange for it
/// to be resumed exactly once, typically by passing a resuming closure
/// to a callback-style function.
///
/// # Panics
///
/// Panics if the continuation is dropped without a resume: a bridged
/// callback that never fires is a programming error, not a condition to
/// wait out.
pub async fn suspend<T, F>(start: F) -> T
where
    F: FnOnce(Continuation<T>),
{
    let (sender, receiver) = oneshot::channel();
    start(Continuation { sender });
    match receiver.await {
        Ok(value) => value,
        Err(_) => panic!("continuation dropped without resume"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resume_delivers_the_value() {
        let value = suspend(|continuation| continuation.resume(42)).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn resume_works_across_threads() {
        let value = suspend(|continuation| {
            std::thread::spawn(move || continuation.resume("done"));
        })
        .await;
        assert_eq!(value, "done");
    }

    #[tokio::test]
    async fn resume_before_await_is_not_lost() {
        // The callback fires synchronously inside `start`, before the
        // suspension point is ever polled.
        let value = suspend(|continuation| continuation.resume(7_u8)).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    #[should_panic(expected = "continuation dropped without resume")]
    async fn dropped_continuation_panics() {
        let _: i32 = suspend(|continuation| drop(continuation)).await;
    }
}
