//! Tests for consuming pipelines from async code

#[cfg(feature = "async")]
mod async_tokio_tests {
    use futures::StreamExt;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use sugars_stream::Stream;

    #[tokio::test]
    async fn test_async_bridge_collects() {
        let values: Vec<i32> = Stream::of(vec![1, 2, 3, 4])
            .filter(|n| n % 2 == 0)
            .into_async()
            .collect()
            .await;
        assert_eq!(values, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_async_bridge_empty() {
        let mut stream = Stream::<u8>::empty().into_async();
        assert_eq!(stream.next().await, None);
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_async_bridge_take_cancels_source() {
        struct ExitFlag(Arc<AtomicBool>);
        impl Drop for ExitFlag {
            fn drop(&mut self) {
                self.0.store(true, Ordering::SeqCst);
            }
        }

        let exited = Arc::new(AtomicBool::new(false));
        let flag = ExitFlag(Arc::clone(&exited));
        let source = Stream::of((0u32..).map(move |n| {
            let _held = &flag;
            n
        }));

        let first: Vec<u32> = source.into_async().take(3).collect().await;
        assert_eq!(first, vec![0, 1, 2]);

        for _ in 0..500 {
            if exited.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(exited.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_async_bridge_resumes_stage_panic() {
        let handle = tokio::spawn(async {
            Stream::of(vec![1, 2, 3])
                .map(|n| {
                    if n == 3 {
                        panic!("async stage failed");
                    }
                    n
                })
                .into_async()
                .collect::<Vec<_>>()
                .await
        });
        let err = handle.await.unwrap_err();
        assert!(err.is_panic());
    }
}
