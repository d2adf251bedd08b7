use futures::future::join_all;
use tokio::task::{self, JoinHandle};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::worker::{create_workers, Worker};

/// Run the two-phase protocol over `workers`: every `map` on its own
/// blocking task, a join-all barrier, then a strictly sequential
/// left-to-right fold into the first worker.
pub async fn execute<W: Worker>(workers: Vec<W>) -> Result<W::Output> {
    if workers.is_empty() {
        return Err(Error::EmptyInput);
    }

    let handles: Vec<JoinHandle<Result<W>>> = workers
        .into_iter()
        .map(|mut worker| {
            let task_id = Uuid::new_v4();
            task::spawn_blocking(move || {
                debug!(%task_id, "map task start");
                worker.map()?;
                debug!(%task_id, "map task done");
                Ok(worker)
            })
        })
        .collect();

    // Barrier: every map finishes before any reduce may observe a result.
    // On failure the first error in worker order wins.
    let mut mapped = Vec::with_capacity(handles.len());
    for joined in join_all(handles).await {
        mapped.push(joined??);
    }
    debug!(workers = mapped.len(), "map phase complete");

    let mut rest = mapped.into_iter();
    // non-empty checked above
    let Some(mut accumulator) = rest.next() else {
        return Err(Error::EmptyInput);
    };
    for worker in rest {
        accumulator.reduce(&worker);
    }
    debug!("reduce phase complete");

    accumulator.into_result().ok_or(Error::NoResult)
}

/// The single entry point: enumerate inputs for `config`, bind one worker
/// per input, and execute both phases.
pub async fn mapreduce<W: Worker>(config: &Config) -> Result<W::Output> {
    let workers = create_workers::<W>(config)?;
    execute(workers).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;
    use crate::input::InputSource;

    struct ProbeInput {
        delay: Duration,
        mapped: Arc<AtomicUsize>,
        total: usize,
    }

    impl InputSource for ProbeInput {
        fn read(&self) -> Result<String> {
            Ok(String::new())
        }

        fn generate(_config: &Config) -> Result<Vec<Self>> {
            Ok(Vec::new())
        }
    }

    /// Sleeps through `map`, then checks in `reduce` that no map is still
    /// outstanding anywhere.
    struct BarrierWorker {
        input: ProbeInput,
        result: Option<usize>,
    }

    impl Worker for BarrierWorker {
        type Source = ProbeInput;
        type Output = usize;

        fn bind(input: ProbeInput) -> Self {
            Self {
                input,
                result: None,
            }
        }

        fn map(&mut self) -> Result<()> {
            sleep(self.input.delay);
            self.input.mapped.fetch_add(1, Ordering::SeqCst);
            self.result = Some(1);
            Ok(())
        }

        fn reduce(&mut self, other: &Self) {
            assert_eq!(
                self.input.mapped.load(Ordering::SeqCst),
                self.input.total,
                "reduce ran before every map completed"
            );
            self.result = Some(self.result.unwrap_or(0) + other.result.unwrap_or(0));
        }

        fn result(&self) -> Option<&usize> {
            self.result.as_ref()
        }

        fn into_result(self) -> Option<usize> {
            self.result
        }
    }

    #[tokio::test]
    async fn every_map_completes_before_any_reduce() {
        let mapped = Arc::new(AtomicUsize::new(0));
        let total = 8;
        let workers: Vec<BarrierWorker> = (0..total)
            .map(|i| {
                BarrierWorker::bind(ProbeInput {
                    // earlier workers sleep longest, so later ones are done
                    // well before the barrier opens
                    delay: Duration::from_millis((total - i) as u64 * 10),
                    mapped: Arc::clone(&mapped),
                    total,
                })
            })
            .collect();

        let combined = execute(workers).await.unwrap();
        assert_eq!(combined, total);
    }

    #[tokio::test]
    async fn empty_collection_is_an_error() {
        let err = execute(Vec::<BarrierWorker>::new()).await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }
}
