use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use chrono_tz::Tz;
use thiserror::Error;

use super::models::DeviceRef;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("{0} items exceed the work queue capacity of {1}")]
    Capacity(usize, usize),
    #[error("could not start worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// One device to process, with the timezone its timestamps are rendered in
#[derive(Clone, Debug, PartialEq)]
pub struct WorkItem {
    pub device: DeviceRef,
    pub timezone: Tz,
}

impl Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device {} - ID {}", self.device.name, self.device.id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub processed: usize,
    pub failed: usize,
    /// Workers that died on a panic; their peers keep draining the queue
    pub crashed_workers: usize,
}

/// Enqueue every item on a bounded queue, then drain it with `workers`
/// threads and block until all of them have exited.
///
/// The sender is dropped before the workers start, so each worker stops once
/// the queue is both empty and closed. A handler error only ends its own item.
pub fn drain<T, F, E>(
    items: Vec<T>,
    workers: usize,
    capacity: usize,
    handler: F,
) -> Result<PoolStats, QueueError>
where
    T: Display + Send,
    F: Fn(&T) -> Result<(), E> + Sync,
    E: Display,
{
    if items.len() > capacity {
        return Err(QueueError::Capacity(items.len(), capacity));
    }

    let (tx, rx) = flume::bounded::<T>(capacity);
    for item in items {
        // `rx` is held here, so the channel cannot be disconnected
        let sent = tx.send(item).is_ok();
        debug_assert!(sent);
    }
    drop(tx);
    log::debug!("Enqueued {} items for {} workers", rx.len(), workers);

    let processed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let mut crashed_workers = 0;

    thread::scope(|s| -> Result<(), QueueError> {
        let mut handles = Vec::with_capacity(workers);
        for n in 0..workers.max(1) {
            let rx = rx.clone();
            let (handler, processed, failed) = (&handler, &processed, &failed);
            let handle = thread::Builder::new()
                .name(format!("worker-{n}"))
                .spawn_scoped(s, move || {
                    for item in rx.iter() {
                        match handler(&item) {
                            Ok(()) => processed.fetch_add(1, Ordering::Relaxed),
                            Err(e) => {
                                log::error!("Failed processing {}: {}", item, e);
                                failed.fetch_add(1, Ordering::Relaxed)
                            }
                        };
                    }
                })?;
            handles.push(handle);
        }
        for handle in handles {
            if handle.join().is_err() {
                log::error!("Worker thread panicked");
                crashed_workers += 1;
            }
        }
        Ok(())
    })?;

    if !rx.is_empty() {
        log::error!("{} items left unprocessed", rx.len());
    }

    Ok(PoolStats {
        processed: processed.into_inner(),
        failed: failed.into_inner(),
        crashed_workers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    struct Job(usize);

    impl Display for Job {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "job {}", self.0)
        }
    }

    fn jobs(n: usize) -> Vec<Job> {
        (0..n).map(Job).collect()
    }

    fn drain_counting(n: usize, workers: usize) -> (PoolStats, HashMap<usize, usize>) {
        let seen = Mutex::new(HashMap::new());
        let stats = drain(jobs(n), workers, 9999, |job: &Job| -> Result<(), String> {
            *seen.lock().unwrap().entry(job.0).or_insert(0) += 1;
            Ok(())
        })
        .unwrap();
        (stats, seen.into_inner().unwrap())
    }

    #[test]
    fn every_item_processed_exactly_once() {
        for n in [1, 4, 5, 6, 137] {
            let (stats, seen) = drain_counting(n, 5);
            assert_eq!(stats.processed, n);
            assert_eq!(seen.len(), n);
            assert!(seen.values().all(|&count| count == 1));
        }
    }

    #[test]
    fn empty_queue_completes_without_work() {
        let (stats, seen) = drain_counting(0, 5);
        assert_eq!(stats, PoolStats::default());
        assert!(seen.is_empty());
    }

    #[test]
    fn failures_do_not_stop_other_items() {
        let stats = drain(jobs(20), 5, 9999, |job: &Job| {
            if job.0 % 4 == 0 {
                Err(format!("remote error on {}", job.0))
            } else {
                Ok(())
            }
        })
        .unwrap();
        assert_eq!(stats.processed, 15);
        assert_eq!(stats.failed, 5);
    }

    #[test]
    fn panicking_worker_leaves_rest_to_peers() {
        let stats = drain(jobs(30), 5, 9999, |job: &Job| -> Result<(), String> {
            if job.0 == 3 {
                panic!("boom");
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(stats.crashed_workers, 1);
        assert_eq!(stats.processed, 29);
    }

    #[test]
    fn over_capacity_is_rejected() {
        let res = drain(jobs(11), 5, 10, |_: &Job| -> Result<(), String> { Ok(()) });
        assert!(matches!(res, Err(QueueError::Capacity(11, 10))));
    }

    #[test]
    fn work_item_display() {
        let item = WorkItem {
            device: DeviceRef {
                id: "dev1".into(),
                name: "Cold room".into(),
            },
            timezone: chrono_tz::UTC,
        };
        assert_eq!(item.to_string(), "device Cold room - ID dev1");
    }
}
