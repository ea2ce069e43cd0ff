//! Worker pool for checking units in parallel.

use anyhow::Result;
use rayon::ThreadPool;

/// Build a local rayon pool. `jobs` defaults to the number of CPUs and is
/// clamped to at least one worker.
pub fn build_thread_pool(jobs: Option<usize>) -> Result<ThreadPool> {
    let cores = num_cpus::get();
    let workers = jobs.unwrap_or(cores).max(1);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("gclint-worker-{}", i))
        .build()?;

    tracing::debug!(workers, cores, "initialized thread pool");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size() {
        assert_eq!(build_thread_pool(Some(3)).unwrap().current_num_threads(), 3);
        assert_eq!(build_thread_pool(Some(0)).unwrap().current_num_threads(), 1);
        assert!(build_thread_pool(None).unwrap().current_num_threads() >= 1);
    }
}
