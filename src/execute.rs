// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where the row-parallel stages get their parallelism from.
//!
//! Energy estimation, the within-row half of the cumulative solver,
//! and seam removal all reduce to the same shape: a set of disjoint
//! mutable spans of some backing buffer, plus a task to run over each
//! span.  An [`Executor`] is that capability, handed in by the caller
//! rather than conjured from a global pool.  Seam tracing is a single
//! backward walk and never touches an executor.

#[cfg(feature = "threaded")]
use crossbeam_deque::{Injector, Steal};

/// An injected parallel-for over disjoint mutable spans.
///
/// `run` applies `task` to every span exactly once, in any order, on
/// any thread, and does not return until all of them are done.  That
/// return is a barrier; the cumulative solver depends on it between
/// rows.
pub trait Executor {
    /// How many spans a row is worth slicing into.  One means "don't
    /// bother".
    fn workers(&self) -> usize {
        1
    }

    /// Run `task` over every span.  The `u32` tag travels with its
    /// span and carries whatever the caller needs to locate the span
    /// in the larger buffer: a row index, a starting column.
    fn run<T, F>(&self, spans: Vec<(u32, &mut [T])>, task: F)
    where
        T: Send,
        F: Fn(u32, &mut [T]) + Sync;
}

/// Runs every span on the calling thread, in order.
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn run<T, F>(&self, spans: Vec<(u32, &mut [T])>, task: F)
    where
        T: Send,
        F: Fn(u32, &mut [T]) + Sync,
    {
        for (tag, span) in spans {
            task(tag, span);
        }
    }
}

/// A pool of scoped worker threads draining an injector queue.
/// Nothing outlives the `run` call.
#[cfg(feature = "threaded")]
pub struct ThreadedExecutor {
    workers: usize,
}

#[cfg(feature = "threaded")]
impl ThreadedExecutor {
    /// One worker per logical CPU.
    pub fn new() -> Self {
        ThreadedExecutor {
            workers: num_cpus::get(),
        }
    }

    /// A fixed worker count, for when the caller knows better.
    pub fn with_workers(workers: usize) -> Self {
        ThreadedExecutor {
            workers: workers.max(1),
        }
    }
}

#[cfg(feature = "threaded")]
impl Executor for ThreadedExecutor {
    fn workers(&self) -> usize {
        self.workers
    }

    fn run<T, F>(&self, spans: Vec<(u32, &mut [T])>, task: F)
    where
        T: Send,
        F: Fn(u32, &mut [T]) + Sync,
    {
        let queue = Injector::new();
        for span in spans {
            queue.push(span);
        }
        // The scope join is the barrier the trait contract promises.
        crossbeam::thread::scope(|scope| {
            for _ in 0..self.workers {
                scope.spawn(|_| loop {
                    match queue.steal() {
                        Steal::Success((tag, span)) => task(tag, span),
                        Steal::Empty => break,
                        Steal::Retry => continue,
                    }
                });
            }
        })
        .unwrap();
    }
}
