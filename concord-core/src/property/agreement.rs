//! Every strategy and backend against the breadth-first-search oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::bfs_labels;
use crate::{Backend, EngineBuilder, Strategy};

use super::types::GraphFixture;

/// Worker counts exercised per backend, including oversubscription.
pub(super) const WORKER_COUNTS: [usize; 4] = [1, 2, 8, 17];

pub(super) const STRATEGIES: [Strategy; 2] = [Strategy::LabelPropagation, Strategy::UnionFind];

/// Backends compiled into this build.
pub(super) fn available_backends() -> impl Iterator<Item = Backend> {
    Backend::ALL.into_iter().filter(|backend| backend.is_available())
}

/// Checks labels and counts of every engine configuration against BFS.
pub(super) fn run_oracle_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let expected = bfs_labels(&fixture.graph);
    let expected_count = expected
        .iter()
        .enumerate()
        .filter(|&(node, &label)| node == label)
        .count();

    for strategy in STRATEGIES {
        for backend in available_backends() {
            for workers in WORKER_COUNTS {
                let engine = EngineBuilder::new()
                    .with_strategy(strategy)
                    .with_backend(backend)
                    .with_workers(workers)
                    .with_chunk_size(3)
                    .build()
                    .map_err(|err| TestCaseError::fail(format!("engine build failed: {err}")))?;
                let context = || {
                    format!(
                        "strategy={strategy}, backend={backend}, workers={workers}, {}",
                        fixture.describe()
                    )
                };

                let count = engine
                    .count(&fixture.graph)
                    .map_err(|err| TestCaseError::fail(format!("count failed: {err} ({})", context())))?;
                if count != expected_count {
                    return Err(TestCaseError::fail(format!(
                        "count {count} != oracle {expected_count} ({})",
                        context()
                    )));
                }

                let labels = engine
                    .labels(&fixture.graph)
                    .map_err(|err| TestCaseError::fail(format!("labels failed: {err} ({})", context())))?;
                if labels.as_slice() != expected.as_slice() {
                    return Err(TestCaseError::fail(format!(
                        "labels diverged from oracle ({})",
                        context()
                    )));
                }
            }
        }
    }
    Ok(())
}
