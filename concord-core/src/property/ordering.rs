//! Reversing the column scan order must not change the partition.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::EngineBuilder;

use super::agreement::{STRATEGIES, available_backends};
use super::strategies::mirrored;
use super::types::GraphFixture;

pub(super) fn run_order_independence_property(fixture: &GraphFixture) -> TestCaseResult {
    let reversed = mirrored(&fixture.graph);
    let nodes = fixture.graph.node_count();

    for strategy in STRATEGIES {
        for backend in available_backends() {
            let engine = EngineBuilder::new()
                .with_strategy(strategy)
                .with_backend(backend)
                .with_workers(4)
                .build()
                .map_err(|err| TestCaseError::fail(format!("engine build failed: {err}")))?;
            let forward = engine
                .labels(&fixture.graph)
                .map_err(|err| TestCaseError::fail(format!("forward run failed: {err}")))?;
            let backward = engine
                .labels(&reversed)
                .map_err(|err| TestCaseError::fail(format!("reversed run failed: {err}")))?;

            if forward.component_count() != backward.component_count() {
                return Err(TestCaseError::fail(format!(
                    "component count changed under reversal: {} vs {} \
                     (strategy={strategy}, backend={backend}, {})",
                    forward.component_count(),
                    backward.component_count(),
                    fixture.describe()
                )));
            }

            for left in 0..nodes {
                for right in left + 1..nodes {
                    let before = forward.same_component(left, right);
                    let after = backward.same_component(nodes - 1 - left, nodes - 1 - right);
                    if before != after {
                        return Err(TestCaseError::fail(format!(
                            "nodes {left} and {right} changed membership under reversal \
                             (strategy={strategy}, backend={backend}, {})",
                            fixture.describe()
                        )));
                    }
                }
            }
        }
    }
    Ok(())
}
