//! Repeated runs on the same immutable graph must return identical labels.

use concord_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::EngineBuilder;

use super::agreement::{STRATEGIES, available_backends};
use super::types::GraphFixture;

pub(super) fn run_repetition_property(fixture: &GraphFixture) -> TestCaseResult {
    let repetitions = ProptestRunProfile::load(64, false).repetitions();
    let original = fixture.graph.clone();

    for strategy in STRATEGIES {
        for backend in available_backends() {
            let engine = EngineBuilder::new()
                .with_strategy(strategy)
                .with_backend(backend)
                .with_workers(8)
                .with_chunk_size(1)
                .build()
                .map_err(|err| TestCaseError::fail(format!("engine build failed: {err}")))?;
            let baseline = engine
                .labels(&fixture.graph)
                .map_err(|err| TestCaseError::fail(format!("baseline run failed: {err}")))?;

            for run in 1..repetitions {
                let labels = engine
                    .labels(&fixture.graph)
                    .map_err(|err| TestCaseError::fail(format!("run {run} failed: {err}")))?;
                if labels != baseline {
                    return Err(TestCaseError::fail(format!(
                        "run {run} diverged (strategy={strategy}, backend={backend}, {})",
                        fixture.describe()
                    )));
                }
            }
        }
    }

    if fixture.graph != original {
        return Err(TestCaseError::fail("graph was mutated by a run"));
    }
    Ok(())
}
