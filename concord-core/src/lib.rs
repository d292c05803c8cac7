//! Concord core library: concurrent connected components over sparse
//! boolean adjacency matrices.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod backend;
mod builder;
mod disjoint_set;
mod engine;
mod error;
mod graph;
mod labels;
mod strategy;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{Backend, DEFAULT_CHUNK_SIZE, DEFAULT_WORKERS, EngineBuilder, Strategy},
    engine::{ComponentsEngine, compute_components},
    error::{ComponentsError, ComponentsErrorCode, GraphError, GraphErrorCode, Result},
    graph::CscGraph,
    labels::ComponentLabels,
};
