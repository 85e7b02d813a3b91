//! Shared session builders for end-to-end tests

#![allow(dead_code)]

use noema::{Axes, Edge, EdgeKind, Engine, Node, NodeId, NodeStatus, SessionId, Tag};

/// Moderate attribute profile used by the well-formed fixtures
pub fn moderate_axes() -> Axes {
    Axes {
        clarity: 0.8,
        empathy: 0.5,
        coherence: 0.7,
        resonance: 0.6,
        novelty: 0.4,
        boundary: 0.8,
        ..Axes::default()
    }
}

/// A fully chained graph of `n` anchored, witness/intent-tagged units
pub fn anchored_chain_session(engine: &Engine, n: usize) -> SessionId {
    let session = engine.create_session("anchored-chain");
    for i in 0..n {
        engine
            .add_unit(
                &session,
                Node::with_id(NodeId::from_string(format!("n{i}")), format!("unit-{i}"))
                    .with_status(NodeStatus::Anchored)
                    .with_tag(Tag::Witness)
                    .with_tag(Tag::Intent)
                    .with_axes(moderate_axes()),
            )
            .expect("session exists");
    }
    for i in 0..n.saturating_sub(1) {
        engine
            .link(
                &session,
                Edge::new(format!("n{i}"), format!("n{}", i + 1), EdgeKind::Supports),
            )
            .expect("endpoints exist");
    }
    session
}

/// A chained graph where every unit carries only harm/manipulation tags
pub fn harmful_session(engine: &Engine, n: usize) -> SessionId {
    let session = engine.create_session("harmful");
    for i in 0..n {
        engine
            .add_unit(
                &session,
                Node::with_id(NodeId::from_string(format!("h{i}")), format!("harm-{i}"))
                    .with_tag(Tag::Harm)
                    .with_tag(Tag::Manipulation),
            )
            .expect("session exists");
    }
    for i in 0..n.saturating_sub(1) {
        engine
            .link(
                &session,
                Edge::new(format!("h{i}"), format!("h{}", i + 1), EdgeKind::Supports),
            )
            .expect("endpoints exist");
    }
    session
}

/// A chained graph where most units are held as paradox (Mu)
pub fn paradox_heavy_session(engine: &Engine, n: usize, mu_count: usize) -> SessionId {
    let session = engine.create_session("paradox-heavy");
    for i in 0..n {
        let status = if i < mu_count {
            NodeStatus::Mu
        } else {
            NodeStatus::Anchored
        };
        engine
            .add_unit(
                &session,
                Node::with_id(NodeId::from_string(format!("p{i}")), format!("unit-{i}"))
                    .with_status(status)
                    .with_tag(Tag::Witness)
                    .with_tag(Tag::Intent)
                    .with_axes(moderate_axes()),
            )
            .expect("session exists");
    }
    for i in 0..n.saturating_sub(1) {
        engine
            .link(
                &session,
                Edge::new(format!("p{i}"), format!("p{}", i + 1), EdgeKind::Supports),
            )
            .expect("endpoints exist");
    }
    session
}
