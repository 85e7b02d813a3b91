//! Randomized sweeps: every metric stays within its documented bounds on
//! arbitrary graphs and member sets

use noema::metrics::{ethics, flow, scav, structural};
use noema::{
    Axes, CycleInput, Edge, EdgeKind, Engine, GateStatus, Node, NodeId, NodeStatus,
    SemanticGraph, Session, Tag,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

const STATUSES: [NodeStatus; 6] = [
    NodeStatus::Anchored,
    NodeStatus::Floating,
    NodeStatus::Hypothesis,
    NodeStatus::Blocking,
    NodeStatus::Mu,
    NodeStatus::EthicallyBlocked,
];

const TAGS: [Tag; 7] = [
    Tag::Witness,
    Tag::Emotion,
    Tag::Intent,
    Tag::Harm,
    Tag::Manipulation,
    Tag::Deception,
    Tag::Boundary,
];

fn random_graph(rng: &mut StdRng) -> SemanticGraph {
    let n = rng.gen_range(1..=12);
    let mut graph = SemanticGraph::new();
    for i in 0..n {
        let mut node = Node::with_id(NodeId::from_string(format!("r{i}")), format!("unit-{i}"))
            .with_status(STATUSES[rng.gen_range(0..STATUSES.len())])
            .with_axes(Axes {
                clarity: rng.gen_range(0.0..1.0),
                harm: rng.gen_range(0.0..1.0),
                empathy: rng.gen_range(0.0..1.0),
                agency: rng.gen_range(0.0..1.0),
                uncertainty: rng.gen_range(0.0..1.0),
                novelty: rng.gen_range(0.0..1.0),
                coherence: rng.gen_range(0.0..1.0),
                practicality: rng.gen_range(0.0..1.0),
                temporality: rng.gen_range(-0.5..1.5),
                boundary: rng.gen_range(0.0..1.0),
                resonance: rng.gen_range(0.0..1.0),
                shadow: rng.gen_range(-0.5..1.5),
            });
        for tag in TAGS {
            if rng.gen_bool(0.25) {
                node = node.with_tag(tag);
            }
        }
        graph.add_node(node);
    }
    let ids = graph.node_ids().to_vec();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(0.3) {
                graph.add_edge(Edge::new(
                    ids[a].clone(),
                    ids[b].clone(),
                    EdgeKind::Supports,
                ));
            }
        }
    }
    graph
}

fn random_members(rng: &mut StdRng, graph: &SemanticGraph) -> Vec<NodeId> {
    graph
        .node_ids()
        .iter()
        .filter(|_| rng.gen_bool(0.7))
        .cloned()
        .collect()
}

fn in_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[test]
fn test_structural_metrics_stay_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let members = random_members(&mut rng, &graph);
        let member_set: std::collections::HashSet<&NodeId> = members.iter().collect();
        let edges_within = graph.edges_within(&member_set).len();

        assert!(in_unit_interval(structural::temporal_integrity(&graph, &members)));
        assert!(in_unit_interval(structural::coherence_index(&members, edges_within)));
        assert!(in_unit_interval(structural::anchoring_ratio(&graph, &members)));
        assert!(in_unit_interval(structural::freeze_decomposition(&graph, &members)));
        assert!(in_unit_interval(structural::resonance_index(&graph, &members)));
        assert!(in_unit_interval(structural::phi_proxy(&graph, &members)));
        assert!(in_unit_interval(structural::gbi_proxy(&graph, &members)));
        assert!(in_unit_interval(structural::gns_proxy(&graph, &members)));
    }
}

#[test]
fn test_empty_member_set_degenerates_as_documented() {
    let graph = SemanticGraph::new();
    let empty: Vec<NodeId> = Vec::new();
    assert_eq!(structural::temporal_integrity(&graph, &empty), 0.0);
    assert_eq!(structural::anchoring_ratio(&graph, &empty), 0.0);
    assert_eq!(structural::coherence_index(&empty, 0), 1.0);
    assert_eq!(structural::phi_proxy(&graph, &empty), 1.0);
    assert_eq!(structural::gbi_proxy(&graph, &empty), 1.0);
    assert_eq!(flow::flow_metric(&graph, &empty, 0, &[]), 0.0);
}

#[test]
fn test_flow_and_ethics_stay_bounded() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut graph = random_graph(&mut rng);
        let members = random_members(&mut rng, &graph);
        for id in &members {
            ethics::refresh_node(&mut graph, id);
        }

        let flow_score = flow::flow_metric(&graph, &members, graph.edge_count(), &[0.4, 0.7]);
        assert!(in_unit_interval(flow_score));

        let coefficient = ethics::ethical_coefficient(&graph, &members);
        assert!((0.1..=1.0).contains(&coefficient));
    }
}

#[test]
fn test_scav_summary_stays_bounded() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let mut graph = random_graph(&mut rng);
        let members = graph.node_ids().to_vec();
        for id in &members {
            ethics::refresh_node(&mut graph, id);
        }

        let shares: HashMap<NodeId, f64> = members
            .iter()
            .map(|id| (id.clone(), rng.gen_range(0.0..1.0)))
            .collect();
        let weights = scav::compute_weights(&shares);
        let direction = scav::raw_direction(&graph, &members, &weights);
        let shadow = scav::raw_shadow(&graph, &members, &weights);

        let entropy = scav::attention_entropy(&weights);
        assert!(in_unit_interval(entropy));

        let shadow_mag = scav::shadow_magnitude(&direction, &shadow);
        assert!(in_unit_interval(shadow_mag));

        let health = scav::scav_health(
            scav::consistency_metric(&[0.2, 0.4, 0.3], 1.0),
            scav::resonance_metric(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)),
            entropy,
            shadow_mag,
        );
        assert!(in_unit_interval(health));
    }
}

#[test]
fn test_workflow_never_panics_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(17);
    let engine = Engine::new();
    for i in 0..50 {
        let graph = random_graph(&mut rng);
        let mut session = Session::new(format!("random-{i}"));
        session.graph = graph;
        let id = engine.insert_session(noema::SessionId::from_string(format!("random-{i}")), session);

        let outcome = engine.run_cycle(&id, &CycleInput::default()).expect("session exists");

        assert!(in_unit_interval(outcome.blocked_fraction));
        match outcome.gate_status {
            GateStatus::Pass => {
                assert!(outcome.fail_code.is_none());
                assert!(outcome.chosen_vector.is_some());
            }
            GateStatus::Fail => {
                assert!(outcome.fail_code.is_some());
                assert!(outcome.recovery.is_some(), "fatal paths carry a suggestion");
            }
        }
    }
}
