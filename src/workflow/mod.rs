//! The twelve-phase workflow: one invocation from precondition scan to
//! learning commit
//!
//! Phases run strictly in order with early return on fatal failure; no phase
//! is revisited within one invocation. Session state commits happen at two
//! points only: the alignment/gap history append inside the selection phase,
//! and the full cycle record in the learning phase. A fatal failure before
//! the history append leaves session state untouched; a failure after it
//! keeps the appended history so aggregate alignment/gap statistics reflect
//! every attempted selection.

mod input;
mod outcome;

pub use input::{CycleInput, Signal};
pub use outcome::{
    CycleOutcome, CycleTrace, FlowAdvisory, GateStatus, HallucinationReport, MetricSnapshot,
    Phase, PhaseEntry, ShadowOutcome,
};

use crate::config::EngineConfig;
use crate::gate::AdmissionGate;
use crate::generator::CandidateGenerator;
use crate::graph::{
    AvoidedMarker, Edge, EdgeKind, NodeId, NodeStatus, SemanticGraph, VectorId,
};
use crate::metrics::{capital, clamp01, ethics, flow, scav, stereoscopic, structural, temporal};
use crate::recovery::{self, FailCode};
use crate::session::{AdaptiveParameters, Cmp, ParameterKind, ParameterUpdate, SessionState};
use crate::space::{norm, normalize, Intent};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Mark a fatal short-circuit: look up the recovery suggestion, stamp the
/// failure audit trail, and finish the outcome.
fn short_circuit(
    mut outcome: CycleOutcome,
    state: &mut SessionState,
    code: FailCode,
    action: &str,
) -> CycleOutcome {
    let recovery = recovery::lookup(code);
    outcome.log_phase(
        Phase::RecoveryLookup,
        format!("{code}: {}", recovery.next_step),
    );
    outcome.gate_status = GateStatus::Fail;
    outcome.fail_code = Some(code);
    outcome.recovery = Some(recovery);
    state.record_fail(code, action, "blocked");
    info!(code = %code, action, "cycle short-circuited");
    outcome
}

/// Recompute the ethics caches of a unit and its neighborhood after a
/// status, marker, or edge change inside the workflow.
fn refresh_touched(graph: &mut SemanticGraph, id: &NodeId) {
    ethics::refresh_node(graph, id);
    for nb in graph.neighbors(id) {
        ethics::refresh_node(graph, &nb);
    }
}

/// When rank or amplitude disagreement has been sustained over the
/// configured number of cycles, hold the conflicted candidate members as
/// paradox (Mu) instead of forcing a resolution.
///
/// A unit qualifies when its uncertainty axis is high or its identity
/// alignment is exactly neutral; units already held or ethically blocked are
/// never touched.
fn mark_sustained_paradoxes(
    graph: &mut SemanticGraph,
    candidates: &[crate::graph::AttentionVector],
    state: &SessionState,
    config: &crate::config::ParadoxConfig,
) -> Vec<NodeId> {
    let alignment_trigger =
        state
            .alignment_history
            .sustained(Cmp::Lt, config.alignment_min, config.sustained_cycles);
    let gap_trigger =
        state
            .gap_max_history
            .sustained(Cmp::Gt, config.gap_threshold, config.sustained_cycles);
    if !(alignment_trigger || gap_trigger) {
        return Vec::new();
    }

    let mut marked: Vec<NodeId> = Vec::new();
    for vector in candidates {
        for id in &vector.members {
            let Some(node) = graph.get_node_mut(id) else {
                continue;
            };
            if matches!(node.status, NodeStatus::EthicallyBlocked | NodeStatus::Mu) {
                continue;
            }
            if node.axes.uncertainty > 0.6 || node.identity_alignment == 0.0 {
                node.status = NodeStatus::Mu;
                marked.push(id.clone());
            }
        }
    }
    for id in &marked {
        refresh_touched(graph, id);
    }
    warn!(
        alignment_trigger,
        gap_trigger,
        marked = marked.len(),
        "paradox trigger activated"
    );
    marked
}

/// Execute one full cycle against a session's graph, state, and parameters.
pub fn execute(
    graph: &mut SemanticGraph,
    state: &mut SessionState,
    params: &mut AdaptiveParameters,
    config: &EngineConfig,
    input: &CycleInput,
) -> CycleOutcome {
    let mut outcome = CycleOutcome::pending(params.snapshot());
    outcome.epistemic_claims = state.epistemic_claims.clone();

    // ----------------------------------------------------------- phase 1
    // Preconditions: is it honest to proceed at all?
    let pre = &config.preconditions;
    let mut issues: Vec<&str> = Vec::new();
    if input.coercion > pre.strictness {
        issues.push("coercion_detected");
    }
    if input.noise > pre.noise_tolerance {
        issues.push("noise_above_tolerance");
    }
    if input.false_certainty > pre.strictness {
        issues.push("false_certainty_detected");
    }
    outcome.log_phase(
        Phase::Preconditions,
        if issues.is_empty() {
            "clear".to_string()
        } else {
            issues.join(", ")
        },
    );
    if !issues.is_empty() {
        warn!(?issues, "precondition rejection");
        return short_circuit(outcome, state, FailCode::Precondition, "precondition_scan");
    }

    // ----------------------------------------------------------- phase 2
    // Decode: declared intent plus relevance-filtered signals.
    let intent = Intent::from_name(input.intent.as_deref());
    let kept_signals = input
        .signals
        .iter()
        .filter(|s| s.relevance * config.signals.attunement_gain >= config.signals.relevance_threshold)
        .count();
    outcome.log_phase(
        Phase::Decode,
        format!(
            "intent={intent:?}, signals {kept_signals}/{} kept",
            input.signals.len()
        ),
    );

    // ----------------------------------------------------------- phase 3
    // Coherence init: whole-graph context, informational only.
    let all_ids = graph.node_ids().to_vec();
    let whole_ci = structural::coherence_index(&all_ids, graph.edge_count());
    let mu_density_global = graph.mu_density();
    outcome.log_phase(
        Phase::CoherenceInit,
        format!("CI={whole_ci:.4}, Mu_density={mu_density_global:.4}"),
    );

    // --------------------------------------------------------- phase 3.5
    // Selection: generate, score, fuse, gate-check, pick.
    let generator = CandidateGenerator::new(config.generator);
    let mut candidates = generator.generate(graph, input.seed_ids.as_deref());
    outcome.candidate_count = candidates.len();
    if candidates.is_empty() {
        outcome.log_phase(Phase::Selection, "no candidates");
        return short_circuit(outcome, state, FailCode::NoCandidates, "candidate_generation");
    }

    let ideal = intent.ideal_direction();

    for vector in &mut candidates {
        let members = &vector.members;
        let member_edges = vector.edges.len();

        let ti = structural::temporal_integrity(graph, members);
        let ci = structural::coherence_index(members, member_edges);
        let ar = structural::anchoring_ratio(graph, members);
        let ri = structural::resonance_index(graph, members);
        let phi = structural::phi_proxy(graph, members);
        let gbi = structural::gbi_proxy(graph, members);

        let sc = capital::semantic_capital(
            ar,
            ci,
            ti,
            params.alpha(),
            params.beta(),
            ri,
            phi,
        );

        // Temporal projection feeding the recursion term
        let novelty = structural::gns_proxy(graph, members);
        let generativity = if members.len() > 1 { phi } else { 0.5 };
        let influence = clamp01(novelty * generativity * 0.5);
        let fp = temporal::fp_recursive(
            novelty,
            generativity,
            config.temporal.horizon(),
            params.beta_retro(),
            influence,
        );
        vector.tsc_base = capital::tsc_base(sc, params.gamma(), params.delta(), fp);

        // Per-node capital shares drive the attention weights
        let share = vector.tsc_base / members.len().max(1) as f64;
        let tsc_per_node: HashMap<NodeId, f64> =
            members.iter().map(|id| (id.clone(), share)).collect();

        let weights = scav::compute_weights(&tsc_per_node);
        let direction = scav::raw_direction(graph, members, &weights);
        let shadow = scav::raw_shadow(graph, members, &weights);
        vector.scav_magnitude = scav::scav_magnitude(gbi, &tsc_per_node);
        vector.consistency = scav::consistency_metric(&[norm(&direction)], 1.0);
        vector.resonance_score =
            scav::resonance_metric(input.resonance_field, input.bidirectional_ratio);
        let entropy = scav::attention_entropy(&weights);
        let shadow_mag = scav::shadow_magnitude(&direction, &shadow);
        vector.scav_health =
            scav::scav_health(vector.consistency, vector.resonance_score, entropy, shadow_mag);
        vector.direction_raw = direction;
        vector.shadow_raw = shadow;

        debug!(
            vector = %vector.id,
            tsc_base = vector.tsc_base,
            magnitude = vector.scav_magnitude,
            "candidate scored"
        );
    }

    // Ethics pass: refresh node caches, decide executability per candidate.
    let mut coefficients = Vec::with_capacity(candidates.len());
    let mut executables = Vec::with_capacity(candidates.len());
    for vector in &mut candidates {
        for id in &vector.members {
            ethics::refresh_node(graph, id);
        }
        let coefficient = ethics::ethical_coefficient(graph, &vector.members);
        let executable = ethics::is_executable(
            graph,
            &vector.members,
            coefficient,
            config.ethics.executable_min,
        );
        vector.ethical_coefficient = coefficient;
        vector.executable = executable;
        coefficients.push(coefficient);
        executables.push(executable);
    }
    let ethical_score = ethics::ethical_score_candidates(&coefficients);
    let blocked = ethics::blocked_fraction(&executables);
    outcome.blocked_fraction = blocked;

    // Extended capital; non-executable vectors score zero.
    for vector in &mut candidates {
        let direction_normalized = normalize(&vector.direction_raw);
        vector.tsc_extended = capital::tsc_extended(
            vector.tsc_base,
            params.lambda(),
            vector.consistency,
            &direction_normalized,
            &ideal,
            vector.ethical_coefficient,
            vector.executable,
        );
    }

    // Stereoscopic fusion over the whole candidate set.
    let tsc_scores: Vec<f64> = candidates.iter().map(|v| v.tsc_extended).collect();
    let scav_scores: Vec<f64> = candidates.iter().map(|v| v.scav_magnitude).collect();
    let (alignments, gap_values, gap_max) = stereoscopic::fuse(&tsc_scores, &scav_scores);
    for (i, vector) in candidates.iter_mut().enumerate() {
        vector.stereoscopic_alignment = alignments.get(i).copied().unwrap_or(0.0);
        vector.stereoscopic_gap = gap_values.get(i).copied().unwrap_or(0.0);
    }

    // Aggregate ethics hard fails, checked before the history commit.
    if ethical_score < config.gate.ethical_score_min {
        outcome.log_phase(
            Phase::Selection,
            format!("ethical collapse: score={ethical_score:.4}"),
        );
        return short_circuit(outcome, state, FailCode::EthicalCollapse, "ethics_aggregate");
    }
    if blocked > config.gate.blocked_fraction_max {
        outcome.log_phase(
            Phase::Selection,
            format!("ethical stall: blocked_fraction={blocked:.4}"),
        );
        return short_circuit(outcome, state, FailCode::EthicalStall, "blocked_fraction");
    }

    // History commit: every attempted selection from here on is recorded.
    let mean_alignment = alignments.iter().sum::<f64>() / alignments.len() as f64;
    state.alignment_history.push(mean_alignment);
    state.gap_max_history.push(gap_max);
    outcome.trace.mean_alignment = Some(mean_alignment);

    // Sustained stereoscopic disagreement holds qualifying units as paradox.
    outcome.mu_nodes = mark_sustained_paradoxes(graph, &candidates, state, &config.paradox);

    // Winner: highest extended capital among executables; the first
    // generated wins ties.
    let mut winner_idx: Option<usize> = None;
    for (i, vector) in candidates.iter().enumerate() {
        if !vector.executable {
            continue;
        }
        match winner_idx {
            None => winner_idx = Some(i),
            Some(best) if vector.tsc_extended > candidates[best].tsc_extended => {
                winner_idx = Some(i)
            }
            _ => {}
        }
    }
    outcome.active_count = executables.iter().filter(|e| **e).count();
    let Some(winner_idx) = winner_idx else {
        outcome.log_phase(Phase::Selection, "no executable candidate");
        return short_circuit(outcome, state, FailCode::EthicalStall, "active_set_empty");
    };
    outcome.log_phase(
        Phase::Selection,
        format!(
            "candidates={}, active={}, blocked_fraction={blocked:.4}, winner={}",
            candidates.len(),
            outcome.active_count,
            candidates[winner_idx].id
        ),
    );

    let winner_id = candidates[winner_idx].id;
    let winner_members = candidates[winner_idx].members.clone();
    let winner_edge_count = candidates[winner_idx].edges.len();

    // ----------------------------------------------------------- phase 4
    // Draft: content construction happens outside the core.
    outcome.log_phase(Phase::Draft, format!("vector={winner_id}"));

    // ----------------------------------------------------------- phase 5
    // Hallucination guard: unresolved assumptions among winner members.
    let mut assumptions: Vec<String> = Vec::new();
    let mut hypothesis_nodes: Vec<NodeId> = Vec::new();
    for id in &winner_members {
        if let Some(node) = graph.get_node(id) {
            assumptions.extend(node.provenance.assumed.iter().cloned());
            if node.status == NodeStatus::Hypothesis {
                hypothesis_nodes.push(id.clone());
            }
        }
    }
    let risk = assumptions.len() as f64 / winner_members.len().max(1) as f64;
    let flagged = risk > config.hallucination.sensitivity;
    outcome.log_phase(
        Phase::HallucinationGuard,
        format!("risk={risk:.4}, flagged={flagged}"),
    );
    outcome.hallucination = Some(HallucinationReport {
        risk,
        flagged,
        assumptions,
        hypothesis_nodes,
    });

    // ----------------------------------------------------------- phase 6
    // Flow check: advisory only, never a re-selection.
    let success_history = state.success_difficulties.to_vec();
    let winner_flow = flow::flow_metric(graph, &winner_members, winner_edge_count, &success_history);
    candidates[winner_idx].flow_score = winner_flow;
    outcome.log_phase(Phase::FlowCheck, format!("flow={winner_flow:.4}"));
    if winner_flow < config.flow.advisory_min {
        let mut best_alternative: Option<(VectorId, f64)> = None;
        for vector in candidates.iter().filter(|v| v.executable) {
            let f = flow::flow_metric(graph, &vector.members, vector.edges.len(), &success_history);
            if best_alternative.map_or(true, |(_, best)| f > best) {
                best_alternative = Some((vector.id, f));
            }
        }
        let diff = flow::difficulty(winner_members.len(), winner_edge_count);
        let skill = flow::current_skill(&success_history);
        let diagnostic = if diff > skill + 0.3 {
            "overload"
        } else if diff < skill - 0.3 {
            "boredom"
        } else {
            "low_presence"
        };
        warn!(flow = winner_flow, diagnostic, "flow below target");
        outcome.flow_advisory = Some(FlowAdvisory {
            flow: winner_flow,
            best_alternative: best_alternative.map(|(id, _)| id),
            best_alternative_flow: best_alternative.map_or(0.0, |(_, f)| f),
            diagnostic: diagnostic.to_string(),
        });
    }

    // ----------------------------------------------------------- phase 7
    // Shadow audit: integrate avoided meaning, but only with consent.
    let shadow_mag = scav::shadow_magnitude(
        &candidates[winner_idx].direction_raw,
        &candidates[winner_idx].shadow_raw,
    );
    let health = candidates[winner_idx].scav_health;
    if shadow_mag > config.shadow.magnitude_max && health < config.shadow.health_min {
        let shadow_nodes: Vec<NodeId> = winner_members
            .iter()
            .filter(|id| graph.get_node(id).is_some_and(scav::is_shadow_contributor))
            .cloned()
            .collect();
        if shadow_nodes.is_empty() {
            outcome.log_phase(Phase::ShadowAudit, "no shadow contributors");
        } else {
            let mut bridges_added: Vec<(NodeId, NodeId)> = Vec::new();
            if input.consent_shadow {
                let aligned: Vec<NodeId> = winner_members
                    .iter()
                    .filter(|id| {
                        graph
                            .get_node(id)
                            .is_some_and(|n| n.identity_alignment > 0.0)
                    })
                    .cloned()
                    .collect();
                for shadow_id in &shadow_nodes {
                    for aligned_id in aligned.iter().take(2) {
                        graph.add_edge(
                            Edge::new(aligned_id.clone(), shadow_id.clone(), EdgeKind::Bridges)
                                .with_weight(0.5),
                        );
                        bridges_added.push((aligned_id.clone(), shadow_id.clone()));
                    }
                    if let Some(node) = graph.get_node_mut(shadow_id) {
                        node.avoided = AvoidedMarker::RespectedBoundary;
                    }
                }
            } else {
                for shadow_id in &shadow_nodes {
                    if let Some(node) = graph.get_node_mut(shadow_id) {
                        node.avoided = AvoidedMarker::RespectedBoundary;
                    }
                }
            }
            for shadow_id in &shadow_nodes {
                refresh_touched(graph, shadow_id);
            }
            outcome.log_phase(
                Phase::ShadowAudit,
                format!(
                    "integrated {} shadow units, consent={}",
                    shadow_nodes.len(),
                    input.consent_shadow
                ),
            );
            outcome.shadow = Some(ShadowOutcome {
                shadow_magnitude: shadow_mag,
                shadow_nodes,
                consent: input.consent_shadow,
                bridges_added,
                boundary_respected: !input.consent_shadow,
            });
        }
    } else {
        outcome.log_phase(
            Phase::ShadowAudit,
            format!("shadow ok (magnitude={shadow_mag:.4})"),
        );
    }

    // ----------------------------------------------------------- phase 8
    // Final gate: the authoritative pass/fail.
    let winner = &candidates[winner_idx];
    let ti = structural::temporal_integrity(graph, &winner_members);
    let ci = structural::coherence_index(&winner_members, winner_edge_count);
    let ar = structural::anchoring_ratio(graph, &winner_members);
    let ri = structural::resonance_index(graph, &winner_members);
    outcome.metrics = MetricSnapshot {
        ti,
        ci,
        ar,
        fzd: structural::freeze_decomposition(graph, &winner_members),
        ri,
        sq_proxy: structural::sq_proxy(ci, ri, ar),
        phi_proxy: structural::phi_proxy(graph, &winner_members),
        gbi_proxy: structural::gbi_proxy(graph, &winner_members),
        gns_proxy: structural::gns_proxy(graph, &winner_members),
        flow: winner_flow,
        tsc_score: winner.tsc_extended,
        scav_health: winner.scav_health,
        stereoscopic_alignment: winner.stereoscopic_alignment,
        stereoscopic_gap_max: gap_max,
        ethical_score_candidates: ethical_score,
        mu_density: graph.mu_density(),
        blocked_fraction: blocked,
    };

    let gate = AdmissionGate::new(config.gate);
    let gate_outcome = gate.check(graph, winner, &outcome.metrics, &state.epistemic_claims);
    outcome.warnings = gate_outcome.warnings.clone();
    outcome.log_phase(
        Phase::FinalGate,
        format!(
            "passed={}, violations={}, warnings={}",
            gate_outcome.passed,
            gate_outcome.violations.len(),
            gate_outcome.warnings.len()
        ),
    );
    if !gate_outcome.passed {
        let code = gate_outcome.fail_code().unwrap_or(FailCode::OperationalizationMissing);
        outcome.chosen_vector = Some(candidates.swap_remove(winner_idx));
        return short_circuit(outcome, state, code, "final_gate");
    }
    outcome.gate_status = GateStatus::Pass;

    // ----------------------------------------------------------- phase 9
    outcome.output_ready = true;
    outcome.log_phase(Phase::OutputReadiness, "ready");

    // ---------------------------------------------------------- phase 10
    // Trace: how this winner was chosen.
    outcome.trace.observations = vec![
        format!("CI={:.4}", outcome.metrics.ci),
        format!("AR={:.4}", outcome.metrics.ar),
    ];
    outcome.trace.inferences = vec![format!("best vector: {winner_id}")];
    outcome.trace.vector_choice_reason = format!(
        "max TSC_extended={:.4}",
        candidates[winner_idx].tsc_extended
    );
    outcome.log_phase(Phase::Trace, "recorded");

    // ---------------------------------------------------------- phase 11
    // Recovery lookup is a no-op on a passing cycle.
    outcome.log_phase(Phase::RecoveryLookup, "not needed");

    // ---------------------------------------------------------- phase 12
    // Learning: commit the cycle and adapt the parameters.
    let shadow_nodes_this_cycle = outcome
        .shadow
        .as_ref()
        .map(|s| s.shadow_nodes.clone())
        .unwrap_or_default();
    state.record_cycle(
        candidates[winner_idx].stereoscopic_alignment,
        gap_max,
        graph.mu_density(),
        winner_flow,
        Some(winner_id),
        shadow_nodes_this_cycle,
    );

    params.update_alpha(&state.alignment_history.to_vec(), state.current_cycle);
    params.update_gamma(input.urgency, state.current_cycle);
    params.update_lambda(winner_flow, state.current_cycle);
    params.update_beta_retro(input.observed_effect, input.max_effect, state.current_cycle);
    for (parameter, value) in [
        (ParameterKind::Alpha, params.alpha()),
        (ParameterKind::Gamma, params.gamma()),
        (ParameterKind::Lambda, params.lambda()),
        (ParameterKind::BetaRetro, params.beta_retro()),
    ] {
        state.parameter_audit.push(ParameterUpdate {
            parameter,
            value,
            cycle: state.current_cycle,
        });
    }
    outcome.params = params.snapshot();
    outcome.log_phase(
        Phase::Learning,
        format!("cycle={}, alpha={:.4}", state.current_cycle, params.alpha()),
    );

    info!(
        cycle = state.current_cycle,
        winner = %winner_id,
        tsc = candidates[winner_idx].tsc_extended,
        "cycle passed"
    );
    outcome.chosen_vector = Some(candidates.swap_remove(winner_idx));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParadoxConfig;
    use crate::graph::{AttentionVector, Axes, Node};

    fn uncertain_node(id: &str) -> Node {
        Node::with_id(NodeId::from(id), id).with_axes(Axes {
            uncertainty: 0.9,
            ..Axes::default()
        })
    }

    fn candidate_over(graph: &SemanticGraph) -> AttentionVector {
        AttentionVector::new(
            graph.node_ids().first().cloned().into_iter().collect(),
            graph.node_ids().to_vec(),
            Vec::new(),
        )
    }

    #[test]
    fn test_paradox_trigger_needs_sustained_history() {
        let mut graph = SemanticGraph::new();
        graph.add_node(uncertain_node("a"));
        let candidates = vec![candidate_over(&graph)];

        let mut state = SessionState::new();
        state.alignment_history.push(0.1);
        state.alignment_history.push(0.1);

        let marked =
            mark_sustained_paradoxes(&mut graph, &candidates, &state, &ParadoxConfig::default());
        assert!(marked.is_empty(), "two low cycles are not sustained");
    }

    #[test]
    fn test_paradox_trigger_marks_uncertain_members() {
        let mut graph = SemanticGraph::new();
        graph.add_node(uncertain_node("a"));
        let mut confident = Node::with_id(NodeId::from("b"), "b").with_axes(Axes {
            uncertainty: 0.1,
            ..Axes::default()
        });
        confident.identity_alignment = 0.5;
        graph.add_node(confident);
        let candidates = vec![candidate_over(&graph)];

        let mut state = SessionState::new();
        for _ in 0..3 {
            state.alignment_history.push(0.1);
        }

        let marked =
            mark_sustained_paradoxes(&mut graph, &candidates, &state, &ParadoxConfig::default());
        assert_eq!(marked, vec![NodeId::from("a")]);
        assert_eq!(
            graph.get_node(&NodeId::from("a")).expect("exists").status,
            NodeStatus::Mu
        );
        assert_eq!(
            graph.get_node(&NodeId::from("b")).expect("exists").status,
            NodeStatus::Floating,
            "confident unit untouched"
        );
    }

    #[test]
    fn test_paradox_trigger_via_gap_history() {
        let mut graph = SemanticGraph::new();
        graph.add_node(uncertain_node("a"));
        let candidates = vec![candidate_over(&graph)];

        let mut state = SessionState::new();
        for _ in 0..3 {
            state.gap_max_history.push(2.0);
        }

        let marked =
            mark_sustained_paradoxes(&mut graph, &candidates, &state, &ParadoxConfig::default());
        assert_eq!(marked.len(), 1);
    }

    #[test]
    fn test_held_paradoxes_are_not_remarked() {
        let mut graph = SemanticGraph::new();
        graph.add_node(uncertain_node("a").with_status(NodeStatus::Mu));
        let candidates = vec![candidate_over(&graph)];

        let mut state = SessionState::new();
        for _ in 0..3 {
            state.alignment_history.push(0.1);
        }

        let marked =
            mark_sustained_paradoxes(&mut graph, &candidates, &state, &ParadoxConfig::default());
        assert!(marked.is_empty());
    }
}
