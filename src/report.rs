//! Text rendering of a cycle outcome
//!
//! Presentation only: reads public outcome fields and never feeds anything
//! back into the core.

use crate::workflow::{CycleOutcome, MetricSnapshot};
use std::fmt::Write;

/// Render a cycle outcome into the fixed-section report block
pub fn render(outcome: &CycleOutcome) -> String {
    let mut out = String::new();

    if outcome.passed() {
        let _ = writeln!(out, "GATE_STATUS: PASS");
    } else {
        let _ = writeln!(out, "STATUS: BLOCKED");
        let code = outcome
            .fail_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        let _ = writeln!(out, "CODE: [{code}]");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "SETS:");
    let _ = writeln!(out, "  CANDIDATE_SET: [{}]", outcome.candidate_count);
    let _ = writeln!(out, "  ACTIVE_SET: [{}]", outcome.active_count);
    let _ = writeln!(out, "  Blocked_fraction: [{:.4}]", outcome.blocked_fraction);

    let _ = writeln!(out);
    let _ = writeln!(out, "METRICS:");
    render_metrics(&mut out, &outcome.metrics);

    if let Some(chosen) = &outcome.chosen_vector {
        let _ = writeln!(out);
        let _ = writeln!(out, "CHOSEN_VECTOR: [{}]", chosen.id);
        let _ = writeln!(out, "  members: {}", chosen.members.len());
        let _ = writeln!(out, "  TSC_extended: [{:.4}]", chosen.tsc_extended);
    }

    if !outcome.mu_nodes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "PARADOXES:");
        for id in &outcome.mu_nodes {
            let _ = writeln!(out, "  * MU unit: {id}");
        }
    }

    if let Some(shadow) = &outcome.shadow {
        let _ = writeln!(out);
        let _ = writeln!(out, "SHADOW:");
        let _ = writeln!(out, "  * magnitude: {:.4}", shadow.shadow_magnitude);
        let _ = writeln!(out, "  * units: {}", shadow.shadow_nodes.len());
        let _ = writeln!(out, "  * bridges_added: {}", shadow.bridges_added.len());
        let _ = writeln!(out, "  * boundary_respected: {}", shadow.boundary_respected);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "EPISTEMIC_CLAIMS:");
    if outcome.epistemic_claims.is_empty() {
        let _ = writeln!(out, "  * (none)");
    } else {
        for claim in &outcome.epistemic_claims {
            let _ = writeln!(
                out,
                "  * {} | {:?} | {:?} | {:?} | {}",
                claim.topic, claim.scope, claim.observability, claim.stance, claim.reason
            );
        }
    }

    if !outcome.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "WARNINGS:");
        for warning in &outcome.warnings {
            let _ = writeln!(out, "  * {warning}");
        }
    }

    if let Some(recovery) = &outcome.recovery {
        let _ = writeln!(out);
        let _ = writeln!(out, "NEXT_ONE_STEP:");
        let _ = writeln!(out, "  * {}", recovery.next_step);
        let _ = writeln!(out, "RECOVERY_OPTIONS:");
        let _ = writeln!(out, "  * {}", recovery.action);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "TRACE:");
    for observation in &outcome.trace.observations {
        let _ = writeln!(out, "  * [observation] {observation}");
    }
    for inference in &outcome.trace.inferences {
        let _ = writeln!(out, "  * [inference] {inference}");
    }
    for assumption in &outcome.trace.assumptions {
        let _ = writeln!(out, "  * [assumption] {assumption}");
    }
    if !outcome.trace.vector_choice_reason.is_empty() {
        let _ = writeln!(out, "  * [choice] {}", outcome.trace.vector_choice_reason);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "ADAPTIVE_PARAMETERS:");
    let p = &outcome.params;
    let _ = writeln!(
        out,
        "  alpha={:.4}, beta={:.4}, gamma={:.4}, delta={:.4}, lambda={:.4}, beta_retro={:.4}",
        p.alpha, p.beta, p.gamma, p.delta, p.lambda, p.beta_retro
    );

    out
}

fn render_metrics(out: &mut String, m: &MetricSnapshot) {
    for (name, value) in [
        ("TI", m.ti),
        ("CI", m.ci),
        ("AR", m.ar),
        ("FZD", m.fzd),
        ("RI", m.ri),
        ("SQ_proxy", m.sq_proxy),
        ("Phi_proxy", m.phi_proxy),
        ("GBI_proxy", m.gbi_proxy),
        ("GNS_proxy", m.gns_proxy),
        ("FLOW", m.flow),
        ("TSC_score", m.tsc_score),
        ("SCAV_health", m.scav_health),
        ("Stereoscopic_alignment", m.stereoscopic_alignment),
        ("Stereoscopic_gap_max", m.stereoscopic_gap_max),
        ("Ethical_score_candidates", m.ethical_score_candidates),
        ("Mu_density", m.mu_density),
        ("Blocked_fraction", m.blocked_fraction),
    ] {
        let _ = writeln!(out, "  {name}: [{value:.4}]");
    }
}
