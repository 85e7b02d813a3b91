//! Noema: Stereoscopic Attention Engine
//!
//! Evaluates a labeled graph of semantic units, generates candidate
//! sub-graphs ("attention vectors"), scores them with five independent
//! metric families, fuses the scores into a rank-based stereoscopic
//! comparison, applies a pass/fail admission gate, and adapts its own
//! scoring weights across cycles.
//!
//! # Core Concepts
//!
//! - **Units**: semantic nodes with a 12-axis attribute profile, status,
//!   tags, and derived ethics caches
//! - **Vectors**: candidate sub-graphs competing for selection each cycle
//! - **Sessions**: one graph plus rolling state and adaptive parameters
//!
//! # Example
//!
//! ```
//! use noema::{CycleInput, Engine, Node};
//!
//! let engine = Engine::new();
//! let session = engine.create_session("demo");
//! engine.add_unit(&session, Node::new("first concept")).unwrap();
//! let outcome = engine.run_cycle(&session, &CycleInput::default()).unwrap();
//! assert_eq!(outcome.candidate_count, 1);
//! ```

pub mod config;
mod engine;
mod gate;
mod generator;
mod graph;
pub mod metrics;
mod recovery;
pub mod report;
mod session;
pub mod space;
pub mod workflow;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineError, EngineResult};
pub use gate::{AdmissionGate, GateOutcome, GateThresholds, GateViolation};
pub use generator::{CandidateGenerator, GeneratorConfig};
pub use graph::{
    AttentionVector, AvoidedMarker, Axes, Edge, EdgeKind, Node, NodeId, NodeStatus, Provenance,
    SemanticGraph, Tag, VectorId,
};
pub use recovery::{lookup as recovery_lookup, FailCode, Recovery};
pub use session::{
    AdaptiveParameters, Cmp, EpistemicClaim, FailRecord, Observability, ParadoxCollapse,
    ParameterKind, ParameterSnapshot, ParameterTrace, ParameterUpdate, Scope, Session, SessionId,
    SessionSnapshot, SessionState, Stance, Window,
};
pub use space::Intent;
pub use workflow::{
    CycleInput, CycleOutcome, CycleTrace, FlowAdvisory, GateStatus, HallucinationReport,
    MetricSnapshot, Phase, PhaseEntry, ShadowOutcome, Signal,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
