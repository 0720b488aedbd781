// Analysis session: draft submission, one-time derivation, live confidence recompute,
// history bookkeeping, and the read-only views (export, ship gate) built on top.
// All persistence goes through the injected `KvStore`.

pub mod controller;
pub mod draft;
pub mod export;
pub mod handlers;
pub mod ship_gate;

pub use controller::{AnalysisOptions, SessionController};
