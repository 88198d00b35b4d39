//! UI Modules
//!
//! Each module implements the Module trait and owns its own state and key
//! handling. The shell decides when a module is shown.
//!
//! Modules:
//! - notes: Session-only notes panel

pub mod notes;
