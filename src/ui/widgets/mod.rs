pub mod phase_bar;

pub use phase_bar::PhaseBar;
