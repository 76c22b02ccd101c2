//! Core types for Runedra

mod variant;
mod choices;
mod params;
mod result;
mod error;
mod notice;
mod state;
mod reason;
mod output;

pub use variant::Variant;
pub use choices::{Protocol, Material, Intensity};
pub use params::ParameterSet;
pub use result::{DisplayZone, ResultRecord, StabilityBand};
pub use error::{ValidationError, ValidatedFactors, FactorSlot};
pub use notice::{Notice, Severity};
pub use state::SessionState;
pub use reason::SessionReason;
pub use output::SessionOutput;
