//! Recomputation rules: each reads a declared input set, derives its
//! outputs with the pure domain rules and writes only what changed.

mod abilities;
mod heritage;
mod ledger;
mod ratings;
mod resistance;
mod text;
mod trackers;

pub use abilities::{AbilityDescriptionFill, ExtraTraumaAbilityToggle, HeritageAbilityToggle};
pub use heritage::HeritageVisibility;
pub use ledger::ChangedAttributeLedger;
pub use ratings::{PressureFormula, PseudoRadio};
pub use resistance::ResistanceRecalc;
pub use text::{avatar_thumbnail, ChatImageCleanup, WhitespaceTrim};
pub use trackers::{Capacity, TrackerTotal};
