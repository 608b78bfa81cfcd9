//! Domain models for the cattery detail view.

mod animal;
mod media;
mod profile;

pub use animal::*;
pub use media::*;
pub use profile::*;
