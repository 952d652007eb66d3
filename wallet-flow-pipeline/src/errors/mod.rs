mod decoder;
mod outcomes;

pub use decoder::DecodeError;
pub use outcomes::OutcomeError;
