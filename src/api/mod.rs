//! Shared surface types handed to transport layers.

mod envelope;

pub use envelope::ResponseEnvelope;
