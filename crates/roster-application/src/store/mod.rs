//! Persisted state container and its mutations.

mod container;
mod mutation;

pub use container::{StateContainer, SubscriptionId};
pub use mutation::Mutation;
