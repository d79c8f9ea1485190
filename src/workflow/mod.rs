pub mod client;
pub mod errors;
pub mod gateway;
pub mod snapshot;

pub use client::WorkflowClient;
pub use errors::WorkflowError;
pub use gateway::{Transition, WorkflowGateway};
pub use snapshot::WorkflowSnapshot;
