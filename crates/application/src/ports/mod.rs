//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod assistant_port;
mod entity_gateway;
mod session_port;
mod speech_input_port;

#[cfg(test)]
pub use assistant_port::MockAssistantPort;
pub use assistant_port::{AssistantPort, AssistantReply, AssistantRequest};
pub use entity_gateway::{
    EntityGatewayPort, FilterPredicate, RecordPatch, STORE_MANAGED_FIELDS, SortSpec,
};
#[cfg(test)]
pub use session_port::MockSessionPort;
pub use session_port::SessionPort;
#[cfg(test)]
pub use speech_input_port::MockSpeechInputPort;
pub use speech_input_port::SpeechInputPort;
