//! Domain entities - Records with identity, as stored by the entity store

mod business_profile;
mod chat_message;
mod compliance_item;
mod current_user;
mod legal_update;
mod record;

pub use business_profile::{BusinessLocation, BusinessProfile};
pub use chat_message::{ChatMessage, MessageKind};
pub use compliance_item::{ABN_APPLICATION_URL, ComplianceItem};
pub use current_user::CurrentUser;
pub use legal_update::{LegalUpdate, WarningItem};
pub use record::Record;
