//! Value Objects - Immutable, identity-less domain primitives

mod business_activity;
mod business_size;
mod business_structure;
mod compliance_category;
mod email_address;
mod industry_sector;
mod jurisdiction;
mod priority;
mod record_id;
mod task_status;
mod urgency;

pub use business_activity::BusinessActivity;
pub use business_size::{AnnualTurnover, EmployeeCount};
pub use business_structure::{BusinessStructure, StructureHelp};
pub use compliance_category::ComplianceCategory;
pub use email_address::EmailAddress;
pub use industry_sector::IndustrySector;
pub use jurisdiction::{AustralianState, Jurisdiction, StateScope};
pub use priority::Priority;
pub use record_id::RecordId;
pub use task_status::TaskStatus;
pub use urgency::{RiskLevel, Urgency};
