//! Demo data for running without a hosted store
//!
//! A sole-trader auto repair shop in Darwin with a typical set of
//! compliance items, recent legal updates and risk warnings.

use chrono::{Days, NaiveDate};
use domain::{
    AnnualTurnover, AustralianState, BusinessActivity, BusinessLocation, BusinessProfile,
    BusinessStructure, ComplianceCategory, ComplianceItem, CurrentUser, DomainError, EmailAddress,
    EmployeeCount, IndustrySector, Jurisdiction, LegalUpdate, Priority, RecordId, RiskLevel,
    StateScope, TaskStatus, Urgency, WarningItem,
};

pub const DEMO_EMAIL: &str = "demo@cleartape.example";

pub fn demo_user() -> Result<CurrentUser, DomainError> {
    Ok(CurrentUser {
        email: EmailAddress::new(DEMO_EMAIL)?,
        full_name: Some("Sam Taylor".to_string()),
    })
}

/// Completed profile owned by `owner`
pub fn business_profile(owner: &EmailAddress) -> BusinessProfile {
    BusinessProfile {
        id: None,
        business_name: "Darwin Auto Repairs".to_string(),
        business_structure: Some(BusinessStructure::SoleTrader),
        industry_sector: Some(IndustrySector::Automotive),
        location: BusinessLocation {
            street_address: "123 Stuart Highway".to_string(),
            suburb: "Darwin".to_string(),
            state: Some(AustralianState::Nt),
            postcode: "0800".to_string(),
            council: "City of Darwin".to_string(),
        },
        employee_count: Some(EmployeeCount::OneToFour),
        annual_turnover: Some(AnnualTurnover::From75kTo2m),
        business_activities: vec![
            BusinessActivity::HazardousMaterials,
            BusinessActivity::DataCollection,
        ],
        onboarding_completed: true,
        created_by: Some(owner.clone()),
    }
}

struct ItemSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    status: TaskStatus,
    category: ComplianceCategory,
    jurisdiction: Jurisdiction,
    cost: Option<&'static str>,
    link: Option<&'static str>,
}

impl ItemSeed {
    fn build(self) -> ComplianceItem {
        let applicable_states = match self.jurisdiction {
            Jurisdiction::Federal => vec![StateScope::All],
            Jurisdiction::State(state) => vec![StateScope::State(state)],
        };
        ComplianceItem {
            description: self.description.to_string(),
            category: self.category,
            jurisdiction: self.jurisdiction,
            applicable_states,
            cost_estimate: self.cost.map(str::to_string),
            external_link: self.link.map(str::to_string),
            ..ComplianceItem::new(self.id, self.title, self.priority).with_status(self.status)
        }
    }
}

pub fn compliance_items() -> Vec<ComplianceItem> {
    let nt = Jurisdiction::State(AustralianState::Nt);
    [
        ItemSeed {
            id: "ci_abn",
            title: "Apply for an ABN",
            description: "Register an Australian Business Number before you start trading.",
            priority: Priority::Critical,
            status: TaskStatus::Completed,
            category: ComplianceCategory::Registration,
            jurisdiction: Jurisdiction::Federal,
            cost: Some("Free"),
            link: None,
        },
        ItemSeed {
            id: "ci_business_name",
            title: "Register your business name",
            description: "Trading under a name other than your own requires ASIC registration.",
            priority: Priority::High,
            status: TaskStatus::Completed,
            category: ComplianceCategory::Registration,
            jurisdiction: Jurisdiction::Federal,
            cost: Some("$42 for 1 year"),
            link: Some("https://asic.gov.au/for-business/registering-a-business-name/"),
        },
        ItemSeed {
            id: "ci_gst",
            title: "Register for GST",
            description: "Required once annual turnover reaches $75,000.",
            priority: Priority::Critical,
            status: TaskStatus::InProgress,
            category: ComplianceCategory::Taxation,
            jurisdiction: Jurisdiction::Federal,
            cost: Some("Free"),
            link: Some("https://www.ato.gov.au/businesses-and-organisations/gst-excise-and-indirect-taxes/gst/registering-for-gst"),
        },
        ItemSeed {
            id: "ci_mvr_licence",
            title: "Motor vehicle repairer licence",
            description: "Check whether your repair work needs a licence in the Northern Territory.",
            priority: Priority::Critical,
            status: TaskStatus::Pending,
            category: ComplianceCategory::Licensing,
            jurisdiction: nt,
            cost: None,
            link: None,
        },
        ItemSeed {
            id: "ci_waste_oil",
            title: "Waste oil and solvent disposal",
            description: "Use a licensed collector for waste oil, coolant and solvents.",
            priority: Priority::High,
            status: TaskStatus::Pending,
            category: ComplianceCategory::Environmental,
            jurisdiction: nt,
            cost: Some("Varies by collector"),
            link: Some("https://nt.gov.au/environment/waste-management"),
        },
        ItemSeed {
            id: "ci_whs",
            title: "Workshop safety plan",
            description: "Document hoist, compressor and chemical handling procedures.",
            priority: Priority::High,
            status: TaskStatus::InProgress,
            category: ComplianceCategory::WorkplaceSafety,
            jurisdiction: nt,
            cost: None,
            link: Some("https://worksafe.nt.gov.au/"),
        },
        ItemSeed {
            id: "ci_workers_comp",
            title: "Workers compensation insurance",
            description: "Required as soon as you employ staff.",
            priority: Priority::Critical,
            status: TaskStatus::Pending,
            category: ComplianceCategory::Financial,
            jurisdiction: nt,
            cost: Some("About 2-4% of wages"),
            link: None,
        },
        ItemSeed {
            id: "ci_privacy",
            title: "Customer privacy policy",
            description: "Explain how you store customer contact and vehicle details.",
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            category: ComplianceCategory::Privacy,
            jurisdiction: Jurisdiction::Federal,
            cost: None,
            link: Some("https://www.oaic.gov.au/privacy"),
        },
        ItemSeed {
            id: "ci_acl",
            title: "Consumer guarantee obligations",
            description: "Repairs must be done with due care and skill under Australian Consumer Law.",
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            category: ComplianceCategory::IndustrySpecific,
            jurisdiction: Jurisdiction::Federal,
            cost: None,
            link: Some("https://www.accc.gov.au/consumers/consumer-rights-guarantees"),
        },
        ItemSeed {
            id: "ci_records",
            title: "Keep business records for 5 years",
            description: "Receipts, invoices and job cards must be kept for tax purposes.",
            priority: Priority::Low,
            status: TaskStatus::Pending,
            category: ComplianceCategory::Taxation,
            jurisdiction: Jurisdiction::Federal,
            cost: None,
            link: None,
        },
    ]
    .into_iter()
    .map(ItemSeed::build)
    .collect()
}

fn offset(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

#[allow(clippy::too_many_arguments)]
fn update(
    id: &str,
    title: &str,
    description: &str,
    urgency: Urgency,
    category: &str,
    effective: Option<NaiveDate>,
    action_required: bool,
    jurisdictions: &[&str],
) -> LegalUpdate {
    LegalUpdate {
        id: RecordId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        urgency,
        category: Some(category.to_string()),
        effective_date: effective,
        action_required,
        affected_jurisdictions: jurisdictions.iter().map(|s| (*s).to_string()).collect(),
        affected_industries: Vec::new(),
        source_url: None,
    }
}

/// Legal updates, oldest first, with effective dates around `today`
pub fn legal_updates(today: NaiveDate) -> Vec<LegalUpdate> {
    vec![
        update(
            "lu_privacy_review",
            "Privacy Act review: small business exemption",
            "The small business exemption is under review. Businesses holding customer data should prepare.",
            Urgency::Low,
            "privacy",
            offset(today, 180),
            false,
            &["FEDERAL"],
        ),
        update(
            "lu_nt_waste",
            "NT waste levy changes",
            "Disposal fees for liquid waste are changing for Northern Territory businesses.",
            Urgency::Medium,
            "environmental",
            offset(today, 45),
            false,
            &["NT"],
        ),
        update(
            "lu_min_wage",
            "Minimum wage increase",
            "The national minimum wage and award rates have increased.",
            Urgency::High,
            "employment",
            offset(today, -30),
            true,
            &["FEDERAL"],
        ),
        update(
            "lu_payday_super",
            "Payday super",
            "Superannuation must be paid at the same time as wages.",
            Urgency::Critical,
            "taxation",
            offset(today, 14),
            true,
            &["FEDERAL", "NT", "NSW", "VIC"],
        ),
        update(
            "lu_right_to_repair",
            "Motor vehicle service and repair information scheme",
            "Manufacturers must share repair information with independent repairers.",
            Urgency::Medium,
            "industry",
            offset(today, 7),
            false,
            &["FEDERAL"],
        ),
    ]
}

pub fn warnings() -> Vec<WarningItem> {
    let warning = |id: &str, title: &str, description: &str, risk_level, link: Option<&str>| {
        WarningItem {
            id: RecordId::from(id),
            title: title.to_string(),
            description: description.to_string(),
            risk_level,
            details_link: link.map(str::to_string),
        }
    };
    vec![
        warning(
            "wi_cash_jobs",
            "Unrecorded cash jobs",
            "Every cash job must be recorded and reported as income.",
            RiskLevel::High,
            Some("https://www.ato.gov.au/businesses-and-organisations/corporate-tax-measures-and-assurance/cash-economy"),
        ),
        warning(
            "wi_contractors",
            "Treating employees as contractors",
            "Sham contracting attracts penalties and back-payment of entitlements.",
            RiskLevel::High,
            Some("https://www.fairwork.gov.au/find-help-for/independent-contractors"),
        ),
        warning(
            "wi_oil_drains",
            "Pouring waste down drains",
            "Oil and coolant in stormwater drains is an environmental offence.",
            RiskLevel::High,
            None,
        ),
        warning(
            "wi_quotes",
            "Unclear quotes",
            "Give written quotes and get approval before extra work.",
            RiskLevel::Medium,
            None,
        ),
        warning(
            "wi_late_bas",
            "Late BAS lodgement",
            "Lodging late triggers failure-to-lodge penalties.",
            RiskLevel::Medium,
            None,
        ),
        warning(
            "wi_customer_data",
            "Keeping customer data forever",
            "Delete personal details you no longer need.",
            RiskLevel::Low,
            Some("https://www.oaic.gov.au/privacy"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_cover_every_status() {
        let items = compliance_items();
        assert_eq!(items.len(), 10);
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
            assert!(items.iter().any(|i| i.status == status));
        }
        assert!(items.iter().any(|i| i.applies_in(AustralianState::Nt)));
    }

    #[test]
    fn updates_include_upcoming_and_past() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let updates = legal_updates(today);
        assert!(updates.iter().any(|u| u.effective_date < Some(today)));
        assert!(
            updates
                .iter()
                .any(|u| u.effective_date.is_some_and(|d| d > today))
        );
    }

    #[test]
    fn profile_is_complete_and_owned() {
        let user = demo_user().unwrap();
        let profile = business_profile(&user.email);
        assert!(!profile.needs_onboarding());
        assert_eq!(profile.created_by.as_ref(), Some(&user.email));
    }
}
