//! Catalog of regulated business activities

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Activity tag that pulls in extra obligations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessActivity {
    FoodHandling,
    AlcoholSales,
    OnlineSales,
    DataCollection,
    ImportExport,
    HazardousMaterials,
    FinancialServices,
    Childcare,
    HealthcareServices,
    ConstructionWork,
}

impl BusinessActivity {
    /// Fixed catalog in the order it is presented
    pub const CATALOG: [Self; 10] = [
        Self::FoodHandling,
        Self::AlcoholSales,
        Self::OnlineSales,
        Self::DataCollection,
        Self::ImportExport,
        Self::HazardousMaterials,
        Self::FinancialServices,
        Self::Childcare,
        Self::HealthcareServices,
        Self::ConstructionWork,
    ];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FoodHandling => "food_handling",
            Self::AlcoholSales => "alcohol_sales",
            Self::OnlineSales => "online_sales",
            Self::DataCollection => "data_collection",
            Self::ImportExport => "import_export",
            Self::HazardousMaterials => "hazardous_materials",
            Self::FinancialServices => "financial_services",
            Self::Childcare => "childcare",
            Self::HealthcareServices => "healthcare_services",
            Self::ConstructionWork => "construction_work",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FoodHandling => "Food Handling & Service",
            Self::AlcoholSales => "Alcohol Sales",
            Self::OnlineSales => "Online Sales & E-commerce",
            Self::DataCollection => "Customer Data Collection",
            Self::ImportExport => "Import/Export",
            Self::HazardousMaterials => "Hazardous Materials",
            Self::FinancialServices => "Financial Services",
            Self::Childcare => "Childcare Services",
            Self::HealthcareServices => "Healthcare Services",
            Self::ConstructionWork => "Construction Work",
        }
    }
}

impl fmt::Display for BusinessActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusinessActivity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .into_iter()
            .find(|v| v.code() == s.trim())
            .ok_or_else(|| DomainError::invalid_value("business_activities", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_unique_codes() {
        let mut codes: Vec<_> = BusinessActivity::CATALOG.iter().map(|a| a.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn parses_codes() {
        assert_eq!(
            "hazardous_materials".parse::<BusinessActivity>().unwrap(),
            BusinessActivity::HazardousMaterials
        );
        assert!("skydiving".parse::<BusinessActivity>().is_err());
    }
}
