//! Business profile of the diagnosed operator.
//!
//! Only echoed on reports; it never influences scoring.

use serde::{Deserialize, Serialize};

/// Kind of welfare service the operator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    #[default]
    DisabilityGroupHome,
    HomeVisitNursing,
    SpecialNursingHome,
    HomeVisitCare,
    AfterSchoolDayService,
    EmploymentSupportTypeA,
    EmploymentSupportTypeB,
    Nursery,
    Other,
}

impl BusinessType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::DisabilityGroupHome => "Group home for persons with disabilities",
            BusinessType::HomeVisitNursing => "Home-visit nursing station",
            BusinessType::SpecialNursingHome => "Special nursing home for the elderly",
            BusinessType::HomeVisitCare => "Home-visit care",
            BusinessType::AfterSchoolDayService => "After-school day service",
            BusinessType::EmploymentSupportTypeA => "Continuous employment support (type A)",
            BusinessType::EmploymentSupportTypeB => "Continuous employment support (type B)",
            BusinessType::Nursery => "Nursery",
            BusinessType::Other => "Other",
        }
    }
}

/// Size band of the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacilityScale {
    /// One site, fewer than 10 staff.
    #[default]
    SingleSiteSmall,
    /// One site, 10-30 staff.
    SingleSiteMedium,
    /// 2-5 sites, 30-100 staff.
    MultiSite,
    /// 6 or more sites, 100 or more staff.
    LargeNetwork,
}

impl FacilityScale {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityScale::SingleSiteSmall => "1 site, under 10 staff",
            FacilityScale::SingleSiteMedium => "1 site, 10-30 staff",
            FacilityScale::MultiSite => "2-5 sites, 30-100 staff",
            FacilityScale::LargeNetwork => "6+ sites, 100+ staff",
        }
    }
}

/// Basic information entered before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub business_type: BusinessType,
    #[serde(default)]
    pub scale: FacilityScale,
}

impl BusinessProfile {
    pub fn new(business_type: BusinessType, scale: FacilityScale) -> Self {
        Self {
            business_type,
            scale,
        }
    }
}
