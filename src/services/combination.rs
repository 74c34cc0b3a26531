use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Optional business feature groups. System management is always present and is not a
/// feature group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    Jobs,
    Resume,
    Company,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 3] = [Self::Jobs, Self::Resume, Self::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Resume => "resume",
            Self::Company => "company",
        }
    }

    pub fn default_service_name(self) -> &'static str {
        match self {
            Self::Jobs => "job-service",
            Self::Resume => "resume-service",
            Self::Company => "company-service",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "jobs" | "job" | "job-service" => Ok(Self::Jobs),
            "resume" | "resumes" | "resume-service" => Ok(Self::Resume),
            "company" | "companies" | "company-service" => Ok(Self::Company),
            _ => Err("feature group must be one of: jobs, resume, company".to_string()),
        }
    }

    /// Feature group owning a menu path, judged by its first segment (`/jobs/list` -> jobs).
    pub fn for_menu_path(path: &str) -> Option<Self> {
        let first = path.split('/').find(|segment| !segment.is_empty())?;
        Self::parse(first).ok()
    }
}

impl std::fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCombination {
    Minimal,
    JobOnly,
    ResumeOnly,
    CompanyOnly,
    JobResume,
    JobCompany,
    ResumeCompany,
    AllServices,
}

const COMBINATION_TIPS: &[(&str, &str)] = &[
    ("minimal", "基础模式：仅系统管理功能可用"),
    ("job_only", "职位模式：职位管理功能已启用"),
    ("resume_only", "简历模式：简历管理功能已启用"),
    ("company_only", "企业模式：企业管理功能已启用"),
    ("job_resume", "职位+简历模式"),
    ("job_company", "职位+企业模式"),
    ("resume_company", "简历+企业模式"),
    ("all_services", "完整模式：所有业务功能已启用"),
];

/// Advisory text for a combination id. Unknown ids have no tip.
pub fn combination_tip(combination_id: &str) -> Option<&'static str> {
    COMBINATION_TIPS
        .iter()
        .find(|(id, _)| *id == combination_id)
        .map(|(_, tip)| *tip)
}

impl ServiceCombination {
    pub const ALL: [ServiceCombination; 8] = [
        Self::Minimal,
        Self::JobOnly,
        Self::ResumeOnly,
        Self::CompanyOnly,
        Self::JobResume,
        Self::JobCompany,
        Self::ResumeCompany,
        Self::AllServices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::JobOnly => "job_only",
            Self::ResumeOnly => "resume_only",
            Self::CompanyOnly => "company_only",
            Self::JobResume => "job_resume",
            Self::JobCompany => "job_company",
            Self::ResumeCompany => "resume_company",
            Self::AllServices => "all_services",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|combination| combination.as_str() == raw)
            .ok_or_else(|| format!("unknown service combination `{raw}`"))
    }

    pub fn classify(available: &BTreeSet<FeatureGroup>) -> Self {
        let jobs = available.contains(&FeatureGroup::Jobs);
        let resume = available.contains(&FeatureGroup::Resume);
        let company = available.contains(&FeatureGroup::Company);
        match (jobs, resume, company) {
            (true, true, true) => Self::AllServices,
            (true, true, false) => Self::JobResume,
            (true, false, true) => Self::JobCompany,
            (false, true, true) => Self::ResumeCompany,
            (true, false, false) => Self::JobOnly,
            (false, true, false) => Self::ResumeOnly,
            (false, false, true) => Self::CompanyOnly,
            (false, false, false) => Self::Minimal,
        }
    }

    pub fn feature_groups(self) -> BTreeSet<FeatureGroup> {
        let groups: &[FeatureGroup] = match self {
            Self::Minimal => &[],
            Self::JobOnly => &[FeatureGroup::Jobs],
            Self::ResumeOnly => &[FeatureGroup::Resume],
            Self::CompanyOnly => &[FeatureGroup::Company],
            Self::JobResume => &[FeatureGroup::Jobs, FeatureGroup::Resume],
            Self::JobCompany => &[FeatureGroup::Jobs, FeatureGroup::Company],
            Self::ResumeCompany => &[FeatureGroup::Resume, FeatureGroup::Company],
            Self::AllServices => &FeatureGroup::ALL,
        };
        groups.iter().copied().collect()
    }

    pub fn tip(self) -> Option<&'static str> {
        combination_tip(self.as_str())
    }
}

impl std::fmt::Display for ServiceCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which feature groups are reachable right now. Always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCombinationState {
    pub combination: ServiceCombination,
    pub available: BTreeSet<FeatureGroup>,
}

impl ServiceCombinationState {
    pub fn minimal() -> Self {
        Self::from_available(BTreeSet::new())
    }

    pub fn from_available(available: BTreeSet<FeatureGroup>) -> Self {
        Self {
            combination: ServiceCombination::classify(&available),
            available,
        }
    }

    pub fn combination_id(&self) -> &'static str {
        self.combination.as_str()
    }

    pub fn is_available(&self, group: FeatureGroup) -> bool {
        self.available.contains(&group)
    }

    pub fn tip(&self) -> Option<&'static str> {
        self.combination.tip()
    }
}

impl Default for ServiceCombinationState {
    fn default() -> Self {
        Self::minimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_agrees_with_feature_groups() {
        for combination in ServiceCombination::ALL {
            assert_eq!(
                ServiceCombination::classify(&combination.feature_groups()),
                combination
            );
        }
    }

    #[test]
    fn every_combination_has_a_tip() {
        for combination in ServiceCombination::ALL {
            assert!(combination.tip().is_some(), "{combination} has no tip");
        }
    }

    #[test]
    fn menu_path_maps_to_feature_group() {
        assert_eq!(FeatureGroup::for_menu_path("/jobs/list"), Some(FeatureGroup::Jobs));
        assert_eq!(FeatureGroup::for_menu_path("/company"), Some(FeatureGroup::Company));
        assert_eq!(FeatureGroup::for_menu_path("/system/users"), None);
        assert_eq!(FeatureGroup::for_menu_path("/"), None);
    }
}
