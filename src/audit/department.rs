//! Department catalog: identifiers, display presets, and risk classification.

use serde::{Deserialize, Serialize};

use crate::types::Tier;

/// Closed set of auditable departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentId {
    Hr,
    Sales,
    Marketing,
    Support,
    Finance,
    Operations,
    Legal,
    Engineering,
    Product,
    Executive,
}

/// Fixed display data and input defaults for one department
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentPreset {
    pub name: &'static str,
    pub icon: &'static str,
    pub default_workflows: &'static str,
    pub default_challenges: &'static str,
    pub default_data_sources: &'static str,
}

impl DepartmentId {
    pub const ALL: [DepartmentId; 10] = [
        Self::Hr,
        Self::Sales,
        Self::Marketing,
        Self::Support,
        Self::Finance,
        Self::Operations,
        Self::Legal,
        Self::Engineering,
        Self::Product,
        Self::Executive,
    ];

    /// Identifier as used in seeds and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Sales => "sales",
            Self::Marketing => "marketing",
            Self::Support => "support",
            Self::Finance => "finance",
            Self::Operations => "operations",
            Self::Legal => "legal",
            Self::Engineering => "engineering",
            Self::Product => "product",
            Self::Executive => "executive",
        }
    }

    pub fn preset(self) -> DepartmentPreset {
        match self {
            Self::Hr => DepartmentPreset {
                name: "Human Resources",
                icon: "users",
                default_workflows: "Recruitment screening, onboarding, policy Q&A, leave management, performance reviews",
                default_challenges: "High volume of repetitive queries, slow candidate screening, inconsistent policy interpretation",
                default_data_sources: "Employee handbook, HR policies, job descriptions, interview guides, benefits documentation",
            },
            Self::Sales => DepartmentPreset {
                name: "Sales",
                icon: "trending-up",
                default_workflows: "Lead qualification, proposal writing, CRM updates, follow-up emails, competitive analysis",
                default_challenges: "Time spent on admin tasks, inconsistent messaging, slow proposal turnaround",
                default_data_sources: "Product catalogs, pricing sheets, case studies, CRM data, sales playbooks",
            },
            Self::Marketing => DepartmentPreset {
                name: "Marketing",
                icon: "megaphone",
                default_workflows: "Content creation, social media management, email campaigns, SEO optimization, analytics reporting",
                default_challenges: "Content production bottlenecks, brand consistency, campaign ROI tracking",
                default_data_sources: "Brand guidelines, content library, campaign data, customer personas, competitor analysis",
            },
            Self::Support => DepartmentPreset {
                name: "Customer Support",
                icon: "headphones",
                default_workflows: "Ticket triage, FAQ responses, escalation routing, satisfaction surveys, knowledge base updates",
                default_challenges: "Long response times, repeated questions, inconsistent answers across agents",
                default_data_sources: "Knowledge base articles, FAQ documents, ticket history, product documentation, SLAs",
            },
            Self::Finance => DepartmentPreset {
                name: "Finance & Accounting",
                icon: "dollar-sign",
                default_workflows: "Invoice processing, expense reports, financial reporting, budget forecasting, compliance checks",
                default_challenges: "Manual data entry errors, slow reconciliation, complex regulatory requirements",
                default_data_sources: "Financial statements, tax documents, compliance regulations, budget templates, invoices",
            },
            Self::Operations => DepartmentPreset {
                name: "Operations",
                icon: "settings",
                default_workflows: "Process documentation, vendor management, inventory tracking, quality assurance, scheduling",
                default_challenges: "Process inefficiencies, poor documentation, communication gaps between teams",
                default_data_sources: "SOPs, process maps, vendor contracts, inventory databases, quality checklists",
            },
            Self::Legal => DepartmentPreset {
                name: "Legal & Compliance",
                icon: "shield",
                default_workflows: "Contract review, compliance monitoring, policy drafting, legal research, NDA management",
                default_challenges: "Contract review bottleneck, keeping up with regulatory changes, inconsistent templates",
                default_data_sources: "Contract templates, regulatory documents, company policies, legal precedents, NDAs",
            },
            Self::Engineering => DepartmentPreset {
                name: "Engineering",
                icon: "code",
                default_workflows: "Code review, documentation, bug triage, sprint planning, technical specs, CI/CD monitoring",
                default_challenges: "Documentation debt, context switching, onboarding new developers",
                default_data_sources: "Codebase documentation, API specs, architecture diagrams, runbooks, incident reports",
            },
            Self::Product => DepartmentPreset {
                name: "Product Management",
                icon: "layout",
                default_workflows: "Feature prioritization, user research synthesis, PRD writing, roadmap updates, stakeholder comms",
                default_challenges: "Information scattered across tools, slow research synthesis, stakeholder alignment",
                default_data_sources: "User research reports, feature requests, analytics data, competitor analysis, roadmaps",
            },
            Self::Executive => DepartmentPreset {
                name: "Executive / Leadership",
                icon: "briefcase",
                default_workflows: "Strategic planning, board reporting, KPI monitoring, market analysis, decision-making support",
                default_challenges: "Information overload, slow reporting cycles, lacking real-time insights",
                default_data_sources: "Company KPIs, financial summaries, market reports, board decks, strategic plans",
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        self.preset().name
    }

    /// Regulated data is high risk, personal data medium, everything else low
    pub fn risk_level(self) -> Tier {
        match self {
            Self::Legal | Self::Finance => Tier::High,
            Self::Hr | Self::Executive => Tier::Medium,
            _ => Tier::Low,
        }
    }

    /// Human-readable cautions, tier flags first
    pub fn risk_flags(self) -> Vec<String> {
        let mut flags = Vec::new();
        match self.risk_level() {
            Tier::High => {
                flags.push(
                    "Contains sensitive/regulated data — requires strict access controls".to_string(),
                );
                flags.push(
                    "AI outputs must be reviewed by qualified personnel before action".to_string(),
                );
            }
            Tier::Medium => {
                flags.push(
                    "Contains personal employee data — ensure GDPR/privacy compliance".to_string(),
                );
            }
            Tier::Low => {}
        }
        match self {
            Self::Support => {
                flags.push("Customer-facing AI requires quality assurance protocols".to_string())
            }
            Self::Sales => {
                flags.push(
                    "Ensure pricing accuracy — human review required for quotes".to_string(),
                )
            }
            _ => {}
        }
        flags
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DepartmentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DepartmentId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown department: {}. Valid values: {}",
                    s,
                    DepartmentId::ALL.map(DepartmentId::as_str).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for id in DepartmentId::ALL {
            assert_eq!(id.as_str().parse::<DepartmentId>(), Ok(id));
        }
        assert_eq!(" Legal ".parse::<DepartmentId>(), Ok(DepartmentId::Legal));
    }

    #[test]
    fn test_unknown_department_lists_valid_values() {
        let err = "accounting".parse::<DepartmentId>().unwrap_err();
        assert!(err.contains("accounting"));
        assert!(err.contains("hr, sales, marketing"));
    }

    #[test]
    fn test_risk_tiers() {
        assert_eq!(DepartmentId::Legal.risk_level(), Tier::High);
        assert_eq!(DepartmentId::Finance.risk_level(), Tier::High);
        assert_eq!(DepartmentId::Hr.risk_level(), Tier::Medium);
        assert_eq!(DepartmentId::Executive.risk_level(), Tier::Medium);
        assert_eq!(DepartmentId::Engineering.risk_level(), Tier::Low);
    }

    #[test]
    fn test_risk_flags() {
        assert_eq!(DepartmentId::Finance.risk_flags().len(), 2);
        assert_eq!(DepartmentId::Hr.risk_flags().len(), 1);
        assert!(DepartmentId::Marketing.risk_flags().is_empty());
        assert_eq!(
            DepartmentId::Support.risk_flags(),
            vec!["Customer-facing AI requires quality assurance protocols".to_string()]
        );
        assert!(DepartmentId::Sales.risk_flags()[0].starts_with("Ensure pricing accuracy"));
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&DepartmentId::Engineering).unwrap();
        assert_eq!(json, "\"engineering\"");
        let back: DepartmentId = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(back, DepartmentId::Hr);
    }
}
