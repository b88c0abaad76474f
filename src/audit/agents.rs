//! Recommended-agent templates per department.

use serde::{Deserialize, Serialize};

use super::department::DepartmentId;
use crate::types::Tier;

/// Placeholder replaced with the company name in instruction templates
const COMPANY_PLACEHOLDER: &str = "{company}";

/// Static catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTemplate {
    pub name: &'static str,
    pub purpose: &'static str,
    pub training_data: &'static [&'static str],
    pub instructions: &'static str,
    pub time_saved: &'static str,
    pub complexity: Tier,
}

/// Agent recommendation as it appears in a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecommendation {
    pub name: String,
    pub purpose: String,
    pub training_data: Vec<String>,
    /// Instruction preview with the company name filled in
    #[serde(rename = "systemPromptPreview")]
    pub instructions_preview: String,
    pub estimated_time_saved: String,
    pub complexity: Tier,
}

impl AgentTemplate {
    pub fn render(&self, company: &str) -> AgentRecommendation {
        AgentRecommendation {
            name: self.name.to_string(),
            purpose: self.purpose.to_string(),
            training_data: self.training_data.iter().map(|s| s.to_string()).collect(),
            instructions_preview: self.instructions.replace(COMPANY_PLACEHOLDER, company),
            estimated_time_saved: self.time_saved.to_string(),
            complexity: self.complexity,
        }
    }
}

/// Render every template for a department.
pub fn recommend_agents(id: DepartmentId, company: &str) -> Vec<AgentRecommendation> {
    templates(id).iter().map(|t| t.render(company)).collect()
}

pub fn templates(id: DepartmentId) -> &'static [AgentTemplate] {
    match id {
        DepartmentId::Hr => HR,
        DepartmentId::Sales => SALES,
        DepartmentId::Marketing => MARKETING,
        DepartmentId::Support => SUPPORT,
        DepartmentId::Finance => FINANCE,
        DepartmentId::Operations => OPERATIONS,
        DepartmentId::Legal => LEGAL,
        DepartmentId::Engineering => ENGINEERING,
        DepartmentId::Product => PRODUCT,
        DepartmentId::Executive => EXECUTIVE,
    }
}

const HR: &[AgentTemplate] = &[
    AgentTemplate {
        name: "HR Policy Assistant",
        purpose: "Answer employee questions about company policies, benefits, and procedures using your internal HR documentation.",
        training_data: &["Employee handbook", "HR policy documents", "Benefits guide", "Company culture docs"],
        instructions: "You are an internal HR assistant for {company}. Answer employee questions about policies, benefits, leave, and procedures strictly based on the provided HR documentation. Never fabricate policies.",
        time_saved: "15-20 hrs/week",
        complexity: Tier::Low,
    },
    AgentTemplate {
        name: "Resume Screener",
        purpose: "Screen and rank incoming resumes against job descriptions, highlighting key qualifications and red flags.",
        training_data: &["Job descriptions", "Ideal candidate profiles", "Past successful hire data", "Skills taxonomy"],
        instructions: "You are a recruitment screening assistant for {company}. Analyze resumes against the provided job description and score candidates on fit, experience, and skills. Be objective and highlight both strengths and gaps.",
        time_saved: "10-15 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Onboarding Guide",
        purpose: "Walk new hires through their first 90 days with personalized checklists, training schedules, and company orientation.",
        training_data: &["Onboarding checklist", "Training materials", "Team structure docs", "IT setup guides"],
        instructions: "You are an onboarding assistant for new employees at {company}. Guide them through their first 90 days, answer questions about setup, training, and company culture.",
        time_saved: "8-12 hrs/week",
        complexity: Tier::Low,
    },
];

const SALES: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Sales Proposal Writer",
        purpose: "Generate tailored proposals and pitch decks based on prospect needs and your product catalog.",
        training_data: &["Product catalog", "Pricing sheets", "Past winning proposals", "Case studies"],
        instructions: "You are a sales proposal assistant for {company}. Generate compelling proposals tailored to each prospect, using the product catalog and pricing info provided. Match features to the client's specific pain points.",
        time_saved: "12-18 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Competitive Intelligence Bot",
        purpose: "Provide real-time competitive positioning and battle cards for sales conversations.",
        training_data: &["Competitor analysis", "Battle cards", "Product comparison sheets", "Win/loss reports"],
        instructions: "You are a competitive intelligence assistant for {company}'s sales team. When asked about a competitor, provide positioning, strengths, weaknesses, and talking points from the loaded battle cards.",
        time_saved: "5-8 hrs/week",
        complexity: Tier::Low,
    },
    AgentTemplate {
        name: "Follow-Up Email Generator",
        purpose: "Draft personalized follow-up emails based on meeting notes and CRM context.",
        training_data: &["Email templates", "Meeting notes format", "Product info", "Brand voice guide"],
        instructions: "You are a sales email assistant for {company}. Write personalized follow-up emails based on the provided meeting notes. Match the brand voice and include relevant product info.",
        time_saved: "8-10 hrs/week",
        complexity: Tier::Low,
    },
];

const MARKETING: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Content Creator",
        purpose: "Generate on-brand blog posts, social media content, and email copy aligned with your brand guidelines.",
        training_data: &["Brand guidelines", "Content calendar", "Target personas", "Past top-performing content"],
        instructions: "You are a content creation assistant for {company}. Generate marketing content that aligns with the brand guidelines, target personas, and current campaign themes provided.",
        time_saved: "15-25 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "SEO Keyword Strategist",
        purpose: "Research and recommend keyword strategies based on your niche, competitors, and content gaps.",
        training_data: &["Current keyword rankings", "Competitor domains", "Content inventory", "Industry trends"],
        instructions: "You are an SEO strategist for {company}. Analyze the provided keyword data and content inventory to recommend high-impact keyword opportunities and content strategies.",
        time_saved: "5-8 hrs/week",
        complexity: Tier::Medium,
    },
];

const SUPPORT: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Customer Support Agent",
        purpose: "Handle Tier-1 support tickets by answering common questions from your knowledge base.",
        training_data: &["Knowledge base articles", "FAQ documents", "Product documentation", "Troubleshooting guides"],
        instructions: "You are a customer support assistant for {company}. Answer customer questions using ONLY the provided knowledge base. If you cannot find an answer, escalate to a human agent. Never guess.",
        time_saved: "20-30 hrs/week",
        complexity: Tier::Low,
    },
    AgentTemplate {
        name: "Ticket Triage Bot",
        purpose: "Categorize, prioritize, and route incoming support tickets to the right team.",
        training_data: &["Ticket categories", "Routing rules", "SLA documents", "Team responsibilities"],
        instructions: "You are a ticket triage assistant for {company}. Classify incoming tickets by category, urgency, and route them to the appropriate team. Apply SLA rules for response time targets.",
        time_saved: "10-15 hrs/week",
        complexity: Tier::Medium,
    },
];

const FINANCE: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Expense Report Processor",
        purpose: "Review and validate expense reports against company policy, flagging anomalies.",
        training_data: &["Expense policies", "Approval workflows", "Spending limits", "Past reports"],
        instructions: "You are an expense review assistant for {company}. Validate submitted expenses against company policy. Flag any items that exceed limits or violate rules.",
        time_saved: "8-12 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Financial Query Assistant",
        purpose: "Answer internal questions about budgets, forecasts, and financial procedures.",
        training_data: &["Budget documents", "Financial procedures", "Reporting templates", "Fiscal year plans"],
        instructions: "You are a financial information assistant for {company}. Answer questions about budgets, forecasts, and financial procedures using the provided documentation.",
        time_saved: "5-8 hrs/week",
        complexity: Tier::Low,
    },
];

const OPERATIONS: &[AgentTemplate] = &[
    AgentTemplate {
        name: "SOP Assistant",
        purpose: "Help employees find and follow standard operating procedures for any process.",
        training_data: &["SOPs", "Process maps", "Quality checklists", "Workflow documentation"],
        instructions: "You are an operations assistant for {company}. Help employees find the right SOP and guide them step-by-step through any operational process.",
        time_saved: "10-15 hrs/week",
        complexity: Tier::Low,
    },
    AgentTemplate {
        name: "Vendor Communication Bot",
        purpose: "Draft vendor communications, track contract terms, and manage procurement queries.",
        training_data: &["Vendor contracts", "Procurement policies", "Communication templates", "Vendor database"],
        instructions: "You are a vendor management assistant for {company}. Help draft vendor communications, reference contract terms, and enforce procurement policies.",
        time_saved: "5-8 hrs/week",
        complexity: Tier::Medium,
    },
];

const LEGAL: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Contract Review Assistant",
        purpose: "Analyze contracts against your standard terms and flag deviations, risks, and missing clauses.",
        training_data: &["Standard contract templates", "Legal playbook", "Risk assessment criteria", "Compliance requirements"],
        instructions: "You are a legal contract review assistant for {company}. Analyze contracts against standard terms and flag risks, non-standard clauses, and missing protections. Always recommend human review for final approval.",
        time_saved: "15-20 hrs/week",
        complexity: Tier::High,
    },
    AgentTemplate {
        name: "Compliance Monitor",
        purpose: "Track regulatory changes and check internal policies against current compliance requirements.",
        training_data: &["Regulatory frameworks", "Company policies", "Audit reports", "Compliance checklists"],
        instructions: "You are a compliance monitoring assistant for {company}. Cross-reference company policies against the latest regulatory requirements and flag gaps.",
        time_saved: "5-10 hrs/week",
        complexity: Tier::High,
    },
];

const ENGINEERING: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Code Documentation Bot",
        purpose: "Generate and maintain code documentation, API references, and architecture decision records.",
        training_data: &["Codebase docs", "API specifications", "Architecture diagrams", "Coding standards"],
        instructions: "You are a documentation assistant for {company}'s engineering team. Generate clear, accurate documentation from code context and maintain consistency with existing documentation style.",
        time_saved: "8-12 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Incident Response Helper",
        purpose: "Guide engineers through incident response runbooks and post-mortem analysis.",
        training_data: &["Runbooks", "Incident playbooks", "Past post-mortems", "System architecture docs"],
        instructions: "You are an incident response assistant for {company}. Guide engineers through the appropriate runbook based on the reported symptoms and help draft post-mortem reports.",
        time_saved: "5-8 hrs/week",
        complexity: Tier::Medium,
    },
];

const PRODUCT: &[AgentTemplate] = &[
    AgentTemplate {
        name: "PRD Writer",
        purpose: "Draft product requirement documents from feature briefs and user research insights.",
        training_data: &["PRD templates", "User research reports", "Feature request database", "Product strategy docs"],
        instructions: "You are a product management assistant for {company}. Draft comprehensive PRDs from feature briefs, incorporating user research insights and technical constraints.",
        time_saved: "10-15 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Research Synthesizer",
        purpose: "Analyze and summarize user research interviews, surveys, and feedback into actionable insights.",
        training_data: &["Interview transcripts", "Survey results", "Customer feedback", "Usage analytics"],
        instructions: "You are a user research assistant for {company}. Synthesize research data into clear themes, insights, and actionable recommendations for the product team.",
        time_saved: "8-12 hrs/week",
        complexity: Tier::Medium,
    },
];

const EXECUTIVE: &[AgentTemplate] = &[
    AgentTemplate {
        name: "Executive Briefing Bot",
        purpose: "Generate daily/weekly executive briefings from company KPIs, news, and team updates.",
        training_data: &["KPI dashboards", "Department reports", "Industry news feeds", "Strategic plans"],
        instructions: "You are an executive briefing assistant for {company}. Compile the latest KPIs, department updates, and industry developments into a concise briefing for leadership.",
        time_saved: "5-10 hrs/week",
        complexity: Tier::Medium,
    },
    AgentTemplate {
        name: "Board Report Generator",
        purpose: "Draft board-ready reports from financial data, operational metrics, and strategic updates.",
        training_data: &["Past board decks", "Financial reports", "Strategic goals", "Milestone trackers"],
        instructions: "You are a board reporting assistant for {company}. Generate professional board-ready reports from the provided data, following the established format and highlighting key decisions needed.",
        time_saved: "8-12 hrs/week",
        complexity: Tier::High,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_department_has_two_or_three_agents() {
        for id in DepartmentId::ALL {
            let count = templates(id).len();
            assert!((2..=3).contains(&count), "{} has {}", id, count);
        }
    }

    #[test]
    fn test_company_placeholder_is_substituted() {
        let agents = recommend_agents(DepartmentId::Sales, "Acme Corp");
        assert_eq!(agents.len(), 3);
        let expected = "You are a competitive intelligence assistant for Acme Corp's sales team.";
        assert!(agents[1].instructions_preview.starts_with(expected));
        assert!(agents.iter().all(|a| !a.instructions_preview.contains("{company}")));
    }

    #[test]
    fn test_every_template_mentions_the_company() {
        for id in DepartmentId::ALL {
            for template in templates(id) {
                assert!(template.instructions.contains(COMPANY_PLACEHOLDER), "{}", template.name);
            }
        }
    }
}
