//! Fixed reference tables driving classification and activity seeding.
//!
//! Classification is table-driven on purpose: ordered lists of
//! (pattern, result) pairs walked front to back, so match precedence is
//! explicit and testable. Iteration order is load-bearing — overlapping
//! keywords resolve by position, not by specificity.

use uuid::Uuid;

use crate::models::{Activity, Seniority};

/// Sentinel role recorded when no catalog entry matches a title.
pub const GENERALIST_ROLE: &str = "Generalist";

/// Canonical role catalog, in classification precedence order. Ties on
/// keyword-match count keep the earliest entry.
pub const CANONICAL_ROLES: [&str; 20] = [
    "AI Product Manager",
    "Technical Product Manager",
    "AI Program Manager",
    "Machine Learning Engineer",
    "Data Scientist",
    "Applied AI Engineer",
    "Research Scientist",
    "Data Engineer",
    "Data Annotator",
    "Data Governance",
    "Backend Engineer",
    "Frontend Engineer",
    "AI Platform Engineer",
    "DevOps / MLOps Engineer",
    "Product Designer",
    "UX Researcher",
    "Conversation Designer",
    "Responsible AI Specialist",
    "Model Risk",
    "Legal",
];

/// Keyword sets for roles whose titles rarely spell out the role name.
/// Roles absent from this table fall back to their lower-cased name as the
/// sole keyword.
const ROLE_KEYWORDS: [(&str, &[&str]); 11] = [
    (
        "Machine Learning Engineer",
        &["mle", "machine learning", "ml engineer", "ml ops"],
    ),
    ("Data Scientist", &["data scientist", "data science", "analytics"]),
    ("AI Product Manager", &["product manager", "pm", "product lead"]),
    ("Research Scientist", &["research", "phd", "scientist"]),
    (
        "Applied AI Engineer",
        &["applied ai", "llm engineer", "ai engineer"],
    ),
    (
        "Data Engineer",
        &["data engineer", "pipeline", "etl", "big data"],
    ),
    (
        "AI Platform Engineer",
        &["platform", "infrastructure", "ai infra"],
    ),
    ("Product Designer", &["designer", "ux", "ui", "product design"]),
    ("Legal", &["legal", "counsel", "compliance", "privacy"]),
    ("Data Governance", &["governance", "policy", "data privacy"]),
    (
        "Responsible AI Specialist",
        &["safety", "ethics", "responsible ai", "alignment"],
    ),
];

/// Returns the explicit keyword set for a role, if one is defined.
pub fn keywords_for(role: &str) -> Option<&'static [&'static str]> {
    ROLE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, keywords)| *keywords)
}

/// Seniority keywords, walked in order against the lower-cased title; the
/// first substring hit wins. "lead" must precede "senior" style entries so
/// compound titles resolve predictably.
pub const SENIORITY_KEYWORDS: [(&str, Seniority); 12] = [
    ("vp", Seniority::Executive),
    ("head", Seniority::Executive),
    ("director", Seniority::Executive),
    ("chief", Seniority::Executive),
    ("lead", Seniority::Lead),
    ("principal", Seniority::Lead),
    ("staff", Seniority::Lead),
    ("senior", Seniority::Senior),
    ("sr", Seniority::Senior),
    ("junior", Seniority::Junior),
    ("jr", Seniority::Junior),
    ("associate", Seniority::Junior),
];

/// Common skill vocabulary scanned against the full profile text. Output
/// preserves vocabulary order.
pub const SKILL_VOCABULARY: [&str; 10] = [
    "python",
    "pytorch",
    "tensorflow",
    "sql",
    "llm",
    "aws",
    "docker",
    "kubernetes",
    "product",
    "strategy",
];

/// Named lifecycle stages with seedable activity templates.
pub const TEMPLATE_STAGES: [&str; 5] = [
    "AI Product Delivery",
    "Model Development",
    "Data Lifecycle",
    "Safety & Governance",
    "Production Operations",
];

const STAGE_TEMPLATES: [(&str, &str, &[&str]); 5] = [
    (
        "AI Product Delivery",
        "Product Delivery",
        &[
            "AI Feature PRD & Scoping",
            "AI ROI & Business Case Analysis",
            "User Research for Generative UI",
            "Competitive AI Benchmarking",
            "AI Product Roadmap Definition",
            "Pricing & Token Monetization Strategy",
        ],
    ),
    (
        "Model Development",
        "Model Development",
        &[
            "Model Architecture Selection",
            "Fine-tuning & Instruction Tuning",
            "Prompt Engineering",
            "Hyperparameter Optimization",
            "Offline Model Evaluation",
            "Model Quantization for Edge",
            "RLHF / DPO Alignment",
        ],
    ),
    (
        "Data Lifecycle",
        "Data Lifecycle",
        &[
            "Data Acquisition & Sourcing",
            "Data Pipeline Engineering (ETL)",
            "Labeling & Annotation QC",
            "Feature Store Management",
            "Data Privacy Masking",
            "Vector Database Indexing",
            "Synthetic Data Generation",
        ],
    ),
    (
        "Safety & Governance",
        "Safety & Governance",
        &[
            "Responsible AI Framework",
            "Model Bias & Fairness Auditing",
            "Red Teaming & Jailbreak Testing",
            "AI Regulatory Compliance",
            "Transparency Reporting",
            "Adversarial Robustness Testing",
            "IP & Copyright Review",
        ],
    ),
    (
        "Production Operations",
        "Production Ops",
        &[
            "MLOps CI/CD Pipeline Setup",
            "Inference API Scaling",
            "Real-time Latency Monitoring",
            "Data & Model Drift Detection",
            "GPU Resource Allocation",
            "A/B & Shadow Deployment",
            "Incident Response for Failures",
        ],
    ),
];

/// Instantiates the activity template for a lifecycle stage. Each call
/// mints fresh ids so seeded activities stay independent across orgs.
pub fn activity_template(stage: &str) -> Option<Vec<Activity>> {
    STAGE_TEMPLATES
        .iter()
        .find(|(name, _, _)| *name == stage)
        .map(|(_, category, names)| {
            names
                .iter()
                .map(|name| Activity {
                    id: Uuid::new_v4(),
                    name: (*name).to_string(),
                    category: (*category).to_string(),
                    description: None,
                })
                .collect()
        })
}
