//! Role-category keyword tables shared by scoring and the relevance re-check.
//!
//! Both stages ask the same question, "do this role and this position fall
//! in a common category?", against different tables:
//! - `ROLE_CATEGORIES` (fine-grained): the role names the category, the
//!   position carries one of its related titles. Used by the match score.
//! - `RELEVANCE_FAMILIES` (coarse): role and position each mention one of
//!   the family's terms. Used to re-check the ranked shortlist.
//!
//! All text passed in here is expected to be normalized (see [`normalize`]).

/// One row of a category table.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    /// The role matches when it contains any of these.
    pub role_terms: &'static [&'static str],
    /// The position matches when it contains any of these.
    pub position_terms: &'static [&'static str],
}

impl Category {
    pub fn matches(&self, role: &str, position: &str) -> bool {
        contains_any(role, self.role_terms) && contains_any(position, self.position_terms)
    }
}

pub const ROLE_CATEGORIES: &[Category] = &[
    Category {
        name: "developer",
        role_terms: &["developer"],
        position_terms: &[
            "developer", "programmer", "software engineer", "web developer", "frontend",
            "front-end", "backend", "back-end", "full stack", "fullstack", "coder",
        ],
    },
    Category {
        name: "designer",
        role_terms: &["designer"],
        position_terms: &[
            "designer", "graphic", "ui/ux", "ui designer", "ux designer", "creative",
            "illustrator", "visual", "multimedia",
        ],
    },
    Category {
        name: "marketing",
        role_terms: &["marketing"],
        position_terms: &[
            "marketing", "seo", "social media", "content", "brand", "advertising",
            "campaign", "copywriter",
        ],
    },
    Category {
        name: "sales",
        role_terms: &["sales"],
        position_terms: &[
            "sales", "business development", "account executive", "account manager",
            "lead generation", "telemarketer", "appointment setter",
        ],
    },
    Category {
        name: "support",
        role_terms: &["support"],
        position_terms: &[
            "support", "customer service", "customer success", "help desk", "helpdesk",
            "call center", "csr", "chat agent",
        ],
    },
    Category {
        name: "admin",
        role_terms: &["admin"],
        position_terms: &[
            "admin", "virtual assistant", "executive assistant", "data entry", "secretary",
            "office assistant", "clerk",
        ],
    },
    Category {
        name: "accounting",
        role_terms: &["accounting"],
        position_terms: &[
            "accountant", "accounting", "bookkeeper", "bookkeeping", "finance", "payroll",
            "auditor", "accounts payable", "accounts receivable",
        ],
    },
    Category {
        name: "hr",
        role_terms: &["hr"],
        position_terms: &[
            "human resource", "recruiter", "recruitment", "talent acquisition", "hr generalist",
            "hr specialist", "hr assistant", "hr manager", "hr officer",
        ],
    },
    Category {
        name: "project",
        role_terms: &["project"],
        position_terms: &[
            "project manager", "project coordinator", "project lead", "scrum master",
            "program manager", "product owner",
        ],
    },
    Category {
        name: "automation",
        role_terms: &["automation"],
        position_terms: &[
            "automation", "rpa", "robotic", "workflow", "uipath", "zapier", "power automate",
        ],
    },
    Category {
        name: "engineer",
        role_terms: &["engineer"],
        position_terms: &["engineer", "developer", "programmer", "architect", "devops"],
    },
    Category {
        name: "software",
        role_terms: &["software"],
        position_terms: &["software", "developer", "programmer", "engineer"],
    },
    Category {
        name: "web",
        role_terms: &["web"],
        position_terms: &[
            "web", "frontend", "front-end", "backend", "back-end", "full stack", "wordpress",
            "shopify",
        ],
    },
];

pub const RELEVANCE_FAMILIES: &[Category] = &[
    family("developer", &["developer"]),
    family("designer", &["designer"]),
    family("manager", &["manager"]),
    family("analyst", &["analyst"]),
    family("engineer", &["engineer"]),
    family("automation", &["automation", "rpa", "process"]),
    family("robotic", &["rpa", "robotic"]),
];

const fn family(name: &'static str, terms: &'static [&'static str]) -> Category {
    Category {
        name,
        role_terms: terms,
        position_terms: terms,
    }
}

/// Terms that mark a requested role as automation/RPA work.
pub const AUTOMATION_ROLE_TERMS: &[&str] = &["automation", "rpa", "robotic"];

/// Position titles that are unambiguously automation work.
pub const AUTOMATION_POSITION_TERMS: &[&str] = &[
    "automation engineer",
    "automation specialist",
    "automation developer",
    "automation analyst",
    "rpa developer",
    "rpa engineer",
    "rpa specialist",
    "rpa analyst",
    "process automation",
    "robotic process automation",
    "workflow automation",
    "intelligent automation",
    "uipath",
    "blue prism",
    "automation anywhere",
    "power automate",
];

/// Skill tags that indicate automation experience.
pub const AUTOMATION_SKILL_TERMS: &[&str] = &["automation", "rpa", "process", "workflow", "robotic"];

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// First category in `table` that both role and position fall into.
pub fn shared_category<'a>(table: &'a [Category], role: &str, position: &str) -> Option<&'a Category> {
    table.iter().find(|category| category.matches(role, position))
}

pub fn is_automation_role(role: &str) -> bool {
    contains_any(&normalize(role), AUTOMATION_ROLE_TERMS)
}

pub fn has_automation_skills(skills: &[String]) -> bool {
    skills
        .iter()
        .any(|skill| contains_any(&normalize(skill), AUTOMATION_SKILL_TERMS))
}
