//! Static portfolio copy rendered by the page sections.

use crate::types::{ContactInfo, NavItem, PersonalInfo, Project, SocialLink};

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "CA Sriharri, FCA",
    title: "FinTech Chartered Accountant | AI App Developer",
    tagline: "I don't just audit numbers; I write code that understands them.",
    bio: "I am a Chartered Accountant with a profound passion for FinTech and Automation. Currently working at CA TRR Office, I specialize in building AI-powered financial tools that simplify complex tax and accounting workflows. My goal is to create practical, automated solutions for professionals to enhance efficiency and accuracy.",
    organization: "CA TRR Office",
};

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    phone: "9047434305",
    email: "dssriharri@gmail.com",
    organization: "CA TRR Office",
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: "finsight",
        name: "FinSight AI",
        short_description: "Your balance sheet, decoded by AI.",
        full_description: "An advanced AI-powered application designed to revolutionize how financial statements are analyzed. Users can upload financial documents to receive detailed automated insights, key ratio comparisons against industry standards, and automatic identification of potential red flags.",
        features: &[
            "Automated Ratio Analysis",
            "Red Flag Detection",
            "Upload PDF/Excel Support",
            "Instant Insight Generation",
        ],
        url: "https://finsightai-sh.netlify.app",
        accent: "accent-purple",
    },
    Project {
        id: "taxplanner",
        name: "Tax Planner",
        short_description: "Strategic tax saving for the modern elite.",
        full_description: "A comprehensive smart tax planning tool tailored for High Net-worth Individuals (HNIs), Firms, and Companies. It analyzes income streams to calculate optimal tax outflows and suggests legal avenues for tax saving.",
        features: &[
            "Scenario Comparison",
            "Firm vs Partner Analysis",
            "Old vs New Regime Optimization",
            "Visual Tax Breakdown",
        ],
        url: "https://thepentiumguy-dev.github.io/hni-group-tax-planner/",
        accent: "accent-emerald",
    },
    Project {
        id: "audit-mate",
        name: "AuditMate Pro",
        short_description: "Compliance never looked this good.",
        full_description: "A workflow automation tool for audit teams to track compliance status in real-time. (Concept/Demo)",
        features: &[
            "Real-time Tracking",
            "Team Collaboration",
            "Auto-generated Reports",
        ],
        url: "#",
        accent: "accent-blue",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/sriharri-d-s-648046162/",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/thepentiumguy-dev",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/thepentiumguy/?hl=en",
    },
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Profile",
        anchor: "profile",
    },
    NavItem {
        label: "AI Tools",
        anchor: "works",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
    NavItem {
        label: "Social",
        anchor: "social",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_only_audit_mate_lacks_a_live_url() {
        let offline: Vec<_> = PROJECTS
            .iter()
            .filter(|project| !project.has_live_url())
            .map(|project| project.id)
            .collect();
        assert_eq!(offline, vec!["audit-mate"]);
    }

    #[test]
    fn test_nav_anchors_are_unique() {
        let anchors: HashSet<_> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(anchors.len(), NAV_ITEMS.len());
    }
}
