pub const NAME: &str = "Musab Sarmad";
pub const FULL_NAME: &str = "Musab Sarmad Mir";
pub const ROLE: &str = "Developer & Builder";
pub const MOTTO: &str = "\"Engineering systems that think, scale, and adapt.\"";
pub const PHONE: &str = "+92 3400433023";
pub const EMAIL: &str = "musabsarmadmir@gmail.com";
pub const PROFILE_IMAGE: &str = "images/profile.jpeg";

pub const ABOUT: &[&str] = &[
    "I'm a developer passionate about building intelligent systems that solve \
     real-world problems. My expertise spans AI/ML, algorithmic trading, and \
     full-stack development.",
    "Currently focused on creating scalable products that leverage cutting-edge \
     technology to deliver meaningful user experiences and business value.",
    "When I'm not coding, you'll find me exploring new technologies, contributing \
     to open source, or working on the next big idea that could change how we \
     interact with technology.",
];

/// Anchor ids the scroll controls target.
pub mod section {
    pub const PROJECTS: &str = "projects";
    pub const RESUME: &str = "resume";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

impl Project {
    /// Two-letter monogram shown on the placeholder thumbnail.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "QuantFlow",
        description: "Algorithmic trading platform with statistical arbitrage strategies",
        tech: &["Python", "FastAPI", "PostgreSQL"],
        code_url: "#",
        demo_url: "#",
    },
    Project {
        name: "Suno",
        description: "Voice-based therapy companion for Urdu speakers using AI",
        tech: &["React", "Node.js", "OpenAI"],
        code_url: "#",
        demo_url: "#",
    },
    Project {
        name: "RAGRAIFY",
        description: "RAG-based study assistant SaaS for enhanced learning",
        tech: &["Next.js", "LangChain", "Pinecone"],
        code_url: "#",
        demo_url: "#",
    },
    Project {
        name: "Resume Analyzer",
        description: "NLP-powered resume scoring application built with PyQt",
        tech: &["Python", "PyQt", "spaCy"],
        code_url: "#",
        demo_url: "#",
    },
    Project {
        name: "Quote Generator",
        description: "Modern quote generator built with Next.js and ShadCN",
        tech: &["Next.js", "ShadCN", "TailwindCSS"],
        code_url: "#",
        demo_url: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeCategory {
    Education,
    Experience,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeEntry {
    pub category: ResumeCategory,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const RESUME: &[ResumeEntry] = &[
    ResumeEntry {
        category: ResumeCategory::Education,
        title: "Bachelor of Science, Computer Science (Fintech)",
        organization: "FAST-NUCES",
        period: "August 2023 - May 2027",
        summary: "Relevant Coursework: Data Structures & Algorithms, Object-Oriented \
                  Programming, Database Systems",
    },
    ResumeEntry {
        category: ResumeCategory::Experience,
        title: "Research Intern",
        organization: "Bayyinah | Nouman Ali Khan",
        period: "July 2025 – Present",
        summary: "Conducting research and analysis for educational content development",
    },
    ResumeEntry {
        category: ResumeCategory::Experience,
        title: "Web Development Intern",
        organization: "Nexium",
        period: "June 2025 – Present",
        summary: "Developing modern web applications and user interfaces",
    },
    ResumeEntry {
        category: ResumeCategory::Experience,
        title: "Software Engineer Fellow",
        organization: "Headstarter AI",
        period: "July 2024 – September 2024",
        summary: "Built AI-powered applications and participated in intensive software \
                  engineering program",
    },
    ResumeEntry {
        category: ResumeCategory::Experience,
        title: "Game Developer",
        organization: "M-Labs",
        period: "June 2024 – August 2024",
        summary: "Developed interactive games and implemented game mechanics",
    },
];

pub fn resume_entries(category: ResumeCategory) -> impl Iterator<Item = &'static ResumeEntry> {
    RESUME.iter().filter(move |entry| entry.category == category)
}

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Next.js",
    "Node.js",
    "PostgreSQL",
    "AI/ML",
    "Game Development",
    "Research",
    "Web Development",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        label: "GitHub",
        url: "https://github.com/musabsarmad",
    },
    ContactLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/musabsarmadmir",
    },
    ContactLink {
        label: "Email",
        url: "mailto:musabsarmadmir@gmail.com",
    },
];

/// Canned command/output pairs shown in the terminal overlay.
pub const TERMINAL_TRANSCRIPT: &[(&str, &str)] = &[
    ("whoami", "Musab Sarmad Mir - CS Student & Developer"),
    ("cat education.txt", "FAST-NUCES | Computer Science (Fintech) | 2023-2027"),
    ("ls experience", "HeadStarterAI MindStorm-Studios"),
    (
        "cat motto.txt",
        "\"Engineering systems that think, scale, and adapt.\"",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monogram_takes_first_two_letters() {
        assert_eq!(PROJECTS[0].initials(), "QU");
        assert_eq!(PROJECTS[1].initials(), "SU");
    }

    #[test]
    fn resume_has_both_categories() {
        assert_eq!(resume_entries(ResumeCategory::Education).count(), 1);
        assert_eq!(resume_entries(ResumeCategory::Experience).count(), 4);
    }

    #[test]
    fn every_project_carries_tags_and_links() {
        for project in PROJECTS {
            assert!(!project.tech.is_empty());
            assert!(!project.code_url.is_empty());
            assert!(!project.demo_url.is_empty());
        }
    }
}
