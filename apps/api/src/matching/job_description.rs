use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetails {
    pub employees: &'static str,
    pub team_size: &'static str,
    pub industry: &'static str,
    pub reports_to: &'static str,
}

/// The single role every candidate is matched against.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub title: &'static str,
    pub location: &'static str,
    pub company_details: CompanyDetails,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub benefits: &'static str,
    pub compensation: &'static str,
}

/// Skill categories scored in every job-match analysis.
pub const SKILL_CATEGORIES: &[&str] = &[
    "Computer Science Fundamentals",
    "C++ Programming",
    "Low-Latency Development",
    "Team Collaboration",
    "Software Engineering Practices",
];

pub static JOB_DESCRIPTION: JobDescription = JobDescription {
    title: "C++ Software Engineer",
    location: "Chicago, IL (onsite)",
    company_details: CompanyDetails {
        employees: "300",
        team_size: "12-15",
        industry: "Technology | Trading",
        reports_to: "VP of Engineering",
    },
    summary: "Building proprietary trading technology solutions through collaboration with both \
        technical and business experts to craft innovative trading solutions. Looking for an \
        individual who will strive to push boundaries and will never settle for \"good enough.\"\n\n\
        Opportunity to define the limits of possibilities in the world of trading systems. Seeking \
        an individual passionate about finance, technology, and challenging themselves.",
    responsibilities: &[
        "Full life cycle development and deployment of C++ applications and libraries, spanning exchange gateways, trading strategy execution, risk management, and trade reporting.",
        "Create systems to continuously enhance performance to ensure the integrity and reliability of applications.",
        "Modern profiling techniques for real-time investigation and resolution of production systems issues.",
        "Analyze and experiment to enhance technical performance and uncover new trading opportunities.",
        "Closely collaborate with the team to share information and leverage data to optimize technical performance and identify new trading opportunities.",
    ],
    requirements: &[
        "3+ years of true C++ programming experience",
        "Bachelor's degree in computer science, Computer Engineering, or equivalent",
        "Low-latency programming experience",
        "Proficiency in high-performance, low-latency C/C++ code using contemporary software engineering practices.",
        "Robust knowledge of data structures and algorithms",
        "Collaborative and \"Go-Getter\" mindset, actively engaging in code reviews and seeking opportunities to learn from team members.",
        "Effective communication of both technical concepts as well as non-technical communication.",
    ],
    benefits: "Medical, Vision, Dental, PTO, Sick Time, 401K matching",
    compensation: "125 – 175K + Bonus",
};
