pub const OWNER: &str = "Atul Gupta";
pub const EMAIL: &str = "atulguptag23@gmail.com";
pub const PHONE: &str = "+91 7000950845";
pub const LOCATION: &str = "Bhopal, Madhya Pradesh, India";
pub const RESUME_PENDING: &str = "Resume download coming soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Database,
    Shield,
    Layers,
    Server,
    FileCode,
}

impl Icon {
    /// Devicon/extra icon font class used to draw this icon.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Database => "extra-database",
            Icon::Shield => "extra-shield",
            Icon::Layers => "extra-layers",
            Icon::Server => "extra-server",
            Icon::FileCode => "extra-file-code",
        }
    }
}

#[derive(Debug)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub number: &'static str,
}

#[derive(Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static [&'static str],
    pub link: Option<&'static str>,
    pub duration: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
}

#[derive(Debug)]
pub struct Experience {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

#[derive(Debug)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Debug)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        id: "fullstack",
        title: "Full-Stack Development",
        description: "End-to-end development across front-end and back-end, creating responsive and dynamic web applications tailored to your business needs.",
        icon: Icon::Code,
        number: "01",
    },
    Service {
        id: "database",
        title: "Database Design & Management",
        description: "Optimized and scalable database solutions, including SQL and NoSQL, to store and manage data effectively and securely.",
        icon: Icon::Database,
        number: "02",
    },
    Service {
        id: "api",
        title: "API Development & Integration",
        description: "Building and integrating RESTful APIs for seamless communication between different software components and third-party services.",
        icon: Icon::Shield,
        number: "03",
    },
    Service {
        id: "uiux",
        title: "UI/UX Design & Development",
        description: "Creating intuitive, user-friendly interfaces with attention to detail, ensuring a smooth and enjoyable user experience across all devices.",
        icon: Icon::Layers,
        number: "04",
    },
    Service {
        id: "cloud",
        title: "Cloud Integration & Deployment",
        description: "Deploying and managing applications on cloud platforms like AWS and Google Cloud, ensuring scalability, reliability, and performance.",
        icon: Icon::Server,
        number: "05",
    },
    Service {
        id: "code-review",
        title: "Code Review & Optimization",
        description: "Improving code quality and performance through detailed review and optimization, ensuring maintainable, efficient, and robust solutions.",
        icon: Icon::FileCode,
        number: "06",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "portfolio",
        title: "Personal Portfolio Website",
        category: "Full-Stack Web App",
        duration: "May 2025",
        featured: true,
        tags: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
        link: Some("https://atulguptag.github.io"),
        description: &[
            "Developed a modern, responsive portfolio website with server-side rendering and client hydration, showcasing professional experience and projects with an elegant design.",
            "Implemented smooth scroll-triggered reveal animations and transitions, creating an engaging user experience with interactive elements.",
            "Built a fully responsive design with Tailwind CSS, featuring a glass-morphism aesthetic, gradient effects, and a seamless dark/light mode toggle.",
            "Integrated a functional contact form with validation, toast notifications for user feedback, and optimized performance for fast loading times.",
        ],
    },
    Project {
        id: "joke-generator",
        title: "AI-Powered Joke Generator",
        category: "Full-Stack Web App",
        duration: "Jan 2025",
        featured: true,
        tags: &["React", "Go", "OAuth", "JWT"],
        link: Some("https://jokemaster-go.netlify.app/"),
        description: &[
            "Developed a full-stack joke generator web application using React for the frontend and Go with the Gin framework for the backend.",
            "Integrated Google OAuth 2.0 for secure user authentication and implemented JWT-based session management.",
            "Designed and deployed RESTful APIs to handle joke creation, retrieval, and manage user-specific joke histories.",
            "Configured continuous deployment to Google App Engine, enabling automatic deployment whenever code is pushed to the GitHub repository.",
        ],
    },
    Project {
        id: "ecommerce",
        title: "Django e-Commerce Website",
        category: "Web Application",
        duration: "June - July 2024",
        featured: true,
        tags: &["Django", "Python", "OAuth", "SQLite"],
        link: Some("https://djangoecommercewebsite.pythonanywhere.com/"),
        description: &[
            "Built a robust e-commerce platform using Python Django that incorporated secure user authentication, email verification for new accounts, and OAuth integration with Google/Facebook.",
            "Designed essential e-commerce functionalities, including product browsing, category filters, and an advanced cart systems which improved user experience and engagement.",
            "Established a live deployment of the project on PythonAnywhere, featuring seamless integration with existing systems; enhanced user experience for 10+ testers.",
            "Utilized a full-stack tech, including Python, HTML, CSS, JavaScript, and SQLite, optimizing the user interface for seamless browsing and purchase flow across devices.",
        ],
    },
    Project {
        id: "user-auth",
        title: "User Authentication System",
        category: "Full-Stack App",
        duration: "Oct - Nov 2023",
        featured: true,
        tags: &["React", "Django", "JWT", "REST API"],
        link: Some("https://user-auth-using-react-django.netlify.app/"),
        description: &[
            "Developed a robust full-stack web application for user authentication using React for the frontend and Django REST Framework for the backend.",
            "Implemented a token-based authentication system using JSON Web Tokens (JWT), allowing users to authenticate without the need for traditional sessions.",
            "Built a secure login and registration system with email verification, password strength validation, and bcrypt for hashing passwords.",
            "Developed a password reset functionality with email verification to help users recover their accounts securely and effortlessly.",
        ],
    },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        id: "moneyy",
        title: "Python Developer Intern",
        company: "Moneyy.ai",
        duration: "Feb 2025 - Present",
        responsibilities: &[
            "Developed and maintained multiple Python scripts for stocks processing and analysis, ensuring high efficiency and accuracy.",
            "Collaborated with the team members to design and implement backtesting on Stocks, improving the accuracy of predictions by 25%.",
            "Worked on integrating multiple APIs to fetch real-time stocks, enhancing the overall code efficiency.",
        ],
    },
    Experience {
        id: "worksnet",
        title: "Software Developer Intern",
        company: "WorksNet Pvt. Limited",
        duration: "June 2024 - December 2024",
        responsibilities: &[
            "Architected and implemented full-stack educational management system using Python (Django) and React.js, resulting in 20% revenue growth through automation of examination workflows.",
            "Designed and implemented a Social Auto Posting features especially LinkedIn auto-posting system to schedule and share posts automatically on the company's page.",
            "Integrated AI-driven content generation to create engaging topics, detailed write-ups, and concise key points, making content creation faster and more efficient.",
            "Spearheaded development of AI-powered content automation pipeline using Python, increasing social media engagement by 15% and reducing content creation time by 60%.",
        ],
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "Python / Django", percentage: 85 },
    Skill { name: "HTML, CSS & JavaScript", percentage: 80 },
    Skill { name: "React.js", percentage: 70 },
    Skill { name: "Go", percentage: 40 },
    Skill { name: "MySQL / PostgreSQL", percentage: 70 },
    Skill { name: "Redis", percentage: 50 },
    Skill { name: "Git & GitHub", percentage: 80 },
    Skill { name: "AWS / GCP", percentage: 60 },
    Skill { name: "TypeScript / Next.js", percentage: 60 },
    Skill { name: "Tailwind CSS", percentage: 65 },
];

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Technology - Computer Science Engineering",
        school: "Lakshmi Narain College of Technology and Science, Bhopal",
        period: "Sept 2020 - June 2024 | CGPA: 8.46",
    },
    Education {
        degree: "12th & 10th - MPBSE",
        school: "Govt. Model High Secondary School, Chanderi",
        period: "2017 - 2020",
    },
];

pub static HOBBIES: &[&str] = &[
    "🏸 Badminton",
    "🎧 Music",
    "🎬 Movies",
    "💻 Coding",
    "📚 Reading",
    "✈️ Traveling",
    "🏊 Swimming",
    "🎮 Gaming",
];

pub static SOCIALS: &[Social] = &[
    Social {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/atulguptag",
        icon: "devicon-linkedin-plain",
    },
    Social {
        name: "YouTube",
        href: "https://www.youtube.com/@atulgupta-g/?sub_confirmation=1",
        icon: "extra-youtube",
    },
    Social {
        name: "Instagram",
        href: "https://www.instagram.com/itsatulguptag/",
        icon: "extra-instagram",
    },
    Social {
        name: "Facebook",
        href: "https://www.facebook.com/itsatulguptag/",
        icon: "devicon-facebook-plain",
    },
    Social {
        name: "GitHub",
        href: "https://github.com/atulguptag",
        icon: "devicon-github-plain",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_skill_percentages_in_range() {
        assert_eq!(SKILLS.len(), 10);
        assert!(SKILLS.iter().all(|s| s.percentage <= 100));
    }

    #[test]
    fn test_ids_unique() {
        let projects = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(projects.len(), PROJECTS.len());
        let services = SERVICES.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(services.len(), SERVICES.len());
        let experiences = EXPERIENCES.iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(experiences.len(), EXPERIENCES.len());
    }

    #[test]
    fn test_service_numbers_sequential() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_links_are_https() {
        let links = PROJECTS
            .iter()
            .filter_map(|p| p.link)
            .chain(SOCIALS.iter().map(|s| s.href));
        for link in links {
            assert!(link.starts_with("https://"), "{link}");
        }
    }
}
