pub const NAME: &str = "Noor Aldeen Al-Harahsheh";
pub const ROLE: &str = "Data Scientist & AI Engineer";
pub const TAGLINE: &str = "Data Scientist & AI Engineer | Turning Data into Insights";
pub const EMAIL: &str = "nooraldeen529@gmail.com";
pub const PHONE_DISPLAY: &str = "+962 79 129 8522";
pub const MAILTO: &str = "mailto:nooraldeen529@gmail.com";
pub const LOCATION: &str = "Amman, Jordan";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/nooraldeen-samer";
pub const LINKEDIN_DISPLAY: &str = "linkedin.com/in/nooraldeen-samer";
pub const AVATAR_SRC: &str = "/profile.svg";

/// Navigable sections in document order, with their nav labels.
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub const HERO_SUMMARY: &str = "Results-driven Data Scientist with expertise in machine learning, natural language processing, and scalable data systems. Passionate about leveraging AI to solve complex problems and drive innovation.";

pub const ABOUT: [&str; 2] = [
    "I'm a passionate Data Scientist based in Amman, Jordan, with a strong foundation in machine learning, natural language processing, and scalable data systems. As part of Jordan's first cohort to earn a bachelor's degree in Data Science, I ranked third in my class, demonstrating my dedication to academic excellence and passion for advancing the field.",
    "My experience spans across diverse industries, from legal tech to telecommunications, where I've successfully deployed AI solutions that impact hundreds of thousands of users. I specialize in building production-ready ML pipelines, developing multilingual NLP models, and creating intelligent systems that deliver measurable business value.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        value: "280K+",
        label: "Legal cases impacted",
        icon: "extra-target",
    },
    Stat {
        value: "5K+",
        label: "Monthly chatbot users",
        icon: "extra-user",
    },
    Stat {
        value: "85%+",
        label: "User satisfaction rate",
        icon: "extra-trending-up",
    },
    Stat {
        value: "60%",
        label: "Data processing improvement",
        icon: "extra-bar-chart",
    },
];

pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        role: "Data Scientist",
        company: "Qistas for Information Technology",
        location: "Amman, Jordan",
        period: "Sep 2023 - Present",
        achievements: &[
            "Led AI/ML projects in legal tech sector across Gulf countries, impacting 280,000+ legal cases",
            "Developed \"Araf\" multilingual AI legal chatbot serving 5,000+ users monthly with 85%+ satisfaction",
            "Built NLP models for legislative analysis, reducing legal research time by 30%",
            "Created interactive dashboards improving decision-making efficiency by 45%",
            "Implemented Elasticsearch semantic search across 800,000+ legal documents",
            "Designed dynamic function routing with GPT-4, reducing query response time by 35%",
        ],
    },
    ExperienceEntry {
        role: "Data Scientist Intern",
        company: "Orange Company",
        location: "Amman, Jordan",
        period: "May - Jul 2023",
        achievements: &[
            "Conducted comprehensive data collection, cleansing, and preprocessing",
            "Engineered and fine-tuned machine learning models with focus on performance and scalability",
            "Collaborated with cross-functional teams to align technical solutions with business objectives",
            "Led full-cycle data science projects from problem definition to model deployment",
        ],
    },
    ExperienceEntry {
        role: "Data Scientist Intern",
        company: "SHAI For AI Company",
        location: "Amman, Jordan",
        period: "Sep 2022 - Feb 2023",
        achievements: &[
            "Developed computer vision, ML, and NLP models achieving up to 84% accuracy",
            "Processed large-scale datasets exceeding 100,000 records with 99% data integrity",
            "Engineered Python library for real-time face recognition with 87% accuracy",
            "Designed custom search engine improving Arabic semantic search by 35%",
            "Built real-time object detection system for live-streamed games using YOLOv5",
        ],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub highlight: &'static str,
}

pub static EDUCATION: Education = Education {
    degree: "Bachelor of Science in Data Science",
    school: "Balqa Applied University",
    location: "Amman, Al-Salt, Balqa",
    period: "2019 - 2023",
    grade: "GPA: 3.25 (Very Good)",
    highlight: "🏆 Graduated as part of Jordan's first cohort to earn a bachelor's degree in Data Science, ranking third in my class. This achievement highlights my dedication to academic excellence and passion for advancing the field of data science.",
};

pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Programming Languages",
        icon: "extra-code",
        accent: "text-blue-600",
        skills: &["Python", "SQL", "NoSQL"],
    },
    SkillGroup {
        title: "Machine Learning & AI",
        icon: "extra-brain",
        accent: "text-purple-600",
        skills: &["Scikit-learn", "PyTorch", "OpenAI", "NLTK", "OpenCV"],
    },
    SkillGroup {
        title: "Data Analysis & Visualization",
        icon: "extra-bar-chart",
        accent: "text-green-600",
        skills: &[
            "Numpy",
            "Pandas",
            "Matplotlib",
            "Seaborn",
            "Plotly",
            "Power BI",
        ],
    },
    SkillGroup {
        title: "Development & Deployment",
        icon: "extra-globe",
        accent: "text-orange-600",
        skills: &["FastAPI", "Jupyter Notebook", "Elasticsearch", "Ollama"],
    },
    SkillGroup {
        title: "Databases & Tools",
        icon: "extra-database",
        accent: "text-red-600",
        skills: &["MySQL", "SSMS", "Kibana", "Postman"],
    },
    SkillGroup {
        title: "Scientific Computing",
        icon: "extra-trending-up",
        accent: "text-teal-600",
        skills: &["Scipy.stats", "Math", "JSON", "Requests"],
    },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
    pub text: &'static str,
    /// `None` for plain text entries.
    pub href: Option<&'static str>,
    pub external: bool,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Email",
        icon: "extra-email",
        badge: "from-orange-500 to-orange-600",
        text: EMAIL,
        href: Some(MAILTO),
        external: false,
    },
    ContactChannel {
        label: "Phone",
        icon: "extra-phone",
        badge: "from-green-500 to-green-600",
        text: PHONE_DISPLAY,
        href: Some("tel:+962791298522"),
        external: false,
    },
    ContactChannel {
        label: "Location",
        icon: "extra-location",
        badge: "from-red-500 to-red-600",
        text: LOCATION,
        href: None,
        external: false,
    },
    ContactChannel {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        badge: "from-blue-500 to-blue-600",
        text: LINKEDIN_DISPLAY,
        href: Some(LINKEDIN_URL),
        external: true,
    },
];

/// Staggered transition delay for the `index`-th item of a group.
pub fn stagger_ms(base: u32, step: u32, index: usize) -> u32 {
    base + step * index as u32
}
