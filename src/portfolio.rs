//! Portfolio content.
//!
//! Structured data shared by the terminal command blocks and the GUI page.
//! Both presentations render from these tables so they never drift apart.

/// Owner's handle.
pub const HANDLE: &str = "CR0M80";

/// Phrases cycled by the typing animation on the GUI home section.
pub const ROLES: &[&str] = &[
    "Cybersecurity Engineering",
    "Digital Forensics Player",
    "Captain & Member of team 5T4F1T",
];

/// Biography paragraphs, in display order.
pub const ABOUT: &[&str] = &[
    "I am currently a Cyber Defense Engineering student at the National School of Applied Sciences of Marrakech, part of Cadi Ayyad University. I am deeply passionate about cybersecurity, with a strong interest in digital forensics and security analysis. I actively participate in CTF competitions as a player with my team \"5T4F1T\", mainly in the Forensics category, where I analyze digital evidence, investigate artifacts, and reconstruct attack scenarios.",
    "I am also a CTF creator, designing forensic challenges to help others learn through realistic and technical scenarios.",
    "My nickname, CR0M80, is inspired by the famous detective \"Crombo\", known for his intelligence, attention to detail, and ability to solve complex cases. This reflects my investigative mindset and my approach to cybersecurity, especially in forensics.",
    "And as I often say when someone doesn\u{2019}t follow instructions properly: \u{201c}Rask mrab3, asat\u{201d}\n(A Moroccan expression meaning: do it properly and follow the instructions carefully)",
];

/// A single skill with a proficiency level in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A named group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Security",
        skills: &[
            skill("Networking", 93),
            skill("Web Security", 50),
            skill("Network Security", 70),
            skill("Cryptography", 85),
        ],
    },
    SkillCategory {
        name: "Development",
        skills: &[
            skill("Python", 85),
            skill("C", 50),
            skill("HTML", 80),
            skill("MySQL", 90),
            skill("PL/SQL", 35),
        ],
    },
    SkillCategory {
        name: "Tools & Technologies",
        skills: &[
            skill("Kali Linux", 93),
            skill("AutoPsy", 86),
            skill("FTKImager", 80),
            skill("Volatility", 90),
            skill("Wireshark", 89),
        ],
    },
];

/// A published project.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub tagline: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub documentation: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "PenAut",
        tagline: "Pentest Automation Tool",
        highlights: &[
            "Lightweight Linux-based penetration testing automation tool",
            "Automates reconnaissance, vulnerability analysis, and security checks",
            "Interactive CLI interface for fast security assessments",
            "Designed for learning, CTFs, and ethical hacking workflows",
        ],
        technologies: &["Python", "Shell"],
        github: "https://github.com/CR0M80/PenAut",
        documentation: "https://github.com/CR0M80/PenAut?tab=readme-ov-file#-penaut-toolkit",
    },
    Project {
        name: "CipherPWD",
        tagline: "Encrypted Password Manager",
        highlights: &[
            "Command-line tool to securely store encrypted passwords locally",
            "Offline, open-source and cross-platform (Windows & Linux)",
            "Uses encryption to protect sensitive credentials",
            "Simple and efficient password management via terminal",
        ],
        technologies: &["Python", "Shell"],
        github: "https://github.com/CR0M80/CipherPWD",
        documentation: "https://github.com/CR0M80/CipherPWD#cipherpwd",
    },
    Project {
        name: "PNGFixer",
        tagline: "CTF-Oriented PNG Resizer Tool",
        highlights: &[
            "Lightweight Python tool for manipulating PNG image dimensions",
            "Modifies IHDR chunk values (width & height) directly",
            "Automatically recalculates CRC32 checksum",
            "Designed for CTF challenges and digital forensics",
        ],
        technologies: &["Python"],
        github: "https://github.com/CR0M80/PNGFixer",
        documentation: "https://github.com/CR0M80/PNGFixer#pngfixer---ctf-oriented-png-resizer-tool",
    },
];

/// A certification or recognised course.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub summary: &'static [&'static str],
    pub issuer: &'static str,
    pub year: u16,
    pub certificate: Option<&'static str>,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "TryHackMe \u{2014} Pre Security Certificate",
        summary: &[
            "Introductory cybersecurity certification covering networking, Linux, security principles, and common attack techniques",
            "Hands-on labs to build a strong foundational understanding of cybersecurity",
        ],
        issuer: "TryHackMe",
        year: 2025,
        certificate: Some(
            "https://tryhackme-certificates.s3-eu-west-1.amazonaws.com/THM-3CYUVATYV7.pdf",
        ),
    },
    Certification {
        title: "Palo Alto \u{2014} Network Security Fundamentals",
        summary: &[
            "Foundational certification focused on network security concepts, firewalls, threat prevention, and modern security architectures",
            "Introduces Palo Alto Networks technologies for protecting networks against cyber threats",
        ],
        issuer: "Palo Alto",
        year: 2025,
        certificate: None,
    },
    Certification {
        title: "Comprehensive C \u{2014} Udemy",
        summary: &[
            "Completed a comprehensive course covering C programming, core syntax, data structures, and problem-solving techniques",
        ],
        issuer: "Udemy",
        year: 2023,
        certificate: None,
    },
    Certification {
        title: "Contribution & Technical Leadership \u{2014} Bootcamp",
        summary: &[
            "Explained digital forensics concepts and created practical CTF-style challenges during a cybersecurity bootcamp",
        ],
        issuer: "GCDxN7 Bootcamp",
        year: 2023,
        certificate: None,
    },
];

/// Forensics challenges authored for CTF events.
pub const CHALLENGES_SUMMARY: &str = "Forensics challenges designed by CR0M80 for CTF competitions, built around realistic evidence: disk images, memory dumps and network captures to investigate.";

/// A social profile link.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Contact details.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub availability: &'static str,
    pub socials: &'static [SocialLink],
    pub closing: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "s.amar.sec@outlook.com",
    phone: "+212 664433923",
    availability: "Currently available for freelance projects or Internship",
    socials: &[
        SocialLink { label: "GitHub", url: "https://github.com/CR0M80" },
        SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/amar-saad" },
        SocialLink { label: "Medium", url: "https://medium.com/@CR0M80" },
        SocialLink { label: "TryHackMe", url: "https://tryhackme.com/p/CR0M80" },
    ],
    closing: "Let's work together to secure your digital assets and \nbuild innovative technology solutions.",
};

/// Fake home directory listing shown by `ls`.
pub const HOME_DIRECTORY: &[&str] = &[
    "Desktop",
    "Documents",
    "Downloads",
    "Music",
    "Pictures",
    "Public",
    "Templates",
    "Videos",
];
