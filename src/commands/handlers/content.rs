//! Content handlers (`cr -about`, `cr -skills`, ...).
//!
//! Each one renders a fixed block from the portfolio tables.

use crate::commands::art;
use crate::commands::help::HELP_TEXT;
use crate::commands::output::CommandOutput;
use crate::portfolio::{self, Skill, CERTIFICATIONS, CONTACT, PROJECTS, SKILLS};

/// Width of the bar column in the skills listing, padding included.
const SKILL_BAR_COLUMN: usize = 27;

/// Handle `cr -help`.
pub fn handle_help() -> CommandOutput {
    CommandOutput::text(HELP_TEXT)
}

/// Handle `cr -about`.
pub fn handle_about() -> CommandOutput {
    let mut out = art::render(art::ABOUT);
    out.push_str(&format!("\n\nWho's {} ?\n", portfolio::HANDLE));
    out.push_str(&portfolio::ABOUT.join("\n\n"));
    CommandOutput::text(out)
}

/// Renders one skill as a text bar, e.g. `█████████   50% C`.
pub fn skill_bar(skill: &Skill) -> String {
    let bar = "█".repeat(usize::from(skill.level / 5));
    format!(
        "{:<width$}{}% {}",
        bar,
        skill.level,
        skill.name,
        width = SKILL_BAR_COLUMN
    )
}

/// Handle `cr -skills`.
pub fn handle_skills() -> CommandOutput {
    let mut out = art::render(art::SKILLS);
    out.push_str("\n\nTechnical Skills:\n");
    for category in SKILLS {
        out.push_str(&format!("\n{}:\n", category.name));
        for skill in category.skills {
            out.push_str(&skill_bar(skill));
            out.push('\n');
        }
    }
    CommandOutput::text(out.trim_end())
}

/// Bullet list, one `- item` line each.
fn bullets(items: &[&str]) -> String {
    items.iter().map(|item| format!("- {item}\n")).collect()
}

/// Handle `cr -projects`.
pub fn handle_projects() -> CommandOutput {
    let mut out = art::render(art::PROJECTS);
    out.push_str("\n\nRecent Projects:\n");
    for (i, project) in PROJECTS.iter().enumerate() {
        out.push_str(&format!(
            "\n  {}. {} \u{2014} {}\n\n{}\n\
             ➤ Technologies:  {}\n\
             ➤ GitHub Link:   {}\n\
             ➤ Documentation: {}\n",
            i + 1,
            project.name,
            project.tagline,
            bullets(project.highlights),
            project.technologies.join(", "),
            project.github,
            project.documentation
        ));
    }
    CommandOutput::text(out.trim_end())
}

/// Handle `cr -certs`.
pub fn handle_certifications() -> CommandOutput {
    let mut out = art::render(art::CERTIFICATIONS);
    out.push('\n');
    for (i, cert) in CERTIFICATIONS.iter().enumerate() {
        out.push_str(&format!(
            "\n  {}. {}\n\n{}\n➤ Issuing Organization: {}\n➤ Year: {}\n",
            i + 1,
            cert.title,
            bullets(cert.summary),
            cert.issuer,
            cert.year
        ));
        if let Some(url) = cert.certificate {
            out.push_str(&format!("➤ Certificate: {url}\n"));
        }
    }
    CommandOutput::text(out.trim_end())
}

/// Handle `cr -challs`.
pub fn handle_challenges() -> CommandOutput {
    let mut out = art::render(art::CHALLENGES);
    out.push_str("\n\n   Please Switch to GUI interface for more details !!!");
    CommandOutput::text(out)
}

/// Handle `cr -contact`.
pub fn handle_contact() -> CommandOutput {
    let socials: String = CONTACT
        .socials
        .iter()
        .map(|link| format!("- {:<12}{}\n", format!("{}:", link.label), link.url))
        .collect();

    let mut out = art::render(art::CONTACT);
    out.push_str(&format!(
        "\n\nContact Information:\n\n\
         Email:        {}\n\
         Phone:        {}\n\
         Availability: {}\n\
         \nSocial:\n{}\n{}",
        CONTACT.email, CONTACT.phone, CONTACT.availability, socials, CONTACT.closing
    ));
    CommandOutput::text(out)
}

/// Handle `ls`.
pub fn handle_list() -> CommandOutput {
    CommandOutput::text(portfolio::HOME_DIRECTORY.join("  "))
}
