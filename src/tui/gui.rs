//! The GUI view: one long scrollable page split into sections.
//!
//! The page is laid out for a given width into logical rows. Rendering only
//! slices rows out of it, so section offsets are known ahead of drawing and
//! digit jumps work before the first frame.

use crate::portfolio::{
    ABOUT, CERTIFICATIONS, CHALLENGES_SUMMARY, CONTACT, HANDLE, PROJECTS, SKILLS,
};

/// Rows between the scroll position and the point used to decide which
/// section is "current" in the navigation bar.
const SECTION_LOOKAHEAD: usize = 3;

/// Width used before the first frame tells us the real one.
const DEFAULT_WIDTH: u16 = 80;

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Certifications,
        Self::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    /// Section bound to a digit key (`1` = Home).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// One logical row of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRow {
    Blank,
    /// Section title.
    Heading(&'static str),
    /// Sub-heading inside a section (category, project name, ...).
    Subheading(String),
    Text(String),
    /// `label: url` style rows.
    Link { label: &'static str, url: String },
    /// A skill with its level, drawn as a gauge.
    SkillBar { name: &'static str, level: u8 },
    /// The typewriter line on the home section.
    Typing,
}

/// A laid-out page.
#[derive(Debug, Clone)]
pub struct Page {
    width: u16,
    rows: Vec<PageRow>,
    sections: Vec<(Section, usize)>,
}

impl Page {
    /// Lays out every section for a content area `width` columns wide.
    pub fn layout(width: u16) -> Self {
        let mut builder = PageBuilder {
            width: usize::from(width.max(10)),
            rows: Vec::new(),
            sections: Vec::new(),
        };

        builder.home();
        builder.about();
        builder.skills();
        builder.projects();
        builder.certifications();
        builder.contact();

        Self {
            width,
            rows: builder.rows,
            sections: builder.sections,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn rows(&self) -> &[PageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row of `section`.
    pub fn offset_of(&self, section: Section) -> usize {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
            .unwrap_or(0)
    }

    /// The section containing `row`.
    pub fn section_at(&self, row: usize) -> Section {
        self.sections
            .iter()
            .rev()
            .find(|(_, offset)| *offset <= row)
            .map(|(s, _)| *s)
            .unwrap_or(Section::Home)
    }
}

struct PageBuilder {
    width: usize,
    rows: Vec<PageRow>,
    sections: Vec<(Section, usize)>,
}

impl PageBuilder {
    fn section(&mut self, section: Section) {
        if !self.rows.is_empty() {
            self.rows.push(PageRow::Blank);
        }
        self.sections.push((section, self.rows.len()));
        self.rows.push(PageRow::Heading(section.title()));
        self.rows.push(PageRow::Blank);
    }

    fn paragraph(&mut self, text: &str, indent: &str) {
        let width = self.width.saturating_sub(indent.chars().count()).max(1);
        for line in wrap_text(text, width) {
            self.rows.push(PageRow::Text(format!("{indent}{line}")));
        }
    }

    fn bullet(&mut self, text: &str) {
        let width = self.width.saturating_sub(2).max(1);
        for (i, line) in wrap_text(text, width).into_iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            self.rows.push(PageRow::Text(format!("{marker}{line}")));
        }
    }

    fn home(&mut self) {
        self.section(Section::Home);
        self.rows.push(PageRow::Subheading(format!("Hi, I'm {HANDLE}")));
        self.rows.push(PageRow::Typing);
        self.rows.push(PageRow::Blank);
        self.paragraph("Press 1-6 to jump to a section, t to open the terminal.", "");
    }

    fn about(&mut self) {
        self.section(Section::About);
        for (i, paragraph) in ABOUT.iter().enumerate() {
            if i > 0 {
                self.rows.push(PageRow::Blank);
            }
            for part in paragraph.lines() {
                self.paragraph(part, "");
            }
        }
    }

    fn skills(&mut self) {
        self.section(Section::Skills);
        for (i, category) in SKILLS.iter().enumerate() {
            if i > 0 {
                self.rows.push(PageRow::Blank);
            }
            self.rows.push(PageRow::Subheading(category.name.to_string()));
            for skill in category.skills {
                self.rows.push(PageRow::SkillBar {
                    name: skill.name,
                    level: skill.level,
                });
            }
        }
    }

    fn projects(&mut self) {
        self.section(Section::Projects);
        for (i, project) in PROJECTS.iter().enumerate() {
            if i > 0 {
                self.rows.push(PageRow::Blank);
            }
            self.rows.push(PageRow::Subheading(format!(
                "{} - {}",
                project.name, project.tagline
            )));
            for highlight in project.highlights {
                self.bullet(highlight);
            }
            self.paragraph(&project.technologies.join(" · "), "  ");
            self.rows.push(PageRow::Link {
                label: "GitHub",
                url: project.github.to_string(),
            });
            self.rows.push(PageRow::Link {
                label: "Docs",
                url: project.documentation.to_string(),
            });
        }
    }

    fn certifications(&mut self) {
        self.section(Section::Certifications);
        for cert in CERTIFICATIONS {
            self.rows.push(PageRow::Subheading(cert.title.to_string()));
            self.paragraph(&format!("{} · {}", cert.issuer, cert.year), "  ");
            for line in cert.summary {
                self.bullet(line);
            }
            if let Some(url) = cert.certificate {
                self.rows.push(PageRow::Link {
                    label: "Certificate",
                    url: url.to_string(),
                });
            }
            self.rows.push(PageRow::Blank);
        }
        self.rows.push(PageRow::Subheading("CTF Challenges".to_string()));
        self.paragraph(CHALLENGES_SUMMARY, "");
    }

    fn contact(&mut self) {
        self.section(Section::Contact);
        self.rows.push(PageRow::Link {
            label: "Email",
            url: CONTACT.email.to_string(),
        });
        self.rows.push(PageRow::Link {
            label: "Phone",
            url: CONTACT.phone.to_string(),
        });
        self.paragraph(CONTACT.availability, "");
        self.rows.push(PageRow::Blank);
        for social in CONTACT.socials {
            self.rows.push(PageRow::Link {
                label: social.label,
                url: social.url.to_string(),
            });
        }
        self.rows.push(PageRow::Blank);
        for line in CONTACT.closing.lines() {
            self.paragraph(line.trim_end(), "");
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Scroll position over a laid-out [`Page`].
#[derive(Debug, Clone)]
pub struct GuiState {
    page: Page,
    scroll: usize,
    viewport: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiState {
    pub fn new() -> Self {
        Self {
            page: Page::layout(DEFAULT_WIDTH),
            scroll: 0,
            viewport: 20,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Re-lays out the page when the content area changes, keeping the
    /// reader in the same section.
    pub fn resize(&mut self, width: u16, viewport: u16) {
        self.viewport = usize::from(viewport.max(1));
        if width == self.page.width() {
            return;
        }
        let section = self.page.section_at(self.scroll);
        let into_section = self.scroll - self.page.offset_of(section);
        self.page = Page::layout(width);
        self.scroll = self.page.offset_of(section) + into_section;
        self.clamp();
    }

    fn max_scroll(&self) -> usize {
        self.page.len().saturating_sub(1)
    }

    fn clamp(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Section highlighted in the navigation bar.
    pub fn current_section(&self) -> Section {
        self.page.section_at(self.scroll + SECTION_LOOKAHEAD)
    }

    pub fn jump_to(&mut self, section: Section) {
        self.scroll = self.page.offset_of(section);
        self.clamp();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_add(rows);
        self.clamp();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.saturating_sub(1).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        for line in wrap_text(ABOUT[0], 30) {
            assert!(line.chars().count() <= 30, "too long: {line}");
        }
    }

    #[test]
    fn test_sections_in_order() {
        let page = Page::layout(80);
        let offsets: Vec<usize> = Section::ALL.iter().map(|s| page.offset_of(*s)).collect();
        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        for section in Section::ALL {
            assert_eq!(
                page.rows()[page.offset_of(section)],
                PageRow::Heading(section.title())
            );
        }
    }

    #[test]
    fn test_page_has_one_typing_row() {
        let page = Page::layout(80);
        let typing = page.rows().iter().filter(|r| **r == PageRow::Typing).count();
        assert_eq!(typing, 1);
    }

    #[test]
    fn test_every_skill_has_a_bar() {
        let page = Page::layout(80);
        let bars = page
            .rows()
            .iter()
            .filter(|r| matches!(r, PageRow::SkillBar { .. }))
            .count();
        let skills: usize = SKILLS.iter().map(|c| c.skills.len()).sum();
        assert_eq!(bars, skills);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Home));
        assert_eq!(Section::from_digit('6'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('7'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn test_jump_and_highlight() {
        let mut gui = GuiState::new();
        assert_eq!(gui.current_section(), Section::Home);

        gui.jump_to(Section::Projects);
        assert_eq!(gui.scroll(), gui.page().offset_of(Section::Projects));
        assert_eq!(gui.current_section(), Section::Projects);
    }

    #[test]
    fn test_highlight_uses_lookahead() {
        let mut gui = GuiState::new();
        let about = gui.page().offset_of(Section::About);
        gui.scroll_down(about - SECTION_LOOKAHEAD);
        assert_eq!(gui.current_section(), Section::About);
        gui.scroll_up(1);
        assert_eq!(gui.current_section(), Section::Home);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut gui = GuiState::new();
        gui.scroll_up(5);
        assert_eq!(gui.scroll(), 0);

        gui.scroll_down(usize::MAX);
        assert_eq!(gui.scroll(), gui.page().len() - 1);
        assert_eq!(gui.current_section(), Section::Contact);

        gui.scroll_to_top();
        assert_eq!(gui.scroll(), 0);
    }

    #[test]
    fn test_resize_keeps_section() {
        let mut gui = GuiState::new();
        gui.jump_to(Section::Certifications);
        gui.resize(40, 20);
        assert_eq!(gui.page().width(), 40);
        assert_eq!(gui.current_section(), Section::Certifications);
    }
}
