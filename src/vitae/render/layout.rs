use crate::format::{
    escape_markdown, format_date, format_date_range, format_phone, initials, link_url,
};
use crate::model::{Document, Template};
use serde::Serialize;

/// Render-ready projection of a [`Document`].
///
/// Every value is already formatted for display (dates, phone, joined address),
/// so templates only decide layout and typography. Empty collections stay empty
/// and optional strings stay `None`; templates skip those sections.
///
/// User text is Markdown-escaped here, so a summary that starts with `# ` or
/// contains `<script>` comes out as the characters typed. URLs are
/// percent-encoded instead, since they also serve as link targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub template: Template,
    pub header: Header,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
    pub certificates: Vec<CertificateItem>,
    pub languages: Vec<LanguageItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub initials: String,
    pub title: Option<String>,
    /// Email, formatted phone and location, in that order, skipping blanks.
    pub contact: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub dates: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationItem {
    pub institution: String,
    /// "BSc in Computer Science", or the degree alone.
    pub degree: String,
    pub dates: String,
    pub location: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
    pub label: &'static str,
    pub stars: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectItem {
    pub name: String,
    pub url: Option<String>,
    pub dates: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateItem {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageItem {
    pub name: String,
    pub proficiency: String,
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| escape_markdown(s))
}

fn non_empty_opt(s: &Option<String>) -> Option<String> {
    s.as_deref().and_then(non_empty)
}

fn url(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(link_url)
}

impl Layout {
    pub fn project(doc: &Document) -> Self {
        let info = &doc.personal_info;

        let contact = [
            info.email.trim().to_string(),
            format_phone(info.phone.trim()),
            info.location_line(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| escape_markdown(&s))
        .collect();

        let links = [
            ("LinkedIn", &info.linkedin),
            ("GitHub", &info.github),
            ("Website", &info.website),
        ]
        .into_iter()
        .filter_map(|(label, target)| url(target).map(|url| Link { label, url }))
        .collect();

        let header = Header {
            name: escape_markdown(info.full_name.trim()),
            initials: escape_markdown(&initials(&info.full_name)),
            title: non_empty(&info.title),
            contact,
            links,
        };

        let experience = doc
            .experience
            .iter()
            .map(|e| &e.data)
            .map(|e| ExperienceItem {
                position: escape_markdown(&e.position),
                company: escape_markdown(&e.company),
                dates: escape_markdown(&format_date_range(&e.start_date, &e.end_date, e.current)),
                location: non_empty(&e.location),
                description: non_empty(&e.description),
                highlights: e
                    .highlights
                    .iter()
                    .filter_map(|h| non_empty(h))
                    .collect(),
            })
            .collect();

        let education = doc
            .education
            .iter()
            .map(|e| &e.data)
            .map(|e| EducationItem {
                institution: escape_markdown(&e.institution),
                degree: match non_empty(&e.field) {
                    Some(field) => format!("{} in {}", escape_markdown(&e.degree), field),
                    None => escape_markdown(&e.degree),
                },
                dates: escape_markdown(&format_date_range(&e.start_date, &e.end_date, false)),
                location: non_empty(&e.location),
                gpa: non_empty_opt(&e.gpa),
                description: non_empty(&e.description),
            })
            .collect();

        let skills = doc
            .skills
            .iter()
            .map(|s| SkillItem {
                name: escape_markdown(&s.data.name),
                level: s.data.level.get(),
                label: s.data.level.label(),
                stars: s.data.level.stars(),
            })
            .collect();

        let projects = doc
            .projects
            .iter()
            .map(|p| &p.data)
            .map(|p| {
                let has_dates = !p.start_date.trim().is_empty() || !p.end_date.trim().is_empty();
                ProjectItem {
                    name: escape_markdown(&p.name),
                    url: url(&p.url),
                    dates: has_dates.then(|| {
                        escape_markdown(&format_date_range(&p.start_date, &p.end_date, false))
                    }),
                    description: non_empty(&p.description),
                    technologies: p
                        .technologies
                        .iter()
                        .filter_map(|t| non_empty(t))
                        .collect(),
                }
            })
            .collect();

        let certificates = doc
            .certificates
            .iter()
            .map(|c| CertificateItem {
                name: escape_markdown(&c.data.name),
                issuer: non_empty(&c.data.issuer),
                date: non_empty(&format_date(&c.data.date)),
                url: url(&c.data.url),
            })
            .collect();

        let languages = doc
            .languages
            .iter()
            .map(|l| LanguageItem {
                name: escape_markdown(&l.data.name),
                proficiency: l.data.proficiency.to_string(),
            })
            .collect();

        Layout {
            template: doc.template,
            header,
            summary: non_empty(&info.summary),
            experience,
            education,
            skills,
            projects,
            certificates,
            languages,
        }
    }

    /// Names of the sections that will appear, in document order.
    #[cfg(test)]
    pub fn sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::new();
        if self.summary.is_some() {
            sections.push("summary");
        }
        if !self.experience.is_empty() {
            sections.push("experience");
        }
        if !self.education.is_empty() {
            sections.push("education");
        }
        if !self.skills.is_empty() {
            sections.push("skills");
        }
        if !self.projects.is_empty() {
            sections.push("projects");
        }
        if !self.certificates.is_empty() {
            sections.push("certificates");
        }
        if !self.languages.is_empty() {
            sections.push("languages");
        }
        sections
    }
}
