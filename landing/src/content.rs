//! Static page content.
//!
//! Everything the page shows lives here as `const` data. Sections take
//! slices of these tables, so a test (or another deployment) can render
//! a section from any other slice of the same shape.
//!
//! # Example
//!
//! ```rust
//! use afsah_landing::content::{CONTENT, validate_content};
//!
//! assert_eq!(CONTENT.programs.len(), 4);
//! assert!(validate_content(&CONTENT).is_ok());
//! ```

use std::collections::HashSet;

use crate::error::ContentError;
use crate::sections::IconKind;

/// Brand palette, exposed to CSS as `--brand-*` custom properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Buttons, eyebrows and accents
    pub primary: &'static str,
    /// Gradient end for faculty avatars
    pub primary_dark: &'static str,
    /// Gold highlight
    pub accent: &'static str,
    /// Page background
    pub paper: &'static str,
    /// Body text
    pub ink: &'static str,
}

/// Brand metadata shared by every section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub hero_verse_en: &'static str,
    pub hero_verse_ar: &'static str,
    pub palette: Palette,
}

impl BrandConfig {
    /// `(field, value)` pairs for every string field, palette included.
    pub fn fields(&self) -> [(&'static str, &'static str); 13] {
        [
            ("name", self.name),
            ("tagline", self.tagline),
            ("cta_primary", self.cta_primary),
            ("cta_secondary", self.cta_secondary),
            ("contact_email", self.contact_email),
            ("contact_phone", self.contact_phone),
            ("hero_verse_en", self.hero_verse_en),
            ("hero_verse_ar", self.hero_verse_ar),
            ("palette.primary", self.palette.primary),
            ("palette.primary_dark", self.palette.primary_dark),
            ("palette.accent", self.palette.accent),
            ("palette.paper", self.palette.paper),
            ("palette.ink", self.palette.ink),
        ]
    }

    /// Inline style declaring the palette as CSS custom properties.
    pub fn css_vars(&self) -> String {
        let p = &self.palette;
        format!(
            "--brand-primary:{};--brand-primary-dark:{};--brand-accent:{};--brand-paper:{};--brand-ink:{};",
            p.primary, p.primary_dark, p.accent, p.paper, p.ink
        )
    }

    /// `mailto:` URL for the admissions address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// One in-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Fragment href, including the leading `#`
    pub href: &'static str,
}

impl NavItem {
    /// Element id the link scrolls to (`href` without `#`).
    pub fn fragment(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramEntry {
    pub icon: IconKind,
    /// Unique within the program list
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacultyMember {
    /// Unique within the faculty list
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    /// Unique within the FAQ list
    pub question: &'static str,
    pub answer: &'static str,
}

/// Card in the About section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Labelled row in the admissions "Key Dates" card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDate {
    pub label: &'static str,
    pub value: &'static str,
}

/// The whole page's content, grouped so it can be validated in one pass.
#[derive(Clone, Copy, Debug)]
pub struct Content {
    pub brand: &'static BrandConfig,
    pub nav: &'static [NavItem],
    pub programs: &'static [ProgramEntry],
    pub faculty: &'static [FacultyMember],
    pub faqs: &'static [FaqEntry],
}

pub const BRAND: BrandConfig = BrandConfig {
    name: "Afsah Institute",
    tagline: "Mastering Arabic Language and Quranic Memorization",
    cta_primary: "Apply Now",
    cta_secondary: "Download Prospectus",
    contact_email: "admissions@afsah.institute",
    contact_phone: "+1 (470) 555-0199",
    hero_verse_en: "And my brother Hārūn is more eloquent than me in speech (Q 28:34)",
    hero_verse_ar: "وَأَخِى هَـٰرُونُ هُوَ أَفْصَحُ مِنِّى لِسَانًۭا",
    palette: Palette {
        primary: "#27A7DF",
        primary_dark: "#1D2242",
        accent: "#FBDD5B",
        paper: "#FAF7F1",
        ink: "#1F2937",
    },
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Programs", href: "#programs" },
    NavItem { label: "Faculty", href: "#faculty" },
    NavItem { label: "Admissions", href: "#admissions" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Primary call to action, repeated in the nav, mobile menu and hero.
pub const APPLY_CTA: NavItem = NavItem {
    label: BRAND.cta_primary,
    href: "#admissions",
};

/// Footer links: the nav minus Faculty.
pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Programs", href: "#programs" },
    NavItem { label: "Admissions", href: "#admissions" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const PROGRAMS: &[ProgramEntry] = &[
    ProgramEntry {
        icon: IconKind::BookOpen,
        title: "Arabic Program",
        description: "Year-long track taking students from Beginners to Advanced level Arabic Proficiency.",
        highlights: &[
            "1 hour Arabic (theory and lab components)",
            "Focus on all input and output skills with immersive experience",
            "In-person",
        ],
    },
    ProgramEntry {
        icon: IconKind::GraduationCap,
        title: "Hifdh Program",
        description: "Full-time and Part-time memorization with sabaq, sabqi, and manzil [new, recent, and old] model.",
        highlights: &[
            "Mon-Thurs, 10am–2pm",
            "Limited to 7 students for high quality outcome",
            "An all inclusive Focus on Tajwid [Science and Art of Recitation], with understanding and strict discipline.",
        ],
    },
    ProgramEntry {
        icon: IconKind::User,
        title: "Private Tutoring",
        description: "Need help on Arabic homework, or clarification of concepts, or just want to revise. Schedule time with one of our instructors.",
        highlights: &["On-demand", "Flexible Hours", "Online"],
    },
    ProgramEntry {
        icon: IconKind::School,
        title: "Maktab",
        description: "After-school Qur’an and essentials for youth.",
        highlights: &["Akhlaq & Adab", "Seerah & Du‘a", "Community-centered"],
    },
];

pub const FACULTY: &[FacultyMember] = &[
    FacultyMember {
        name: "Imam Matib Ahmad",
        role: "Imam & Lead Instructor",
        bio: "Specializing in Arabic, Quran, Fiqh and community leadership.",
    },
    FacultyMember {
        name: "Ustadha Rumsha Karim",
        role: "Lead Instructor for Females",
        bio: "Specializing in Arabic and Islamic Studies, Certified in tajwid; passionate about youth education.",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is the institute’s ethos?",
        answer: "We uphold classical Sunni scholarship while addressing contemporary needs with clarity and ihsan.",
    },
    FaqEntry {
        question: "Are classes in person?",
        answer: "Yes, our core offerings are in-person to cultivate adab, presence, and community.",
    },
    FaqEntry {
        question: "Do you offer financial aid?",
        answer: "Limited scholarships are available; please email admissions for details.",
    },
];

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "Our Classes",
        body: "We provide Arabic classes (semester based, year long, private sessions) and Quranic \
               Learning sessions (memorization, revision, tafsir, tajwid) aimed for students for all \
               levels and backgrounds",
    },
    AboutCard {
        title: "Student Experience",
        body: "Small cohorts or private sessions, attentive instruction, and a culture of ihsan. \
               Students grow in knowledge and practice.",
    },
];

pub const KEY_DATES: &[KeyDate] = &[
    KeyDate { label: "Fall Term:", value: "Aug 11 – Dec 17" },
    KeyDate { label: "Spring Term:", value: "Jan 5 – May 7" },
    KeyDate { label: "Classes:", value: "In-person" },
];

pub const CONTENT: Content = Content {
    brand: &BRAND,
    nav: NAV_ITEMS,
    programs: PROGRAMS,
    faculty: FACULTY,
    faqs: FAQS,
};

/// Check the content invariants: non-empty brand fields, fragment nav
/// targets, and unique display keys in every keyed list.
pub fn validate_content(content: &Content) -> Result<(), ContentError> {
    for (field, value) in content.brand.fields() {
        if value.trim().is_empty() {
            return Err(ContentError::EmptyBrandField(field));
        }
    }

    for item in content.nav {
        if !item.href.starts_with('#') || item.href.len() < 2 {
            return Err(ContentError::NotAFragment {
                label: item.label.to_string(),
                href: item.href.to_string(),
            });
        }
    }

    ensure_unique("program title", content.programs.iter().map(|p| p.title))?;
    ensure_unique("faculty name", content.faculty.iter().map(|f| f.name))?;
    ensure_unique("FAQ question", content.faqs.iter().map(|f| f.question))?;

    tracing::debug!(
        programs = content.programs.len(),
        faculty = content.faculty.len(),
        faqs = content.faqs.len(),
        "content validated"
    );
    Ok(())
}

fn ensure_unique(
    kind: &'static str,
    keys: impl Iterator<Item = &'static str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        assert!(validate_content(&CONTENT).is_ok());
    }

    #[test]
    fn shipped_sequence_sizes() {
        assert_eq!(CONTENT.nav.len(), 5);
        assert_eq!(CONTENT.programs.len(), 4);
        assert_eq!(CONTENT.faculty.len(), 2);
        assert_eq!(CONTENT.faqs.len(), 3);
    }

    #[test]
    fn nav_fragment_strips_hash() {
        assert_eq!(NAV_ITEMS[0].fragment(), "about");
        assert_eq!(NAV_ITEMS[4].fragment(), "contact");
    }

    #[test]
    fn footer_links_are_a_subset_of_nav() {
        for link in FOOTER_LINKS {
            assert!(NAV_ITEMS.contains(link), "{} missing from nav", link.label);
        }
    }

    #[test]
    fn rejects_empty_brand_field() {
        static BLANK_PHONE: BrandConfig = BrandConfig {
            contact_phone: "  ",
            ..BRAND
        };
        let content = Content {
            brand: &BLANK_PHONE,
            ..CONTENT
        };
        assert_eq!(
            validate_content(&content),
            Err(ContentError::EmptyBrandField("contact_phone"))
        );
    }

    #[test]
    fn rejects_empty_palette_color() {
        static NO_ACCENT: BrandConfig = BrandConfig {
            palette: Palette {
                accent: "",
                ..BRAND.palette
            },
            ..BRAND
        };
        let content = Content {
            brand: &NO_ACCENT,
            ..CONTENT
        };
        assert_eq!(
            validate_content(&content),
            Err(ContentError::EmptyBrandField("palette.accent"))
        );
    }

    #[test]
    fn rejects_duplicate_faq_question() {
        static DUP_FAQS: &[FaqEntry] = &[
            FaqEntry { question: "Same?", answer: "a" },
            FaqEntry { question: "Same?", answer: "b" },
        ];
        let content = Content {
            faqs: DUP_FAQS,
            ..CONTENT
        };
        let err = validate_content(&content).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateKey {
                kind: "FAQ question",
                key: "Same?".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_faculty_name() {
        static DUP_FACULTY: &[FacultyMember] = &[FACULTY[0], FACULTY[0]];
        let content = Content {
            faculty: DUP_FACULTY,
            ..CONTENT
        };
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::DuplicateKey { kind: "faculty name", .. })
        ));
    }

    #[test]
    fn rejects_non_fragment_nav_target() {
        static EXTERNAL: &[NavItem] = &[NavItem {
            label: "Blog",
            href: "https://example.com/blog",
        }];
        let content = Content {
            nav: EXTERNAL,
            ..CONTENT
        };
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::NotAFragment { .. })
        ));
    }

    #[test]
    fn empty_sequences_are_valid() {
        let content = Content {
            nav: &[],
            programs: &[],
            faculty: &[],
            faqs: &[],
            ..CONTENT
        };
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn css_vars_cover_full_palette() {
        let vars = BRAND.css_vars();
        assert!(vars.contains("--brand-primary:#27A7DF;"));
        assert!(vars.contains("--brand-primary-dark:#1D2242;"));
        assert!(vars.contains("--brand-accent:#FBDD5B;"));
        assert!(vars.contains("--brand-paper:#FAF7F1;"));
        assert!(vars.contains("--brand-ink:#1F2937;"));
    }

    #[test]
    fn mailto_targets_admissions() {
        assert_eq!(BRAND.mailto(), "mailto:admissions@afsah.institute");
    }
}
