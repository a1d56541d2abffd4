//! CV as a letter-size PDF.
//!
//! Layout is computed first as plain positioned elements so it can be
//! inspected without parsing PDF bytes; [`render`] then draws it with
//! printpdf's built-in Helvetica.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};

use leumas_core::domain::{Service, Skill};

pub const CV_FILENAME: &str = "Samuel_Adomeh_CV.pdf";

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN_X: f32 = 19.05;
const MARGIN_Y: f32 = 12.7;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
const PT: f32 = 0.3528;
const LEADING: f32 = 1.35;

const NAME: &str = "SAMUEL ADOMEH";
const ROLE: &str = "Senior DevOps Engineer";
const CONTACT: &str = "Wroclaw, Poland | +48 661 910 134 | hemodasam@gmail.com | LinkedIn | GitHub";

const SUMMARY: &str = "With over a decade of experience as a Senior DevOps Engineer, I specialize in \
transforming complex development workflows into streamlined, automated processes. Expert in cloud \
infrastructure, containerization, CI/CD pipelines, and enterprise-level system architecture. Proven \
track record of delivering 99.9% uptime solutions, reducing deployment cycles by 60%, and optimizing \
infrastructure costs.";

const EDUCATION: &[[&str; 3]] = &[
    ["2006-2008", "MSC in Computer Engineer", "Envato University"],
    ["2003-2005", "BSC in Computer Engineer", "Envato University"],
    ["2000-2002", "HSC in Computer Engineer", "Envato University"],
];

const EXPERIENCE: &[[&str; 3]] = &[
    ["2014-2018", "Full Stack Web Developer", "Envato Company"],
    ["2011-2014", "Web Developer", "Envato Company"],
    ["2009-2011", "Web Designer", "Envato Company"],
];

const LANGUAGES: &str = "English - Fluent | Polish - Professional Working Proficiency";

const HIGHLIGHTS: &[&str] = &[
    "Achieved 99.9% uptime SLA compliance across multiple deployments",
    "Reduced deployment cycles by 60% through CI/CD automation",
    "Designed and implemented multi-cloud infrastructure (AWS, Azure, GCP)",
    "Led teams of 5+ engineers in DevOps transformation initiatives",
    "Successfully migrated 15+ legacy applications to cloud-native architecture",
    "Implemented monitoring solutions covering 1000+ metrics across enterprise infrastructure",
];

#[derive(Debug, thiserror::Error)]
#[error("PDF generation failed: {0}")]
pub struct CvError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Ink,
    Accent,
    Rule,
}

impl Shade {
    fn color(self) -> Color {
        let (r, g, b) = match self {
            Shade::Ink => (0.2, 0.2, 0.2),
            Shade::Accent => (0.4, 0.494, 0.918),
            Shade::Rule => (0.8, 0.8, 0.8),
        };
        Color::Rgb(Rgb::new(r, g, b, None))
    }
}

/// One positioned drawing operation. Coordinates are millimetres from the
/// bottom-left corner, `y` being the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        shade: Shade,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CvLayout {
    pub pages: Vec<Vec<Element>>,
}

impl CvLayout {
    /// Every text run in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

/// Built-in fonts only cover Latin-1; anything else is approximated or dropped.
fn pdf_safe(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201c}' | '\u{201d}' => Some('"'),
            '\u{2013}' | '\u{2014}' => Some('-'),
            c if c.is_ascii() => Some(c),
            _ => None,
        })
        .collect()
}

/// Rough Helvetica advance, good enough for wrapping.
fn char_width(size: f32, weight: Weight) -> f32 {
    let em = match weight {
        Weight::Regular => 0.5,
        Weight::Bold => 0.55,
    };
    size * PT * em
}

/// Greedy word wrap to at most `max_chars` per line. Overlong words get a line of their own.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A table cell: left edge, width, weight, content.
struct Cell<'a>(f32, f32, Weight, &'a str);

/// Top-down cursor that starts a new page when content would cross the bottom margin.
struct Cursor {
    pages: Vec<Vec<Element>>,
    /// Distance from the top edge.
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: MARGIN_Y,
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    fn ensure(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - MARGIN_Y {
            self.pages.push(Vec::new());
            self.y = MARGIN_Y;
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y += mm;
    }

    fn text_at(&mut self, x: f32, top: f32, size: f32, weight: Weight, shade: Shade, text: &str) {
        self.push(Element::Text {
            x,
            y: PAGE_HEIGHT - (top + size * PT),
            size,
            weight,
            shade,
            text: pdf_safe(text),
        });
    }

    fn paragraph(&mut self, x: f32, width: f32, size: f32, weight: Weight, shade: Shade, text: &str) {
        let max_chars = (width / char_width(size, weight)) as usize;
        let line_height = size * PT * LEADING;

        for line in wrap(text, max_chars.max(1)) {
            self.ensure(line_height);
            let top = self.y;
            self.text_at(x, top, size, weight, shade, &line);
            self.y += line_height;
        }
    }

    fn centered(&mut self, size: f32, weight: Weight, shade: Shade, text: &str) {
        let line_height = size * PT * LEADING;
        let width = text.len() as f32 * char_width(size, weight);
        self.ensure(line_height);
        let top = self.y;
        self.text_at(((PAGE_WIDTH - width) / 2.0).max(MARGIN_X), top, size, weight, shade, text);
        self.y += line_height;
    }

    fn rule(&mut self) {
        let y = PAGE_HEIGHT - self.y;
        self.push(Element::Rule {
            x1: MARGIN_X,
            x2: PAGE_WIDTH - MARGIN_X,
            y,
        });
    }

    fn heading(&mut self, text: &str) {
        self.gap(4.0);
        self.ensure(14.0 * PT * LEADING + 8.0);
        self.paragraph(MARGIN_X, CONTENT_WIDTH, 14.0, Weight::Bold, Shade::Accent, text);
        self.gap(1.0);
        self.rule();
        self.gap(2.5);
    }

    /// Cells wrap independently; the row is as tall as its tallest cell.
    fn row(&mut self, size: f32, cells: &[Cell<'_>]) {
        let line_height = size * PT * LEADING;
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .map(|Cell(_, width, weight, text)| {
                wrap(text, ((width - 2.0) / char_width(size, *weight)).max(1.0) as usize)
            })
            .collect();
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);

        self.ensure(lines as f32 * line_height + 2.0);
        let top = self.y + 1.0;
        for (Cell(x, _, weight, _), cell_lines) in cells.iter().zip(&wrapped) {
            for (i, line) in cell_lines.iter().enumerate() {
                self.text_at(*x, top + i as f32 * line_height, size, *weight, Shade::Ink, line);
            }
        }
        self.y = top + lines as f32 * line_height + 1.0;
        self.rule();
    }
}

/// Skill names per category, categories in order of first appearance.
fn skill_rows(skills: &[Skill]) -> Vec<(&str, String)> {
    let mut rows: Vec<(&str, Vec<&str>)> = Vec::new();
    for skill in skills {
        match rows.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, names)) => names.push(skill.name.as_str()),
            None => rows.push((skill.category.as_str(), vec![skill.name.as_str()])),
        }
    }
    rows.into_iter().map(|(category, names)| (category, names.join(", "))).collect()
}

fn timeline(cursor: &mut Cursor, rows: &[[&str; 3]]) {
    for [years, title, place] in rows {
        cursor.row(
            10.0,
            &[
                Cell(MARGIN_X, 25.4, Weight::Bold, years),
                Cell(MARGIN_X + 25.4, 60.0, Weight::Regular, title),
                Cell(MARGIN_X + 85.4, CONTENT_WIDTH - 85.4, Weight::Regular, place),
            ],
        );
    }
}

/// Position every element of the CV. Pure: the same services and skills
/// always give the same layout.
pub fn layout(services: &[Service], skills: &[Skill]) -> CvLayout {
    let mut cursor = Cursor::new();

    cursor.centered(24.0, Weight::Bold, Shade::Ink, NAME);
    cursor.centered(12.0, Weight::Regular, Shade::Ink, ROLE);
    cursor.gap(2.0);
    cursor.centered(9.0, Weight::Regular, Shade::Ink, CONTACT);

    cursor.heading("PROFESSIONAL SUMMARY");
    cursor.paragraph(MARGIN_X, CONTENT_WIDTH, 10.0, Weight::Regular, Shade::Ink, SUMMARY);

    cursor.heading("SERVICES & EXPERTISE");
    for service in services {
        cursor.row(
            9.0,
            &[
                Cell(MARGIN_X, 38.1, Weight::Bold, &service.title),
                Cell(MARGIN_X + 38.1, CONTENT_WIDTH - 38.1, Weight::Regular, &service.description),
            ],
        );
    }

    cursor.heading("EDUCATION");
    timeline(&mut cursor, EDUCATION);

    cursor.heading("EXPERIENCE");
    timeline(&mut cursor, EXPERIENCE);

    cursor.heading("TECHNICAL SKILLS");
    for (category, names) in skill_rows(skills) {
        cursor.row(
            9.0,
            &[
                Cell(MARGIN_X, 45.0, Weight::Bold, category),
                Cell(MARGIN_X + 45.0, CONTENT_WIDTH - 45.0, Weight::Regular, &names),
            ],
        );
    }

    cursor.heading("LANGUAGES");
    cursor.paragraph(MARGIN_X, CONTENT_WIDTH, 10.0, Weight::Regular, Shade::Ink, LANGUAGES);

    cursor.heading("KEY HIGHLIGHTS");
    for highlight in HIGHLIGHTS {
        cursor.paragraph(
            MARGIN_X,
            CONTENT_WIDTH,
            9.0,
            Weight::Regular,
            Shade::Ink,
            &format!("- {highlight}"),
        );
    }

    CvLayout { pages: cursor.pages }
}

fn draw(layer: &PdfLayerReference, elements: &[Element], regular: &IndirectFontRef, bold: &IndirectFontRef) {
    for element in elements {
        match element {
            Element::Text {
                x,
                y,
                size,
                weight,
                shade,
                text,
            } => {
                let font = match weight {
                    Weight::Regular => regular,
                    Weight::Bold => bold,
                };
                layer.set_fill_color(shade.color());
                layer.use_text(text.as_str(), *size, Mm(*x), Mm(*y), font);
            }
            Element::Rule { x1, x2, y } => {
                layer.set_outline_color(Shade::Rule.color());
                layer.set_outline_thickness(0.5);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(*y)), false),
                        (Point::new(Mm(*x2), Mm(*y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// The CV as PDF bytes.
pub fn render(services: &[Service], skills: &[Skill]) -> Result<Vec<u8>, CvError> {
    let layout = layout(services, skills);

    let (doc, first_page, first_layer) =
        PdfDocument::new("Samuel Adomeh - CV", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CvError(format!("{e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CvError(format!("{e:?}")))?;

    let mut pages = layout.pages.iter();
    if let Some(elements) = pages.next() {
        draw(&doc.get_page(first_page).get_layer(first_layer), elements, &regular, &bold);
    }
    for elements in pages {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        draw(&doc.get_page(page).get_layer(layer), elements, &regular, &bold);
    }

    doc.save_to_bytes().map_err(|e| CvError(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i32, title: &str, description: &str) -> Service {
        Service {
            id,
            title: title.into(),
            slug: String::new(),
            icon: String::new(),
            description: description.into(),
            detailed_description: String::new(),
            process: vec![],
            technologies: vec![],
            order: id,
        }
    }

    fn skill(id: i32, name: &str, category: &str) -> Skill {
        Skill {
            id,
            name: name.into(),
            category: category.into(),
            proficiency: 90,
        }
    }

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn skills_group_by_category_in_first_seen_order() {
        let skills = vec![
            skill(1, "AWS", "Cloud Platforms"),
            skill(2, "Docker", "Containerization"),
            skill(3, "Azure", "Cloud Platforms"),
        ];
        assert_eq!(
            skill_rows(&skills),
            vec![
                ("Cloud Platforms", "AWS, Azure".to_string()),
                ("Containerization", "Docker".to_string()),
            ]
        );
    }

    #[test]
    fn layout_lists_every_service_and_fixed_section() {
        let services = vec![
            service(1, "Cloud Architecture", "Multi-cloud landing zones"),
            service(2, "CI/CD Pipelines", "GitLab and GitHub Actions automation"),
        ];
        let cv = layout(&services, &[skill(1, "Terraform", "Infrastructure as Code")]);
        let texts: Vec<&str> = cv.texts().collect();

        for expected in [
            NAME,
            ROLE,
            "PROFESSIONAL SUMMARY",
            "Cloud Architecture",
            "CI/CD Pipelines",
            "MSC in Computer Engineer",
            "Full Stack Web Developer",
            "Infrastructure as Code",
            "Terraform",
            LANGUAGES,
            "KEY HIGHLIGHTS",
        ] {
            assert!(texts.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn layout_is_deterministic_and_stays_on_the_page() {
        let services: Vec<Service> = (1..=6)
            .map(|i| service(i, &format!("Service {i}"), &"long description ".repeat(20)))
            .collect();

        let first = layout(&services, &[]);
        assert_eq!(first, layout(&services, &[]));

        for element in first.pages.iter().flatten() {
            if let Element::Text { x, y, .. } = element {
                assert!(*x >= MARGIN_X - 0.01 && *x < PAGE_WIDTH - MARGIN_X);
                assert!(*y >= MARGIN_Y - 0.01 && *y <= PAGE_HEIGHT - MARGIN_Y);
            }
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render(&[service(1, "Cloud", "AWS")], &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_safe_replaces_typographic_punctuation() {
        assert_eq!(pdf_safe("it\u{2019}s \u{2013} ok \u{2713}"), "it's - ok ");
    }
}
