//! Plain-text rendering of pages for the terminal.

use myron_core::activity::{ActivityType, DashboardSnapshot};
use myron_core::form::{form_heading, submit_label};
use myron_core::image::resolve_image_url;
use myron_core::models::{Category, Contact, Donation, Event};
use myron_core::navigation::{Route, BRAND, SIDEBAR};
use myron_core::resource::{Draft, FormMode, Resource, ResourceKind};

use crate::categories::{CategoryOptions, SELECT_PLACEHOLDER};

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A resource row that can be shown in a list table.
pub trait Tabular: Resource {
    /// Column headers after the leading `#` column.
    fn headers() -> &'static [&'static str];

    /// Cell values matching [`Tabular::headers`]. Image paths are resolved
    /// against `image_base`.
    fn cells(&self, image_base: &str) -> Vec<String>;
}

fn image_cell(image_base: &str, image: Option<&str>) -> String {
    image
        .filter(|p| !p.is_empty())
        .map(|p| resolve_image_url(image_base, p))
        .unwrap_or_default()
}

impl Tabular for Category {
    fn headers() -> &'static [&'static str] {
        &["Image", "Title"]
    }

    fn cells(&self, image_base: &str) -> Vec<String> {
        vec![
            image_cell(image_base, self.image.as_deref()),
            self.title.clone(),
        ]
    }
}

impl Tabular for Donation {
    fn headers() -> &'static [&'static str] {
        &["Image", "Title", "Category", "Goal"]
    }

    fn cells(&self, image_base: &str) -> Vec<String> {
        vec![
            image_cell(image_base, self.image.as_deref()),
            self.title.clone(),
            self.category_title.clone().unwrap_or_default(),
            format!("₹ {}", self.donation_goal),
        ]
    }
}

impl Tabular for Event {
    fn headers() -> &'static [&'static str] {
        &["Image", "Title", "Category", "Location"]
    }

    fn cells(&self, image_base: &str) -> Vec<String> {
        vec![
            image_cell(image_base, self.image.as_deref()),
            self.title.clone(),
            self.category_title.clone().unwrap_or_default(),
            self.location.clone(),
        ]
    }
}

impl Tabular for Contact {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Number", "Message"]
    }

    fn cells(&self, _image_base: &str) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.number.clone(),
            self.message.clone(),
        ]
    }
}

/// A list page's table, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Set when there are no rows, e.g. `"No donations found"`.
    pub empty_message: Option<String>,
}

impl TableView {
    pub fn build<R: Tabular>(items: &[R], image_base: &str) -> Self {
        let headers = std::iter::once("#")
            .chain(R::headers().iter().copied())
            .map(str::to_string)
            .collect();

        let rows: Vec<Vec<String>> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                std::iter::once((index + 1).to_string())
                    .chain(item.cells(image_base))
                    .collect()
            })
            .collect();

        let empty_message = rows.is_empty().then(|| R::KIND.empty_message());

        Self {
            headers,
            rows,
            empty_message,
        }
    }

    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = vec![format_row(&self.headers, &widths)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(self.rows.iter().map(|row| format_row(row, &widths)));
        if let Some(message) = &self.empty_message {
            lines.push(message.clone());
        }
        lines.join("\n")
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Page heading for a resource list.
pub fn list_heading(kind: ResourceKind) -> String {
    kind.plural_title().to_string()
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Render an open form: heading, field values and the submit label.
///
/// With `categories`, the selected category is shown by title.
pub fn render_form<D: Draft>(
    kind: ResourceKind,
    mode: FormMode,
    draft: &D,
    categories: Option<&CategoryOptions>,
) -> String {
    let category_title = categories
        .zip(draft.category_id())
        .and_then(|(options, id)| options.title_of(id));

    let mut lines = vec![form_heading(kind, mode)];
    let fields = draft.display_fields();
    let label_width = fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, value) in fields {
        let value = match (label, category_title) {
            ("Category", Some(title)) => title.to_string(),
            _ => value,
        };
        lines.push(format!("  {label:<label_width$}  {value}"));
    }
    if let Some(label) = submit_label(kind, mode) {
        lines.push(format!("[{label}]"));
    }
    lines.join("\n")
}

/// The category selector: placeholder first, then `id  title` per option.
pub fn render_category_options(options: &CategoryOptions) -> String {
    let mut lines = vec![SELECT_PLACEHOLDER.to_string()];
    for (id, title) in options.options() {
        lines.push(format!("  {id:>4}  {title}"));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Dashboard and shell
// ---------------------------------------------------------------------------

pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut lines = vec![
        "Dashboard".to_string(),
        "Overview of your NGO activities and data".to_string(),
        String::new(),
    ];

    for card in snapshot.counts.stat_cards() {
        lines.push(format!(
            "{:<12}{:>6}   {}",
            card.title,
            card.value,
            card.route.path()
        ));
    }

    if !snapshot.activity.is_empty() {
        lines.push(String::new());
        lines.push("Recent Activity".to_string());
        for item in &snapshot.activity {
            let kind = activity_label(item.kind);
            lines.push(format!("- [{kind}] {}", item.text));
        }
    }

    lines.join("\n")
}

fn activity_label(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::Donation => "donation",
        ActivityType::Event => "event",
        ActivityType::Contact => "contact",
    }
}

/// Sidebar with the current page marked.
pub fn render_sidebar(current: Route) -> String {
    let mut lines = vec![BRAND.to_string()];
    for route in SIDEBAR {
        let marker = if route == current { '>' } else { ' ' };
        lines.push(format!("{marker} {:<10} {}", route.sidebar_label(), route.path()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use myron_core::activity::{ActivityItem, DashboardCounts};

    const BASE: &str = "http://api.test/";

    fn donation() -> Donation {
        Donation {
            id: 1,
            category_id: Some(2),
            category_title: Some("Relief".into()),
            title: "Blankets".into(),
            description: String::new(),
            donation_goal: "5000".into(),
            image: Some("/media/b.png".into()),
            created_at: None,
        }
    }

    #[test]
    fn empty_list_has_no_rows_and_an_indicator() {
        let view = TableView::build::<Donation>(&[], BASE);
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some("No donations found"));
        assert!(view.to_text().ends_with("No donations found"));
    }

    #[test]
    fn rows_are_numbered_and_images_resolved() {
        let view = TableView::build(&[donation()], BASE);
        assert_eq!(view.headers, ["#", "Image", "Title", "Category", "Goal"]);
        assert_eq!(
            view.rows[0],
            [
                "1",
                "http://api.test/media/b.png",
                "Blankets",
                "Relief",
                "₹ 5000"
            ]
        );
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn contact_table_has_no_image_column() {
        let contact = Contact {
            id: 1,
            name: "Asha".into(),
            email: "a@b.org".into(),
            number: "9876543210".into(),
            message: "Hi".into(),
        };
        let view = TableView::build(&[contact], BASE);
        assert_eq!(view.headers, ["#", "Name", "Email", "Number", "Message"]);
    }

    #[test]
    fn text_columns_align() {
        let text = TableView::build(&[donation()], BASE).to_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].find(" | "), lines[2].find(" | "));
    }

    #[test]
    fn view_form_has_no_submit_label() {
        let draft = donation().to_draft();
        let text = render_form(ResourceKind::Donation, FormMode::View, &draft, None);
        assert!(text.starts_with("View Donation"));
        assert!(!text.contains('['));

        let text = render_form(ResourceKind::Donation, FormMode::Edit, &draft, None);
        assert!(text.ends_with("[Update Donation]"));
    }

    fn categories() -> CategoryOptions {
        CategoryOptions::new(vec![
            Category {
                id: 2,
                title: "Relief".into(),
                image: None,
            },
            Category {
                id: 5,
                title: "Schooling".into(),
                image: None,
            },
        ])
    }

    #[test]
    fn view_form_shows_category_title() {
        let draft = donation().to_draft();
        let text = render_form(
            ResourceKind::Donation,
            FormMode::View,
            &draft,
            Some(&categories()),
        );
        let line = text.lines().find(|l| l.trim_start().starts_with("Category")).unwrap();
        assert!(line.ends_with("Relief"));
        assert!(!line.ends_with('2'));
    }

    #[test]
    fn unknown_category_falls_back_to_id() {
        let mut row = donation();
        row.category_id = Some(9);
        let text = render_form(
            ResourceKind::Donation,
            FormMode::View,
            &row.to_draft(),
            Some(&categories()),
        );
        assert!(text.lines().any(|l| l.trim_start().starts_with("Category") && l.ends_with('9')));
    }

    #[test]
    fn category_selector_lists_live_options() {
        let text = render_category_options(&categories());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Select Category");
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["2", "Relief"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["5", "Schooling"]);
    }

    #[test]
    fn dashboard_hides_empty_activity() {
        let text = render_dashboard(&DashboardSnapshot::default());
        assert!(text.contains("Categories"));
        assert!(!text.contains("Recent Activity"));
    }

    #[test]
    fn dashboard_lists_activity() {
        let snapshot = DashboardSnapshot {
            counts: DashboardCounts {
                categories: 1,
                donations: 2,
                events: 3,
                contacts: 4,
            },
            activity: vec![ActivityItem {
                text: "New contact from C".into(),
                time: None,
                kind: ActivityType::Contact,
            }],
        };
        let text = render_dashboard(&snapshot);
        assert!(text.contains("Recent Activity"));
        assert!(text.contains("- [contact] New contact from C"));
    }

    #[test]
    fn sidebar_marks_current_page() {
        let text = render_sidebar(Route::Events);
        assert!(text.starts_with("Myron"));
        assert!(text.contains("> Events"));
        assert!(text.contains("  Category"));
    }
}
