// Sorting demo
// Runs each scenario against the backend with a page size of 3 and reports
// the names that came back first. A failing scenario is logged and skipped.

use crate::api::{ApiError, UserService};
use crate::users::{SortDir, SortField, UserSearchParams};

const DEMO_PAGE_SIZE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingExample {
    pub name: &'static str,
    pub description: &'static str,
    pub sort_by: SortField,
    pub sort_dir: SortDir,
}

pub const SORTING_EXAMPLES: &[SortingExample] = &[
    SortingExample {
        name: "Sort by Name (A-Z)",
        description: "Users sorted alphabetically by name",
        sort_by: SortField::Name,
        sort_dir: SortDir::Asc,
    },
    SortingExample {
        name: "Sort by Name (Z-A)",
        description: "Users sorted reverse alphabetically by name",
        sort_by: SortField::Name,
        sort_dir: SortDir::Desc,
    },
    SortingExample {
        name: "Sort by Age (Oldest First)",
        description: "Users sorted by age, oldest first",
        sort_by: SortField::Age,
        sort_dir: SortDir::Desc,
    },
    SortingExample {
        name: "Sort by Age (Youngest First)",
        description: "Users sorted by age, youngest first",
        sort_by: SortField::Age,
        sort_dir: SortDir::Asc,
    },
    SortingExample {
        name: "Sort by Join Date (Newest First)",
        description: "Users sorted by join date, newest first",
        sort_by: SortField::CreatedAt,
        sort_dir: SortDir::Desc,
    },
    SortingExample {
        name: "Sort by Join Date (Oldest First)",
        description: "Users sorted by join date, oldest first",
        sort_by: SortField::CreatedAt,
        sort_dir: SortDir::Asc,
    },
];

impl SortingExample {
    pub fn params(&self) -> UserSearchParams {
        UserSearchParams {
            per_page: DEMO_PAGE_SIZE,
            sort_by: Some(self.sort_by),
            sort_dir: Some(self.sort_dir),
            ..Default::default()
        }
    }
}

/// Outcome of one scenario
#[derive(Debug)]
pub struct SortingReport {
    pub example: &'static SortingExample,
    pub names: Result<Vec<String>, ApiError>,
}

/// Run every scenario in order; failures do not stop the run
pub async fn demonstrate_sorting<S: UserService>(service: &S) -> Vec<SortingReport> {
    let mut reports = Vec::with_capacity(SORTING_EXAMPLES.len());

    for example in SORTING_EXAMPLES {
        let names = match service.list_users(&example.params()).await {
            Ok(page) => Ok(page
                .users
                .into_iter()
                .take(DEMO_PAGE_SIZE as usize)
                .map(|u| u.name)
                .collect()),
            Err(e) => {
                log::error!("Error with {}: {}", example.name, e);
                Err(e)
            }
        };
        reports.push(SortingReport { example, names });
    }

    reports
}

pub fn render_sorting(reports: &[SortingReport]) -> String {
    let mut out = String::new();
    out.push_str("🔄 Sorting Functionality Demo\n");
    out.push_str("==============================\n");

    for report in reports {
        match &report.names {
            Ok(names) => {
                out.push_str(&format!("\n📊 {}\n", report.example.name));
                out.push_str(&format!("   {}\n", report.example.description));
                out.push_str(&format!("   First 3 users: {}\n", names.join(", ")));
            }
            Err(e) => out.push_str(&format!("\nError with {}: {}\n", report.example.name, e)),
        }
    }

    out.push_str("\n✨ Features:\n");
    out.push_str("- Server-side sorting for performance\n");
    out.push_str("- Works with pagination\n");
    out.push_str("- Maintains search functionality\n");
    out.push_str("- Sortable columns: Name, Email, Age, Phone, Created At, Updated At\n");
    out.push_str("- Sort directions: Ascending (asc) and Descending (desc)\n");
    out
}
