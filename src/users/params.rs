//! Pagination, search and sorting parameters for GET /users

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Columns the backend can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Email,
    Age,
    Phone,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Email,
        SortField::Age,
        SortField::Phone,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Age => "age",
            SortField::Phone => "phone",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                format!("Invalid sort field '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(format!("Invalid sort direction '{}', expected asc or desc", s)),
        }
    }
}

/// Options for listing users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearchParams {
    pub page: u32,
    pub per_page: u32,
    /// Matched by the backend against name and email
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_dir: Option<SortDir>,
}

impl Default for UserSearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            sort_by: None,
            sort_dir: None,
        }
    }
}

impl UserSearchParams {
    /// Query pairs in the order the backend documents them
    ///
    /// `search`, `sortBy` and `sortDir` are only sent when set. A page or
    /// page size of 0 falls back to the defaults.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let page = if self.page == 0 { DEFAULT_PAGE } else { self.page };
        let per_page = if self.per_page == 0 { DEFAULT_PER_PAGE } else { self.per_page };

        let mut query = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            query.push(("sortBy", sort_by.to_string()));
        }
        if let Some(sort_dir) = self.sort_dir {
            query.push(("sortDir", sort_dir.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = UserSearchParams::default().to_query();
        assert_eq!(
            query,
            vec![("page", "1".to_string()), ("per_page", "10".to_string())]
        );
    }

    #[test]
    fn test_full_query() {
        let params = UserSearchParams {
            page: 2,
            per_page: 3,
            search: Some("ana".to_string()),
            sort_by: Some(SortField::CreatedAt),
            sort_dir: Some(SortDir::Desc),
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("page", "2".to_string()),
                ("per_page", "3".to_string()),
                ("search", "ana".to_string()),
                ("sortBy", "created_at".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_search_is_dropped() {
        let params = UserSearchParams {
            page: 0,
            search: Some(String::new()),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query[0], ("page", "1".to_string()));
        assert!(query.iter().all(|(k, _)| *k != "search"));
    }

    #[test]
    fn test_parse_sort_options() {
        assert_eq!("created_at".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert_eq!(" Name ".parse::<SortField>(), Ok(SortField::Name));
        assert!("id".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDir>(), Ok(SortDir::Desc));
        assert!("up".parse::<SortDir>().is_err());
    }
}
