//! Endpoint paths for the directory service
//!
//! Paths are relative to the configured API base URL. Free-text search terms
//! travel as query parameters, not path segments.

pub const PROFESSIONALS: &str = "/professionals";
pub const UPLOAD_PROFESSIONAL: &str = "/professionals/upload";
pub const SEARCH_BY_TYPE: &str = "/professionals/search/type";
pub const SEARCH_BY_SPECIALIZATION: &str = "/professionals/search/specialization";
pub const STATS: &str = "/professionals/stats";
pub const TYPE_CATALOG: &str = "/professionals/types";

pub fn professional(id: &str) -> String {
    format!("{}/{}", PROFESSIONALS, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_path() {
        assert_eq!(professional("abc-123"), "/professionals/abc-123");
    }

    #[test]
    fn test_static_paths() {
        assert_eq!(UPLOAD_PROFESSIONAL, "/professionals/upload");
        assert_eq!(SEARCH_BY_TYPE, "/professionals/search/type");
        assert_eq!(STATS, "/professionals/stats");
    }
}
