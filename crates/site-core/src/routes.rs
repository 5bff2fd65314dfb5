//! Route Resolution
//!
//! Shared by the front-end router and the preview server's SPA fallback.

use crate::content;
use crate::tool_page::ToolPageContent;

/// Page a path resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Privacy,
    CookiePolicy,
    Contacts,
    Tool(&'static ToolPageContent),
    NotFound,
}

impl Route {
    /// Resolve a request path; query strings and a trailing slash are ignored
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Route::Home,
            "/privacy" => Route::Privacy,
            "/cookie-policy" => Route::CookiePolicy,
            "/contacts" => Route::Contacts,
            other => other
                .strip_prefix("/tools/")
                .and_then(content::find)
                .map_or(Route::NotFound, Route::Tool),
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Route::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/privacy"), Route::Privacy);
        assert_eq!(Route::resolve("/cookie-policy/"), Route::CookiePolicy);
        assert_eq!(Route::resolve("/contacts?ref=nav"), Route::Contacts);
    }

    #[test]
    fn test_tool_routes() {
        match Route::resolve("/tools/zapier") {
            Route::Tool(page) => assert_eq!(page.title, "Zapier"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::resolve("/tools/fax"), Route::NotFound);
        assert_eq!(Route::resolve("/tools/"), Route::NotFound);
        assert_eq!(Route::resolve("/pricing"), Route::NotFound);
        assert!(!Route::resolve("/tools/zapier/extra").is_found());
    }
}
