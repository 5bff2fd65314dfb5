//! Tool Page Model
//!
//! Content shape rendered by the tool page template, the metadata derived
//! from it, and the single page-head slot pages claim on mount.

use crate::catalog::Icon;
use crate::config::SiteConfig;

/// Content of one `/tools/<slug>` page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolPageContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub integrations: Option<&'static [&'static str]>,
    /// Long-form paragraphs shown below the call-to-action
    pub article: Option<&'static [&'static str]>,
    pub is_coming_soon: bool,
}

impl ToolPageContent {
    pub fn path(&self) -> String {
        format!("/tools/{}", self.slug)
    }

    /// Main call-to-action; inert while the tool is not yet available
    pub fn primary_action(&self) -> CallToAction {
        if self.is_coming_soon {
            CallToAction {
                label: "Coming Soon",
                href: "#",
                enabled: false,
            }
        } else {
            CallToAction {
                label: "Get Started",
                href: "/contacts",
                enabled: true,
            }
        }
    }

    /// "Contact Sales" link, offered only for available tools
    pub fn contact_sales(&self) -> Option<CallToAction> {
        (!self.is_coming_soon).then_some(CallToAction {
            label: "Contact Sales",
            href: "/contacts",
            enabled: true,
        })
    }

    pub fn meta(&self, config: &SiteConfig) -> PageMeta {
        PageMeta::new(config, self.title, self.description)
    }
}

/// Link-styled call-to-action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    /// Disabled actions render without navigation
    pub enabled: bool,
}

impl CallToAction {
    /// Navigation target, `None` when disabled
    pub fn target(&self) -> Option<&'static str> {
        self.enabled.then_some(self.href)
    }
}

/// Title and description a page writes into the document head
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Metadata for a page titled `title`, branded with the site name
    pub fn new(config: &SiteConfig, title: &str, description: &str) -> Self {
        Self {
            title: format!("{} | {}", title, config.site_name),
            description: description.to_string(),
        }
    }
}

/// The document's title/description, owned by whichever page mounted last.
///
/// No history is kept: releasing does not restore the previous page's
/// values, the next page to mount overwrites them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageHead {
    owner: Option<String>,
    title: String,
    description: String,
}

impl PageHead {
    pub fn claim(&mut self, owner: &str, meta: &PageMeta) {
        self.owner = Some(owner.to_string());
        self.title.clone_from(&meta.title);
        self.description.clone_from(&meta.description);
    }

    /// Give up ownership if `owner` still holds the slot
    pub fn release(&mut self, owner: &str) -> bool {
        if self.owner.as_deref() == Some(owner) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: ToolPageContent = ToolPageContent {
        slug: "demo",
        title: "Demo",
        description: "A demo tool",
        icon: Icon::Bot,
        features: &["Fast"],
        benefits: &["Cheap"],
        integrations: None,
        article: None,
        is_coming_soon: false,
    };

    #[test]
    fn test_available_tool_links_to_contacts() {
        let action = PAGE.primary_action();
        assert_eq!(action.target(), Some("/contacts"));
        assert_eq!(action.label, "Get Started");
        assert_eq!(PAGE.contact_sales().and_then(|a| a.target()), Some("/contacts"));
    }

    #[test]
    fn test_coming_soon_does_not_navigate() {
        let page = ToolPageContent {
            is_coming_soon: true,
            ..PAGE
        };
        let action = page.primary_action();
        assert!(!action.enabled);
        assert_ne!(action.href, "/contacts");
        assert_eq!(action.target(), None);
        assert!(page.contact_sales().is_none());
    }

    #[test]
    fn test_meta_derivation() {
        let meta = PAGE.meta(&SiteConfig::default());
        assert_eq!(meta.title, "Demo | Emerald AI");
        assert_eq!(meta.description, "A demo tool");
        assert_eq!(PAGE.path(), "/tools/demo");
    }

    #[test]
    fn test_page_head_last_writer_wins() {
        let config = SiteConfig::default();
        let first = PageMeta::new(&config, "First", "one");
        let second = PageMeta::new(&config, "Second", "two");
        let mut head = PageHead::default();

        head.claim("first", &first);
        head.claim("second", &second);

        // the first page unmounting late must not touch the slot
        assert!(!head.release("first"));
        assert_eq!(head.owner(), Some("second"));
        assert_eq!(head.title(), "Second | Emerald AI");

        assert!(head.release("second"));
        assert_eq!(head.owner(), None);
        assert_eq!(head.description(), "two");
    }
}
