//! Tool Catalog
//!
//! Static, ordered navigation catalog: categories of tool links, each
//! pointing at a `/tools/<slug>` page.

/// Named icon reference; rendering is left to the stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    MessageSquare,
    MessageSquareMore,
    MessageCircle,
    Instagram,
    Phone,
    Bot,
    Brain,
    Code,
    Users,
    Ticket,
    Puzzle,
    Table2,
    Shield,
    Search,
    Mail,
    Headphones,
    Cloud,
    Building2,
    AlertTriangle,
    Home,
}

impl Icon {
    /// Kebab-case name used for the `icon-<name>` CSS class
    pub fn name(&self) -> &'static str {
        match self {
            Icon::MessageSquare => "message-square",
            Icon::MessageSquareMore => "message-square-more",
            Icon::MessageCircle => "message-circle",
            Icon::Instagram => "instagram",
            Icon::Phone => "phone",
            Icon::Bot => "bot",
            Icon::Brain => "brain",
            Icon::Code => "code",
            Icon::Users => "users",
            Icon::Ticket => "ticket",
            Icon::Puzzle => "puzzle",
            Icon::Table2 => "table-2",
            Icon::Shield => "shield",
            Icon::Search => "search",
            Icon::Mail => "mail",
            Icon::Headphones => "headphones",
            Icon::Cloud => "cloud",
            Icon::Building2 => "building-2",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Home => "home",
        }
    }

    pub fn css_class(&self) -> String {
        format!("icon icon-{}", self.name())
    }
}

/// One navigable tool link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolEntry {
    pub icon: Icon,
    pub name: &'static str,
    pub to: &'static str,
    /// Currently promoted
    pub hot: bool,
    /// Listed but not yet available
    pub coming: bool,
}

impl ToolEntry {
    const fn new(icon: Icon, name: &'static str, to: &'static str) -> Self {
        Self {
            icon,
            name,
            to,
            hot: false,
            coming: false,
        }
    }

    const fn hot(mut self) -> Self {
        self.hot = true;
        self
    }

    const fn coming(mut self) -> Self {
        self.coming = true;
        self
    }

    /// Last path segment of `to`
    pub fn slug(&self) -> &'static str {
        self.to.rsplit('/').next().unwrap_or(self.to)
    }
}

/// Named category of tool links
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolGroup {
    pub name: &'static str,
    pub entries: &'static [ToolEntry],
}

/// The catalog, in navigation order
pub static TOOL_GROUPS: &[ToolGroup] = &[
    ToolGroup {
        name: "AI Tools for Business",
        entries: &[
            ToolEntry::new(Icon::MessageSquare, "AI Chat Bot", "/tools/ai-chat-bot").hot(),
            ToolEntry::new(Icon::Phone, "AI Voice Bot", "/tools/ai-voice-bot").hot(),
            ToolEntry::new(Icon::Bot, "AI Avatar", "/tools/ai-avatar").hot(),
            ToolEntry::new(Icon::Brain, "AI Assistant", "/tools/ai-assistant").hot(),
            ToolEntry::new(Icon::Code, "Custom Development", "/tools/custom-development"),
            ToolEntry::new(Icon::Users, "Counseling", "/tools/counseling"),
        ],
    },
    ToolGroup {
        name: "Messaging",
        entries: &[
            ToolEntry::new(Icon::MessageSquare, "Facebook Messenger", "/tools/facebook-messenger")
                .hot(),
            ToolEntry::new(Icon::Instagram, "Instagram", "/tools/instagram").hot(),
            ToolEntry::new(Icon::MessageCircle, "WhatsApp", "/tools/whatsapp").hot(),
        ],
    },
    ToolGroup {
        name: "Integration",
        entries: &[
            ToolEntry::new(Icon::Ticket, "Jira", "/tools/jira"),
            ToolEntry::new(Icon::Puzzle, "Zapier", "/tools/zapier"),
            ToolEntry::new(Icon::Table2, "Tables", "/tools/tables"),
        ],
    },
    ToolGroup {
        name: "Security & Search",
        entries: &[
            ToolEntry::new(Icon::Shield, "Anti-Spam", "/tools/anti-spam").hot(),
            ToolEntry::new(Icon::Search, "Best Search", "/tools/best-search").hot(),
        ],
    },
    ToolGroup {
        name: "Communication",
        entries: &[
            ToolEntry::new(Icon::Mail, "Email", "/tools/email"),
            ToolEntry::new(Icon::MessageSquareMore, "Slack", "/tools/slack"),
            ToolEntry::new(Icon::Headphones, "LiveChat", "/tools/livechat"),
            ToolEntry::new(Icon::MessageCircle, "Intercom", "/tools/intercom"),
        ],
    },
    ToolGroup {
        name: "Coming Soon",
        entries: &[
            ToolEntry::new(Icon::Cloud, "Salesforce", "/tools/salesforce").coming(),
            ToolEntry::new(Icon::Building2, "HubSpot", "/tools/hubspot").coming(),
            ToolEntry::new(Icon::MessageSquare, "Microsoft Teams", "/tools/microsoft-teams")
                .coming(),
        ],
    },
];

/// Every entry across all categories, in navigation order
pub fn entries() -> impl Iterator<Item = &'static ToolEntry> {
    TOOL_GROUPS.iter().flat_map(|group| group.entries.iter())
}

/// Promoted entries, in navigation order
pub fn hot_tools() -> impl Iterator<Item = &'static ToolEntry> {
    entries().filter(|entry| entry.hot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_group_has_entries() {
        for group in TOOL_GROUPS {
            assert!(!group.entries.is_empty(), "empty group {}", group.name);
        }
    }

    #[test]
    fn test_paths_pairwise_distinct() {
        let mut seen = HashSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.to), "duplicate path {}", entry.to);
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn test_paths_are_tool_routes() {
        for entry in entries() {
            assert!(entry.to.starts_with("/tools/"), "{}", entry.to);
            assert!(!entry.slug().is_empty());
        }
    }

    #[test]
    fn test_coming_entries_never_hot() {
        for entry in entries().filter(|e| e.coming) {
            assert!(!entry.hot, "{} is both hot and coming", entry.name);
        }
    }

    #[test]
    fn test_hot_tools() {
        let hot: Vec<_> = hot_tools().map(ToolEntry::slug).collect();
        assert_eq!(hot.len(), 9);
        assert_eq!(hot[0], "ai-chat-bot");
        assert!(hot.contains(&"whatsapp"));
    }
}
