//! Tool Page Content
//!
//! One entry per catalog tool. Slugs match the last segment of the
//! catalog's `to` paths.

use crate::catalog::Icon;
use crate::tool_page::ToolPageContent;

const MESSAGING_INTEGRATIONS: &[&str] = &[
    "Facebook Messenger",
    "Instagram",
    "WhatsApp",
    "Slack",
    "Email",
    "LiveChat",
];

const CRM_INTEGRATIONS: &[&str] = &["Salesforce", "HubSpot", "Jira", "Zapier", "Google Sheets"];

pub static TOOL_PAGES: &[ToolPageContent] = &[
    ToolPageContent {
        slug: "ai-chat-bot",
        title: "AI Chat Bot",
        description: "Answer customer questions around the clock with a chat bot trained on your own products, policies and tone of voice.",
        icon: Icon::MessageSquare,
        features: &[
            "Trained on your website, documents and FAQs",
            "Natural conversations in more than 50 languages",
            "Hand-over to a human agent with full chat history",
            "Lead capture with qualification questions",
            "Analytics dashboard for conversations and conversions",
        ],
        benefits: &[
            "Instant answers at any hour",
            "Up to 70% fewer repetitive support tickets",
            "More qualified leads from existing traffic",
            "Consistent answers across every channel",
        ],
        integrations: Some(MESSAGING_INTEGRATIONS),
        article: Some(&[
            "A chat bot is only as good as the knowledge behind it. We start by indexing your website, help center and internal documents, then tune the bot's answers and tone with your team before it ever talks to a customer.",
            "Once live, every conversation is logged and scored. Questions the bot could not answer become a to-do list for new content, so the bot improves week after week.",
        ]),
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "ai-voice-bot",
        title: "AI Voice Bot",
        description: "Let a natural-sounding voice assistant pick up every call, answer routine questions and book appointments.",
        icon: Icon::Phone,
        features: &[
            "Human-like speech with low response latency",
            "Appointment booking straight into your calendar",
            "Call routing to the right department",
            "Call transcripts and summaries",
        ],
        benefits: &[
            "No missed calls, even outside business hours",
            "Shorter waiting times for callers",
            "Staff freed up for complex requests",
            "Scales with seasonal call volume",
        ],
        integrations: Some(&["Google Calendar", "Outlook", "Twilio", "SIP trunks"]),
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "ai-avatar",
        title: "AI Avatar",
        description: "Give your brand a face: a lifelike video avatar that presents products, onboards customers and answers questions.",
        icon: Icon::Bot,
        features: &[
            "Custom avatar look and voice",
            "Real-time conversation on your website",
            "Scripted video generation for campaigns",
            "Multilingual lip-synced output",
        ],
        benefits: &[
            "Memorable, personal customer experience",
            "Video content without a film crew",
            "Consistent brand presentation",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "ai-assistant",
        title: "AI Assistant",
        description: "An internal assistant that knows your documents and tools, drafts replies, summarizes meetings and automates busywork.",
        icon: Icon::Brain,
        features: &[
            "Search across company documents and wikis",
            "Email and message drafting",
            "Meeting summaries with action items",
            "Role-based access to sensitive data",
        ],
        benefits: &[
            "Hours saved per employee every week",
            "Faster onboarding of new team members",
            "Knowledge that stays in the company",
        ],
        integrations: Some(&["Google Workspace", "Microsoft 365", "Slack", "Notion", "Confluence"]),
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "custom-development",
        title: "Custom Development",
        description: "Bespoke AI solutions built around your processes, from prototype to production.",
        icon: Icon::Code,
        features: &[
            "Requirements workshop and feasibility study",
            "Prototype within weeks",
            "Integration with your existing systems",
            "Hosting in the EU on request",
        ],
        benefits: &[
            "A solution that fits your workflow exactly",
            "Full ownership of code and data",
            "Long-term maintenance and support",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "counseling",
        title: "Counseling",
        description: "Independent advice on where AI pays off in your business and how to introduce it safely.",
        icon: Icon::Users,
        features: &[
            "Process analysis and use-case mapping",
            "Vendor-neutral tool recommendations",
            "Data protection and compliance review",
            "Team training",
        ],
        benefits: &[
            "Clear priorities before spending budget",
            "Lower project risk",
            "Teams that know how to use the tools",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "facebook-messenger",
        title: "Facebook Messenger",
        description: "Automate replies on your Facebook page and turn Messenger conversations into customers.",
        icon: Icon::MessageSquare,
        features: &[
            "Instant replies to page messages",
            "Comment-to-message automation",
            "Product recommendations in chat",
            "Shared inbox for your team",
        ],
        benefits: &[
            "Faster response badge on your page",
            "More conversations from ads",
            "No message left unanswered",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "instagram",
        title: "Instagram",
        description: "Answer DMs, story replies and comments on Instagram automatically while keeping your brand voice.",
        icon: Icon::Instagram,
        features: &[
            "Automatic DM replies",
            "Story mention and reply handling",
            "Keyword-triggered flows",
            "Lead capture inside the chat",
        ],
        benefits: &[
            "Engaged followers get instant attention",
            "Campaign responses handled at scale",
            "Sales from social without extra staff",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "whatsapp",
        title: "WhatsApp",
        description: "Serve customers on the messenger they already use, with an AI agent on the official WhatsApp Business API.",
        icon: Icon::MessageCircle,
        features: &[
            "Official WhatsApp Business API access",
            "Template messages for notifications",
            "AI replies with human hand-over",
            "Broadcasts with opt-in management",
        ],
        benefits: &[
            "Very high open rates",
            "Personal support at scale",
            "Compliant messaging",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "jira",
        title: "Jira",
        description: "Turn customer conversations into well-formed Jira issues without copy and paste.",
        icon: Icon::Ticket,
        features: &[
            "Automatic issue creation from chats",
            "Field mapping and labels",
            "Status updates back to the customer",
        ],
        benefits: &[
            "Complete bug reports every time",
            "Customers stay informed",
            "Less manual triage",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "zapier",
        title: "Zapier",
        description: "Connect your AI agents to thousands of apps with Zapier triggers and actions.",
        icon: Icon::Puzzle,
        features: &[
            "Triggers for new leads and conversations",
            "Actions to send messages from any Zap",
            "No-code workflow setup",
        ],
        benefits: &[
            "Automations in minutes",
            "Works with the tools you already use",
            "No developer time needed",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "tables",
        title: "Tables",
        description: "Store leads, orders and conversation data in structured tables your bots can read and write.",
        icon: Icon::Table2,
        features: &[
            "Spreadsheet-style editor",
            "Bot read and write access",
            "CSV import and export",
            "Google Sheets sync",
        ],
        benefits: &[
            "One place for bot data",
            "Personalized answers from live data",
            "Easy reporting",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "anti-spam",
        title: "Anti-Spam",
        description: "Keep bots, spam and abuse out of your forms and chats with AI-based filtering.",
        icon: Icon::Shield,
        features: &[
            "Honeypot and behavior-based bot detection",
            "Content classification for spam and abuse",
            "Rate limiting per visitor",
            "Review queue for borderline cases",
        ],
        benefits: &[
            "Clean lead lists",
            "Protected support staff",
            "No annoying captchas for real users",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "best-search",
        title: "Best Search",
        description: "Semantic site search that understands what visitors mean, not just what they type.",
        icon: Icon::Search,
        features: &[
            "Meaning-based search across pages and documents",
            "Direct answers above the result list",
            "Typo tolerance and synonyms",
            "Search analytics",
        ],
        benefits: &[
            "Visitors find what they need",
            "Higher conversion from search",
            "Insight into what customers look for",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "email",
        title: "Email",
        description: "Let AI sort, answer and follow up on incoming email so your inbox stays under control.",
        icon: Icon::Mail,
        features: &[
            "Automatic categorization and priority",
            "Suggested or automatic replies",
            "Follow-up reminders",
        ],
        benefits: &[
            "Faster email response times",
            "Nothing slips through the cracks",
            "Consistent tone across the team",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "slack",
        title: "Slack",
        description: "Bring your AI assistant into Slack channels and direct messages.",
        icon: Icon::MessageSquareMore,
        features: &[
            "Answers in channels and DMs",
            "Slash commands for common tasks",
            "Escalation alerts from customer chats",
        ],
        benefits: &[
            "Knowledge where your team already works",
            "Fewer interruptions for experts",
            "Faster internal answers",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "livechat",
        title: "LiveChat",
        description: "Pair your LiveChat agents with an AI that answers first and hands over when it matters.",
        icon: Icon::Headphones,
        features: &[
            "AI first response in LiveChat",
            "Seamless transfer to agents",
            "Suggested replies for agents",
        ],
        benefits: &[
            "Shorter queues",
            "Agents focus on valuable chats",
            "Better customer satisfaction scores",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "intercom",
        title: "Intercom",
        description: "Extend Intercom with custom AI answers trained on your own knowledge base.",
        icon: Icon::MessageCircle,
        features: &[
            "Custom answers in the Intercom messenger",
            "Conversation tagging and routing",
            "Knowledge base sync",
        ],
        benefits: &[
            "More conversations resolved automatically",
            "Keep your existing Intercom setup",
            "Measurable support savings",
        ],
        integrations: None,
        article: None,
        is_coming_soon: false,
    },
    ToolPageContent {
        slug: "salesforce",
        title: "Salesforce",
        description: "Sync leads and conversations from your AI agents straight into Salesforce.",
        icon: Icon::Cloud,
        features: &[
            "Lead and contact sync",
            "Conversation history on the record",
            "Opportunity creation from qualified chats",
        ],
        benefits: &[
            "Sales sees every touchpoint",
            "No manual data entry",
            "Faster follow-up on hot leads",
        ],
        integrations: Some(CRM_INTEGRATIONS),
        article: None,
        is_coming_soon: true,
    },
    ToolPageContent {
        slug: "hubspot",
        title: "HubSpot",
        description: "Connect chats and forms to HubSpot contacts, deals and workflows.",
        icon: Icon::Building2,
        features: &[
            "Contact creation and enrichment",
            "Deal pipeline updates",
            "Workflow triggers from conversations",
        ],
        benefits: &[
            "Marketing and sales share one view",
            "Automated nurturing",
            "Cleaner CRM data",
        ],
        integrations: Some(CRM_INTEGRATIONS),
        article: None,
        is_coming_soon: true,
    },
    ToolPageContent {
        slug: "microsoft-teams",
        title: "Microsoft Teams",
        description: "Your AI assistant inside Microsoft Teams chats and channels.",
        icon: Icon::MessageSquare,
        features: &[
            "Answers in Teams chats and channels",
            "Meeting summaries",
            "Microsoft 365 document search",
        ],
        benefits: &[
            "Support for Microsoft-first companies",
            "Knowledge in the flow of work",
            "Enterprise-grade access control",
        ],
        integrations: None,
        article: None,
        is_coming_soon: true,
    },
];

/// Page content for a tool slug
pub fn find(slug: &str) -> Option<&'static ToolPageContent> {
    TOOL_PAGES.iter().find(|page| page.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::collections::HashSet;

    #[test]
    fn test_every_catalog_entry_has_a_page() {
        for entry in catalog::entries() {
            let page = find(entry.slug())
                .unwrap_or_else(|| panic!("no page for {}", entry.to));
            assert_eq!(page.path(), entry.to);
            assert_eq!(page.title, entry.name);
            assert_eq!(page.is_coming_soon, entry.coming, "{}", entry.name);
        }
    }

    #[test]
    fn test_every_page_is_in_the_catalog() {
        let paths: HashSet<_> = catalog::entries().map(|e| e.to).collect();
        for page in TOOL_PAGES {
            assert!(paths.contains(page.path().as_str()), "{} not listed", page.slug);
        }
        assert_eq!(TOOL_PAGES.len(), paths.len());
    }

    #[test]
    fn test_pages_have_content() {
        for page in TOOL_PAGES {
            assert!(!page.features.is_empty(), "{}", page.slug);
            assert!(!page.benefits.is_empty(), "{}", page.slug);
            assert!(!page.description.is_empty(), "{}", page.slug);
            if let Some(integrations) = page.integrations {
                assert!(!integrations.is_empty(), "{}", page.slug);
            }
        }
    }
}
