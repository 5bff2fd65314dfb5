//! # site-core
//!
//! Platform-independent logic behind the marketing site: consent, the
//! contact form pipeline, the tool catalog and the tool page model.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         site-core                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │   Consent   │  │ Contact Form │  │ Catalog / Tool Page │  │
//! │  │ Store+Dialog│  │ Gate+Pipeline│  │  Content + PageHead │  │
//! │  └──────┬──────┘  └──────┬───────┘  └─────────────────────┘  │
//! │         │                │                                   │
//! │  KeyValueStore    FormTransport + AnalyticsSink              │
//! └─────────┼────────────────┼───────────────────────────────────┘
//!           ▼                ▼
//!     localStorage      fetch / window.dataLayer     (site-web)
//! ```
//!
//! Browser access sits behind the `KeyValueStore`, `FormTransport` and
//! `AnalyticsSink` traits so everything here runs in native unit tests.

pub mod catalog;
pub mod config;
pub mod consent;
pub mod contact;
pub mod content;
pub mod error;
pub mod routes;
pub mod storage;
pub mod tool_page;

pub use catalog::{Icon, ToolEntry, ToolGroup, TOOL_GROUPS};
pub use config::SiteConfig;
pub use consent::{ConsentCategory, ConsentDialog, ConsentSettings, ConsentStatus, ConsentStore};
pub use contact::{ContactForm, FormPhase, SubmitOutcome};
pub use error::{Result, SiteError};
pub use routes::Route;
pub use storage::{KeyValueStore, MemoryStore};
pub use tool_page::{CallToAction, PageHead, PageMeta, ToolPageContent};
