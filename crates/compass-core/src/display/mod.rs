//! Display wrapper types for terminal output.
//!
//! Domain models stay free of presentation concerns; these wrappers borrow a
//! session, a result or a collection together with the content table and
//! format it as markdown (or plain text for sharing).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ FlowController, │    │ Display Wrapper │    │    Markdown     │
//! │ AdviceResult    │───▶│ + ContentTable  │───▶│ (terminal/file) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`step`]: the current step of a session ([`StepView`])
//! - [`advice`]: the result page ([`AdviceView`]) and share text
//!   ([`ShareText`])
//! - [`collections`]: archived results ([`StoredResults`]) and the catalog
//!   listing ([`CatalogView`])
//! - [`datetime`]: local time formatting
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use compass_core::{display::StepView, ContentTable, FlowController, Language, StepCatalog};
//!
//! let flow = FlowController::new(Arc::new(StepCatalog::default()), Language::En);
//! let content = ContentTable::builtin();
//!
//! let page = StepView::new(&flow, &content).to_string();
//! assert!(page.contains("Knee Load Compass"));
//! ```

pub mod advice;
pub mod collections;
pub mod datetime;
pub mod step;

pub use advice::{AdviceView, ShareText};
pub use collections::{CatalogView, StoredResults};
pub use datetime::LocalDateTime;
pub use step::{ProgressBar, StepView};
