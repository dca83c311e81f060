//! Anchored toast notifications.
//!
//! The crate owns the parts of a notification widget that do not depend on a
//! particular renderer: the per-anchor stacking order, the offset formulas,
//! and the frame-driven lifecycle that takes a notification from mount to
//! removal. Rendering primitives are reached through the [`Host`] trait.
//!
//! # Architecture
//!
//! ```text
//!   create() ──► Element (detached)
//!                   │
//!                   ▼
//!   Notifier::mount ──► Host::attach ──► Collection::register ──► reflow
//!                                                                   │
//!   Notifier::frame(ts) ──► Notification::tick ──► close ──► remove ─┘
//! ```
//!
//! - [`layout`]: pure placement math (base point, offset, `calc()` output).
//! - [`collection`]: anchor → ordered ids; insertion order is stacking order.
//! - [`lifecycle`]: per-notification phases, resolved properties, frame clock.
//! - [`notifier`]: the service tying host, collection and frames together.
//! - [`element`]: detached elements, attribute values and content nodes.
//! - [`headless`]: an in-memory [`Host`] for tests and server-side use.
//!
//! Timing is driven exclusively by [`Notifier::frame`]; nothing in this crate
//! reads a wall clock.

pub mod collection;
pub mod config;
pub mod element;
pub mod error;
pub mod frames;
pub mod headless;
pub mod host;
pub mod layout;
pub mod lifecycle;
pub mod notifier;
pub mod style;

pub use collection::Collection;
pub use config::{Defaults, NotifyConfig};
pub use element::{AttrValue, Element, ElementNode, Node, create};
pub use error::{ConfigError, NotifyError};
pub use herald_primitives::{Anchor, BoxMetrics, BoxSize, ElementId, Kind, Margins};
pub use host::{Host, NotifyEvent, ShadowTree};
pub use layout::Placement;
pub use lifecycle::{Notification, Phase, Props};
pub use notifier::Notifier;

/// Tag reserved for notification elements unless configured otherwise.
pub const DEFAULT_TAG_NAME: &str = "herald-notify";
