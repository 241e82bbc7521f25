//! # flowtitle
//!
//! Design an animated gradient title once, export it four ways.
//!
//! A title is a flat configuration record: text, gradient, animation speed,
//! direction and easing, font, background zoom and an optional mirrored
//! reflection. From that record flowtitle derives the gradient CSS and
//! renders the same effect as Tailwind, styled-components, Framer Motion or
//! plain HTML/CSS.
//!
//! # Architecture: Resolve Once, Render Many
//!
//! ```text
//! TitleConfig ──resolve──▶ ResolvedGradient ──┬─▶ tailwind  (component + config)
//!      ▲                                      ├─▶ styled
//!      │ apply_update / with_custom_gradient  ├─▶ framer
//!      │                                      ├─▶ vanilla   (html + css)
//!   CLI / editor                              └─▶ preview   (standalone HTML)
//! ```
//!
//! The gradient is resolved exactly once per snapshot and shared, so every
//! export embeds the same CSS. All of it is pure: no I/O happens outside
//! [`store`], [`config`], [`clipboard`] and the binary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | `GradientDefinition`, the built-in presets, custom-first merge |
//! | [`state`] | `TitleConfig`, partial updates with clamping, saving custom gradients |
//! | [`resolve`] | Active gradient lookup, manual vs shorthand mode, CSS expressions |
//! | [`export`] | The four code generators and `ExportBundle` |
//! | [`editor`] | Custom gradient stop editor |
//! | [`preview`] | Standalone HTML preview page (Maud) |
//! | [`store`] | JSON state record persisted between runs |
//! | [`config`] | `flowtitle.toml` tool settings |
//! | [`clipboard`] | Copy generated blocks to the system clipboard |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Forgiving by Default
//!
//! Nothing in the title pipeline can fail. Unknown gradient ids fall back
//! to the first preset, out-of-range numbers are clamped, unreadable state
//! is replaced by defaults, and removing the last two stops of a gradient
//! is ignored. Errors only surface for real I/O and for malformed
//! `flowtitle.toml`, where a typo should be loud.
//!
//! ## Targets Disagree on Purpose
//!
//! styled-components and Framer Motion always animate horizontally and
//! Framer Motion has no reflection. Only the Tailwind component falls back
//! to a placeholder for an empty title. These differences are part of the
//! output format and are kept stable.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod export;
pub mod output;
pub mod preview;
pub mod resolve;
pub mod state;
pub mod store;
