//! # reviewboard
//!
//! Client core for a single-page review and photo gallery site: visitors
//! browse categorized testimonials with star ratings and submit new
//! ones, a rotating profile slideshow and a photo gallery pull from
//! remote stores, and an "about me" block is editable in place.
//!
//! All persistence lives behind remote JSON-over-HTTP stores; this crate
//! wires the image ingestion pipeline, the upload coordinator, and the
//! per-tab flows over them. The presentation shell supplies only a toast
//! sink and a file-picker control.

pub mod deps;
pub mod wiring;

pub use deps::AppDeps;
pub use wiring::{core_from_repository, infra_deps, Core};

pub use rb_app;
pub use rb_core;
pub use rb_infra;
