//! Pipeline stages for image-to-document conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ decode ──▶ docx | pdf
//! (dir)   (image)    (one emitter per output format)
//! ```
//!
//! 1. [`scan`]   — list the input directory, filter by recognized extension,
//!    sort lexicographically
//! 2. [`decode`] — read and decode one file; failures are per-file and
//!    non-fatal
//! 3. [`encode`] — PNG-encode a decoded image for embedding in containers
//!    that expect an encoded stream
//! 4. [`docx`]   — append pages to a Word document, one image per page
//! 5. [`pdf`]    — build one multi-page PDF, or one single-page PDF per
//!    image
//!
//! Everything runs on the caller's thread, strictly in scan order.

pub mod decode;
pub mod docx;
pub mod encode;
pub mod pdf;
pub mod scan;
