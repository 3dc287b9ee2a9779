//! `lltz`: offline latitude/longitude to IANA timezone lookup over a compact
//! binary spatial index.
//!
//! Scope:
//! - on-disk format constants and the tagged-slot encoding (`formats`)
//! - bounds-checked reads over the index byte range (`bytes`)
//! - grid addressing and quadtree descent (`grid`)
//! - polygon containment via ray casting (`polygon`)
//! - nautical `Etc/GMT±N` fallback (`fallback`)
//! - the reader and lookup façade (`reader`)
//! - a convenience loader for a bundled data file (`locate`)
//!
//! Non-goal: building index files from boundary data (that is an offline
//! producer of the format; this crate only reads it).
//!
//! ## Contract (what you can rely on)
//!
//! - **Total**: `lookup` returns a non-empty list for every in-range point;
//!   oceans, poles, and the dateline resolve to nautical identifiers.
//! - **Pure**: a lookup is a function of `(bytes, lat, lon)` alone. No
//!   mutable state, no I/O, no internal caches; readers are freely shared
//!   across threads.
//! - **Fail closed**: a reader is only constructed over a byte range that
//!   starts with the `LLTZ1` magic, and any decode that would step outside
//!   the range (or follow an unterminated quadtree chain) reports
//!   [`LookupError::Corrupt`] instead of panicking.
//! - **Allocation-light**: the hot single-timezone path allocates only the
//!   returned one-element list; fallback identifiers are interned constants.
//!
//! ```no_run
//! # fn main() -> lltz::LookupResult<()> {
//! let reader = lltz::open_default()?;
//! assert_eq!(reader.lookup(51.5074, -0.1278)?, vec!["Europe/London"]);
//! assert_eq!(reader.lookup(0.0, -140.0)?, vec!["Etc/GMT+9"]);
//! # Ok(())
//! # }
//! ```

pub mod bytes;
pub mod error;
pub mod fallback;
pub mod formats;
pub mod grid;
pub mod locate;
pub mod polygon;
pub mod reader;

pub use error::{LookupError, LookupResult};
pub use locate::open_default;
pub use reader::IndexReader;
