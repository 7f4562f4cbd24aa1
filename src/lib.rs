//! comparison - Exact numeric comparison with localized presentation
//!
//! A [`Comparator`] holds the exact difference and relative change between a
//! value and a baseline. A [`Presenter`] turns that into view-friendly
//! strings: signed currency, percentages, arrows, CSS classes and inline
//! styles, with text looked up through a [`Translate`] implementation.
//!
//! ```
//! use comparison::{compare, MemoryBackend, NumberFormat};
//!
//! let translations = MemoryBackend::new("en");
//! let cmp = compare(100, 75, &translations).unwrap();
//! assert_eq!(cmp.percentage(&NumberFormat::default()).as_deref(), Some("+33%"));
//! assert_eq!(cmp.difference_as_currency(&NumberFormat::default()), "+$25.00");
//! assert_eq!(cmp.arrow(), "&uarr;");
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod output;
pub mod presenter;

pub use bigdecimal::BigDecimal;
pub use comparator::{Change, Comparator, Numeric};
pub use config::Config;
pub use error::{ComparisonError, Result};
pub use format::NumberFormat;
pub use i18n::{Fallback, MemoryBackend, Translate, Translation};
pub use presenter::{compare, compare_with, Description, Presenter};
