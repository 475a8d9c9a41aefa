//! Typed field extraction on top of [`ofxtree_element::Element`].
//!
//! Every scalar kind comes in two flavours on [`FieldReader`]:
//!
//! - `required_*` returns a [`FieldError`] when the field is missing or does
//!   not parse as the target type.
//! - `try_*` returns `None` in both cases and never fails.
//!
//! Both flavours take an [`ExtractConfig`] that controls value trimming and
//! tag name matching.

pub mod config;
pub mod error;
pub mod fields;
pub mod scalar;
pub mod timestamp;

pub use config::ExtractConfig;
pub use error::FieldError;
pub use fields::FieldReader;
pub use scalar::ScalarKind;
pub use timestamp::parse_timestamp;
