//! Domain model (listing shapes, errors).
//!
//! botoo 自身は状態を持たないので、ここにあるのは
//! ストレージとのやり取りで一時的に使う型だけです。

pub mod errors;
pub mod listing;

pub use self::errors::FetchTextError;
pub use self::listing::{ListPage, ObjectSummary, is_folder_marker};
