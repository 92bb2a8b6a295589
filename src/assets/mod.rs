//! External asset collaborators
//!
//! Document code pairing and remote asset matching. The engine never parses
//! document formats or talks to storage itself; callers hand in plain text
//! and an implementation of [`RemoteAssetSource`].

pub mod codes;
pub mod matcher;

pub use codes::{parent_brand, split_coded_text, CodedEntry, ParentBrand};
pub use matcher::{match_code, media_kind, AssetLink, MediaKind, RemoteAsset, RemoteAssetSource};
