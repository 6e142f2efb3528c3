//! Testing infrastructure for gidl.
//!
//! Extraction only ever sees a resolved [`Package`](crate::frontend::Package),
//! so tests build packages in memory instead of writing source trees:
//!
//! - **[`PackageBuilder`]**: fluent builder producing the declarations and
//!   syntax trees a frontend would report for a set of type declarations
//! - **[`MemoryFrontend`]**: a [`Frontend`](crate::frontend::Frontend) serving
//!   prebuilt packages
//!
//! # Quick Start
//!
//! ```rust
//! use gidl::extraction::{extract, ExtractOptions};
//! use gidl::frontend::NativeType;
//! use gidl::testkit::{PackageBuilder, RecordBuilder};
//!
//! let package = PackageBuilder::new("example.com/p")
//!     .record(
//!         RecordBuilder::new("Person")
//!             .doc("Person that exists.")
//!             .field("Name", NativeType::basic("string")),
//!     )
//!     .build();
//!
//! let model = extract(&package, ExtractOptions::default());
//! assert_eq!(model.get("example.com/p.Person").unwrap().description, "Person that exists.");
//! ```

pub mod helpers;
pub mod memory;

pub use helpers::{PackageBuilder, RecordBuilder};
pub use memory::MemoryFrontend;
