// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for the platform capabilities
//! - [`blob`]: Conversion of resource references into binary objects
//! - [`distribution`]: Download, copy, share and print operations
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use lens_share::application::distribution::Distributor;
//! use lens_share::domain::resource::ResourceReference;
//!
//! let distributor = Distributor::new(platform);
//! let reference = ResourceReference::new("https://example.com/a.jpg");
//! let result = distributor.copy_to_clipboard(&reference).await;
//! println!("{}", result.message_key());
//! ```

pub mod blob;
pub mod distribution;
pub mod port;
