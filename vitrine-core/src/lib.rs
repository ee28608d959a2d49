//! Headless logic for the studio landing page: the decorative particle
//! background and the image upload widget that hands off to WhatsApp.
//!
//! Nothing in here touches the DOM. The `vitrine-wasm` crate binds these
//! types to the browser.

pub mod config;
pub mod message;
pub mod notify;
pub mod particles;
pub mod random;
pub mod surface;
pub mod upload;

pub use config::{ConfigError, ParticleConfig, SiteConfig, UploadConfig};
pub use message::{compose_message, full_message, whatsapp_url};
pub use notify::{Phase, Transient};
pub use particles::{Connector, Particle, ParticleField, backing_size, particle_count};
pub use random::RandomSource;
pub use surface::{RadialGlow, Surface};
pub use upload::{FileMeta, SelectedFile, SelectionView, UploadError, UploadSelector};
