//! Data types returned by the Holidaze API.
//!
//! The API is loose about shapes: owners and bookers show up as strings,
//! URLs or objects, media as bare URLs or `{url, alt}` objects. These types
//! accept all of those and keep the raw form where it matters.

mod booking;
mod identity;
mod media;
mod profile;
mod venue;

pub use booking::Booking;
pub use identity::{Identity, IdentityRecord};
pub use media::Media;
pub use profile::Profile;
pub use venue::Venue;
