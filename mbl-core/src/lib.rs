pub mod booking;
pub mod catalog;
pub mod format;
pub mod normalize;

pub use booking::{Addons, BookingSubmission, CanonicalBooking, Contact, Guest, Price};
pub use catalog::Catalog;
pub use format::render_message;
pub use normalize::{local_timestamp_label, normalize, NormalizeError};
