//! Wire types shared by the accessors and screens.

mod auth;
mod destination;
mod profile;
mod rating;

pub use auth::{Credentials, Registration};
pub use destination::{Destination, DestinationDetail, GeoPoint, Photos, SavedDestination};
pub use profile::Profile;
pub use rating::{mean_rating, NewRating, Rating, RatingAuthor, Stars};
