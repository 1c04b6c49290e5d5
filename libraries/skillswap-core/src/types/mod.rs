mod ids;
mod profile;

pub use ids::UserId;
pub use profile::{NewProfile, PublicProfile, UserProfile};
