pub mod paths;
pub mod profiles;

pub use paths::AwsPaths;
pub use profiles::{current_profile, current_profile_from, discover_profiles};
