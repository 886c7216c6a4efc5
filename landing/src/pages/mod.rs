// Landing page views
// Developed by The LendCommunity Team (c)2025

mod landing;

pub use landing::LandingPage;
