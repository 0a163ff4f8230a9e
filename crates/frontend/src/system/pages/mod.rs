mod home;
mod landing;

pub use home::HomePage;
pub use landing::LandingPage;
