mod bundle;
mod creator;
mod navbar;
mod not_found;

pub use bundle::BundlePage;
pub use creator::CreatorPage;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
