mod creator;

pub use creator::CreatorError;
