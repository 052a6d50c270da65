pub mod landing;
pub mod posts;
pub mod venues;
