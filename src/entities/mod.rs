//! Persistent gallery schema.

pub mod author;
pub mod category;
pub mod collection;
pub mod genre;
pub mod overall_rating;
pub mod product;
pub mod product_author;
pub mod product_genre;
pub mod rating;
pub mod review;
