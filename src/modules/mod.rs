// Bounded contexts
pub mod device;
pub mod movies;
pub mod navigation;
pub mod omdb;
