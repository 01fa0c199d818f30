pub mod area;
pub mod load;
pub mod location;
pub mod view;
