pub mod clean;
pub mod duration;
pub mod explore;
pub mod filing;
pub mod load;
pub mod report;
