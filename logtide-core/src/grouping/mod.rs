mod engine;


pub use engine::{Grouper, Placement, group, starts_new_entry};
