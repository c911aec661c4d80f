pub const CARD: &str = include_str!("card.jsx");

pub mod generated;
