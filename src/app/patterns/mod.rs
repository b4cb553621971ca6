pub mod abstract_factory;
pub mod bridge;
pub mod builder;
pub mod factory;
pub mod hero;
pub mod iterator;
pub mod letters;
pub mod observer;
pub mod playwright;
pub mod prototype;
