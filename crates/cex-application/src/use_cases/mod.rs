//! Use case implementations

pub mod explore_service;

pub use explore_service::ExploreServiceImpl;
