pub mod model;
pub mod notifier;
pub mod rest;
pub mod service;
