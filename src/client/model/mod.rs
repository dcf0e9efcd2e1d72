pub mod auth;
pub mod cache;
pub mod category;
pub mod error;
pub mod fact_form;
pub mod feed;
pub mod sort;
