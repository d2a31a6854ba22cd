//! Application Configuration
//!
//! Storage slot names and the products endpoint, provided via context.

use leptos::prelude::*;
use todo_core::{THEME_KEY, TODOS_KEY};

pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage slot holding the todo list
    pub todos_key: String,
    /// localStorage slot holding the colour scheme
    pub theme_key: String,
    pub products_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_key: TODOS_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            products_url: PRODUCTS_URL.to_string(),
        }
    }
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
