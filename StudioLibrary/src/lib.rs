#![allow(non_snake_case)]

pub mod analysis;
pub mod studio;
pub mod utils;
pub mod web;
