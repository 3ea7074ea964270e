#![allow(dead_code)]

pub mod content_server;
pub mod fixtures;
