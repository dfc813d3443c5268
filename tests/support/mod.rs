#![allow(dead_code)]

pub mod content_server;
pub mod folio_env;
