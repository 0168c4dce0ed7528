//! Controladores HTTP

pub mod render_controller;
