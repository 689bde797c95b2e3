pub mod app;

pub mod config;

pub mod match_controller;
