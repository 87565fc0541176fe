// src/quiz/mod.rs

pub mod collector;
pub mod flow;
pub mod render;
pub mod ruleset;
pub mod session;
pub mod source;
pub mod submitter;
pub mod validator;
pub mod widget;
