#![deny(warnings)]

pub mod tasks;
