#![allow(dead_code)] // each test binary uses a different slice of the writer

pub mod index_writer;
