//! Reading and writing frequencies.

pub mod read;

pub mod text;

pub mod write;
