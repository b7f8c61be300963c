//! Windows packaging.

pub mod appx;
