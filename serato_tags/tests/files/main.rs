#![allow(missing_docs)]

mod container;
mod flac;
mod id3;
mod mp4;
mod ogg;
pub(crate) mod util;
