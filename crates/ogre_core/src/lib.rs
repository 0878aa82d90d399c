//! Field-level access to SNES save files of *Ogre Battle: The March of the
//! Black Queen*.
//!
//! A save file is a 1 byte pad followed by three fixed-size slots. Every
//! field is addressed by a descriptor (offset, width, repetition count and
//! codec) from [`field::FIELDS`]. Open a slot with [`core_api::Engine`], read
//! and write fields through the returned [`core_api::Session`], then call
//! `save`, which refreshes the slot checksum before writing.

mod builtin_tables;
pub mod checksum;
pub mod codec;
pub mod core_api;
pub mod field;
pub mod layout;
pub mod reference;
pub mod slot;
pub mod store;
