//! Domain types and pure logic for the shutterdare photo-challenge game.
//!
//! No I/O lives here: the database layer is in `shutterdare-db`, the
//! vision-service adapter in `shutterdare-vision`, and the HTTP server
//! in `shutterdare-api`.

pub mod error;
pub mod types;
pub mod upload;
pub mod vocab;
