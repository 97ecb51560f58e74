//! Request routing: single-symbol fetches, live-price fallback, and the
//! batch table builders.

mod history;
mod quotes;
mod table;
