//! Catalog Domain
//!
//! The two resources served by the API:
//!
//! - **Question** (`questoes`, database `principal`): a quiz question with its
//!   statement, subject, topic and difficulty level
//! - **Movie** (`filmes`, database `filme`): a movie with genre, running time,
//!   release year, age rating and creation timestamp
//!
//! Each entity comes with a `*Fields` type holding the writable columns as
//! optional values. The same type backs both create requests, where every
//! field is required, and partial updates.

pub mod movie;
pub mod question;

pub use movie::{Movie, MovieFields};
pub use question::{Question, QuestionFields};
