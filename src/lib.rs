//! Launchpad - a terminal starter app
//!
//! A todo list with filtering and input validation, recent SpaceX launches
//! fetched over GraphQL with bearer-token auth, and a demo login session.
//! Everything is reachable from the command line or the interactive UI.

pub mod cli;
pub mod domain;
pub mod graphql;
pub mod storage;

pub use domain::{Filter, FilterView, Session, TodoId, TodoItem, TodoStore, User, ValidationError};
pub use graphql::{ApiError, GraphqlClient, Launch};
