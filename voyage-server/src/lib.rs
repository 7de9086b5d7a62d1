//! Ocean voyage schedule server.
//!
//! A web application that answers: "Which of the voyages I care about
//! depart in this time window?" Voyages are derived by arithmetic from a
//! single known departure, so no timetable data is needed beyond the
//! keyword aliases users filter by.

pub mod config;
pub mod context;
pub mod domain;
pub mod keywords;
pub mod schedule;
pub mod web;
