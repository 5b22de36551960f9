//! Unified application error type.
//! All fallible layers (db, cli, config, export) return AppError so error
//! handling stays consistent across the crate. The derivation engine in
//! `core` is pure and never produces one.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid penalty points: {0}")]
    InvalidPoints(String),

    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Penalty reason must not be empty")]
    EmptyReason,

    // ---------------------------
    // Lookup failures
    // ---------------------------
    #[error("No session found with id {0}")]
    SessionNotFound(i64),

    #[error("No penalty found with id {0}")]
    PenaltyNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
