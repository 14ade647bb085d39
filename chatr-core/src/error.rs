use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatrError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the command dispatch engine. Everything except `Configuration` raised by
/// `initialize` is delivered through the exception channel, never returned to the host.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Registration error for '{key}': {reason}")]
    Registration { key: String, reason: String },

    #[error("Command '{key}' failed: {source}")]
    HandlerExecution {
        key: String,
        #[source]
        source: CommandError,
    },

    #[error("Tokenize error: {0}")]
    Tokenize(String),

    #[error("Service not ready (phase: {phase})")]
    NotReady { phase: String },
}

/// Error returned by a command handler.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("{0}")]
    Failed(String),

    #[error("Handler panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChatrError>;
