use thiserror::Error;

/// Classification of a [`DomainError`], for structural checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    NameTooLong,
    Encode,
    Dial,
    Transport,
    NoAnswer,
    NoSuchHost,
    ServerMisbehaving,
    TooManyRedirects,
    Config,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidName => "invalid_name",
            ErrorKind::NameTooLong => "name_too_long",
            ErrorKind::Encode => "encode",
            ErrorKind::Dial => "dial",
            ErrorKind::Transport => "transport",
            ErrorKind::NoAnswer => "no_answer",
            ErrorKind::NoSuchHost => "no_such_host",
            ErrorKind::ServerMisbehaving => "server_misbehaving",
            ErrorKind::TooManyRedirects => "too_many_redirects",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("lookup {name}: invalid domain name")]
    InvalidName { name: String },

    #[error("lookup {name}: name too long")]
    NameTooLong { name: String },

    #[error("lookup {name}: internal error - cannot pack message: {reason}")]
    Encode { name: String, reason: String },

    #[error("lookup {name}: cannot reach {server}: {reason}")]
    Dial {
        name: String,
        server: String,
        reason: String,
    },

    #[error("lookup {name}{on}: {reason}", on = on_server(.server))]
    Transport {
        name: String,
        server: Option<String>,
        reason: String,
    },

    #[error("lookup {name}{on}: no answer from server", on = on_server(.server))]
    NoAnswer {
        name: String,
        server: Option<String>,
    },

    #[error("lookup {name}{on}: no such host", on = on_server(.server))]
    NoSuchHost {
        name: String,
        server: Option<String>,
    },

    #[error("lookup {name} on {server}: server misbehaving (rcode {rcode})")]
    ServerMisbehaving {
        name: String,
        server: String,
        rcode: String,
    },

    #[error("lookup {name} on {server}: too many redirects")]
    TooManyRedirects { name: String, server: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

fn on_server(server: &Option<String>) -> String {
    match server {
        Some(server) => format!(" on {}", server),
        None => String::new(),
    }
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidName { .. } => ErrorKind::InvalidName,
            DomainError::NameTooLong { .. } => ErrorKind::NameTooLong,
            DomainError::Encode { .. } => ErrorKind::Encode,
            DomainError::Dial { .. } => ErrorKind::Dial,
            DomainError::Transport { .. } => ErrorKind::Transport,
            DomainError::NoAnswer { .. } => ErrorKind::NoAnswer,
            DomainError::NoSuchHost { .. } => ErrorKind::NoSuchHost,
            DomainError::ServerMisbehaving { .. } => ErrorKind::ServerMisbehaving,
            DomainError::TooManyRedirects { .. } => ErrorKind::TooManyRedirects,
            DomainError::Config(_) => ErrorKind::Config,
            DomainError::Io(_) => ErrorKind::Io,
        }
    }

    /// The queried name, for every error raised by a lookup.
    pub fn name(&self) -> Option<&str> {
        match self {
            DomainError::InvalidName { name }
            | DomainError::NameTooLong { name }
            | DomainError::Encode { name, .. }
            | DomainError::Dial { name, .. }
            | DomainError::Transport { name, .. }
            | DomainError::NoAnswer { name, .. }
            | DomainError::NoSuchHost { name, .. }
            | DomainError::ServerMisbehaving { name, .. }
            | DomainError::TooManyRedirects { name, .. } => Some(name),
            DomainError::Config(_) | DomainError::Io(_) => None,
        }
    }

    /// The server that was contacted, when one was.
    pub fn server(&self) -> Option<&str> {
        match self {
            DomainError::Dial { server, .. }
            | DomainError::ServerMisbehaving { server, .. }
            | DomainError::TooManyRedirects { server, .. } => Some(server),
            DomainError::Transport { server, .. }
            | DomainError::NoAnswer { server, .. }
            | DomainError::NoSuchHost { server, .. } => server.as_deref(),
            DomainError::InvalidName { .. }
            | DomainError::NameTooLong { .. }
            | DomainError::Encode { .. }
            | DomainError::Config(_)
            | DomainError::Io(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::NoAnswer
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NoSuchHost
    }

    /// Whether a lookup may still try another form of the name after this
    /// failure. Transport, dial and encode failures end the lookup.
    pub fn allows_fallback(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NoAnswer
                | ErrorKind::NoSuchHost
                | ErrorKind::ServerMisbehaving
                | ErrorKind::TooManyRedirects
        )
    }
}
