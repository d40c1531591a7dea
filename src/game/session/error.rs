use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The session can not move from one status to the other
    IllegalTransition {
        from: SessionStatus,
        to: SessionStatus,
    },
    /// No sponsor has this key
    UnknownSponsor(String),
    /// A sponsor profile has an unusable value. Holds the sponsor key and what is wrong.
    InvalidProfile(String, String),
    /// The simulation parameters can not be run with
    InvalidConfig(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IllegalTransition { from, to } => {
                write!(f, "session can not go from {:?} to {:?}", from, to)
            }
            Self::UnknownSponsor(key) => write!(f, "no sponsor named {:?}", key),
            Self::InvalidProfile(key, reason) => write!(f, "sponsor {}: {}", key, reason),
            Self::InvalidConfig(reason) => write!(f, "invalid simulation config: {}", reason),
        }
    }
}

impl Error for SessionError {}
