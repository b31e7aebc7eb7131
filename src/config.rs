use crate::error::RleError;
use std::fmt;
use std::str::FromStr;

/// Container tag for [`Method::A`] (`b'!'`).
pub const METHOD_A_TAG: u8 = 0x21;
/// Container tag for [`Method::B`].
pub const METHOD_B_TAG: u8 = 0x8A;

/// Run-length encoding variant, identified on the wire by its leading tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Every run becomes a `[count][value]` pair.
    A,
    /// Lone bytes pass through, runs become `[value][value][count]`.
    B,
}

impl Method {
    pub fn tag(self) -> u8 {
        match self {
            Method::A => METHOD_A_TAG,
            Method::B => METHOD_B_TAG,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            METHOD_A_TAG => Some(Method::A),
            METHOD_B_TAG => Some(Method::B),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::A => write!(f, "method-a"),
            Method::B => write!(f, "method-b"),
        }
    }
}

impl FromStr for Method {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "method-a" => Ok(Method::A),
            "b" | "method-b" => Ok(Method::B),
            _ => Err(RleError::ConfigError(format!("Invalid method: {}", s))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub method: Method,
    /// Replace an existing output file instead of refusing.
    pub overwrite: bool,
    pub progress: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            method: Method::A,
            overwrite: false,
            progress: false,
        }
    }
}

impl CodecConfig {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}
