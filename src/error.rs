use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Unknown value for method: {0:#04x}")]
	UnknownMethod(u8),

	#[error("Malformed RLE stream: {0}")]
	MalformedStream(String),

	#[error("File {} already exists", .0.display())]
	OutputExists(PathBuf),

	#[error("File {} doesn't exist", .0.display())]
	InputNotFound(PathBuf),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

impl RleError {
	/// Process exit code used by the command line front end.
	pub fn exit_code(&self) -> i32 {
		match self {
			RleError::InputNotFound(_) => 3,
			_ => 1,
		}
	}
}

pub type Result<T> = std::result::Result<T, RleError>;
