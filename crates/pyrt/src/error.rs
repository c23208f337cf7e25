use thiserror::Error;

/// An error raised by the runtime.
///
/// Most operations absorb what Python would raise and return a sentinel
/// instead. This type is only produced at the few sites that must fail: the
/// fallible indexers, tuple unpacking of the wrong arity and checked floor
/// division. Generated code can also raise it directly through
/// [PyError::bad_value].
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PyError {
    kind: Box<PyErrorKind>,
}

impl PyError {
    /// Construct a divide-by-zero error.
    pub fn divide_by_zero<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::from(PyErrorKind::DivideByZero {
            message: message.into(),
        })
    }

    /// Construct an index-out-of-range error.
    pub fn index_out_of_range<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::from(PyErrorKind::IndexOutOfRange {
            message: message.into(),
        })
    }

    /// Construct a bad-value error, the equivalent of Python's `ValueError`.
    pub fn bad_value<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::from(PyErrorKind::BadValue {
            message: message.into(),
        })
    }

    /// Inspect the error kind.
    pub fn kind(&self) -> &PyErrorKind {
        &self.kind
    }

    /// Convert into the underlying error kind.
    pub fn into_kind(self) -> PyErrorKind {
        *self.kind
    }

    /// The message attached to the error.
    pub fn message(&self) -> &str {
        match &*self.kind {
            PyErrorKind::DivideByZero { message }
            | PyErrorKind::IndexOutOfRange { message }
            | PyErrorKind::BadValue { message } => message,
        }
    }
}

impl<E> From<E> for PyError
where
    PyErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Box::new(PyErrorKind::from(err)),
        }
    }
}

/// The kind of a [PyError].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PyErrorKind {
    /// Division or floor division by zero.
    #[error("division by zero: {message}")]
    DivideByZero {
        /// What was being divided.
        message: String,
    },
    /// A positional index outside of the sequence, or indexing a value
    /// which is not a sequence.
    #[error("index out of range: {message}")]
    IndexOutOfRange {
        /// Description of the failed access.
        message: String,
    },
    /// A value had the right type but an inappropriate content.
    #[error("value error: {message}")]
    BadValue {
        /// Description of the bad value.
        message: String,
    },
}
