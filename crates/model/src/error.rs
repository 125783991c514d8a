/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be delivered or answered (network failure,
    /// non-successful HTTP status).
    Transport,
    /// The endpoint answered with a payload this crate cannot interpret.
    Protocol,
    /// Any other errors.
    Other,
}
