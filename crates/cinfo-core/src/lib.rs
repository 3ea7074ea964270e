pub mod config;
pub mod logging;

pub mod decode;
pub mod error;
pub mod probe;
pub mod report;
pub mod transport;

pub use decode::{ContentKind, ImageSize};
pub use error::{ProbeError, ProbeResult, UnavailableCause};
pub use probe::{ContentLength, ContentProbe};
pub use report::ProbeReport;
pub use transport::{BodySink, TransferMode, TransportOptions};
