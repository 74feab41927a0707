mod error;
pub use error::{Error, IntoError};

pub mod metadata;
pub use metadata::{ClassMetadata, MetadataHandle};

mod queue;
pub use queue::{Buildable, Queue, QueueHandle};

mod registry;
pub use registry::{Arg, MacroOutput, MacroRegistry};

mod naming;
pub use naming::{DefaultNamingStrategy, NamingStrategy};

mod fluent;
pub use fluent::{Dates, Fields, Fluent, Relations};

pub mod builder;
pub use builder::{configure, Builder};

/// A Result type alias that uses Mapwright's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
