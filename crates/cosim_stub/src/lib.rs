//! Reading a vendor-generated PS7 stub.
//!
//! [`parse`] extracts the entity name, the verbatim port list and which
//! optional interface groups are present. [`resolve_all`] then derives the
//! five AXI width parameters of every present interface from the stub's own
//! vector declarations.

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod parser;
pub mod resolve;

pub use descriptor::{DetectedPort, StubDescriptor};
pub use error::StubError;
pub use parser::{parse, PS7_MARKER};
pub use resolve::{
    describe_for_build, resolve, resolve_all, AxiInterfaceParams, BuildDefine, ResolvedInterfaces,
};
