//! Translation of the assignment universe into an integer linear program.

mod build;
mod constraints;
mod edge;

pub use build::{build_program, AssignmentProgram};
pub use constraints::assemble;
pub use edge::{Edge, EdgeCatalog};
