pub mod dns;

pub use dns::ResolveIterativelyUseCase;
