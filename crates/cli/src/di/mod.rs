mod resolver;

pub use resolver::ResolverServices;
