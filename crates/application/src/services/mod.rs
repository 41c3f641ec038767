mod nameserver_selector;
mod root_fallback;
mod server_directory;

pub use nameserver_selector::NameserverSelector;
pub use root_fallback::RootFallbackPolicy;
pub use server_directory::ServerDirectory;
