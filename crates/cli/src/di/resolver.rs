use rootwalk_application::services::ServerDirectory;
use rootwalk_application::use_cases::ResolveIterativelyUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::UdpNameserverClient;
use rootwalk_infrastructure::system::SystemHostResolver;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResolverServices {
    pub directory: Arc<ServerDirectory>,
    pub resolve: Arc<ResolveIterativelyUseCase>,
}

impl ResolverServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let roots = config.root_servers()?;

        let directory = Arc::new(match config.resolver.rng_seed {
            Some(seed) => {
                debug!(seed, "Seeding bootstrap server selection");
                ServerDirectory::with_seed(roots, seed)
            }
            None => ServerDirectory::new(roots),
        });

        info!("Loaded {} root servers", directory.len());
        for server in directory.servers() {
            debug!(name = %server.name, address = ?server.address, "Root server");
        }

        let client = Arc::new(UdpNameserverClient::from_config(&config.resolver));
        let host_resolver = Arc::new(SystemHostResolver::new(config.resolver.query_timeout()));

        let resolve = Arc::new(
            ResolveIterativelyUseCase::new(client, Arc::clone(&directory), host_resolver)
                .with_max_referral_depth(config.resolver.max_referral_depth),
        );

        Ok(Self { directory, resolve })
    }
}
