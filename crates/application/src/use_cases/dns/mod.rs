mod resolve_iteratively;

pub use resolve_iteratively::{ResolveIterativelyUseCase, DEFAULT_MAX_REFERRAL_DEPTH};
