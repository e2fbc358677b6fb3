//! Access proxies: caching and token gating in front of product subjects.

pub mod access_policy;
pub mod access_proxy;

pub use access_policy::AccessPolicy;
pub use access_proxy::AccessProxy;
