//! Command line and environment configuration for the server binary.

use crate::decider::{Decider, SeededDecider, ThreadRngDecider};
use clap::Parser;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

/// HTTP service returning configurable faults and latency
#[derive(Debug, Clone, Parser)]
#[command(name = "fault-api", version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "FAULT_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "FAULT_API_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, env = "FAULT_API_LOG", default_value = "info")]
    pub log: String,

    /// Seed for the fault generator, for reproducible fault sequences
    #[arg(long, env = "FAULT_API_SEED")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Default `tracing` filter directives.
    pub fn log_filter(&self) -> String {
        format!("fault_api={level},tower_http={level}", level = self.log)
    }

    /// Decider for random faults: seeded when a seed is configured.
    pub fn decider(&self) -> Arc<dyn Decider> {
        match self.seed {
            Some(seed) => Arc::new(SeededDecider::new(seed)),
            None => Arc::new(ThreadRngDecider),
        }
    }
}
