//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//!
//! What gets traced:
//!
//! - **Collections**: startup, every write (`info`), every read (`debug`), shutdown with final size
//! - **Services**: one span per operation carrying the resource name and request id
//! - **Failures**: duplicate keys, missing parents and store errors (`warn`)
//!
//! ```bash
//! RUST_LOG=info cargo run      # writes and lifecycle
//! RUST_LOG=debug cargo run     # plus reads and lookups
//! ```
//!
//! With `RUST_LOG=info` a filing looks like:
//!
//! ```text
//! INFO Collection started collection="debtors"
//! INFO create{request_id=req-1}: Company accounts created company_accounts_id=...
//! INFO create{resource="small-full" request_id=req-1}: Inserted collection="small-full" id=...
//! INFO create{resource="small-full" request_id=req-1}: Saved collection="company-accounts" id=... replaced=true
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
