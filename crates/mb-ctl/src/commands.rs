//! Subcommand implementations.

use clap::{Args, Subcommand};
use mb_client::{predicate, response, Client, Imposter, ImposterBuilder, StubBuilder};
use serde_json::{json, Value};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install an imposter built from flags
    Create(CreateArgs),
    /// Show the imposter on a port, including recorded requests
    Get { port: u16 },
    /// Remove the imposter on a port (succeeds if none is installed)
    Delete { port: u16 },
    /// Remove every imposter
    DeleteAll,
    /// List installed imposters
    List,
    /// Count requests recorded by the imposter on a port
    Count { port: u16 },
    /// Drop the requests recorded by the imposter on a port
    ClearRequests { port: u16 },
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Protocol: http, https, tcp or smtp
    #[arg(long, default_value = "http")]
    pub protocol: String,

    /// Port to listen on (0 lets the server pick)
    #[arg(long, default_value = "0")]
    pub port: u16,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Record incoming requests
    #[arg(long)]
    pub record: bool,

    /// Match requests whose path equals this value
    #[arg(long)]
    pub path: Option<String>,

    /// Match requests whose method equals this value
    #[arg(long)]
    pub method: Option<String>,

    /// Status code of the stub response (default 200)
    #[arg(long)]
    pub status: Option<u16>,

    /// Response header as NAME:VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Response body
    #[arg(long)]
    pub body: Option<String>,
}

impl CreateArgs {
    fn has_stub(&self) -> bool {
        self.path.is_some()
            || self.method.is_some()
            || self.status.is_some()
            || !self.headers.is_empty()
            || self.body.is_some()
    }
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Build the imposter described by `create` flags.
///
/// A stub is added only when a matcher or response flag is given; its
/// predicates are attached directly, so the server ANDs them.
pub fn build_imposter(args: &CreateArgs) -> anyhow::Result<Imposter> {
    let mut imposter = ImposterBuilder::new()
        .protocol(args.protocol.as_str())
        .port(args.port)
        .record_requests(args.record);

    if let Some(name) = &args.name {
        imposter = imposter.name(name.as_str());
    }

    if args.has_stub() {
        let mut stub = StubBuilder::new();
        if let Some(path) = &args.path {
            stub = stub.predicate(predicate::equals().path(path.as_str()).build()?);
        }
        if let Some(method) = &args.method {
            stub = stub.predicate(predicate::equals().method(method.as_str()).build()?);
        }

        let mut reply = response::is().headers(args.headers.iter().cloned());
        if let Some(status) = args.status {
            reply = reply.status_code(status);
        }
        if let Some(body) = &args.body {
            reply = reply.body(body.as_str());
        }

        imposter = imposter.stub(stub.response(reply.build()?).build()?);
    }

    Ok(imposter.build()?)
}

/// Run a subcommand and return what should be printed.
pub fn run(client: &Client, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Create(args) => {
            let created = client.create_imposter(&build_imposter(&args)?)?;
            info!("Created imposter on port {}", created.port);
            serde_json::to_value(created)?
        }
        Command::Get { port } => serde_json::to_value(client.get_imposter(port)?)?,
        Command::Delete { port } => {
            let deleted = client.delete_imposter(port)?;
            if deleted.is_empty() {
                info!("No imposter was installed on port {}", port);
            }
            serde_json::to_value(deleted)?
        }
        Command::DeleteAll => {
            let deleted = client.delete_all_imposters()?;
            info!("Deleted {} imposter(s)", deleted.len());
            json!({ "imposters": deleted })
        }
        Command::List => json!({ "imposters": client.list_imposters()? }),
        Command::Count { port } => json!({
            "port": port,
            "numberOfRequests": client.number_of_requests(port)?,
        }),
        Command::ClearRequests { port } => {
            serde_json::to_value(client.clear_recorded_requests(port)?)?
        }
    };
    Ok(output)
}
