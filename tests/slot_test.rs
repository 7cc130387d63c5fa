//! Slot flavours: derived (tuple and named), generic `Slot<Tag, T>`, `define_slots!`

use core::marker::PhantomData;

use pretty_assertions::assert_eq;
#[cfg(feature = "json")]
use serde::Serialize;
#[cfg(feature = "json")]
use serde_json::{json, Value};
use tola_opts::prelude::*;

#[derive(OptionSlot, Default)]
struct Port {
    value: u16,
}

enum TimeoutTag {}
type Timeout = Slot<TimeoutTag, u64>;

struct Scoped<T>(PhantomData<T>);
type ScopedTimeout = Slot<Scoped<TimeoutTag>, u64>;

define_slots! {
    /// Host to bind
    pub Host: String,
    pub Tags: Vec<String> => "Free-form labels",
    Verbose: bool => "Verbose output",
}

#[derive(OptionSpec, Default)]
struct ServerSpec {
    #[opt(js = "hostName", env = "SERVER_HOST")]
    host: Host,
    #[opt(env = "SERVER_PORT")]
    port: Port,
    #[opt(js = "timeoutSecs")]
    timeout: Timeout,
    tags: Tags,
    #[opt(js = "")]
    verbose: Verbose,
}

#[test]
fn test_named_payload_field() {
    let port = Port::new(8080);
    assert_eq!(*port.value(), 8080);
    assert_eq!(Port::name(), "Port");
    assert_eq!(port.into_value(), 8080);
}

#[test]
fn test_generic_slot() {
    let timeout: Timeout = 30.into();
    assert_eq!(*timeout, 30);
    assert_eq!(timeout, Timeout::new(30));
    assert_eq!(Timeout::default().into_value(), 0);
    // Same shape as derived slots: no module path
    assert_eq!(Timeout::name(), "TimeoutTag");
    assert!(ScopedTimeout::name().starts_with("Scoped<"));
}

#[test]
fn test_defined_slots() {
    let host = Host::from("localhost".to_string());
    assert_eq!(host, Host("localhost".into()));
    assert_eq!(host.clone().into_value(), "localhost");
    assert_eq!(Host::name(), "Host");
    assert_eq!(Verbose::default(), Verbose(false));
}

fn bound_server() -> OptionsBinder<'static, ServerSpec> {
    let mut binder = OptionsBinder::<ServerSpec>::with_default().unwrap();
    binder
        .assign(options![
            Host("0.0.0.0".into()),
            Port { value: 443 },
            Timeout::new(5),
            Tags(vec!["edge".into(), "eu".into()]),
        ])
        .unwrap();
    binder
}

#[test]
fn test_all_flavours_bind() {
    let binder = bound_server();

    let spec = binder.spec();
    assert_eq!(spec.host.0, "0.0.0.0");
    assert_eq!(spec.port.value, 443);
    assert_eq!(*spec.timeout, 5);
    assert!(!binder.is_set("verbose"));
    assert_eq!(
        binder.set_fields().collect::<Vec<_>>(),
        vec!["host", "port", "timeout", "tags"]
    );
}

#[test]
fn test_all_flavours_export_refs() {
    let binder = bound_server();

    let refs = binder.export_refs_with_tag("env");
    let keys: Vec<_> = refs.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["SERVER_HOST", "SERVER_PORT", "timeout", "tags"]);
    assert_eq!(refs[1].1.downcast_ref::<u16>(), Some(&443));
    assert_eq!(refs[2].1.downcast_ref::<u64>(), Some(&5));
    assert_eq!(
        refs[3].1.downcast_ref::<Vec<String>>().map(Vec::len),
        Some(2)
    );
}

#[test]
fn test_empty_alias_falls_back() {
    let binder = OptionsBinder::<ServerSpec>::with_default()
        .unwrap()
        .with(Verbose(true))
        .unwrap();

    let refs = binder.export_refs_with_tag("js");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].0, "verbose");
    assert_eq!(refs[0].1.downcast_ref::<bool>(), Some(&true));
}

#[cfg(feature = "json")]
#[test]
fn test_all_flavours_export() {
    let binder = bound_server();

    assert_eq!(
        Value::Object(binder.export_to_map_with_tag("js").unwrap()),
        json!({
            "hostName": "0.0.0.0",
            "port": 443,
            "timeoutSecs": 5,
            "tags": ["edge", "eu"],
        })
    );
    assert_eq!(
        binder.export_to_map_with_tag("env").unwrap().keys().collect::<Vec<_>>(),
        vec!["SERVER_HOST", "SERVER_PORT", "timeout", "tags"]
    );
}

#[cfg(feature = "json")]
#[test]
fn test_empty_alias_exports_field_name() {
    let binder = OptionsBinder::<ServerSpec>::with_default()
        .unwrap()
        .with(Verbose(true))
        .unwrap();

    let m = binder.export_to_map_with_tag("js").unwrap();
    assert_eq!(Value::Object(m), json!({ "verbose": true }));
}

#[cfg(feature = "json")]
#[derive(Serialize, Default, Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[cfg(feature = "json")]
#[derive(OptionSlot, Default)]
struct Upstream(Endpoint);

#[cfg(feature = "json")]
#[derive(OptionSpec, Default)]
struct ProxySpec {
    #[opt(js = "upstreamEndpoint")]
    upstream: Upstream,
    timeout: Timeout,
}

#[cfg(feature = "json")]
#[test]
fn test_struct_payload_export() {
    let endpoint = Endpoint { host: "10.0.0.2".into(), port: 8443, path: None };
    let binder = OptionsBinder::<ProxySpec>::with_default()
        .unwrap()
        .with(Upstream(endpoint))
        .unwrap();

    assert_eq!(binder.spec().upstream.0.port, 8443);
    assert_eq!(
        Value::Object(binder.export_to_map_with_tag("js").unwrap()),
        json!({ "upstreamEndpoint": { "host": "10.0.0.2", "port": 8443 } })
    );
    assert_eq!(
        Value::Object(binder.export_to_map().unwrap()),
        json!({ "upstream": { "host": "10.0.0.2", "port": 8443 } })
    );
}

#[test]
fn test_field_table() {
    let names: Vec<_> = ServerSpec::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["host", "port", "timeout", "tags", "verbose"]);
    assert_eq!(ServerSpec::NAME, "ServerSpec");

    let host = ServerSpec::field("host").unwrap();
    assert_eq!(host.slot_name, "Host");
    assert_eq!(host.tag("env"), Some("SERVER_HOST"));
    assert_eq!(host.tag("yaml"), None);
    assert_eq!(host.tag(""), None);
    assert_eq!(host.export_key(""), "host");

    let verbose = ServerSpec::field("verbose").unwrap();
    assert_eq!(verbose.tag("js"), None);
    assert_eq!(verbose.export_key("js"), "verbose");

    assert!(ServerSpec::field("missing").is_none());
}
