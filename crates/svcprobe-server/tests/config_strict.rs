#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use svcprobe_server::config::{self, ServiceConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:3000"
labels:
  namespace: "prod"
  podname: "web-0" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.labels.namespace, "default");
    assert_eq!(cfg.labels.pod, "unknown");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_empty_labels() {
    let bad_listen = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad_listen).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");

    let empty_pod = r#"
version: 1
labels:
  pod: ""
"#;
    let err = config::load_from_str(empty_pod).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn env_overrides_file_labels() {
    let mut cfg = config::load_from_str(
        r#"
version: 1
labels:
  namespace: "from-file"
  pod: "file-pod"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [("POD_NAME", "web-7"), ("SVCPROBE_LISTEN", "127.0.0.1:9000")]
        .into_iter()
        .collect();
    cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
    cfg.validate().unwrap();

    assert_eq!(cfg.labels.namespace, "from-file");
    assert_eq!(cfg.labels.pod, "web-7");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
}

#[test]
fn defaults_are_valid() {
    ServiceConfig::default().validate().unwrap();
}
